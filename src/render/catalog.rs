//! Static catalog of the site's sections.
//!
//! Item identity (keys, ids, categories, prices, links) is fixed here; every
//! visible label is resolved from the current translation document at render
//! time.

use serde::Serialize;

/// A service card, linked to its detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceItem {
    /// Key under `services.items`
    pub key: &'static str,
    pub link: &'static str,
}

/// A pricing tier. Prices are locale-invariant and never translated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricingTier {
    /// Key under `pricing.items`
    pub key: &'static str,
    pub price: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ProjectCategory {
    Corporate,
    #[serde(rename = "E-commerce")]
    Ecommerce,
    #[serde(rename = "Web App")]
    WebApp,
    Landing,
}

impl ProjectCategory {
    pub const ALL: [ProjectCategory; 4] = [
        ProjectCategory::Corporate,
        ProjectCategory::Ecommerce,
        ProjectCategory::WebApp,
        ProjectCategory::Landing,
    ];

    /// Value carried by the filter button's `data-filter` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectCategory::Corporate => "Corporate",
            ProjectCategory::Ecommerce => "E-commerce",
            ProjectCategory::WebApp => "Web App",
            ProjectCategory::Landing => "Landing",
        }
    }

    /// Key of the filter label under `portfolio.filters`.
    pub fn label_key(&self) -> &'static str {
        match self {
            ProjectCategory::Corporate => "corporate",
            ProjectCategory::Ecommerce => "ecommerce",
            ProjectCategory::WebApp => "webapp",
            ProjectCategory::Landing => "landing",
        }
    }

    pub fn parse(value: &str) -> Option<ProjectCategory> {
        Self::ALL.into_iter().find(|category| category.as_str() == value)
    }
}

/// A portfolio project. Its texts live under `portfolio.projects.{id}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortfolioItem {
    pub id: u32,
    pub category: ProjectCategory,
    pub link: &'static str,
}

/// A `<select>` whose options come from a fixed key list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionList {
    pub select_id: &'static str,
    pub keys: &'static [&'static str],
    /// Labels resolve from `{label_prefix}.{key}`
    pub label_prefix: &'static str,
    /// Selected when the previous value is absent or no longer offered
    pub default_key: &'static str,
}

impl OptionList {
    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(&key)
    }
}

pub const SITE_TYPES: &[&str] = &["Landing", "Business", "E-commerce", "Web App"];
pub const DESIGN_TIERS: &[&str] = &["Standard", "Premium", "Enterprise"];
pub const DEADLINES: &[&str] = &["Flexible", "Priority", "Urgent"];

/// Everything a page variant renders from.
#[derive(Debug, Clone)]
pub struct SiteCatalog {
    pub about_skills: Vec<&'static str>,
    pub services: Vec<ServiceItem>,
    pub why: Vec<&'static str>,
    pub pricing: Vec<PricingTier>,
    pub portfolio: Vec<PortfolioItem>,
    pub option_lists: Vec<OptionList>,
}

impl SiteCatalog {
    /// The catalog shipped with the site.
    pub fn standard() -> Self {
        Self {
            about_skills: vec!["frontend", "backend", "api", "performance", "seo"],
            services: vec![
                ServiceItem {
                    key: "Business Websites",
                    link: "services/business-websites.html",
                },
                ServiceItem {
                    key: "E-commerce",
                    link: "services/ecommerce.html",
                },
                ServiceItem {
                    key: "Web Applications",
                    link: "services/web-applications.html",
                },
                ServiceItem {
                    key: "Landing Pages",
                    link: "services/landing-pages.html",
                },
                ServiceItem {
                    key: "API Integrations",
                    link: "services/api-integrations.html",
                },
                ServiceItem {
                    key: "Speed Optimization",
                    link: "services/speed-optimization.html",
                },
                ServiceItem {
                    key: "SEO for Israeli Market",
                    link: "services/seo-israel.html",
                },
            ],
            why: vec![
                "Clean Code",
                "High Performance",
                "Modern UI/UX",
                "Fast Delivery",
                "Support After Launch",
                "Deep understanding of Israeli business needs",
            ],
            pricing: vec![
                PricingTier {
                    key: "Basic",
                    price: "₪3,500",
                },
                PricingTier {
                    key: "Business",
                    price: "₪7,500",
                },
                PricingTier {
                    key: "Premium",
                    price: "₪14,000",
                },
            ],
            portfolio: vec![
                PortfolioItem {
                    id: 1,
                    category: ProjectCategory::Corporate,
                    link: "https://example.com/project-legal",
                },
                PortfolioItem {
                    id: 2,
                    category: ProjectCategory::Ecommerce,
                    link: "https://example.com/project-fashion",
                },
                PortfolioItem {
                    id: 3,
                    category: ProjectCategory::WebApp,
                    link: "https://example.com/project-logistics",
                },
                PortfolioItem {
                    id: 4,
                    category: ProjectCategory::Landing,
                    link: "https://example.com/project-realestate",
                },
                PortfolioItem {
                    id: 5,
                    category: ProjectCategory::Corporate,
                    link: "https://example.com/project-medical",
                },
                PortfolioItem {
                    id: 6,
                    category: ProjectCategory::Ecommerce,
                    link: "https://example.com/project-electronics",
                },
            ],
            option_lists: vec![
                OptionList {
                    select_id: "calc-type",
                    keys: SITE_TYPES,
                    label_prefix: "demos.calculator.types",
                    default_key: "Business",
                },
                OptionList {
                    select_id: "quote-type",
                    keys: SITE_TYPES,
                    label_prefix: "quoteCalculator.types",
                    default_key: "Business",
                },
                OptionList {
                    select_id: "quote-design",
                    keys: DESIGN_TIERS,
                    label_prefix: "quoteCalculator.designs",
                    default_key: "Premium",
                },
                OptionList {
                    select_id: "quote-deadline",
                    keys: DEADLINES,
                    label_prefix: "quoteCalculator.deadlines",
                    default_key: "Flexible",
                },
            ],
        }
    }

    pub fn project(&self, id: u32) -> Option<&PortfolioItem> {
        self.portfolio.iter().find(|item| item.id == id)
    }

    pub fn option_list(&self, select_id: &str) -> Option<&OptionList> {
        self.option_lists
            .iter()
            .find(|list| list.select_id == select_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse_roundtrip() {
        for category in ProjectCategory::ALL {
            assert_eq!(ProjectCategory::parse(category.as_str()), Some(category));
        }
        assert_eq!(ProjectCategory::parse("All"), None);
        assert_eq!(ProjectCategory::parse("corporate"), None);
    }

    #[test]
    fn test_standard_catalog_ids_unique() {
        let catalog = SiteCatalog::standard();
        let mut ids: Vec<_> = catalog.portfolio.iter().map(|item| item.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), catalog.portfolio.len());
    }

    #[test]
    fn test_project_lookup() {
        let catalog = SiteCatalog::standard();
        assert_eq!(catalog.project(3).unwrap().category, ProjectCategory::WebApp);
        assert!(catalog.project(99).is_none());
    }

    #[test]
    fn test_option_list_defaults_are_offered() {
        for list in SiteCatalog::standard().option_lists {
            assert!(list.contains(list.default_key), "{}", list.select_id);
        }
    }

    #[test]
    fn test_option_list_lookup() {
        let catalog = SiteCatalog::standard();
        let design = catalog.option_list("quote-design").unwrap();
        assert_eq!(design.default_key, "Premium");
        assert!(catalog.option_list("nope").is_none());
    }
}
