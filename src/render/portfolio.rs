//! Portfolio grid, category filter and project detail modal.
//!
//! Filter state and modal state are independent: the modal overlays whatever
//! filter is active and closing it leaves that filter in place. The same
//! `render_portfolio` call serves filter changes and language changes.

use crate::dom::{Modal, Page};
use crate::i18n::TranslationDocument;
use crate::render::catalog::{PortfolioItem, ProjectCategory, SiteCatalog};
use crate::render::html::escape;
use serde::Serialize;

pub const PORTFOLIO_FILTERS: &str = "portfolio-filters";
pub const PORTFOLIO_GRID: &str = "portfolio-grid";

/// Active portfolio filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum PortfolioFilter {
    #[default]
    All,
    Category(ProjectCategory),
}

impl PortfolioFilter {
    /// Filter buttons, in display order.
    pub const BUTTONS: [PortfolioFilter; 5] = [
        PortfolioFilter::All,
        PortfolioFilter::Category(ProjectCategory::Corporate),
        PortfolioFilter::Category(ProjectCategory::Ecommerce),
        PortfolioFilter::Category(ProjectCategory::WebApp),
        PortfolioFilter::Category(ProjectCategory::Landing),
    ];

    /// Parse a `data-filter` value.
    pub fn parse(value: &str) -> Option<PortfolioFilter> {
        if value == "All" {
            return Some(PortfolioFilter::All);
        }
        ProjectCategory::parse(value).map(PortfolioFilter::Category)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PortfolioFilter::All => "All",
            PortfolioFilter::Category(category) => category.as_str(),
        }
    }

    pub fn label_key(&self) -> String {
        match self {
            PortfolioFilter::All => "portfolio.filters.all".to_string(),
            PortfolioFilter::Category(category) => {
                format!("portfolio.filters.{}", category.label_key())
            }
        }
    }

    pub fn matches(&self, item: &PortfolioItem) -> bool {
        match self {
            PortfolioFilter::All => true,
            PortfolioFilter::Category(category) => item.category == *category,
        }
    }
}

/// Items shown for `filter`, in catalog order.
pub fn visible_items(catalog: &SiteCatalog, filter: PortfolioFilter) -> Vec<&PortfolioItem> {
    catalog
        .portfolio
        .iter()
        .filter(|item| filter.matches(item))
        .collect()
}

/// Observable state of the filter + modal machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PortfolioView {
    Unfiltered,
    FilteredByCategory(ProjectCategory),
    ModalOpen {
        project: u32,
        underlying: PortfolioFilter,
    },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PortfolioState {
    filter: PortfolioFilter,
    open_project: Option<u32>,
}

impl PortfolioState {
    pub fn filter(&self) -> PortfolioFilter {
        self.filter
    }

    pub fn open_project(&self) -> Option<u32> {
        self.open_project
    }

    pub fn view(&self) -> PortfolioView {
        match (self.open_project, self.filter) {
            (Some(project), underlying) => PortfolioView::ModalOpen {
                project,
                underlying,
            },
            (None, PortfolioFilter::All) => PortfolioView::Unfiltered,
            (None, PortfolioFilter::Category(category)) => {
                PortfolioView::FilteredByCategory(category)
            }
        }
    }

    pub fn select_filter(&mut self, filter: PortfolioFilter) {
        self.filter = filter;
    }

    /// Open the modal for a catalog project. Unknown ids are ignored.
    pub fn open(&mut self, catalog: &SiteCatalog, project: u32) -> bool {
        if catalog.project(project).is_none() {
            return false;
        }
        self.open_project = Some(project);
        true
    }

    pub fn close(&mut self) {
        self.open_project = None;
    }
}

pub fn render_filters(active: PortfolioFilter, doc: &TranslationDocument) -> String {
    PortfolioFilter::BUTTONS
        .iter()
        .map(|filter| {
            let class = if *filter == active {
                "filter-btn active"
            } else {
                "filter-btn"
            };
            format!(
                r#"<button class="{}" data-filter="{}">{}</button>"#,
                class,
                escape(filter.as_str()),
                escape(doc.text(&filter.label_key()))
            )
        })
        .collect()
}

pub fn render_grid(catalog: &SiteCatalog, filter: PortfolioFilter, doc: &TranslationDocument) -> String {
    let view_label = escape(doc.text("portfolio.viewProject"));

    visible_items(catalog, filter)
        .into_iter()
        .map(|item| {
            let title = doc.text(&format!("portfolio.projects.{}.title", item.id));
            let short = doc.text(&format!("portfolio.projects.{}.short", item.id));
            format!(
                r#"<article class="card project-card" data-id="{id}"><h3>{}</h3><p>{}</p><div class="project-overlay"><button class="btn-secondary view-project" data-id="{id}">{}</button></div></article>"#,
                escape(title),
                escape(short),
                view_label,
                id = item.id
            )
        })
        .collect()
}

/// Fill the modal from the open project, or clear its open flag.
pub fn render_modal(modal: &mut Modal, state: &PortfolioState, catalog: &SiteCatalog, doc: &TranslationDocument) {
    let Some(project) = state.open_project().and_then(|id| catalog.project(id)) else {
        modal.open = false;
        return;
    };

    modal.title = doc.text(&format!("portfolio.projects.{}.title", project.id)).to_string();
    modal.description = doc.text(&format!("portfolio.projects.{}.full", project.id)).to_string();
    modal.link = if project.link.is_empty() {
        "#".to_string()
    } else {
        project.link.to_string()
    };
    modal.open = true;
}

/// Re-render filters, grid and modal. Needs both filter and grid regions.
pub fn render_portfolio(page: &mut Page, catalog: &SiteCatalog, state: &PortfolioState, doc: &TranslationDocument) {
    if !page.has_region(PORTFOLIO_FILTERS) || !page.has_region(PORTFOLIO_GRID) {
        return;
    }
    page.replace_region(PORTFOLIO_FILTERS, render_filters(state.filter(), doc));
    page.replace_region(PORTFOLIO_GRID, render_grid(catalog, state.filter(), doc));
    render_modal(&mut page.modal, state, catalog, doc);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::PageKind;
    use serde_json::json;

    fn document() -> TranslationDocument {
        TranslationDocument::from_value(json!({
            "portfolio": {
                "viewProject": "View project",
                "filters": { "all": "All", "corporate": "Corporate", "ecommerce": "Shops" },
                "projects": {
                    "1": { "title": "Law Firm", "short": "Legal site", "full": "A full legal site" },
                    "2": { "title": "Fashion Store", "short": "Shop", "full": "Fashion shop with cart" }
                }
            }
        }))
        .unwrap()
    }

    fn ids(items: Vec<&PortfolioItem>) -> Vec<u32> {
        items.into_iter().map(|item| item.id).collect()
    }

    fn portfolio_page() -> Page {
        Page::new(PageKind::Home)
            .with_region(PORTFOLIO_FILTERS)
            .with_region(PORTFOLIO_GRID)
    }

    // ==================== Filter Tests ====================

    #[test]
    fn test_filter_parse() {
        assert_eq!(PortfolioFilter::parse("All"), Some(PortfolioFilter::All));
        assert_eq!(
            PortfolioFilter::parse("Web App"),
            Some(PortfolioFilter::Category(ProjectCategory::WebApp))
        );
        assert_eq!(PortfolioFilter::parse("all"), None);
        assert_eq!(PortfolioFilter::parse(""), None);
    }

    #[test]
    fn test_visible_items_all_in_catalog_order() {
        let catalog = SiteCatalog::standard();
        assert_eq!(ids(visible_items(&catalog, PortfolioFilter::All)), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_visible_items_exact_category() {
        let catalog = SiteCatalog::standard();
        let corporate = PortfolioFilter::Category(ProjectCategory::Corporate);
        let ecommerce = PortfolioFilter::Category(ProjectCategory::Ecommerce);
        assert_eq!(ids(visible_items(&catalog, corporate)), vec![1, 5]);
        assert_eq!(ids(visible_items(&catalog, ecommerce)), vec![2, 6]);
    }

    #[test]
    fn test_filter_round_trip_reproduces_selection() {
        let catalog = SiteCatalog::standard();
        let doc = document();
        let mut state = PortfolioState::default();
        let mut page = portfolio_page();
        let corporate = PortfolioFilter::Category(ProjectCategory::Corporate);

        state.select_filter(corporate);
        render_portfolio(&mut page, &catalog, &state, &doc);
        let first = page.region(PORTFOLIO_GRID).unwrap().to_string();

        state.select_filter(PortfolioFilter::All);
        render_portfolio(&mut page, &catalog, &state, &doc);
        assert_ne!(page.region(PORTFOLIO_GRID).unwrap(), first);

        state.select_filter(corporate);
        render_portfolio(&mut page, &catalog, &state, &doc);
        assert_eq!(page.region(PORTFOLIO_GRID).unwrap(), first);
    }

    // ==================== State Machine Tests ====================

    #[test]
    fn test_initial_state_is_unfiltered() {
        assert_eq!(PortfolioState::default().view(), PortfolioView::Unfiltered);
    }

    #[test]
    fn test_modal_overlays_filter_and_close_restores_it() {
        let catalog = SiteCatalog::standard();
        let mut state = PortfolioState::default();
        let landing = PortfolioFilter::Category(ProjectCategory::Landing);

        state.select_filter(landing);
        assert_eq!(state.view(), PortfolioView::FilteredByCategory(ProjectCategory::Landing));

        assert!(state.open(&catalog, 4));
        assert_eq!(
            state.view(),
            PortfolioView::ModalOpen {
                project: 4,
                underlying: landing
            }
        );

        state.close();
        assert_eq!(state.view(), PortfolioView::FilteredByCategory(ProjectCategory::Landing));
    }

    #[test]
    fn test_opening_second_project_replaces_first() {
        let catalog = SiteCatalog::standard();
        let mut state = PortfolioState::default();
        state.open(&catalog, 1);
        state.open(&catalog, 2);
        assert_eq!(state.open_project(), Some(2));
        state.close();
        assert_eq!(state.view(), PortfolioView::Unfiltered);
    }

    #[test]
    fn test_open_unknown_project_is_ignored() {
        let catalog = SiteCatalog::standard();
        let mut state = PortfolioState::default();
        assert!(!state.open(&catalog, 42));
        assert_eq!(state.view(), PortfolioView::Unfiltered);
    }

    // ==================== Render Tests ====================

    #[test]
    fn test_render_filters_marks_active() {
        let html = render_filters(PortfolioFilter::Category(ProjectCategory::Ecommerce), &document());
        assert!(html.starts_with(r#"<button class="filter-btn" data-filter="All">All</button>"#));
        assert!(html.contains(r#"<button class="filter-btn active" data-filter="E-commerce">Shops</button>"#));
        assert!(html.contains(r#"<button class="filter-btn" data-filter="Web App"></button>"#));
    }

    #[test]
    fn test_render_grid_cards_carry_ids() {
        let catalog = SiteCatalog::standard();
        let html = render_grid(&catalog, PortfolioFilter::Category(ProjectCategory::Corporate), &document());
        assert_eq!(html.matches("project-card").count(), 2);
        assert!(html.starts_with(
            r#"<article class="card project-card" data-id="1"><h3>Law Firm</h3><p>Legal site</p><div class="project-overlay"><button class="btn-secondary view-project" data-id="1">View project</button></div></article>"#
        ));
        assert!(html.contains(r#"data-id="5""#));
    }

    #[test]
    fn test_render_modal_resolves_full_text() {
        let catalog = SiteCatalog::standard();
        let mut state = PortfolioState::default();
        state.open(&catalog, 2);

        let mut modal = Modal::default();
        render_modal(&mut modal, &state, &catalog, &document());
        assert!(modal.open);
        assert_eq!(modal.title, "Fashion Store");
        assert_eq!(modal.description, "Fashion shop with cart");
        assert_eq!(modal.link, "https://example.com/project-fashion");

        state.close();
        render_modal(&mut modal, &state, &catalog, &document());
        assert!(!modal.open);
    }

    #[test]
    fn test_render_portfolio_requires_both_regions() {
        let catalog = SiteCatalog::standard();
        let mut page = Page::new(PageKind::Home).with_region(PORTFOLIO_GRID);
        render_portfolio(&mut page, &catalog, &PortfolioState::default(), &document());
        assert_eq!(page.region(PORTFOLIO_GRID), Some(""));
    }
}
