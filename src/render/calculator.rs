//! Calculator option lists and the two price calculators.
//!
//! Option lists translate only their labels; the selected value is user state
//! and survives a re-render whenever it is still offered. Totals are plain
//! integer shekel arithmetic and are recomputed after every render pass.

use crate::dom::{Page, SelectOption};
use crate::i18n::TranslationDocument;
use crate::render::catalog::{OptionList, SiteCatalog};
use crate::render::html::list_items;

// ==================== Element ids ====================

pub const CALC_TYPE: &str = "calc-type";
pub const CALC_PAGES: &str = "calc-pages";
pub const CALC_SEO: &str = "calc-seo";
pub const CALC_ADMIN: &str = "calc-admin";
pub const CALC_API: &str = "calc-api";
pub const CALC_RESULT: &str = "calc-result";

pub const QUOTE_TYPE: &str = "quote-type";
pub const QUOTE_PAGES: &str = "quote-pages";
pub const QUOTE_DESIGN: &str = "quote-design";
pub const QUOTE_DEADLINE: &str = "quote-deadline";
pub const QUOTE_SEO: &str = "quote-seo";
pub const QUOTE_ADMIN: &str = "quote-admin";
pub const QUOTE_API: &str = "quote-api";
pub const QUOTE_CONTENT: &str = "quote-content";
pub const QUOTE_PRICE: &str = "quote-price";
pub const QUOTE_BREAKDOWN: &str = "quote-breakdown";

// ==================== Pricing inputs ====================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiteType {
    Landing,
    Business,
    Ecommerce,
    WebApp,
}

impl SiteType {
    pub fn parse(key: &str) -> Option<SiteType> {
        match key {
            "Landing" => Some(SiteType::Landing),
            "Business" => Some(SiteType::Business),
            "E-commerce" => Some(SiteType::Ecommerce),
            "Web App" => Some(SiteType::WebApp),
            _ => None,
        }
    }

    fn estimate_base(&self) -> u64 {
        match self {
            SiteType::Landing => 2200,
            SiteType::Business => 4800,
            SiteType::Ecommerce => 7600,
            SiteType::WebApp => 9800,
        }
    }

    fn quote_base(&self) -> u64 {
        match self {
            SiteType::Landing => 2800,
            SiteType::Business => 6200,
            SiteType::Ecommerce => 9800,
            SiteType::WebApp => 14500,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DesignTier {
    Standard,
    Premium,
    Enterprise,
}

impl DesignTier {
    pub fn parse(key: &str) -> Option<DesignTier> {
        match key {
            "Standard" => Some(DesignTier::Standard),
            "Premium" => Some(DesignTier::Premium),
            "Enterprise" => Some(DesignTier::Enterprise),
            _ => None,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            DesignTier::Standard => "Standard",
            DesignTier::Premium => "Premium",
            DesignTier::Enterprise => "Enterprise",
        }
    }

    /// Multiplier in percent
    fn multiplier(&self) -> u64 {
        match self {
            DesignTier::Standard => 100,
            DesignTier::Premium => 118,
            DesignTier::Enterprise => 135,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deadline {
    Flexible,
    Priority,
    Urgent,
}

impl Deadline {
    pub fn parse(key: &str) -> Option<Deadline> {
        match key {
            "Flexible" => Some(Deadline::Flexible),
            "Priority" => Some(Deadline::Priority),
            "Urgent" => Some(Deadline::Urgent),
            _ => None,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Deadline::Flexible => "Flexible",
            Deadline::Priority => "Priority",
            Deadline::Urgent => "Urgent",
        }
    }

    /// Multiplier in percent
    fn multiplier(&self) -> u64 {
        match self {
            Deadline::Flexible => 100,
            Deadline::Priority => 112,
            Deadline::Urgent => 126,
        }
    }
}

/// Upper bound on the page count either calculator accepts.
pub const MAX_PAGES: u64 = 10_000;

/// Page count from a raw input value: whole numbers in `1..=MAX_PAGES`.
pub fn parse_pages(raw: Option<&str>) -> u64 {
    raw.and_then(|value| value.trim().parse::<i64>().ok())
        .map(|pages| pages.clamp(1, MAX_PAGES as i64) as u64)
        .unwrap_or(1)
}

/// Format a shekel amount with en-US thousands grouping: `₪12,345`.
pub fn format_shekels(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("₪{}", grouped)
}

// ==================== Simple estimate ====================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EstimateInput {
    pub site_type: SiteType,
    pub pages: u64,
    pub seo: bool,
    pub admin: bool,
    pub api: bool,
}

pub fn estimate(input: &EstimateInput) -> u64 {
    let pages = input.pages.clamp(1, MAX_PAGES);
    let mut total = input.site_type.estimate_base() + pages * 250;
    if input.seo {
        total += 900;
    }
    if input.admin {
        total += 1800;
    }
    if input.api {
        total += 1400;
    }
    total
}

// ==================== Quote ====================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteInput {
    pub site_type: SiteType,
    pub pages: u64,
    pub design: DesignTier,
    pub deadline: Deadline,
    pub seo: bool,
    pub admin: bool,
    pub api: bool,
    pub content: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quote {
    pub base: u64,
    pub page_cost: u64,
    pub subtotal: u64,
    pub total: u64,
}

const QUOTE_ADDONS: [(&str, u64); 4] = [("seo", 1200), ("admin", 2200), ("api", 1800), ("content", 900)];

impl QuoteInput {
    fn addons(&self) -> [bool; 4] {
        [self.seo, self.admin, self.api, self.content]
    }
}

pub fn quote(input: &QuoteInput) -> Quote {
    let base = input.site_type.quote_base();
    let page_cost = input.pages.clamp(1, MAX_PAGES) * 300;
    let addons: u64 = QUOTE_ADDONS
        .iter()
        .zip(input.addons())
        .filter(|(_, selected)| *selected)
        .map(|((_, price), _)| price)
        .sum();
    let subtotal = base + page_cost + addons;

    // Both multipliers are percentages; round half up to whole shekels.
    let scaled = subtotal * input.design.multiplier() * input.deadline.multiplier();
    let total = (scaled + 5_000) / 10_000;

    Quote {
        base,
        page_cost,
        subtotal,
        total,
    }
}

/// Itemized quote lines, labels resolved from `quoteCalculator.*`.
pub fn breakdown(input: &QuoteInput, quote: &Quote, doc: &TranslationDocument) -> Vec<String> {
    let label = |key: &str| doc.text(&format!("quoteCalculator.breakdown.{}", key)).to_string();

    let mut lines = vec![
        format!("{} — {}", label("base"), format_shekels(quote.base)),
        format!(
            "{} ({}) — {}",
            label("pages"),
            input.pages,
            format_shekels(quote.page_cost)
        ),
        format!(
            "{} — {}",
            label("design"),
            doc.text(&format!("quoteCalculator.designs.{}", input.design.key()))
        ),
        format!(
            "{} — {}",
            label("deadline"),
            doc.text(&format!("quoteCalculator.deadlines.{}", input.deadline.key()))
        ),
    ];

    for ((key, price), selected) in QUOTE_ADDONS.iter().zip(input.addons()) {
        if selected {
            lines.push(format!("{} — {}", label(*key), format_shekels(*price)));
        }
    }

    lines
}

// ==================== Page wiring ====================

/// Rebuild one option list, keeping a still-valid selection.
pub fn render_option_list(page: &mut Page, list: &OptionList, doc: &TranslationDocument) {
    let Some(select) = page.select_mut(list.select_id) else {
        return;
    };

    let current = select
        .value
        .clone()
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| list.default_key.to_string());

    select.options = list
        .keys
        .iter()
        .map(|key| SelectOption {
            value: key.to_string(),
            label: doc.text(&format!("{}.{}", list.label_prefix, key)).to_string(),
        })
        .collect();

    select.value = Some(if list.contains(&current) {
        current
    } else {
        list.default_key.to_string()
    });
}

fn selected<'a>(page: &'a Page, id: &str) -> Option<&'a str> {
    page.select(id).and_then(|select| select.value.as_deref())
}

/// Read the simple calculator form. `None` if the page has no such form.
pub fn read_estimate_input(page: &Page) -> Option<EstimateInput> {
    let site_type = page.select(CALC_TYPE)?.value.as_deref()?;
    Some(EstimateInput {
        site_type: SiteType::parse(site_type)?,
        pages: parse_pages(page.input(CALC_PAGES)),
        seo: page.checkbox(CALC_SEO),
        admin: page.checkbox(CALC_ADMIN),
        api: page.checkbox(CALC_API),
    })
}

/// Read the quote form, defaulting any missing selection.
pub fn read_quote_input(page: &Page) -> QuoteInput {
    QuoteInput {
        site_type: selected(page, QUOTE_TYPE)
            .and_then(SiteType::parse)
            .unwrap_or(SiteType::Business),
        pages: parse_pages(page.input(QUOTE_PAGES)),
        design: selected(page, QUOTE_DESIGN)
            .and_then(DesignTier::parse)
            .unwrap_or(DesignTier::Premium),
        deadline: selected(page, QUOTE_DEADLINE)
            .and_then(Deadline::parse)
            .unwrap_or(Deadline::Flexible),
        seo: page.checkbox(QUOTE_SEO),
        admin: page.checkbox(QUOTE_ADMIN),
        api: page.checkbox(QUOTE_API),
        content: page.checkbox(QUOTE_CONTENT),
    }
}

pub fn update_estimate(page: &mut Page) {
    if let Some(input) = read_estimate_input(page) {
        page.replace_region(CALC_RESULT, format_shekels(estimate(&input)));
    }
}

pub fn update_quote(page: &mut Page, doc: &TranslationDocument) {
    if !page.has_region(QUOTE_PRICE) && !page.has_region(QUOTE_BREAKDOWN) {
        return;
    }
    let input = read_quote_input(page);
    let quote = quote(&input);
    page.replace_region(QUOTE_PRICE, format_shekels(quote.total));

    let lines = breakdown(&input, &quote, doc);
    page.replace_region(QUOTE_BREAKDOWN, list_items(lines.iter().map(String::as_str)));
}

/// Rebuild all option lists, then recompute both calculators.
pub fn render_calculators(page: &mut Page, catalog: &SiteCatalog, doc: &TranslationDocument) {
    for list in &catalog.option_lists {
        render_option_list(page, list, doc);
    }
    update_estimate(page);
    update_quote(page, doc);
}
