//! Rendering pipeline.
//!
//! - `projector`: translated text into tagged elements
//! - `direction`: root language, direction and the `rtl` flag
//! - `sections`, `portfolio`, `calculator`, `service_page`: full-replace region renderers
//! - `catalog`: static item lists the renderers join with the document
//! - `layout`: page variants
//!
//! `render_pass` runs everything for one `RenderContext` in a fixed order:
//! direction, projection, then every section renderer. Calculators come last
//! so their totals and breakdown labels read the freshly rendered options;
//! visible validation errors are re-resolved after them.

pub mod calculator;
pub mod catalog;
pub mod direction;
pub mod html;
pub mod layout;
pub mod portfolio;
pub mod projector;
pub mod sections;
pub mod service_page;

use crate::dom::{Page, PageKind};
use crate::i18n::{Language, TranslationDocument};
use crate::validation;
use catalog::SiteCatalog;
use portfolio::PortfolioState;
use std::sync::Arc;
use tracing::debug;

/// The active language and document, versioned by load sequence.
#[derive(Debug, Clone)]
pub struct RenderContext {
    pub language: Language,
    pub document: Arc<TranslationDocument>,
    pub load_sequence: u64,
}

impl RenderContext {
    /// Context before any document has loaded.
    pub fn initial() -> Self {
        Self {
            language: Language::fallback(),
            document: Arc::new(TranslationDocument::empty()),
            load_sequence: 0,
        }
    }

    pub fn text(&self, path: &str) -> &str {
        self.document.text(path)
    }
}

/// Mark the active language's switcher button.
pub fn mark_language_buttons(page: &mut Page, language: Language) {
    for button in &mut page.language_buttons {
        button.active = button.code == language.code();
    }
}

/// Full re-render of `page` for `ctx`.
pub fn render_pass(page: &mut Page, catalog: &SiteCatalog, portfolio: &PortfolioState, ctx: &RenderContext) {
    let doc = ctx.document.as_ref();

    direction::apply_direction(page, ctx.language);
    projector::project(page, doc);

    sections::render_card_sections(page, catalog, doc);
    portfolio::render_portfolio(page, catalog, portfolio, doc);
    if let PageKind::Service { key } = page.kind.clone() {
        service_page::render_service_page(page, &key, doc);
    }
    calculator::render_calculators(page, catalog, doc);
    validation::refresh_shown_errors(page, doc);

    mark_language_buttons(page, ctx.language);
    debug!(
        "Rendered page in '{}' (load #{})",
        ctx.language, ctx.load_sequence
    );
}
