//! Language switching and page event handling.
//!
//! `Orchestrator` owns everything a switch touches: the page, the versioned
//! `RenderContext`, UI state and the preference store. A switch is split in
//! three steps so the load can run without holding the engine:
//!
//! 1. `begin_switch` coerces the requested code and issues a sequence number
//! 2. the caller awaits the loader
//! 3. `complete_switch` applies the result only if its sequence is still the
//!    latest issued, and only if the load succeeded
//!
//! Step 3 is synchronous, so no other handler can observe a half-applied
//! switch. `Site` wraps the engine in a `tokio::sync::Mutex` and drives the
//! three steps.

use crate::dom::Page;
use crate::i18n::{
    detect_language, BrowserLanguages, Language, LoadError, LoadMetrics, TranslationDocument,
    TranslationLoader,
};
use crate::preferences::PreferenceStore;
use crate::render::catalog::SiteCatalog;
use crate::render::portfolio::{render_portfolio, PortfolioFilter, PortfolioState};
use crate::render::{calculator, render_pass, RenderContext};
use crate::validation::{self, ValidationField};
use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};
use tracing::{debug, info, warn};

/// An issued, not yet completed language load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwitchTicket {
    pub sequence: u64,
    pub language: Language,
    /// Explicit user choice (persisted) as opposed to startup detection
    pub explicit: bool,
}

/// How a completed load ended when it did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchOutcome {
    Applied(Language),
    /// A newer switch was issued while this one was loading
    Stale { language: Language, sequence: u64 },
}

/// Where a click on the open modal landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalClick {
    CloseButton,
    Backdrop,
    Content,
}

pub struct Orchestrator<S> {
    store: S,
    catalog: SiteCatalog,
    page: Page,
    context: RenderContext,
    portfolio: PortfolioState,
    latest_sequence: u64,
    metrics: LoadMetrics,
}

impl<S: PreferenceStore> Orchestrator<S> {
    pub fn new(store: S, catalog: SiteCatalog, page: Page) -> Self {
        Self {
            store,
            catalog,
            page,
            context: RenderContext::initial(),
            portfolio: PortfolioState::default(),
            latest_sequence: 0,
            metrics: LoadMetrics::default(),
        }
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn context(&self) -> &RenderContext {
        &self.context
    }

    pub fn language(&self) -> Language {
        self.context.language
    }

    pub fn portfolio(&self) -> &PortfolioState {
        &self.portfolio
    }

    pub fn metrics(&self) -> &LoadMetrics {
        &self.metrics
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    // ==================== Language switching ====================

    /// Effective startup language from the stored preference and browser.
    pub fn detect(&self, browser: &BrowserLanguages) -> Language {
        detect_language(self.store.load_language().as_deref(), browser)
    }

    /// Issue a load for `requested`, coercing unsupported codes to the fallback.
    pub fn begin_switch(&mut self, requested: &str, explicit: bool) -> SwitchTicket {
        let language = Language::coerce(requested);
        if language.code() != requested {
            debug!("Unsupported language '{}' coerced to '{}'", requested, language);
        }

        self.latest_sequence += 1;
        self.metrics.record_started();

        SwitchTicket {
            sequence: self.latest_sequence,
            language,
            explicit,
        }
    }

    /// Apply a finished load. Stale results are dropped whatever their outcome;
    /// failures leave every piece of state as it was.
    pub fn complete_switch(
        &mut self,
        ticket: SwitchTicket,
        result: Result<TranslationDocument, LoadError>,
    ) -> Result<SwitchOutcome, LoadError> {
        if ticket.sequence != self.latest_sequence {
            self.metrics.record_stale();
            debug!(
                "Discarding stale load #{} for '{}' (latest is #{})",
                ticket.sequence, ticket.language, self.latest_sequence
            );
            return Ok(SwitchOutcome::Stale {
                language: ticket.language,
                sequence: ticket.sequence,
            });
        }

        let document = match result {
            Ok(document) => document,
            Err(e) => {
                self.metrics.record_failed();
                warn!("Language switch to '{}' aborted: {}", ticket.language, e);
                return Err(e);
            }
        };

        self.context = RenderContext {
            language: ticket.language,
            document: Arc::new(document),
            load_sequence: ticket.sequence,
        };
        self.rerender();
        self.metrics.record_applied();

        if ticket.explicit {
            if let Err(e) = self.store.save_language(ticket.language.code()) {
                warn!("Failed to persist language preference: {:#}", e);
            }
        }

        info!(
            "Language set to {} ({})",
            ticket.language.name(),
            ticket.language
        );
        Ok(SwitchOutcome::Applied(ticket.language))
    }

    /// Full render pass for the current context.
    pub fn rerender(&mut self) {
        render_pass(&mut self.page, &self.catalog, &self.portfolio, &self.context);
    }

    // ==================== Portfolio events ====================

    /// Handle a filter button (`data-filter` value). Unknown values are ignored.
    pub fn select_filter(&mut self, value: &str) -> bool {
        let Some(filter) = PortfolioFilter::parse(value) else {
            debug!("Ignoring unknown portfolio filter '{}'", value);
            return false;
        };
        self.portfolio.select_filter(filter);
        self.render_portfolio();
        true
    }

    /// Handle a card's "view project" button.
    pub fn open_project(&mut self, id: u32) -> bool {
        if !self.portfolio.open(&self.catalog, id) {
            return false;
        }
        self.render_portfolio();
        true
    }

    pub fn click_modal(&mut self, target: ModalClick) {
        match target {
            ModalClick::CloseButton | ModalClick::Backdrop => {
                self.portfolio.close();
                self.render_portfolio();
            }
            ModalClick::Content => {}
        }
    }

    fn render_portfolio(&mut self) {
        render_portfolio(
            &mut self.page,
            &self.catalog,
            &self.portfolio,
            &self.context.document,
        );
    }

    // ==================== Form events ====================

    /// Text or number input. Recomputes calculators, re-validates form fields.
    pub fn set_input(&mut self, id: &str, value: &str) -> bool {
        if !self.page.set_input(id, value) {
            return false;
        }
        if let Some(field) = ValidationField::ALL
            .into_iter()
            .find(|field| field.input_id() == id)
        {
            validation::validate_field(&mut self.page, field, &self.context.document);
        }
        self.update_calculators();
        true
    }

    pub fn set_checkbox(&mut self, id: &str, checked: bool) -> bool {
        if !self.page.set_checkbox(id, checked) {
            return false;
        }
        self.update_calculators();
        true
    }

    /// Choose a select option. Values the select does not offer are rejected.
    pub fn select_option(&mut self, id: &str, value: &str) -> bool {
        let Some(select) = self.page.select_mut(id) else {
            return false;
        };
        if !select.options.iter().any(|option| option.value == value) {
            return false;
        }
        select.value = Some(value.to_string());
        self.update_calculators();
        true
    }

    /// Validate every contact form field.
    pub fn submit_validation(&mut self) -> bool {
        validation::validate_form(&mut self.page, &self.context.document)
    }

    fn update_calculators(&mut self) {
        calculator::update_estimate(&mut self.page);
        calculator::update_quote(&mut self.page, &self.context.document);
    }
}

/// Async entry point: one engine, one loader.
pub struct Site<L, S> {
    loader: L,
    engine: Mutex<Orchestrator<S>>,
}

impl<L: TranslationLoader, S: PreferenceStore> Site<L, S> {
    pub fn new(loader: L, orchestrator: Orchestrator<S>) -> Self {
        Self {
            loader,
            engine: Mutex::new(orchestrator),
        }
    }

    /// Detect the startup language and render it. Does not persist.
    pub async fn start(&self, browser: &BrowserLanguages) -> Result<SwitchOutcome, LoadError> {
        let ticket = {
            let mut engine = self.engine.lock().await;
            let language = engine.detect(browser);
            info!("Detected startup language: {}", language);
            engine.begin_switch(language.code(), false)
        };
        self.finish(ticket).await
    }

    /// Explicit language button activation.
    pub async fn switch_language(&self, requested: &str) -> Result<SwitchOutcome, LoadError> {
        let ticket = self.engine.lock().await.begin_switch(requested, true);
        self.finish(ticket).await
    }

    async fn finish(&self, ticket: SwitchTicket) -> Result<SwitchOutcome, LoadError> {
        let result = self.loader.load(ticket.language).await;
        self.engine.lock().await.complete_switch(ticket, result)
    }

    /// Exclusive access for UI events.
    pub async fn engine(&self) -> MutexGuard<'_, Orchestrator<S>> {
        self.engine.lock().await
    }

    pub async fn snapshot(&self) -> Page {
        self.engine.lock().await.page().clone()
    }
}
