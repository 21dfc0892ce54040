//! Translation-driven rendering for the High-Tech Websites Development site.
//!
//! The site is authored once and rendered in Hebrew, English or Russian from
//! per-language translation documents. See `orchestrator` for the entry point.

pub mod config;
pub mod dom;
pub mod i18n;
pub mod orchestrator;
pub mod preferences;
pub mod render;
pub mod validation;
