//! Service detail page.
//!
//! Each service has its own page driven by the same engine. Content comes from
//! the `servicePages.{key}` record; when the record is missing the page is
//! left untouched.

use crate::dom::Page;
use crate::i18n::TranslationDocument;
use crate::render::html::{escape, list_items};

pub const SERVICE_TITLE: &str = "service-title";
pub const SERVICE_SUBTITLE: &str = "service-subtitle";
pub const SERVICE_INTRO: &str = "service-intro";
pub const SERVICE_OUTRO: &str = "service-outro";
pub const SERVICE_PROCESS: &str = "service-process";
pub const SERVICE_DELIVERABLES: &str = "service-deliverables";
pub const SERVICE_FIT: &str = "service-fit";

const SITE_NAME: &str = "High-Tech Websites Development";

/// Render the service page for `key`. Returns whether a record was found.
pub fn render_service_page(page: &mut Page, key: &str, doc: &TranslationDocument) -> bool {
    let base = format!("servicePages.{}", key);
    if !doc.has_record(&base) {
        return false;
    }
    let field = |name: &str| doc.text(&format!("{}.{}", base, name));

    page.title = format!("{} | {}", field("title"), SITE_NAME);
    page.meta_description = field("subtitle").to_string();

    for (region, name) in [
        (SERVICE_TITLE, "title"),
        (SERVICE_SUBTITLE, "subtitle"),
        (SERVICE_INTRO, "intro"),
        (SERVICE_OUTRO, "outro"),
    ] {
        page.replace_region(region, escape(field(name)));
    }

    for (region, name) in [
        (SERVICE_PROCESS, "process"),
        (SERVICE_DELIVERABLES, "deliverables"),
        (SERVICE_FIT, "fit"),
    ] {
        page.replace_region(region, list_items(doc.list(&format!("{}.{}", base, name))));
    }

    true
}
