//! Card sections: about skills, services, value propositions and pricing.
//!
//! Each renderer builds the complete replacement for its region from the
//! catalog joined with the current document.

use crate::dom::Page;
use crate::i18n::TranslationDocument;
use crate::render::catalog::SiteCatalog;
use crate::render::html::{card, escape, list_items};

pub const ABOUT_SKILLS: &str = "about-skills";
pub const SERVICES_CARDS: &str = "services-cards";
pub const WHY_LIST: &str = "why-list";
pub const PRICING_CARDS: &str = "pricing-cards";

pub fn render_about_skills(catalog: &SiteCatalog, doc: &TranslationDocument) -> String {
    let labels: Vec<&str> = catalog
        .about_skills
        .iter()
        .map(|key| doc.text(&format!("about.skills.{}", key)))
        .collect();
    list_items(labels)
}

pub fn render_services(catalog: &SiteCatalog, doc: &TranslationDocument) -> String {
    let learn_more = escape(doc.text("services.learnMore"));

    catalog
        .services
        .iter()
        .map(|service| {
            let title = doc.text(&format!("services.items.{}.title", service.key));
            let desc = doc.text(&format!("services.items.{}.desc", service.key));
            format!(
                r#"<article class="card"><h3>{}</h3><p>{}</p><a class="btn-secondary service-link" href="{}">{}</a></article>"#,
                escape(title),
                escape(desc),
                escape(service.link),
                learn_more
            )
        })
        .collect()
}

pub fn render_why(catalog: &SiteCatalog, doc: &TranslationDocument) -> String {
    catalog
        .why
        .iter()
        .map(|key| card(doc.text(&format!("why.items.{}", key)), ""))
        .collect()
}

pub fn render_pricing(catalog: &SiteCatalog, doc: &TranslationDocument) -> String {
    catalog
        .pricing
        .iter()
        .map(|tier| {
            let title = doc.text(&format!("pricing.items.{}.title", tier.key));
            let desc = doc.text(&format!("pricing.items.{}.desc", tier.key));
            card(&format!("{} — {}", title, tier.price), desc)
        })
        .collect()
}

/// Re-render every card section the page declares.
pub fn render_card_sections(page: &mut Page, catalog: &SiteCatalog, doc: &TranslationDocument) {
    page.replace_region(ABOUT_SKILLS, render_about_skills(catalog, doc));
    page.replace_region(SERVICES_CARDS, render_services(catalog, doc));
    page.replace_region(WHY_LIST, render_why(catalog, doc));
    page.replace_region(PRICING_CARDS, render_pricing(catalog, doc));
}
