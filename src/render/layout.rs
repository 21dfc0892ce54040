//! Page layouts: which elements, regions and controls each variant carries.
//!
//! Both variants share the header (navigation, language switcher) and differ
//! in their body sections. Static fallback text is English, as authored in
//! the markup, and stays visible wherever a translation is missing.

use crate::dom::{Element, Page, PageKind};
use crate::i18n::LanguageRegistry;
use crate::render::calculator::*;
use crate::render::portfolio::{PORTFOLIO_FILTERS, PORTFOLIO_GRID};
use crate::render::sections::{ABOUT_SKILLS, PRICING_CARDS, SERVICES_CARDS, WHY_LIST};
use crate::render::service_page::*;
use crate::validation::ValidationField;

fn language_codes() -> Vec<&'static str> {
    LanguageRegistry::get()
        .list_enabled()
        .iter()
        .map(|lang| lang.code)
        .collect()
}

fn header(page: Page) -> Page {
    page.with_element(Element::new("nav-home", "Home").with_text_key("nav.home"))
        .with_element(Element::new("nav-services", "Services").with_text_key("nav.services"))
        .with_element(Element::new("nav-portfolio", "Portfolio").with_text_key("nav.portfolio"))
        .with_element(Element::new("nav-pricing", "Pricing").with_text_key("nav.pricing"))
        .with_element(Element::new("nav-contact", "Contact").with_text_key("nav.contact"))
        .with_element(
            Element::new("menu-toggle", "☰")
                .with_aria_label_key("a11y.menu")
                .with_attribute("aria-label", "Open menu"),
        )
        .with_element(
            Element::new("lang-switcher", "")
                .with_aria_label_key("a11y.languageSwitcher")
                .with_attribute("aria-label", "Choose language"),
        )
        .with_language_buttons(&language_codes())
}

/// The landing page with every section and demo.
pub fn home_page() -> Page {
    let mut page = header(Page::new(PageKind::Home).with_title("High-Tech Websites Development"))
        .with_element(Element::new("hero-title", "Websites that work").with_text_key("hero.title"))
        .with_element(Element::new("hero-subtitle", "").with_text_key("hero.subtitle"))
        .with_element(Element::new("hero-cta", "Get a quote").with_text_key("hero.cta"))
        .with_element(Element::new("about-title", "About").with_text_key("about.title"))
        .with_element(Element::new("services-title", "Services").with_text_key("services.title"))
        .with_element(Element::new("why-title", "Why us").with_text_key("why.title"))
        .with_element(Element::new("pricing-title", "Pricing").with_text_key("pricing.title"))
        .with_element(Element::new("portfolio-title", "Portfolio").with_text_key("portfolio.title"))
        .with_element(
            Element::new("close-modal", "×")
                .with_aria_label_key("portfolio.closeModal")
                .with_attribute("aria-label", "Close"),
        )
        .with_element(Element::new("demos-title", "Live demos").with_text_key("demos.title"))
        .with_element(Element::new("contact-title", "Contact").with_text_key("contact.title"))
        .with_element(Element::new("contact-name", "").with_placeholder_key("contact.form.name"))
        .with_element(Element::new("contact-email", "").with_placeholder_key("contact.form.email"))
        .with_element(Element::new("contact-message", "").with_placeholder_key("contact.form.message"))
        .with_element(Element::new("contact-submit", "Send").with_text_key("contact.form.submit"));

    for field in ValidationField::ALL {
        page = page
            .with_element(
                Element::new(field.input_id(), "")
                    .with_placeholder_key(format!("demos.validation.placeholders.{}", field.key())),
            )
            .with_input(field.input_id(), "")
            .with_region(field.error_id());
    }

    page.with_region(ABOUT_SKILLS)
        .with_region(SERVICES_CARDS)
        .with_region(WHY_LIST)
        .with_region(PRICING_CARDS)
        .with_region(PORTFOLIO_FILTERS)
        .with_region(PORTFOLIO_GRID)
        // Simple calculator
        .with_select(CALC_TYPE)
        .with_input(CALC_PAGES, "1")
        .with_checkbox(CALC_SEO, false)
        .with_checkbox(CALC_ADMIN, false)
        .with_checkbox(CALC_API, false)
        .with_region(CALC_RESULT)
        // Quote calculator
        .with_select(QUOTE_TYPE)
        .with_select(QUOTE_DESIGN)
        .with_select(QUOTE_DEADLINE)
        .with_input(QUOTE_PAGES, "1")
        .with_checkbox(QUOTE_SEO, false)
        .with_checkbox(QUOTE_ADMIN, false)
        .with_checkbox(QUOTE_API, false)
        .with_checkbox(QUOTE_CONTENT, false)
        .with_region(QUOTE_PRICE)
        .with_region(QUOTE_BREAKDOWN)
}

/// A service detail page for `key` (the `servicePages` record name).
pub fn service_page(key: &str) -> Page {
    let mut page = header(Page::new(PageKind::Service {
        key: key.to_string(),
    }))
    .with_element(Element::new("back-home", "Back to home").with_text_key("servicePage.back"))
    .with_element(Element::new("service-cta", "Start a project").with_text_key("servicePage.cta"));

    for id in [
        SERVICE_TITLE,
        SERVICE_SUBTITLE,
        SERVICE_INTRO,
        SERVICE_OUTRO,
        SERVICE_PROCESS,
        SERVICE_DELIVERABLES,
        SERVICE_FIT,
    ] {
        page = page.with_region(id);
    }
    page
}

pub fn page_for(kind: &PageKind) -> Page {
    match kind {
        PageKind::Home => home_page(),
        PageKind::Service { key } => service_page(key),
    }
}
