//! Projection of translated text into tagged elements.
//!
//! `plan_projection` is a pure function from a document and the tagged
//! elements to the list of writes; `project` applies that plan. Keys that do
//! not resolve, or resolve to an empty string, produce no write, so static
//! fallback markup stays in place.

use crate::dom::{Element, Page};
use crate::i18n::TranslationDocument;
use tracing::debug;

/// Where a projected value lands on an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectionTarget {
    Text,
    Placeholder,
    AriaLabel,
}

impl ProjectionTarget {
    /// Attribute name written by this target; `None` for text content.
    pub fn attribute(&self) -> Option<&'static str> {
        match self {
            ProjectionTarget::Text => None,
            ProjectionTarget::Placeholder => Some("placeholder"),
            ProjectionTarget::AriaLabel => Some("aria-label"),
        }
    }
}

/// One write produced by the projection plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectionWrite {
    /// Index of the element in the page's element list
    pub element: usize,
    pub target: ProjectionTarget,
    pub value: String,
}

/// Compute every write for the given elements.
pub fn plan_projection(document: &TranslationDocument, elements: &[Element]) -> Vec<ProjectionWrite> {
    let mut writes = Vec::new();

    for (index, element) in elements.iter().enumerate() {
        let tagged = [
            (ProjectionTarget::Text, &element.tags.text),
            (ProjectionTarget::Placeholder, &element.tags.placeholder),
            (ProjectionTarget::AriaLabel, &element.tags.aria_label),
        ];

        for (target, key) in tagged {
            let Some(key) = key else { continue };
            match document.resolve(key) {
                Some(value) if !value.is_empty() => writes.push(ProjectionWrite {
                    element: index,
                    target,
                    value: value.to_string(),
                }),
                _ => {}
            }
        }
    }

    writes
}

/// Apply planned writes to the page.
pub fn apply_projection(page: &mut Page, writes: Vec<ProjectionWrite>) {
    for write in writes {
        let Some(element) = page.elements.get_mut(write.element) else {
            continue;
        };
        match write.target.attribute() {
            None => element.text = write.value,
            Some(name) => {
                element.attributes.insert(name.to_string(), write.value);
            }
        }
    }
}

/// Re-project the whole page. Returns the number of writes applied.
pub fn project(page: &mut Page, document: &TranslationDocument) -> usize {
    let writes = plan_projection(document, &page.elements);
    let count = writes.len();
    apply_projection(page, writes);
    debug!("Projected {} translated values", count);
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::PageKind;
    use serde_json::json;

    fn document() -> TranslationDocument {
        TranslationDocument::from_value(json!({
            "nav": { "services": "Services", "blank": "" },
            "contact": { "email": "Your email" },
            "a11y": { "menu": "Open menu" }
        }))
        .unwrap()
    }

    fn page() -> Page {
        Page::new(PageKind::Home)
            .with_element(Element::new("nav-services", "Services (static)").with_text_key("nav.services"))
            .with_element(Element::new("nav-blank", "Keep me").with_text_key("nav.blank"))
            .with_element(Element::new("nav-missing", "Fallback").with_text_key("nav.missing"))
            .with_element(Element::new("contact-email", "").with_placeholder_key("contact.email"))
            .with_element(Element::new("menu-toggle", "☰").with_aria_label_key("a11y.menu"))
            .with_element(Element::new("plain", "No tags"))
    }

    // ==================== plan_projection Tests ====================

    #[test]
    fn test_plan_covers_three_categories() {
        let p = page();
        let writes = plan_projection(&document(), &p.elements);
        let targets: Vec<_> = writes.iter().map(|w| (w.element, w.target)).collect();
        assert_eq!(
            targets,
            vec![
                (0, ProjectionTarget::Text),
                (3, ProjectionTarget::Placeholder),
                (4, ProjectionTarget::AriaLabel),
            ]
        );
    }

    #[test]
    fn test_plan_skips_empty_and_missing() {
        let p = page();
        let writes = plan_projection(&document(), &p.elements);
        assert!(writes.iter().all(|w| w.element != 1 && w.element != 2));
    }

    #[test]
    fn test_plan_on_empty_document_is_empty() {
        let p = page();
        assert!(plan_projection(&TranslationDocument::empty(), &p.elements).is_empty());
    }

    // ==================== project Tests ====================

    #[test]
    fn test_project_writes_text_and_attributes() {
        let mut p = page();
        let count = project(&mut p, &document());

        assert_eq!(count, 3);
        assert_eq!(p.element("nav-services").unwrap().text, "Services");
        assert_eq!(p.element("nav-blank").unwrap().text, "Keep me");
        assert_eq!(p.element("nav-missing").unwrap().text, "Fallback");
        assert_eq!(
            p.element("contact-email").unwrap().attribute("placeholder"),
            Some("Your email")
        );
        assert_eq!(
            p.element("menu-toggle").unwrap().attribute("aria-label"),
            Some("Open menu")
        );
        assert_eq!(p.element("menu-toggle").unwrap().text, "☰");
    }

    #[test]
    fn test_project_twice_is_identical() {
        let mut p = page();
        project(&mut p, &document());
        let first = serde_json::to_string(&p).unwrap();
        project(&mut p, &document());
        let second = serde_json::to_string(&p).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_project_keeps_previous_value_when_new_document_lacks_key() {
        let mut p = page();
        project(&mut p, &document());
        project(&mut p, &TranslationDocument::empty());
        assert_eq!(p.element("nav-services").unwrap().text, "Services");
    }
}
