//! In-memory model of the rendered page.
//!
//! The renderers never touch a live browser DOM; they write into a `Page`.
//! A page holds the root attributes, body classes, statically tagged elements,
//! replaceable regions (addressed by element id, always replaced whole), form
//! controls and the project modal. `Page` serializes with `serde`, which is
//! how snapshots are compared and how the binary emits its output.

use crate::i18n::TextDirection;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Which page variant is being rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PageKind {
    Home,
    Service { key: String },
}

/// Attributes of the document root (`<html>`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RootAttributes {
    pub lang: String,
    pub dir: TextDirection,
}

impl Default for RootAttributes {
    fn default() -> Self {
        Self {
            lang: String::new(),
            dir: TextDirection::Ltr,
        }
    }
}

/// Translation keys an element declares through its data attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct I18nTags {
    /// `data-i18n`: replaces the visible text
    pub text: Option<String>,

    /// `data-i18n-placeholder`: replaces the `placeholder` attribute
    pub placeholder: Option<String>,

    /// `data-i18n-aria-label`: replaces the `aria-label` attribute
    pub aria_label: Option<String>,
}

/// A statically authored element that may carry translation tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Element {
    pub id: String,
    pub text: String,
    pub attributes: BTreeMap<String, String>,
    pub tags: I18nTags,
}

impl Element {
    /// An element with static fallback text and no tags.
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            attributes: BTreeMap::new(),
            tags: I18nTags::default(),
        }
    }

    pub fn with_text_key(mut self, key: impl Into<String>) -> Self {
        self.tags.text = Some(key.into());
        self
    }

    pub fn with_placeholder_key(mut self, key: impl Into<String>) -> Self {
        self.tags.placeholder = Some(key.into());
        self
    }

    pub fn with_aria_label_key(mut self, key: impl Into<String>) -> Self {
        self.tags.aria_label = Some(key.into());
        self
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// A `<select>` control. Options are rebuilt on render; `value` is user state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Select {
    pub options: Vec<SelectOption>,
    pub value: Option<String>,
}

impl Select {
    /// Label of the currently selected option, if any.
    pub fn selected_label(&self) -> Option<&str> {
        let value = self.value.as_deref()?;
        self.options
            .iter()
            .find(|option| option.value == value)
            .map(|option| option.label.as_str())
    }
}

/// The project detail overlay.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Modal {
    pub open: bool,
    pub title: String,
    pub description: String,
    pub link: String,
}

impl Modal {
    /// Value of the modal's `aria-hidden` attribute.
    pub fn aria_hidden(&self) -> &'static str {
        if self.open {
            "false"
        } else {
            "true"
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageButton {
    pub code: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    pub kind: PageKind,
    pub title: String,
    pub meta_description: String,
    pub root: RootAttributes,
    pub body_classes: BTreeSet<String>,
    pub elements: Vec<Element>,
    pub modal: Modal,
    pub language_buttons: Vec<LanguageButton>,
    regions: BTreeMap<String, String>,
    selects: BTreeMap<String, Select>,
    inputs: BTreeMap<String, String>,
    checkboxes: BTreeMap<String, bool>,
}

impl Page {
    pub fn new(kind: PageKind) -> Self {
        Self {
            kind,
            title: String::new(),
            meta_description: String::new(),
            root: RootAttributes::default(),
            body_classes: BTreeSet::new(),
            elements: Vec::new(),
            modal: Modal::default(),
            language_buttons: Vec::new(),
            regions: BTreeMap::new(),
            selects: BTreeMap::new(),
            inputs: BTreeMap::new(),
            checkboxes: BTreeMap::new(),
        }
    }

    // ==================== Construction ====================

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_element(mut self, element: Element) -> Self {
        self.elements.push(element);
        self
    }

    /// Declare an empty region that renderers may fill.
    pub fn with_region(mut self, id: &str) -> Self {
        self.regions.insert(id.to_string(), String::new());
        self
    }

    pub fn with_select(mut self, id: &str) -> Self {
        self.selects.insert(id.to_string(), Select::default());
        self
    }

    pub fn with_input(mut self, id: &str, value: &str) -> Self {
        self.inputs.insert(id.to_string(), value.to_string());
        self
    }

    pub fn with_checkbox(mut self, id: &str, checked: bool) -> Self {
        self.checkboxes.insert(id.to_string(), checked);
        self
    }

    pub fn with_language_buttons(mut self, codes: &[&str]) -> Self {
        self.language_buttons = codes
            .iter()
            .map(|code| LanguageButton {
                code: code.to_string(),
                active: false,
            })
            .collect();
        self
    }

    // ==================== Elements ====================

    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|element| element.id == id)
    }

    // ==================== Regions ====================

    pub fn has_region(&self, id: &str) -> bool {
        self.regions.contains_key(id)
    }

    pub fn region(&self, id: &str) -> Option<&str> {
        self.regions.get(id).map(String::as_str)
    }

    /// Replace a declared region's content. Undeclared regions are left alone.
    pub fn replace_region(&mut self, id: &str, content: String) -> bool {
        match self.regions.get_mut(id) {
            Some(region) => {
                *region = content;
                true
            }
            None => false,
        }
    }

    // ==================== Form controls ====================

    pub fn select(&self, id: &str) -> Option<&Select> {
        self.selects.get(id)
    }

    pub fn select_mut(&mut self, id: &str) -> Option<&mut Select> {
        self.selects.get_mut(id)
    }

    pub fn input(&self, id: &str) -> Option<&str> {
        self.inputs.get(id).map(String::as_str)
    }

    pub fn set_input(&mut self, id: &str, value: &str) -> bool {
        match self.inputs.get_mut(id) {
            Some(input) => {
                *input = value.to_string();
                true
            }
            None => false,
        }
    }

    pub fn checkbox(&self, id: &str) -> bool {
        self.checkboxes.get(id).copied().unwrap_or(false)
    }

    pub fn set_checkbox(&mut self, id: &str, checked: bool) -> bool {
        match self.checkboxes.get_mut(id) {
            Some(checkbox) => {
                *checkbox = checked;
                true
            }
            None => false,
        }
    }

    // ==================== Body classes ====================

    pub fn has_body_class(&self, class: &str) -> bool {
        self.body_classes.contains(class)
    }

    pub fn toggle_body_class(&mut self, class: &str, on: bool) {
        if on {
            self.body_classes.insert(class.to_string());
        } else {
            self.body_classes.remove(class);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_region_only_when_declared() {
        let mut page = Page::new(PageKind::Home).with_region("services-cards");
        assert!(page.replace_region("services-cards", "<article/>".to_string()));
        assert!(!page.replace_region("pricing-cards", "<article/>".to_string()));
        assert_eq!(page.region("services-cards"), Some("<article/>"));
        assert_eq!(page.region("pricing-cards"), None);
    }

    #[test]
    fn test_set_input_only_when_declared() {
        let mut page = Page::new(PageKind::Home).with_input("calc-pages", "1");
        assert!(page.set_input("calc-pages", "5"));
        assert!(!page.set_input("quote-pages", "5"));
        assert_eq!(page.input("calc-pages"), Some("5"));
    }

    #[test]
    fn test_checkbox_defaults_to_unchecked() {
        let mut page = Page::new(PageKind::Home).with_checkbox("calc-seo", false);
        assert!(!page.checkbox("calc-seo"));
        assert!(page.set_checkbox("calc-seo", true));
        assert!(page.checkbox("calc-seo"));
        assert!(!page.checkbox("missing"));
    }

    #[test]
    fn test_toggle_body_class() {
        let mut page = Page::new(PageKind::Home);
        page.toggle_body_class("rtl", true);
        page.toggle_body_class("rtl", true);
        assert!(page.has_body_class("rtl"));
        assert_eq!(page.body_classes.len(), 1);
        page.toggle_body_class("rtl", false);
        assert!(!page.has_body_class("rtl"));
    }

    #[test]
    fn test_select_selected_label() {
        let select = Select {
            options: vec![
                SelectOption {
                    value: "Landing".to_string(),
                    label: "Landing page".to_string(),
                },
                SelectOption {
                    value: "Business".to_string(),
                    label: "Business site".to_string(),
                },
            ],
            value: Some("Business".to_string()),
        };
        assert_eq!(select.selected_label(), Some("Business site"));
    }

    #[test]
    fn test_modal_aria_hidden() {
        let mut modal = Modal::default();
        assert_eq!(modal.aria_hidden(), "true");
        modal.open = true;
        assert_eq!(modal.aria_hidden(), "false");
    }

    #[test]
    fn test_element_builder() {
        let element = Element::new("contact-email", "")
            .with_placeholder_key("contact.form.email")
            .with_attribute("type", "email");
        assert_eq!(element.tags.placeholder.as_deref(), Some("contact.form.email"));
        assert_eq!(element.attribute("type"), Some("email"));
        assert!(element.tags.text.is_none());
    }
}
