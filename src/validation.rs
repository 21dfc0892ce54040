//! Contact form validation.
//!
//! Rules are fixed; the error messages come from the current translation
//! document (`demos.validation.errors.{field}`), so they follow the active
//! language like every other piece of text.

use crate::dom::Page;
use crate::i18n::TranslationDocument;
use crate::render::html::escape;
use regex::Regex;
use std::sync::OnceLock;

static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
static PHONE_REGEX: OnceLock<Regex> = OnceLock::new();
static PHONE_STRIP_REGEX: OnceLock<Regex> = OnceLock::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationField {
    Name,
    Email,
    Phone,
    Message,
}

impl ValidationField {
    pub const ALL: [ValidationField; 4] = [
        ValidationField::Name,
        ValidationField::Email,
        ValidationField::Phone,
        ValidationField::Message,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            ValidationField::Name => "name",
            ValidationField::Email => "email",
            ValidationField::Phone => "phone",
            ValidationField::Message => "message",
        }
    }

    pub fn input_id(&self) -> &'static str {
        match self {
            ValidationField::Name => "v-name",
            ValidationField::Email => "v-email",
            ValidationField::Phone => "v-phone",
            ValidationField::Message => "v-message",
        }
    }

    pub fn error_id(&self) -> &'static str {
        match self {
            ValidationField::Name => "e-name",
            ValidationField::Email => "e-email",
            ValidationField::Phone => "e-phone",
            ValidationField::Message => "e-message",
        }
    }

    pub fn is_valid(&self, value: &str) -> bool {
        match self {
            ValidationField::Name => value.trim().chars().count() >= 2,
            ValidationField::Email => is_valid_email(value),
            ValidationField::Phone => is_valid_israeli_phone(value),
            ValidationField::Message => value.trim().chars().count() >= 10,
        }
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX
        .get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap())
        .is_match(email)
}

/// Israeli landline or mobile, with `+972` or a leading `0`.
pub fn is_valid_israeli_phone(phone: &str) -> bool {
    let strip = PHONE_STRIP_REGEX.get_or_init(|| Regex::new(r"[^\d+]").unwrap());
    let normalized = strip.replace_all(phone, "");
    PHONE_REGEX
        .get_or_init(|| Regex::new(r"^(\+972|0)([2-9]|5\d)\d{7}$").unwrap())
        .is_match(&normalized)
}

/// Validate one field and write its (translated) error, or clear it.
pub fn validate_field(page: &mut Page, field: ValidationField, doc: &TranslationDocument) -> bool {
    let value = page.input(field.input_id()).unwrap_or_default();
    let valid = field.is_valid(value);
    let message = if valid {
        String::new()
    } else {
        escape(doc.text(&format!("demos.validation.errors.{}", field.key())))
    };
    page.replace_region(field.error_id(), message);
    valid
}

/// Re-resolve the errors currently shown, e.g. after a language change.
/// Fields without a visible error stay untouched.
pub fn refresh_shown_errors(page: &mut Page, doc: &TranslationDocument) {
    for field in ValidationField::ALL {
        if page.region(field.error_id()).is_some_and(|error| !error.is_empty()) {
            validate_field(page, field, doc);
        }
    }
}

/// Validate every field (no short-circuit, so all errors show).
pub fn validate_form(page: &mut Page, doc: &TranslationDocument) -> bool {
    ValidationField::ALL
        .into_iter()
        .map(|field| validate_field(page, field, doc))
        .fold(true, |all, valid| all && valid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::PageKind;
    use serde_json::json;

    fn form_page() -> Page {
        let mut page = Page::new(PageKind::Home);
        for field in ValidationField::ALL {
            page = page.with_input(field.input_id(), "").with_region(field.error_id());
        }
        page
    }

    fn document() -> TranslationDocument {
        TranslationDocument::from_value(json!({
            "demos": { "validation": { "errors": {
                "name": "Name is too short",
                "email": "Invalid email"
            } } }
        }))
        .unwrap()
    }

    // ==================== Rule Tests ====================

    #[test]
    fn test_email_rule() {
        assert!(is_valid_email("dev@example.co.il"));
        assert!(!is_valid_email("dev@example"));
        assert!(!is_valid_email("dev @example.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_israeli_phone_rule() {
        assert!(is_valid_israeli_phone("050-123-4567"));
        assert!(is_valid_israeli_phone("+972 50 123 4567"));
        assert!(is_valid_israeli_phone("03-1234567"));
        assert!(!is_valid_israeli_phone("01-1234567"));
        assert!(!is_valid_israeli_phone("+1 555 123 4567"));
        assert!(!is_valid_israeli_phone(""));
    }

    #[test]
    fn test_length_rules_trim() {
        assert!(!ValidationField::Name.is_valid(" a "));
        assert!(ValidationField::Name.is_valid("Al"));
        assert!(!ValidationField::Message.is_valid("too short"));
        assert!(ValidationField::Message.is_valid("long enough message"));
    }

    // ==================== Page Tests ====================

    #[test]
    fn test_validate_field_writes_translated_error() {
        let mut page = form_page();
        page.set_input("v-email", "nope");
        assert!(!validate_field(&mut page, ValidationField::Email, &document()));
        assert_eq!(page.region("e-email"), Some("Invalid email"));

        page.set_input("v-email", "a@b.co");
        assert!(validate_field(&mut page, ValidationField::Email, &document()));
        assert_eq!(page.region("e-email"), Some(""));
    }

    #[test]
    fn test_validate_form_reports_every_field() {
        let mut page = form_page();
        page.set_input("v-email", "a@b.co");
        assert!(!validate_form(&mut page, &document()));
        assert_eq!(page.region("e-name"), Some("Name is too short"));
        assert_eq!(page.region("e-email"), Some(""));
        // Missing translation degrades to an empty message
        assert_eq!(page.region("e-phone"), Some(""));
    }

    #[test]
    fn test_refresh_shown_errors_follows_document() {
        let mut page = form_page();
        page.set_input("v-email", "nope");
        validate_field(&mut page, ValidationField::Email, &document());

        let other = TranslationDocument::from_value(json!({
            "demos": { "validation": { "errors": {
                "name": "Имя слишком короткое",
                "email": "Неверный email"
            } } }
        }))
        .unwrap();
        refresh_shown_errors(&mut page, &other);

        assert_eq!(page.region("e-email"), Some("Неверный email"));
        // Never-validated fields stay blank
        assert_eq!(page.region("e-name"), Some(""));
    }

    #[test]
    fn test_validate_form_all_valid() {
        let mut page = form_page();
        page.set_input("v-name", "Dana");
        page.set_input("v-email", "dana@example.com");
        page.set_input("v-phone", "052-765-4321");
        page.set_input("v-message", "Need a new online store");
        assert!(validate_form(&mut page, &document()));
    }
}
