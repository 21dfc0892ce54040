//! Root language, text direction and the `rtl` body flag.

use crate::dom::Page;
use crate::i18n::Language;

/// Body class toggled on for right-to-left languages.
pub const RTL_BODY_CLASS: &str = "rtl";

/// Apply `language` to the page root and body. Idempotent.
pub fn apply_direction(page: &mut Page, language: Language) {
    let direction = language.direction();
    page.root.lang = language.code().to_string();
    page.root.dir = direction;
    page.toggle_body_class(RTL_BODY_CLASS, direction.is_rtl());
}
