//! Translation documents and dotted key path resolution.
//!
//! A document is the parsed JSON tree for one language. Lookups never fail:
//! a path that does not end on a string leaf is simply missing, and the
//! render layer turns "missing" into an empty string only when it writes.

use serde_json::{Map, Value};

/// Immutable, nested string tree for one language.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TranslationDocument {
    root: Map<String, Value>,
}

impl TranslationDocument {
    /// An empty document; every path resolves to missing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Wrap a parsed JSON value. Only an object is a well-formed document.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(root) => Some(Self { root }),
            _ => None,
        }
    }

    /// Parse a document from JSON text.
    pub fn parse(text: &str) -> Result<Self, String> {
        let value: Value = serde_json::from_str(text).map_err(|e| e.to_string())?;
        Self::from_value(value).ok_or_else(|| "document root is not an object".to_string())
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Walk `path` segment by segment. Numeric segments also index arrays.
    pub fn lookup(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        let first = segments.next()?;
        let mut node = self.root.get(first)?;

        for segment in segments {
            node = match node {
                Value::Object(map) => map.get(segment)?,
                Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }

        Some(node)
    }

    /// Resolve `path` to a string leaf; anything else is missing.
    pub fn resolve(&self, path: &str) -> Option<&str> {
        self.lookup(path).and_then(Value::as_str)
    }

    /// Resolve `path`, collapsing missing to `""`.
    pub fn text(&self, path: &str) -> &str {
        self.resolve(path).unwrap_or_default()
    }

    /// Resolve `path` to a list of strings. Non-string entries are skipped.
    pub fn list(&self, path: &str) -> Vec<&str> {
        match self.lookup(path) {
            Some(Value::Array(items)) => items.iter().filter_map(Value::as_str).collect(),
            _ => Vec::new(),
        }
    }

    /// Whether `path` leads to a nested record (an object).
    pub fn has_record(&self, path: &str) -> bool {
        matches!(self.lookup(path), Some(Value::Object(_)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn sample() -> TranslationDocument {
        TranslationDocument::from_value(json!({
            "nav": { "home": "Home", "empty": "" },
            "portfolio": {
                "projects": {
                    "1": { "title": "Law Firm", "short": "Corporate site" }
                }
            },
            "servicePages": {
                "landing": { "process": ["Brief", 7, "Launch"] }
            },
            "count": 3
        }))
        .unwrap()
    }

    // ==================== resolve Tests ====================

    #[test]
    fn test_resolve_nested_leaf() {
        assert_eq!(sample().resolve("nav.home"), Some("Home"));
        assert_eq!(sample().resolve("portfolio.projects.1.title"), Some("Law Firm"));
    }

    #[test]
    fn test_resolve_distinguishes_empty_from_missing() {
        let doc = sample();
        assert_eq!(doc.resolve("nav.empty"), Some(""));
        assert_eq!(doc.resolve("nav.missing"), None);
    }

    #[test]
    fn test_resolve_container_is_missing() {
        assert_eq!(sample().resolve("nav"), None);
        assert_eq!(sample().resolve("portfolio.projects.1"), None);
    }

    #[test]
    fn test_resolve_non_string_leaf_is_missing() {
        assert_eq!(sample().resolve("count"), None);
    }

    #[test]
    fn test_resolve_through_leaf_is_missing() {
        assert_eq!(sample().resolve("nav.home.deeper"), None);
    }

    #[test]
    fn test_resolve_array_index() {
        assert_eq!(sample().resolve("servicePages.landing.process.0"), Some("Brief"));
        assert_eq!(sample().resolve("servicePages.landing.process.9"), None);
        assert_eq!(sample().resolve("servicePages.landing.process.x"), None);
    }

    #[test]
    fn test_text_on_empty_document() {
        let doc = TranslationDocument::empty();
        assert_eq!(doc.text("a.b.c"), "");
        assert_eq!(doc.text(""), "");
        assert_eq!(doc.text("..."), "");
    }

    // ==================== list Tests ====================

    #[test]
    fn test_list_skips_non_strings() {
        assert_eq!(sample().list("servicePages.landing.process"), vec!["Brief", "Launch"]);
    }

    #[test]
    fn test_list_of_non_array_is_empty() {
        assert!(sample().list("nav.home").is_empty());
        assert!(sample().list("nope").is_empty());
    }

    #[test]
    fn test_has_record() {
        assert!(sample().has_record("portfolio.projects.1"));
        assert!(!sample().has_record("nav.home"));
        assert!(!sample().has_record("portfolio.projects.2"));
    }

    // ==================== parse Tests ====================

    #[test]
    fn test_parse_rejects_non_object_root() {
        assert!(TranslationDocument::parse("[1, 2]").is_err());
        assert!(TranslationDocument::parse("\"text\"").is_err());
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        assert!(TranslationDocument::parse("{\"nav\": ").is_err());
    }

    #[test]
    fn test_parse_accepts_object() {
        let doc = TranslationDocument::parse(r#"{"a": {"b": "c"}}"#).unwrap();
        assert_eq!(doc.text("a.b"), "c");
    }

    // ==================== Property Tests ====================

    fn arb_json() -> impl Strategy<Value = Value> {
        let leaf = prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i64>().prop_map(|n| json!(n)),
            "[a-z0-9]{0,6}".prop_map(Value::String),
        ];
        leaf.prop_recursive(4, 32, 4, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
                prop::collection::btree_map("[a-z0-9]{1,3}", inner, 0..4)
                    .prop_map(|m| Value::Object(m.into_iter().collect())),
            ]
        })
    }

    proptest! {
        #[test]
        fn prop_text_is_total(value in arb_json(), path in "[a-z0-9.]{0,12}") {
            let doc = TranslationDocument::from_value(value).unwrap_or_default();
            let text = doc.text(&path);
            match doc.lookup(&path) {
                Some(Value::String(s)) => prop_assert_eq!(text, s.as_str()),
                _ => prop_assert_eq!(text, ""),
            }
        }

        #[test]
        fn prop_empty_document_resolves_nothing(path in ".{0,24}") {
            let empty = TranslationDocument::empty();
            prop_assert_eq!(empty.resolve(&path), None);
        }
    }
}
