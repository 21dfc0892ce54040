//! Small HTML fragment builders shared by the section renderers.
//!
//! All translated text and catalog values pass through `escape` before they
//! are interpolated into markup.

/// Escape text for use in element content and double-quoted attributes.
pub fn escape(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}

/// A titled card with an optional description paragraph.
pub fn card(title: &str, description: &str) -> String {
    let description = if description.is_empty() {
        String::new()
    } else {
        format!("<p>{}</p>", escape(description))
    };
    format!(
        r#"<article class="card"><h3>{}</h3>{}</article>"#,
        escape(title),
        description
    )
}

/// `<li>` items, one per entry.
pub fn list_items<'a>(items: impl IntoIterator<Item = &'a str>) -> String {
    items
        .into_iter()
        .map(|item| format!("<li>{}</li>", escape(item)))
        .collect()
}
