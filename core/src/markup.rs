//! List item template for a [`CategoryRecord`].

use crate::record::CategoryRecord;

/// Class applied to the `label` wrapping each item's text.
pub const LABEL_CLASS: &str = "checkbox";

/// Structured form of one rendered list item.
///
/// Hosts that build native elements read the fields directly; hosts that take
/// markup use [`Fragment::to_html`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    /// Element id of the list item. Equal to the record key.
    pub id: String,
    /// Anchor target.
    pub href: String,
    /// Text of the inner span: `"{key} {display_name}"`.
    pub text: String,
}

impl Fragment {
    /// Builds the fragment for a record.
    #[must_use]
    pub fn from_record(record: &CategoryRecord) -> Self {
        Self {
            id: record.key.clone(),
            href: record.search_url.clone(),
            text: record.label(),
        }
    }

    /// Serializes the fragment, one element per line.
    #[must_use]
    pub fn to_html(&self) -> String {
        [
            format!("<li id=\"{}\">", escape(&self.id)),
            format!("<a href=\"{}\">", escape(&self.href)),
            format!("<label class=\"{LABEL_CLASS}\">"),
            format!("<span class=\"\">{}</span>", escape(&self.text)),
            "</label>".to_owned(),
            "</a>".to_owned(),
            "</li>".to_owned(),
        ]
        .join("\n")
    }
}

/// Escapes the characters that are significant in HTML text and attribute values.
#[must_use]
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Renders every fragment of an iterator of records as one document.
#[must_use]
pub fn render_all<'a>(records: impl IntoIterator<Item = &'a CategoryRecord>) -> String {
    let mut out = String::new();
    for (index, record) in records.into_iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        out.push_str(&Fragment::from_record(record).to_html());
    }
    out
}
