//! Content document types
//!
//! The page is driven by one JSON document:
//!
//! ```json
//! {
//!   "project_info": { "title": "...", "subtitle": "...", "footer_text": "..." },
//!   "events": [
//!     { "icon": "🎓", "year": 2010, "age": "18", "title": "...", "description": "..." }
//!   ]
//! }
//! ```
//!
//! Records have no identity beyond their position in `events`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::LifelineResult;

/// Page-level text taken verbatim from the content document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectInfo {
    pub title: String,
    pub subtitle: String,
    pub footer_text: String,
}

/// A scalar that authors write either as a string or as a number.
///
/// Rendered exactly as written: `1990`, `"1990s"` and `12.5` all display
/// without quotes or reformatting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Number(serde_json::Number),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<u32> for FieldValue {
    fn from(n: u32) -> Self {
        FieldValue::Number(n.into())
    }
}

/// One timeline entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Icon glyph (emoji/text) or icon markup token
    pub icon: String,
    pub year: FieldValue,
    pub age: FieldValue,
    pub title: String,
    pub description: String,
}

impl EventRecord {
    pub fn parsed_icon(&self) -> EventIcon {
        EventIcon::parse(&self.icon)
    }
}

/// The whole content document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentDocument {
    pub project_info: ProjectInfo,
    /// Rendered in document order
    pub events: Vec<EventRecord>,
}

impl ContentDocument {
    /// Parse a content document from raw JSON bytes
    pub fn from_json(bytes: &[u8]) -> LifelineResult<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

/// How an event icon is drawn.
///
/// Icons are never inserted as raw markup. A Font Awesome class list (bare
/// or wrapped in an `<i class="...">` tag) becomes an icon element; anything
/// else is shown as literal text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventIcon {
    /// Text glyph, typically an emoji
    Glyph(String),
    /// CSS class list for an icon font element
    IconClass(String),
}

impl EventIcon {
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();

        if trimmed.starts_with('<') {
            return match markup_class(trimmed) {
                Some(class) if is_icon_class_list(class) => EventIcon::IconClass(class.to_string()),
                _ => EventIcon::Glyph(raw.to_string()),
            };
        }

        if is_icon_class_list(trimmed) {
            EventIcon::IconClass(trimmed.to_string())
        } else {
            EventIcon::Glyph(raw.to_string())
        }
    }
}

/// `fa-solid fa-star`, `fa fa-star`; at least one `fa-` token, nothing foreign
fn is_icon_class_list(s: &str) -> bool {
    let mut saw_icon = false;
    for token in s.split_whitespace() {
        if token.starts_with("fa-") && token.len() > 3 {
            saw_icon = true;
        } else if token != "fa" {
            return false;
        }
    }
    saw_icon
}

/// Value of the `class` attribute of a single tag, if any
fn markup_class(tag: &str) -> Option<&str> {
    let start = tag.find("class=")? + "class=".len();
    let rest = &tag[start..];
    let quote = rest.chars().next().filter(|c| *c == '"' || *c == '\'')?;
    let body = &rest[1..];
    let end = body.find(quote)?;
    Some(body[..end].trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_value_accepts_string_and_number() {
        let json = r#"{"icon":"🎓","year":2010,"age":"18","title":"t","description":"d"}"#;
        let event: EventRecord = serde_json::from_str(json).unwrap();
        assert_eq!(event.year.to_string(), "2010");
        assert_eq!(event.age.to_string(), "18");
        assert_eq!(event.year, FieldValue::from(2010));
        assert_eq!(event.age, FieldValue::from("18"));
    }

    #[test]
    fn test_field_value_keeps_fractions() {
        let value: FieldValue = serde_json::from_str("12.5").unwrap();
        assert_eq!(value.to_string(), "12.5");
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let json = r#"{"icon":"🎓","year":2010,"title":"t","description":"d"}"#;
        assert!(serde_json::from_str::<EventRecord>(json).is_err());
    }

    #[test]
    fn test_icon_glyph() {
        assert_eq!(EventIcon::parse("🎓"), EventIcon::Glyph("🎓".to_string()));
        assert_eq!(EventIcon::parse("★"), EventIcon::Glyph("★".to_string()));
    }

    #[test]
    fn test_icon_bare_class_list() {
        assert_eq!(
            EventIcon::parse("fa-solid fa-graduation-cap"),
            EventIcon::IconClass("fa-solid fa-graduation-cap".to_string())
        );
        assert_eq!(
            EventIcon::parse("fa fa-star"),
            EventIcon::IconClass("fa fa-star".to_string())
        );
    }

    #[test]
    fn test_icon_markup_token() {
        assert_eq!(
            EventIcon::parse(r#"<i class="fa-solid fa-baby"></i>"#),
            EventIcon::IconClass("fa-solid fa-baby".to_string())
        );
        assert_eq!(
            EventIcon::parse("<i class='fa-brands fa-github'></i>"),
            EventIcon::IconClass("fa-brands fa-github".to_string())
        );
    }

    #[test]
    fn test_foreign_markup_stays_text() {
        let raw = r#"<img src=x onerror="alert(1)">"#;
        assert_eq!(EventIcon::parse(raw), EventIcon::Glyph(raw.to_string()));

        let raw = r#"<i class="fa-solid evil"></i>"#;
        assert_eq!(EventIcon::parse(raw), EventIcon::Glyph(raw.to_string()));
    }

    #[test]
    fn test_plain_words_are_not_classes() {
        assert_eq!(
            EventIcon::parse("fa"),
            EventIcon::Glyph("fa".to_string())
        );
        assert_eq!(
            EventIcon::parse("fa- x"),
            EventIcon::Glyph("fa- x".to_string())
        );
    }
}
