//! JSON rendering for outlines.

use serde::Serialize;

use crate::error::{Error, Result};

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Serialize an outline (or any outline-shaped record) to JSON.
///
/// Non-ASCII text is written as-is, not escaped.
pub fn to_json<T: Serialize + ?Sized>(value: &T, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(value),
        JsonFormat::Compact => serde_json::to_string(value),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{HeadingLevel, Outline, OutlineEntry};

    fn sample() -> Outline {
        Outline {
            title: "Übersicht".to_string(),
            outline: vec![OutlineEntry {
                level: HeadingLevel::H1,
                text: "Einleitung".to_string(),
                page: 0,
            }],
            languages: None,
        }
    }

    #[test]
    fn test_to_json_pretty() {
        let json = to_json(&sample(), JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"title\": \"Übersicht\""));
        assert!(json.contains("\"level\": \"H1\""));
        assert!(json.contains('\n')); // Pretty has newlines
    }

    #[test]
    fn test_to_json_compact() {
        let json = to_json(&sample(), JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n')); // Compact has no newlines
        assert_eq!(
            json,
            r#"{"title":"Übersicht","outline":[{"level":"H1","text":"Einleitung","page":0}]}"#
        );
    }
}
