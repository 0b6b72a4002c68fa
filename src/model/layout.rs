//! Layout stream types produced by the external PDF layout parser.
//!
//! A document is an ordered sequence of pages, each page an ordered sequence
//! of text containers, each container an ordered sequence of text lines.
//! Every line carries its raw text and the character objects it was built
//! from, with the font name and point size of each glyph.

use serde::{Deserialize, Deserializer, Serialize};

/// A single glyph with its font metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutChar {
    /// Font name (e.g., "ABCDEF+Helvetica-Bold"); empty when unknown
    #[serde(default)]
    pub font_name: String,

    /// Font size in points; 0 when unknown
    #[serde(default, deserialize_with = "size_or_zero")]
    pub size: f32,
}

/// Missing or null sizes carry no signal.
fn size_or_zero<'de, D>(deserializer: D) -> Result<f32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f32>::deserialize(deserializer)?.unwrap_or(0.0))
}

impl LayoutChar {
    /// Create a new character object.
    pub fn new(font_name: impl Into<String>, size: f32) -> Self {
        Self {
            font_name: font_name.into(),
            size,
        }
    }

    /// Point size, with non-finite values reported as zero.
    pub fn effective_size(&self) -> f32 {
        if self.size.is_finite() {
            self.size
        } else {
            0.0
        }
    }
}

/// A physical text line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutLine {
    /// Raw text as emitted by the parser (may contain trailing newlines)
    pub text: String,

    /// Vertical position of the line's bottom edge (larger is higher on the page)
    #[serde(default)]
    pub y0: f32,

    /// Character objects making up the line
    #[serde(default)]
    pub chars: Vec<LayoutChar>,
}

impl LayoutLine {
    /// Create a line whose characters all share one font.
    pub fn uniform(text: impl Into<String>, y0: f32, font_name: &str, size: f32) -> Self {
        let text = text.into();
        let chars = text
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|_| LayoutChar::new(font_name, size))
            .collect();
        Self { text, y0, chars }
    }

    /// Create a line from explicit character objects.
    pub fn with_chars(text: impl Into<String>, y0: f32, chars: Vec<LayoutChar>) -> Self {
        Self {
            text: text.into(),
            y0,
            chars,
        }
    }
}

/// A block of lines grouped by the layout parser.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextContainer {
    /// Lines in reading order
    #[serde(default)]
    pub lines: Vec<LayoutLine>,
}

impl TextContainer {
    /// Create a container from lines.
    pub fn new(lines: Vec<LayoutLine>) -> Self {
        Self { lines }
    }
}

/// One page of layout output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutPage {
    /// Text containers in parser order
    #[serde(default)]
    pub containers: Vec<TextContainer>,
}

impl LayoutPage {
    /// Create an empty page.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a container to the page.
    pub fn add_container(&mut self, container: TextContainer) {
        self.containers.push(container);
    }

    /// Add a single-line container to the page.
    pub fn add_line(&mut self, line: LayoutLine) {
        self.containers.push(TextContainer::new(vec![line]));
    }

    /// Iterate over every line on the page.
    pub fn lines(&self) -> impl Iterator<Item = &LayoutLine> {
        self.containers.iter().flat_map(|c| c.lines.iter())
    }

    /// Plain text of the page, one line per layout line.
    pub fn plain_text(&self) -> String {
        self.lines()
            .map(|l| l.text.trim_end_matches(['\r', '\n']))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A complete layout dump for one document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutDocument {
    /// Pages in order
    #[serde(default)]
    pub pages: Vec<LayoutPage>,

    /// Full plain text, when the parser extracted it separately
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_text: Option<String>,
}

impl LayoutDocument {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a page to the document.
    pub fn add_page(&mut self, page: LayoutPage) {
        self.pages.push(page);
    }

    /// Set the separately extracted full text.
    pub fn with_full_text(mut self, text: impl Into<String>) -> Self {
        self.full_text = Some(text.into());
        self
    }

    /// Get the number of pages in the document.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Plain text of every page, pages separated by blank lines.
    pub fn plain_text(&self) -> String {
        self.pages
            .iter()
            .map(|page| page.plain_text())
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Load a document from a JSON layout dump.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
