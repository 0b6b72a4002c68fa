//! Data model for outline extraction.
//!
//! Three layers: the layout stream consumed from the external PDF parser,
//! the per-line records the heading pipeline works on, and the final
//! outline handed back to callers.

mod layout;
mod line;
mod outline;

pub use layout::{LayoutChar, LayoutDocument, LayoutLine, LayoutPage, TextContainer};
pub use line::{clean_text, HeadingCandidate, HeadingLevel, LineRecord};
pub(crate) use line::char_len;
pub use outline::{DetectedLanguage, LanguageSummary, Outline, OutlineEntry};
