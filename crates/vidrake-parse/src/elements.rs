use serde::{Deserialize, Serialize};

use crate::quality::Quality;

/// Structured metadata extracted from a single video filename.
///
/// Every field degrades to its default when the filename carries no
/// recognizable token; parsing never fails.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedInfo {
    /// Cleaned human-readable title. May be empty if the filename was
    /// composed entirely of metadata tokens.
    pub title: String,
    /// First standalone 19xx/20xx token, kept verbatim as a string.
    pub year: Option<String>,
    /// Season number from an `SxxEyy` token. Present iff `episode` is.
    pub season: Option<u32>,
    /// Episode number from an `SxxEyy` token. Present iff `season` is.
    pub episode: Option<u32>,
    /// Resolution class; `Unknown` when no pattern matched.
    pub quality: Quality,
}
