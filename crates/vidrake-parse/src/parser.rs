use std::sync::LazyLock;

use regex::Regex;

use crate::elements::ParsedInfo;
use crate::keyword::{self, KeywordKind};
use crate::quality;

/// Trailing extension: last dot plus everything after it, provided the tail
/// contains no further dot or slash.
static RE_EXTENSION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.[^/.]+$").unwrap());

/// Standalone 4-digit year, 1900-2099.
static RE_YEAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b(19|20)\d{2}\b").unwrap());

/// Season/episode token: `S01E05`, `s2e9`, etc.
static RE_EPISODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)S(\d{1,2})E(\d{1,2})").unwrap());

/// Separator characters normalized to spaces during title cleaning.
static RE_SEPARATORS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[._-]+").unwrap());

static RE_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Parse a video filename into structured metadata.
///
/// Total function: unmatched fields take their absent/`Unknown` default.
///
/// # Example
/// ```
/// use vidrake_parse::Quality;
///
/// let info = vidrake_parse::parse("Movie.Title.2021.1080p.x264.mkv");
/// assert_eq!(info.title, "Movie Title");
/// assert_eq!(info.year.as_deref(), Some("2021"));
/// assert_eq!(info.quality, Quality::P1080);
/// assert_eq!(info.season, None);
/// ```
pub fn parse(filename: &str) -> ParsedInfo {
    let name = strip_extension(filename);

    let quality = quality::detect(name);
    let year = RE_YEAR.find(name).map(|m| m.as_str().to_string());

    // Both numbers come from one token, so they are both set or both absent.
    let (season, episode) = match RE_EPISODE.captures(name).and_then(|caps| {
        let s: u32 = caps[1].parse().ok()?;
        let e: u32 = caps[2].parse().ok()?;
        Some((s, e))
    }) {
        Some((s, e)) => (Some(s), Some(e)),
        None => (None, None),
    };

    ParsedInfo {
        title: clean_title(name),
        year,
        season,
        episode,
        quality,
    }
}

fn strip_extension(filename: &str) -> &str {
    match RE_EXTENSION.find(filename) {
        Some(m) => &filename[..m.start()],
        None => filename,
    }
}

/// Build the display title by stripping recognized metadata tokens.
///
/// Removal order is fixed (year, episode token, quality alias, codec tag —
/// each first-occurrence-only) and separator collapsing runs last, so holes
/// left by adjacent tokens cannot reintroduce artifacts.
fn clean_title(name: &str) -> String {
    let name = RE_YEAR.replace(name, "");
    let name = RE_EPISODE.replace(&name, "");
    let name = keyword::remove_first(&name, KeywordKind::QualityAlias);
    let name = keyword::remove_first(&name, KeywordKind::Codec);
    let name = RE_SEPARATORS.replace_all(&name, " ");
    let name = RE_WHITESPACE.replace_all(&name, " ");
    name.trim().to_string()
}
