use std::sync::LazyLock;

use phf::phf_map;
use regex::Regex;

/// The category a removable metadata token belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeywordKind {
    /// A resolution alias such as "1080p" or "uhd".
    QualityAlias,
    /// A video/audio codec tag such as "x265" or "aac".
    Codec,
}

/// Compile-time keyword lookup table.
/// All keys are UPPERCASE for case-insensitive matching.
pub static KEYWORDS: phf::Map<&'static str, KeywordKind> = phf_map! {
    // Quality aliases, all tiers
    "4K" => KeywordKind::QualityAlias,
    "2160P" => KeywordKind::QualityAlias,
    "UHD" => KeywordKind::QualityAlias,
    "1080P" => KeywordKind::QualityAlias,
    "1080I" => KeywordKind::QualityAlias,
    "FHD" => KeywordKind::QualityAlias,
    "720P" => KeywordKind::QualityAlias,
    "720I" => KeywordKind::QualityAlias,
    "HD" => KeywordKind::QualityAlias,
    "480P" => KeywordKind::QualityAlias,
    "480I" => KeywordKind::QualityAlias,
    "SD" => KeywordKind::QualityAlias,

    // Codec tags
    "X264" => KeywordKind::Codec,
    "X265" => KeywordKind::Codec,
    "HEVC" => KeywordKind::Codec,
    "AAC" => KeywordKind::Codec,
    "AC3" => KeywordKind::Codec,
};

/// Look up a keyword (case-insensitive).
pub fn lookup(s: &str) -> Option<KeywordKind> {
    KEYWORDS.get(s.to_uppercase().as_str()).copied()
}

static RE_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9A-Za-z]+").unwrap());

/// Remove the first whole-word token of the given kind, leaving the rest of
/// the string untouched. Separator collapsing happens later in the pipeline,
/// so the hole left behind is harmless.
pub fn remove_first(name: &str, kind: KeywordKind) -> String {
    for m in RE_WORD.find_iter(name) {
        if lookup(m.as_str()) == Some(kind) {
            let mut out = String::with_capacity(name.len());
            out.push_str(&name[..m.start()]);
            out.push_str(&name[m.end()..]);
            return out;
        }
    }
    name.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_case_insensitive() {
        assert_eq!(lookup("hevc"), Some(KeywordKind::Codec));
        assert_eq!(lookup("HEVC"), Some(KeywordKind::Codec));
        assert_eq!(lookup("1080p"), Some(KeywordKind::QualityAlias));
        assert_eq!(lookup("title"), None);
    }

    #[test]
    fn test_remove_first_only() {
        let out = remove_first("Movie.1080p.720p", KeywordKind::QualityAlias);
        assert_eq!(out, "Movie..720p");
    }

    #[test]
    fn test_remove_respects_kind() {
        let out = remove_first("Movie.x264.1080p", KeywordKind::QualityAlias);
        assert_eq!(out, "Movie.x264.");
        let out = remove_first("Movie.x264.1080p", KeywordKind::Codec);
        assert_eq!(out, "Movie..1080p");
    }

    #[test]
    fn test_remove_no_match() {
        assert_eq!(remove_first("Plain.Title", KeywordKind::Codec), "Plain.Title");
    }
}
