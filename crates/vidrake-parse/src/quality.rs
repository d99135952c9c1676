use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Coarse resolution class derived from filename tokens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quality {
    #[serde(rename = "4K")]
    FourK,
    #[serde(rename = "1080p")]
    P1080,
    #[serde(rename = "720p")]
    P720,
    #[serde(rename = "480p")]
    P480,
    #[default]
    Unknown,
}

impl Quality {
    /// Comparison rank: 4K=4 down to Unknown=0.
    pub fn rank(self) -> u8 {
        match self {
            Self::FourK => 4,
            Self::P1080 => 3,
            Self::P720 => 2,
            Self::P480 => 1,
            Self::Unknown => 0,
        }
    }

    /// Canonical label, matching the serde representation.
    pub fn label(self) -> &'static str {
        match self {
            Self::FourK => "4K",
            Self::P1080 => "1080p",
            Self::P720 => "720p",
            Self::P480 => "480p",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Quality {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "4k" => Ok(Self::FourK),
            "1080p" => Ok(Self::P1080),
            "720p" => Ok(Self::P720),
            "480p" => Ok(Self::P480),
            "unknown" => Ok(Self::Unknown),
            other => Err(format!("unknown quality: {other}")),
        }
    }
}

/// Detection patterns in precedence order. The first pattern that matches
/// anywhere in the extension-stripped name wins, so 4K aliases shadow the
/// lower tiers even when several tokens are present.
static PATTERNS: LazyLock<[(Quality, Regex); 4]> = LazyLock::new(|| {
    [
        (Quality::FourK, Regex::new(r"(?i)\b(4k|2160p|uhd)\b").unwrap()),
        (Quality::P1080, Regex::new(r"(?i)\b(1080p|1080i|fhd)\b").unwrap()),
        (Quality::P720, Regex::new(r"(?i)\b(720p|720i|hd)\b").unwrap()),
        (Quality::P480, Regex::new(r"(?i)\b(480p|480i|sd)\b").unwrap()),
    ]
});

/// Classify a filename stem by its first matching quality pattern.
pub fn detect(name: &str) -> Quality {
    for (quality, pattern) in PATTERNS.iter() {
        if pattern.is_match(name) {
            return *quality;
        }
    }
    Quality::Unknown
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aliases() {
        assert_eq!(detect("Movie.2160p.x265"), Quality::FourK);
        assert_eq!(detect("Movie.UHD"), Quality::FourK);
        assert_eq!(detect("Movie.FHD"), Quality::P1080);
        assert_eq!(detect("Movie.1080i"), Quality::P1080);
        assert_eq!(detect("Show.S01E01.hd"), Quality::P720);
        assert_eq!(detect("Old.Movie.480i"), Quality::P480);
        assert_eq!(detect("Old.Movie.SD"), Quality::P480);
    }

    #[test]
    fn test_precedence_first_match_wins() {
        // Both 4K and 1080p tokens present; 4K outranks.
        assert_eq!(detect("Movie.4K.1080p"), Quality::FourK);
        assert_eq!(detect("Movie.1080p.720p"), Quality::P1080);
    }

    #[test]
    fn test_whole_word_only() {
        // "hd" embedded in a larger word must not match.
        assert_eq!(detect("shdtv"), Quality::Unknown);
        assert_eq!(detect("Movie.x264"), Quality::Unknown);
    }

    #[test]
    fn test_no_match() {
        assert_eq!(detect("randomfile"), Quality::Unknown);
    }

    #[test]
    fn test_rank_order() {
        assert!(Quality::FourK.rank() > Quality::P1080.rank());
        assert!(Quality::P1080.rank() > Quality::P720.rank());
        assert!(Quality::P720.rank() > Quality::P480.rank());
        assert!(Quality::P480.rank() > Quality::Unknown.rank());
    }

    #[test]
    fn test_serde_labels() {
        let json = serde_json::to_string(&Quality::FourK).unwrap();
        assert_eq!(json, "\"4K\"");
        let q: Quality = serde_json::from_str("\"1080p\"").unwrap();
        assert_eq!(q, Quality::P1080);
    }

    #[test]
    fn test_from_str_round_trip() {
        for q in [
            Quality::FourK,
            Quality::P1080,
            Quality::P720,
            Quality::P480,
            Quality::Unknown,
        ] {
            assert_eq!(q.label().parse::<Quality>().unwrap(), q);
        }
    }
}
