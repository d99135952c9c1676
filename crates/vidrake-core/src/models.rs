use serde::{Deserialize, Serialize};
use url::Url;

use vidrake_parse::{ParsedInfo, Quality};

/// One discovered video link with its parsed filename metadata merged in.
///
/// Identity is the absolute URL. Records are immutable after creation except
/// for `size`, which is filled in once a size lookup completes (see
/// [`crate::Catalog::set_size`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Video {
    /// Absolute URL, already resolved against the page location.
    pub url: String,
    /// Anchor text if non-empty, else the URL's percent-decoded last path
    /// segment. Chosen by the collaborator that discovered the link.
    pub filename: String,
    /// URL path component.
    pub path: String,
    /// Size in bytes; `None` until known (or permanently unavailable).
    pub size: Option<u64>,
    /// Cleaned title from the filename parser.
    pub title: String,
    /// 4-digit year token, kept verbatim.
    pub year: Option<String>,
    /// Season number. Present iff `episode` is.
    pub season: Option<u32>,
    /// Episode number. Present iff `season` is.
    pub episode: Option<u32>,
    pub quality: Quality,
}

impl Video {
    /// Build a record from a resolved link, running the filename parser.
    pub fn new(url: &Url, filename: String, size: Option<u64>) -> Self {
        let ParsedInfo {
            title,
            year,
            season,
            episode,
            quality,
        } = vidrake_parse::parse(&filename);

        Self {
            url: url.as_str().to_string(),
            path: url.path().to_string(),
            filename,
            size,
            title,
            year,
            season,
            episode,
            quality,
        }
    }

    /// A record is a TV episode when its filename carried an `SxxEyy` token.
    pub fn is_episode(&self) -> bool {
        self.season.is_some()
    }

    /// Zero-padded `SxxEyy` label for display, when present.
    pub fn episode_label(&self) -> Option<String> {
        match (self.season, self.episode) {
            (Some(s), Some(e)) => Some(format!("S{s:02}E{e:02}")),
            _ => None,
        }
    }
}
