//! Page scanning: discovers video-file links in fetched HTML and probes
//! their sizes. Feeds the catalog owned by the caller; all filtering and
//! sorting happens in `vidrake-core`.

pub mod discover;
pub mod scanner;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

pub use discover::{extract_links, CandidateLink, PageLinks, VIDEO_EXTENSIONS};
pub use scanner::Scanner;
