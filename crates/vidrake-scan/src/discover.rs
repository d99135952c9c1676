//! Anchor and frame extraction from a fetched HTML document.

use std::sync::LazyLock;

use scraper::{Html, Selector};
use url::Url;

use vidrake_core::ScanConfig;

/// File extensions treated as video links.
pub const VIDEO_EXTENSIONS: &[&str] = &[
    "mp4", "mkv", "avi", "m4v", "mov", "wmv", "flv", "webm", "mpeg", "mpg",
];

static SEL_ANCHOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a[href]").unwrap());
static SEL_FRAME: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("frame[src], iframe[src]").unwrap());

/// A candidate video link: resolved URL plus the display filename.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateLink {
    pub url: Url,
    /// Trimmed anchor text if non-empty, else the URL's percent-decoded
    /// last path segment.
    pub filename: String,
}

/// Everything extracted from one page.
#[derive(Debug, Clone, Default)]
pub struct PageLinks {
    pub candidates: Vec<CandidateLink>,
    /// Frame/iframe sources for recursive scanning.
    pub frames: Vec<Url>,
}

/// Walk the document for video anchors and nested frames.
///
/// Hrefs are resolved against `base`; anything unparseable is skipped.
/// Cross-host links are dropped when `skip_external` is set.
pub fn extract_links(html: &str, base: &Url, config: &ScanConfig) -> PageLinks {
    let document = Html::parse_document(html);
    let mut links = PageLinks::default();

    for anchor in document.select(&SEL_ANCHOR) {
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        let Ok(url) = base.join(href) else {
            continue;
        };

        if config.skip_external && url.host_str() != base.host_str() {
            continue;
        }
        if !has_video_extension(&url) {
            continue;
        }

        let text: String = anchor.text().collect();
        let text = text.trim();
        let filename = if text.is_empty() {
            decoded_file_segment(&url)
        } else {
            text.to_string()
        };

        links.candidates.push(CandidateLink { url, filename });
    }

    for frame in document.select(&SEL_FRAME) {
        let Some(src) = frame.value().attr("src") else {
            continue;
        };
        if let Ok(url) = base.join(src) {
            links.frames.push(url);
        }
    }

    links
}

fn has_video_extension(url: &Url) -> bool {
    let segment = url.path().rsplit('/').next().unwrap_or_default();
    match segment.rsplit_once('.') {
        Some((_, ext)) => VIDEO_EXTENSIONS.contains(&ext.to_lowercase().as_str()),
        None => false,
    }
}

/// Percent-decoded last path segment, used when the anchor has no text.
fn decoded_file_segment(url: &Url) -> String {
    let segment = url.path().rsplit('/').next().unwrap_or_default();
    urlencoding::decode(segment)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| segment.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ScanConfig {
        ScanConfig {
            recursive: true,
            max_depth: 10,
            skip_external: true,
        }
    }

    fn base() -> Url {
        Url::parse("http://example.com/media/").unwrap()
    }

    #[test]
    fn test_extracts_video_anchors_only() {
        let html = r#"
            <a href="Movie.2021.1080p.mkv">Movie.2021.1080p.mkv</a>
            <a href="notes.txt">notes.txt</a>
            <a href="subdir/">subdir</a>
        "#;
        let links = extract_links(html, &base(), &config());
        assert_eq!(links.candidates.len(), 1);
        assert_eq!(
            links.candidates[0].url.as_str(),
            "http://example.com/media/Movie.2021.1080p.mkv"
        );
    }

    #[test]
    fn test_relative_hrefs_resolved_against_base() {
        let html = r#"<a href="../other/clip.mp4">clip</a>"#;
        let links = extract_links(html, &base(), &config());
        assert_eq!(
            links.candidates[0].url.as_str(),
            "http://example.com/other/clip.mp4"
        );
        assert_eq!(links.candidates[0].filename, "clip");
    }

    #[test]
    fn test_skip_external_hosts() {
        let html = r#"
            <a href="http://elsewhere.com/a.mkv">a</a>
            <a href="http://example.com/media/b.mkv">b</a>
        "#;
        let links = extract_links(html, &base(), &config());
        assert_eq!(links.candidates.len(), 1);
        assert_eq!(links.candidates[0].filename, "b");

        let mut cfg = config();
        cfg.skip_external = false;
        let links = extract_links(html, &base(), &cfg);
        assert_eq!(links.candidates.len(), 2);
    }

    #[test]
    fn test_empty_anchor_text_falls_back_to_decoded_segment() {
        let html = r#"<a href="My%20Movie%20%282021%29.mkv"></a>"#;
        let links = extract_links(html, &base(), &config());
        assert_eq!(links.candidates[0].filename, "My Movie (2021).mkv");
    }

    #[test]
    fn test_extension_is_case_insensitive() {
        let html = r#"<a href="UPPER.MKV">UPPER.MKV</a>"#;
        let links = extract_links(html, &base(), &config());
        assert_eq!(links.candidates.len(), 1);
    }

    #[test]
    fn test_frames_collected() {
        let html = r#"
            <iframe src="listing.html"></iframe>
            <frame src="http://example.com/other.html">
        "#;
        let links = extract_links(html, &base(), &config());
        assert_eq!(links.frames.len(), 2);
        assert_eq!(
            links.frames[0].as_str(),
            "http://example.com/media/listing.html"
        );
    }

    #[test]
    fn test_malformed_href_skipped() {
        let html = r#"<a href="http://[invalid/a.mkv">broken</a>"#;
        let links = extract_links(html, &base(), &config());
        assert!(links.candidates.is_empty());
    }
}
