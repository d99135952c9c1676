use crate::models::Video;

/// In-memory collection of all discovered videos, in insertion order.
///
/// Owned and mutated by the scanning collaborator; the view engine only ever
/// reads it. Insertion order is preserved so that stable sorting keeps ties
/// reproducible.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    videos: Vec<Video>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a discovered video.
    pub fn push(&mut self, video: Video) {
        self.videos.push(video);
    }

    /// Fill in the size of the record identified by `url` once a lookup
    /// completes. Returns false when no record has that URL.
    pub fn set_size(&mut self, url: &str, size: u64) -> bool {
        match self.videos.iter_mut().find(|v| v.url == url) {
            Some(video) => {
                video.size = Some(size);
                true
            }
            None => false,
        }
    }

    /// Drop all records.
    pub fn clear(&mut self) {
        tracing::debug!(count = self.videos.len(), "Clearing catalog");
        self.videos.clear();
    }

    pub fn len(&self) -> usize {
        self.videos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }

    /// Sum of known sizes over the whole catalog; unknown sizes count as 0.
    pub fn total_size_bytes(&self) -> u64 {
        self.videos.iter().map(|v| v.size.unwrap_or(0)).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Video> {
        self.videos.iter()
    }

    pub fn videos(&self) -> &[Video] {
        &self.videos
    }
}

impl Extend<Video> for Catalog {
    fn extend<T: IntoIterator<Item = Video>>(&mut self, iter: T) {
        self.videos.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;

    fn video(name: &str, size: Option<u64>) -> Video {
        let url = Url::parse(&format!("http://example.com/{name}")).unwrap();
        Video::new(&url, name.to_string(), size)
    }

    #[test]
    fn test_total_size_treats_unknown_as_zero() {
        let mut catalog = Catalog::new();
        catalog.push(video("a.mkv", Some(100)));
        catalog.push(video("b.mkv", None));
        catalog.push(video("c.mkv", Some(50)));
        assert_eq!(catalog.total_size_bytes(), 150);
    }

    #[test]
    fn test_set_size_by_url() {
        let mut catalog = Catalog::new();
        catalog.push(video("a.mkv", None));

        assert!(catalog.set_size("http://example.com/a.mkv", 42));
        assert_eq!(catalog.videos()[0].size, Some(42));
        assert!(!catalog.set_size("http://example.com/missing.mkv", 42));
    }

    #[test]
    fn test_clear() {
        let mut catalog = Catalog::new();
        catalog.push(video("a.mkv", None));
        catalog.clear();
        assert!(catalog.is_empty());
        assert_eq!(catalog.total_size_bytes(), 0);
    }
}
