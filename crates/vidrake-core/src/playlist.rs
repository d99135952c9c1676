//! M3U playlist export.
//!
//! Consumes the items of a computed view, so the exported playlist matches
//! exactly what the current criteria select.

use std::path::Path;

use crate::error::CoreError;
use crate::models::Video;

/// Render items as an extended M3U document: a `#EXTM3U` header followed by
/// one `#EXTINF:-1,<filename>` + `<url>` pair per item.
pub fn render(items: &[Video]) -> String {
    let mut lines = Vec::with_capacity(1 + items.len() * 2);
    lines.push("#EXTM3U".to_string());
    for video in items {
        lines.push(format!("#EXTINF:-1,{}", video.filename));
        lines.push(video.url.clone());
    }
    lines.join("\n")
}

/// Render and write a playlist file.
pub fn write_file(items: &[Video], path: &Path) -> Result<(), CoreError> {
    std::fs::write(path, render(items))?;
    tracing::info!(path = %path.display(), entries = items.len(), "Playlist written");
    Ok(())
}
