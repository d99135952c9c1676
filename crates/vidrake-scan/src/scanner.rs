//! Breadth-first page scanner with frame recursion and size probing.

use std::collections::{HashSet, VecDeque};
use std::time::Duration;

use reqwest::Client;
use url::Url;

use vidrake_core::{ScanConfig, Video};

use crate::discover;
use crate::ScanError;

pub struct Scanner {
    client: Client,
    config: ScanConfig,
}

impl Scanner {
    pub fn new(config: ScanConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("vidrake/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client, config }
    }

    /// Scan a page (and, when configured, its nested frames up to
    /// `max_depth`) for video links.
    ///
    /// Each discovered link is probed with a HEAD request for its
    /// `Content-Length`; probe failures degrade to an unknown size. A fetch
    /// failure on the start page is fatal, on frames it is only logged.
    /// Pages are visited at most once.
    pub async fn scan(&self, start: &Url) -> Result<Vec<Video>, ScanError> {
        let mut queue: VecDeque<(Url, u32)> = VecDeque::from([(start.clone(), 0)]);
        let mut visited: HashSet<String> = HashSet::new();
        let mut videos = Vec::new();

        while let Some((page, depth)) = queue.pop_front() {
            if !visited.insert(page.as_str().to_string()) {
                continue;
            }

            tracing::info!(url = %page, depth, "Scanning page");
            let html = match self.fetch_page(&page).await {
                Ok(html) => html,
                Err(e) if depth == 0 => return Err(e),
                Err(e) => {
                    tracing::warn!(url = %page, error = %e, "Skipping unreachable frame");
                    continue;
                }
            };

            let links = discover::extract_links(&html, &page, &self.config);
            tracing::debug!(
                url = %page,
                candidates = links.candidates.len(),
                frames = links.frames.len(),
                "Page extracted"
            );

            for candidate in links.candidates {
                let size = self.probe_size(&candidate.url).await;
                videos.push(Video::new(&candidate.url, candidate.filename, size));
            }

            if self.config.recursive && depth < self.config.max_depth {
                for frame in links.frames {
                    queue.push_back((frame, depth + 1));
                }
            }
        }

        tracing::info!(count = videos.len(), "Scan complete");
        Ok(videos)
    }

    async fn fetch_page(&self, url: &Url) -> Result<String, ScanError> {
        let response = self.client.get(url.clone()).send().await?;
        Ok(response.text().await?)
    }

    /// HEAD request for `Content-Length`. Any failure means the size stays
    /// unknown; it is never fatal.
    ///
    /// Reads the header itself: a HEAD response has an empty body, so the
    /// body-size hint would report 0 instead of the advertised length.
    async fn probe_size(&self, url: &Url) -> Option<u64> {
        match self.client.head(url.clone()).send().await {
            Ok(response) => response
                .headers()
                .get(reqwest::header::CONTENT_LENGTH)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok()),
            Err(e) => {
                tracing::debug!(url = %url, error = %e, "Size probe failed");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufRead, BufReader, Write};
    use std::net::TcpListener;

    #[test]
    fn test_scanner_construction() {
        let scanner = Scanner::new(ScanConfig {
            recursive: false,
            max_depth: 0,
            skip_external: true,
        });
        assert!(!scanner.config.recursive);
    }

    /// Minimal HTTP server: serves `html` on GET and answers every HEAD
    /// with `Content-Length: 12345` and an empty body.
    fn spawn_server(html: String) -> Url {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        std::thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(mut stream) = stream else { break };
                let mut reader = BufReader::new(match stream.try_clone() {
                    Ok(clone) => clone,
                    Err(_) => continue,
                });

                let mut request_line = String::new();
                if reader.read_line(&mut request_line).is_err() {
                    continue;
                }
                loop {
                    let mut line = String::new();
                    match reader.read_line(&mut line) {
                        Ok(0) => break,
                        Ok(_) if line == "\r\n" => break,
                        Ok(_) => {}
                        Err(_) => break,
                    }
                }

                let response = if request_line.starts_with("HEAD") {
                    "HTTP/1.1 200 OK\r\nContent-Length: 12345\r\nConnection: close\r\n\r\n"
                        .to_string()
                } else {
                    format!(
                        "HTTP/1.1 200 OK\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                        html.len(),
                        html
                    )
                };
                let _ = stream.write_all(response.as_bytes());
            }
        });

        Url::parse(&format!("http://{addr}/")).unwrap()
    }

    #[tokio::test]
    async fn test_probe_reads_advertised_content_length() {
        let base = spawn_server(r#"<a href="a.mkv">a.mkv</a>"#.to_string());
        let scanner = Scanner::new(ScanConfig {
            recursive: false,
            max_depth: 0,
            skip_external: true,
        });

        let videos = scanner.scan(&base).await.unwrap();
        assert_eq!(videos.len(), 1);
        // The HEAD response body is empty; the size must come from the
        // Content-Length header.
        assert_eq!(videos[0].size, Some(12345));
    }
}
