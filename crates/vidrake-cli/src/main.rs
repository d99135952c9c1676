use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use humansize::{format_size, BINARY};
use tracing_subscriber::EnvFilter;
use url::Url;

use vidrake_core::config::AppConfig;
use vidrake_core::{
    playlist, view, Catalog, Criteria, QualityFilter, SortKey, SortOrder, TypeFilter, Video,
    YearFilter,
};
use vidrake_parse::Quality;
use vidrake_scan::Scanner;

/// Scan a file-listing page for video links, filter and sort the results,
/// and optionally export them as an M3U playlist.
#[derive(Debug, Parser)]
#[command(name = "vidrake", version)]
struct Cli {
    /// Page URL to scan.
    url: Url,

    /// Keep only items whose title or filename contains every given word.
    #[arg(short, long)]
    search: Option<String>,

    /// Keep only items of one quality class.
    #[arg(long, value_enum)]
    quality: Option<QualityArg>,

    /// Keep only movies (no SxxEyy token) or TV episodes.
    #[arg(long = "type", value_enum)]
    kind: Option<TypeArg>,

    /// Keep only items with this exact 4-digit year.
    #[arg(long)]
    year: Option<String>,

    /// Inclusive minimum size in bytes; unknown sizes count as 0.
    #[arg(long)]
    min_size: Option<u64>,

    /// Inclusive maximum size in bytes.
    #[arg(long)]
    max_size: Option<u64>,

    #[arg(long, value_enum, default_value_t = SortArg::Name)]
    sort: SortArg,

    #[arg(long, value_enum, default_value_t = OrderArg::Asc)]
    order: OrderArg,

    /// Write the filtered view to an M3U playlist file.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Do not descend into frames and iframes.
    #[arg(long)]
    no_recursive: bool,

    /// Maximum frame nesting depth.
    #[arg(long)]
    max_depth: Option<u32>,

    /// Keep links pointing at other hosts.
    #[arg(long)]
    include_external: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum QualityArg {
    #[value(name = "4k")]
    FourK,
    #[value(name = "1080p")]
    P1080,
    #[value(name = "720p")]
    P720,
    #[value(name = "480p")]
    P480,
    Unknown,
}

impl From<QualityArg> for Quality {
    fn from(arg: QualityArg) -> Self {
        match arg {
            QualityArg::FourK => Quality::FourK,
            QualityArg::P1080 => Quality::P1080,
            QualityArg::P720 => Quality::P720,
            QualityArg::P480 => Quality::P480,
            QualityArg::Unknown => Quality::Unknown,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TypeArg {
    Movie,
    Tv,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SortArg {
    Name,
    Quality,
    Size,
    Year,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OrderArg {
    Asc,
    Desc,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let mut config = AppConfig::load().context("loading configuration")?;
    if cli.no_recursive {
        config.scan.recursive = false;
    }
    if let Some(depth) = cli.max_depth {
        config.scan.max_depth = depth;
    }
    if cli.include_external {
        config.scan.skip_external = false;
    }

    let scanner = Scanner::new(config.scan.clone());
    let videos = scanner
        .scan(&cli.url)
        .await
        .with_context(|| format!("scanning {}", cli.url))?;

    let mut catalog = Catalog::new();
    catalog.extend(videos);

    let criteria = criteria_from_args(&cli);
    let result = view(&catalog, &criteria);

    print_rows(&result.items, &config);
    println!(
        "\n{} videos found, {} matching, {} total",
        result.total_count,
        result.filtered_count,
        format_size(result.total_size_bytes, BINARY)
    );

    if let Some(path) = &cli.output {
        playlist::write_file(&result.items, path)
            .with_context(|| format!("writing playlist to {}", path.display()))?;
        println!("Playlist written to {}", path.display());
    }

    Ok(())
}

fn criteria_from_args(cli: &Cli) -> Criteria {
    Criteria {
        search_term: cli.search.clone().unwrap_or_default(),
        quality: match cli.quality {
            Some(q) => QualityFilter::Only(q.into()),
            None => QualityFilter::All,
        },
        kind: match cli.kind {
            Some(TypeArg::Movie) => TypeFilter::Movie,
            Some(TypeArg::Tv) => TypeFilter::Tv,
            None => TypeFilter::All,
        },
        year: match &cli.year {
            Some(year) => YearFilter::Exact(year.clone()),
            None => YearFilter::All,
        },
        min_size: cli.min_size.unwrap_or(0),
        max_size: cli.max_size.unwrap_or(u64::MAX),
        sort_by: match cli.sort {
            SortArg::Name => SortKey::Name,
            SortArg::Quality => SortKey::Quality,
            SortArg::Size => SortKey::Size,
            SortArg::Year => SortKey::Year,
        },
        sort_order: match cli.order {
            OrderArg::Asc => SortOrder::Asc,
            OrderArg::Desc => SortOrder::Desc,
        },
    }
}

fn print_rows(items: &[Video], config: &AppConfig) {
    let mut previous_title: Option<&str> = None;

    for video in items {
        let size = video
            .size
            .map(|s| format_size(s, BINARY))
            .unwrap_or_else(|| "unknown size".to_string());

        // Consecutive episodes of the same show collapse under one heading.
        let grouped = config.display.group_episodes
            && video.is_episode()
            && previous_title == Some(video.title.as_str());

        match (grouped, video.episode_label()) {
            (true, Some(label)) => {
                println!("    {label}  [{} | {size}]", video.quality);
            }
            (false, Some(label)) => {
                println!("{} {label}  [{} | {size}]", heading(video), video.quality);
            }
            (_, None) => {
                println!("{}  [{} | {size}]", heading(video), video.quality);
            }
        }

        if config.display.show_path {
            println!("    {}", video.url);
        }
        previous_title = Some(video.title.as_str());
    }
}

fn heading(video: &Video) -> String {
    let title = if video.title.is_empty() {
        &video.filename
    } else {
        &video.title
    };
    match &video.year {
        Some(year) => format!("{title} ({year})"),
        None => title.to_string(),
    }
}
