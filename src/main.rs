// Feed image rewriter
//
// Reads rendered feed content on stdin and writes it back out with images
// swapped for email renditions and inline-styled.

use std::io::{Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use feed_image_swap::{FeedFixer, FeedPost, FeedRoute, ImagePolicy, MediaManifest};
use tracing_subscriber::EnvFilter;

/// Rewrite feed HTML for email clients
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Image policy JSON file (defaults apply when omitted)
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    policy: Option<PathBuf>,

    /// Media manifest JSON file
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    media: PathBuf,

    /// Unrendered post source, checked for gallery markers.
    /// Without it the content itself is checked.
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    post: Option<PathBuf>,

    /// Transform to apply
    #[arg(long, value_enum, default_value_t = Route::FullText)]
    route: Route,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum Route {
    FullText,
    GalleryOnly,
    Untouched,
}

impl From<Route> for FeedRoute {
    fn from(route: Route) -> Self {
        match route {
            Route::FullText => FeedRoute::FullText,
            Route::GalleryOnly => FeedRoute::GalleryOnly,
            Route::Untouched => FeedRoute::Untouched,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let policy = match &cli.policy {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read policy {}", path.display()))?;
            ImagePolicy::from_json(&json)
                .with_context(|| format!("Invalid policy {}", path.display()))?
        }
        None => ImagePolicy::default(),
    };

    let manifest = MediaManifest::from_path(&cli.media)
        .with_context(|| format!("Failed to load media manifest {}", cli.media.display()))?;
    let probe = manifest.probe();

    let mut content = String::new();
    std::io::stdin()
        .read_to_string(&mut content)
        .context("Failed to read content from stdin")?;

    let raw = match &cli.post {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read post {}", path.display()))?,
        None => content.clone(),
    };

    let mut fixer = FeedFixer::new(policy, &manifest, &manifest);
    if let Some(probe) = probe.as_ref().filter(|_| fixer.policy().allow_dimension_probe()) {
        fixer = fixer.with_probe(probe);
    }

    let post = FeedPost {
        raw: &raw,
        rendered: &content,
    };
    let output = fixer.render(&post, cli.route.into(), None);

    std::io::stdout()
        .write_all(output.as_bytes())
        .context("Failed to write output")?;
    Ok(())
}
