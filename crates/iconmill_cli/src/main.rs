//! Iconmill CLI
//!
//! Fetch an icon set, rescale it to a canonical viewbox, convert strokes to
//! fills, and write the result as importable path constants.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use iconmill_pipeline::{
    EmitStyle, FailurePolicy, IconPipeline, IconSet, PipelineConfig, DEFAULT_CANONICAL_SIZE,
};
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "iconmill")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Icon-set ingestion and normalization pipeline", long_about = None)]
struct Cli {
    /// Path the generated artifact is written to
    output: Option<PathBuf>,

    /// Built-in icon set to ingest (defaults to feather)
    #[arg(short, long)]
    set: Option<String>,

    /// Canonical viewbox size icons are rescaled to
    #[arg(long, default_value_t = DEFAULT_CANONICAL_SIZE)]
    size: f64,

    /// Skip icons that fail instead of aborting the run
    #[arg(short, long)]
    keep_going: bool,

    /// Artifact flavor (ts or rust)
    #[arg(short, long, default_value = "ts")]
    format: String,

    /// Header comment written at the top of the artifact
    #[arg(long)]
    header: Option<String>,

    /// Archive URL of a custom icon set
    #[arg(long, requires = "pattern", requires = "prefix")]
    url: Option<String>,

    /// Entry-selection pattern of a custom icon set
    #[arg(long, requires = "url", requires = "prefix")]
    pattern: Option<String>,

    /// Identifier prefix of a custom icon set
    #[arg(long, requires = "url", requires = "pattern")]
    prefix: Option<String>,

    /// List the built-in icon sets and exit
    #[arg(long)]
    list_sets: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    if cli.list_sets {
        for name in IconSet::builtin_names() {
            println!("{}", name);
        }
        return Ok(());
    }

    let Some(output) = cli.output.as_deref() else {
        anyhow::bail!("Missing output path. Usage: iconmill <OUTPUT>");
    };

    if cli.size <= 0.0 {
        anyhow::bail!("Canonical size must be positive, got {}", cli.size);
    }

    let style = match cli.format.as_str() {
        "ts" => EmitStyle::TypeScript,
        "rust" => EmitStyle::Rust,
        other => anyhow::bail!("Invalid format '{}'. Valid formats: [\"ts\", \"rust\"]", other),
    };

    let set = resolve_set(&cli)?;
    let header = cli
        .header
        .clone()
        .unwrap_or_else(|| default_header(&set.name, style));

    let policy = if cli.keep_going {
        FailurePolicy::SkipFailed
    } else {
        FailurePolicy::FailFast
    };

    let config = PipelineConfig::new(set)
        .with_canonical_size(cli.size)
        .with_failure_policy(policy)
        .with_emit_style(style)
        .with_header(header);

    let summary = IconPipeline::new(config).run(output).await?;

    if !summary.skipped.is_empty() {
        warn!(
            "Skipped {} of {} icons",
            summary.skipped.len(),
            summary.written + summary.skipped.len()
        );
    }

    info!("All paths have been written to {}", summary.output.display());

    Ok(())
}

fn resolve_set(cli: &Cli) -> Result<IconSet> {
    match (&cli.url, &cli.pattern, &cli.prefix) {
        (Some(url), Some(pattern), Some(prefix)) => {
            if cli.set.is_some() {
                anyhow::bail!("--set cannot be combined with a custom set");
            }
            Ok(IconSet::custom(prefix.as_str(), url, pattern, prefix)?)
        }
        _ => {
            // clap's `requires` guarantees the custom flags come as a trio
            let name = cli.set.as_deref().unwrap_or("feather");
            IconSet::named(name).ok_or_else(|| {
                anyhow::anyhow!(
                    "Unknown icon set '{}'. Built-in sets: {:?}",
                    name,
                    IconSet::builtin_names()
                )
            })
        }
    }
}

fn default_header(set: &str, style: EmitStyle) -> String {
    match style {
        EmitStyle::TypeScript => {
            format!("// Auto-generated from the {} icon set - DO NOT EDIT", set)
        }
        EmitStyle::Rust => format!("//! Generated {} icon path constants", set),
    }
}
