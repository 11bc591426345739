//! Pipeline orchestration

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::info;

use crate::config::PipelineConfig;
use crate::emit::write_icons;
use crate::error::PipelineError;
use crate::fetch::{download_archive, select_entries};
use crate::normalize::normalize_entries;
use crate::outcome::SkippedIcon;
use crate::scratch::ScratchDir;
use crate::unify::{unify_icons, GeometryFixer, StrokeOutliner};

/// The four-stage icon pipeline: fetch, normalize, unify, emit
pub struct IconPipeline {
    config: PipelineConfig,
    fixer: Arc<dyn GeometryFixer>,
}

/// What a finished run produced
#[derive(Debug)]
pub struct RunSummary {
    /// Number of icons written to the artifact
    pub written: usize,
    /// Icons dropped under the skip-failed policy
    pub skipped: Vec<SkippedIcon>,
    /// The artifact path
    pub output: PathBuf,
}

impl IconPipeline {
    /// Build a pipeline with the default stroke-to-fill fixer
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            config,
            fixer: Arc::new(StrokeOutliner),
        }
    }

    /// Build a pipeline with a custom geometry fixer
    pub fn with_fixer(config: PipelineConfig, fixer: Arc<dyn GeometryFixer>) -> Self {
        Self { config, fixer }
    }

    /// Download the configured set and write the artifact to `output`
    pub async fn run(&self, output: &Path) -> Result<RunSummary, PipelineError> {
        let set = &self.config.set;
        info!("Downloading {} archive from {}", set.name, set.archive_url);
        let archive = download_archive(&set.archive_url).await?;
        info!("Downloaded {} bytes", archive.len());

        self.run_archive(&archive, output).await
    }

    /// Run the pipeline over already-downloaded archive bytes
    pub async fn run_archive(
        &self,
        archive: &[u8],
        output: &Path,
    ) -> Result<RunSummary, PipelineError> {
        let config = &self.config;

        let entries = select_entries(archive, &config.set.entry_pattern)?;
        info!("Selected {} icon entries", entries.len());

        // Lives for the whole run; removed when this function returns,
        // error paths included
        let scratch = ScratchDir::new()?;

        let normalized = normalize_entries(
            entries,
            config.canonical_size,
            &config.set.prefix,
            config.failure_policy,
        )
        .await?;

        let unified = unify_icons(
            normalized.items,
            &scratch,
            Arc::clone(&self.fixer),
            config.failure_policy,
        )
        .await?;

        write_icons(
            &unified.items,
            output,
            config.header.as_deref(),
            config.emit_style,
        )
        .await?;

        let mut skipped = normalized.skipped;
        skipped.extend(unified.skipped);

        Ok(RunSummary {
            written: unified.items.len(),
            skipped,
            output: output.to_path_buf(),
        })
    }
}
