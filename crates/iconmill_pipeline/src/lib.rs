//! Icon-set ingestion pipeline for Iconmill
//!
//! Fetches a third-party icon-set archive, normalizes every icon to a
//! canonical square viewbox, converts stroke-outlined geometry to filled
//! paths, merges each icon's sub-paths into a single path-data string, and
//! emits the result as importable source constants.
//!
//! The four stages run strictly in order: fetch, normalize, unify, emit.
//! Each stage consumes the whole output of the previous one; within the
//! normalize and unify stages, per-icon work fans out concurrently and the
//! stage waits for every item before the next stage starts.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//!
//! use iconmill_pipeline::{IconPipeline, PipelineConfig};
//!
//! let pipeline = IconPipeline::new(PipelineConfig::default());
//! let summary = pipeline.run(Path::new("icon-paths.ts")).await?;
//! println!("wrote {} icons", summary.written);
//! ```

mod config;
mod emit;
mod error;
mod fetch;
mod name;
mod normalize;
mod outcome;
mod pipeline;
mod scratch;
mod unify;

pub use config::{EmitStyle, FailurePolicy, IconSet, PipelineConfig, DEFAULT_CANONICAL_SIZE};
pub use error::PipelineError;
pub use outcome::SkippedIcon;
pub use pipeline::{IconPipeline, RunSummary};
pub use scratch::ScratchDir;
pub use unify::{GeometryFixer, StrokeOutliner};

/// One file selected from a downloaded icon-set archive
#[derive(Clone, Debug)]
pub struct ArchiveEntry {
    /// Archive-relative path of the entry
    pub path: String,
    /// Raw file content
    pub bytes: Vec<u8>,
}

/// An icon rescaled to the canonical viewbox
#[derive(Clone, Debug)]
pub struct NormalizedIcon {
    /// Derived exported identifier, e.g. `featherVideoOff`
    pub name: String,
    /// Serialized SVG document after rescaling
    pub content: String,
}

/// An icon reduced to a single filled path-data string
#[derive(Clone, Debug)]
pub struct UnifiedIcon {
    /// Exported identifier, unchanged from the normalized icon
    pub name: String,
    /// Concatenated path data of every filled sub-path, in document order
    pub content: String,
}
