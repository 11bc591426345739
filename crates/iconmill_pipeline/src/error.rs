//! Pipeline error types

use std::io;

use iconmill_svg::SvgError;
use thiserror::Error;

/// Errors that can occur while running the icon pipeline
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Network failure while downloading the archive
    #[error("Failed to download {url}: {source}")]
    Download {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The archive endpoint answered with a non-success status
    #[error("HTTP {status} while fetching {url}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Malformed zip archive
    #[error("Malformed archive: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// Reading an entry out of the archive failed
    #[error("Failed to read archive entry {path}: {source}")]
    Entry {
        path: String,
        #[source]
        source: io::Error,
    },

    /// Invalid entry-selection pattern
    #[error("Invalid entry pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// The viewbox declaration is missing or does not have four components
    #[error("Invalid viewbox in file {path}")]
    InvalidViewBox { path: String },

    /// The viewbox is not square
    #[error("Not a square svg: {path}")]
    NotSquare { path: String },

    /// An icon document could not be parsed or rescaled
    #[error("Failed to process {path}: {source}")]
    Svg {
        path: String,
        #[source]
        source: SvgError,
    },

    /// Writing an icon's scratch file failed
    #[error("Failed to write scratch file for {name}: {source}")]
    Scratch {
        name: String,
        #[source]
        source: io::Error,
    },

    /// The stroke-to-fill fixer failed for an icon
    #[error("Failed to convert {name}: {source}")]
    Fix {
        name: String,
        #[source]
        source: SvgError,
    },

    /// Creating or writing the output artifact failed
    #[error("Failed to write {path}: {source}")]
    Emit {
        path: String,
        #[source]
        source: io::Error,
    },

    /// Creating the scratch directory failed
    #[error("Failed to create scratch directory: {0}")]
    ScratchDir(io::Error),

    /// A fan-out worker task panicked
    #[error("Icon task failed: {0}")]
    Task(String),
}
