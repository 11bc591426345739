//! SVG error types

use std::io;
use thiserror::Error;

/// Errors that can occur when parsing or transforming SVG documents
#[derive(Error, Debug)]
pub enum SvgError {
    /// IO error when reading the file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// XML syntax error
    #[error("XML error: {0}")]
    Xml(#[from] roxmltree::Error),

    /// SVG parsing error
    #[error("SVG parsing error: {0}")]
    Parse(String),

    /// Malformed path data
    #[error("Malformed path data: {0}")]
    PathData(String),
}
