//! SVG parsing and geometry for the Iconmill toolchain
//!
//! This crate provides the typed document model used to inspect and rescale
//! icon documents, plus the stroke-to-fill conversion that turns outlined
//! icons into filled geometry. It uses `roxmltree` for the document model
//! and `usvg` for full SVG lowering during conversion.
//!
//! # Example
//!
//! ```ignore
//! use iconmill_svg::SvgDocument;
//!
//! let mut doc = SvgDocument::parse(&markup)?;
//! doc.scale(20.0 / 24.0)?;
//! let rescaled = doc.serialize();
//! ```

mod document;
mod error;
mod outline;
mod path;
mod scale;

pub use document::{parse_view_box, Element, SvgDocument, XmlNode};
pub use error::SvgError;
pub use outline::{outline_file, outline_svg};
