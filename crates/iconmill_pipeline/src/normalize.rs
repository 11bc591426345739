//! Icon normalization stage

use iconmill_svg::{SvgDocument, SvgError};
use tracing::info;

use crate::config::FailurePolicy;
use crate::error::PipelineError;
use crate::name::icon_identifier;
use crate::outcome::{dispatch_all, StageOutcome};
use crate::{ArchiveEntry, NormalizedIcon};

/// Rescale every entry to the canonical viewbox and derive its identifier
///
/// Entries are processed concurrently; the output preserves input order.
pub(crate) async fn normalize_entries(
    entries: Vec<ArchiveEntry>,
    canonical_size: f64,
    prefix: &str,
    policy: FailurePolicy,
) -> Result<StageOutcome<NormalizedIcon>, PipelineError> {
    info!("Scaling {} icons to {}", entries.len(), canonical_size);

    let labels = entries.iter().map(|e| e.path.clone()).collect();
    let prefix = prefix.to_string();
    dispatch_all(entries, labels, policy, move |entry| {
        normalize_entry(entry, canonical_size, &prefix)
    })
    .await
}

/// Validate, rescale, and name a single entry
fn normalize_entry(
    entry: ArchiveEntry,
    canonical_size: f64,
    prefix: &str,
) -> Result<NormalizedIcon, PipelineError> {
    let path = entry.path;

    let text = String::from_utf8(entry.bytes).map_err(|e| PipelineError::Svg {
        path: path.clone(),
        source: SvgError::Parse(e.to_string()),
    })?;

    let mut doc = SvgDocument::parse(&text).map_err(|e| PipelineError::Svg {
        path: path.clone(),
        source: e,
    })?;

    let view_box = doc
        .view_box()
        .ok_or_else(|| PipelineError::InvalidViewBox { path: path.clone() })?;

    let width = view_box[2] - view_box[0];
    let height = view_box[3] - view_box[1];
    if width != height {
        return Err(PipelineError::NotSquare { path });
    }

    doc.scale(canonical_size / width)
        .map_err(|e| PipelineError::Svg {
            path: path.clone(),
            source: e,
        })?;

    Ok(NormalizedIcon {
        name: icon_identifier(prefix, &path),
        content: doc.serialize(),
    })
}
