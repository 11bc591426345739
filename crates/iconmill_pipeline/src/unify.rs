//! Stroke-to-fill conversion and path merging

use std::path::Path;
use std::sync::Arc;

use iconmill_svg::{outline_file, SvgDocument, SvgError};
use tracing::info;

use crate::config::FailurePolicy;
use crate::error::PipelineError;
use crate::outcome::{dispatch_all, StageOutcome};
use crate::scratch::ScratchDir;
use crate::{NormalizedIcon, UnifiedIcon};

/// Converts a stroke-outlined icon document into filled geometry
///
/// The conversion reads a file on disk rather than an in-memory buffer,
/// which is why the unify stage round-trips every icon through the scratch
/// directory. Implementations must be callable from multiple worker threads
/// at once.
pub trait GeometryFixer: Send + Sync {
    /// Read the document at `path` and return the fixed document text
    fn fix(&self, path: &Path) -> Result<String, SvgError>;
}

/// Default fixer backed by the usvg-based outliner
#[derive(Clone, Copy, Debug, Default)]
pub struct StrokeOutliner;

impl GeometryFixer for StrokeOutliner {
    fn fix(&self, path: &Path) -> Result<String, SvgError> {
        outline_file(path)
    }
}

/// Convert every icon to filled paths and merge them into one path string
///
/// Icons are processed concurrently; the output preserves input order.
pub(crate) async fn unify_icons(
    icons: Vec<NormalizedIcon>,
    scratch: &ScratchDir,
    fixer: Arc<dyn GeometryFixer>,
    policy: FailurePolicy,
) -> Result<StageOutcome<UnifiedIcon>, PipelineError> {
    info!("Converting {} stroke icons to fill", icons.len());

    let labels = icons.iter().map(|icon| icon.name.clone()).collect();
    let dir = scratch.path().to_path_buf();
    dispatch_all(icons, labels, policy, move |icon| {
        unify_icon(icon, &dir, fixer.as_ref())
    })
    .await
}

/// Round-trip one icon through the fixer and merge its sub-paths
fn unify_icon(
    icon: NormalizedIcon,
    scratch_dir: &Path,
    fixer: &dyn GeometryFixer,
) -> Result<UnifiedIcon, PipelineError> {
    let scratch_file = scratch_dir.join(format!("{}.svg", icon.name));
    std::fs::write(&scratch_file, &icon.content).map_err(|e| PipelineError::Scratch {
        name: icon.name.clone(),
        source: e,
    })?;

    let fixed = fixer.fix(&scratch_file).map_err(|e| PipelineError::Fix {
        name: icon.name.clone(),
        source: e,
    })?;

    let content = merge_path_data(&fixed).map_err(|e| PipelineError::Fix {
        name: icon.name.clone(),
        source: e,
    })?;

    Ok(UnifiedIcon {
        name: icon.name,
        content,
    })
}

/// Concatenate the `d` attributes of the document's top-level `path` children
fn merge_path_data(document: &str) -> Result<String, SvgError> {
    let doc = SvgDocument::parse(document)?;
    let mut merged = String::new();
    for child in doc.root().child_elements() {
        if child.name() == "path" {
            if let Some(d) = child.attribute("d") {
                merged.push_str(d);
            }
        }
    }
    Ok(merged)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CannedFixer(&'static str);

    impl GeometryFixer for CannedFixer {
        fn fix(&self, _path: &Path) -> Result<String, SvgError> {
            Ok(self.0.to_string())
        }
    }

    fn icon(name: &str, content: &str) -> NormalizedIcon {
        NormalizedIcon {
            name: name.to_string(),
            content: content.to_string(),
        }
    }

    #[test]
    fn test_merges_paths_in_document_order() {
        let fixed = r#"<svg><path d="M0 0L1 1"/><path d="M2 2L3 3"/></svg>"#;
        assert_eq!(merge_path_data(fixed).unwrap(), "M0 0L1 1M2 2L3 3");
    }

    #[test]
    fn test_merge_ignores_non_path_children_and_missing_d() {
        let fixed = r#"<svg><rect width="5"/><path/><path d="M1 1"/></svg>"#;
        assert_eq!(merge_path_data(fixed).unwrap(), "M1 1");
    }

    #[tokio::test]
    async fn test_round_trips_through_the_scratch_directory() {
        let scratch = ScratchDir::new().unwrap();
        let fixer: Arc<dyn GeometryFixer> = Arc::new(CannedFixer(
            r#"<svg><path d="M0 0L1 1"/><path d="M2 2L3 3"/></svg>"#,
        ));

        let out = unify_icons(
            vec![icon("featherX", "<svg/>")],
            &scratch,
            fixer,
            FailurePolicy::FailFast,
        )
        .await
        .unwrap();

        assert_eq!(out.items[0].name, "featherX");
        assert_eq!(out.items[0].content, "M0 0L1 1M2 2L3 3");
        assert!(scratch.path().join("featherX.svg").exists());
    }

    #[tokio::test]
    async fn test_default_outliner_produces_filled_paths() {
        let scratch = ScratchDir::new().unwrap();
        let stroked = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 20 20" fill="none" stroke="black" stroke-width="2"><path d="M2 10L18 10"/></svg>"#;

        let out = unify_icons(
            vec![icon("featherMinus", stroked)],
            &scratch,
            Arc::new(StrokeOutliner),
            FailurePolicy::FailFast,
        )
        .await
        .unwrap();

        let content = &out.items[0].content;
        assert!(content.starts_with('M'));
        assert!(!content.contains("stroke"));
    }

    #[tokio::test]
    async fn test_fixer_failure_names_the_icon() {
        struct FailingFixer;
        impl GeometryFixer for FailingFixer {
            fn fix(&self, _path: &Path) -> Result<String, SvgError> {
                Err(SvgError::Parse("unusable".to_string()))
            }
        }

        let scratch = ScratchDir::new().unwrap();
        let err = unify_icons(
            vec![icon("featherX", "<svg/>")],
            &scratch,
            Arc::new(FailingFixer),
            FailurePolicy::FailFast,
        )
        .await
        .unwrap_err();

        assert!(err.to_string().contains("featherX"));
    }
}
