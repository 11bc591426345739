//! Output artifact generation

use std::path::Path;

use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tracing::info;

use crate::config::EmitStyle;
use crate::error::PipelineError;
use crate::name::const_case;
use crate::UnifiedIcon;

/// Write every icon as a named constant declaration in `style`
///
/// Icons are written in the order supplied. The artifact is created fresh
/// on every run and fully flushed before returning.
pub(crate) async fn write_icons(
    icons: &[UnifiedIcon],
    output: &Path,
    header: Option<&str>,
    style: EmitStyle,
) -> Result<(), PipelineError> {
    info!("Writing {} icons to {}", icons.len(), output.display());

    let source = render(icons, header, style);

    let mut file = File::create(output)
        .await
        .map_err(|e| emit_error(output, e))?;
    file.write_all(source.as_bytes())
        .await
        .map_err(|e| emit_error(output, e))?;
    file.flush().await.map_err(|e| emit_error(output, e))?;

    Ok(())
}

fn emit_error(output: &Path, source: std::io::Error) -> PipelineError {
    PipelineError::Emit {
        path: output.display().to_string(),
        source,
    }
}

fn render(icons: &[UnifiedIcon], header: Option<&str>, style: EmitStyle) -> String {
    let mut out = String::new();
    if let Some(header) = header {
        out.push_str(header);
        out.push_str("\n\n");
    }

    for icon in icons {
        match style {
            EmitStyle::TypeScript => {
                out.push_str(&format!(
                    "export const {} =\n  '{}';\n\n",
                    icon.name, icon.content
                ));
            }
            EmitStyle::Rust => {
                out.push_str(&format!(
                    "/// {}\npub const {}: &str = \"{}\";\n\n",
                    icon.name,
                    const_case(&icon.name),
                    icon.content
                ));
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn icon(name: &str, content: &str) -> UnifiedIcon {
        UnifiedIcon {
            name: name.to_string(),
            content: content.to_string(),
        }
    }

    #[test]
    fn test_typescript_block_format() {
        let icons = [icon("featherA", "M0 0"), icon("featherB", "M1 1")];
        let rendered = render(&icons, None, EmitStyle::TypeScript);

        assert_eq!(
            rendered,
            "export const featherA =\n  'M0 0';\n\nexport const featherB =\n  'M1 1';\n\n"
        );
    }

    #[test]
    fn test_header_is_followed_by_a_blank_line() {
        let icons = [icon("featherA", "M0 0")];
        let rendered = render(&icons, Some("// Auto-generated - DO NOT EDIT"), EmitStyle::TypeScript);

        assert!(rendered.starts_with("// Auto-generated - DO NOT EDIT\n\nexport const featherA"));
    }

    #[test]
    fn test_rust_block_format() {
        let icons = [icon("featherVideoOff", "M0 0L1 1")];
        let rendered = render(&icons, Some("//! Generated icon path constants"), EmitStyle::Rust);

        assert_eq!(
            rendered,
            "//! Generated icon path constants\n\n/// featherVideoOff\npub const FEATHER_VIDEO_OFF: &str = \"M0 0L1 1\";\n\n"
        );
    }

    #[tokio::test]
    async fn test_writes_and_flushes_the_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("icon-paths.ts");

        write_icons(
            &[icon("featherA", "M0 0")],
            &output,
            None,
            EmitStyle::TypeScript,
        )
        .await
        .unwrap();

        let written = std::fs::read_to_string(&output).unwrap();
        assert_eq!(written, "export const featherA =\n  'M0 0';\n\n");
    }

    #[tokio::test]
    async fn test_rewriting_is_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("icon-paths.ts");
        let icons = [icon("featherA", "M0 0"), icon("featherB", "M1 1")];

        write_icons(&icons, &output, Some("// x"), EmitStyle::TypeScript)
            .await
            .unwrap();
        let first = std::fs::read(&output).unwrap();

        write_icons(&icons, &output, Some("// x"), EmitStyle::TypeScript)
            .await
            .unwrap();
        let second = std::fs::read(&output).unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_missing_parent_directory_is_an_emit_error() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("no-such-dir").join("icon-paths.ts");

        let err = write_icons(&[], &output, None, EmitStyle::TypeScript)
            .await
            .unwrap_err();

        assert!(matches!(err, PipelineError::Emit { .. }));
    }
}
