//! Archive download and entry selection

use std::io::{Cursor, Read};

use regex::Regex;
use tracing::debug;
use zip::ZipArchive;

use crate::error::PipelineError;
use crate::ArchiveEntry;

/// Download the archive at `url` fully into memory
pub async fn download_archive(url: &str) -> Result<Vec<u8>, PipelineError> {
    let response = reqwest::get(url)
        .await
        .map_err(|e| PipelineError::Download {
            url: url.to_string(),
            source: e,
        })?;

    if !response.status().is_success() {
        return Err(PipelineError::HttpStatus {
            url: url.to_string(),
            status: response.status(),
        });
    }

    let bytes = response.bytes().await.map_err(|e| PipelineError::Download {
        url: url.to_string(),
        source: e,
    })?;

    Ok(bytes.to_vec())
}

/// Select the entries whose archive-relative path matches `pattern`
///
/// Entries come back in the archive's enumeration order; directories and
/// non-matching entries are skipped without being read.
pub fn select_entries(archive: &[u8], pattern: &Regex) -> Result<Vec<ArchiveEntry>, PipelineError> {
    let mut zip = ZipArchive::new(Cursor::new(archive))?;

    let mut entries = Vec::new();
    for index in 0..zip.len() {
        let mut file = zip.by_index(index)?;
        if file.is_dir() {
            continue;
        }

        let path = file.name().to_string();
        if !pattern.is_match(&path) {
            continue;
        }

        let mut bytes = Vec::with_capacity(file.size() as usize);
        file.read_to_end(&mut bytes)
            .map_err(|e| PipelineError::Entry {
                path: path.clone(),
                source: e,
            })?;
        entries.push(ArchiveEntry { path, bytes });
    }

    debug!("selected {} of {} archive entries", entries.len(), zip.len());
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    use super::*;

    fn build_archive(files: &[(&str, &str)]) -> Vec<u8> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default();
        writer.add_directory("feather-master/icons", options).unwrap();
        for (path, content) in files {
            writer.start_file(*path, options).unwrap();
            writer.write_all(content.as_bytes()).unwrap();
        }
        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn test_selects_matching_entries_in_order() {
        let archive = build_archive(&[
            ("feather-master/icons/activity.svg", "<svg>a</svg>"),
            ("feather-master/README.md", "readme"),
            ("feather-master/icons/video-off.svg", "<svg>b</svg>"),
        ]);
        let pattern = Regex::new(r"feather-master/icons/[0-9a-zA-Z_-]+\.svg$").unwrap();

        let entries = select_entries(&archive, &pattern).unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].path, "feather-master/icons/activity.svg");
        assert_eq!(entries[1].path, "feather-master/icons/video-off.svg");
        assert_eq!(entries[0].bytes, b"<svg>a</svg>");
        assert!(entries.iter().all(|e| pattern.is_match(&e.path)));
    }

    #[test]
    fn test_malformed_archive_is_rejected() {
        let pattern = Regex::new(r"\.svg$").unwrap();
        let result = select_entries(b"definitely not a zip", &pattern);
        assert!(matches!(result, Err(PipelineError::Archive(_))));
    }
}
