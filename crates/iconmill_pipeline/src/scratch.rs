//! Scoped scratch directory for fixer round-trips

use std::path::Path;

use tempfile::TempDir;

use crate::error::PipelineError;

/// A uniquely named scratch directory, removed recursively on drop
///
/// Every run acquires its own directory, so concurrent runs never collide,
/// and the directory is cleaned up whether the run succeeds or fails.
#[derive(Debug)]
pub struct ScratchDir {
    dir: TempDir,
}

impl ScratchDir {
    /// Create a fresh scratch directory under the system temp location
    pub fn new() -> Result<Self, PipelineError> {
        let dir = tempfile::Builder::new()
            .prefix("iconmill-")
            .tempdir()
            .map_err(PipelineError::ScratchDir)?;
        Ok(Self { dir })
    }

    /// Path of the scratch directory
    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removed_on_drop() {
        let scratch = ScratchDir::new().unwrap();
        let path = scratch.path().to_path_buf();
        std::fs::write(path.join("featherX.svg"), "<svg/>").unwrap();
        assert!(path.exists());

        drop(scratch);
        assert!(!path.exists());
    }

    #[test]
    fn test_directories_are_unique_per_run() {
        let a = ScratchDir::new().unwrap();
        let b = ScratchDir::new().unwrap();
        assert_ne!(a.path(), b.path());
    }
}
