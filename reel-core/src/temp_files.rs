//! Temporary file management utilities.
//!
//! Temp files are created through the tempfile crate so they are removed by
//! `Drop`, including when an operation bails out with an error.

use crate::config::CoreConfig;
use crate::error::CoreResult;
use std::path::PathBuf;
use tempfile::{Builder as TempFileBuilder, NamedTempFile};

/// Directory used for temp files: the configured one, else the platform default.
pub fn temp_base_dir(config: &CoreConfig) -> PathBuf {
    config
        .temp_dir
        .clone()
        .unwrap_or_else(std::env::temp_dir)
}

/// Creates a temporary file with prefix and extension. Auto-deleted when dropped.
pub fn create_temp_file(config: &CoreConfig, prefix: &str, extension: &str) -> CoreResult<NamedTempFile> {
    let dir = temp_base_dir(config);
    std::fs::create_dir_all(&dir)?;
    let temp_file = TempFileBuilder::new()
        .prefix(&format!("{prefix}_"))
        .suffix(&format!(".{extension}"))
        .tempfile_in(&dir)?;

    log::debug!("Created temp file {}", temp_file.path().display());
    Ok(temp_file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temp_file_in_configured_dir_is_removed_on_drop() {
        let dir = tempfile::tempdir().unwrap();
        let config = CoreConfig {
            temp_dir: Some(dir.path().join("nested")),
            ..CoreConfig::default()
        };

        let file = create_temp_file(&config, "reel_concat", "txt").unwrap();
        let path = file.path().to_path_buf();
        assert!(path.starts_with(dir.path().join("nested")));
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("reel_concat_"));
        assert!(name.ends_with(".txt"));
        assert!(path.exists());

        drop(file);
        assert!(!path.exists());
    }

    #[test]
    fn test_default_temp_dir() {
        assert_eq!(temp_base_dir(&CoreConfig::default()), std::env::temp_dir());
    }
}
