//! Concat demuxer manifest files.
//!
//! ffmpeg's concat demuxer reads a text file with one `file '<path>'` line
//! per input. The manifest lives only as long as the `ConcatManifest` value,
//! so it is removed after the tool exits whether or not it succeeded.

use crate::config::CoreConfig;
use crate::error::{CoreError, CoreResult};
use crate::temp_files;

use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// A written manifest, deleted on drop.
#[derive(Debug)]
pub struct ConcatManifest {
    file: NamedTempFile,
    entries: Vec<PathBuf>,
}

impl ConcatManifest {
    /// Writes a manifest listing `inputs` by absolute path.
    pub fn create<P: AsRef<Path>>(config: &CoreConfig, inputs: &[P]) -> CoreResult<Self> {
        if inputs.is_empty() {
            return Err(CoreError::InvalidArgument(
                "concat needs at least one input".to_string(),
            ));
        }

        let entries = inputs
            .iter()
            .map(|p| std::path::absolute(p.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        let mut file = temp_files::create_temp_file(config, "reel_concat", "txt")?;
        file.write_all(render_manifest(&entries).as_bytes())?;
        file.flush()?;

        log::debug!(
            "Wrote concat manifest {} with {} entries",
            file.path().display(),
            entries.len()
        );
        Ok(Self { file, entries })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Absolute paths in manifest order.
    pub fn entries(&self) -> &[PathBuf] {
        &self.entries
    }
}

/// Renders manifest text, one newline-terminated line per entry.
pub fn render_manifest(entries: &[PathBuf]) -> String {
    entries
        .iter()
        .map(|p| format!("file '{}'\n", escape_path(p)))
        .collect()
}

// The concat demuxer closes a quoted string at `'`, so an embedded quote is
// written as `'\''`.
fn escape_path(path: &Path) -> String {
    path.to_string_lossy().replace('\'', r"'\''")
}
