//! Output file I/O

use crate::types::*;
use std::path::{Path, PathBuf};

/// Write the encoded artifact, creating the parent directory if needed.
///
/// The bytes go to a sibling `.partial` file that is renamed over the target
/// once complete, so a failed save never leaves a truncated file at `path`
/// and never clobbers an existing one.
pub(crate) async fn write_output(path: &Path, bytes: &[u8]) -> Result<()> {
    let save_error = |source: std::io::Error| ZineError::Save {
        path: path.to_owned(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await.map_err(save_error)?;
    }

    let staging = staging_path(path);
    let written = match tokio::fs::write(&staging, bytes).await {
        Ok(()) => tokio::fs::rename(&staging, path).await,
        Err(e) => Err(e),
    };

    if let Err(source) = written {
        if let Err(e) = tokio::fs::remove_file(&staging).await {
            if e.kind() != std::io::ErrorKind::NotFound {
                log::warn!("Could not remove {}: {}", staging.display(), e);
            }
        }
        return Err(save_error(source));
    }

    Ok(())
}

fn staging_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{}.partial", name))
}
