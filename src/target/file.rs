//! Reading and atomically rewriting the target file.

use std::io::{ErrorKind, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::TargetError;

/// Read the whole target file.
pub fn read_target(path: &Path) -> Result<String, TargetError> {
    std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == ErrorKind::NotFound {
            TargetError::Missing(path.to_path_buf())
        } else {
            TargetError::ReadFailed {
                path: path.to_path_buf(),
                source,
            }
        }
    })
}

/// Replace the target file's content in one step.
///
/// The content goes to a temp file next to the target, which then takes the
/// target's permissions and is renamed over it. On failure the original file
/// is left as it was. A symlinked target is resolved first so the link itself
/// survives and its destination gets the new content.
pub fn write_target(path: &Path, content: &str) -> Result<(), TargetError> {
    let write_failed = |source: std::io::Error| TargetError::WriteFailed {
        path: path.to_path_buf(),
        source,
    };

    let resolved = std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    let destination = resolved.as_path();

    let dir = match destination.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(write_failed)?;
    tmp.write_all(content.as_bytes()).map_err(write_failed)?;
    tmp.as_file().sync_all().map_err(write_failed)?;

    if let Ok(metadata) = std::fs::metadata(destination) {
        tmp.as_file()
            .set_permissions(metadata.permissions())
            .map_err(write_failed)?;
    }

    tmp.persist(destination).map_err(|e| write_failed(e.error))?;
    debug!("Wrote {} bytes to {}", content.len(), destination.display());

    Ok(())
}
