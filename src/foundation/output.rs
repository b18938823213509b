use std::path::{Path, PathBuf};

use crate::foundation::digest::sha256_hex;
use crate::foundation::error::{PackError, PackResult};

/// A file written by one of the pipelines.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WrittenArtifact {
    /// Destination path.
    pub path: PathBuf,
    /// SHA-256 of the bytes written, lowercase hex.
    pub sha256: String,
}

/// Replace the file at `path` with `bytes`.
///
/// The bytes go to a sibling `.tmp` file first and are renamed into place, so readers never observe
/// a half-written artifact. Missing parent directories are created.
pub fn write_artifact(path: &Path, bytes: &[u8]) -> PackResult<WrittenArtifact> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            PackError::io(format!("create output dir '{}': {e}", parent.display()))
        })?;
    }

    let file_name = path.file_name().ok_or_else(|| {
        PackError::io(format!("output path '{}' has no file name", path.display()))
    })?;
    let mut tmp_name = file_name.to_os_string();
    tmp_name.push(".tmp");
    let tmp = path.with_file_name(tmp_name);

    std::fs::write(&tmp, bytes)
        .map_err(|e| PackError::io(format!("write '{}': {e}", tmp.display())))?;
    if let Err(e) = std::fs::rename(&tmp, path) {
        let _ = std::fs::remove_file(&tmp);
        return Err(PackError::io(format!(
            "move '{}' into place: {e}",
            path.display()
        )));
    }

    Ok(WrittenArtifact {
        path: path.to_path_buf(),
        sha256: sha256_hex(bytes),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/output.rs"]
mod tests;
