use std::path::Path;

use crate::foundation::error::{PackError, PackResult};

/// One author-supplied item record, as stored on disk.
///
/// Fields the pipeline does not know about are kept in `extra` and carried into the catalog.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRecord {
    /// Unique identifier, `<prefix><digits>`.
    pub id: String,
    /// Display title.
    #[serde(default)]
    pub title: String,
    /// Body text.
    #[serde(default)]
    pub content: String,
    /// Local image file name inside the images directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Public image reference, absolute or site-relative.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// External destination the item ultimately resolves to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,
    /// Any other author fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ItemRecord {
    /// Parse a record from JSON bytes and check that `id` can name a file.
    pub fn from_slice(bytes: &[u8]) -> PackResult<Self> {
        let record: Self = serde_json::from_slice(bytes)
            .map_err(|e| PackError::record(format!("parse record JSON: {e}")))?;
        record.check_id()?;
        Ok(record)
    }

    /// Read and parse a record file.
    pub fn from_path(path: impl AsRef<Path>) -> PackResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)
            .map_err(|e| PackError::record(format!("read '{}': {e}", path.display())))?;
        Self::from_slice(&bytes).map_err(|e| match e {
            PackError::Record(msg) => PackError::record(format!("'{}': {msg}", path.display())),
            other => other,
        })
    }

    fn check_id(&self) -> PackResult<()> {
        let id = self.id.as_str();
        if id.is_empty() || id == "." || id == ".." || id.contains(['/', '\\']) {
            return Err(PackError::record(format!(
                "id '{id}' cannot be used as a file name"
            )));
        }
        Ok(())
    }
}
