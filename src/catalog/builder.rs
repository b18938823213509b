use std::collections::BTreeMap;

use tracing::{info, warn};

use crate::catalog::entry::CatalogEntry;
use crate::catalog::inventory::{MissingImage, inventory_images};
use crate::foundation::config::SiteLayout;
use crate::foundation::error::{PackError, PackResult};
use crate::foundation::output::{WrittenArtifact, write_artifact};
use crate::records::loader::{LoadedRecord, load_records};
use crate::redirect::page::emit_redirect;

/// Everything a catalog build produced.
#[derive(Clone, Debug, PartialEq)]
pub struct CatalogReport {
    /// Entries in catalog order.
    pub entries: Vec<CatalogEntry>,
    /// Record files that were skipped.
    pub failed: Vec<String>,
    /// The catalog file.
    pub catalog: WrittenArtifact,
    /// One redirect page per entry, in catalog order.
    pub redirects: Vec<WrittenArtifact>,
    /// Image references that did not resolve locally.
    pub missing_images: Vec<MissingImage>,
}

/// Derive one entry per record and order them by rank.
///
/// The sort is stable, so records of equal rank keep their load order.
pub fn merge_records(records: &[LoadedRecord], site: &SiteLayout) -> Vec<CatalogEntry> {
    let mut ranked: Vec<_> = records
        .iter()
        .map(|r| (&r.rank, CatalogEntry::derive(&r.record, site)))
        .collect();
    ranked.sort_by(|a, b| a.0.cmp(b.0));
    ranked.into_iter().map(|(_, entry)| entry).collect()
}

/// Serialize entries as a pretty-printed JSON array with a trailing newline.
pub fn serialize_catalog(entries: &[CatalogEntry]) -> PackResult<Vec<u8>> {
    let mut bytes = serde_json::to_vec_pretty(entries)
        .map_err(|e| PackError::serde(format!("serialize catalog: {e}")))?;
    bytes.push(b'\n');
    Ok(bytes)
}

/// Rebuild the catalog and every redirect page from the record directory.
///
/// The catalog file is replaced wholesale. Any write failure aborts the run.
#[tracing::instrument(skip(site), fields(data_dir = %site.data_dir.display()))]
pub fn build_catalog(site: &SiteLayout) -> PackResult<CatalogReport> {
    let loaded = load_records(&site.data_dir, &site.naming)?;
    let entries = merge_records(&loaded.records, site);
    warn_duplicate_ids(&entries);

    let bytes = serialize_catalog(&entries)?;
    let catalog = write_artifact(&site.catalog_path, &bytes)?;
    info!(
        entries = entries.len(),
        skipped = loaded.failed.len(),
        path = %catalog.path.display(),
        "wrote catalog"
    );

    let mut redirects = Vec::with_capacity(entries.len());
    for entry in &entries {
        redirects.push(emit_redirect(entry, &site.redirect_dir)?);
    }
    info!(count = redirects.len(), dir = %site.redirect_dir.display(), "wrote redirect pages");

    let missing_images = inventory_images(&entries, site);
    if !missing_images.is_empty() {
        warn!(count = missing_images.len(), "catalog references missing images");
    }

    Ok(CatalogReport {
        entries,
        failed: loaded.failed,
        catalog,
        redirects,
        missing_images,
    })
}

fn warn_duplicate_ids(entries: &[CatalogEntry]) {
    let mut seen = BTreeMap::<&str, usize>::new();
    for entry in entries {
        *seen.entry(entry.id.as_str()).or_default() += 1;
    }
    for (id, count) in seen.into_iter().filter(|(_, n)| *n > 1) {
        warn!(id, count, "duplicate id; later redirect pages overwrite earlier ones");
    }
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/builder.rs"]
mod tests;
