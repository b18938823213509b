use std::collections::BTreeSet;
use std::path::PathBuf;

use tracing::{debug, warn};

use crate::catalog::entry::{CatalogEntry, is_absolute_url};
use crate::foundation::config::SiteLayout;

/// An entry image reference that does not resolve to a local file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MissingImage {
    /// Entry identifier.
    pub id: String,
    /// The reference as it appears in the entry.
    pub reference: String,
    /// Local path that was checked.
    pub path: PathBuf,
}

/// Check every entry's image references against the local filesystem.
///
/// Missing files are logged as warnings and returned; they never fail the build. References that
/// point outside the site's base URL are external and are not checked.
pub fn inventory_images(entries: &[CatalogEntry], site: &SiteLayout) -> Vec<MissingImage> {
    let mut missing = Vec::new();

    for entry in entries {
        let mut checked = BTreeSet::new();
        for (reference, path) in local_candidates(entry, site) {
            if !checked.insert(path.clone()) {
                continue;
            }
            if path.is_file() {
                continue;
            }
            warn!(
                id = %entry.id,
                reference = %reference,
                path = %path.display(),
                "image does not resolve to a local file"
            );
            missing.push(MissingImage {
                id: entry.id.clone(),
                reference,
                path,
            });
        }
    }

    missing
}

fn local_candidates(entry: &CatalogEntry, site: &SiteLayout) -> Vec<(String, PathBuf)> {
    let mut out = Vec::new();

    if let Some(image) = entry.image.as_ref().filter(|i| !is_absolute_url(i)) {
        out.push((image.clone(), site.images_dir.join(image)));
    }

    if let Some(url) = &entry.image_url {
        let prefix = format!("{}/", site.base_url);
        match url.strip_prefix(prefix.as_str()) {
            Some(rel) => {
                let rel = rel.split(['?', '#']).next().unwrap_or_default();
                out.push((url.clone(), site.root.join(rel)));
            }
            None => debug!(id = %entry.id, url = %url, "external image reference not checked"),
        }
    }

    out
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/inventory.rs"]
mod tests;
