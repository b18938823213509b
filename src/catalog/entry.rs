use crate::foundation::config::SiteLayout;
use crate::records::record::ItemRecord;

/// Keys the builder derives; author fields with these names are dropped.
const DERIVED_KEYS: [&str; 2] = ["canonicalRedirect", "originalDestination"];

/// One catalog item as consumed by the client script.
///
/// `id`, `title`, `content`, `imageUrl` and `canonicalRedirect` are a contract with the client and
/// must keep their names.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    /// Record identifier.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Body text.
    pub content: String,
    /// Local image file name, as authored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Absolute public image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Overwritten with the canonical redirect URL.
    pub redirect_url: String,
    /// This build's redirect page for the entry.
    pub canonical_redirect: String,
    /// The record's destination before it was overwritten.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_destination: Option<String>,
    /// Author fields carried through unchanged.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl CatalogEntry {
    /// Derive the public entry for `record`. The record itself is left untouched.
    pub fn derive(record: &ItemRecord, site: &SiteLayout) -> Self {
        let canonical = site.canonical_redirect_url(&record.id);

        let image_url = match (&record.image_url, &record.image) {
            (Some(url), _) => Some(absolutize(url, &site.base_url)),
            (None, Some(image)) if is_absolute_url(image) => Some(image.clone()),
            (None, Some(image)) => Some(site.image_url(image)),
            (None, None) => None,
        };

        let mut extra = record.extra.clone();
        for key in DERIVED_KEYS {
            extra.remove(key);
        }

        Self {
            id: record.id.clone(),
            title: record.title.clone(),
            content: record.content.clone(),
            image: record.image.clone(),
            image_url,
            redirect_url: canonical.clone(),
            canonical_redirect: canonical,
            original_destination: record.redirect_url.clone(),
            extra,
        }
    }

    /// Where the redirect page should send the viewer.
    ///
    /// The original destination wins; the canonical URL is used only when none was captured.
    pub fn redirect_target(&self) -> &str {
        match self.original_destination.as_deref().map(str::trim) {
            Some(dest) if !dest.is_empty() => dest,
            _ => &self.canonical_redirect,
        }
    }
}

/// Return `true` when `reference` already carries a URL scheme (or is protocol-relative).
pub fn is_absolute_url(reference: &str) -> bool {
    const SCHEMES: [&str; 4] = ["http://", "https://", "data:", "//"];
    let r = reference.trim_start().as_bytes();
    SCHEMES
        .iter()
        .any(|s| r.len() >= s.len() && r[..s.len()].eq_ignore_ascii_case(s.as_bytes()))
}

/// Prefix a site-relative reference with `base_url`; absolute references pass through unchanged.
pub fn absolutize(reference: &str, base_url: &str) -> String {
    if is_absolute_url(reference) {
        return reference.to_string();
    }
    let mut rel = reference.trim();
    while let Some(rest) = rel.strip_prefix("./") {
        rel = rest;
    }
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        rel.trim_start_matches('/')
    )
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/entry.rs"]
mod tests;
