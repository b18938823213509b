use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::atlas::grid::GRID;
use crate::foundation::error::{PackError, PackResult};
use crate::records::naming::RecordNaming;

/// Build configuration as authored in a JSON config file.
///
/// Every field is optional in the file; missing fields take the defaults listed on
/// [`BuildConfig::default`]. Relative paths are resolved against the site root passed to
/// [`BuildConfig::resolve`].
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct BuildConfig {
    /// Public base URL the site is deployed under (no trailing slash required).
    pub base_url: String,
    /// Directory holding the item records and the catalog file.
    pub data_dir: PathBuf,
    /// File name of the aggregate catalog inside `data_dir`.
    pub catalog_file: String,
    /// Literal prefix of record identifiers and file names.
    pub record_prefix: String,
    /// Record file extension, without the dot.
    pub record_extension: String,
    /// Site-relative directory of redirect pages; also used as the URL path segment.
    pub redirect_dir: String,
    /// Site-relative directory of source images; also used as the URL path segment.
    pub images_dir: String,
    /// Atlas packing settings.
    pub atlas: AtlasConfig,
}

/// Atlas output settings.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct AtlasConfig {
    /// Output PNG path.
    pub output: PathBuf,
    /// Width and height of the square canvas in pixels.
    pub canvas_size: u32,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            data_dir: PathBuf::from("data"),
            catalog_file: "articles.json".to_string(),
            record_prefix: "article".to_string(),
            record_extension: "json".to_string(),
            redirect_dir: "redirect".to_string(),
            images_dir: "images".to_string(),
            atlas: AtlasConfig::default(),
        }
    }
}

impl Default for AtlasConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from("images/packed-articles.png"),
            canvas_size: 2048,
        }
    }
}

impl BuildConfig {
    /// Parse a configuration from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> PackResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| PackError::validation(format!("parse build config JSON: {e}")))
    }

    /// Parse a configuration from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> PackResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            PackError::validation(format!("open build config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check field-level invariants without touching the filesystem.
    pub fn validate(&self) -> PackResult<()> {
        let base = self.base_url.trim();
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(PackError::validation(format!(
                "baseUrl must be an http(s) URL, got '{}'",
                self.base_url
            )));
        }
        if self.record_prefix.is_empty() {
            return Err(PackError::validation("recordPrefix must be non-empty"));
        }
        if self.record_prefix.ends_with(|c: char| c.is_ascii_digit()) {
            return Err(PackError::validation(
                "recordPrefix must not end with a digit",
            ));
        }
        if self.record_extension.is_empty() || self.record_extension.contains('.') {
            return Err(PackError::validation(
                "recordExtension must be non-empty and must not contain '.'",
            ));
        }
        if self.catalog_file.is_empty() || self.catalog_file.contains(['/', '\\']) {
            return Err(PackError::validation(
                "catalogFile must be a plain file name",
            ));
        }
        normalize_rel_path(&self.redirect_dir)?;
        normalize_rel_path(&self.images_dir)?;
        if self.atlas.canvas_size == 0 || !self.atlas.canvas_size.is_multiple_of(GRID) {
            return Err(PackError::validation(format!(
                "atlas canvasSize must be a positive multiple of {GRID}, got {}",
                self.atlas.canvas_size
            )));
        }
        Ok(())
    }

    /// Validate and resolve every path against `root`.
    pub fn resolve(&self, root: impl AsRef<Path>) -> PackResult<SiteLayout> {
        self.validate()?;
        let root = root.as_ref();
        let redirect_url_dir = normalize_rel_path(&self.redirect_dir)?;
        let images_url_dir = normalize_rel_path(&self.images_dir)?;
        let data_dir = root.join(&self.data_dir);

        Ok(SiteLayout {
            base_url: self.base_url.trim().trim_end_matches('/').to_string(),
            root: root.to_path_buf(),
            catalog_path: data_dir.join(&self.catalog_file),
            data_dir,
            redirect_dir: root.join(&redirect_url_dir),
            images_dir: root.join(&images_url_dir),
            redirect_url_dir,
            images_url_dir,
            naming: RecordNaming::new(
                self.record_prefix.clone(),
                self.record_extension.clone(),
                self.catalog_file.clone(),
            ),
            atlas_output: root.join(&self.atlas.output),
            atlas_canvas: self.atlas.canvas_size,
        })
    }
}

/// Concrete paths and URL segments for one build, derived from a [`BuildConfig`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteLayout {
    /// Base URL without a trailing slash.
    pub base_url: String,
    /// Site root every relative path was resolved against.
    pub root: PathBuf,
    /// Directory scanned for item records.
    pub data_dir: PathBuf,
    /// Full path of the catalog file.
    pub catalog_path: PathBuf,
    /// Output directory for redirect pages.
    pub redirect_dir: PathBuf,
    /// URL path segment of the redirect directory.
    pub redirect_url_dir: String,
    /// Directory holding local images.
    pub images_dir: PathBuf,
    /// URL path segment of the images directory.
    pub images_url_dir: String,
    /// Record file naming convention.
    pub naming: RecordNaming,
    /// Output path of the atlas PNG.
    pub atlas_output: PathBuf,
    /// Atlas canvas edge length in pixels.
    pub atlas_canvas: u32,
}

impl SiteLayout {
    /// The build's own redirect URL for `id`.
    pub fn canonical_redirect_url(&self, id: &str) -> String {
        format!("{}/{}/{id}.html", self.base_url, self.redirect_url_dir)
    }

    /// Public URL of a file inside the images directory.
    pub fn image_url(&self, image: &str) -> String {
        format!(
            "{}/{}/{}",
            self.base_url,
            self.images_url_dir,
            image.trim_start_matches('/')
        )
    }
}

/// Normalize and validate site-relative paths.
///
/// The normalized result uses `/` separators, removes `.` segments, and rejects absolute paths or
/// parent traversals (`..`).
pub fn normalize_rel_path(source: &str) -> PackResult<String> {
    let s = source.replace('\\', "/");
    if s.starts_with('/') {
        return Err(PackError::validation("site paths must be relative"));
    }
    if s.is_empty() {
        return Err(PackError::validation("site path must be non-empty"));
    }

    let mut out = Vec::<&str>::new();
    for part in s.split('/') {
        if part.is_empty() || part == "." {
            continue;
        }
        if part == ".." {
            return Err(PackError::validation("site paths must not contain '..'"));
        }
        out.push(part);
    }

    if out.is_empty() {
        return Err(PackError::validation(
            "site path must contain at least one segment",
        ));
    }

    Ok(out.join("/"))
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/config.rs"]
mod tests;
