//! pagepack assembles a small static content corpus from per-item source records.
//!
//! Two independent pipelines share the record directory as input:
//!
//! - [`build_catalog`] loads every item record, derives the public catalog (ordered by the numeric
//!   rank in each identifier), writes it, and emits one redirect page per item.
//! - [`pack_atlas`] packs exactly four item thumbnails into a fixed 2x2 texture atlas.
//!
//! Both are driven by a [`SiteLayout`], resolved from a [`BuildConfig`] against a site root.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod atlas;
mod catalog;
mod foundation;
mod records;
mod redirect;

/// Stage selection and aggregated run results.
pub mod pipeline;

pub use crate::atlas::composite::{
    PremulRgba8, over, premultiply_in_place, unpremultiply_in_place,
};
pub use crate::atlas::grid::{AtlasGrid, CELL_COUNT, GRID, fit_inside};
pub use crate::atlas::packer::{AtlasPlacement, AtlasReport, compose_atlas, pack_atlas};
pub use crate::catalog::builder::{
    CatalogReport, build_catalog, merge_records, serialize_catalog,
};
pub use crate::catalog::entry::{CatalogEntry, absolutize, is_absolute_url};
pub use crate::catalog::inventory::{MissingImage, inventory_images};
pub use crate::foundation::config::{AtlasConfig, BuildConfig, SiteLayout, normalize_rel_path};
pub use crate::foundation::digest::sha256_hex;
pub use crate::foundation::error::{PackError, PackResult};
pub use crate::foundation::output::{WrittenArtifact, write_artifact};
pub use crate::records::loader::{LoadReport, LoadedRecord, load_records};
pub use crate::records::naming::{Rank, RecordFile, RecordNaming, scan_record_files};
pub use crate::records::record::ItemRecord;
pub use crate::redirect::page::{emit_redirect, render_redirect_page};
