//! The catalog and atlas pipelines are independent: a failure in one never prevents the other from
//! running when both are requested.

use tracing::error;

use crate::atlas::packer::{AtlasReport, pack_atlas};
use crate::catalog::builder::{CatalogReport, build_catalog};
use crate::foundation::config::SiteLayout;
use crate::foundation::error::PackResult;
use crate::foundation::output::WrittenArtifact;

/// Which pipelines to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    /// Catalog and redirect pages.
    Build,
    /// Atlas only.
    Pack,
    /// Both, each independent of the other's outcome.
    All,
}

impl Stage {
    fn runs_catalog(self) -> bool {
        matches!(self, Self::Build | Self::All)
    }

    fn runs_atlas(self) -> bool {
        matches!(self, Self::Pack | Self::All)
    }
}

/// Outcome of each pipeline that was requested.
#[derive(Debug)]
pub struct RunSummary {
    /// Catalog result, if the catalog pipeline ran.
    pub catalog: Option<PackResult<CatalogReport>>,
    /// Atlas result, if the atlas pipeline ran.
    pub atlas: Option<PackResult<AtlasReport>>,
}

impl RunSummary {
    /// `true` when no requested pipeline failed.
    pub fn succeeded(&self) -> bool {
        !matches!(self.catalog, Some(Err(_))) && !matches!(self.atlas, Some(Err(_)))
    }

    /// Every artifact written by successful pipelines, catalog first.
    pub fn artifacts(&self) -> Vec<&WrittenArtifact> {
        let mut out = Vec::new();
        if let Some(Ok(report)) = &self.catalog {
            out.push(&report.catalog);
            out.extend(report.redirects.iter());
        }
        if let Some(Ok(report)) = &self.atlas {
            out.push(&report.atlas);
        }
        out
    }
}

/// Run the requested pipelines in order: catalog first, then atlas.
pub fn run(stage: Stage, site: &SiteLayout) -> RunSummary {
    let catalog = stage.runs_catalog().then(|| {
        build_catalog(site).inspect_err(|e| error!(error = %e, "catalog build failed"))
    });
    let atlas = stage
        .runs_atlas()
        .then(|| pack_atlas(site).inspect_err(|e| error!(error = %e, "atlas packing failed")));
    RunSummary { catalog, atlas }
}
