use std::io::Cursor;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use image::RgbaImage;
use image::imageops::FilterType;
use tracing::{debug, info};

use crate::atlas::composite::{blit_over, premultiply_in_place, unpremultiply_in_place};
use crate::atlas::grid::{AtlasGrid, CELL_COUNT, fit_inside};
use crate::foundation::config::SiteLayout;
use crate::foundation::error::{PackError, PackResult};
use crate::foundation::output::{WrittenArtifact, write_artifact};
use crate::records::naming::{RecordFile, scan_record_files};
use crate::records::record::ItemRecord;

/// Where one input image landed in the atlas.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AtlasPlacement {
    /// Record file the image was declared in.
    pub record: String,
    /// Source image path.
    pub image: PathBuf,
    /// Top-left pixel of the tile.
    pub origin: (u32, u32),
    /// Tile size after fit-inside scaling.
    pub size: (u32, u32),
}

/// Everything an atlas run produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AtlasReport {
    /// Canvas edge length in pixels.
    pub canvas_size: u32,
    /// One placement per cell, in cell order.
    pub placements: Vec<AtlasPlacement>,
    /// The encoded atlas.
    pub atlas: WrittenArtifact,
}

struct AtlasInput {
    record: String,
    image: PathBuf,
}

/// Pack the images of the four item records into the atlas file.
///
/// The run is all-or-nothing: a wrong record count, an unreadable record, a record without an
/// image, or a missing image file fails before the output is touched.
#[tracing::instrument(skip(site), fields(output = %site.atlas_output.display()))]
pub fn pack_atlas(site: &SiteLayout) -> PackResult<AtlasReport> {
    let grid = AtlasGrid::new(site.atlas_canvas)?;

    let files = scan_record_files(&site.data_dir, &site.naming)?;
    if files.len() != CELL_COUNT {
        let names: Vec<&str> = files.iter().map(|f| f.file_name.as_str()).collect();
        return Err(PackError::precondition(format!(
            "atlas needs exactly {CELL_COUNT} item records in '{}', found {} [{}]",
            site.data_dir.display(),
            files.len(),
            names.join(", ")
        )));
    }

    let inputs = resolve_inputs(&files, &site.images_dir)?;

    let mut sources = Vec::with_capacity(CELL_COUNT);
    for input in &inputs {
        let img = load_image(&input.image)?;
        debug!(
            record = %input.record,
            width = img.width(),
            height = img.height(),
            "loaded atlas input"
        );
        sources.push(img);
    }

    let canvas = compose_atlas(grid, &sources)?;
    let bytes = encode_png(canvas)?;
    let atlas = write_artifact(&site.atlas_output, &bytes)?;

    let placements = inputs
        .into_iter()
        .zip(&sources)
        .enumerate()
        .map(|(i, (input, src))| AtlasPlacement {
            record: input.record,
            image: input.image,
            origin: grid.cell_origin(i).unwrap_or_default(),
            size: fit_inside(src.width(), src.height(), grid.cell_size()),
        })
        .collect();

    info!(
        canvas = grid.canvas_size(),
        path = %atlas.path.display(),
        "wrote atlas"
    );
    Ok(AtlasReport {
        canvas_size: grid.canvas_size(),
        placements,
        atlas,
    })
}

/// Composite exactly [`CELL_COUNT`] straight-alpha images into one straight-alpha canvas.
///
/// Image `i` is scaled to fit its cell and placed at [`AtlasGrid::cell_origin`]. Scaling and
/// compositing run in premultiplied alpha so transparent edges do not darken.
pub fn compose_atlas(grid: AtlasGrid, sources: &[RgbaImage]) -> PackResult<RgbaImage> {
    if sources.len() != CELL_COUNT {
        return Err(PackError::precondition(format!(
            "atlas needs exactly {CELL_COUNT} images, got {}",
            sources.len()
        )));
    }

    let mut canvas = RgbaImage::new(grid.canvas_size(), grid.canvas_size());
    for (i, src) in sources.iter().enumerate() {
        let (x, y) = grid
            .cell_origin(i)
            .ok_or_else(|| PackError::precondition(format!("no atlas cell for input {i}")))?;
        let tile = fit_tile(src, grid.cell_size());
        blit_over(&mut canvas, &tile, x, y)?;
    }
    unpremultiply_in_place(&mut canvas);
    Ok(canvas)
}

fn fit_tile(src: &RgbaImage, bound: u32) -> RgbaImage {
    let mut premul = src.clone();
    premultiply_in_place(&mut premul);

    let (w, h) = fit_inside(src.width(), src.height(), bound);
    if (w, h) == src.dimensions() {
        return premul;
    }
    image::imageops::resize(&premul, w, h, FilterType::Lanczos3)
}

fn resolve_inputs(files: &[RecordFile], images_dir: &Path) -> PackResult<Vec<AtlasInput>> {
    let mut inputs = Vec::with_capacity(files.len());
    let mut missing = Vec::new();

    for file in files {
        let record = ItemRecord::from_path(&file.path)
            .map_err(|e| PackError::precondition(format!("atlas input unreadable: {e}")))?;
        let image = record.image.as_deref().ok_or_else(|| {
            PackError::precondition(format!(
                "record '{}' declares no image for the atlas",
                file.file_name
            ))
        })?;

        let path = images_dir.join(image);
        if !path.is_file() {
            missing.push(path.display().to_string());
        }
        inputs.push(AtlasInput {
            record: file.file_name.clone(),
            image: path,
        });
    }

    if !missing.is_empty() {
        return Err(PackError::precondition(format!(
            "atlas image not found: {}",
            missing.join(", ")
        )));
    }
    Ok(inputs)
}

fn load_image(path: &Path) -> PackResult<RgbaImage> {
    let bytes = std::fs::read(path)
        .map_err(|e| PackError::io(format!("read image '{}': {e}", path.display())))?;
    let img = image::load_from_memory(&bytes)
        .with_context(|| format!("decode image '{}'", path.display()))
        .map_err(|e| PackError::image(format!("{e:#}")))?;
    Ok(img.to_rgba8())
}

fn encode_png(canvas: RgbaImage) -> PackResult<Vec<u8>> {
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(canvas)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .map_err(|e| PackError::image(format!("encode atlas png: {e}")))?;
    Ok(buf)
}

#[cfg(test)]
#[path = "../../tests/unit/atlas/packer.rs"]
mod tests;
