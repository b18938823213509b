use crate::foundation::error::{PackError, PackResult};

/// Cells per atlas row and column.
pub const GRID: u32 = 2;

/// Number of cells, and the exact number of images an atlas takes.
pub const CELL_COUNT: usize = (GRID * GRID) as usize;

/// `(column, row)` of each input index.
const CELL_POSITIONS: [(u32, u32); CELL_COUNT] = [(0, 0), (1, 0), (0, 1), (1, 1)];

/// Square canvas split into [`GRID`] x [`GRID`] equal cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AtlasGrid {
    canvas: u32,
    cell: u32,
}

impl AtlasGrid {
    /// Build a grid for a canvas edge of `canvas_size` pixels, which must divide evenly.
    pub fn new(canvas_size: u32) -> PackResult<Self> {
        if canvas_size == 0 || !canvas_size.is_multiple_of(GRID) {
            return Err(PackError::validation(format!(
                "atlas canvas size must be a positive multiple of {GRID}, got {canvas_size}"
            )));
        }
        Ok(Self {
            canvas: canvas_size,
            cell: canvas_size / GRID,
        })
    }

    /// Canvas edge length in pixels.
    pub fn canvas_size(self) -> u32 {
        self.canvas
    }

    /// Cell edge length in pixels.
    pub fn cell_size(self) -> u32 {
        self.cell
    }

    /// Top-left pixel of the cell for input `index`, or `None` past the last cell.
    pub fn cell_origin(self, index: usize) -> Option<(u32, u32)> {
        CELL_POSITIONS
            .get(index)
            .map(|&(col, row)| (col * self.cell, row * self.cell))
    }
}

/// Size of a `width` x `height` image scaled to fit inside a `bound` x `bound` box.
///
/// Aspect ratio is preserved, images are never enlarged, and neither dimension drops below 1.
pub fn fit_inside(width: u32, height: u32, bound: u32) -> (u32, u32) {
    if width <= bound && height <= bound {
        return (width, height);
    }
    let scaled = |num: u32, den: u32| -> u32 {
        let v = (u64::from(num) * u64::from(bound) + u64::from(den) / 2) / u64::from(den);
        v.clamp(1, u64::from(bound)) as u32
    };
    if width >= height {
        (bound, scaled(height, width))
    } else {
        (scaled(width, height), bound)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/atlas/grid.rs"]
mod tests;
