use image::RgbaImage;

use crate::foundation::error::{PackError, PackResult};

/// One RGBA8 pixel with premultiplied alpha.
pub type PremulRgba8 = [u8; 4];

/// Source-over of premultiplied `src` onto premultiplied `dst`.
pub fn over(dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
    if src[3] == 0 {
        return dst;
    }
    if src[3] == 255 {
        return src;
    }

    let inv = 255u16 - u16::from(src[3]);
    let mut out = [0u8; 4];
    for i in 0..4 {
        out[i] = src[i].saturating_add(mul_div255(u16::from(dst[i]), inv));
    }
    out
}

/// Convert straight-alpha RGBA8 bytes to premultiplied alpha.
pub fn premultiply_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = mul_div255(u16::from(px[0]), a);
        px[1] = mul_div255(u16::from(px[1]), a);
        px[2] = mul_div255(u16::from(px[2]), a);
    }
}

/// Convert premultiplied RGBA8 bytes back to straight alpha.
///
/// Color channels that exceed alpha (resampling overshoot) saturate at 255.
pub fn unpremultiply_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u32::from(px[3]);
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        if a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((u32::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

/// Composite premultiplied `src` onto premultiplied `dst` with its top-left at `(x, y)`.
pub fn blit_over(dst: &mut RgbaImage, src: &RgbaImage, x: u32, y: u32) -> PackResult<()> {
    let (w, h) = src.dimensions();
    if x.saturating_add(w) > dst.width() || y.saturating_add(h) > dst.height() {
        return Err(PackError::image(format!(
            "{w}x{h} tile at ({x}, {y}) does not fit a {}x{} canvas",
            dst.width(),
            dst.height()
        )));
    }
    for (sx, sy, s) in src.enumerate_pixels() {
        let d = dst.get_pixel_mut(x + sx, y + sy);
        d.0 = over(d.0, s.0);
    }
    Ok(())
}

fn mul_div255(x: u16, y: u16) -> u8 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/atlas/composite.rs"]
mod tests;
