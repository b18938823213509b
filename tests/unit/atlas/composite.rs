use image::Rgba;

use super::*;

#[test]
fn over_src_alpha_0_is_noop() {
    let dst = [10, 20, 30, 40];
    assert_eq!(over(dst, [0, 0, 0, 0]), dst);
}

#[test]
fn over_src_opaque_replaces_dst() {
    assert_eq!(over([0, 0, 0, 255], [255, 0, 0, 255]), [255, 0, 0, 255]);
}

#[test]
fn over_dst_transparent_returns_src() {
    let src = [100, 110, 120, 200];
    assert_eq!(over([0, 0, 0, 0], src), src);
}

#[test]
fn premultiply_scales_color_by_alpha() {
    let mut px = [100u8, 50, 200, 128, 9, 9, 9, 0];
    premultiply_in_place(&mut px);
    assert_eq!(
        px,
        [
            ((100u16 * 128 + 127) / 255) as u8,
            ((50u16 * 128 + 127) / 255) as u8,
            ((200u16 * 128 + 127) / 255) as u8,
            128,
            0,
            0,
            0,
            0
        ]
    );
}

#[test]
fn premultiply_round_trip_is_close() {
    let src = [200u8, 100, 40, 180];
    let mut px = src;
    premultiply_in_place(&mut px);
    unpremultiply_in_place(&mut px);
    for i in 0..3 {
        assert!(px[i].abs_diff(src[i]) <= 1, "channel {i}: {px:?} vs {src:?}");
    }
    assert_eq!(px[3], 180);
}

#[test]
fn unpremultiply_saturates_overshoot() {
    let mut px = [90u8, 0, 0, 60];
    unpremultiply_in_place(&mut px);
    assert_eq!(px, [255, 0, 0, 60]);
}

#[test]
fn blit_places_tile_and_checks_bounds() {
    let mut canvas = RgbaImage::new(4, 4);
    let tile = RgbaImage::from_pixel(2, 2, Rgba([255, 0, 0, 255]));

    blit_over(&mut canvas, &tile, 2, 2).unwrap();
    assert_eq!(canvas.get_pixel(1, 1).0, [0, 0, 0, 0]);
    assert_eq!(canvas.get_pixel(2, 2).0, [255, 0, 0, 255]);
    assert_eq!(canvas.get_pixel(3, 3).0, [255, 0, 0, 255]);

    assert!(blit_over(&mut canvas, &tile, 3, 0).is_err());
}
