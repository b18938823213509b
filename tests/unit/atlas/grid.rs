use super::*;

#[test]
fn cell_origins_follow_reading_order() {
    let grid = AtlasGrid::new(2048).unwrap();
    assert_eq!(grid.cell_size(), 1024);
    assert_eq!(grid.cell_origin(0), Some((0, 0)));
    assert_eq!(grid.cell_origin(1), Some((1024, 0)));
    assert_eq!(grid.cell_origin(2), Some((0, 1024)));
    assert_eq!(grid.cell_origin(3), Some((1024, 1024)));
    assert_eq!(grid.cell_origin(4), None);
}

#[test]
fn canvas_must_split_evenly() {
    assert!(AtlasGrid::new(0).is_err());
    assert!(AtlasGrid::new(63).is_err());
    assert_eq!(AtlasGrid::new(64).unwrap().cell_size(), 32);
}

#[test]
fn fit_inside_clamps_larger_dimension() {
    assert_eq!(fit_inside(2000, 1000, 1024), (1024, 512));
    assert_eq!(fit_inside(1000, 2000, 1024), (512, 1024));
    assert_eq!(fit_inside(3000, 3000, 1024), (1024, 1024));
    assert_eq!(fit_inside(1500, 1024, 1024), (1024, 699));
}

#[test]
fn fit_inside_never_upscales() {
    assert_eq!(fit_inside(300, 200, 1024), (300, 200));
    assert_eq!(fit_inside(1024, 10, 1024), (1024, 10));
}

#[test]
fn fit_inside_keeps_at_least_one_pixel() {
    assert_eq!(fit_inside(10_000, 1, 32), (32, 1));
}
