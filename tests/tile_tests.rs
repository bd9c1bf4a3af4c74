// Host-side tests for the tiling and projection math.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod tile {
    include!("../src/core/tile.rs");
}

use glam::Vec2;
use tile::*;

fn placement(logical: Vec2, random_offset: Vec2, factor: f32) -> Placement {
    Placement {
        logical,
        random_offset,
        factor,
    }
}

#[test]
fn wrap_stays_in_range() {
    let period = 1000.0;
    for u in [
        -1.0e6, -123456.7, -1040.0, -1000.0, -1.0, -0.0001, 0.0, 0.5, 999.99, 1000.0, 1000.01,
        54321.9,
    ] {
        let w = wrap(u, period);
        assert!(
            (0.0..period).contains(&w),
            "wrap({u}, {period}) = {w} out of [0, {period})"
        );
    }
}

#[test]
fn wrap_is_periodic() {
    let period = 500.0;
    for u in [-3210.5, -1.0, 0.0, 17.25, 499.0] {
        let base = wrap(u, period);
        for k in [-3.0, -1.0, 1.0, 4.0] {
            let shifted = wrap(u + k * period, period);
            assert!(
                (shifted - base).abs() < 1e-2,
                "wrap not periodic at u={u}, k={k}: {base} vs {shifted}"
            );
        }
    }
}

#[test]
fn projection_matches_known_scenarios() {
    let tile = Tile { w: 1000.0, h: 1000.0 };
    let p = placement(Vec2::new(10.0, 10.0), Vec2::ZERO, 1.0);

    // Camera thrown 20px left: item lands at 30.
    let pos = project(&p, Vec2::new(-20.0, 0.0), tile);
    assert!((pos.x - 30.0).abs() < 1e-3, "got {}", pos.x);
    assert!((pos.y - 10.0).abs() < 1e-3);

    // Offset larger than the tile wraps around the far edge.
    let pos = project(&p, Vec2::new(1050.0, 0.0), tile);
    assert!((pos.x - 960.0).abs() < 1e-3, "got {}", pos.x);
}

#[test]
fn projection_stays_in_tile_for_any_offset() {
    let tile = Tile { w: 1700.0, h: 900.0 };
    let placements = layout(12, tile, 99);
    let offsets = [
        Vec2::ZERO,
        Vec2::new(1.0, -1.0),
        Vec2::new(-25000.0, 13.5),
        Vec2::new(1e7, -1e7),
        Vec2::new(-0.001, 899.999),
        Vec2::new(123456.0, -98765.4),
    ];
    for p in &placements {
        for o in offsets {
            let pos = project(p, o, tile);
            assert!(
                (0.0..tile.w).contains(&pos.x) && (0.0..tile.h).contains(&pos.y),
                "projected {pos:?} out of tile for offset {o:?}"
            );
        }
    }
}

#[test]
fn projection_is_pure() {
    let tile = Tile { w: 1300.0, h: 800.0 };
    let p = placement(Vec2::new(411.0, 77.0), Vec2::new(90.0, 350.0), 0.7);
    let offset = Vec2::new(-345.6, 7890.1);
    let a = project(&p, offset, tile);
    let b = project(&p, offset, tile);
    assert_eq!(a, b);
}

#[test]
fn parallax_factor_scales_apparent_speed() {
    let tile = Tile { w: 4000.0, h: 4000.0 };
    let delta = 10.0;
    for factor in [0.3, 0.5, 1.0, 1.6] {
        let p = placement(Vec2::new(2000.0, 2000.0), Vec2::ZERO, factor);
        let before = project(&p, Vec2::new(100.0, 0.0), tile);
        let after = project(&p, Vec2::new(100.0 + delta, 0.0), tile);
        // Far from the seam, the drift is exactly delta * factor.
        let drift = before.x - after.x;
        assert!(
            (drift - delta * factor).abs() < 1e-3,
            "factor {factor}: drift {drift}"
        );
    }
}

#[test]
fn unit_factor_tracks_camera_exactly() {
    let tile = Tile { w: 2000.0, h: 2000.0 };
    let p = placement(Vec2::new(600.0, 900.0), Vec2::new(123.0, 45.0), 1.0);
    for step in 0..50 {
        let o = Vec2::new(step as f32 * 17.3, step as f32 * -9.1);
        let pos = project(&p, o, tile);
        let expected = Vec2::new(
            wrap(p.logical.x - o.x + p.random_offset.x, tile.w),
            wrap(p.logical.y - o.y + p.random_offset.y, tile.h),
        );
        assert_eq!(pos, expected);
    }
}

#[test]
fn tile_from_viewport_floors_and_clamps() {
    let t = Tile::from_viewport(Vec2::new(1440.5, 900.0), 2.0);
    assert_eq!(t.w, 2881.0);
    assert_eq!(t.h, 1800.0);

    let degenerate = Tile::from_viewport(Vec2::new(0.1, 0.0), 2.0);
    assert!(degenerate.w >= 1.0 && degenerate.h >= 1.0);
}

#[test]
fn grid_follows_tile_aspect() {
    let tile = Tile { w: 2000.0, h: 1000.0 };
    let grid = Grid::for_count(10, tile);
    // cols = ceil(sqrt(10 * 2)) = 5, rows = ceil(10 / 5) = 2
    assert_eq!(grid.cols, 5);
    assert_eq!(grid.rows, 2);
    assert!((grid.cell.x - 400.0).abs() < 1e-3);
    assert!((grid.cell.y - 500.0).abs() < 1e-3);
}

#[test]
fn layout_keeps_items_in_bounds_and_cells_unique() {
    let tile = Tile { w: 3840.0, h: 2160.0 };
    let count = 23;
    let placements = layout(count, tile, 42);
    assert_eq!(placements.len(), count);

    let grid = Grid::for_count(count, tile);
    let mut seen_cells = Vec::new();
    for (i, p) in placements.iter().enumerate() {
        assert!(
            (0.0..tile.w).contains(&p.logical.x) && (0.0..tile.h).contains(&p.logical.y),
            "item {i} out of tile: {:?}",
            p.logical
        );
        let cell = (
            (p.logical.x / grid.cell.x) as usize,
            (p.logical.y / grid.cell.y) as usize,
        );
        assert!(!seen_cells.contains(&cell), "items share cell {cell:?}");
        seen_cells.push(cell);

        // Jitter stays inside the 60% band around the cell center.
        let center = grid.cell_center(i);
        assert!((p.logical.x - center.x).abs() <= grid.cell.x * CELL_JITTER_BAND * 0.5 + 1e-3);
        assert!((p.logical.y - center.y).abs() <= grid.cell.y * CELL_JITTER_BAND * 0.5 + 1e-3);
    }
}

#[test]
fn layout_distributes_parallax_back_to_front() {
    let tile = Tile { w: 2000.0, h: 2000.0 };
    let placements = layout(8, tile, 7);
    assert!((placements[0].factor - PARALLAX_MIN).abs() < 1e-4);
    assert!((placements[7].factor - PARALLAX_MAX).abs() < 1e-4);
    for pair in placements.windows(2) {
        assert!(pair[0].factor <= pair[1].factor);
    }
    for p in &placements {
        assert!(p.factor >= PARALLAX_MIN && p.factor <= PARALLAX_MAX);
    }
}

#[test]
fn layout_is_reproducible_per_seed() {
    let tile = Tile { w: 2560.0, h: 1440.0 };
    let a = layout(9, tile, 1234);
    let b = layout(9, tile, 1234);
    for (pa, pb) in a.iter().zip(&b) {
        assert_eq!(pa.logical, pb.logical);
        assert_eq!(pa.random_offset, pb.random_offset);
    }
    let c = layout(9, tile, 1235);
    assert!(
        a.iter().zip(&c).any(|(pa, pc)| pa.logical != pc.logical),
        "different seeds produced identical layouts"
    );
}

#[test]
fn random_offsets_cover_the_tile_range() {
    let tile = Tile { w: 1000.0, h: 600.0 };
    for p in layout(16, tile, 5) {
        assert!((0.0..tile.w).contains(&p.random_offset.x));
        assert!((0.0..tile.h).contains(&p.random_offset.y));
    }
}

#[test]
fn speed_pulse_is_subtle_and_depth_weighted() {
    // No motion, no pulse.
    assert_eq!(speed_pulse(0.0, 0.5), 1.0);
    // Unit factor never pulses.
    assert_eq!(speed_pulse(100.0, 1.0), 1.0);
    // Background items pulse more than foreground ones.
    assert!(speed_pulse(20.0, 0.3) > speed_pulse(20.0, 0.8));
    // Above the normalization speed the pulse saturates.
    assert_eq!(speed_pulse(40.0, 0.5), speed_pulse(400.0, 0.5));
    // Foreground (factor > 1) shrinks slightly instead.
    assert!(speed_pulse(40.0, 1.6) < 1.0);
}
