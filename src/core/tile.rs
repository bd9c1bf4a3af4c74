use glam::Vec2;
use rand::prelude::*;

// Parallax factors assigned to items, back to front.
pub const PARALLAX_MIN: f32 = 0.3;
pub const PARALLAX_MAX: f32 = 1.6;

// Fraction of a grid cell that placement jitter may occupy (centered band).
pub const CELL_JITTER_BAND: f32 = 0.6;

// Speed-based depth pulse tuning
pub const PULSE_GAIN: f32 = 0.02;
pub const PULSE_SPEED_NORM: f32 = 40.0; // px/frame mapped to full pulse

/// Positive modulo. Result is in `[0, period)` for any finite `u` and
/// `period > 0`, which is what makes the tile behave as a torus.
#[inline]
pub fn wrap(u: f32, period: f32) -> f32 {
    ((u % period) + period) % period
}

#[inline]
pub fn clamp(v: f32, lo: f32, hi: f32) -> f32 {
    v.max(lo).min(hi)
}

/// Linear remap of `v` from `[a1, a2]` to `[b1, b2]`.
#[inline]
pub fn remap(v: f32, a1: f32, a2: f32, b1: f32, b2: f32) -> f32 {
    if a1 == a2 {
        return b1;
    }
    b1 + (b2 - b1) * ((v - a1) / (a2 - a1))
}

/// Logical rectangle that wraps toroidally to simulate infinite space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tile {
    pub w: f32,
    pub h: f32,
}

impl Tile {
    /// Tile sized as a multiple of the viewport, floored, never below 1x1.
    pub fn from_viewport(viewport: Vec2, scale: f32) -> Self {
        Self {
            w: (viewport.x * scale).floor().max(1.0),
            h: (viewport.y * scale).floor().max(1.0),
        }
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.w / self.h
    }
}

/// Grid partition of a tile, one cell per item.
#[derive(Clone, Copy, Debug)]
pub struct Grid {
    pub cols: usize,
    pub rows: usize,
    pub cell: Vec2,
}

impl Grid {
    /// Columns follow the tile aspect so the distribution stays even on
    /// portrait and landscape viewports alike.
    pub fn for_count(count: usize, tile: Tile) -> Self {
        let count = count.max(1);
        let cols = ((count as f32 * tile.aspect()).sqrt().ceil() as usize).max(1);
        let rows = count.div_ceil(cols).max(1);
        Self {
            cols,
            rows,
            cell: Vec2::new(tile.w / cols as f32, tile.h / rows as f32),
        }
    }

    #[inline]
    pub fn cell_center(&self, index: usize) -> Vec2 {
        let gx = (index % self.cols) as f32;
        let gy = (index / self.cols) as f32;
        Vec2::new(
            self.cell.x * gx + self.cell.x * 0.5,
            self.cell.y * gy + self.cell.y * 0.5,
        )
    }
}

/// One item's immutable place in the logical tile.
///
/// `random_offset` desynchronizes wrap cycles across items: without it,
/// items with rational factor ratios would periodically re-align into the
/// starting grid.
#[derive(Clone, Copy, Debug)]
pub struct Placement {
    pub logical: Vec2,
    pub random_offset: Vec2,
    pub factor: f32,
}

/// Lay out `count` items on a jittered grid inside `tile`.
///
/// Positions are each cell's center plus a uniform jitter bounded to
/// `CELL_JITTER_BAND` of the cell, so no two items share a cell and every
/// logical position stays inside the tile. Parallax factors run linearly
/// from `PARALLAX_MIN` (first item, background) to `PARALLAX_MAX` (last
/// item, foreground). The seed makes a layout reproducible.
pub fn layout(count: usize, tile: Tile, seed: u64) -> Vec<Placement> {
    let count = count.max(1);
    let grid = Grid::for_count(count, tile);
    let mut rng = StdRng::seed_from_u64(seed);

    (0..count)
        .map(|i| {
            let jitter = Vec2::new(
                (rng.gen::<f32>() - 0.5) * grid.cell.x * CELL_JITTER_BAND,
                (rng.gen::<f32>() - 0.5) * grid.cell.y * CELL_JITTER_BAND,
            );
            let random_offset = Vec2::new(rng.gen::<f32>() * tile.w, rng.gen::<f32>() * tile.h);
            let factor = remap(
                i as f32,
                0.0,
                (count - 1).max(1) as f32,
                PARALLAX_MIN,
                PARALLAX_MAX,
            );
            Placement {
                logical: grid.cell_center(i) + jitter,
                random_offset,
                factor: clamp(factor, PARALLAX_MIN, PARALLAX_MAX),
            }
        })
        .collect()
}

/// Project one item from logical space to tile space for a camera offset.
///
/// The offset is weighted by the item's parallax factor, then wrapped, so
/// an item leaving one edge re-enters the opposite edge with no
/// discontinuity. Pure function of its inputs.
#[inline]
pub fn project(p: &Placement, offset: Vec2, tile: Tile) -> Vec2 {
    Vec2::new(
        wrap(p.logical.x - offset.x * p.factor + p.random_offset.x, tile.w),
        wrap(p.logical.y - offset.y * p.factor + p.random_offset.y, tile.h),
    )
}

/// Where an item rests when the camera sits at the origin. Used as the
/// dispersal target of the intro.
#[inline]
pub fn resting_position(p: &Placement, tile: Tile) -> Vec2 {
    project(p, Vec2::ZERO, tile)
}

/// Scale multiplier for the subtle depth cue: items pulse with camera
/// speed, background items (low factor) slightly more than foreground.
#[inline]
pub fn speed_pulse(speed: f32, factor: f32) -> f32 {
    let k = (speed / PULSE_SPEED_NORM).min(1.0);
    1.0 + PULSE_GAIN * k * (1.0 - factor)
}
