//! Crossroads demo map
//!
//! A grass square with a dirt cross three cells wide through the origin. A
//! fraction of cells swap grass and dirt so the autotiler has ragged edges,
//! isolated patches and inner corners to chew on.

use isotile_core::{Coordinate, TerrainGrid, TerrainType};
use rand::Rng;

/// Chance that a cell swaps grass for dirt or the reverse
pub const SWAP_CHANCE: f64 = 0.15;

/// Largest accepted half-size; 1025 x 1025 cells
pub const MAX_RADIUS: u32 = 512;

/// Half-width of the dirt cross, in cells either side of the axis
const ROAD_HALF_WIDTH: i32 = 1;

/// Build the crossroads map covering `-radius..=radius` on both axes
///
/// `radius` is clamped to [`MAX_RADIUS`].
pub fn crossroads(radius: u32, rng: &mut impl Rng) -> TerrainGrid {
    let radius = radius.min(MAX_RADIUS);
    let r = radius as i32;
    let mut grid = TerrainGrid::new();

    for y in -r..=r {
        for x in -r..=r {
            let on_road = x.abs() <= ROAD_HALF_WIDTH || y.abs() <= ROAD_HALF_WIDTH;
            let mut terrain = if on_road {
                TerrainType::Dirt
            } else {
                TerrainType::Grass
            };
            if rng.gen_bool(SWAP_CHANCE) {
                terrain = swap(terrain);
            }
            grid.set(Coordinate::new(x, y), terrain);
        }
    }

    tracing::debug!(radius, cells = grid.len(), "generated crossroads map");
    grid
}

fn swap(terrain: TerrainType) -> TerrainType {
    match terrain {
        TerrainType::Grass => TerrainType::Dirt,
        TerrainType::Dirt => TerrainType::Grass,
        other => other,
    }
}
