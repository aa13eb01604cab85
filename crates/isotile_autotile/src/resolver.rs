//! Two-layer autotile resolution
//!
//! Every cell resolves to a base tile drawn from its own terrain plus at most
//! one overlay tile from the dominant higher-tier neighbor bleeding in. The
//! resolver keeps no per-cell state: each call re-derives its answer from the
//! grid and manifest it is given, so whole-map resolution can be split across
//! threads freely.

use crate::asset::resolve_key;
use crate::classify::{cardinal_mask, classify, diagonal_mask};
use crate::manifest::VariantManifest;
use crate::registry::TerrainRegistry;
use isotile_core::{Coordinate, Direction, TerrainGrid, TerrainType, TileKind};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Multiplier applied to `x` before hashing into the variant seed
pub const SEED_PRIME_X: i64 = 73_856_093;
/// Multiplier applied to `y` before hashing into the variant seed
pub const SEED_PRIME_Y: i64 = 19_349_663;

/// One resolved layer of a cell
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileSelection {
    pub asset_key: String,
    /// Classified shape. The key may name `Full` where this says `Isolated`
    /// if the terrain has no isolated art.
    pub kind: TileKind,
    pub variant_seed: i64,
}

/// Final per-cell output: base layer plus optional overlay
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResolvedTile {
    pub base: TileSelection,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overlay: Option<TileSelection>,
}

/// Deterministic per-coordinate variant seed
///
/// Depends on `(x, y)` only. Each axis is scaled by its own odd constant and
/// run through a 64-bit avalanche mix so neighboring cells rarely share a
/// variant.
pub fn variant_seed(x: i32, y: i32) -> i64 {
    let hx = mix64(i64::from(x).wrapping_mul(SEED_PRIME_X) as u64);
    let hy = mix64(i64::from(y).wrapping_mul(SEED_PRIME_Y) as u64);
    (hx ^ hy) as i64
}

/// SplitMix64 finalizer
fn mix64(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

/// Overlay layer for a classified shape; an isolated overlay carries no
/// visual information and is dropped
fn overlay_selection(
    terrain: TerrainType,
    kind: TileKind,
    variant_seed: i64,
    manifest: &VariantManifest,
) -> Option<TileSelection> {
    if kind == TileKind::Isolated {
        return None;
    }
    Some(TileSelection {
        asset_key: resolve_key(terrain, kind, variant_seed, manifest),
        kind,
        variant_seed,
    })
}

/// Resolves terrain cells into base and overlay tile selections
#[derive(Debug, Clone, Default)]
pub struct AutoTileResolver {
    registry: TerrainRegistry,
}

impl AutoTileResolver {
    pub fn new(registry: TerrainRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &TerrainRegistry {
        &self.registry
    }

    /// Resolve the cell at `(x, y)` as if it held `terrain`
    pub fn resolve_cell(
        &self,
        grid: &TerrainGrid,
        manifest: &VariantManifest,
        x: i32,
        y: i32,
        terrain: TerrainType,
    ) -> ResolvedTile {
        let coord = Coordinate::new(x, y);
        let variant_seed = variant_seed(x, y);
        let tier = self.registry.tier(terrain);

        let base_kind = self.shape_at(grid, coord, tier);
        let base = TileSelection {
            asset_key: resolve_key(terrain, base_kind, variant_seed, manifest),
            kind: base_kind,
            variant_seed,
        };

        let overlay = self.overlay_terrain(grid, coord, terrain).and_then(|overlay_terrain| {
            let kind = self.shape_at(grid, coord, self.registry.tier(overlay_terrain));
            overlay_selection(overlay_terrain, kind, variant_seed, manifest)
        });

        ResolvedTile { base, overlay }
    }

    /// Resolve a coordinate using the terrain stored in the grid
    ///
    /// Returns `None` for void coordinates, which are never resolved.
    pub fn resolve(
        &self,
        grid: &TerrainGrid,
        manifest: &VariantManifest,
        coord: Coordinate,
    ) -> Option<ResolvedTile> {
        let terrain = grid.get(coord)?;
        Some(self.resolve_cell(grid, manifest, coord.x, coord.y, terrain))
    }

    /// Resolve every present cell, ordered by `(y, x)`
    pub fn resolve_grid(
        &self,
        grid: &TerrainGrid,
        manifest: &VariantManifest,
    ) -> Vec<(Coordinate, ResolvedTile)> {
        let mut tiles: Vec<_> = grid
            .iter()
            .map(|(c, terrain)| (c, self.resolve_cell(grid, manifest, c.x, c.y, terrain)))
            .collect();
        tiles.sort_by_key(|(c, _)| (c.y, c.x));
        tracing::debug!(cells = tiles.len(), "resolved grid");
        tiles
    }

    /// [`resolve_grid`](Self::resolve_grid) on the rayon thread pool
    ///
    /// Output is identical to the sequential version.
    pub fn par_resolve_grid(
        &self,
        grid: &TerrainGrid,
        manifest: &VariantManifest,
    ) -> Vec<(Coordinate, ResolvedTile)> {
        let cells: Vec<(Coordinate, TerrainType)> = grid.iter().collect();
        let mut tiles: Vec<_> = cells
            .into_par_iter()
            .map(|(c, terrain)| (c, self.resolve_cell(grid, manifest, c.x, c.y, terrain)))
            .collect();
        tiles.par_sort_unstable_by_key(|(c, _)| (c.y, c.x));
        tracing::debug!(cells = tiles.len(), "resolved grid in parallel");
        tiles
    }

    /// Cardinal mask of neighbors at or above `min_tier`
    pub fn connectivity_mask(&self, grid: &TerrainGrid, coord: Coordinate, min_tier: u32) -> u8 {
        cardinal_mask(coord, |c| self.connects(grid, c, min_tier))
    }

    /// Dominant higher-tier neighbor, if any
    ///
    /// Scans N, E, S, W and keeps the first neighbor whose tier beats both the
    /// cell's own tier and every neighbor seen before it.
    pub fn overlay_terrain(
        &self,
        grid: &TerrainGrid,
        coord: Coordinate,
        terrain: TerrainType,
    ) -> Option<TerrainType> {
        let mut best = None;
        let mut floor = self.registry.tier(terrain);

        for direction in Direction::CARDINALS {
            let Some(neighbor) = grid.neighbor(coord, direction) else {
                continue;
            };
            let tier = self.registry.tier(neighbor);
            if tier > floor {
                best = Some(neighbor);
                floor = tier;
            }
        }

        best
    }

    /// Classify a cell against a tier threshold
    ///
    /// Only a diagonal holding lower-tier terrain counts as a notch for the
    /// inner corner override; a void diagonal carries no information.
    fn shape_at(&self, grid: &TerrainGrid, coord: Coordinate, min_tier: u32) -> TileKind {
        let mask = self.connectivity_mask(grid, coord, min_tier);
        let diagonals = diagonal_mask(coord, |c| {
            grid.get(c)
                .map_or(true, |t| self.registry.tier(t) >= min_tier)
        });
        classify(mask, diagonals)
    }

    fn connects(&self, grid: &TerrainGrid, coord: Coordinate, min_tier: u32) -> bool {
        grid.get(coord)
            .is_some_and(|t| self.registry.tier(t) >= min_tier)
    }
}
