//! Asset key resolution
//!
//! Turns a `(terrain, kind, seed)` triple into a concrete asset key of the
//! form `{terrain}_{kind}_{variant}`. Resolution never fails: missing
//! variants are handled by kind substitution and count defaulting. Whether
//! the asset actually exists in storage is the renderer's concern.

use crate::manifest::VariantManifest;
use isotile_core::{TerrainType, TileKind};
use serde::{Deserialize, Serialize};

/// A single loadable asset advertised by a manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetRef {
    pub terrain: TerrainType,
    pub kind: TileKind,
    pub variant: u32,
    /// Texture key, e.g. `grass_edge_n_0`
    pub key: String,
    /// Path relative to the tile asset root, e.g. `grass/edge/grass_edge_n_0.png`
    pub path: String,
}

impl AssetRef {
    pub fn new(terrain: TerrainType, kind: TileKind, variant: u32) -> Self {
        Self {
            terrain,
            kind,
            variant,
            key: asset_key(terrain, kind, variant),
            path: asset_path(terrain, kind, variant),
        }
    }
}

/// Resolve the asset key for a tile selection
///
/// 1. An `Isolated` request with no isolated variants becomes `Full`.
/// 2. The variant count defaults to 1 when absent or zero.
/// 3. The variant is `|seed| mod count`.
pub fn resolve_key(
    terrain: TerrainType,
    kind: TileKind,
    variant_seed: i64,
    manifest: &VariantManifest,
) -> String {
    let kind = effective_kind(terrain, kind, manifest);
    asset_key(terrain, kind, variant_index(terrain, kind, variant_seed, manifest))
}

/// Kind actually drawn for a request, after the isolated-to-full substitution
pub fn effective_kind(terrain: TerrainType, kind: TileKind, manifest: &VariantManifest) -> TileKind {
    if kind == TileKind::Isolated && manifest.count(terrain, TileKind::Isolated) == 0 {
        TileKind::Full
    } else {
        kind
    }
}

/// Variant index chosen for a seed, always below the (defaulted) count
pub fn variant_index(
    terrain: TerrainType,
    kind: TileKind,
    variant_seed: i64,
    manifest: &VariantManifest,
) -> u32 {
    let count = manifest.count(terrain, kind).max(1);
    (variant_seed.unsigned_abs() % u64::from(count)) as u32
}

/// Key for the `Full` variant of a terrain
///
/// Renderers use this to substitute a missing texture. Resolution itself
/// never calls it.
pub fn fallback_full_key(terrain: TerrainType, variant_seed: i64, manifest: &VariantManifest) -> String {
    resolve_key(terrain, TileKind::Full, variant_seed, manifest)
}

pub fn asset_key(terrain: TerrainType, kind: TileKind, variant: u32) -> String {
    format!("{}_{}_{}", terrain.as_str(), kind.as_str(), variant)
}

/// Storage path of an asset: `{terrain}/{category}/{key}.png`
pub fn asset_path(terrain: TerrainType, kind: TileKind, variant: u32) -> String {
    format!(
        "{}/{}/{}.png",
        terrain.as_str(),
        kind.category().as_str(),
        asset_key(terrain, kind, variant)
    )
}
