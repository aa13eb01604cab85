//! Deterministic bitmask autotiling with tiered terrain overlays
//!
//! This crate turns a sparse grid of terrain cells into per-cell tile
//! selections: a base tile from the cell's own terrain plus at most one
//! overlay tile from the dominant higher-tier neighbor.
//!
//! # Features
//! - Total 4-bit connectivity classification into 20 tile shapes
//! - Inner corner override with a fixed NE, SE, SW, NW priority
//! - Terrain tiers decide which neighbor bleeds into a cell
//! - Coordinate-seeded variant selection with graceful fallback
//! - Variant manifests loaded from JSON or scanned from an asset directory
//!
//! # Example
//!
//! ```rust
//! use isotile_autotile::{AutoTileResolver, TerrainRegistry, VariantManifest};
//! use isotile_core::{Coordinate, TerrainGrid, TerrainType, TileKind};
//!
//! let mut grid = TerrainGrid::new();
//! grid.set(Coordinate::new(0, 0), TerrainType::Grass);
//! grid.set(Coordinate::new(0, -1), TerrainType::Dirt);
//!
//! let mut manifest = VariantManifest::new();
//! manifest.set(TerrainType::Dirt, TileKind::EdgeN, 2);
//!
//! let resolver = AutoTileResolver::new(TerrainRegistry::default());
//! let tile = resolver.resolve_cell(&grid, &manifest, 0, 0, TerrainType::Grass);
//!
//! assert_eq!(tile.base.kind, TileKind::EdgeN);
//! assert_eq!(tile.overlay.unwrap().kind, TileKind::EdgeN);
//! ```

pub mod asset;
pub mod classify;
pub mod manifest;
pub mod registry;
pub mod resolver;

// Re-export main types at crate root
pub use asset::{
    asset_key, asset_path, effective_kind, fallback_full_key, resolve_key, variant_index, AssetRef,
};
pub use classify::{cardinal_mask, classify, classify_cardinal, diagonal_mask, BASE_TABLE, MASK_MAX};
pub use manifest::{ManifestError, VariantManifest};
pub use registry::{RegistryError, TerrainDef, TerrainRegistry};
pub use resolver::{variant_seed, AutoTileResolver, ResolvedTile, TileSelection};

// Re-export isotile_core
pub use isotile_core;
