//! Variant manifest
//!
//! Counts of interchangeable art variants per `(terrain, kind)`. The manifest
//! is produced by scanning an asset directory (or written by hand) and is
//! read-only during resolution.
//!
//! JSON layout:
//!
//! ```json
//! { "grass": { "full": 3, "edge_n": 2 }, "dirt": { "full": 1 } }
//! ```

use crate::asset::AssetRef;
use isotile_core::{TerrainType, TileCategory, TileKind};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when loading, saving or scanning a manifest
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown terrain '{0}' in manifest")]
    UnknownTerrain(String),
    #[error("unknown tile kind '{kind}' for terrain '{terrain}'")]
    UnknownKind { terrain: TerrainType, kind: String },
}

type RawManifest = BTreeMap<String, BTreeMap<String, u32>>;

/// Variant counts per terrain and tile kind
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct VariantManifest {
    counts: BTreeMap<TerrainType, BTreeMap<TileKind, u32>>,
}

impl VariantManifest {
    pub fn new() -> Self {
        Self {
            counts: BTreeMap::new(),
        }
    }

    /// Variant count, `0` when the pair is absent
    pub fn count(&self, terrain: TerrainType, kind: TileKind) -> u32 {
        self.get(terrain, kind).unwrap_or(0)
    }

    /// Variant count, `None` when the pair is absent
    pub fn get(&self, terrain: TerrainType, kind: TileKind) -> Option<u32> {
        self.counts.get(&terrain)?.get(&kind).copied()
    }

    pub fn set(&mut self, terrain: TerrainType, kind: TileKind, count: u32) {
        self.counts.entry(terrain).or_default().insert(kind, count);
    }

    /// Terrains that have an entry, even an empty one
    pub fn terrains(&self) -> impl Iterator<Item = TerrainType> + '_ {
        self.counts.keys().copied()
    }

    /// Iterate over every `(terrain, kind, count)` entry
    pub fn iter(&self) -> impl Iterator<Item = (TerrainType, TileKind, u32)> + '_ {
        self.counts
            .iter()
            .flat_map(|(&terrain, kinds)| kinds.iter().map(move |(&kind, &n)| (terrain, kind, n)))
    }

    /// Every asset this manifest advertises, for preloading
    pub fn asset_refs(&self) -> Vec<AssetRef> {
        self.iter()
            .flat_map(|(terrain, kind, n)| (0..n).map(move |v| AssetRef::new(terrain, kind, v)))
            .collect()
    }

    pub fn from_json_str(json: &str) -> Result<Self, ManifestError> {
        let raw: RawManifest = serde_json::from_str(json)?;
        Self::from_raw(raw)
    }

    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let content = std::fs::read_to_string(path)?;
        let manifest = Self::from_json_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            entries = manifest.iter().count(),
            "loaded variant manifest"
        );
        Ok(manifest)
    }

    pub fn to_json_string(&self) -> Result<String, ManifestError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn save(&self, path: &Path) -> Result<(), ManifestError> {
        std::fs::write(path, self.to_json_string()?)?;
        Ok(())
    }

    /// Build a manifest from a tile asset directory
    ///
    /// Expects `root/<terrain>/<category>/<terrain>_<kind>_<variant>.png`.
    /// Counts distinct variant suffixes per kind. Directories and files that
    /// do not follow the layout are skipped with a warning.
    pub fn scan_dir(root: &Path) -> Result<Self, ManifestError> {
        let mut manifest = Self::new();

        let mut terrain_dirs: Vec<_> = std::fs::read_dir(root)?
            .collect::<Result<Vec<_>, _>>()?
            .into_iter()
            .map(|e| e.path())
            .filter(|p| p.is_dir())
            .collect();
        terrain_dirs.sort();

        for terrain_dir in terrain_dirs {
            let Some(name) = terrain_dir.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            let Ok(terrain) = name.parse::<TerrainType>() else {
                tracing::warn!(dir = %terrain_dir.display(), "skipping unknown terrain directory");
                continue;
            };

            let mut variants: BTreeMap<TileKind, BTreeSet<String>> = BTreeMap::new();
            for category in TileCategory::ALL {
                let category_dir = terrain_dir.join(category.as_str());
                if category_dir.is_dir() {
                    scan_category(&category_dir, terrain, &mut variants)?;
                }
            }

            let kinds = manifest.counts.entry(terrain).or_default();
            for (kind, set) in variants {
                kinds.insert(kind, set.len() as u32);
            }
        }

        tracing::debug!(
            root = %root.display(),
            terrains = manifest.counts.len(),
            "scanned tile assets"
        );
        Ok(manifest)
    }

    fn from_raw(raw: RawManifest) -> Result<Self, ManifestError> {
        let mut manifest = Self::new();
        for (terrain_name, kinds) in raw {
            let terrain = terrain_name
                .parse::<TerrainType>()
                .map_err(|_| ManifestError::UnknownTerrain(terrain_name.clone()))?;
            let entry = manifest.counts.entry(terrain).or_default();
            for (kind_name, n) in kinds {
                let kind = kind_name
                    .parse::<TileKind>()
                    .map_err(|_| ManifestError::UnknownKind {
                        terrain,
                        kind: kind_name.clone(),
                    })?;
                entry.insert(kind, n);
            }
        }
        Ok(manifest)
    }
}

/// Collect variant suffixes of every `.png` in one category directory
fn scan_category(
    dir: &Path,
    terrain: TerrainType,
    variants: &mut BTreeMap<TileKind, BTreeSet<String>>,
) -> Result<(), ManifestError> {
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.extension().is_some_and(|ext| ext == "png") {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };

        match parse_asset_stem(stem, terrain) {
            Some((kind, variant)) => {
                variants.entry(kind).or_default().insert(variant.to_string());
            }
            None => {
                tracing::warn!(file = %path.display(), "skipping unrecognized tile asset");
            }
        }
    }
    Ok(())
}

/// Split `grass_edge_n_0` into `(EdgeN, "0")` for terrain `grass`
///
/// The kind may itself contain underscores; the variant is whatever follows
/// the last one.
fn parse_asset_stem(stem: &str, terrain: TerrainType) -> Option<(TileKind, &str)> {
    let rest = stem.strip_prefix(terrain.as_str())?.strip_prefix('_')?;
    let (kind, variant) = rest.rsplit_once('_')?;
    if variant.is_empty() {
        return None;
    }
    Some((kind.parse().ok()?, variant))
}
