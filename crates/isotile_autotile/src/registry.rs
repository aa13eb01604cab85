//! Terrain metadata registry
//!
//! The registry is an immutable value built once at startup and handed to the
//! resolver. Construction validates it, so a registry that exists is always
//! complete and has a well-defined dominance order.

use isotile_core::TerrainType;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

/// Errors raised while building or loading a [`TerrainRegistry`]
///
/// All of these are configuration errors: they are detected at startup and
/// are not recoverable per cell.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("terrain '{0}' has no registry entry")]
    MissingTerrain(TerrainType),
    #[error("unknown terrain '{0}' in registry")]
    UnknownTerrain(String),
    #[error("terrains '{first}' and '{second}' share tier {tier}")]
    DuplicateTier {
        first: TerrainType,
        second: TerrainType,
        tier: u32,
    },
    #[error("blocking terrain '{blocking}' (tier {blocking_tier}) must outrank '{other}' (tier {other_tier})")]
    BlockingTierNotMaximal {
        blocking: TerrainType,
        blocking_tier: u32,
        other: TerrainType,
        other_tier: u32,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Gameplay and dominance attributes of one terrain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerrainDef {
    /// Dominance rank: higher tiers overlay lower tiers at boundaries
    pub tier: u32,
    pub walkable: bool,
    pub blocks_vision: bool,
    pub movement_cost: u32,
}

impl TerrainDef {
    /// Blocking terrain (e.g. cliff) cannot be walked and hides what is behind it
    pub fn is_blocking(&self) -> bool {
        !self.walkable && self.blocks_vision
    }
}

/// On-disk registry layout: one `[terrain.<name>]` table per terrain
#[derive(Debug, Deserialize)]
struct RegistryFile {
    terrain: BTreeMap<String, TerrainDef>,
}

/// Read-only table of [`TerrainDef`] for every [`TerrainType`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerrainRegistry {
    defs: [TerrainDef; TerrainType::ALL.len()],
}

impl TerrainRegistry {
    /// Build a registry from per-terrain definitions
    ///
    /// Every terrain must be present, non-blocking terrains must have
    /// pairwise distinct tiers, and blocking terrains must outrank every
    /// non-blocking one.
    pub fn new(defs: &BTreeMap<TerrainType, TerrainDef>) -> Result<Self, RegistryError> {
        if let Some(missing) = TerrainType::ALL.into_iter().find(|t| !defs.contains_key(t)) {
            return Err(RegistryError::MissingTerrain(missing));
        }

        let registry = Self {
            defs: TerrainType::ALL.map(|t| defs[&t]),
        };
        registry.validate()?;
        Ok(registry)
    }

    /// Parse and validate a TOML registry
    ///
    /// ```toml
    /// [terrain.grass]
    /// tier = 0
    /// walkable = true
    /// blocks_vision = false
    /// movement_cost = 1
    /// ```
    pub fn from_toml_str(content: &str) -> Result<Self, RegistryError> {
        let file: RegistryFile = toml::from_str(content)?;

        let mut defs = BTreeMap::new();
        for (name, def) in file.terrain {
            let terrain = name
                .parse::<TerrainType>()
                .map_err(|_| RegistryError::UnknownTerrain(name.clone()))?;
            defs.insert(terrain, def);
        }

        Self::new(&defs)
    }

    /// Load a registry from a TOML file
    pub fn load(path: &Path) -> Result<Self, RegistryError> {
        let content = std::fs::read_to_string(path)?;
        let registry = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded terrain registry");
        Ok(registry)
    }

    pub fn def(&self, terrain: TerrainType) -> &TerrainDef {
        &self.defs[terrain.index()]
    }

    pub fn tier(&self, terrain: TerrainType) -> u32 {
        self.defs[terrain.index()].tier
    }

    pub fn iter(&self) -> impl Iterator<Item = (TerrainType, &TerrainDef)> {
        TerrainType::ALL.into_iter().map(move |t| (t, self.def(t)))
    }

    fn validate(&self) -> Result<(), RegistryError> {
        let (blockers, open): (Vec<_>, Vec<_>) = self.iter().partition(|(_, d)| d.is_blocking());

        for (i, (first, a)) in open.iter().enumerate() {
            if let Some((second, _)) = open[i + 1..].iter().find(|(_, b)| b.tier == a.tier) {
                return Err(RegistryError::DuplicateTier {
                    first: *first,
                    second: *second,
                    tier: a.tier,
                });
            }
        }

        for (blocking, b) in &blockers {
            if let Some((other, o)) = open.iter().find(|(_, o)| o.tier >= b.tier) {
                return Err(RegistryError::BlockingTierNotMaximal {
                    blocking: *blocking,
                    blocking_tier: b.tier,
                    other: *other,
                    other_tier: o.tier,
                });
            }
        }

        Ok(())
    }

    const fn builtin_def(terrain: TerrainType) -> TerrainDef {
        match terrain {
            TerrainType::Grass => TerrainDef {
                tier: 0,
                walkable: true,
                blocks_vision: false,
                movement_cost: 1,
            },
            TerrainType::Dirt => TerrainDef {
                tier: 1,
                walkable: true,
                blocks_vision: false,
                movement_cost: 1,
            },
            TerrainType::Sand => TerrainDef {
                tier: 2,
                walkable: true,
                blocks_vision: false,
                movement_cost: 2,
            },
            TerrainType::Cliff => TerrainDef {
                tier: 99,
                walkable: false,
                blocks_vision: true,
                movement_cost: 999,
            },
        }
    }
}

impl Default for TerrainRegistry {
    /// Built-in table: grass 0, dirt 1, sand 2, cliff 99
    fn default() -> Self {
        Self {
            defs: TerrainType::ALL.map(Self::builtin_def),
        }
    }
}
