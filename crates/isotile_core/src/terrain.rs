//! Terrain types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of terrains a grid cell can hold
///
/// Gameplay attributes and dominance tiers live in the autotile crate's
/// `TerrainRegistry`; this type is only the identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TerrainType {
    Grass,
    Dirt,
    Sand,
    Cliff,
}

impl TerrainType {
    /// Every terrain, in declaration order
    pub const ALL: [TerrainType; 4] = [
        TerrainType::Grass,
        TerrainType::Dirt,
        TerrainType::Sand,
        TerrainType::Cliff,
    ];

    /// Name used in asset keys, directories and config files
    pub const fn as_str(self) -> &'static str {
        match self {
            TerrainType::Grass => "grass",
            TerrainType::Dirt => "dirt",
            TerrainType::Sand => "sand",
            TerrainType::Cliff => "cliff",
        }
    }

    /// Dense index into per-terrain tables
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for TerrainType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name a known terrain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTerrainError(pub String);

impl fmt::Display for ParseTerrainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown terrain '{}'", self.0)
    }
}

impl std::error::Error for ParseTerrainError {}

impl FromStr for TerrainType {
    type Err = ParseTerrainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TerrainType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ParseTerrainError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for terrain in TerrainType::ALL {
            assert_eq!(terrain.as_str().parse::<TerrainType>(), Ok(terrain));
        }
        assert!("lava".parse::<TerrainType>().is_err());
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&TerrainType::Sand).unwrap();
        assert_eq!(json, "\"sand\"");
        let parsed: TerrainType = serde_json::from_str("\"cliff\"").unwrap();
        assert_eq!(parsed, TerrainType::Cliff);
    }

    #[test]
    fn test_index_is_dense() {
        for (i, terrain) in TerrainType::ALL.iter().enumerate() {
            assert_eq!(terrain.index(), i);
        }
    }
}
