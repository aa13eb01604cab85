//! Structural tile shapes
//!
//! A [`TileKind`] describes the local connectivity shape of a cell, independent
//! of which terrain texture is drawn with it. The set is closed: 20 shapes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Structural shape of a tile
///
/// Naming follows connectivity: `EdgeN` connects only to the north,
/// `CornerSe` to east and south, `TW` to everything but the west.
/// `Inner*` kinds are full tiles with a single missing diagonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TileKind {
    Isolated,
    Full,
    EdgeN,
    EdgeE,
    EdgeS,
    EdgeW,
    CornerNe,
    CornerNw,
    CornerSe,
    CornerSw,
    InnerNe,
    InnerNw,
    InnerSe,
    InnerSw,
    TN,
    TE,
    TS,
    TW,
    Vertical,
    Horizontal,
}

impl TileKind {
    pub const ALL: [TileKind; 20] = [
        TileKind::Isolated,
        TileKind::Full,
        TileKind::EdgeN,
        TileKind::EdgeE,
        TileKind::EdgeS,
        TileKind::EdgeW,
        TileKind::CornerNe,
        TileKind::CornerNw,
        TileKind::CornerSe,
        TileKind::CornerSw,
        TileKind::InnerNe,
        TileKind::InnerNw,
        TileKind::InnerSe,
        TileKind::InnerSw,
        TileKind::TN,
        TileKind::TE,
        TileKind::TS,
        TileKind::TW,
        TileKind::Vertical,
        TileKind::Horizontal,
    ];

    /// Name used inside asset keys, e.g. `edge_n`
    pub const fn as_str(self) -> &'static str {
        match self {
            TileKind::Isolated => "isolated",
            TileKind::Full => "full",
            TileKind::EdgeN => "edge_n",
            TileKind::EdgeE => "edge_e",
            TileKind::EdgeS => "edge_s",
            TileKind::EdgeW => "edge_w",
            TileKind::CornerNe => "corner_ne",
            TileKind::CornerNw => "corner_nw",
            TileKind::CornerSe => "corner_se",
            TileKind::CornerSw => "corner_sw",
            TileKind::InnerNe => "inner_ne",
            TileKind::InnerNw => "inner_nw",
            TileKind::InnerSe => "inner_se",
            TileKind::InnerSw => "inner_sw",
            TileKind::TN => "t_n",
            TileKind::TE => "t_e",
            TileKind::TS => "t_s",
            TileKind::TW => "t_w",
            TileKind::Vertical => "vertical",
            TileKind::Horizontal => "horizontal",
        }
    }

    /// Display/storage category, used for asset directory layout
    pub const fn category(self) -> TileCategory {
        match self {
            TileKind::Full => TileCategory::Full,
            TileKind::Isolated => TileCategory::Isolated,
            TileKind::EdgeN | TileKind::EdgeE | TileKind::EdgeS | TileKind::EdgeW => {
                TileCategory::Edge
            }
            TileKind::CornerNe | TileKind::CornerNw | TileKind::CornerSe | TileKind::CornerSw => {
                TileCategory::Corner
            }
            TileKind::InnerNe | TileKind::InnerNw | TileKind::InnerSe | TileKind::InnerSw => {
                TileCategory::Inner
            }
            TileKind::TN | TileKind::TE | TileKind::TS | TileKind::TW => TileCategory::T,
            TileKind::Vertical | TileKind::Horizontal => TileCategory::Straight,
        }
    }
}

impl fmt::Display for TileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TileKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TileKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| format!("unknown tile kind '{s}'"))
    }
}

/// Coarse grouping of tile kinds, matching the asset folder layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TileCategory {
    Full,
    Isolated,
    Edge,
    Corner,
    Inner,
    T,
    Straight,
}

impl TileCategory {
    pub const ALL: [TileCategory; 7] = [
        TileCategory::Full,
        TileCategory::Isolated,
        TileCategory::Edge,
        TileCategory::Corner,
        TileCategory::Inner,
        TileCategory::T,
        TileCategory::Straight,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            TileCategory::Full => "full",
            TileCategory::Isolated => "isolated",
            TileCategory::Edge => "edge",
            TileCategory::Corner => "corner",
            TileCategory::Inner => "inner",
            TileCategory::T => "t",
            TileCategory::Straight => "straight",
        }
    }
}

impl fmt::Display for TileCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
