//! Core data structures for isotile
//!
//! This crate provides the plain data types shared by the autotile engine and
//! its collaborators:
//! - `Coordinate` / `Direction` - integer grid positions and neighbor offsets
//! - `TerrainType` - the closed set of terrains a cell can hold
//! - `TerrainGrid` - sparse map of coordinate to terrain
//! - `TileKind` / `TileCategory` - structural tile shapes, independent of terrain

mod coord;
mod grid;
mod kind;
mod terrain;

pub use coord::{Coordinate, Direction};
pub use grid::{GridCell, TerrainGrid};
pub use kind::{TileCategory, TileKind};
pub use terrain::{ParseTerrainError, TerrainType};
