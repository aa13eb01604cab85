//! Sparse terrain grid

use crate::{Coordinate, Direction, TerrainType};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single serialized grid entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridCell {
    pub x: i32,
    pub y: i32,
    pub terrain: TerrainType,
}

/// Sparse map of coordinate to terrain
///
/// Absent coordinates are void: they hold no terrain and never connect to
/// anything. The grid is owned by the caller and may be mutated between
/// resolutions; readers only ever borrow it.
///
/// Serializes as a list of [`GridCell`]s ordered by `(y, x)`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<GridCell>", into = "Vec<GridCell>")]
pub struct TerrainGrid {
    cells: HashMap<Coordinate, TerrainType>,
}

impl TerrainGrid {
    pub fn new() -> Self {
        Self {
            cells: HashMap::new(),
        }
    }

    /// Build a grid from cells. Later duplicates overwrite earlier ones.
    pub fn from_cells(cells: impl IntoIterator<Item = GridCell>) -> Self {
        Self {
            cells: cells
                .into_iter()
                .map(|c| (Coordinate::new(c.x, c.y), c.terrain))
                .collect(),
        }
    }

    /// Get the terrain at a coordinate, `None` for void
    pub fn get(&self, coord: Coordinate) -> Option<TerrainType> {
        self.cells.get(&coord).copied()
    }

    /// Get the terrain at `(x, y)`
    pub fn get_at(&self, x: i32, y: i32) -> Option<TerrainType> {
        self.get(Coordinate::new(x, y))
    }

    /// Get the terrain one step from `coord` in `direction`
    pub fn neighbor(&self, coord: Coordinate, direction: Direction) -> Option<TerrainType> {
        self.get(coord.neighbor(direction)?)
    }

    /// Set the terrain at a coordinate, returning the previous value
    pub fn set(&mut self, coord: Coordinate, terrain: TerrainType) -> Option<TerrainType> {
        self.cells.insert(coord, terrain)
    }

    /// Clear a coordinate back to void, returning the previous value
    pub fn remove(&mut self, coord: Coordinate) -> Option<TerrainType> {
        self.cells.remove(&coord)
    }

    pub fn contains(&self, coord: Coordinate) -> bool {
        self.cells.contains_key(&coord)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate over present cells in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (Coordinate, TerrainType)> + '_ {
        self.cells.iter().map(|(&c, &t)| (c, t))
    }

    /// All present cells, ordered by `(y, x)`
    pub fn cells(&self) -> Vec<GridCell> {
        let mut cells: Vec<GridCell> = self
            .iter()
            .map(|(c, terrain)| GridCell {
                x: c.x,
                y: c.y,
                terrain,
            })
            .collect();
        cells.sort_by_key(|c| (c.y, c.x));
        cells
    }
}

impl From<Vec<GridCell>> for TerrainGrid {
    fn from(cells: Vec<GridCell>) -> Self {
        Self::from_cells(cells)
    }
}

impl From<TerrainGrid> for Vec<GridCell> {
    fn from(grid: TerrainGrid) -> Self {
        grid.cells()
    }
}

impl FromIterator<(Coordinate, TerrainType)> for TerrainGrid {
    fn from_iter<I: IntoIterator<Item = (Coordinate, TerrainType)>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_cells_are_void() {
        let mut grid = TerrainGrid::new();
        assert!(grid.is_empty());
        assert_eq!(grid.get_at(0, 0), None);

        grid.set(Coordinate::new(0, 0), TerrainType::Grass);
        assert_eq!(grid.get_at(0, 0), Some(TerrainType::Grass));
        assert_eq!(grid.neighbor(Coordinate::new(0, 1), Direction::N), Some(TerrainType::Grass));
        assert_eq!(grid.neighbor(Coordinate::new(0, 0), Direction::N), None);
    }

    #[test]
    fn test_neighbor_does_not_wrap() {
        let mut grid = TerrainGrid::new();
        grid.set(Coordinate::new(i32::MIN, 0), TerrainType::Grass);
        assert_eq!(grid.neighbor(Coordinate::new(i32::MAX, 0), Direction::E), None);
    }

    #[test]
    fn test_set_and_remove_return_previous() {
        let mut grid = TerrainGrid::new();
        let c = Coordinate::new(-4, 2);
        assert_eq!(grid.set(c, TerrainType::Dirt), None);
        assert_eq!(grid.set(c, TerrainType::Sand), Some(TerrainType::Dirt));
        assert_eq!(grid.remove(c), Some(TerrainType::Sand));
        assert!(!grid.contains(c));
    }

    #[test]
    fn test_cells_are_sorted_row_major() {
        let grid: TerrainGrid = [
            (Coordinate::new(1, 1), TerrainType::Grass),
            (Coordinate::new(0, 1), TerrainType::Dirt),
            (Coordinate::new(5, 0), TerrainType::Sand),
        ]
        .into_iter()
        .collect();

        let order: Vec<(i32, i32)> = grid.cells().iter().map(|c| (c.x, c.y)).collect();
        assert_eq!(order, vec![(5, 0), (0, 1), (1, 1)]);
    }

    #[test]
    fn test_serde_as_cell_list() {
        let json = r#"[
            { "x": 0, "y": 0, "terrain": "grass" },
            { "x": 1, "y": 0, "terrain": "cliff" }
        ]"#;
        let grid: TerrainGrid = serde_json::from_str(json).unwrap();
        assert_eq!(grid.len(), 2);
        assert_eq!(grid.get_at(1, 0), Some(TerrainType::Cliff));

        let back = serde_json::to_string(&grid).unwrap();
        let again: TerrainGrid = serde_json::from_str(&back).unwrap();
        assert_eq!(grid, again);
    }
}
