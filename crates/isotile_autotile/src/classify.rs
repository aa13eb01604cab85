//! 4-bit connectivity classification
//!
//! Maps a cardinal connectivity mask (plus diagonal presence) to a
//! [`TileKind`]. The base table is total over all 16 cardinal masks; an inner
//! corner override is then applied for at most one missing diagonal.

use isotile_core::{Coordinate, Direction, TileKind};

/// Cardinal mask bits
pub mod cardinal {
    pub const N: u8 = 0b0001;
    pub const E: u8 = 0b0010;
    pub const S: u8 = 0b0100;
    pub const W: u8 = 0b1000;
}

/// Diagonal mask bits
pub mod diagonal {
    pub const NE: u8 = 0b0001;
    pub const SE: u8 = 0b0010;
    pub const SW: u8 = 0b0100;
    pub const NW: u8 = 0b1000;
}

/// Largest valid value of either mask
pub const MASK_MAX: u8 = 0b1111;

/// Base shape for every cardinal mask, indexed by the mask itself
pub const BASE_TABLE: [TileKind; 16] = [
    TileKind::Isolated,   // 0000
    TileKind::EdgeN,      // 0001
    TileKind::EdgeE,      // 0010
    TileKind::CornerNe,   // 0011
    TileKind::EdgeS,      // 0100
    TileKind::Vertical,   // 0101
    TileKind::CornerSe,   // 0110
    TileKind::TW,         // 0111
    TileKind::EdgeW,      // 1000
    TileKind::CornerNw,   // 1001
    TileKind::Horizontal, // 1010
    TileKind::TS,         // 1011
    TileKind::CornerSw,   // 1100
    TileKind::TE,         // 1101
    TileKind::TN,         // 1110
    TileKind::Full,       // 1111
];

/// Inner corner checks in priority order: (required cardinals, diagonal, kind)
const INNER_OVERRIDES: [(u8, u8, TileKind); 4] = [
    (cardinal::N | cardinal::E, diagonal::NE, TileKind::InnerNe),
    (cardinal::S | cardinal::E, diagonal::SE, TileKind::InnerSe),
    (cardinal::S | cardinal::W, diagonal::SW, TileKind::InnerSw),
    (cardinal::N | cardinal::W, diagonal::NW, TileKind::InnerNw),
];

/// Classify a cell from its cardinal and diagonal connectivity
///
/// When both cardinals next to a diagonal connect but the diagonal itself
/// does not, the matching `Inner*` kind replaces the base shape. Diagonals are
/// checked NE, SE, SW, NW and only the first match applies.
///
/// # Panics
///
/// Panics if either mask has bits above bit 3. Masks are built from exactly
/// four booleans, so an out-of-range value is a caller bug.
pub fn classify(mask: u8, diagonals: u8) -> TileKind {
    assert!(mask <= MASK_MAX, "cardinal mask {mask:#06b} out of range");
    assert!(diagonals <= MASK_MAX, "diagonal mask {diagonals:#06b} out of range");

    INNER_OVERRIDES
        .iter()
        .find(|(required, diag, _)| mask & required == *required && diagonals & diag == 0)
        .map(|(_, _, kind)| *kind)
        .unwrap_or(BASE_TABLE[mask as usize])
}

/// Classify from the cardinal mask alone, ignoring inner corners
pub fn classify_cardinal(mask: u8) -> TileKind {
    classify(mask, MASK_MAX)
}

/// Build the cardinal mask for a cell
///
/// `connects` is asked once per cardinal neighbor, in N, E, S, W order.
/// A neighbor past the edge of the coordinate range is void and never
/// connects.
pub fn cardinal_mask<F>(origin: Coordinate, connects: F) -> u8
where
    F: FnMut(Coordinate) -> bool,
{
    mask_over(Direction::CARDINALS, origin, false, connects)
}

/// Build the diagonal mask for a cell
///
/// `connects` is asked once per diagonal neighbor, in NE, SE, SW, NW order.
/// A diagonal past the edge of the coordinate range is void, and a void
/// diagonal is never a notch, so its bit is set.
pub fn diagonal_mask<F>(origin: Coordinate, connects: F) -> u8
where
    F: FnMut(Coordinate) -> bool,
{
    mask_over(Direction::DIAGONALS, origin, true, connects)
}

fn mask_over<F>(
    directions: [Direction; 4],
    origin: Coordinate,
    off_grid: bool,
    mut connects: F,
) -> u8
where
    F: FnMut(Coordinate) -> bool,
{
    let mut mask = 0u8;
    for (bit, direction) in directions.into_iter().enumerate() {
        let hit = match origin.neighbor(direction) {
            Some(coord) => connects(coord),
            None => off_grid,
        };
        if hit {
            mask |= 1 << bit;
        }
    }
    mask
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardinal::*;

    #[test]
    fn test_table_is_total() {
        for mask in 0..=MASK_MAX {
            // All diagonals present: no override, base table only
            assert_eq!(classify(mask, MASK_MAX), BASE_TABLE[mask as usize]);
        }
    }

    #[test]
    fn test_base_shapes() {
        assert_eq!(classify_cardinal(0), TileKind::Isolated);
        assert_eq!(classify_cardinal(N), TileKind::EdgeN);
        assert_eq!(classify_cardinal(E | S), TileKind::CornerSe);
        assert_eq!(classify_cardinal(N | S), TileKind::Vertical);
        assert_eq!(classify_cardinal(E | W), TileKind::Horizontal);
        assert_eq!(classify_cardinal(N | E | S), TileKind::TW);
        assert_eq!(classify_cardinal(E | S | W), TileKind::TN);
        assert_eq!(classify_cardinal(N | E | S | W), TileKind::Full);
    }

    #[test]
    fn test_inner_corner_override() {
        let all = N | E | S | W;
        assert_eq!(classify(all, MASK_MAX & !diagonal::NE), TileKind::InnerNe);
        assert_eq!(classify(all, MASK_MAX & !diagonal::SE), TileKind::InnerSe);
        assert_eq!(classify(all, MASK_MAX & !diagonal::SW), TileKind::InnerSw);
        assert_eq!(classify(all, MASK_MAX & !diagonal::NW), TileKind::InnerNw);
    }

    #[test]
    fn test_inner_corner_priority() {
        let all = N | E | S | W;
        // NE beats everything, SE beats SW and NW, etc.
        assert_eq!(classify(all, 0), TileKind::InnerNe);
        assert_eq!(classify(all, diagonal::NE), TileKind::InnerSe);
        assert_eq!(classify(all, diagonal::NE | diagonal::SE), TileKind::InnerSw);
        assert_eq!(
            classify(all, diagonal::NE | diagonal::SE | diagonal::SW),
            TileKind::InnerNw
        );
    }

    #[test]
    fn test_override_needs_both_cardinals() {
        // Only E and S: the NE/SW/NW checks lack a cardinal, SE applies
        assert_eq!(classify(E | S, 0), TileKind::InnerSe);
        // Only N: no diagonal has both its cardinals
        assert_eq!(classify(N, 0), TileKind::EdgeN);
        assert_eq!(classify(N | S, 0), TileKind::Vertical);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_out_of_range_mask_panics() {
        classify(16, 0);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_out_of_range_diagonals_panics() {
        classify(0, 0x10);
    }

    #[test]
    fn test_mask_builders_use_fixed_bit_order() {
        let origin = Coordinate::new(10, 10);
        let mask = cardinal_mask(origin, |c| c == Coordinate::new(10, 9) || c == Coordinate::new(9, 10));
        assert_eq!(mask, N | W);

        let diag = diagonal_mask(origin, |c| c == Coordinate::new(11, 11));
        assert_eq!(diag, diagonal::SE);
    }

    #[test]
    fn test_off_grid_neighbors_are_void() {
        let corner = Coordinate::new(i32::MAX, i32::MIN);
        // Only S and W exist; E and N fall off the coordinate range
        assert_eq!(cardinal_mask(corner, |_| true), S | W);
        // Every diagonal but SW is off grid and counts as set
        let diag = diagonal_mask(corner, |_| false);
        assert_eq!(diag, diagonal::NE | diagonal::SE | diagonal::NW);
    }
}
