//! Sprite sheet cell selection.
//!
//! Sheets are laid out with one row per facing direction and three walk-cycle
//! columns. Column 0 doubles as the standing frame.

use super::facing::Facing;

/// Sheet row for each facing, indexed `[y + 1][x + 1]`.
const ROW_TABLE: [[u32; 3]; 3] = [
    [7, 2, 5], // up-left, up, up-right
    [3, 0, 1], // left, neutral, right
    [6, 0, 4], // down-left, down, down-right
];

/// A cell on a sprite sheet, in cell units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpriteCell {
    /// Walk-cycle frame.
    pub column: u32,
    /// Facing row.
    pub row: u32,
}

/// Row of the sheet showing `facing`.
///
/// `facing` components must lie in `{-1, 0, 1}`.
pub fn row_for(facing: Facing) -> u32 {
    debug_assert!((-1..=1).contains(&facing.x) && (-1..=1).contains(&facing.y));
    ROW_TABLE[(facing.y + 1) as usize][(facing.x + 1) as usize]
}

/// Walk-cycle column for animation phase `anim`.
///
/// Boundaries are inclusive on the upper end: 15 is still column 1, 16 is column 0.
pub fn column_for(anim: u32) -> u32 {
    // 0, 16..=30 and everything past 45 show the standing frame
    match anim {
        1..=15 => 1,
        31..=45 => 2,
        _ => 0,
    }
}

/// Cell for a facing at a given animation phase.
pub fn select_cell(facing: Facing, anim: u32) -> SpriteCell {
    SpriteCell {
        column: column_for(anim),
        row: row_for(facing),
    }
}
