//! Facing vectors used for sprite selection.
//!
//! A facing vector is independent of velocity: it records which directional
//! inputs were held, and keeps its last value while the leader is idle.

use serde::{Deserialize, Serialize};

/// A 2D direction with each component in `{-1, 0, 1}`.
///
/// Positive `x` points right, positive `y` points down (screen convention).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Facing {
    /// Horizontal component.
    pub x: i8,
    /// Vertical component.
    pub y: i8,
}

impl Facing {
    /// No direction. Renders as the neutral (facing down) row.
    pub const NEUTRAL: Self = Self { x: 0, y: 0 };

    /// Creates a facing vector.
    ///
    /// Components must lie in `{-1, 0, 1}`; this is checked in debug builds only,
    /// since [`crate::game::motion`] can never produce anything else.
    pub fn new(x: i8, y: i8) -> Self {
        debug_assert!((-1..=1).contains(&x), "facing x out of range: {x}");
        debug_assert!((-1..=1).contains(&y), "facing y out of range: {y}");
        Self { x, y }
    }

    /// Returns `true` when both components are zero.
    pub fn is_neutral(self) -> bool {
        self.x == 0 && self.y == 0
    }
}
