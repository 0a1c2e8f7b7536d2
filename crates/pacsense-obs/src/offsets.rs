//! Static offset tables for each radius tier.
//!
//! An offset is one `(direction, row-delta, col-delta)` check relative to
//! the agent. A ghost found at the offset marks the offset's direction.
//! Diagonal and knight cells are ambiguous between two directions, so
//! they appear once per direction they count towards.

use pacsense_core::Direction::{self, Down, Left, Right, Up};

/// One relative cell check assigned to a direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Probe {
    /// Direction marked when the checked cell holds the detect colour.
    pub direction: Direction,
    /// Row offset from the agent.
    pub dr: i32,
    /// Column offset from the agent.
    pub dc: i32,
}

impl Probe {
    /// Construct an offset.
    pub const fn new(direction: Direction, dr: i32, dc: i32) -> Self {
        Self { direction, dr, dc }
    }

    /// Chebyshev distance of the checked cell from the agent.
    pub fn reach(&self) -> u32 {
        self.dr.unsigned_abs().max(self.dc.unsigned_abs())
    }
}

/// Orthogonal cells at distance `step`, one per direction.
pub fn orthogonal(step: i32) -> [Probe; 4] {
    [
        Probe::new(Up, -step, 0),
        Probe::new(Down, step, 0),
        Probe::new(Left, 0, -step),
        Probe::new(Right, 0, step),
    ]
}

/// The distance-1 diagonals, first assignment: each direction takes the
/// diagonal clockwise of it.
pub const DIAGONAL_CLOCKWISE: [Probe; 4] = [
    Probe::new(Up, -1, 1),
    Probe::new(Down, 1, -1),
    Probe::new(Left, -1, -1),
    Probe::new(Right, 1, 1),
];

/// The distance-1 diagonals, second assignment: each direction takes the
/// diagonal counter-clockwise of it.
pub const DIAGONAL_COUNTER_CLOCKWISE: [Probe; 4] = [
    Probe::new(Up, -1, -1),
    Probe::new(Down, 1, 1),
    Probe::new(Left, 1, -1),
    Probe::new(Right, -1, 1),
];

/// Knight-distance cells, four per direction: the cells two steps along
/// the direction and one to the side, or one along and two to the side.
pub const KNIGHT: [Probe; 16] = [
    Probe::new(Up, -1, -2),
    Probe::new(Up, -2, -1),
    Probe::new(Up, -2, 1),
    Probe::new(Up, -1, 2),
    Probe::new(Down, 1, -2),
    Probe::new(Down, 2, -1),
    Probe::new(Down, 2, 1),
    Probe::new(Down, 1, 2),
    Probe::new(Left, -2, -1),
    Probe::new(Left, -1, -2),
    Probe::new(Left, 1, -2),
    Probe::new(Left, 2, -1),
    Probe::new(Right, -2, 1),
    Probe::new(Right, -1, 2),
    Probe::new(Right, 1, 2),
    Probe::new(Right, 2, 1),
];
