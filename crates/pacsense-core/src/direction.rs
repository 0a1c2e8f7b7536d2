//! The four detection directions and a compact set of them.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// A cardinal direction around the agent.
///
/// The discriminant is the column of the direction in a detection
/// result row: `[up, down, left, right]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Direction {
    /// Towards row 0 (row - 1).
    Up = 0,
    /// Towards the last row (row + 1).
    Down = 1,
    /// Towards column 0 (col - 1).
    Left = 2,
    /// Towards the last column (col + 1).
    Right = 3,
}

impl Direction {
    /// All directions in output column order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Column index of this direction in a result row.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns the unit `(row_offset, col_offset)` for this direction.
    pub fn offset_2d(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.write_str(name)
    }
}

/// A set of [`Direction`]s, stored as a 4-bit mask.
///
/// This is the per-grid detection result: a direction is in the set
/// when a target was found by any offset assigned to it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct DirectionSet(u8);

impl DirectionSet {
    /// The empty set.
    pub const EMPTY: DirectionSet = DirectionSet(0);
    /// All four directions.
    pub const ALL: DirectionSet = DirectionSet(0b1111);

    /// Create an empty set.
    pub fn empty() -> Self {
        Self::EMPTY
    }

    /// Build a set from 0/1 flags in `[up, down, left, right]` order.
    pub fn from_flags(flags: [bool; 4]) -> Self {
        Direction::ALL
            .into_iter()
            .zip(flags)
            .filter_map(|(d, on)| on.then_some(d))
            .collect()
    }

    /// Add a direction.
    pub fn insert(&mut self, direction: Direction) {
        self.0 |= direction.bit();
    }

    /// Whether `direction` is in the set.
    pub fn contains(self, direction: Direction) -> bool {
        self.0 & direction.bit() != 0
    }

    /// Whether the set is empty.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of directions in the set.
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Whether every direction of `self` is also in `other`.
    pub fn is_subset(self, other: DirectionSet) -> bool {
        self.0 & !other.0 == 0
    }

    /// Iterate the contained directions in column order.
    pub fn iter(self) -> impl Iterator<Item = Direction> {
        Direction::ALL.into_iter().filter(move |&d| self.contains(d))
    }

    /// The set as 0/1 flags in `[up, down, left, right]` order.
    pub fn to_flags(self) -> [u8; 4] {
        Direction::ALL.map(|d| u8::from(self.contains(d)))
    }

    /// The set as a float row of 0.0/1.0, the layout fed to policy networks.
    pub fn to_f32(self) -> [f32; 4] {
        Direction::ALL.map(|d| if self.contains(d) { 1.0 } else { 0.0 })
    }
}

impl BitOr for DirectionSet {
    type Output = DirectionSet;

    fn bitor(self, rhs: DirectionSet) -> DirectionSet {
        DirectionSet(self.0 | rhs.0)
    }
}

impl BitOrAssign for DirectionSet {
    fn bitor_assign(&mut self, rhs: DirectionSet) {
        self.0 |= rhs.0;
    }
}

impl From<Direction> for DirectionSet {
    fn from(direction: Direction) -> Self {
        DirectionSet(direction.bit())
    }
}

impl FromIterator<Direction> for DirectionSet {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        let mut set = DirectionSet::empty();
        for d in iter {
            set.insert(d);
        }
        set
    }
}

impl fmt::Display for DirectionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [u, d, l, r] = self.to_flags();
        write!(f, "[{u},{d},{l},{r}]")
    }
}
