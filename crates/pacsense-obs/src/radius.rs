//! Detection radius tiers.

use crate::error::DetectError;
use std::fmt;

/// How far the detector looks around the agent.
///
/// Each tier performs every check of the tiers below it, so results are
/// monotone in the radius.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Radius {
    /// Orthogonal neighbours only.
    One = 1,
    /// Adds distance-2 orthogonals and the diagonals.
    Two = 2,
    /// Adds distance-3 orthogonals and the knight offsets.
    Three = 3,
}

impl Radius {
    /// All tiers in increasing order.
    pub const ALL: [Radius; 3] = [Radius::One, Radius::Two, Radius::Three];

    /// The radius as a cell count.
    pub fn get(self) -> u32 {
        self as u32
    }

    /// Number of wall cells added on each side of a grid before probing
    /// (`radius - 1`).
    pub fn padding(self) -> usize {
        self as usize - 1
    }
}

impl TryFrom<i64> for Radius {
    type Error = DetectError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Radius::One),
            2 => Ok(Radius::Two),
            3 => Ok(Radius::Three),
            _ => Err(DetectError::RadiusOutOfRange { value }),
        }
    }
}

impl TryFrom<i32> for Radius {
    type Error = DetectError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Radius::try_from(i64::from(value))
    }
}

impl TryFrom<u32> for Radius {
    type Error = DetectError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Radius::try_from(i64::from(value))
    }
}

impl From<Radius> for u32 {
    fn from(radius: Radius) -> Self {
        radius.get()
    }
}

impl fmt::Display for Radius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}
