//! Detector configuration.

use crate::error::DetectError;
use crate::radius::Radius;
use pacsense_core::Color;

/// Colours and radius for a [`ProximityDetector`](crate::ProximityDetector).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DetectorConfig {
    /// Colour of the agent's cell; exactly one per grid.
    pub center_color: Color,
    /// Colour of ghost cells.
    pub detect_color: Color,
    /// Detection tier.
    pub radius: Radius,
}

impl DetectorConfig {
    /// Create a configuration.
    pub fn new(center_color: Color, detect_color: Color, radius: Radius) -> Self {
        Self {
            center_color,
            detect_color,
            radius,
        }
    }

    /// Check structural invariants.
    ///
    /// The agent and ghost colours must differ: the agent cell would
    /// otherwise count as a ghost next to itself.
    pub fn validate(&self) -> Result<(), DetectError> {
        if self.center_color == self.detect_color {
            return Err(DetectError::InvalidConfig {
                reason: format!(
                    "center_color and detect_color are both {}",
                    self.center_color
                ),
            });
        }
        Ok(())
    }
}
