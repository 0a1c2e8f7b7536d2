//! Batched ghost-proximity detection.
//!
//! For every grid of a batch the detector locates the agent, pads the
//! grid with wall cells, evaluates the [`ProbePlan`] for the configured
//! radius around the agent, and returns which directions have a ghost
//! in reach.

use crate::config::DetectorConfig;
use crate::error::DetectError;
use crate::locate::{locate_centers, locate_unique};
use crate::padding::PaddedGrid;
use crate::plan::ProbePlan;
use crate::radius::Radius;
use pacsense_core::{Color, DirectionSet, GridBatch, GridView};
use tracing::{debug, trace};

/// Output columns per grid: `[up, down, left, right]`.
pub const RESULT_WIDTH: usize = 4;

/// A reusable detector for one colour pair and radius.
///
/// # Examples
///
/// ```
/// use pacsense_core::{Direction, GridBatch};
/// use pacsense_obs::{DetectorConfig, ProximityDetector, Radius};
///
/// const AGENT: i32 = 3;
/// const GHOST: i32 = 4;
/// let grids = GridBatch::single(vec![
///     vec![0, GHOST, 0],
///     vec![0, AGENT, 0],
///     vec![0, 0, 0],
/// ])
/// .unwrap();
///
/// let detector = ProximityDetector::new(DetectorConfig::new(AGENT, GHOST, Radius::One)).unwrap();
/// let rows = detector.detect_batch(&grids).unwrap();
/// assert!(rows[0].contains(Direction::Up));
/// assert_eq!(rows[0].to_f32(), [1.0, 0.0, 0.0, 0.0]);
/// ```
#[derive(Clone, Debug)]
pub struct ProximityDetector {
    config: DetectorConfig,
    plan: ProbePlan,
}

impl ProximityDetector {
    /// Validate `config` and compile its offset plan.
    pub fn new(config: DetectorConfig) -> Result<Self, DetectError> {
        config.validate()?;
        Ok(Self {
            plan: ProbePlan::compile(config.radius),
            config,
        })
    }

    /// The configuration.
    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// The compiled offset plan.
    pub fn plan(&self) -> &ProbePlan {
        &self.plan
    }

    /// Detect around the agent of a single grid.
    pub fn detect_grid(&self, grid: &GridView<'_>) -> Result<DirectionSet, DetectError> {
        let center = locate_unique(grid, self.config.center_color, 0)?;
        let padded = PaddedGrid::new(grid, self.config.radius.padding());
        Ok(self
            .plan
            .evaluate(&padded, padded.to_padded(center), self.config.detect_color))
    }

    /// Detect around the agent of every grid in `batch`.
    ///
    /// All agents are located before any grid is evaluated, so a batch
    /// with one malformed grid fails as a whole.
    pub fn detect_batch(&self, batch: &GridBatch) -> Result<Vec<DirectionSet>, DetectError> {
        let centers = locate_centers(batch, self.config.center_color)?;

        let mut padded = PaddedGrid::new(&batch.grid(0)?, self.config.radius.padding());
        let mut rows = Vec::with_capacity(batch.len());
        for (i, (grid, center)) in batch.iter().zip(centers).enumerate() {
            if i > 0 {
                padded.fill_from(&grid);
            }
            let hits = self
                .plan
                .evaluate(&padded, padded.to_padded(center), self.config.detect_color);
            trace!(grid = i, row = center.0, col = center.1, hits = %hits, "grid evaluated");
            rows.push(hits);
        }

        debug!(
            batch = batch.len(),
            radius = %self.config.radius,
            with_ghost = rows.iter().filter(|r| !r.is_empty()).count(),
            "ghost proximity evaluated"
        );
        Ok(rows)
    }

    /// Detect over `batch` and write 0.0/1.0 rows into a flat
    /// `batch.len() * 4` buffer.
    ///
    /// `out` is left untouched on error.
    pub fn detect_into(&self, batch: &GridBatch, out: &mut [f32]) -> Result<(), DetectError> {
        let expected = batch.len() * RESULT_WIDTH;
        if out.len() != expected {
            return Err(DetectError::OutputSize {
                expected,
                got: out.len(),
            });
        }
        let rows = self.detect_batch(batch)?;
        for (dst, hits) in out.chunks_exact_mut(RESULT_WIDTH).zip(rows) {
            dst.copy_from_slice(&hits.to_f32());
        }
        Ok(())
    }
}

/// One-shot detection: a `(B, 4)` matrix of 0.0/1.0 in
/// `[up, down, left, right]` column order.
///
/// `radius` must be 1, 2 or 3. Fails if any grid does not hold exactly
/// one `center_color` cell, or if the two colours are equal.
pub fn detect(
    grids: &GridBatch,
    center_color: Color,
    detect_color: Color,
    radius: u32,
) -> Result<Vec<[f32; RESULT_WIDTH]>, DetectError> {
    let radius = Radius::try_from(radius)?;
    let detector = ProximityDetector::new(DetectorConfig::new(center_color, detect_color, radius))?;
    Ok(detector
        .detect_batch(grids)?
        .into_iter()
        .map(DirectionSet::to_f32)
        .collect())
}
