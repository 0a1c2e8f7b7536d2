//! Compiled offset plans.
//!
//! A [`ProbePlan`] flattens the offset tables of every tier up to a
//! radius into one list, so evaluating a grid is a single pass with no
//! per-tier branching.

use crate::offsets::{orthogonal, Probe, DIAGONAL_CLOCKWISE, DIAGONAL_COUNTER_CLOCKWISE, KNIGHT};
use crate::padding::PaddedGrid;
use crate::radius::Radius;
use pacsense_core::{Color, DirectionSet};
use smallvec::SmallVec;

/// Largest plan (radius 3): 3 orthogonal rings, 2 diagonal sets, knights.
const MAX_PROBES: usize = 3 * 4 + 2 * 4 + 16;

/// The flattened offset list for one radius.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProbePlan {
    radius: Radius,
    probes: SmallVec<[Probe; MAX_PROBES]>,
}

impl ProbePlan {
    /// Compile the offsets of every tier up to and including `radius`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pacsense_obs::{ProbePlan, Radius};
    ///
    /// assert_eq!(ProbePlan::compile(Radius::One).len(), 4);
    /// assert_eq!(ProbePlan::compile(Radius::Two).len(), 16);
    /// assert_eq!(ProbePlan::compile(Radius::Three).len(), 36);
    /// ```
    pub fn compile(radius: Radius) -> Self {
        let mut probes: SmallVec<[Probe; MAX_PROBES]> = SmallVec::new();
        probes.extend(orthogonal(1));
        if radius >= Radius::Two {
            for step in 2..=radius.get() as i32 {
                probes.extend(orthogonal(step));
            }
            probes.extend(DIAGONAL_CLOCKWISE);
            probes.extend(DIAGONAL_COUNTER_CLOCKWISE);
        }
        if radius == Radius::Three {
            probes.extend(KNIGHT);
        }
        Self { radius, probes }
    }

    /// The radius this plan was compiled for.
    pub fn radius(&self) -> Radius {
        self.radius
    }

    /// The offsets, in tier order.
    pub fn probes(&self) -> &[Probe] {
        &self.probes
    }

    /// Number of offsets.
    pub fn len(&self) -> usize {
        self.probes.len()
    }

    /// Whether the plan has no offsets.
    pub fn is_empty(&self) -> bool {
        self.probes.is_empty()
    }

    /// Largest Chebyshev distance reached.
    pub fn reach(&self) -> u32 {
        self.probes.iter().map(Probe::reach).max().unwrap_or(0)
    }

    /// Evaluate the plan around `center` (in padded space).
    ///
    /// A direction is set when any of its offsets lands on a cell of
    /// `detect_color`. Wall cells never match.
    pub fn evaluate(
        &self,
        grid: &PaddedGrid,
        center: (usize, usize),
        detect_color: Color,
    ) -> DirectionSet {
        let mut hits = DirectionSet::empty();
        for probe in &self.probes {
            if grid.offset(center, probe.dr, probe.dc).is_color(detect_color) {
                hits.insert(probe.direction);
            }
        }
        hits
    }
}
