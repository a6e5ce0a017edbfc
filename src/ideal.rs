//! Running estimate of the ideal point.

use crate::{problem::Direction, score::Scores};

/// Best value observed so far per objective, together with the objective
/// vector that first achieved it.
///
/// Starts at the worst value of each objective's direction and is tightened
/// monotonically by [`IdealPoint::observe`]. Objectives are tracked
/// independently, so boundary vectors of different objectives usually come
/// from different points.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct IdealPoint<const N: usize> {
  values: Scores<N>,
  boundaries: [Option<Scores<N>>; N],
  directions: [Direction; N],
}

impl<const N: usize> IdealPoint<N> {
  /// Creates an unobserved ideal point for the given objective directions.
  pub fn new(directions: [Direction; N]) -> Self {
    Self {
      values: directions.map(Direction::worst),
      boundaries: [None; N],
      directions,
    }
  }

  /// Returns the ideal value per objective.
  pub fn values(&self) -> &Scores<N> {
    &self.values
  }

  /// Returns the objective vector that set the ideal value of `objective`,
  /// `None` if nothing has been observed for it yet.
  pub fn boundary(&self, objective: usize) -> Option<&Scores<N>> {
    self.boundaries.get(objective).and_then(Option::as_ref)
  }

  /// Returns the boundary objective vectors of all objectives.
  pub fn boundaries(&self) -> &[Option<Scores<N>>; N] {
    &self.boundaries
  }

  /// Returns the direction of each objective.
  pub fn directions(&self) -> &[Direction; N] {
    &self.directions
  }

  /// Returns `true` once every objective has a finite ideal value.
  pub fn is_complete(&self) -> bool {
    self.values.iter().all(|v| v.is_finite())
  }

  /// Tightens the ideal point with an evaluated objective vector. Only strict
  /// improvements are recorded, so on ties the earliest boundary vector is
  /// kept. Returns `true` if any objective improved.
  pub fn observe(&mut self, objectives: &Scores<N>) -> bool {
    let mut improved = false;
    for i in 0..N {
      if self.directions[i].improves(objectives[i], self.values[i]) {
        self.values[i] = objectives[i];
        self.boundaries[i] = Some(*objectives);
        improved = true;
      }
    }
    improved
  }
}

impl<const N: usize> Default for IdealPoint<N> {
  fn default() -> Self {
    Self::new([Direction::Minimize; N])
  }
}
