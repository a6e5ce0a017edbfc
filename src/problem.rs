//! Problem definition consumed by the optimizer: decision bounds, objective
//! directions and the evaluation function.

use std::cmp::Ordering;

use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

use crate::score::Scores;

/// Error returned by [`Problem::evaluate`]. It is propagated unchanged and
/// terminates the run.
pub type EvaluationError = Box<dyn std::error::Error + Send + Sync>;

/// Optimization direction of an objective.
#[derive(
  Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
  /// Lower values are better.
  #[default]
  Minimize,
  /// Higher values are better.
  Maximize,
}

impl Direction {
  /// Returns the worst possible value in this direction, used as the
  /// sentinel of a not yet observed ideal point.
  pub fn worst(self) -> f64 {
    match self {
      Direction::Minimize => f64::INFINITY,
      Direction::Maximize => f64::NEG_INFINITY,
    }
  }

  /// Returns `true` if `candidate` is strictly better than `incumbent`.
  pub fn improves(self, candidate: f64, incumbent: f64) -> bool {
    match self {
      Direction::Minimize => candidate < incumbent,
      Direction::Maximize => candidate > incumbent,
    }
  }

  /// Returns `Less` if `a` is better than `b`, `Greater` if it is worse.
  /// `NaN`s compare as `Equal`.
  pub fn compare(self, a: f64, b: f64) -> Ordering {
    let ord = a.partial_cmp(&b).unwrap_or(Ordering::Equal);
    match self {
      Direction::Minimize => ord,
      Direction::Maximize => ord.reverse(),
    }
  }

  /// `1.0` for minimized objectives, `-1.0` for maximized ones. Multiplying
  /// a difference from the ideal point by it yields a non-negative deviation.
  pub fn sign(self) -> f64 {
    match self {
      Direction::Minimize => 1.0,
      Direction::Maximize => -1.0,
    }
  }
}

/// A bounded real-valued decision variable.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Decision {
  /// Name of the variable.
  pub name: String,
  /// Lower bound, inclusive.
  pub low: f64,
  /// Upper bound, inclusive.
  pub high: f64,
}

impl Decision {
  /// Creates a decision bounded to `[low, high]`.
  ///
  /// # Panics
  ///
  /// Panics if `low > high` or either bound is not finite.
  pub fn new(name: impl Into<String>, low: f64, high: f64) -> Self {
    assert!(
      low.is_finite() && high.is_finite() && low <= high,
      "invalid decision bounds [{low}, {high}]"
    );
    Self {
      name: name.into(),
      low,
      high,
    }
  }

  /// Maps `value` from `[low, high]` onto `[0, 1]`.
  pub fn norm(&self, value: f64) -> f64 {
    if self.high == self.low {
      0.0
    } else {
      (value - self.low) / (self.high - self.low)
    }
  }

  /// Maps `value` from `[0, 1]` back onto `[low, high]`.
  pub fn denorm(&self, value: f64) -> f64 {
    self.low + value * (self.high - self.low)
  }

  /// Clamps `value` into the decision bounds.
  pub fn clamp(&self, value: f64) -> f64 {
    value.clamp(self.low, self.high)
  }

  /// Samples a value uniformly within the bounds.
  pub fn generate(&self, rng: &mut dyn RngCore) -> f64 {
    rng.gen_range(self.low..=self.high)
  }
}

/// An objective of a problem.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Objective {
  /// Name of the objective.
  pub name: String,
  /// Whether the objective is minimized or maximized.
  pub direction: Direction,
  /// Lower display bound.
  pub low: Option<f64>,
  /// Upper display bound.
  pub high: Option<f64>,
}

impl Objective {
  /// Creates a minimized objective.
  pub fn minimize(name: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      direction: Direction::Minimize,
      low: None,
      high: None,
    }
  }

  /// Creates a maximized objective.
  pub fn maximize(name: impl Into<String>) -> Self {
    Self {
      direction: Direction::Maximize,
      ..Self::minimize(name)
    }
  }

  /// Sets display bounds of the objective.
  pub fn with_bounds(mut self, low: f64, high: f64) -> Self {
    self.low = Some(low);
    self.high = Some(high);
    self
  }
}

/// A continuous multi-objective problem with `N` objectives.
///
/// The number of objectives is fixed by the type, the number of decisions is
/// fixed by [`Problem::decisions`] for the lifetime of the problem.
///
/// # Examples
/// ```
/// use moead::problem::*;
/// use moead::score::Scores;
///
/// struct Schaffer {
///   decisions: Vec<Decision>,
///   objectives: [Objective; 2],
/// }
///
/// impl Problem<2> for Schaffer {
///   fn decisions(&self) -> &[Decision] {
///     &self.decisions
///   }
///
///   fn objectives(&self) -> &[Objective; 2] {
///     &self.objectives
///   }
///
///   fn evaluate(&self, x: &[f64]) -> Result<Scores<2>, EvaluationError> {
///     Ok([x[0].powi(2), (x[0] - 2.0).powi(2)])
///   }
/// }
/// ```
pub trait Problem<const N: usize> {
  /// Returns the decision variables in order.
  fn decisions(&self) -> &[Decision];

  /// Returns the objectives in order.
  fn objectives(&self) -> &[Objective; N];

  /// Evaluates a decision vector, returning one value per objective.
  fn evaluate(&self, decisions: &[f64]) -> Result<Scores<N>, EvaluationError>;

  /// Creates `n` random decision vectors within the decision bounds.
  fn populate(&self, n: usize, rng: &mut dyn RngCore) -> Vec<Vec<f64>> {
    (0..n)
      .map(|_| self.decisions().iter().map(|d| d.generate(rng)).collect())
      .collect()
  }

  /// Returns a reference approximation of the Pareto front, used only for
  /// quality reporting. Empty if none is known.
  fn pareto_front(&self) -> Vec<Scores<N>> {
    Vec::new()
  }

  /// Returns the optimization direction of each objective.
  fn directions(&self) -> [Direction; N] {
    self.objectives().each_ref().map(|o| o.direction)
  }
}

impl<P, const N: usize> Problem<N> for &P
where
  P: Problem<N> + ?Sized,
{
  fn decisions(&self) -> &[Decision] {
    (**self).decisions()
  }

  fn objectives(&self) -> &[Objective; N] {
    (**self).objectives()
  }

  fn evaluate(&self, decisions: &[f64]) -> Result<Scores<N>, EvaluationError> {
    (**self).evaluate(decisions)
  }

  fn populate(&self, n: usize, rng: &mut dyn RngCore) -> Vec<Vec<f64>> {
    (**self).populate(n, rng)
  }

  fn pareto_front(&self) -> Vec<Scores<N>> {
    (**self).pareto_front()
  }
}

#[cfg(test)]
mod tests {
  use rand::{rngs::StdRng, SeedableRng};

  use super::*;

  struct Line {
    decisions: Vec<Decision>,
    objectives: [Objective; 2],
  }

  impl Problem<2> for Line {
    fn decisions(&self) -> &[Decision] {
      &self.decisions
    }

    fn objectives(&self) -> &[Objective; 2] {
      &self.objectives
    }

    fn evaluate(&self, x: &[f64]) -> Result<Scores<2>, EvaluationError> {
      Ok([x[0], -x[1]])
    }
  }

  fn line() -> Line {
    Line {
      decisions: vec![
        Decision::new("x", 0.0, 1.0),
        Decision::new("y", -5.0, 5.0),
      ],
      objectives: [Objective::minimize("f1"), Objective::maximize("f2")],
    }
  }

  #[test]
  fn test_direction() {
    assert_eq!(Direction::Minimize.worst(), f64::INFINITY);
    assert_eq!(Direction::Maximize.worst(), f64::NEG_INFINITY);
    assert!(Direction::Minimize.improves(1.0, 2.0));
    assert!(!Direction::Minimize.improves(2.0, 2.0));
    assert!(Direction::Maximize.improves(3.0, 2.0));
    assert!(!Direction::Maximize.improves(2.0, 2.0));
    assert_eq!(Direction::Maximize.compare(3.0, 2.0), Ordering::Less);
    assert_eq!(Direction::Minimize.compare(f64::NAN, 2.0), Ordering::Equal);
  }

  #[test]
  fn test_decision_norm() {
    let d = Decision::new("x", -2.0, 2.0);
    assert_eq!(d.norm(0.0), 0.5);
    assert_eq!(d.denorm(0.25), -1.0);
    assert_eq!(d.clamp(3.0), 2.0);
    assert_eq!(Decision::new("c", 1.0, 1.0).norm(1.0), 0.0);
  }

  #[test]
  #[should_panic]
  fn test_decision_invalid_bounds() {
    Decision::new("x", 1.0, 0.0);
  }

  #[test]
  fn test_populate_within_bounds() {
    let problem = line();
    let mut rng = StdRng::seed_from_u64(7);
    let population = problem.populate(50, &mut rng);
    assert_eq!(population.len(), 50);
    for decisions in &population {
      assert_eq!(decisions.len(), 2);
      for (value, decision) in decisions.iter().zip(problem.decisions()) {
        assert!((decision.low..=decision.high).contains(value));
      }
    }
  }

  #[test]
  fn test_reference_delegates() {
    let problem = line();
    let by_ref = &problem;
    assert_eq!(
      by_ref.directions(),
      [Direction::Minimize, Direction::Maximize]
    );
    assert_eq!(by_ref.evaluate(&[0.5, 2.0]).unwrap(), [0.5, -2.0]);
    assert!(by_ref.pareto_front().is_empty());
  }
}
