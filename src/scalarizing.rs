//! Scalarizing functions that reduce an objective vector to a single value
//! relative to a weight vector and the ideal point.
//!
//! The value is used only to rank candidates for one subproblem: lower is
//! better. Every strategy measures deviation from the ideal point in the
//! direction of each objective, so maximized objectives need no special
//! treatment from the caller.

use serde::{Deserialize, Serialize};

use crate::{ideal::IdealPoint, score::Scores, weights::Weight};

/// A scalarizing distance.
///
/// Implemented by [`Tchebycheff`], [`Pbi`], [`WeightedSum`], the
/// configurable [`Scalarizer`] and by closures of type
/// `Fn(&Scores<N>, &Weight<N>, &IdealPoint<N>) -> f64`.
///
/// # Examples
/// ```
/// # use moead::{ideal::IdealPoint, scalarizing::Scalarizing};
/// // euclidean distance to the ideal point, weights ignored
/// let s = |f: &[f64; 2], _: &[f64; 2], z: &IdealPoint<2>| {
///   f.iter()
///     .zip(z.values())
///     .map(|(fi, zi)| (fi - zi).powi(2))
///     .sum::<f64>()
///     .sqrt()
/// };
/// let mut z = IdealPoint::<2>::default();
/// z.observe(&[0.0, 0.0]);
/// assert_eq!(s.distance(&[3.0, 4.0], &[0.5, 0.5], &z), 5.0);
/// ```
///
/// **Note that you always can implement this trait instead of using closures.**
pub trait Scalarizing<const N: usize> {
  /// Returns the scalarized value of `objectives` for the subproblem defined
  /// by `weight`. Lower is better.
  fn distance(
    &self,
    objectives: &Scores<N>,
    weight: &Weight<N>,
    ideal: &IdealPoint<N>,
  ) -> f64;
}

impl<const N: usize, F> Scalarizing<N> for F
where
  F: Fn(&Scores<N>, &Weight<N>, &IdealPoint<N>) -> f64,
{
  fn distance(
    &self,
    objectives: &Scores<N>,
    weight: &Weight<N>,
    ideal: &IdealPoint<N>,
  ) -> f64 {
    self(objectives, weight, ideal)
  }
}

/// Deviation of each objective from the ideal value, positive when worse.
fn deviation<const N: usize>(
  objectives: &Scores<N>,
  ideal: &IdealPoint<N>,
) -> Scores<N> {
  let values = ideal.values();
  let directions = ideal.directions();
  std::array::from_fn(|i| directions[i].sign() * (objectives[i] - values[i]))
}

/// Weighted Tchebycheff distance: `max_i(w_i * |f_i - z_i|)`.
///
/// Zero weight components are replaced with `epsilon`, otherwise a zero
/// weighted objective could never influence the maximum. A NaN component
/// makes the whole distance NaN.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct Tchebycheff {
  /// Substitute for zero weight components.
  pub epsilon: f64,
}

impl Tchebycheff {
  /// Default substitute for zero weight components.
  pub const DEFAULT_EPSILON: f64 = 1e-6;
}

impl Default for Tchebycheff {
  fn default() -> Self {
    Self {
      epsilon: Self::DEFAULT_EPSILON,
    }
  }
}

impl<const N: usize> Scalarizing<N> for Tchebycheff {
  fn distance(
    &self,
    objectives: &Scores<N>,
    weight: &Weight<N>,
    ideal: &IdealPoint<N>,
  ) -> f64 {
    deviation(objectives, ideal)
      .iter()
      .zip(weight)
      .map(|(d, w)| {
        let w = if *w == 0.0 { self.epsilon } else { *w };
        w * d.abs()
      })
      .fold(f64::NEG_INFINITY, |max, v| {
        if max.is_nan() || v.is_nan() {
          f64::NAN
        } else {
          max.max(v)
        }
      })
  }
}

/// Penalty boundary intersection: `d1 + theta * d2`, where `d1` is the
/// length of the projection of `f - z` onto the weight direction and `d2` is
/// the perpendicular distance from that direction.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct Pbi {
  /// Penalty applied to the perpendicular distance.
  pub theta: f64,
}

impl Pbi {
  /// Penalty used by the reference MOEA/D experiments.
  pub const DEFAULT_THETA: f64 = 5.0;
}

impl Default for Pbi {
  fn default() -> Self {
    Self {
      theta: Self::DEFAULT_THETA,
    }
  }
}

impl<const N: usize> Scalarizing<N> for Pbi {
  fn distance(
    &self,
    objectives: &Scores<N>,
    weight: &Weight<N>,
    ideal: &IdealPoint<N>,
  ) -> f64 {
    let dev = deviation(objectives, ideal);
    let norm = weight.iter().map(|w| w * w).sum::<f64>().sqrt();
    if norm == 0.0 {
      return dev.iter().map(|d| d * d).sum::<f64>().sqrt();
    }
    let d1 =
      dev.iter().zip(weight).map(|(d, w)| d * w).sum::<f64>().abs() / norm;
    let d2 = dev
      .iter()
      .zip(weight)
      .map(|(d, w)| (d - d1 * w / norm).powi(2))
      .sum::<f64>()
      .sqrt();
    d1 + self.theta * d2
  }
}

/// Weighted sum of deviations from the ideal point. Only reaches convex
/// regions of a Pareto front.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct WeightedSum;

impl<const N: usize> Scalarizing<N> for WeightedSum {
  fn distance(
    &self,
    objectives: &Scores<N>,
    weight: &Weight<N>,
    ideal: &IdealPoint<N>,
  ) -> f64 {
    deviation(objectives, ideal)
      .iter()
      .zip(weight)
      .map(|(d, w)| d * w)
      .sum()
  }
}

/// A scalarizing strategy selected by configuration.
///
/// Deserializes from a tagged map, e.g. `{"kind": "pbi", "theta": 5.0}`.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Scalarizer {
  /// See [`Tchebycheff`].
  Tchebycheff {
    /// Substitute for zero weight components.
    #[serde(default = "default_epsilon")]
    epsilon: f64,
  },
  /// See [`Pbi`].
  Pbi {
    /// Penalty applied to the perpendicular distance.
    #[serde(default = "default_theta")]
    theta: f64,
  },
  /// See [`WeightedSum`].
  WeightedSum,
}

fn default_epsilon() -> f64 {
  Tchebycheff::DEFAULT_EPSILON
}

fn default_theta() -> f64 {
  Pbi::DEFAULT_THETA
}

impl From<Tchebycheff> for Scalarizer {
  fn from(t: Tchebycheff) -> Self {
    Scalarizer::Tchebycheff { epsilon: t.epsilon }
  }
}

impl From<Pbi> for Scalarizer {
  fn from(p: Pbi) -> Self {
    Scalarizer::Pbi { theta: p.theta }
  }
}

impl From<WeightedSum> for Scalarizer {
  fn from(_: WeightedSum) -> Self {
    Scalarizer::WeightedSum
  }
}

impl<const N: usize> Scalarizing<N> for Scalarizer {
  fn distance(
    &self,
    objectives: &Scores<N>,
    weight: &Weight<N>,
    ideal: &IdealPoint<N>,
  ) -> f64 {
    match *self {
      Scalarizer::Tchebycheff { epsilon } => {
        Tchebycheff { epsilon }.distance(objectives, weight, ideal)
      }
      Scalarizer::Pbi { theta } => {
        Pbi { theta }.distance(objectives, weight, ideal)
      }
      Scalarizer::WeightedSum => {
        WeightedSum.distance(objectives, weight, ideal)
      }
    }
  }
}
