//! Weight vector generation over the objective simplex.
//!
//! Each population member of a decomposition-based algorithm owns one weight
//! vector which defines its scalar subproblem. Weight vectors are generated
//! with the structured Das-Dennis lattice when the objective count has a
//! known division scheme that yields exactly the requested number of vectors,
//! and are sampled uniformly at random otherwise.

use std::collections::BTreeMap;

use rand::{seq::SliceRandom, Rng, RngCore};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{MoeadError, Result};

/// A weight vector: `N` non-negative components summing to `1`.
pub type Weight<const N: usize> = [f64; N];

/// Division scheme of a two-layer Das-Dennis lattice.
///
/// The outer layer divides each simplex edge into `outer` parts. If `inner`
/// is not zero, a second lattice with `inner` divisions is shrunk halfway
/// towards the simplex centroid and appended, which keeps the vector count
/// manageable for many objectives while still covering the interior.
#[derive(
  Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize,
)]
pub struct Divisions {
  /// Divisions of the boundary layer.
  pub outer: usize,
  /// Divisions of the inner layer, `0` for none.
  #[serde(default)]
  pub inner: usize,
}

impl Divisions {
  /// Creates a division scheme.
  pub const fn new(outer: usize, inner: usize) -> Self {
    Self { outer, inner }
  }

  /// Number of lattice points of both layers for `m` objectives. This is
  /// an upper bound on what [`cover`] yields, since inner points that
  /// coincide with outer ones are dropped.
  pub fn count(&self, m: usize) -> usize {
    let layer = |p: usize| {
      if p == 0 || m == 0 {
        0
      } else {
        combinations(p + m - 1, m - 1)
      }
    };
    layer(self.outer) + layer(self.inner)
  }
}

/// Generates weight vectors for a population.
///
/// Holds a table of structured division schemes keyed by objective count.
/// The default table follows the reference-point layouts commonly used for
/// the DTLZ suites.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct WeightVectorGenerator {
  schemes: BTreeMap<usize, Divisions>,
}

impl Default for WeightVectorGenerator {
  fn default() -> Self {
    Self {
      schemes: BTreeMap::from([
        (2, Divisions::new(99, 0)),
        (3, Divisions::new(12, 0)),
        (5, Divisions::new(6, 0)),
        (8, Divisions::new(3, 2)),
        (10, Divisions::new(3, 2)),
        (15, Divisions::new(2, 1)),
      ]),
    }
  }
}

impl WeightVectorGenerator {
  /// A generator without structured schemes, it always samples randomly.
  pub fn random() -> Self {
    Self {
      schemes: BTreeMap::new(),
    }
  }

  /// Sets the division scheme used for `objective_num` objectives.
  pub fn with_divisions(
    mut self,
    objective_num: usize,
    divisions: Divisions,
  ) -> Self {
    self.schemes.insert(objective_num, divisions);
    self
  }

  /// Returns the division scheme known for `objective_num` objectives.
  pub fn divisions(&self, objective_num: usize) -> Option<Divisions> {
    self.schemes.get(&objective_num).copied()
  }

  /// Returns exactly `n` shuffled weight vectors.
  ///
  /// # Errors
  ///
  /// Returns [`MoeadError::WeightCountMismatch`] if the number of produced
  /// vectors differs from `n`.
  pub fn generate<const N: usize>(
    &self,
    n: usize,
    rng: &mut dyn RngCore,
  ) -> Result<Vec<Weight<N>>> {
    let structured = self
      .divisions(N)
      .filter(|divisions| divisions.count(N) >= n)
      .map(cover::<N>)
      .filter(|weights| weights.len() == n);

    let mut weights = match structured {
      Some(weights) => {
        debug!(objectives = N, count = n, "using structured weight vectors");
        weights
      }
      None => {
        warn!(
          objectives = N,
          count = n,
          scheme = ?self.divisions(N),
          "no matching structured weight scheme, sampling randomly"
        );
        random_weights::<N>(n, rng)
      }
    };

    if weights.len() != n {
      return Err(MoeadError::WeightCountMismatch {
        expected: n,
        actual: weights.len(),
      });
    }

    weights.shuffle(rng);
    Ok(weights)
  }
}

/// Generates the Das-Dennis lattice with `divisions` divisions: every vector
/// whose components are multiples of `1 / divisions` and sum to `1`.
pub fn das_dennis<const N: usize>(divisions: usize) -> Vec<Weight<N>> {
  let mut weights = Vec::new();
  if N == 0 || divisions == 0 {
    return weights;
  }
  let mut current = [0.0; N];
  das_dennis_layer(divisions, 0, divisions, &mut current, &mut weights);
  weights
}

fn das_dennis_layer<const N: usize>(
  divisions: usize,
  depth: usize,
  remaining: usize,
  current: &mut Weight<N>,
  weights: &mut Vec<Weight<N>>,
) {
  if depth == N - 1 {
    current[depth] = remaining as f64 / divisions as f64;
    weights.push(*current);
    return;
  }
  for i in 0..=remaining {
    current[depth] = i as f64 / divisions as f64;
    das_dennis_layer(divisions, depth + 1, remaining - i, current, weights);
  }
}

/// Generates the two-layer lattice described by `divisions`.
///
/// # Note
///
/// Inner points that land on an outer point are dropped, so every vector
/// is unique. With two objectives, `Divisions::new(4, 2)` yields only the
/// five outer vectors.
pub fn cover<const N: usize>(divisions: Divisions) -> Vec<Weight<N>> {
  let outer = das_dennis::<N>(divisions.outer);
  let centroid = 1.0 / N as f64;
  let inner: Vec<_> = das_dennis::<N>(divisions.inner)
    .into_iter()
    .map(|w| w.map(|wi| (wi + centroid) / 2.0))
    .filter(|w| !outer.iter().any(|o| coincide(o, w)))
    .collect();
  let mut weights = outer;
  weights.extend(inner);
  weights
}

fn coincide<const N: usize>(a: &Weight<N>, b: &Weight<N>) -> bool {
  a.iter().zip(b).all(|(x, y)| (x - y).abs() < 1e-12)
}

/// Samples `n` weight vectors at random: `N` positive values normalized by
/// their sum.
pub fn random_weights<const N: usize>(
  n: usize,
  rng: &mut dyn RngCore,
) -> Vec<Weight<N>> {
  (0..n)
    .map(|_| {
      // `1 - [0, 1)` keeps every draw positive so the sum never vanishes
      let raw: Weight<N> = std::array::from_fn(|_| 1.0 - rng.gen::<f64>());
      let total: f64 = raw.iter().sum();
      raw.map(|wi| wi / total)
    })
    .collect()
}

fn combinations(n: usize, k: usize) -> usize {
  if k > n {
    return 0;
  }
  let k = k.min(n - k);
  (0..k).fold(1usize, |acc, i| acc.saturating_mul(n - i) / (i + 1))
}
