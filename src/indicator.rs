//! Quality indicators for approximations of a Pareto front.

use crate::{neighborhood::euclidean, score::Scores};

/// Inverted generational distance: the mean distance from each reference
/// point to its nearest observed point. Lower is better.
///
/// Returns `NaN` for an empty reference front and infinity when nothing was
/// observed.
pub fn igd<const N: usize>(
  observed: &[Scores<N>],
  reference: &[Scores<N>],
) -> f64 {
  if reference.is_empty() {
    return f64::NAN;
  }
  let total: f64 = reference
    .iter()
    .map(|r| {
      observed
        .iter()
        .map(|o| euclidean(r, o))
        .fold(f64::INFINITY, f64::min)
    })
    .sum();
  total / reference.len() as f64
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_igd_of_reference_is_zero() {
    let front = [[0.0, 1.0], [0.5, 0.5], [1.0, 0.0]];
    assert_eq!(igd(&front, &front), 0.0);
  }

  #[test]
  fn test_igd() {
    let reference = [[0.0, 1.0], [1.0, 0.0]];
    let observed = [[0.0, 2.0]];
    // distances: 1 and sqrt(1 + 4)
    let expected = (1.0 + 5f64.sqrt()) / 2.0;
    assert!((igd(&observed, &reference) - expected).abs() < 1e-12);
  }

  #[test]
  fn test_igd_edge_cases() {
    assert!(igd::<2>(&[[0.0, 0.0]], &[]).is_nan());
    assert_eq!(igd::<2>(&[], &[[0.0, 0.0]]), f64::INFINITY);
  }
}
