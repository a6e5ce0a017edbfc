//! PPS4, a two-objective problem with a curved Pareto set.

use std::f64::consts::PI;

use super::check_len;
use crate::{
  problem::{Decision, EvaluationError, Objective, Problem},
  score::Scores,
};

/// PPS4 with `n` decisions. The first decision lies in `[0, 1]`, the rest in
/// `[-1, 1]`. Decisions at odd positions (counting from one) feed the first
/// objective's penalty, the rest feed the second's.
///
/// No reference front is provided, so runs on this problem do not report
/// IGD.
#[derive(Clone, Debug)]
pub struct Pps4 {
  decisions: Vec<Decision>,
  objectives: [Objective; 2],
}

impl Pps4 {
  /// Creates the problem with `n` decisions.
  ///
  /// # Panics
  ///
  /// Panics if `n < 3`, since both objectives need at least one penalty term.
  pub fn new(n: usize) -> Self {
    assert!(n >= 3, "PPS4 needs at least 3 decisions");
    let decisions = std::iter::once(Decision::new("x1", 0.0, 1.0))
      .chain((2..=n).map(|i| Decision::new(format!("x{i}"), -1.0, 1.0)))
      .collect();
    Self {
      decisions,
      objectives: [
        Objective::minimize("f1").with_bounds(0.0, 1000.0),
        Objective::minimize("f2").with_bounds(0.0, 1000.0),
      ],
    }
  }
}

impl Default for Pps4 {
  fn default() -> Self {
    Self::new(30)
  }
}

impl Problem<2> for Pps4 {
  fn decisions(&self) -> &[Decision] {
    &self.decisions
  }

  fn objectives(&self) -> &[Objective; 2] {
    &self.objectives
  }

  fn evaluate(&self, x: &[f64]) -> Result<Scores<2>, EvaluationError> {
    check_len(self.decisions.len(), x.len())?;
    let n = x.len() as f64;
    let angle = 6.0 * PI * x[0];

    let (mut odd, mut odd_count) = (0.0, 0usize);
    let (mut even, mut even_count) = (0.0, 0usize);
    for (j, xj) in x.iter().enumerate().skip(1) {
      let shift = (j + 1) as f64 * PI / n;
      if (j + 1) % 2 == 0 {
        even += (xj - 0.8 * x[0] * (angle + shift).sin()).powi(2);
        even_count += 1;
      } else {
        odd += (xj - 0.8 * x[0] * ((angle + shift) / 3.0).cos()).powi(2);
        odd_count += 1;
      }
    }

    let f1 = x[0] + 2.0 / odd_count as f64 * odd;
    let f2 = 1.0 - x[0].sqrt() + 2.0 / even_count as f64 * even;
    Ok([f1, f2])
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_decisions() {
    let pps = Pps4::default();
    let decisions = pps.decisions();
    assert_eq!(decisions.len(), 30);
    assert_eq!((decisions[0].low, decisions[0].high), (0.0, 1.0));
    assert!(decisions[1..].iter().all(|d| d.low == -1.0 && d.high == 1.0));
    assert!(pps.pareto_front().is_empty());
  }

  #[test]
  fn test_zero_first_decision() {
    // with x1 = 0 both penalty centers are 0
    let pps = Pps4::new(3);
    assert_eq!(pps.evaluate(&[0.0, 0.0, 0.0]).unwrap(), [0.0, 1.0]);
    assert_eq!(pps.evaluate(&[0.0, 0.5, 1.0]).unwrap(), [2.0, 1.5]);
  }

  #[test]
  fn test_on_pareto_set() {
    let pps = Pps4::new(4);
    let x1: f64 = 0.25;
    let n = 4.0;
    let angle = 6.0 * PI * x1;
    let x: Vec<f64> = std::iter::once(x1)
      .chain((1..4).map(|j| {
        let shift = (j + 1) as f64 * PI / n;
        if (j + 1) % 2 == 0 {
          0.8 * x1 * (angle + shift).sin()
        } else {
          0.8 * x1 * ((angle + shift) / 3.0).cos()
        }
      }))
      .collect();
    let [f1, f2] = pps.evaluate(&x).unwrap();
    assert!((f1 - 0.25).abs() < 1e-12);
    assert!((f2 - 0.5).abs() < 1e-12);
  }

  #[test]
  fn test_wrong_decision_count() {
    assert!(Pps4::new(3).evaluate(&[0.0; 4]).is_err());
  }
}
