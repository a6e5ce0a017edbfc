//! Two-objective ZDT problems with `n` decisions in `[0, 1]`.
//!
//! Both share `g(x) = 1 + 9 * sum(x_2..x_n) / (n - 1)` and `f1(x) = x_1`.
//! The Pareto front is reached when `g(x) = 1`.

use super::check_len;
use crate::{
  problem::{Decision, EvaluationError, Objective, Problem},
  score::Scores,
};

/// Number of points sampled along the analytic Pareto fronts.
const FRONT_SAMPLES: usize = 500;

fn decisions(n: usize) -> Vec<Decision> {
  assert!(n >= 2, "ZDT problems need at least 2 decisions");
  (1..=n).map(|i| Decision::new(format!("x{i}"), 0.0, 1.0)).collect()
}

fn objectives() -> [Objective; 2] {
  [
    Objective::minimize("f1").with_bounds(0.0, 100.0),
    Objective::minimize("f2").with_bounds(0.0, 100.0),
  ]
}

fn g(x: &[f64]) -> f64 {
  1.0 + 9.0 * x[1..].iter().sum::<f64>() / (x.len() - 1) as f64
}

fn front(f2: impl Fn(f64) -> f64) -> Vec<Scores<2>> {
  (0..FRONT_SAMPLES)
    .map(|i| {
      let f1 = i as f64 / (FRONT_SAMPLES - 1) as f64;
      [f1, f2(f1)]
    })
    .collect()
}

/// ZDT1: `f2(x) = g(x) * (1 - sqrt(x_1 / g(x)))`. Convex front.
#[derive(Clone, Debug)]
pub struct Zdt1 {
  decisions: Vec<Decision>,
  objectives: [Objective; 2],
}

impl Zdt1 {
  /// Creates the problem with `n` decisions.
  ///
  /// # Panics
  ///
  /// Panics if `n < 2`.
  pub fn new(n: usize) -> Self {
    Self {
      decisions: decisions(n),
      objectives: objectives(),
    }
  }
}

impl Default for Zdt1 {
  fn default() -> Self {
    Self::new(30)
  }
}

impl Problem<2> for Zdt1 {
  fn decisions(&self) -> &[Decision] {
    &self.decisions
  }

  fn objectives(&self) -> &[Objective; 2] {
    &self.objectives
  }

  fn evaluate(&self, x: &[f64]) -> Result<Scores<2>, EvaluationError> {
    check_len(self.decisions.len(), x.len())?;
    let g = g(x);
    Ok([x[0], g * (1.0 - (x[0] / g).sqrt())])
  }

  fn pareto_front(&self) -> Vec<Scores<2>> {
    front(|f1| 1.0 - f1.sqrt())
  }
}

/// ZDT2: `f2(x) = g(x) * (1 - (x_1 / g(x))^2)`. Concave front.
#[derive(Clone, Debug)]
pub struct Zdt2 {
  decisions: Vec<Decision>,
  objectives: [Objective; 2],
}

impl Zdt2 {
  /// Creates the problem with `n` decisions.
  ///
  /// # Panics
  ///
  /// Panics if `n < 2`.
  pub fn new(n: usize) -> Self {
    Self {
      decisions: decisions(n),
      objectives: objectives(),
    }
  }
}

impl Default for Zdt2 {
  fn default() -> Self {
    Self::new(30)
  }
}

impl Problem<2> for Zdt2 {
  fn decisions(&self) -> &[Decision] {
    &self.decisions
  }

  fn objectives(&self) -> &[Objective; 2] {
    &self.objectives
  }

  fn evaluate(&self, x: &[f64]) -> Result<Scores<2>, EvaluationError> {
    check_len(self.decisions.len(), x.len())?;
    let g = g(x);
    Ok([x[0], g * (1.0 - (x[0] / g).powi(2))])
  }

  fn pareto_front(&self) -> Vec<Scores<2>> {
    front(|f1| 1.0 - f1.powi(2))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_zdt1() {
    let zdt1 = Zdt1::default();
    assert_eq!(zdt1.decisions().len(), 30);
    let mut x = vec![0.0; 30];
    x[0] = 0.25;
    assert_eq!(zdt1.evaluate(&x).unwrap(), [0.25, 0.5]);

    let x = vec![1.0; 30];
    let [f1, f2] = zdt1.evaluate(&x).unwrap();
    assert_eq!(f1, 1.0);
    assert!((f2 - 10.0 * (1.0 - 0.1f64.sqrt())).abs() < 1e-12);
  }

  #[test]
  fn test_zdt2() {
    let zdt2 = Zdt2::new(3);
    assert_eq!(zdt2.evaluate(&[0.5, 0.0, 0.0]).unwrap(), [0.5, 0.75]);
  }

  #[test]
  fn test_wrong_decision_count() {
    assert!(Zdt1::new(4).evaluate(&[0.0; 3]).is_err());
    assert!(Zdt2::new(4).evaluate(&[0.0; 5]).is_err());
  }

  #[test]
  fn test_fronts_lie_on_g_equal_one() {
    let zdt1 = Zdt1::new(5);
    for [f1, f2] in zdt1.pareto_front() {
      let [e1, e2] = zdt1.evaluate(&[f1, 0.0, 0.0, 0.0, 0.0]).unwrap();
      assert!((e1 - f1).abs() < 1e-12 && (e2 - f2).abs() < 1e-12);
    }
    let front = Zdt2::default().pareto_front();
    assert_eq!(front.len(), FRONT_SAMPLES);
    assert_eq!(front[0], [0.0, 1.0]);
    assert_eq!(front[FRONT_SAMPLES - 1], [1.0, 0.0]);
  }
}
