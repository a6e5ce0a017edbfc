//! Variation operators: crossover and mutation of real-valued decision
//! vectors.
//!
//! Both operators receive the problem's decisions so they can respect
//! variable bounds, and an explicit random source so runs are reproducible.

use rand::{Rng, RngCore};

use crate::problem::Decision;

/// An operator that recombines two parents into two children.
///
/// # Examples
/// ```
/// # use moead::{problem::Decision, variation::Crossover};
/// # use rand::RngCore;
/// // children are copies of the parents
/// let c = |_: &[Decision], a: &[f64], b: &[f64], _: &mut dyn RngCore| {
///   (a.to_vec(), b.to_vec())
/// };
/// # let mut rng = rand::thread_rng();
/// # assert_eq!(c.crossover(&[], &[1.0], &[2.0], &mut rng).0, vec![1.0]);
/// ```
///
/// **Note that you always can implement this trait instead of using closures.**
pub trait Crossover {
  /// Returns two children of `mom` and `dad`.
  fn crossover(
    &self,
    decisions: &[Decision],
    mom: &[f64],
    dad: &[f64],
    rng: &mut dyn RngCore,
  ) -> (Vec<f64>, Vec<f64>);
}

impl<F> Crossover for F
where
  F: Fn(&[Decision], &[f64], &[f64], &mut dyn RngCore) -> (Vec<f64>, Vec<f64>),
{
  fn crossover(
    &self,
    decisions: &[Decision],
    mom: &[f64],
    dad: &[f64],
    rng: &mut dyn RngCore,
  ) -> (Vec<f64>, Vec<f64>) {
    self(decisions, mom, dad, rng)
  }
}

/// An operator that mutates a decision vector in place.
///
/// # Examples
/// ```
/// # use moead::{problem::Decision, variation::Mutation};
/// # use rand::{Rng, RngCore};
/// // nudges every variable, staying within bounds
/// let m = |ds: &[Decision], x: &mut [f64], rng: &mut dyn RngCore| {
///   for (xi, d) in x.iter_mut().zip(ds) {
///     *xi = d.clamp(*xi + rng.gen_range(-0.1..0.1));
///   }
/// };
/// ```
///
/// **Note that you always can implement this trait instead of using closures.**
pub trait Mutation {
  /// Mutates `solution`.
  fn mutate(
    &self,
    decisions: &[Decision],
    solution: &mut [f64],
    rng: &mut dyn RngCore,
  );
}

impl<F> Mutation for F
where
  F: Fn(&[Decision], &mut [f64], &mut dyn RngCore),
{
  fn mutate(
    &self,
    decisions: &[Decision],
    solution: &mut [f64],
    rng: &mut dyn RngCore,
  ) {
    self(decisions, solution, rng)
  }
}

/// Simulated binary crossover.
///
/// With probability `rate` the parents are recombined variable by variable,
/// otherwise the children are copies of the parents. `distribution_index`
/// controls how close the children stay to their parents: the larger, the
/// closer.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct SimulatedBinaryCrossover {
  /// Probability of recombining a pair of parents.
  pub rate: f64,
  /// Distribution index, `eta_c`.
  pub distribution_index: f64,
}

impl SimulatedBinaryCrossover {
  /// Creates the operator.
  pub fn new(rate: f64, distribution_index: f64) -> Self {
    Self {
      rate,
      distribution_index,
    }
  }
}

impl Default for SimulatedBinaryCrossover {
  fn default() -> Self {
    Self::new(1.0, 30.0)
  }
}

impl Crossover for SimulatedBinaryCrossover {
  fn crossover(
    &self,
    decisions: &[Decision],
    mom: &[f64],
    dad: &[f64],
    rng: &mut dyn RngCore,
  ) -> (Vec<f64>, Vec<f64>) {
    let mut sis = mom.to_vec();
    let mut bro = dad.to_vec();
    if rng.gen::<f64>() > self.rate {
      return (sis, bro);
    }

    let exponent = 1.0 / (self.distribution_index + 1.0);
    for (i, decision) in decisions.iter().enumerate().take(mom.len()) {
      let (a, b) = (mom[i], dad[i]);
      if (a - b).abs() < 1e-14 {
        continue;
      }
      let u = rng.gen::<f64>();
      let beta = if u <= 0.5 {
        (2.0 * u).powf(exponent)
      } else {
        (1.0 / (2.0 * (1.0 - u))).powf(exponent)
      };
      sis[i] = decision.clamp(0.5 * ((1.0 + beta) * a + (1.0 - beta) * b));
      bro[i] = decision.clamp(0.5 * ((1.0 - beta) * a + (1.0 + beta) * b));
    }
    (sis, bro)
  }
}

/// Polynomial mutation. Each variable is mutated with probability `1 / n`.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct PolynomialMutation {
  /// Distribution index, `eta_m`.
  pub distribution_index: f64,
}

impl PolynomialMutation {
  /// Creates the operator.
  pub fn new(distribution_index: f64) -> Self {
    Self { distribution_index }
  }
}

impl Default for PolynomialMutation {
  fn default() -> Self {
    Self::new(20.0)
  }
}

impl Mutation for PolynomialMutation {
  fn mutate(
    &self,
    decisions: &[Decision],
    solution: &mut [f64],
    rng: &mut dyn RngCore,
  ) {
    if solution.is_empty() {
      return;
    }
    let probability = 1.0 / solution.len() as f64;
    let exponent = 1.0 / (self.distribution_index + 1.0);

    for (x, decision) in solution.iter_mut().zip(decisions) {
      if rng.gen::<f64>() >= probability {
        continue;
      }
      let range = decision.high - decision.low;
      if range <= 0.0 {
        continue;
      }
      let delta1 = (*x - decision.low) / range;
      let delta2 = (decision.high - *x) / range;
      let u = rng.gen::<f64>();
      let delta_q = if u < 0.5 {
        let xy = 1.0 - delta1;
        let val = 2.0 * u
          + (1.0 - 2.0 * u) * xy.powf(self.distribution_index + 1.0);
        val.powf(exponent) - 1.0
      } else {
        let xy = 1.0 - delta2;
        let val = 2.0 * (1.0 - u)
          + 2.0 * (u - 0.5) * xy.powf(self.distribution_index + 1.0);
        1.0 - val.powf(exponent)
      };
      *x = decision.clamp(*x + delta_q * range);
    }
  }
}
