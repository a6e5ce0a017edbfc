//! Abstract optimizer, its lifecycle and the outcome of a run.

pub mod moead;

use std::cmp::Ordering;

use crate::{
  error::Result,
  ideal::IdealPoint,
  point::DecompositionPoint,
  population::Population,
  problem::Direction,
  score::{ParetoDominance, Scores},
};

/// Lifecycle of an optimizer. Phases only move forward:
/// `Uninitialized -> Setup -> Running -> Terminated`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Phase {
  /// Nothing has been generated or evaluated yet.
  #[default]
  Uninitialized,
  /// Weights, neighborhoods and the initial ideal point are being built.
  Setup,
  /// Generations are executing. `generation` is the number of completed
  /// generations.
  Running {
    /// Completed generations.
    generation: usize,
  },
  /// The configured number of generations is exhausted.
  Terminated,
}

/// Represents an abstract optimizer.
pub trait Optimizer<const OBJECTIVE_NUM: usize>: Sized {
  /// Runs the `Optimizer` until the termination condition is met, then
  /// returns the outcome of the run.
  ///
  /// # Errors
  ///
  /// Fails on configuration errors before any generation executes, and on
  /// the first failed evaluation.
  fn optimize(self) -> Result<Outcome<OBJECTIVE_NUM>>;
}

/// Summary of one completed generation.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct GenerationReport<const N: usize> {
  /// One-based index of the generation.
  pub generation: usize,
  /// Number of neighbor replacements made during the generation.
  pub replacements: usize,
  /// IGD of the population against the problem's reference front, if the
  /// problem has one and reporting is enabled.
  pub igd: Option<f64>,
  /// Ideal point values at the end of the generation.
  pub ideal: Scores<N>,
}

/// Final state of a run.
#[derive(Clone, Debug)]
pub struct Outcome<const N: usize> {
  pub(crate) population: Population<N>,
  pub(crate) ideal: IdealPoint<N>,
  pub(crate) history: Vec<GenerationReport<N>>,
}

impl<const N: usize> Outcome<N> {
  /// Returns the final population.
  pub fn population(&self) -> &Population<N> {
    &self.population
  }

  /// Returns the ideal point at the end of the run.
  pub fn ideal(&self) -> &IdealPoint<N> {
    &self.ideal
  }

  /// Returns one report per executed generation, in order.
  pub fn history(&self) -> &[GenerationReport<N>] {
    &self.history
  }

  /// Returns the worst value per objective in the final population.
  pub fn nadir(&self) -> Scores<N> {
    self.population.nadir(self.ideal.directions())
  }

  /// Returns the points of the final population that no other point
  /// dominates. Points sharing identical objectives are all kept.
  pub fn non_dominated(&self) -> Vec<&DecompositionPoint<N>> {
    let directions = self.ideal.directions();
    let evaluated: Vec<_> = self
      .population
      .iter()
      .filter_map(|p| p.objectives().map(|o| (p, o)))
      .collect();
    evaluated
      .iter()
      .filter(|(_, a)| {
        !evaluated
          .iter()
          .any(|(_, b)| dominates(b, a, directions))
      })
      .map(|(p, _)| *p)
      .collect()
  }

  /// Consumes the outcome, returning the final population.
  pub fn into_population(self) -> Population<N> {
    self.population
  }
}

fn dominates<const N: usize>(
  a: &Scores<N>,
  b: &Scores<N>,
  directions: &[Direction; N],
) -> bool {
  a.dominance(b, directions) == Ordering::Less
}
