//! Population members and offspring candidates.

use std::fmt;

use crate::{
  error::{MoeadError, Result},
  problem::Problem,
  score::Scores,
  weights::Weight,
};

/// Identifier of a population member, stable for the whole run.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct PointId(usize);

impl PointId {
  pub(crate) fn new(index: usize) -> Self {
    Self(index)
  }

  /// Returns the creation index of the point.
  pub fn index(self) -> usize {
    self.0
  }
}

impl fmt::Display for PointId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "#{}", self.0)
  }
}

/// A population member annotated with its weight vector and neighborhood.
///
/// `id`, `weight` and `neighbor_ids` are fixed once setup completes. Only
/// `decisions` and `objectives` evolve, when an offspring replaces the point.
#[derive(Clone, PartialEq, Debug)]
pub struct DecompositionPoint<const N: usize> {
  id: PointId,
  decisions: Vec<f64>,
  objectives: Option<Scores<N>>,
  weight: Weight<N>,
  neighbor_ids: Vec<PointId>,
}

impl<const N: usize> DecompositionPoint<N> {
  pub(crate) fn new(
    id: PointId,
    decisions: Vec<f64>,
    weight: Weight<N>,
  ) -> Self {
    Self {
      id,
      decisions,
      objectives: None,
      weight,
      neighbor_ids: Vec::new(),
    }
  }

  /// Returns the point's identifier.
  pub fn id(&self) -> PointId {
    self.id
  }

  /// Returns the current decision vector.
  pub fn decisions(&self) -> &[f64] {
    &self.decisions
  }

  /// Returns the current objective vector, `None` until evaluated.
  pub fn objectives(&self) -> Option<&Scores<N>> {
    self.objectives.as_ref()
  }

  /// Returns the weight vector of the point's subproblem.
  pub fn weight(&self) -> &Weight<N> {
    &self.weight
  }

  /// Returns the ids of the nearest points in weight space, nearest first.
  pub fn neighbor_ids(&self) -> &[PointId] {
    &self.neighbor_ids
  }

  pub(crate) fn evaluate<P: Problem<N>>(
    &mut self,
    problem: &P,
  ) -> Result<Scores<N>> {
    let objectives = problem
      .evaluate(&self.decisions)
      .map_err(MoeadError::Evaluation)?;
    self.objectives = Some(objectives);
    Ok(objectives)
  }

  pub(crate) fn set_neighbors(&mut self, neighbor_ids: Vec<PointId>) {
    self.neighbor_ids = neighbor_ids;
  }

  /// Overwrites genotype and phenotype with the offspring's. Identity, weight
  /// and neighborhood are untouched.
  pub(crate) fn replace_with(&mut self, offspring: &Offspring<N>) {
    self.decisions.clone_from(&offspring.decisions);
    self.objectives = offspring.objectives;
  }
}

/// A transient candidate produced by reproduction. It has no weight vector or
/// neighborhood and never joins the population itself; it can only overwrite
/// the decisions and objectives of existing members.
#[derive(Clone, PartialEq, Debug)]
pub struct Offspring<const N: usize> {
  decisions: Vec<f64>,
  objectives: Option<Scores<N>>,
}

impl<const N: usize> Offspring<N> {
  /// Wraps an unevaluated decision vector.
  pub fn new(decisions: Vec<f64>) -> Self {
    Self {
      decisions,
      objectives: None,
    }
  }

  /// Returns the decision vector.
  pub fn decisions(&self) -> &[f64] {
    &self.decisions
  }

  /// Returns the objective vector, `None` until evaluated.
  pub fn objectives(&self) -> Option<&Scores<N>> {
    self.objectives.as_ref()
  }

  /// Evaluates the offspring against `problem` and stores the result.
  ///
  /// # Errors
  ///
  /// Returns [`MoeadError::Evaluation`] if the problem fails to evaluate it.
  pub fn evaluate<P: Problem<N>>(&mut self, problem: &P) -> Result<Scores<N>> {
    let objectives = problem
      .evaluate(&self.decisions)
      .map_err(MoeadError::Evaluation)?;
    self.objectives = Some(objectives);
    Ok(objectives)
  }
}
