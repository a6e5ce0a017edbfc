//! Fixed-size population of decomposition points keyed by id.

use std::{
  collections::BTreeMap,
  ops::{Index, IndexMut},
};

use crate::{
  point::{DecompositionPoint, PointId},
  problem::Direction,
  score::Scores,
  weights::Weight,
};

/// A mapping from point id to point. Keys are assigned at creation and no
/// points are added or removed afterwards. Iteration follows id order, which
/// keeps seeded runs reproducible.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Population<const N: usize> {
  points: BTreeMap<PointId, DecompositionPoint<N>>,
}

impl<const N: usize> Population<N> {
  /// Pairs each decision vector with a weight vector, in order. Extra entries
  /// of the longer sequence are ignored.
  pub(crate) fn new(decisions: Vec<Vec<f64>>, weights: Vec<Weight<N>>) -> Self {
    let points = decisions
      .into_iter()
      .zip(weights)
      .enumerate()
      .map(|(index, (decisions, weight))| {
        let id = PointId::new(index);
        (id, DecompositionPoint::new(id, decisions, weight))
      })
      .collect();
    Self { points }
  }

  /// Returns the number of points.
  pub fn len(&self) -> usize {
    self.points.len()
  }

  /// Returns `true` if there are no points.
  pub fn is_empty(&self) -> bool {
    self.points.is_empty()
  }

  /// Returns the point with the given id.
  pub fn get(&self, id: PointId) -> Option<&DecompositionPoint<N>> {
    self.points.get(&id)
  }

  /// Iterates over point ids in ascending order.
  pub fn ids(&self) -> impl Iterator<Item = PointId> + '_ {
    self.points.keys().copied()
  }

  /// Iterates over points in id order.
  pub fn iter(&self) -> impl Iterator<Item = &DecompositionPoint<N>> {
    self.points.values()
  }

  pub(crate) fn iter_mut(
    &mut self,
  ) -> impl Iterator<Item = &mut DecompositionPoint<N>> {
    self.points.values_mut()
  }

  /// Collects the objective vectors of all evaluated points.
  pub fn objectives(&self) -> Vec<Scores<N>> {
    self.iter().filter_map(|p| p.objectives().copied()).collect()
  }

  /// Returns the worst value observed per objective among evaluated points.
  /// Objectives with no evaluated point hold the best possible value of
  /// their direction.
  pub fn nadir(&self, directions: &[Direction; N]) -> Scores<N> {
    let mut nadir = directions.map(|d| -d.worst());
    for objectives in self.iter().filter_map(|p| p.objectives()) {
      for ((worst, value), direction) in
        nadir.iter_mut().zip(objectives).zip(directions)
      {
        if direction.improves(*worst, *value) {
          *worst = *value;
        }
      }
    }
    nadir
  }
}

impl<const N: usize> Index<PointId> for Population<N> {
  type Output = DecompositionPoint<N>;

  /// # Panics
  ///
  /// Panics if no point has the given id.
  fn index(&self, id: PointId) -> &Self::Output {
    &self.points[&id]
  }
}

impl<const N: usize> IndexMut<PointId> for Population<N> {
  fn index_mut(&mut self, id: PointId) -> &mut Self::Output {
    self
      .points
      .get_mut(&id)
      .unwrap_or_else(|| panic!("no point with id {id}"))
  }
}

impl<const N: usize> IntoIterator for Population<N> {
  type Item = DecompositionPoint<N>;
  type IntoIter =
    std::collections::btree_map::IntoValues<PointId, DecompositionPoint<N>>;

  fn into_iter(self) -> Self::IntoIter {
    self.points.into_values()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{
    point::Offspring,
    problem::{Decision, EvaluationError, Objective, Problem},
  };

  struct Identity {
    decisions: Vec<Decision>,
    objectives: [Objective; 2],
  }

  impl Problem<2> for Identity {
    fn decisions(&self) -> &[Decision] {
      &self.decisions
    }

    fn objectives(&self) -> &[Objective; 2] {
      &self.objectives
    }

    fn evaluate(&self, x: &[f64]) -> Result<Scores<2>, EvaluationError> {
      Ok([x[0], x[1]])
    }
  }

  fn identity(objectives: [Objective; 2]) -> Identity {
    Identity {
      decisions: vec![Decision::new("x", -10.0, 10.0); 2],
      objectives,
    }
  }

  fn population() -> Population<2> {
    Population::new(
      vec![vec![1.0, 4.0], vec![2.0, 3.0], vec![3.0, 1.0]],
      vec![[0.0, 1.0], [0.5, 0.5], [1.0, 0.0]],
    )
  }

  #[test]
  fn test_ids_are_stable() {
    let population = population();
    assert_eq!(population.len(), 3);
    let ids: Vec<_> = population.ids().collect();
    assert_eq!(ids, vec![PointId::new(0), PointId::new(1), PointId::new(2)]);
    assert_eq!(population[PointId::new(1)].weight(), &[0.5, 0.5]);
    assert!(population.get(PointId::new(7)).is_none());
  }

  #[test]
  fn test_objectives_skip_unevaluated() {
    let mut population = population();
    let problem =
      identity([Objective::minimize("a"), Objective::minimize("b")]);
    population[PointId::new(2)].evaluate(&problem).unwrap();
    assert_eq!(population.objectives(), vec![[3.0, 1.0]]);
  }

  #[test]
  fn test_nadir() {
    let mut population = population();
    let problem =
      identity([Objective::minimize("a"), Objective::maximize("b")]);
    for point in population.iter_mut() {
      point.evaluate(&problem).unwrap();
    }
    assert_eq!(population.nadir(&problem.directions()), [3.0, 1.0]);

    let mut offspring = Offspring::new(vec![9.0, -2.0]);
    offspring.evaluate(&problem).unwrap();
    population[PointId::new(0)].replace_with(&offspring);
    assert_eq!(population.nadir(&problem.directions()), [9.0, -2.0]);
  }

  #[test]
  fn test_nadir_of_unevaluated_population() {
    let population = population();
    let directions = [Direction::Minimize, Direction::Maximize];
    assert_eq!(
      population.nadir(&directions),
      [f64::NEG_INFINITY, f64::INFINITY]
    );
  }
}
