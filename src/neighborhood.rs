//! Neighborhood construction in weight space.

use itertools::Itertools;
use tracing::{debug, warn};

use crate::{
  point::{DecompositionPoint, PointId},
  population::Population,
};

/// Euclidean distance between two vectors of equal length.
pub fn euclidean(a: &[f64], b: &[f64]) -> f64 {
  a.iter()
    .zip(b)
    .map(|(x, y)| (x - y).powi(2))
    .sum::<f64>()
    .sqrt()
}

/// Returns the ids of the `size` points whose weight vectors are nearest to
/// `point`'s, nearest first. The point itself is excluded, so at most
/// `population.len() - 1` ids are returned. Equidistant points keep id order.
pub fn nearest_neighbors<const N: usize>(
  population: &Population<N>,
  point: &DecompositionPoint<N>,
  size: usize,
) -> Vec<PointId> {
  population
    .iter()
    .filter(|other| other.id() != point.id())
    .map(|other| (euclidean(point.weight(), other.weight()), other.id()))
    .sorted_by(|(a, _), (b, _)| a.total_cmp(b))
    .take(size)
    .map(|(_, id)| id)
    .collect()
}

/// Assigns every point its `size` nearest neighbors in weight space.
pub(crate) fn assign_neighborhoods<const N: usize>(
  population: &mut Population<N>,
  size: usize,
) {
  let neighborhoods: Vec<_> = population
    .iter()
    .map(|point| nearest_neighbors(population, point, size))
    .collect();

  let effective = size.min(population.len().saturating_sub(1));
  if effective < 2 {
    warn!(
      requested = size,
      effective,
      "neighborhoods hold fewer than two points, parents will coincide"
    );
  }

  for (point, neighbor_ids) in population.iter_mut().zip(neighborhoods) {
    point.set_neighbors(neighbor_ids);
  }
  debug!(size = effective, "neighborhoods assigned");
}

#[cfg(test)]
mod tests {
  use super::*;

  fn with_weights(weights: Vec<[f64; 2]>) -> Population<2> {
    let decisions = vec![vec![0.0]; weights.len()];
    Population::new(decisions, weights)
  }

  fn id(index: usize) -> PointId {
    PointId::new(index)
  }

  #[test]
  fn test_euclidean() {
    assert_eq!(euclidean(&[0.0, 0.0], &[3.0, 4.0]), 5.0);
    assert_eq!(euclidean(&[1.0], &[1.0]), 0.0);
  }

  #[test]
  fn test_nearest_neighbors_sorted_by_distance() {
    let population = with_weights(vec![
      [0.0, 1.0],
      [0.9, 0.1],
      [0.2, 0.8],
      [0.5, 0.5],
      [1.0, 0.0],
    ]);
    let point = &population[id(0)];
    assert_eq!(
      nearest_neighbors(&population, point, 3),
      vec![id(2), id(3), id(1)]
    );
    assert_eq!(nearest_neighbors(&population, point, 10).len(), 4);
  }

  #[test]
  fn test_ties_keep_id_order() {
    let population = with_weights(vec![[0.5, 0.5], [0.0, 1.0], [1.0, 0.0]]);
    assert_eq!(
      nearest_neighbors(&population, &population[id(0)], 2),
      vec![id(1), id(2)]
    );
  }

  #[test]
  fn test_assign_neighborhoods() {
    let mut population = with_weights(vec![
      [0.0, 1.0],
      [0.25, 0.75],
      [0.5, 0.5],
      [0.75, 0.25],
      [1.0, 0.0],
    ]);
    assign_neighborhoods(&mut population, 2);
    assert_eq!(population[id(0)].neighbor_ids(), &[id(1), id(2)]);
    assert_eq!(population[id(4)].neighbor_ids(), &[id(3), id(2)]);
    let middle = population[id(2)].neighbor_ids();
    assert_eq!(middle.len(), 2);
    assert!(middle.contains(&id(1)) && middle.contains(&id(3)));
  }

  #[test]
  fn test_assign_neighborhoods_clamps_size() {
    let mut population = with_weights(vec![[0.0, 1.0], [1.0, 0.0]]);
    assign_neighborhoods(&mut population, 5);
    assert_eq!(population[id(0)].neighbor_ids(), &[id(1)]);
    assert_eq!(population[id(1)].neighbor_ids(), &[id(0)]);

    let mut population = with_weights(vec![[0.3, 0.7]]);
    assign_neighborhoods(&mut population, 5);
    assert!(population[id(0)].neighbor_ids().is_empty());
  }
}
