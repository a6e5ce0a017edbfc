//! Mating restricted to a point's neighborhood.

use rand::{Rng, RngCore};

use crate::{
  point::{DecompositionPoint, Offspring, PointId},
  population::Population,
  problem::Decision,
  variation::{Crossover, Mutation},
};

/// Picks two distinct parents uniformly from the point's neighbors.
///
/// A neighborhood with fewer than two members cannot supply distinct
/// parents: with one neighbor it is used twice, with none the point mates
/// with itself.
pub fn select_parents<const N: usize>(
  point: &DecompositionPoint<N>,
  rng: &mut dyn RngCore,
) -> (PointId, PointId) {
  match point.neighbor_ids() {
    [] => (point.id(), point.id()),
    [only] => (*only, *only),
    ids => {
      let one = ids[rng.gen_range(0..ids.len())];
      let mut two = ids[rng.gen_range(0..ids.len())];
      while two == one {
        two = ids[rng.gen_range(0..ids.len())];
      }
      (one, two)
    }
  }
}

/// Produces offspring from a point's neighborhood with the configured
/// crossover and mutation operators.
#[derive(Debug)]
pub struct Reproduction<'a, C, M> {
  decisions: &'a [Decision],
  crossover: &'a C,
  mutation: &'a M,
}

impl<'a, C: Crossover, M: Mutation> Reproduction<'a, C, M> {
  /// Creates a reproduction step for a problem with the given decisions.
  pub fn new(
    decisions: &'a [Decision],
    crossover: &'a C,
    mutation: &'a M,
  ) -> Self {
    Self {
      decisions,
      crossover,
      mutation,
    }
  }

  /// Crosses two neighbors of `point`, mutates the first child and returns it
  /// as an unevaluated offspring.
  pub fn offspring<const N: usize>(
    &self,
    point: &DecompositionPoint<N>,
    population: &Population<N>,
    rng: &mut dyn RngCore,
  ) -> Offspring<N> {
    let (one, two) = select_parents(point, rng);
    let mom = population[one].decisions();
    let dad = population[two].decisions();
    let (mut sis, _) = self.crossover.crossover(self.decisions, mom, dad, rng);
    self.mutation.mutate(self.decisions, &mut sis, rng);
    Offspring::new(sis)
  }
}

#[cfg(test)]
mod tests {
  use rand::{rngs::StdRng, SeedableRng};

  use super::*;
  use crate::neighborhood::assign_neighborhoods;

  fn population(size: usize, neighbors: usize) -> Population<2> {
    let decisions = (0..size).map(|i| vec![i as f64]).collect();
    let weights = (0..size)
      .map(|i| {
        let w = i as f64 / (size.max(2) - 1) as f64;
        [w, 1.0 - w]
      })
      .collect();
    let mut population = Population::new(decisions, weights);
    assign_neighborhoods(&mut population, neighbors);
    population
  }

  #[test]
  fn test_parents_are_distinct_neighbors() {
    let population = population(10, 3);
    let mut rng = StdRng::seed_from_u64(4);
    for point in population.iter() {
      for _ in 0..20 {
        let (one, two) = select_parents(point, &mut rng);
        assert_ne!(one, two);
        assert!(point.neighbor_ids().contains(&one));
        assert!(point.neighbor_ids().contains(&two));
      }
    }
  }

  #[test]
  fn test_single_neighbor_is_used_twice() {
    let population = population(2, 3);
    let mut rng = StdRng::seed_from_u64(4);
    let point = &population[PointId::new(0)];
    assert_eq!(
      select_parents(point, &mut rng),
      (PointId::new(1), PointId::new(1))
    );
  }

  #[test]
  fn test_lone_point_mates_with_itself() {
    let population = population(1, 3);
    let mut rng = StdRng::seed_from_u64(4);
    let point = &population[PointId::new(0)];
    assert_eq!(select_parents(point, &mut rng), (point.id(), point.id()));
  }

  #[test]
  fn test_offspring_comes_from_neighbors() {
    let population = population(6, 2);
    let decisions = vec![Decision::new("x", 0.0, 10.0)];
    let crossover =
      |_: &[Decision], a: &[f64], b: &[f64], _: &mut dyn RngCore| {
        (vec![a[0] * 100.0 + b[0]], b.to_vec())
      };
    let mutation = |_: &[Decision], _: &mut [f64], _: &mut dyn RngCore| {};
    let reproduction = Reproduction::new(&decisions, &crossover, &mutation);
    let mut rng = StdRng::seed_from_u64(9);

    let point = &population[PointId::new(0)];
    let offspring = reproduction.offspring(point, &population, &mut rng);
    let code = offspring.decisions()[0] as usize;
    let (one, two) = (code / 100, code % 100);
    assert_ne!(one, two);
    assert!([1, 2].contains(&one) && [1, 2].contains(&two));
    assert!(offspring.objectives().is_none());
  }
}
