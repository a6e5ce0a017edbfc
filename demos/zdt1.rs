//! ZDT1 solution using MOEA/D with the Tchebycheff distance.

use moead::{
  optimizer::{moead::Moead, Optimizer},
  problems::Zdt1,
  scalarizing::Tchebycheff,
  variation::{PolynomialMutation, SimulatedBinaryCrossover},
};
use rand::{rngs::StdRng, SeedableRng};

fn main() {
  // report each generation's IGD
  tracing_subscriber::fmt()
    .with_max_level(tracing::Level::INFO)
    .init();

  // 30 decisions in [0, 1], two minimized objectives
  let problem = Zdt1::default();

  // SBX with rate 1 and eta 30, polynomial mutation with eta 20
  let crossover = SimulatedBinaryCrossover::new(1.0, 30.0);
  let mutation = PolynomialMutation::new(20.0);

  // 100 points match the structured 99-division lattice for two objectives
  let moead: Moead<_, _, _, _, _, 2> = Moead::builder()
    .problem(problem)
    .scalarizer(Tchebycheff::default())
    .crossover(crossover)
    .mutation(mutation)
    .rng(StdRng::seed_from_u64(1))
    .population_size(100)
    .neighborhood_size(20)
    .generations(250)
    .build();

  let outcome = moead.optimize().unwrap();

  // print the non-dominated objective vectors
  for point in outcome.non_dominated() {
    if let Some([f1, f2]) = point.objectives() {
      println!("{f1} {f2}");
    }
  }
}
