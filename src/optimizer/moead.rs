//! Decomposition-based multi-objective evolutionary algorithm, MOEA/D.
//!
//! The problem is decomposed into as many scalar subproblems as there are
//! population members. Each member owns a weight vector and mates only with
//! the members whose weight vectors are nearest to its own. Every offspring
//! is offered to that neighborhood and overwrites, in place, any neighbor it
//! beats on the neighbor's own subproblem.

use rand::{rngs::StdRng, seq::SliceRandom, RngCore, SeedableRng};
use tracing::{debug, info, trace};
use typed_builder::TypedBuilder;

use crate::{
  error::{MoeadError, Result},
  ideal::IdealPoint,
  indicator,
  neighborhood::assign_neighborhoods,
  optimizer::{GenerationReport, Optimizer, Outcome, Phase},
  point::{Offspring, PointId},
  population::Population,
  problem::Problem,
  reproduction::Reproduction,
  scalarizing::{Scalarizer, Scalarizing},
  score::Scores,
  settings::Settings,
  variation::{
    Crossover, Mutation, PolynomialMutation, SimulatedBinaryCrossover,
  },
  weights::WeightVectorGenerator,
};

/// The MOEA/D optimizer.
///
/// Build it with [`Moead::builder`] or, from a configuration document, with
/// [`Moead::from_settings`]. A run either goes through
/// [`Optimizer::optimize`] or is driven manually with [`Moead::setup`] and
/// [`Moead::step`].
///
/// # Examples
/// ```
/// use moead::{
///   optimizer::{moead::Moead, Optimizer},
///   problems::Zdt1,
///   scalarizing::Tchebycheff,
///   variation::{PolynomialMutation, SimulatedBinaryCrossover},
///   weights::{Divisions, WeightVectorGenerator},
/// };
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let moead: Moead<_, _, _, _, _, 2> = Moead::builder()
///   .problem(Zdt1::new(10))
///   .scalarizer(Tchebycheff::default())
///   .crossover(SimulatedBinaryCrossover::default())
///   .mutation(PolynomialMutation::default())
///   .rng(StdRng::seed_from_u64(0))
///   .population_size(10)
///   .neighborhood_size(3)
///   .generations(5)
///   .weight_generator(
///     WeightVectorGenerator::default()
///       .with_divisions(2, Divisions::new(9, 0)),
///   )
///   .build();
/// let outcome = moead.optimize().unwrap();
/// assert_eq!(outcome.history().len(), 5);
/// assert_eq!(outcome.population().len(), 10);
/// ```
#[derive(TypedBuilder, Debug)]
pub struct Moead<
  Prb: Problem<OBJECTIVE_NUM>,
  Scl: Scalarizing<OBJECTIVE_NUM>,
  Crs: Crossover,
  Mut: Mutation,
  Rnd: RngCore,
  const OBJECTIVE_NUM: usize,
> {
  /// The problem to optimize.
  problem: Prb,
  /// Scalarizing distance ranking candidates on a subproblem.
  scalarizer: Scl,
  /// Crossover operator.
  crossover: Crs,
  /// Mutation operator.
  mutation: Mut,
  /// Random source used for weights, mating and visiting order.
  rng: Rnd,
  /// Population size. Ignored when an initial population is supplied.
  #[builder(default = 100)]
  population_size: usize,
  /// Number of generations to run.
  #[builder(default = 250)]
  generations: usize,
  /// Number of neighbors per point, `T`.
  #[builder(default = 20)]
  neighborhood_size: usize,
  /// Initial decision vectors. Sampled from the problem if absent.
  #[builder(default, setter(strip_option))]
  initial_population: Option<Vec<Vec<f64>>>,
  /// Weight vector generator.
  #[builder(default)]
  weight_generator: WeightVectorGenerator,
  /// Whether to compute IGD against the problem's reference front after
  /// each generation.
  #[builder(default = true)]
  report_igd: bool,
  #[builder(setter(skip), default)]
  phase: Phase,
  #[builder(setter(skip), default)]
  population: Population<OBJECTIVE_NUM>,
  #[builder(setter(skip), default)]
  ideal: IdealPoint<OBJECTIVE_NUM>,
  #[builder(setter(skip), default)]
  reference_front: Vec<Scores<OBJECTIVE_NUM>>,
  #[builder(setter(skip), default)]
  history: Vec<GenerationReport<OBJECTIVE_NUM>>,
}

impl<Prb, Scl, Crs, Mut, Rnd, const OBJECTIVE_NUM: usize>
  Moead<Prb, Scl, Crs, Mut, Rnd, OBJECTIVE_NUM>
where
  Prb: Problem<OBJECTIVE_NUM>,
  Scl: Scalarizing<OBJECTIVE_NUM>,
  Crs: Crossover,
  Mut: Mutation,
  Rnd: RngCore,
{
  /// Returns the current lifecycle phase.
  pub fn phase(&self) -> Phase {
    self.phase
  }

  /// Returns the problem being optimized.
  pub fn problem(&self) -> &Prb {
    &self.problem
  }

  /// Returns the population. Empty until setup.
  pub fn population(&self) -> &Population<OBJECTIVE_NUM> {
    &self.population
  }

  /// Returns the current ideal point.
  pub fn ideal(&self) -> &IdealPoint<OBJECTIVE_NUM> {
    &self.ideal
  }

  /// Returns the reports of the generations executed so far.
  pub fn history(&self) -> &[GenerationReport<OBJECTIVE_NUM>] {
    &self.history
  }

  /// Creates and evaluates the initial population, assigns weight vectors
  /// and neighborhoods and seeds the ideal point.
  ///
  /// # Errors
  ///
  /// - [`MoeadError::Phase`] if called more than once.
  /// - [`MoeadError::EmptyPopulation`] if there is nothing to optimize.
  /// - [`MoeadError::DecisionCountMismatch`] if an initial decision vector
  ///   has the wrong length.
  /// - [`MoeadError::WeightCountMismatch`] if weight generation fails.
  /// - [`MoeadError::Evaluation`] if the problem fails to evaluate a point.
  pub fn setup(&mut self) -> Result<()> {
    if self.phase != Phase::Uninitialized {
      return Err(MoeadError::Phase {
        operation: "set up",
        phase: self.phase,
      });
    }
    self.phase = Phase::Setup;

    let decisions = match self.initial_population.take() {
      Some(decisions) => decisions,
      None => self.problem.populate(self.population_size, &mut self.rng),
    };
    if decisions.is_empty() {
      return Err(MoeadError::EmptyPopulation);
    }
    let expected = self.problem.decisions().len();
    if let Some(wrong) = decisions.iter().find(|d| d.len() != expected) {
      return Err(MoeadError::DecisionCountMismatch {
        expected,
        actual: wrong.len(),
      });
    }

    let weights = self
      .weight_generator
      .generate::<OBJECTIVE_NUM>(decisions.len(), &mut self.rng)?;
    debug!(count = weights.len(), "weight vectors generated");
    self.population = Population::new(decisions, weights);

    for point in self.population.iter_mut() {
      point.evaluate(&self.problem)?;
    }
    assign_neighborhoods(&mut self.population, self.neighborhood_size);

    self.ideal = IdealPoint::new(self.problem.directions());
    for objectives in self.population.objectives() {
      self.ideal.observe(&objectives);
    }
    debug!(ideal = ?self.ideal.values(), "ideal point seeded");

    if self.report_igd {
      self.reference_front = self.problem.pareto_front();
    }

    self.phase = if self.generations == 0 {
      Phase::Terminated
    } else {
      Phase::Running { generation: 0 }
    };
    Ok(())
  }

  /// Executes one generation. Every point is visited once, in a fresh random
  /// order, and produces one offspring. Replacements are visible to the
  /// points visited after them.
  ///
  /// Returns `Ok(None)` once the optimizer has terminated; nothing changes
  /// after that.
  ///
  /// # Errors
  ///
  /// - [`MoeadError::Phase`] if [`Moead::setup`] has not completed.
  /// - [`MoeadError::Evaluation`] if the problem fails to evaluate an
  ///   offspring. The optimizer terminates.
  pub fn step(&mut self) -> Result<Option<GenerationReport<OBJECTIVE_NUM>>> {
    let generation = match self.phase {
      Phase::Running { generation } => generation + 1,
      Phase::Terminated => return Ok(None),
      phase => {
        return Err(MoeadError::Phase {
          operation: "step",
          phase,
        })
      }
    };

    let mut order: Vec<PointId> = self.population.ids().collect();
    order.shuffle(&mut self.rng);

    let reproduction = Reproduction::new(
      self.problem.decisions(),
      &self.crossover,
      &self.mutation,
    );
    let mut replacements = 0;
    for id in order {
      let mut offspring = reproduction.offspring(
        &self.population[id],
        &self.population,
        &mut self.rng,
      );
      let objectives = match offspring.evaluate(&self.problem) {
        Ok(objectives) => objectives,
        Err(err) => {
          self.phase = Phase::Terminated;
          return Err(err);
        }
      };
      self.ideal.observe(&objectives);
      replacements += replace_neighbors(
        &mut self.population,
        &self.scalarizer,
        &self.ideal,
        id,
        &offspring,
      );
    }

    let igd = if self.reference_front.is_empty() {
      None
    } else {
      Some(indicator::igd(
        &self.population.objectives(),
        &self.reference_front,
      ))
    };
    info!(generation, replacements, igd = ?igd, "generation complete");

    let report = GenerationReport {
      generation,
      replacements,
      igd,
      ideal: *self.ideal.values(),
    };
    self.history.push(report);
    self.phase = if generation >= self.generations {
      Phase::Terminated
    } else {
      Phase::Running { generation }
    };
    Ok(Some(report))
  }
}

impl<Prb, const OBJECTIVE_NUM: usize>
  Moead<
    Prb,
    Scalarizer,
    SimulatedBinaryCrossover,
    PolynomialMutation,
    StdRng,
    OBJECTIVE_NUM,
  >
where
  Prb: Problem<OBJECTIVE_NUM>,
{
  /// Creates an optimizer for `problem` from configuration, with simulated
  /// binary crossover, polynomial mutation and a [`StdRng`] seeded from
  /// `settings.seed` (from entropy if absent).
  ///
  /// # Errors
  ///
  /// Returns [`MoeadError::MissingScalarizer`] if `settings` selects no
  /// scalarizing distance.
  pub fn from_settings(problem: Prb, settings: &Settings) -> Result<Self> {
    let scalarizer = settings
      .scalarizing
      .ok_or(MoeadError::MissingScalarizer)?;
    let rng = match settings.seed {
      Some(seed) => StdRng::seed_from_u64(seed),
      None => StdRng::from_entropy(),
    };
    let weight_generator = match settings.divisions {
      Some(divisions) => WeightVectorGenerator::default()
        .with_divisions(OBJECTIVE_NUM, divisions),
      None => WeightVectorGenerator::default(),
    };
    Ok(
      Self::builder()
        .problem(problem)
        .scalarizer(scalarizer)
        .crossover(SimulatedBinaryCrossover::new(settings.cr, settings.nc))
        .mutation(PolynomialMutation::new(settings.nm))
        .rng(rng)
        .population_size(settings.pop_size)
        .generations(settings.gens)
        .neighborhood_size(settings.neighborhood_size)
        .weight_generator(weight_generator)
        .build(),
    )
  }
}

impl<Prb, Scl, Crs, Mut, Rnd, const OBJECTIVE_NUM: usize>
  Optimizer<OBJECTIVE_NUM> for Moead<Prb, Scl, Crs, Mut, Rnd, OBJECTIVE_NUM>
where
  Prb: Problem<OBJECTIVE_NUM>,
  Scl: Scalarizing<OBJECTIVE_NUM>,
  Crs: Crossover,
  Mut: Mutation,
  Rnd: RngCore,
{
  fn optimize(mut self) -> Result<Outcome<OBJECTIVE_NUM>> {
    if self.phase == Phase::Uninitialized {
      self.setup()?;
    }
    while self.step()?.is_some() {}
    Ok(Outcome {
      population: self.population,
      ideal: self.ideal,
      history: self.history,
    })
  }
}

/// Offers an evaluated offspring to every neighbor of `origin`. A neighbor
/// is overwritten when the offspring's distance on the neighbor's weight
/// vector is strictly smaller than the neighbor's own. Unevaluated neighbors
/// are always overwritten. Returns the number of replaced neighbors.
///
/// There is no cap: a single offspring may replace the whole neighborhood.
pub(crate) fn replace_neighbors<S, const N: usize>(
  population: &mut Population<N>,
  scalarizer: &S,
  ideal: &IdealPoint<N>,
  origin: PointId,
  offspring: &Offspring<N>,
) -> usize
where
  S: Scalarizing<N>,
{
  let Some(candidate) = offspring.objectives() else {
    return 0;
  };
  let neighbor_ids = population[origin].neighbor_ids().to_vec();
  let mut replaced = 0;
  for id in neighbor_ids {
    let neighbor = &mut population[id];
    let weight = neighbor.weight();
    let incumbent = neighbor
      .objectives()
      .map_or(f64::INFINITY, |o| scalarizer.distance(o, weight, ideal));
    let challenger = scalarizer.distance(candidate, weight, ideal);
    if challenger < incumbent {
      neighbor.replace_with(offspring);
      replaced += 1;
    }
  }
  trace!(origin = %origin, replaced, "offspring offered to neighborhood");
  replaced
}
