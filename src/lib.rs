//! **MOEAD** is an implementation of the decomposition-based Multi-Objective
//! Evolutionary Algorithm (MOEA/D) for continuous multi-objective
//! optimization problems. It strives to be simple, reproducible and friendly
//! to closures.
//!
//! Here's a [quick start example](#example) for the impatient.
//!
//! MOEA/D turns one multi-objective problem into as many scalar subproblems
//! as there are members in the population. A few abstractions make that
//! work:
//! - **Weight vector** - a point on the objective simplex that defines one
//!   subproblem. Each population member owns exactly one, see [`weights`]
//! - **Neighborhood** - the `T` members whose weight vectors are nearest to a
//!   member's own. Mating and replacement never leave it, see
//!   [`neighborhood`]
//! - **Ideal point** - the best value seen so far for every objective, see
//!   [`IdealPoint`]
//! - **Scalarizing distance** - collapses an objective vector into a single
//!   number relative to a weight vector and the ideal point, see
//!   [`Scalarizing`]
//! - **Optimizer** - runs the generational loop:
//!   1. **Visit** every member once, in a fresh random order
//!   2. **Reproduce** an offspring from two distinct neighbors of the member
//!   3. **Evaluate** the offspring and tighten the ideal point with it
//!   4. **Replace**, in place, every neighbor whose subproblem the offspring
//!      solves strictly better
//!
//! # Optimizers
//!
//! **Optimizer** is represented in this crate with the [`Optimizer`] trait
//! and implemented by [`Moead`]. An optimizer is built from a [`Problem`], a
//! scalarizing distance, a [`Crossover`], a [`Mutation`] and a random source.
//! Runs are fully determined by the random source, so seeding it makes them
//! reproducible.
//!
//! A run can be driven to the end with [`Optimizer::optimize`] or one
//! generation at a time with [`Moead::setup`] and [`Moead::step`], which
//! report per-generation statistics.
//!
//! # Scalarizing distances
//!
//! | Distance        | Formula                                                        |
//! |:----------------|:---------------------------------------------------------------|
//! | [`Tchebycheff`] | `max_i(w_i * \|f_i - z_i\|)`, zero weights replaced by epsilon |
//! | [`Pbi`]         | `d1 + theta * d2`, projection plus perpendicular penalty       |
//! | [`WeightedSum`] | `sum_i(w_i * (f_i - z_i))`                                     |
//!
//! [`Scalarizer`] selects one of them from configuration.
//!
//! # Closures
//!
//! [`Scalarizing`], [`Crossover`] and [`Mutation`] are implemented for
//! closures of the matching signature. For example, a [`Mutation`] is any
//! `Fn(&[Decision], &mut [f64], &mut dyn RngCore)`. Consult the
//! *Implementors* section of each trait to see what closures implement it.
//!
//! Note, however, that this highly generic implementation leads to
//! unreadable compiler error messages that appear not at closure definition,
//! but at creation of an optimizer. If you are struggling with a closure,
//! implement the trait directly instead.
//!
//! # Configuration and logging
//!
//! [`Settings`] deserializes the usual MOEA/D options (`pop_size`, `gens`,
//! `T`, `cr`, `nc`, `nm`) together with a seed, a weight division scheme and
//! the scalarizing distance. [`Moead::from_settings`] turns them into an
//! optimizer with simulated binary crossover and polynomial mutation.
//!
//! The crate logs through [`tracing`] and never installs a subscriber itself.
//! Generations are reported at `info`, setup at `debug`, random weight
//! fallbacks and degenerate neighborhoods at `warn`.
//!
//! # Example
//!
//! Here's a run on the *ZDT1* benchmark with 30 decisions.
//! ```no_run
//! # fn main() {
//! use moead::{
//!   optimizer::{moead::Moead, Optimizer},
//!   problems::Zdt1,
//!   scalarizing::Tchebycheff,
//!   variation::{PolynomialMutation, SimulatedBinaryCrossover},
//! };
//! use rand::{rngs::StdRng, SeedableRng};
//! // a convenient builder with compile time verification from `typed-builder` crate
//! let moead: Moead<_, _, _, _, _, 2> = Moead::builder()
//!   .problem(Zdt1::default())
//!   .scalarizer(Tchebycheff::default())
//!   .crossover(SimulatedBinaryCrossover::default())
//!   .mutation(PolynomialMutation::default())
//!   .rng(StdRng::seed_from_u64(42))
//!   // 100 members match the 99-division lattice for two objectives
//!   .population_size(100)
//!   .neighborhood_size(20)
//!   .generations(250)
//!   .build();
//! let outcome = moead.optimize().unwrap();
//! // the approximation of the Pareto front
//! let front = outcome.non_dominated();
//! println!("{} non-dominated points", front.len());
//! println!("igd: {:?}", outcome.history().last().and_then(|r| r.igd));
//! # }
//! ```
//!
//! You can find runnable demos in the *demos* folder in the root of the
//! project.
//!
//! # Common pitfalls
//!
//! - The structured weight lattice is only used when its size equals the
//!   population size exactly. Any other size silently (well, with a warning)
//!   falls back to random weights. Use
//!   [`WeightVectorGenerator::with_divisions`] to match your population.
//! - A neighborhood smaller than two cannot supply distinct parents, so
//!   members mate with themselves. Keep `T` at least 2 and below the
//!   population size.
//! - One offspring may replace its whole neighborhood. Large `T` therefore
//!   costs diversity quickly.
//!
//! [`Optimizer`]: crate::optimizer::Optimizer
//! [`Optimizer::optimize`]: crate::optimizer::Optimizer::optimize
//! [`Moead`]: crate::optimizer::moead::Moead
//! [`Moead::setup`]: crate::optimizer::moead::Moead::setup
//! [`Moead::step`]: crate::optimizer::moead::Moead::step
//! [`Moead::from_settings`]: crate::optimizer::moead::Moead::from_settings
//! [`Problem`]: crate::problem::Problem
//! [`Decision`]: crate::problem::Decision
//! [`IdealPoint`]: crate::ideal::IdealPoint
//! [`Scalarizing`]: crate::scalarizing::Scalarizing
//! [`Scalarizer`]: crate::scalarizing::Scalarizer
//! [`Tchebycheff`]: crate::scalarizing::Tchebycheff
//! [`Pbi`]: crate::scalarizing::Pbi
//! [`WeightedSum`]: crate::scalarizing::WeightedSum
//! [`Crossover`]: crate::variation::Crossover
//! [`Mutation`]: crate::variation::Mutation
//! [`Settings`]: crate::settings::Settings
//! [`WeightVectorGenerator::with_divisions`]: crate::weights::WeightVectorGenerator::with_divisions

#![warn(missing_docs)]

pub mod error;
pub mod ideal;
pub mod indicator;
pub mod neighborhood;
pub mod optimizer;
pub mod point;
pub mod population;
pub mod problem;
pub mod problems;
pub mod reproduction;
pub mod scalarizing;
pub mod score;
pub mod settings;
pub mod variation;
pub mod weights;
