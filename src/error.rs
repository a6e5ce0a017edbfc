//! Error types surfaced by the optimizer.

use thiserror::Error;

use crate::{optimizer::Phase, problem::EvaluationError};

/// Errors that abort a run.
///
/// Configuration errors are reported before the first generation executes.
/// Degenerate neighborhoods and zero weight components are not errors.
#[derive(Debug, Error)]
pub enum MoeadError {
  /// The weight vector generator produced a different number of vectors than
  /// there are points in the population.
  #[error("generated {actual} weight vectors for a population of {expected}")]
  WeightCountMismatch {
    /// Population size.
    expected: usize,
    /// Number of generated weight vectors.
    actual: usize,
  },

  /// No scalarizing distance was selected for the run.
  #[error("no scalarizing distance selected")]
  MissingScalarizer,

  /// The initial population is empty.
  #[error("population is empty")]
  EmptyPopulation,

  /// An initial decision vector does not match the problem's decision count.
  #[error(
    "decision vector has {actual} values but the problem has {expected} \
     decisions"
  )]
  DecisionCountMismatch {
    /// Decision count of the problem.
    expected: usize,
    /// Length of the offending decision vector.
    actual: usize,
  },

  /// The problem failed to evaluate a decision vector.
  #[error("evaluation failed: {0}")]
  Evaluation(#[source] EvaluationError),

  /// An operation was invoked in a phase that does not allow it.
  #[error("cannot {operation} in phase {phase:?}")]
  Phase {
    /// The rejected operation.
    operation: &'static str,
    /// Phase the optimizer was in.
    phase: Phase,
  },
}

/// Result type alias for optimizer operations.
pub type Result<T> = std::result::Result<T, MoeadError>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_messages() {
    let err = MoeadError::WeightCountMismatch {
      expected: 10,
      actual: 9,
    };
    assert_eq!(
      err.to_string(),
      "generated 9 weight vectors for a population of 10"
    );

    let err = MoeadError::Phase {
      operation: "step",
      phase: Phase::Uninitialized,
    };
    assert_eq!(err.to_string(), "cannot step in phase Uninitialized");
  }

  #[test]
  fn test_evaluation_source() {
    use std::error::Error;

    let err = MoeadError::Evaluation("division by zero".into());
    assert_eq!(err.to_string(), "evaluation failed: division by zero");
    assert!(err.source().is_some());
  }
}
