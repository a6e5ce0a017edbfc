//! Benchmark problems.

pub mod pps;
pub mod zdt;

pub use pps::Pps4;
pub use zdt::{Zdt1, Zdt2};

use crate::problem::EvaluationError;

fn check_len(expected: usize, actual: usize) -> Result<(), EvaluationError> {
  if expected == actual {
    Ok(())
  } else {
    Err(format!("expected {expected} decisions, got {actual}").into())
  }
}
