//! Type aliases for a more convenient representation of objective values used
//! throughout the library.

use std::cmp::Ordering;

use crate::problem::Direction;

/// An alias for a single objective value.
pub type Score = f64;

/// An alias for an array of `N` values of `Score` type, one per objective.
pub type Scores<const N: usize> = [Score; N];

/// Describes pareto dominance for arrays of `Score`s.
pub(crate) trait ParetoDominance<const N: usize> {
  /// Returns `Less` if `self` dominates `other`, `Greater` if `other`
  /// dominates `self`, otherwise `Equal`. Each objective is compared in its
  /// own optimization direction.
  fn dominance(&self, other: &Self, directions: &[Direction; N]) -> Ordering;
}

impl<const N: usize> ParetoDominance<N> for Scores<N> {
  fn dominance(&self, other: &Self, directions: &[Direction; N]) -> Ordering {
    let mut ord = Ordering::Equal;
    for ((a, b), direction) in self.iter().zip(other).zip(directions) {
      match (ord, direction.compare(*a, *b)) {
        (Ordering::Equal, next_ord) => ord = next_ord,
        (Ordering::Greater, Ordering::Less)
        | (Ordering::Less, Ordering::Greater) => return Ordering::Equal,
        _ => {}
      }
    }
    ord
  }
}

#[cfg(test)]
mod tests {
  use std::cmp::Ordering;

  use super::*;

  const MIN: Direction = Direction::Minimize;
  const MAX: Direction = Direction::Maximize;

  #[test]
  fn test_pareto_dominance() {
    let dirs = [MIN; 3];
    assert_eq!(
      [1.0, 2.0, 3.0].dominance(&[1.0, 2.0, 3.0], &dirs),
      Ordering::Equal
    );
    assert_eq!(
      [1.0, 2.0, 3.0].dominance(&[3.0, 2.0, 1.0], &dirs),
      Ordering::Equal
    );
    assert_eq!(
      [10.0, 2.0, 3.0].dominance(&[1.0, 2.0, 3.0], &dirs),
      Ordering::Greater
    );
    assert_eq!(
      [1.0, 2.0, 30.0].dominance(&[1.0, 2.0, 3.0], &dirs),
      Ordering::Greater
    );
    assert_eq!(
      [1.0, 2.0, 3.0].dominance(&[1.0, 20.0, 3.0], &dirs),
      Ordering::Less
    );
    assert_eq!(
      [-1.0, 2.0, -3.0].dominance(&[2.0, 2.0, 4.0], &dirs),
      Ordering::Less
    );
    assert_eq!([0.0; 0].dominance(&[0.0; 0], &[]), Ordering::Equal);
  }

  #[test]
  fn test_pareto_dominance_respects_directions() {
    assert_eq!([1.0, 5.0].dominance(&[2.0, 4.0], &[MIN, MAX]), Ordering::Less);
    assert_eq!(
      [1.0, 5.0].dominance(&[2.0, 4.0], &[MAX, MIN]),
      Ordering::Greater
    );
    assert_eq!([1.0, 5.0].dominance(&[2.0, 4.0], &[MIN; 2]), Ordering::Equal);
  }

  #[test]
  fn test_pareto_dominance_nan_is_incomparable() {
    assert_eq!(
      [f64::NAN, 1.0].dominance(&[1.0, 1.0], &[MIN; 2]),
      Ordering::Equal
    );
  }
}
