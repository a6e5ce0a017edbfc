//! Run settings loaded from configuration files.

use serde::{Deserialize, Serialize};

use crate::{scalarizing::Scalarizer, weights::Divisions};

/// Options recognized by [`Moead::from_settings`].
///
/// Every field has a default, so a partial document is enough:
///
/// ```
/// # use moead::{settings::Settings, scalarizing::Scalarizer};
/// let settings: Settings = serde_json::from_str(
///   r#"{"pop_size": 10, "T": 3, "scalarizing": {"kind": "tchebycheff"}}"#,
/// )
/// .unwrap();
/// assert_eq!(settings.pop_size, 10);
/// assert_eq!(settings.gens, 250);
/// assert_eq!(
///   settings.scalarizing,
///   Some(Scalarizer::Tchebycheff { epsilon: 1e-6 })
/// );
/// ```
///
/// [`Moead::from_settings`]: crate::optimizer::moead::Moead::from_settings
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
  /// Population size.
  pub pop_size: usize,
  /// Number of generations.
  pub gens: usize,
  /// Neighborhood size.
  #[serde(rename = "T")]
  pub neighborhood_size: usize,
  /// Crossover rate.
  pub cr: f64,
  /// Crossover distribution index.
  pub nc: f64,
  /// Mutation distribution index.
  pub nm: f64,
  /// Seed of the random source, entropy if absent.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub seed: Option<u64>,
  /// Division scheme overriding the default one for the problem's objective
  /// count.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub divisions: Option<Divisions>,
  /// Scalarizing distance. A run cannot start without one.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub scalarizing: Option<Scalarizer>,
}

impl Default for Settings {
  fn default() -> Self {
    Self {
      pop_size: 100,
      gens: 250,
      neighborhood_size: 20,
      cr: 1.0,
      nc: 30.0,
      nm: 20.0,
      seed: None,
      divisions: None,
      scalarizing: None,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_empty_document_gives_defaults() {
    let settings: Settings = serde_json::from_str("{}").unwrap();
    assert_eq!(settings, Settings::default());
    assert!(settings.scalarizing.is_none());
  }

  #[test]
  fn test_full_document() {
    let settings: Settings = serde_json::from_str(
      r#"{
        "pop_size": 91,
        "gens": 10,
        "T": 5,
        "cr": 0.9,
        "nc": 20.0,
        "nm": 15.0,
        "seed": 42,
        "divisions": {"outer": 12},
        "scalarizing": {"kind": "pbi", "theta": 2.5}
      }"#,
    )
    .unwrap();
    assert_eq!(settings.pop_size, 91);
    assert_eq!(settings.gens, 10);
    assert_eq!(settings.neighborhood_size, 5);
    assert_eq!((settings.cr, settings.nc, settings.nm), (0.9, 20.0, 15.0));
    assert_eq!(settings.seed, Some(42));
    assert_eq!(settings.divisions, Some(Divisions::new(12, 0)));
    assert_eq!(settings.scalarizing, Some(Scalarizer::Pbi { theta: 2.5 }));
  }

  #[test]
  fn test_serialize_uses_short_names() {
    let settings = Settings {
      scalarizing: Some(Scalarizer::WeightedSum),
      ..Settings::default()
    };
    let json = serde_json::to_value(&settings).unwrap();
    assert_eq!(json["T"], 20);
    assert_eq!(json["scalarizing"]["kind"], "weighted_sum");
    assert!(json.get("seed").is_none());

    let back: Settings = serde_json::from_value(json).unwrap();
    assert_eq!(back, settings);
  }
}
