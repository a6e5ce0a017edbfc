//! PPS4 solution using MOEA/D configured from a JSON document.

use moead::{
  optimizer::{moead::Moead, Optimizer},
  problems::Pps4,
  settings::Settings,
};

const SETTINGS: &str = r#"{
  "pop_size": 91,
  "gens": 100,
  "T": 10,
  "seed": 7,
  "divisions": {"outer": 90},
  "scalarizing": {"kind": "pbi", "theta": 5.0}
}"#;

fn main() {
  tracing_subscriber::fmt()
    .with_max_level(tracing::Level::INFO)
    .init();

  let settings: Settings = serde_json::from_str(SETTINGS).unwrap();
  let moead = Moead::from_settings(Pps4::default(), &settings).unwrap();
  let outcome = moead.optimize().unwrap();

  let [f1, f2] = outcome.ideal().values();
  println!("ideal: {f1} {f2}");
  let [n1, n2] = outcome.nadir();
  println!("nadir: {n1} {n2}");
  for point in outcome.non_dominated() {
    if let Some([f1, f2]) = point.objectives() {
      println!("{f1} {f2}");
    }
  }
}
