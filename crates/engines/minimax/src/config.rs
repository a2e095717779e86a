use serde::Deserialize;

/// Engine tuning knobs, loadable from a TOML file.
///
/// `scripted_moves` is a deterministic override channel: while non-empty,
/// the player consumes pre-scripted moves instead of searching. Entries
/// alternate own move / expected opponent reply in coordinate notation.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Probability (0-100) of adopting a move that ties the current best.
    pub tie_break_percent: u8,
    /// Starting value for the depth-selection calibration constant.
    pub initial_calibration: f64,
    /// Seed for the tie-break RNG; None draws from entropy.
    pub seed: Option<u64>,
    /// Pre-scripted moves in coordinate notation.
    pub scripted_moves: Vec<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tie_break_percent: 40,
            initial_calibration: 1e-4,
            seed: None,
            scripted_moves: Vec::new(),
        }
    }
}

impl EngineConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
