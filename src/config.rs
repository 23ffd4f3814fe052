//! Scoring configuration parameters.

use serde::{Deserialize, Serialize};

/// Parameters for UCB1 child scoring.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UcbConfig {
    /// UCB1 exploration constant (default: 2.0).
    /// Higher values favor exploration over exploitation.
    pub exploration_constant: f64,
}

impl Default for UcbConfig {
    fn default() -> Self {
        Self {
            exploration_constant: 2.0,
        }
    }
}

impl UcbConfig {
    /// Create a new config with a custom exploration constant.
    pub fn with_exploration(mut self, c: f64) -> Self {
        self.exploration_constant = c;
        self
    }
}
