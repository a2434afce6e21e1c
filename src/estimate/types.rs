//! The complexity label produced by the estimator.

use serde::{Deserialize, Serialize};

/// Coarse asymptotic-complexity bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Constant,
    Linear,
    Quadratic,
    Recursive,
}

impl Complexity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Complexity::Constant => "constant",
            Complexity::Linear => "linear",
            Complexity::Quadratic => "quadratic",
            Complexity::Recursive => "recursive",
        }
    }

    /// The human-readable description shown in the overlay.
    pub fn description(&self) -> &'static str {
        match self {
            Complexity::Constant => "O(1) or constant",
            Complexity::Linear => "O(n) (single loop)",
            Complexity::Quadratic => "O(n²) (nested loops)",
            Complexity::Recursive => "Likely O(2^n) or O(n) (recursive)",
        }
    }
}

impl std::fmt::Display for Complexity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
