use serde::{Deserialize, Serialize};

use crate::catalog::ModelSpec;

/// Sentinel meaning "token accounting not yet filled in"
pub const TOKENS_UNSET: i64 = -1;

pub(crate) fn tokens_unset() -> i64 {
    TOKENS_UNSET
}

/// Provider-reported token consumption for a single model call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    pub input_tokens: i64,
    pub output_tokens: i64,
}

impl TokenUsage {
    pub fn new(input_tokens: i64, output_tokens: i64) -> Self {
        Self {
            input_tokens,
            output_tokens,
        }
    }

    /// Estimated cost in USD for this usage under the given model's pricing
    pub fn estimated_cost(&self, spec: &ModelSpec) -> f64 {
        let input = self.input_tokens.max(0) as f64;
        let output = self.output_tokens.max(0) as f64;
        input * spec.input_cost_per_1k / 1000.0 + output * spec.output_cost_per_1k / 1000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ModelSpec;

    #[test]
    fn test_estimated_cost() {
        let spec = ModelSpec {
            id: "test-model",
            input_cost_per_1k: 0.003,
            output_cost_per_1k: 0.015,
        };
        let usage = TokenUsage::new(1000, 2000);
        let cost = usage.estimated_cost(&spec);
        assert!((cost - 0.033).abs() < 1e-9);
    }

    #[test]
    fn test_estimated_cost_ignores_unset_counts() {
        let spec = ModelSpec {
            id: "test-model",
            input_cost_per_1k: 0.003,
            output_cost_per_1k: 0.015,
        };
        let usage = TokenUsage::new(TOKENS_UNSET, TOKENS_UNSET);
        assert_eq!(usage.estimated_cost(&spec), 0.0);
    }
}
