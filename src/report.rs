/// Serializable record of one rate calculation, for CLI output.
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::policy::RatePolicy;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationReport {
    /// Policy name (clt, pj, internship, common, express)
    pub policy: String,

    /// Policy kind (tax or freight)
    pub kind: String,

    /// The multiplier the policy applied
    pub rate: f64,

    /// Input amount
    pub amount: f64,

    /// `amount * rate`
    pub result: f64,
}

impl CalculationReport {
    pub fn new(policy: &dyn RatePolicy, amount: f64, result: f64) -> Self {
        Self {
            policy: policy.name().to_string(),
            kind: policy.kind().as_str().to_string(),
            rate: policy.rate(),
            amount,
            result,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl std::fmt::Display for CalculationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}, rate {}) on {} -> {}",
            self.policy, self.kind, self.rate, self.amount, self.result
        )
    }
}
