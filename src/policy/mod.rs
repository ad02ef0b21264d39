// Rate policies for the Strategy-pattern calculators.
//
// Each policy is a stateless multiplier behind a common trait. The catalog
// holds the default set in a fixed order and resolves policies by name for
// the CLI.

pub mod freight;
pub mod tax;

pub use freight::{CommonFreight, ExpressFreight};
pub use tax::{CltTax, InternshipTax, PjTax};

use crate::error::{Error, Result};
use tracing::debug;

/// What a policy applies to. Decides which context type the CLI builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyKind {
    Tax,
    Freight,
}

impl PolicyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PolicyKind::Tax => "tax",
            PolicyKind::Freight => "freight",
        }
    }
}

/// A pluggable rate policy: a constant multiplier applied to an amount.
///
/// Implementations are pure and stateless. `calculate` is total over all
/// real input and has no side effects.
pub trait RatePolicy: Send + Sync + std::fmt::Debug {
    fn name(&self) -> &'static str;

    fn kind(&self) -> PolicyKind;

    /// The constant multiplier this policy applies.
    fn rate(&self) -> f64;

    fn calculate(&self, amount: f64) -> f64 {
        amount * self.rate()
    }

    /// Optional discount attribute, read once by the context at construction.
    fn discount(&self) -> Option<f64> {
        None
    }
}

/// Builds an owned policy by name, for contexts that take ownership.
/// Lookup is case-insensitive, matching [`PolicyCatalog::get`].
pub fn create(name: &str) -> Result<Box<dyn RatePolicy>> {
    match name.to_ascii_lowercase().as_str() {
        "clt" => Ok(Box::new(CltTax::new())),
        "pj" => Ok(Box::new(PjTax::new())),
        "internship" => Ok(Box::new(InternshipTax::new())),
        "common" => Ok(Box::new(CommonFreight::new())),
        "express" => Ok(Box::new(ExpressFreight::new())),
        _ => Err(Error::unknown_policy(name)),
    }
}

/// The default policy set, in a fixed order, resolvable by name.
pub struct PolicyCatalog {
    policies: Vec<Box<dyn RatePolicy>>,
}

impl PolicyCatalog {
    pub fn new() -> Self {
        Self {
            policies: Self::default_policies(),
        }
    }

    /// Returns the default policies, tax variants first.
    fn default_policies() -> Vec<Box<dyn RatePolicy>> {
        vec![
            Box::new(CltTax::new()),
            Box::new(PjTax::new()),
            Box::new(InternshipTax::new()),
            Box::new(CommonFreight::new()),
            Box::new(ExpressFreight::new()),
        ]
    }

    /// Case-insensitive lookup by policy name.
    pub fn get(&self, name: &str) -> Result<&dyn RatePolicy> {
        let found = self
            .policies
            .iter()
            .find(|p| p.name().eq_ignore_ascii_case(name))
            .map(|p| p.as_ref());

        match found {
            Some(policy) => {
                debug!(policy = policy.name(), rate = policy.rate(), "resolved policy");
                Ok(policy)
            }
            None => Err(Error::unknown_policy(name)),
        }
    }

    pub fn policy_count(&self) -> usize {
        self.policies.len()
    }

    pub fn policy_names(&self) -> Vec<&'static str> {
        self.policies.iter().map(|p| p.name()).collect()
    }
}

impl Default for PolicyCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_catalog_holds_all_policies() {
        let catalog = PolicyCatalog::new();
        assert_eq!(catalog.policy_count(), 5);
        assert_eq!(
            catalog.policy_names(),
            vec!["clt", "pj", "internship", "common", "express"]
        );
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let catalog = PolicyCatalog::new();
        let policy = catalog.get("CLT").unwrap();
        assert_eq!(policy.name(), "clt");
        assert_eq!(policy.rate(), 0.2);
    }

    #[test]
    fn test_unknown_policy_errors() {
        let catalog = PolicyCatalog::new();
        let err = catalog.get("overnight").unwrap_err();
        assert_eq!(err.to_string(), "unknown policy: overnight");
    }

    #[test]
    fn test_create_builds_every_catalog_policy() {
        let catalog = PolicyCatalog::new();
        for name in catalog.policy_names() {
            let policy = create(name).unwrap();
            assert_eq!(policy.name(), name);
        }
        assert!(create("overnight").is_err());
    }

    #[test]
    fn test_calculate_is_amount_times_rate() {
        let catalog = PolicyCatalog::new();
        for name in catalog.policy_names() {
            let policy = catalog.get(name).unwrap();
            for amount in [0.0, 1.0, 100.0, 1000.0, 12345.6] {
                assert_eq!(policy.calculate(amount), amount * policy.rate());
            }
        }
    }
}
