// Calculation contexts that own a rate policy and delegate to it.
//
// `Payment` pairs a salary with a tax policy, `Order` pairs an order value
// with a freight policy. Both take their policy at construction and never
// reassign it; swapping behavior means building a new context with a
// different policy.

pub mod fixed;

pub use fixed::FixedRateOrder;

use crate::policy::RatePolicy;
use tracing::debug;

/// A payment whose tax is computed by a pluggable policy.
pub struct Payment {
    policy: Box<dyn RatePolicy>,
    discount: f64,
}

impl Payment {
    /// Resolves the policy's optional discount once: absent or negative
    /// values normalize to zero, never an error.
    pub fn new(policy: Box<dyn RatePolicy>) -> Self {
        let discount = policy.discount().filter(|d| *d >= 0.0).unwrap_or(0.0);
        Self { policy, discount }
    }

    pub fn calculate_tax(&self, salary: f64) -> f64 {
        let tax = self.policy.calculate(salary);
        debug!(policy = self.policy.name(), salary, tax, "calculated tax");
        tax
    }

    /// The tax policy this payment was built with.
    pub fn policy(&self) -> &dyn RatePolicy {
        self.policy.as_ref()
    }

    pub fn discount(&self) -> f64 {
        self.discount
    }
}

/// An order whose freight is computed by a pluggable policy.
pub struct Order {
    policy: Box<dyn RatePolicy>,
}

impl Order {
    pub fn new(policy: Box<dyn RatePolicy>) -> Self {
        Self { policy }
    }

    pub fn calculate_freight(&self, value: f64) -> f64 {
        let freight = self.policy.calculate(value);
        debug!(policy = self.policy.name(), value, freight, "calculated freight");
        freight
    }

    /// The freight policy this order was built with.
    pub fn policy(&self) -> &dyn RatePolicy {
        self.policy.as_ref()
    }
}
