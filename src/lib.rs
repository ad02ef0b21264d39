/// Rate Strategy
///
/// Strategy-pattern demonstrations: pluggable rate policies (payroll tax,
/// shipping freight) applied to an amount by a context object that owns the
/// policy, plus the hardcoded anti-pattern they replace.
pub mod cli;
pub mod context;
pub mod error;
pub mod logging;
pub mod policy;
pub mod report;

pub use context::{FixedRateOrder, Order, Payment};
pub use error::{Error, Result};
pub use policy::{PolicyCatalog, PolicyKind, RatePolicy};
pub use report::CalculationReport;
