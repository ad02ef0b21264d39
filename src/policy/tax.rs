use crate::policy::{PolicyKind, RatePolicy};

/// CLT payroll tax: 20% of the salary.
#[derive(Debug)]
pub struct CltTax;

impl Default for CltTax {
    fn default() -> Self {
        Self::new()
    }
}

impl CltTax {
    pub fn new() -> Self {
        Self
    }
}

impl RatePolicy for CltTax {
    fn name(&self) -> &'static str {
        "clt"
    }

    fn kind(&self) -> PolicyKind {
        PolicyKind::Tax
    }

    fn rate(&self) -> f64 {
        0.2
    }
}

/// PJ payroll tax: 10% of the invoiced amount.
#[derive(Debug)]
pub struct PjTax;

impl Default for PjTax {
    fn default() -> Self {
        Self::new()
    }
}

impl PjTax {
    pub fn new() -> Self {
        Self
    }
}

impl RatePolicy for PjTax {
    fn name(&self) -> &'static str {
        "pj"
    }

    fn kind(&self) -> PolicyKind {
        PolicyKind::Tax
    }

    fn rate(&self) -> f64 {
        0.1
    }
}

/// Internship payroll tax: 5%, with an advertised discount allowance.
///
/// The discount is the one optional policy attribute; contexts read it once
/// at construction and treat negative values as zero.
#[derive(Debug)]
pub struct InternshipTax {
    discount: f64,
}

impl Default for InternshipTax {
    fn default() -> Self {
        Self::new()
    }
}

impl InternshipTax {
    pub fn new() -> Self {
        Self { discount: 0.0 }
    }

    pub fn with_discount(discount: f64) -> Self {
        Self { discount }
    }
}

impl RatePolicy for InternshipTax {
    fn name(&self) -> &'static str {
        "internship"
    }

    fn kind(&self) -> PolicyKind {
        PolicyKind::Tax
    }

    fn rate(&self) -> f64 {
        0.05
    }

    fn discount(&self) -> Option<f64> {
        Some(self.discount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clt_rate() {
        let policy = CltTax::new();
        assert_eq!(policy.rate(), 0.2);
        assert_eq!(policy.calculate(1000.0), 200.0);
    }

    #[test]
    fn test_pj_rate() {
        let policy = PjTax::new();
        assert_eq!(policy.rate(), 0.1);
        assert_eq!(policy.calculate(1000.0), 100.0);
    }

    #[test]
    fn test_internship_rate() {
        let policy = InternshipTax::new();
        assert_eq!(policy.rate(), 0.05);
        assert_eq!(policy.calculate(1000.0), 50.0);
    }

    #[test]
    fn test_tax_policies_have_no_discount_by_default() {
        assert_eq!(CltTax::new().discount(), None);
        assert_eq!(PjTax::new().discount(), None);
        assert_eq!(InternshipTax::new().discount(), Some(0.0));
    }

    #[test]
    fn test_internship_discount_is_exposed() {
        let policy = InternshipTax::with_discount(25.0);
        assert_eq!(policy.discount(), Some(25.0));
    }

    #[test]
    fn test_calculate_on_zero_amount() {
        assert_eq!(CltTax::new().calculate(0.0), 0.0);
        assert_eq!(PjTax::new().calculate(0.0), 0.0);
        assert_eq!(InternshipTax::new().calculate(0.0), 0.0);
    }
}
