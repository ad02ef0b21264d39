use crate::policy::{PolicyKind, RatePolicy};

/// Common (standard) freight: 5% of the order value.
#[derive(Debug)]
pub struct CommonFreight;

impl Default for CommonFreight {
    fn default() -> Self {
        Self::new()
    }
}

impl CommonFreight {
    pub fn new() -> Self {
        Self
    }
}

impl RatePolicy for CommonFreight {
    fn name(&self) -> &'static str {
        "common"
    }

    fn kind(&self) -> PolicyKind {
        PolicyKind::Freight
    }

    fn rate(&self) -> f64 {
        0.05
    }
}

/// Express freight: 10% of the order value.
#[derive(Debug)]
pub struct ExpressFreight;

impl Default for ExpressFreight {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpressFreight {
    pub fn new() -> Self {
        Self
    }
}

impl RatePolicy for ExpressFreight {
    fn name(&self) -> &'static str {
        "express"
    }

    fn kind(&self) -> PolicyKind {
        PolicyKind::Freight
    }

    fn rate(&self) -> f64 {
        0.1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_freight_rate() {
        let policy = CommonFreight::new();
        assert_eq!(policy.rate(), 0.05);
        assert_eq!(policy.calculate(100.0), 5.0);
    }

    #[test]
    fn test_express_freight_rate() {
        let policy = ExpressFreight::new();
        assert_eq!(policy.rate(), 0.1);
        assert_eq!(policy.calculate(100.0), 10.0);
    }

    #[test]
    fn test_freight_policies_have_no_discount() {
        assert_eq!(CommonFreight::new().discount(), None);
        assert_eq!(ExpressFreight::new().discount(), None);
    }
}
