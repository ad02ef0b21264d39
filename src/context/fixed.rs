/// The conditional anti-pattern the Strategy examples replace.
///
/// Instead of holding a policy, `FixedRateOrder` hardcodes one method per
/// freight rate. Adding a rate means editing this type; the Strategy version
/// adds a policy instead. Kept here so tests can show both produce the same
/// numbers.
pub struct FixedRateOrder {
    value: f64,
}

impl FixedRateOrder {
    pub fn new(value: f64) -> Self {
        Self { value }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn set_value(&mut self, value: f64) {
        self.value = value;
    }

    pub fn common_freight(&self) -> f64 {
        self.value * 0.05
    }

    pub fn express_freight(&self) -> f64 {
        self.value * 0.1
    }
}
