//! Fee-adjusted currency conversion.

/// Rate after deducting a percentage fee. Fees of 100% or more yield zero.
pub fn effective_rate(rate: f64, fee_percent: f64) -> f64 {
    rate * (1.0 - fee_percent / 100.0).max(0.0)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conversion {
    pub amount: f64,
    pub rate: f64,
    pub fee_percent: f64,
    pub effective_rate: f64,
    pub converted: f64,
}

impl Conversion {
    pub fn compute(amount: f64, rate: f64, fee_percent: f64) -> Self {
        let effective_rate = effective_rate(rate, fee_percent);
        Conversion {
            amount,
            rate,
            fee_percent,
            effective_rate,
            converted: amount * effective_rate,
        }
    }
}
