/// Round to one decimal place, with halves going up (`2.25 -> 2.3`, `-2.25 -> -2.2`).
pub fn round_tenth(value: f64) -> f64 {
    (value * 10.0 + 0.5).floor() / 10.0
}

/// Dividend per share over current price, as a percentage to one decimal place.
///
/// Returns `None` when the price is zero, negative or not a number, so an
/// empty quote never turns into an infinite yield.
pub fn realized_yield(current_price: f64, dividend: f64) -> Option<f64> {
    if !(current_price > 0.0) || !dividend.is_finite() {
        return None;
    }
    Some(round_tenth(dividend / current_price * 100.0))
}

/// The price at which the current dividend would pay `desired_yield` percent.
///
/// Built from the already-rounded realized yield. `None` stands for "not
/// applicable": no desired yield was set, or the realized yield is undefined.
pub fn target_price(
    current_price: f64,
    realized_yield: Option<f64>,
    desired_yield: f64,
) -> Option<f64> {
    if desired_yield == 0.0 {
        return None;
    }
    let realized = realized_yield?;
    Some(round_tenth(current_price * realized / desired_yield))
}

/// Yield figures shown on a single brand card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YieldMetrics {
    pub realized_yield: Option<f64>,
    pub desired_yield: f64,
    pub target_price: Option<f64>,
}

impl YieldMetrics {
    pub fn compute(current_price: f64, dividend: f64, desired_yield: f64) -> Self {
        let realized = realized_yield(current_price, dividend);
        Self {
            realized_yield: realized,
            desired_yield,
            target_price: target_price(current_price, realized, desired_yield),
        }
    }

    /// A brand meets its target once the realized yield reaches the desired one.
    pub fn meets_target(&self) -> bool {
        matches!(self.realized_yield, Some(realized) if realized >= self.desired_yield)
    }
}
