use rust_decimal::Decimal;

/// Monetary increment every computed tax amount is rounded up to (5 cents).
pub const TAX_ROUNDING_STEP: Decimal = Decimal::from_parts(5, 0, 0, false, 2);

/// Rounds `amount` up to the next multiple of `step`, expressed at the
/// decimal precision implied by `step` (two digits for the 0.05 step).
///
/// Ceiling semantics: the result never rounds down, so a raw tax of 0.471
/// becomes 0.50 and 0.001 becomes 0.05. An amount already on a step
/// boundary is returned unchanged.
pub fn round_up_nearest(amount: Decimal, step: Decimal) -> Decimal {
    let stepped = (amount / step).ceil() * step;
    stepped.round_dp(step_precision(step))
}

/// Number of decimal digits implied by `step`: the smallest `n` such that
/// `step * 10^n >= 1` (0.05 -> 2, 0.1 -> 1, 1 -> 0).
fn step_precision(step: Decimal) -> u32 {
    let mut digits = 0u32;
    let mut scaled = step;
    while scaled < Decimal::ONE && digits < 28 {
        scaled *= Decimal::TEN;
        digits += 1;
    }
    digits
}
