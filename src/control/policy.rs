//! Threshold actuation policy.
//!
//! Three-way rule with no hysteresis band:
//!
//! | reading vs threshold | cold LED | hot LED | buzzer |
//! |----------------------|----------|---------|--------|
//! | above                | off      | on      | on     |
//! | below                | on       | off     | off    |
//! | equal                | unchanged| unchanged| unchanged |
//!
//! The equal case returns `None` and the controller leaves every output as
//! it was, including the power-on state if nothing has been decided yet.

/// Desired indicator outputs for one reading.
///
/// `buzzer` is the logical alarm flag. The buzzer pin itself belongs to the
/// LEDC channel and only ever sees the potentiometer duty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndicatorState {
    pub cold: bool,
    pub hot: bool,
    pub buzzer: bool,
}

impl IndicatorState {
    pub const HOT: Self = Self {
        cold: false,
        hot: true,
        buzzer: true,
    };

    pub const COLD: Self = Self {
        cold: true,
        hot: false,
        buzzer: false,
    };
}

/// Decide the indicator outputs for `celsius`, or `None` to hold.
pub fn evaluate(celsius: i32, threshold_celsius: i32) -> Option<IndicatorState> {
    use core::cmp::Ordering;

    match celsius.cmp(&threshold_celsius) {
        Ordering::Greater => Some(IndicatorState::HOT),
        Ordering::Less => Some(IndicatorState::COLD),
        Ordering::Equal => None,
    }
}
