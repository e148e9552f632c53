//! Port traits — the boundary between the controller and the board.
//!
//! ```text
//!   HardwareAdapter ──▶ Port trait ──▶ Controller (domain)
//! ```
//!
//! The [`Controller`](super::service::Controller) consumes these through
//! generics, so it never touches ESP-IDF directly and runs unchanged against
//! the mocks in `tests/integration/`.

use crate::config::{Attenuation, PwmChannelConfig, PwmTimerConfig};
use crate::error::ConfigError;

// ───────────────────────────────────────────────────────────────
// Peripheral port (one-shot configuration)
// ───────────────────────────────────────────────────────────────

/// Startup configuration of the four peripheral subsystems.
///
/// Every error is fatal to the caller. Implementations do not retry.
pub trait PeripheralPort {
    /// Reset `pins` and make them push-pull outputs, driven low.
    fn configure_digital_outputs(&mut self, pins: &[i32]) -> Result<(), ConfigError>;

    /// Configure one ADC1 channel. Channels share a single ADC unit.
    fn configure_analog_input(
        &mut self,
        channel: u32,
        resolution_bits: u8,
        attenuation: Attenuation,
    ) -> Result<(), ConfigError>;

    fn configure_pwm_timer(&mut self, timer: &PwmTimerConfig) -> Result<(), ConfigError>;

    fn configure_pwm_channel(&mut self, channel: &PwmChannelConfig) -> Result<(), ConfigError>;
}

// ───────────────────────────────────────────────────────────────
// Sensor port (hardware → domain)
// ───────────────────────────────────────────────────────────────

pub trait SensorPort {
    /// One raw conversion on an ADC1 channel, `0..=2^bits - 1`.
    fn read_raw(&mut self, channel: u32) -> u16;
}

// ───────────────────────────────────────────────────────────────
// Actuator port (domain → hardware)
// ───────────────────────────────────────────────────────────────

/// The two discrete status LEDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indicator {
    Cold,
    Hot,
}

pub trait ActuatorPort {
    /// Drive an indicator LED.
    fn set_indicator(&mut self, indicator: Indicator, on: bool);

    /// Write the buzzer duty and commit it to the LEDC channel.
    fn set_duty(&mut self, duty: u32);
}

// ───────────────────────────────────────────────────────────────
// Event sink (domain → console)
// ───────────────────────────────────────────────────────────────

pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
