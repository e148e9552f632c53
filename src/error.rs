//! Error type for the Thermobuzz firmware.
//!
//! Peripheral configuration is the only fallible phase. Once the four
//! subsystems are configured, sensor reads and duty writes are treated as
//! total, so a single `Copy` enum covers every failure the firmware can
//! report. Every variant is fatal: the entry point logs it and halts.

use core::fmt;

/// A peripheral or configuration value could not be set up.
///
/// Driver variants carry the raw `esp_err_t` returned by ESP-IDF.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// `gpio_reset_pin` / `gpio_config` failed for the indicator outputs.
    Gpio(i32),
    /// ADC1 oneshot unit creation or channel configuration failed.
    Adc(i32),
    /// `ledc_timer_config` failed.
    PwmTimer(i32),
    /// `ledc_channel_config` failed.
    PwmChannel(i32),
    /// A [`ControllerConfig`](crate::config::ControllerConfig) field is out of range.
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gpio(rc) => write!(f, "GPIO output config failed (rc={rc})"),
            Self::Adc(rc) => write!(f, "ADC1 config failed (rc={rc})"),
            Self::PwmTimer(rc) => write!(f, "LEDC timer config failed (rc={rc})"),
            Self::PwmChannel(rc) => write!(f, "LEDC channel config failed (rc={rc})"),
            Self::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl core::error::Error for ConfigError {}

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, ConfigError>;
