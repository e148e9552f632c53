//! GPIO / peripheral assignments for the Thermobuzz board (ESP32-WROOM-32).
//!
//! Single source of truth for the defaults in
//! [`ControllerConfig`](crate::config::ControllerConfig). Drivers never read
//! these directly; they receive the pins through the configuration.

// ---------------------------------------------------------------------------
// Status indicators (discrete LEDs, active HIGH)
// ---------------------------------------------------------------------------

/// Blue LED: lit while the reading is below the threshold.
pub const COLD_LED_GPIO: i32 = 2;
/// Red LED: lit while the reading is above the threshold.
pub const HOT_LED_GPIO: i32 = 4;

// ---------------------------------------------------------------------------
// Buzzer (passive piezo on an LEDC channel)
// ---------------------------------------------------------------------------

/// Owned by the LEDC peripheral. Never toggled as a plain GPIO.
pub const BUZZER_GPIO: i32 = 23;

// ---------------------------------------------------------------------------
// Analog inputs (ADC1)
// ---------------------------------------------------------------------------

/// Potentiometer wiper. ADC1 channel 0 (GPIO 36 / SENSOR_VP).
pub const POT_ADC_CHANNEL: u32 = 0;
/// LM35 output (10 mV/°C). ADC1 channel 6 (GPIO 34).
pub const LM35_ADC_CHANNEL: u32 = 6;

/// 12-bit conversions: 0 – 4095.
pub const ADC_RESOLUTION_BITS: u8 = 12;

// ---------------------------------------------------------------------------
// PWM configuration
// ---------------------------------------------------------------------------

pub const BUZZER_LEDC_TIMER: u32 = 0;
pub const BUZZER_LEDC_CHANNEL: u32 = 0;
/// 13-bit duty: 0 – 8191.
pub const BUZZER_PWM_RESOLUTION_BITS: u8 = 13;
/// Audible tone for a passive piezo.
pub const BUZZER_PWM_FREQ_HZ: u32 = 2_000;
