//! Controller configuration.
//!
//! Every pin, threshold, timing and scale constant the controller uses lives
//! in [`ControllerConfig`]. It is built once at boot, validated once, and
//! handed to the [`Controller`](crate::app::service::Controller) by value.
//! Nothing is persisted and nothing can change it at runtime.

use serde::{Deserialize, Serialize};

use crate::control::scale::{DutyScale, TemperatureScale};
use crate::error::ConfigError;
use crate::pins;

/// Largest burst the averaging path accepts (keeps the `u32` sum exact).
pub const MAX_SAMPLE_COUNT: u32 = 1024;

// ---------------------------------------------------------------------------
// Peripheral parameter types
// ---------------------------------------------------------------------------

/// ADC input attenuation (sets the voltage range mapped to 0 – full scale).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Attenuation {
    Db0,
    Db2_5,
    Db6,
    /// ~150 mV – 2450 mV on the ESP32.
    Db12,
}

/// LEDC speed mode. High-speed mode only exists on the original ESP32.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpeedMode {
    High,
    Low,
}

/// LEDC timer clock source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClockSource {
    Auto,
    Apb,
}

/// Parameters for `configure_pwm_timer`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PwmTimerConfig {
    pub speed_mode: SpeedMode,
    pub resolution_bits: u8,
    pub frequency_hz: u32,
    pub timer_id: u32,
    pub clock_source: ClockSource,
}

/// Parameters for `configure_pwm_channel`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PwmChannelConfig {
    pub channel_id: u32,
    pub pin: i32,
    pub timer_id: u32,
    pub speed_mode: SpeedMode,
    pub initial_duty: u32,
}

// ---------------------------------------------------------------------------
// ControllerConfig
// ---------------------------------------------------------------------------

/// Immutable controller configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControllerConfig {
    // --- Indicators ---
    /// Lit below the threshold.
    pub cold_led_pin: i32,
    /// Lit above the threshold.
    pub hot_led_pin: i32,

    // --- Analog inputs ---
    pub temperature_adc_channel: u32,
    pub potentiometer_adc_channel: u32,
    pub adc_resolution_bits: u8,
    pub adc_attenuation: Attenuation,

    // --- Temperature acquisition ---
    /// Raw samples averaged per temperature reading.
    pub sample_count: u32,
    /// Largest raw ADC value (2^bits - 1).
    pub adc_full_scale: u32,
    /// Millivolts represented by `adc_full_scale`.
    pub adc_reference_mv: u32,
    /// Sensor slope (LM35: 10 mV per °C).
    pub mv_per_celsius: u32,

    // --- Actuation ---
    /// Whole degrees Celsius. Equality leaves the outputs untouched.
    pub threshold_celsius: i32,

    // --- Buzzer PWM ---
    /// Largest duty value (2^pwm_resolution_bits - 1).
    pub duty_full_scale: u32,
    pub pwm_timer: PwmTimerConfig,
    pub pwm_channel: PwmChannelConfig,

    // --- Timing ---
    /// Delay at the end of every loop iteration (milliseconds).
    pub loop_interval_ms: u32,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            // Indicators
            cold_led_pin: pins::COLD_LED_GPIO,
            hot_led_pin: pins::HOT_LED_GPIO,

            // ADC1, 12-bit, 12 dB
            temperature_adc_channel: pins::LM35_ADC_CHANNEL,
            potentiometer_adc_channel: pins::POT_ADC_CHANNEL,
            adc_resolution_bits: pins::ADC_RESOLUTION_BITS,
            adc_attenuation: Attenuation::Db12,

            // LM35 pipeline
            sample_count: 80,
            adc_full_scale: 4095,
            adc_reference_mv: 3300,
            mv_per_celsius: 10,

            threshold_celsius: 17,

            // Buzzer: LEDC timer 0 / channel 0, 13-bit @ 2 kHz
            duty_full_scale: 8191,
            pwm_timer: PwmTimerConfig {
                speed_mode: SpeedMode::High,
                resolution_bits: pins::BUZZER_PWM_RESOLUTION_BITS,
                frequency_hz: pins::BUZZER_PWM_FREQ_HZ,
                timer_id: pins::BUZZER_LEDC_TIMER,
                clock_source: ClockSource::Auto,
            },
            pwm_channel: PwmChannelConfig {
                channel_id: pins::BUZZER_LEDC_CHANNEL,
                pin: pins::BUZZER_GPIO,
                timer_id: pins::BUZZER_LEDC_TIMER,
                speed_mode: SpeedMode::High,
                initial_duty: 0,
            },

            loop_interval_ms: 800,
        }
    }
}

impl ControllerConfig {
    /// Reject values the conversion pipeline or the drivers cannot honour.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sample_count == 0 {
            return Err(ConfigError::Invalid("sample_count must be non-zero"));
        }
        if self.sample_count > MAX_SAMPLE_COUNT {
            return Err(ConfigError::Invalid("sample_count exceeds 1024"));
        }
        if !(9..=13).contains(&self.adc_resolution_bits) {
            return Err(ConfigError::Invalid("adc_resolution_bits must be 9..=13"));
        }
        if self.adc_full_scale != (1u32 << self.adc_resolution_bits) - 1 {
            return Err(ConfigError::Invalid("adc_full_scale must equal 2^adc_resolution_bits - 1"));
        }
        if self.mv_per_celsius == 0 {
            return Err(ConfigError::Invalid("mv_per_celsius must be non-zero"));
        }

        let bits = self.pwm_timer.resolution_bits;
        if !(1..=20).contains(&bits) {
            return Err(ConfigError::Invalid("pwm resolution_bits must be 1..=20"));
        }
        if self.duty_full_scale != (1u32 << bits) - 1 {
            return Err(ConfigError::Invalid("duty_full_scale must equal 2^bits - 1"));
        }

        // A full-scale sample times either numerator must fit the u32 pipeline.
        if self.adc_full_scale.checked_mul(self.adc_reference_mv).is_none() {
            return Err(ConfigError::Invalid("adc_full_scale * adc_reference_mv overflows u32"));
        }
        if self.adc_full_scale.checked_mul(self.duty_full_scale).is_none() {
            return Err(ConfigError::Invalid("adc_full_scale * duty_full_scale overflows u32"));
        }
        if self.pwm_channel.initial_duty > self.duty_full_scale {
            return Err(ConfigError::Invalid("initial_duty exceeds duty_full_scale"));
        }
        if self.pwm_timer.frequency_hz == 0 {
            return Err(ConfigError::Invalid("pwm frequency_hz must be non-zero"));
        }
        if self.pwm_channel.timer_id != self.pwm_timer.timer_id
            || self.pwm_channel.speed_mode != self.pwm_timer.speed_mode
        {
            return Err(ConfigError::Invalid("pwm channel must reference the configured timer"));
        }

        if self.cold_led_pin == self.hot_led_pin {
            return Err(ConfigError::Invalid("cold and hot LEDs share a pin"));
        }
        let buzzer = self.pwm_channel.pin;
        if buzzer == self.cold_led_pin || buzzer == self.hot_led_pin {
            return Err(ConfigError::Invalid("buzzer pin is claimed by an indicator"));
        }
        Ok(())
    }

    /// Indicator pins, in the order they are configured.
    pub fn indicator_pins(&self) -> [i32; 2] {
        [self.hot_led_pin, self.cold_led_pin]
    }

    pub fn temperature_scale(&self) -> TemperatureScale {
        TemperatureScale {
            adc_full_scale: self.adc_full_scale,
            reference_mv: self.adc_reference_mv,
            mv_per_celsius: self.mv_per_celsius,
        }
    }

    pub fn duty_scale(&self) -> DutyScale {
        DutyScale {
            adc_full_scale: self.adc_full_scale,
            duty_full_scale: self.duty_full_scale,
        }
    }
}
