//! Hardware adapter — bridges the ESP32 peripherals to the port traits.
//!
//! Owns the actuator drivers and exposes the board through
//! [`PeripheralPort`], [`SensorPort`] and [`ActuatorPort`]. This is the only
//! module the controller reaches hardware through. On non-espidf targets the
//! underlying drivers use the cfg-gated simulation in `hw_init`.

use crate::app::ports::{ActuatorPort, Indicator, PeripheralPort, SensorPort};
use crate::config::{Attenuation, ControllerConfig, PwmChannelConfig, PwmTimerConfig};
use crate::drivers::buzzer::BuzzerDriver;
use crate::drivers::hw_init;
use crate::drivers::indicators::IndicatorLeds;
use crate::error::ConfigError;

/// Concrete adapter that combines all hardware behind port traits.
pub struct HardwareAdapter {
    leds: IndicatorLeds,
    buzzer: BuzzerDriver,
}

impl HardwareAdapter {
    pub fn new(config: &ControllerConfig) -> Self {
        Self {
            leds: IndicatorLeds::new(config.cold_led_pin, config.hot_led_pin),
            buzzer: BuzzerDriver::new(&config.pwm_channel, config.duty_full_scale),
        }
    }

    pub fn indicator(&self, indicator: Indicator) -> bool {
        self.leds.is_on(indicator)
    }

    pub fn duty(&self) -> u32 {
        self.buzzer.current_duty()
    }
}

// ── PeripheralPort implementation ─────────────────────────────

impl PeripheralPort for HardwareAdapter {
    fn configure_digital_outputs(&mut self, pins: &[i32]) -> Result<(), ConfigError> {
        hw_init::configure_outputs(pins)
    }

    fn configure_analog_input(
        &mut self,
        channel: u32,
        resolution_bits: u8,
        attenuation: Attenuation,
    ) -> Result<(), ConfigError> {
        hw_init::configure_adc_channel(channel, resolution_bits, attenuation)
    }

    fn configure_pwm_timer(&mut self, timer: &PwmTimerConfig) -> Result<(), ConfigError> {
        hw_init::configure_ledc_timer(timer)
    }

    fn configure_pwm_channel(&mut self, channel: &PwmChannelConfig) -> Result<(), ConfigError> {
        hw_init::configure_ledc_channel(channel)
    }
}

// ── SensorPort implementation ─────────────────────────────────

impl SensorPort for HardwareAdapter {
    fn read_raw(&mut self, channel: u32) -> u16 {
        hw_init::adc1_read(channel)
    }
}

// ── ActuatorPort implementation ───────────────────────────────

impl ActuatorPort for HardwareAdapter {
    fn set_indicator(&mut self, indicator: Indicator, on: bool) {
        self.leds.set(indicator, on);
    }

    fn set_duty(&mut self, duty: u32) {
        self.buzzer.set_duty(duty);
    }
}
