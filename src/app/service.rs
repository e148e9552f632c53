//! Controller — the single control loop.
//!
//! [`Controller`] owns the configuration and the sensor front-ends. All I/O
//! flows through port traits passed in at call sites.
//!
//! ```text
//!  PeripheralPort ──▶ configure()   (once, fatal on error)
//!
//!  SensorPort ──▶ ┌──────────────────────────────┐ ──▶ EventSink
//!                 │ tick: temp → policy → duty   │
//! ActuatorPort ◀──└──────────────────────────────┘
//!                      step = tick + delay, run = loop { step }
//! ```

use embedded_hal::delay::DelayNs;
use log::{debug, info};

use crate::config::ControllerConfig;
use crate::control::policy::{self, IndicatorState};
use crate::error::ConfigError;
use crate::sensors::potentiometer::Potentiometer;
use crate::sensors::temperature::{TemperatureReading, TemperatureSensor};

use super::events::{AppEvent, ConfigStep};
use super::ports::{ActuatorPort, EventSink, Indicator, PeripheralPort, SensorPort};

/// Outcome of one loop iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleReport {
    pub temperature: TemperatureReading,
    /// `None` when the reading sat exactly on the threshold.
    pub indicators: Option<IndicatorState>,
    pub duty: u32,
}

pub struct Controller {
    config: ControllerConfig,
    thermometer: TemperatureSensor,
    pot: Potentiometer,
    /// Last state written by the policy; `None` until the first decision.
    indicators: Option<IndicatorState>,
    cycle_count: u64,
}

impl Controller {
    /// Validate `config` and build the sensor front-ends from it.
    pub fn new(config: ControllerConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let thermometer = TemperatureSensor::new(
            config.temperature_adc_channel,
            config.sample_count,
            config.temperature_scale(),
        );
        let pot = Potentiometer::new(config.potentiometer_adc_channel, config.duty_scale());

        Ok(Self {
            config,
            thermometer,
            pot,
            indicators: None,
            cycle_count: 0,
        })
    }

    // ── Startup ───────────────────────────────────────────────

    /// [`new`](Self::new) followed by [`configure`](Self::configure). An
    /// invalid config fails before any peripheral is touched.
    pub fn start(
        config: ControllerConfig,
        periph: &mut impl PeripheralPort,
        sink: &mut impl EventSink,
    ) -> Result<Self, ConfigError> {
        let controller = Self::new(config)?;
        controller.configure(periph, sink)?;
        Ok(controller)
    }

    /// Configure indicators, both ADC channels, the PWM timer and the PWM
    /// channel, in that order. Stops at the first failure.
    pub fn configure(
        &self,
        periph: &mut impl PeripheralPort,
        sink: &mut impl EventSink,
    ) -> Result<(), ConfigError> {
        let c = &self.config;

        periph.configure_digital_outputs(&c.indicator_pins())?;
        sink.emit(&AppEvent::Configured(ConfigStep::Indicators));

        periph.configure_analog_input(
            c.potentiometer_adc_channel,
            c.adc_resolution_bits,
            c.adc_attenuation,
        )?;
        sink.emit(&AppEvent::Configured(ConfigStep::PotentiometerAdc));

        periph.configure_analog_input(
            c.temperature_adc_channel,
            c.adc_resolution_bits,
            c.adc_attenuation,
        )?;
        sink.emit(&AppEvent::Configured(ConfigStep::TemperatureAdc));

        periph.configure_pwm_timer(&c.pwm_timer)?;
        sink.emit(&AppEvent::Configured(ConfigStep::BuzzerTimer));

        periph.configure_pwm_channel(&c.pwm_channel)?;
        sink.emit(&AppEvent::Configured(ConfigStep::BuzzerChannel));

        info!("Controller configured (threshold={}°C)", c.threshold_celsius);
        Ok(())
    }

    // ── Loop body ─────────────────────────────────────────────

    /// Burst-sample the LM35 and convert to whole °C.
    pub fn read_temperature(&self, adc: &mut impl SensorPort) -> TemperatureReading {
        self.thermometer.read(adc)
    }

    /// Apply the threshold policy. A reading equal to the threshold writes
    /// nothing and returns `None`.
    pub fn actuate(
        &mut self,
        celsius: i32,
        hw: &mut impl ActuatorPort,
        sink: &mut impl EventSink,
    ) -> Option<IndicatorState> {
        let state = policy::evaluate(celsius, self.config.threshold_celsius)?;

        hw.set_indicator(Indicator::Cold, state.cold);
        hw.set_indicator(Indicator::Hot, state.hot);

        if self.indicators != Some(state) {
            debug!(
                "Indicators: cold={} hot={} buzzer={}",
                state.cold, state.hot, state.buzzer
            );
            sink.emit(&AppEvent::IndicatorsChanged(state));
        }
        self.indicators = Some(state);
        Some(state)
    }

    /// One iteration without the trailing delay:
    /// temperature → log → actuate → potentiometer → duty.
    pub fn tick(
        &mut self,
        hw: &mut (impl SensorPort + ActuatorPort),
        sink: &mut impl EventSink,
    ) -> CycleReport {
        self.cycle_count += 1;

        let temperature = self.read_temperature(hw);
        sink.emit(&AppEvent::Temperature(temperature.celsius));

        let indicators = self.actuate(temperature.celsius, hw, sink);

        let pot = self.pot.read(hw);
        hw.set_duty(pot.duty);
        sink.emit(&AppEvent::DutyWritten(pot.duty));

        CycleReport {
            temperature,
            indicators,
            duty: pot.duty,
        }
    }

    /// One full iteration: [`tick`](Self::tick) then the fixed loop delay.
    pub fn step(
        &mut self,
        hw: &mut (impl SensorPort + ActuatorPort),
        sink: &mut impl EventSink,
        delay: &mut impl DelayNs,
    ) -> CycleReport {
        let report = self.tick(hw, sink);
        delay.delay_ms(self.config.loop_interval_ms);
        report
    }

    /// Run forever. There is no exit path.
    pub fn run(
        &mut self,
        hw: &mut (impl SensorPort + ActuatorPort),
        sink: &mut impl EventSink,
        delay: &mut impl DelayNs,
    ) -> ! {
        info!(
            "Entering control loop ({} ms interval)",
            self.config.loop_interval_ms
        );
        loop {
            self.step(hw, sink, delay);
        }
    }

    // ── Accessors ─────────────────────────────────────────────

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Indicator outputs as last written, `None` before the first decision.
    pub fn indicators(&self) -> Option<IndicatorState> {
        self.indicators
    }

    pub fn cycle_count(&self) -> u64 {
        self.cycle_count
    }
}
