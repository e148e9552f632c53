//! LM35 precision temperature sensor (10 mV/°C, 0 mV at 0 °C).
//!
//! The output is read on ADC1 through the [`SensorPort`]. Each reading is a
//! back-to-back burst of `sample_count` raw conversions with no delay in
//! between, averaged with truncation and then scaled to whole degrees.

use crate::app::ports::SensorPort;
use crate::control::scale::{self, TemperatureScale};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemperatureReading {
    /// Truncated mean of the burst.
    pub avg_raw: u32,
    pub millivolts: u32,
    pub celsius: i32,
}

pub struct TemperatureSensor {
    channel: u32,
    sample_count: u32,
    scale: TemperatureScale,
}

impl TemperatureSensor {
    /// `sample_count` must be non-zero (checked by `ControllerConfig::validate`).
    pub fn new(channel: u32, sample_count: u32, scale: TemperatureScale) -> Self {
        Self {
            channel,
            sample_count,
            scale,
        }
    }

    pub fn read(&self, adc: &mut impl SensorPort) -> TemperatureReading {
        let sum: u32 = (0..self.sample_count)
            .map(|_| u32::from(adc.read_raw(self.channel)))
            .sum();
        let avg_raw = scale::average(sum, self.sample_count);

        TemperatureReading {
            avg_raw,
            millivolts: self.scale.to_millivolts(avg_raw),
            celsius: self.scale.to_celsius(avg_raw),
        }
    }
}
