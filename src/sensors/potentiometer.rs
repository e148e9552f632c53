//! Potentiometer on ADC1, mapped linearly onto the buzzer duty range.

use crate::app::ports::SensorPort;
use crate::control::scale::DutyScale;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PotReading {
    pub raw: u16,
    pub duty: u32,
}

pub struct Potentiometer {
    channel: u32,
    scale: DutyScale,
}

impl Potentiometer {
    pub fn new(channel: u32, scale: DutyScale) -> Self {
        Self { channel, scale }
    }

    /// Single conversion, no averaging.
    pub fn read(&self, adc: &mut impl SensorPort) -> PotReading {
        let raw = adc.read_raw(self.channel);
        PotReading {
            raw,
            duty: self.scale.to_duty(raw),
        }
    }
}
