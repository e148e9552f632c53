//! Cold / hot status LEDs.
//!
//! Two discrete LEDs on plain GPIO outputs (configured by `hw_init`).
//!
//! ## Dual-target design
//!
//! On ESP-IDF: drives the pins via hw_init.
//! On host/test: writes go to the hw_init simulation state.

use crate::app::ports::Indicator;
use crate::drivers::hw_init;

pub struct IndicatorLeds {
    cold_pin: i32,
    hot_pin: i32,
    /// (cold, hot) as last written.
    current: (bool, bool),
}

impl IndicatorLeds {
    pub fn new(cold_pin: i32, hot_pin: i32) -> Self {
        Self {
            cold_pin,
            hot_pin,
            current: (false, false),
        }
    }

    pub fn set(&mut self, indicator: Indicator, on: bool) {
        match indicator {
            Indicator::Cold => {
                hw_init::gpio_write(self.cold_pin, on);
                self.current.0 = on;
            }
            Indicator::Hot => {
                hw_init::gpio_write(self.hot_pin, on);
                self.current.1 = on;
            }
        }
    }

    pub fn is_on(&self, indicator: Indicator) -> bool {
        match indicator {
            Indicator::Cold => self.current.0,
            Indicator::Hot => self.current.1,
        }
    }
}
