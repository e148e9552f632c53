//! Passive piezo buzzer on an LEDC channel.
//!
//! The pin belongs to the LEDC peripheral for the lifetime of the firmware;
//! the only way to change what the buzzer does is its duty.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: set + commit via `ledc_set_duty` / `ledc_update_duty`.
//! On host/test: writes go to the hw_init simulation state.

use crate::config::{PwmChannelConfig, SpeedMode};
use crate::drivers::hw_init;

pub struct BuzzerDriver {
    speed_mode: SpeedMode,
    channel: u32,
    max_duty: u32,
    duty: u32,
}

impl BuzzerDriver {
    pub fn new(channel: &PwmChannelConfig, max_duty: u32) -> Self {
        Self {
            speed_mode: channel.speed_mode,
            channel: channel.channel_id,
            max_duty,
            duty: channel.initial_duty,
        }
    }

    /// Values above the timer's resolution are clamped before they reach
    /// the duty register.
    pub fn set_duty(&mut self, duty: u32) {
        let duty = duty.min(self.max_duty);
        hw_init::ledc_set(self.speed_mode, self.channel, duty);
        self.duty = duty;
    }

    pub fn current_duty(&self) -> u32 {
        self.duty
    }
}
