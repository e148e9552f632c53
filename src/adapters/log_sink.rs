//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing controller events to the ESP-IDF
//! logger (UART console in production).

use core::fmt;

use log::{debug, info};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// The per-iteration console line: `Temp : <celsius>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemperatureLine(pub i32);

impl fmt::Display for TemperatureLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Temp : {}", self.0)
    }
}

/// Adapter that logs every [`AppEvent`] to the serial console.
pub struct LogEventSink;

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Configured(step) => {
                info!("{}: configuration was successful", step.tag());
            }
            AppEvent::Temperature(celsius) => {
                info!("{}", TemperatureLine(*celsius));
            }
            AppEvent::IndicatorsChanged(s) => {
                info!(
                    "LED | cold={} hot={} buzzer={}",
                    if s.cold { "ON" } else { "off" },
                    if s.hot { "ON" } else { "off" },
                    if s.buzzer { "ON" } else { "off" },
                );
            }
            AppEvent::DutyWritten(duty) => {
                debug!("PWM | duty={}", duty);
            }
        }
    }
}
