//! Outbound controller events.
//!
//! The [`Controller`](super::service::Controller) emits these through the
//! [`EventSink`](super::ports::EventSink) port; the log adapter turns them
//! into console lines.

use crate::control::policy::IndicatorState;

/// One of the startup configuration steps, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigStep {
    Indicators,
    PotentiometerAdc,
    TemperatureAdc,
    BuzzerTimer,
    BuzzerChannel,
}

impl ConfigStep {
    /// Log tag printed with the step.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Indicators => "LED",
            Self::PotentiometerAdc => "ADC_POT",
            Self::TemperatureAdc => "ADC_LM35",
            Self::BuzzerTimer => "TIMER_BUZ",
            Self::BuzzerChannel => "CHANNEL_BUZ",
        }
    }
}

/// Structured events emitted by the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// A configuration step succeeded.
    Configured(ConfigStep),

    /// A temperature reading, whole °C. Emitted once per iteration.
    Temperature(i32),

    /// The policy changed the indicator outputs.
    IndicatorsChanged(IndicatorState),

    /// A duty value was written and committed.
    DutyWritten(u32),
}
