//! Analog sensor front-ends: the LM35 thermometer and the pitch potentiometer.
//!
//! Both read raw counts through [`SensorPort`](crate::app::ports::SensorPort)
//! and convert them with the scales in [`control::scale`](crate::control::scale).

pub mod potentiometer;
pub mod temperature;
