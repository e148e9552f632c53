//! Adapters — concrete implementations of the port traits.
//!
//! | Adapter    | Implements        | Connects to                |
//! |------------|-------------------|----------------------------|
//! | `hardware` | PeripheralPort    | ESP32 GPIO, ADC1, LEDC init|
//! |            | SensorPort        | ESP32 ADC1 oneshot         |
//! |            | ActuatorPort      | ESP32 GPIO, LEDC duty      |
//! | `log_sink` | EventSink         | Serial log output          |
//! | `time`     | DelayNs           | FreeRTOS tick delay        |

pub mod hardware;
pub mod log_sink;
pub mod time;
