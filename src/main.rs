//! Thermobuzz Firmware — Main Entry Point
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                  Adapters (outer ring)                   │
//! │                                                          │
//! │  HardwareAdapter            LogEventSink   SystemDelay   │
//! │  (Peripheral+Sensor+Actuator) (EventSink)  (DelayNs)     │
//! │                                                          │
//! │  ────────────── Port Trait Boundary ──────────────       │
//! │                                                          │
//! │  ┌──────────────────────────────────────────────────┐    │
//! │  │  Controller: LM35 avg → threshold → pot → duty   │    │
//! │  └──────────────────────────────────────────────────┘    │
//! └──────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use log::{error, info};

use thermobuzz::adapters::hardware::HardwareAdapter;
use thermobuzz::adapters::log_sink::LogEventSink;
use thermobuzz::adapters::time::SystemDelay;
use thermobuzz::app::service::Controller;
use thermobuzz::config::ControllerConfig;
use thermobuzz::error::ConfigError;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("Thermobuzz v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Configuration (compiled-in, immutable) ─────────────
    let config = ControllerConfig::default();
    let config_json = serde_json::to_string(&config)
        .map_err(|e| anyhow::anyhow!("config serialisation failed: {e}"))?;
    info!("Config: {}", config_json);

    // ── 3. Construct adapters + controller ────────────────────
    let mut hw = HardwareAdapter::new(&config);
    let mut log_sink = LogEventSink::new();
    let mut delay = SystemDelay::new();

    // ── 4. Validation + peripheral configuration ──────────────
    let mut controller = match Controller::start(config, &mut hw, &mut log_sink) {
        Ok(c) => c,
        Err(e) => halt(e),
    };

    // ── 5. Control loop ───────────────────────────────────────
    controller.run(&mut hw, &mut log_sink, &mut delay)
}

/// Invalid config or a wiring/hardware fault. Halt, no retry.
fn halt(e: ConfigError) -> ! {
    error!("Configuration failed: {} — halting", e);
    loop {
        esp_idf_hal::delay::FreeRtos::delay_ms(1_000);
    }
}
