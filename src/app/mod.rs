//! Application core — the read → average → map → actuate loop.
//!
//! All hardware access goes through the **port traits** in [`ports`], which
//! keeps this layer testable without a board attached.

pub mod events;
pub mod ports;
pub mod service;
