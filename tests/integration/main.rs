//! Integration test driver for `tests/integration/` submodule.
//!
//! Each `mod` below maps to a file that exercises the controller against
//! mock adapters. All tests run on the host with no hardware attached.

mod configure_tests;
mod control_loop_tests;
