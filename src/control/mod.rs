//! Pure control logic: numeric conversions and the actuation policy.
//!
//! Nothing in here touches hardware; the controller feeds it raw samples and
//! applies whatever it returns through the actuator port.

pub mod policy;
pub mod scale;
