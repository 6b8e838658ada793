//! Application core: LED behaviour and its port boundary, zero I/O.
//!
//! [`service::LedInstance`] owns one state machine and its context. All
//! interaction with hardware happens through the **port traits** defined in
//! [`ports`], keeping this layer fully testable without real peripherals.

pub mod events;
pub mod ports;
pub mod service;
