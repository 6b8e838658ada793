//! ledhold: press-and-hold indicator LED library.
//!
//! A press lights the LED for a hold interval; releasing early turns it
//! off, holding past the interval makes it blink until release. Each LED is
//! an independent [`app::service::LedInstance`] driven through the
//! [`app::ports::LedDriver`] port, so the core runs unchanged on target and
//! on the host test harness.

#![cfg_attr(not(test), no_std)]
#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod board;
pub mod config;
pub mod drivers;
pub mod events;
pub mod fsm;
pub mod timer;

mod error;

pub use error::{ConfigError, Error, Result};
