//! GPIO-level drivers for LED outputs and switch inputs.

pub mod led_pin;
pub mod switch;
