//! GPIO-backed LED output.
//!
//! Maps the commanded [`LedLevel`] onto a digital output through the
//! board's wiring polarity. Works with any `embedded-hal` 1.0 output pin.

use embedded_hal::digital::{OutputPin, PinState};
use log::warn;

use crate::fsm::context::LedLevel;

/// How the LED (or switch) is wired relative to the pin level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Polarity {
    /// Pin HIGH = LED lit / switch pressed.
    #[default]
    ActiveHigh,
    /// Pin LOW = LED lit / switch pressed (sinking LED, pull-up switch).
    ActiveLow,
}

impl Polarity {
    /// Pin state that represents "active" for this wiring.
    pub fn active_state(self) -> PinState {
        match self {
            Self::ActiveHigh => PinState::High,
            Self::ActiveLow => PinState::Low,
        }
    }

    /// Pin state for the given LED level.
    pub fn pin_state(self, level: LedLevel) -> PinState {
        let active = self.active_state();
        if level.is_on() { active } else { !active }
    }
}

/// An LED on a single output pin.
pub struct PinLed<P> {
    pin: P,
    polarity: Polarity,
    level: LedLevel,
}

impl<P: OutputPin> PinLed<P> {
    /// Wrap `pin`. The pin is not touched until the first [`set`](Self::set).
    pub fn new(pin: P, polarity: Polarity) -> Self {
        Self {
            pin,
            polarity,
            level: LedLevel::Off,
        }
    }

    /// Drive the LED. Pin errors are logged; the level is recorded anyway.
    pub fn set(&mut self, level: LedLevel) {
        if let Err(e) = self.pin.set_state(self.polarity.pin_state(level)) {
            warn!("led_pin: failed to drive {:?}: {:?}", level, e);
        }
        self.level = level;
    }

    /// Last level commanded through this driver.
    pub fn level(&self) -> LedLevel {
        self.level
    }

    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    pub fn pin(&self) -> &P {
        &self.pin
    }

    /// Release the underlying pin.
    pub fn into_inner(self) -> P {
        self.pin
    }
}
