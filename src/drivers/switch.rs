//! Switch edge detector.
//!
//! ## Hardware
//!
//! Momentary switch on a digital input, already debounced (in hardware or
//! by the sampling layer). `sample()` is called from the main loop at tick
//! rate and reports level *changes* as press/release events.
//!
//! | Previous | Now      | Event            |
//! |----------|----------|------------------|
//! | released | pressed  | `SwitchPressed`  |
//! | pressed  | released | `SwitchReleased` |
//! | same     | same     | —                |

use embedded_hal::digital::InputPin;
use log::warn;

use crate::app::events::LedEvent;
use crate::drivers::led_pin::Polarity;

pub struct SwitchInput<P> {
    pin: P,
    polarity: Polarity,
    pressed: bool,
}

impl<P: InputPin> SwitchInput<P> {
    /// Wrap `pin`, assuming the switch starts released.
    pub fn new(pin: P, polarity: Polarity) -> Self {
        Self {
            pin,
            polarity,
            pressed: false,
        }
    }

    /// Read the pin and return an edge event, if the level changed.
    /// Read errors are logged and reported as "no edge".
    pub fn sample(&mut self) -> Option<LedEvent> {
        let high = match self.pin.is_high() {
            Ok(h) => h,
            Err(e) => {
                warn!("switch: read failed: {:?}", e);
                return None;
            }
        };
        let pressed = match self.polarity {
            Polarity::ActiveHigh => high,
            Polarity::ActiveLow => !high,
        };

        if pressed == self.pressed {
            return None;
        }
        self.pressed = pressed;
        Some(if pressed {
            LedEvent::SwitchPressed
        } else {
            LedEvent::SwitchReleased
        })
    }

    /// Last sampled switch position.
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub fn pin_mut(&mut self) -> &mut P {
        &mut self.pin
    }
}
