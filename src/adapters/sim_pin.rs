//! Simulated GPIO for host runs.
//!
//! An infallible output pin that remembers its level and logs each edge,
//! so the LED behaviour can be watched without hardware.

use core::convert::Infallible;

use embedded_hal::digital::{ErrorType, OutputPin};
use log::info;

#[derive(Debug)]
pub struct SimOutputPin {
    label: &'static str,
    high: bool,
    edges: u32,
}

impl SimOutputPin {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            high: false,
            edges: 0,
        }
    }

    pub fn is_high(&self) -> bool {
        self.high
    }

    /// Number of level changes seen so far.
    pub fn edges(&self) -> u32 {
        self.edges
    }

    fn write(&mut self, high: bool) {
        if high != self.high {
            self.edges += 1;
            info!("PIN   | {} -> {}", self.label, if high { "HIGH" } else { "LOW" });
        }
        self.high = high;
    }
}

impl ErrorType for SimOutputPin {
    type Error = Infallible;
}

impl OutputPin for SimOutputPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.write(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.write(true);
        Ok(())
    }
}
