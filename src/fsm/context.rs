//! Per-instance context threaded through every FSM handler.
//!
//! `LedContext` is the single struct that state handlers read from and
//! write to: the validated timing, the last commanded output level, and
//! the driver capability used to reach the hardware.

use crate::app::ports::LedDriver;
use crate::config::LedConfig;
use crate::error::ConfigError;

// ---------------------------------------------------------------------------
// Output level
// ---------------------------------------------------------------------------

/// Commanded LED output. This is NOT the FSM state: it tells the driver
/// whether the LED should be lit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LedLevel {
    On,
    Off,
}

impl LedLevel {
    /// The opposite level.
    pub fn toggled(self) -> Self {
        match self {
            Self::On => Self::Off,
            Self::Off => Self::On,
        }
    }

    pub fn is_on(self) -> bool {
        self == Self::On
    }
}

// ---------------------------------------------------------------------------
// Timing
// ---------------------------------------------------------------------------

/// Hold and toggle durations, both guaranteed non-zero once built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedTiming {
    hold_ms: u32,
    toggle_ms: u32,
}

impl LedTiming {
    pub fn new(config: &LedConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            hold_ms: config.hold_ms,
            toggle_ms: config.toggle_ms,
        })
    }

    pub fn hold_ms(&self) -> u32 {
        self.hold_ms
    }

    pub fn toggle_ms(&self) -> u32 {
        self.toggle_ms
    }

    /// `false` only if the struct was corrupted after construction.
    pub fn is_valid(&self) -> bool {
        self.hold_ms > 0 && self.toggle_ms > 0
    }
}

// ---------------------------------------------------------------------------
// LedContext
// ---------------------------------------------------------------------------

/// The shared context passed to every state handler function.
pub struct LedContext<D> {
    timing: LedTiming,
    /// Last level handed to the driver; drives the next HeldDown toggle.
    output: LedLevel,
    driver: D,
}

impl<D: LedDriver> LedContext<D> {
    pub fn new(timing: LedTiming, driver: D) -> Self {
        Self {
            timing,
            output: LedLevel::Off,
            driver,
        }
    }

    /// Record `level` as the current output and command the driver.
    pub fn drive(&mut self, level: LedLevel) {
        self.output = level;
        self.driver.set_level(level);
    }

    /// Invert the current output.
    pub fn toggle(&mut self) {
        self.drive(self.output.toggled());
    }

    pub fn arm_hold_timer(&mut self) {
        self.driver.arm_timer(self.timing.hold_ms);
    }

    pub fn arm_toggle_timer(&mut self) {
        self.driver.arm_timer(self.timing.toggle_ms);
    }

    pub fn disarm_timer(&mut self) {
        self.driver.disarm_timer();
    }

    /// Fatal consistency check, run before every dispatch.
    pub fn assert_constructed(&self) {
        assert!(
            self.timing.is_valid(),
            "LED context corrupted: hold={}ms toggle={}ms",
            self.timing.hold_ms,
            self.timing.toggle_ms
        );
    }
}

impl<D> LedContext<D> {
    pub fn output(&self) -> LedLevel {
        self.output
    }

    pub fn timing(&self) -> &LedTiming {
        &self.timing
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }
}
