//! Mock hardware adapters for integration tests.
//!
//! Records every driver call so tests can assert on the full command
//! history without touching real GPIO or timer registers.

use std::convert::Infallible;

use embedded_hal::digital::{ErrorType, OutputPin};
use ledhold::app::events::AppEvent;
use ledhold::app::ports::{EventSink, LedDriver};
use ledhold::fsm::context::LedLevel;

// ── Driver call record ────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverCall {
    SetLevel(LedLevel),
    ArmTimer(u32),
    DisarmTimer,
}

// ── MockDriver ────────────────────────────────────────────────

/// Records calls and tracks the resulting LED level and timer status.
pub struct MockDriver {
    pub calls: Vec<DriverCall>,
}

impl MockDriver {
    pub fn new() -> Self {
        Self { calls: Vec::new() }
    }

    pub fn take_calls(&mut self) -> Vec<DriverCall> {
        std::mem::take(&mut self.calls)
    }

    /// Duration of the pending timer: the last arm not followed by a disarm.
    pub fn armed(&self) -> Option<u32> {
        self.calls.iter().rev().find_map(|c| match c {
            DriverCall::ArmTimer(ms) => Some(Some(*ms)),
            DriverCall::DisarmTimer => Some(None),
            DriverCall::SetLevel(_) => None,
        })?
    }
}

impl Default for MockDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl LedDriver for MockDriver {
    fn set_level(&mut self, level: LedLevel) {
        self.calls.push(DriverCall::SetLevel(level));
    }

    fn arm_timer(&mut self, ms: u32) {
        self.calls.push(DriverCall::ArmTimer(ms));
    }

    fn disarm_timer(&mut self) {
        self.calls.push(DriverCall::DisarmTimer);
    }
}

// ── MockPin ───────────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct MockPin {
    pub high: bool,
    pub writes: usize,
}

impl ErrorType for MockPin {
    type Error = Infallible;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.high = false;
        self.writes += 1;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.high = true;
        self.writes += 1;
        Ok(())
    }
}

// ── RecordingSink ─────────────────────────────────────────────

pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(*event);
    }
}
