//! LED instance: the per-LED service object.
//!
//! [`LedInstance`] owns one FSM and its context and exposes the two public
//! operations: construction and dispatch.
//!
//! ```text
//!   switch edge ──▶ ┌──────────────────────┐ ──▶ LedDriver::set_level
//!                   │     LedInstance      │
//!   timer expiry ──▶│  FSM · LedContext    │ ──▶ LedDriver::arm/disarm
//!                   └──────────────────────┘
//! ```
//!
//! Dispatch takes `&mut self`, so two events can never be in flight for the
//! same instance. Interrupt-sourced events must be funnelled through the
//! board's event queue rather than dispatched from the ISR.

use log::info;

use crate::config::LedConfig;
use crate::error::Result;
use crate::fsm::context::{LedContext, LedLevel, LedTiming};
use crate::fsm::states::build_state_table;
use crate::fsm::{Dispatch, Fsm, LedState};

use super::events::LedEvent;
use super::ports::LedDriver;

// ───────────────────────────────────────────────────────────────
// LedInstance
// ───────────────────────────────────────────────────────────────

/// One physical LED and its behavioural state machine.
pub struct LedInstance<D: LedDriver> {
    fsm: Fsm<LedContext<D>>,
    ctx: LedContext<D>,
}

impl<D: LedDriver> LedInstance<D> {
    /// Validate `config`, build the instance and run Off's entry action
    /// exactly once (LED off, timer disarmed).
    ///
    /// A rejected configuration never produces an instance; callers treat
    /// the error as fatal.
    pub fn new(config: &LedConfig, driver: D) -> Result<Self> {
        let timing = LedTiming::new(config)?;
        let mut ctx = LedContext::new(timing, driver);
        let mut fsm = Fsm::new(build_state_table(), LedState::Off);
        fsm.start(&mut ctx);

        info!(
            "LED instance ready: hold={}ms toggle={}ms",
            timing.hold_ms(),
            timing.toggle_ms()
        );
        Ok(Self { fsm, ctx })
    }

    /// Submit one event and run its effects to completion.
    ///
    /// Events the current state does not react to return
    /// [`Dispatch::Ignored`] and make no driver calls.
    pub fn dispatch(&mut self, event: LedEvent) -> Dispatch {
        self.ctx.assert_constructed();
        self.fsm.dispatch(&mut self.ctx, event)
    }

    // ── Queries ───────────────────────────────────────────────

    /// Current behavioural state.
    pub fn state(&self) -> LedState {
        self.fsm.current_state()
    }

    /// Last commanded LED output.
    pub fn output_level(&self) -> LedLevel {
        self.ctx.output()
    }

    pub fn hold_ms(&self) -> u32 {
        self.ctx.timing().hold_ms()
    }

    pub fn toggle_ms(&self) -> u32 {
        self.ctx.timing().toggle_ms()
    }

    /// Number of state transitions since construction.
    pub fn transition_count(&self) -> u32 {
        self.fsm.transition_count()
    }

    pub fn driver(&self) -> &D {
        self.ctx.driver()
    }

    pub fn driver_mut(&mut self) -> &mut D {
        self.ctx.driver_mut()
    }
}
