//! Concrete state handler functions and table builder.
//!
//! Each state is three plain `fn` pointers: no closures, no dynamic
//! dispatch, no heap. Entry actions own every side effect of entering a
//! state, so all paths into a state leave the LED and timer identical.
//!
//! ```text
//!          press                 timeout
//!   OFF ───────────▶ ON ───────────────────▶ HELD_DOWN ──┐
//!    ▲                │                          │  ▲     │ timeout:
//!    │    release     │         release          │  └─────┘ toggle LED,
//!    └────────────────┴──────────────────────────┘          re-arm timer
//! ```
//!
//! The On → HeldDown timeout does not toggle; the LED stays lit for a
//! further `toggle_ms` and blinking starts with the first HeldDown timeout.

use log::trace;

use super::context::LedContext;
use super::{LedState, Reaction, StateDescriptor};
use crate::app::events::LedEvent;
use crate::app::ports::LedDriver;
use crate::fsm::context::LedLevel;

// ═══════════════════════════════════════════════════════════════════════════
//  Table builder
// ═══════════════════════════════════════════════════════════════════════════

/// Build the state table for a driver type. Called once per instance.
pub fn build_state_table<D: LedDriver>() -> [StateDescriptor<LedContext<D>>; LedState::COUNT] {
    [
        // Index 0: Off
        StateDescriptor {
            id: LedState::Off,
            name: "Off",
            on_enter: Some(off_enter::<D>),
            on_exit: None,
            on_event: off_event::<D>,
        },
        // Index 1: On
        StateDescriptor {
            id: LedState::On,
            name: "On",
            on_enter: Some(on_enter::<D>),
            on_exit: None,
            on_event: on_event::<D>,
        },
        // Index 2: HeldDown
        StateDescriptor {
            id: LedState::HeldDown,
            name: "HeldDown",
            on_enter: Some(held_down_enter::<D>),
            on_exit: None,
            on_event: held_down_event::<D>,
        },
    ]
}

// ═══════════════════════════════════════════════════════════════════════════
//  OFF state
// ═══════════════════════════════════════════════════════════════════════════

fn off_enter<D: LedDriver>(ctx: &mut LedContext<D>) {
    ctx.drive(LedLevel::Off);
    // Normally already disarmed; unconditional so Off is safe as the
    // initial state.
    ctx.disarm_timer();
}

fn off_event<D: LedDriver>(_ctx: &mut LedContext<D>, event: LedEvent) -> Reaction {
    match event {
        LedEvent::SwitchPressed => Reaction::Transition(LedState::On),
        LedEvent::SwitchReleased | LedEvent::Timeout => Reaction::Ignored,
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  ON state: lit solid, hold timer running
// ═══════════════════════════════════════════════════════════════════════════

fn on_enter<D: LedDriver>(ctx: &mut LedContext<D>) {
    ctx.drive(LedLevel::On);
    ctx.arm_hold_timer();
}

fn on_event<D: LedDriver>(_ctx: &mut LedContext<D>, event: LedEvent) -> Reaction {
    match event {
        LedEvent::SwitchReleased => Reaction::Transition(LedState::Off),
        LedEvent::Timeout => Reaction::Transition(LedState::HeldDown),
        LedEvent::SwitchPressed => Reaction::Ignored,
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  HELD_DOWN state: blinking until release
// ═══════════════════════════════════════════════════════════════════════════

fn held_down_enter<D: LedDriver>(ctx: &mut LedContext<D>) {
    ctx.arm_toggle_timer();
}

fn held_down_event<D: LedDriver>(ctx: &mut LedContext<D>, event: LedEvent) -> Reaction {
    match event {
        LedEvent::SwitchReleased => Reaction::Transition(LedState::Off),
        LedEvent::Timeout => {
            // Self-loop: no exit/entry, toggle and re-arm here.
            ctx.toggle();
            ctx.arm_toggle_timer();
            trace!("HELD_DOWN: LED now {:?}", ctx.output());
            Reaction::Handled
        }
        LedEvent::SwitchPressed => Reaction::Ignored,
    }
}
