//! Function-pointer finite state machine engine.
//!
//! Classic embedded FSM pattern, event-driven:
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │  StateTable                                                │
//! │  ┌──────────┬───────────┬──────────┬─────────────────────┐ │
//! │  │ LedState │ on_enter  │ on_exit  │ on_event            │ │
//! │  ├──────────┼───────────┼──────────┼─────────────────────┤ │
//! │  │ Off      │ fn(ctx)   │ —        │ fn(ctx, evt)->React │ │
//! │  │ On       │ fn(ctx)   │ —        │ fn(ctx, evt)->React │ │
//! │  │ HeldDown │ fn(ctx)   │ —        │ fn(ctx, evt)->React │ │
//! │  └──────────┴───────────┴──────────┴─────────────────────┘ │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each dispatch calls `on_event` for the **current** state. If it returns
//! [`Reaction::Transition`], the engine updates the current pointer, runs
//! `on_exit` for the old state and then `on_enter` for the new one, all
//! before `dispatch` returns. Every function receives `&mut C`, the
//! per-instance context (see [`context::LedContext`]).

pub mod context;
pub mod states;

use log::{debug, trace};

use crate::app::events::LedEvent;

// ---------------------------------------------------------------------------
// State identity
// ---------------------------------------------------------------------------

/// Behavioural state of one LED instance.
///
/// This is the FSM state, not the output level: in `HeldDown` the LED
/// alternates between on and off while the state stays put.
/// Must stay in sync with the table built in [`states::build_state_table`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum LedState {
    Off = 0,
    On = 1,
    HeldDown = 2,
}

impl LedState {
    /// Total number of states, used to size the table array.
    pub const COUNT: usize = 3;

    /// Convert a table index back to `LedState`. Panics on out-of-range in
    /// debug builds; returns `Off` in release.
    pub fn from_index(idx: usize) -> Self {
        match idx {
            0 => Self::Off,
            1 => Self::On,
            2 => Self::HeldDown,
            _ => {
                debug_assert!(false, "invalid state index: {idx}");
                Self::Off
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Handler results
// ---------------------------------------------------------------------------

/// What a state handler decided to do with an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reaction {
    /// The event means nothing in this state.
    Ignored,
    /// The handler consumed the event without changing state.
    Handled,
    /// Leave the current state for the given one.
    Transition(LedState),
}

/// Outcome of [`Fsm::dispatch`], reported back to the event source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    Handled,
    Ignored,
}

impl Dispatch {
    pub fn is_handled(self) -> bool {
        self == Self::Handled
    }
}

// ---------------------------------------------------------------------------
// Function-pointer type aliases
// ---------------------------------------------------------------------------

/// Signature for `on_enter` and `on_exit` actions.
/// These run exactly once on each state transition.
pub type StateActionFn<C> = fn(&mut C);

/// Signature for the per-event handler.
pub type StateEventFn<C> = fn(&mut C, LedEvent) -> Reaction;

// ---------------------------------------------------------------------------
// State descriptor (one row in the table)
// ---------------------------------------------------------------------------

/// Static descriptor for a single FSM state.
/// Stored in a fixed-size array: no heap, no `dyn`.
pub struct StateDescriptor<C> {
    pub id: LedState,
    pub name: &'static str,
    pub on_enter: Option<StateActionFn<C>>,
    pub on_exit: Option<StateActionFn<C>>,
    pub on_event: StateEventFn<C>,
}

// ---------------------------------------------------------------------------
// FSM engine
// ---------------------------------------------------------------------------

/// The finite state machine engine.
///
/// Owns the state table and the current-state index. The context is owned
/// by the caller and threaded through every handler call.
pub struct Fsm<C> {
    /// Fixed-size table indexed by `LedState as usize`.
    table: [StateDescriptor<C>; LedState::COUNT],
    /// Index of the currently active state.
    current: usize,
    /// Number of completed transitions (wraps).
    transitions: u32,
}

impl<C> Fsm<C> {
    /// Construct a new FSM with the given state table, starting in `initial`.
    /// Does not run any action; call [`start`](Self::start) next.
    pub fn new(table: [StateDescriptor<C>; LedState::COUNT], initial: LedState) -> Self {
        debug_assert!(
            table.iter().enumerate().all(|(i, s)| s.id as usize == i),
            "state table rows out of order"
        );
        Self {
            table,
            current: initial as usize,
            transitions: 0,
        }
    }

    /// Run the initial `on_enter` for the starting state.
    /// Call exactly once, before the first `dispatch()`.
    pub fn start(&mut self, ctx: &mut C) {
        debug!("FSM starting in state: {}", self.table[self.current].name);
        if let Some(enter) = self.table[self.current].on_enter {
            enter(ctx);
        }
    }

    /// Submit one event to the current state.
    ///
    /// 1. Call `on_event` for the current state.
    /// 2. On `Transition(next)`: update the pointer, then `on_exit(old)`,
    ///    then `on_enter(next)`.
    pub fn dispatch(&mut self, ctx: &mut C, event: LedEvent) -> Dispatch {
        match (self.table[self.current].on_event)(ctx, event) {
            Reaction::Ignored => {
                trace!(
                    "FSM {}: {:?} ignored",
                    self.table[self.current].name, event
                );
                Dispatch::Ignored
            }
            Reaction::Handled => Dispatch::Handled,
            Reaction::Transition(next) => {
                self.transition(next, ctx);
                Dispatch::Handled
            }
        }
    }

    /// The current state's identity.
    pub fn current_state(&self) -> LedState {
        LedState::from_index(self.current)
    }

    /// Name of the current state, as given in the table.
    pub fn current_name(&self) -> &'static str {
        self.table[self.current].name
    }

    /// How many transitions have completed since construction.
    pub fn transition_count(&self) -> u32 {
        self.transitions
    }

    // -----------------------------------------------------------------------
    // Internal
    // -----------------------------------------------------------------------

    fn transition(&mut self, next: LedState, ctx: &mut C) {
        let prev_idx = self.current;
        let next_idx = next as usize;

        debug!(
            "FSM transition: {} -> {}",
            self.table[prev_idx].name, self.table[next_idx].name
        );

        // The new state is current before either action runs.
        self.current = next_idx;
        self.transitions = self.transitions.wrapping_add(1);

        if let Some(exit) = self.table[prev_idx].on_exit {
            exit(ctx);
        }
        if let Some(enter) = self.table[next_idx].on_enter {
            enter(ctx);
        }
    }
}
