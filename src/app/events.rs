//! Inbound and outbound application events.
//!
//! [`LedEvent`]s flow into an LED instance from the switch edge detector and
//! the timer facility. [`AppEvent`]s flow out of the board through the
//! [`EventSink`](super::ports::EventSink) port.

use crate::fsm::LedState;

/// Domain events an LED instance reacts to. No payload: a timeout is not
/// tagged with its timer because only one timer can be live per state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LedEvent {
    SwitchPressed,
    SwitchReleased,
    Timeout,
}

/// Structured events emitted by the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// A channel finished construction and sits in its initial state.
    Started { channel: u8, state: LedState },

    /// A channel's state machine moved between states.
    StateChanged {
        channel: u8,
        from: LedState,
        to: LedState,
    },

    /// An event arrived for a channel the board does not have.
    UnknownChannel { channel: u8 },
}
