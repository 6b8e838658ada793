//! Port traits: the boundary between LED behaviour and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ LedInstance (domain)
//! ```
//!
//! Driven adapters (LED pins, timers, event sinks) implement these traits.
//! [`LedInstance`](super::service::LedInstance) consumes them via generics,
//! so the domain core never touches hardware directly.

use crate::fsm::context::LedLevel;

// ───────────────────────────────────────────────────────────────
// Driver port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Capability set handed to an LED instance at construction.
///
/// The implementing value is the per-instance context: a driver type shared
/// by several LEDs tells them apart through its own fields.
///
/// Every call is assumed to succeed. Implementations that can fail must
/// report the failure themselves; the state machine has no recovery path.
pub trait LedDriver {
    /// Drive the LED output to `level`.
    fn set_level(&mut self, level: LedLevel);

    /// Arm this instance's one-shot timer for `ms` milliseconds.
    ///
    /// At most one expiry may be outstanding per instance: re-arming an
    /// armed timer replaces the pending expiry.
    fn arm_timer(&mut self, ms: u32);

    /// Cancel any pending expiry. A no-op when nothing is pending.
    fn disarm_timer(&mut self);
}

impl<T: LedDriver + ?Sized> LedDriver for &mut T {
    fn set_level(&mut self, level: LedLevel) {
        (**self).set_level(level);
    }

    fn arm_timer(&mut self, ms: u32) {
        (**self).arm_timer(ms);
    }

    fn disarm_timer(&mut self) {
        (**self).disarm_timer();
    }
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The board emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port. Adapters decide where they go.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
