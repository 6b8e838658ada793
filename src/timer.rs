//! Tick-driven one-shot timer.
//!
//! Each LED channel owns one [`OneShotTimer`]; nothing is shared between
//! channels. The main loop advances every timer by the elapsed tick time
//! and dispatches a timeout to each channel whose timer reports expiry.
//!
//! ```text
//!   arm(ms) ──▶ [ remaining = ms ] ──advance(dt)──▶ remaining -= dt
//!                        │                                │
//!                   disarm()                       remaining == 0
//!                        ▼                                ▼
//!                     [ idle ] ◀──────────── expired (Some(overshoot), once)
//! ```

/// One-shot countdown timer in milliseconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OneShotTimer {
    /// Milliseconds left before expiry, `None` when idle.
    remaining_ms: Option<u32>,
}

impl OneShotTimer {
    pub const fn new() -> Self {
        Self { remaining_ms: None }
    }

    /// Start counting down from `ms`. Replaces any pending expiry.
    pub fn arm(&mut self, ms: u32) {
        self.remaining_ms = Some(ms);
    }

    /// Cancel the pending expiry, if any.
    pub fn disarm(&mut self) {
        self.remaining_ms = None;
    }

    pub fn is_armed(&self) -> bool {
        self.remaining_ms.is_some()
    }

    pub fn remaining_ms(&self) -> Option<u32> {
        self.remaining_ms
    }

    /// Advance by `elapsed_ms`.
    ///
    /// On the call that reaches the deadline the timer goes idle and the
    /// part of `elapsed_ms` left over past the deadline is returned, so a
    /// caller that re-arms can charge it to the next period. Returns `None`
    /// while idle or still counting down.
    pub fn advance(&mut self, elapsed_ms: u32) -> Option<u32> {
        match self.remaining_ms {
            Some(left) if left <= elapsed_ms => {
                self.remaining_ms = None;
                Some(elapsed_ms - left)
            }
            Some(left) => {
                self.remaining_ms = Some(left - elapsed_ms);
                None
            }
            None => None,
        }
    }
}
