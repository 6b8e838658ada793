//! LED and board configuration parameters.
//!
//! Durations are application-supplied at startup. Defaults match the
//! reference two-LED board: a short-hold LED blinking at 1 Hz and a
//! long-hold LED blinking at 2 Hz, driven from a 1 ms system tick.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Maximum number of LED channels a board can carry (stack-allocated).
pub const MAX_CHANNELS: usize = 8;

/// Per-LED timing configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedConfig {
    /// Time the LED stays solidly on after a press before blinking (ms).
    pub hold_ms: u32,
    /// Blink half-period while the switch stays held down (ms).
    pub toggle_ms: u32,
}

impl LedConfig {
    pub const fn new(hold_ms: u32, toggle_ms: u32) -> Self {
        Self { hold_ms, toggle_ms }
    }

    /// Reject configurations the state machine cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.hold_ms == 0 {
            return Err(ConfigError::ZeroHold);
        }
        if self.toggle_ms == 0 {
            return Err(ConfigError::ZeroToggle);
        }
        Ok(())
    }
}

impl Default for LedConfig {
    fn default() -> Self {
        Self::new(3000, 1000)
    }
}

/// Board-level configuration: one [`LedConfig`] per channel plus the tick
/// period of the timer source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Milliseconds per system tick.
    pub tick_ms: u32,
    /// LED channels, indexed by channel number.
    pub channels: heapless::Vec<LedConfig, MAX_CHANNELS>,
}

impl BoardConfig {
    /// Validate the board and every channel.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_ms == 0 {
            return Err(ConfigError::ZeroTickPeriod);
        }
        if self.channels.is_empty() {
            return Err(ConfigError::NoChannels);
        }
        self.channels.iter().try_for_each(LedConfig::validate)
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        let mut channels = heapless::Vec::new();
        // Capacity is MAX_CHANNELS, two always fit.
        let _ = channels.push(LedConfig::new(3000, 1000));
        let _ = channels.push(LedConfig::new(6000, 500));
        Self {
            tick_ms: 1,
            channels,
        }
    }
}
