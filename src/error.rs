//! Unified error types for the ledhold library.
//!
//! A single `Error` enum that every construction path converts into. All
//! variants are `Copy` so they can be returned from `no_std` constructors
//! without allocation.
//!
//! Only configuration problems are errors. Events that arrive in a state
//! that does not react to them are reported as
//! [`Dispatch::Ignored`](crate::fsm::Dispatch::Ignored), and internal
//! consistency violations detected while dispatching are fatal panics.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level error
// ---------------------------------------------------------------------------

/// Every fallible operation in the library funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Configuration is invalid; the instance or board was not built.
    Config(ConfigError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
        }
    }
}

impl core::error::Error for Error {}

// ---------------------------------------------------------------------------
// Configuration errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Hold duration must be at least 1 ms.
    ZeroHold,
    /// Toggle duration must be at least 1 ms.
    ZeroToggle,
    /// Board tick period must be at least 1 ms.
    ZeroTickPeriod,
    /// A board needs at least one LED channel.
    NoChannels,
    /// Number of configured channels does not match the pins supplied.
    ChannelCountMismatch { configured: usize, available: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroHold => write!(f, "hold duration must be > 0 ms"),
            Self::ZeroToggle => write!(f, "toggle duration must be > 0 ms"),
            Self::ZeroTickPeriod => write!(f, "tick period must be > 0 ms"),
            Self::NoChannels => write!(f, "no LED channels configured"),
            Self::ChannelCountMismatch {
                configured,
                available,
            } => write!(
                f,
                "{configured} channels configured but {available} LED pins available"
            ),
        }
    }
}

impl core::error::Error for ConfigError {}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Library-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
