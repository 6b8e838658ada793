//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing board events through the `log`
//! facade (UART / RTT on target, stderr on the host).

use log::{info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`].
#[derive(Debug, Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started { channel, state } => {
                info!("START | ch{} initial_state={:?}", channel, state);
            }
            AppEvent::StateChanged { channel, from, to } => {
                info!("STATE | ch{} {:?} -> {:?}", channel, from, to);
            }
            AppEvent::UnknownChannel { channel } => {
                warn!("DROP  | no LED channel {}", channel);
            }
        }
    }
}
