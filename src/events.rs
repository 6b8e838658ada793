//! Interrupt-safe event queue.
//!
//! Switch edges and other interrupt-sourced events must never be dispatched
//! into an LED instance directly from the ISR: the main loop may be in the
//! middle of a dispatch for the same instance. Producers push into a
//! lock-free SPSC queue; the main loop drains it between timer ticks, so
//! every dispatch happens in one logical context.
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ Switch ISR  │────▶│  Event Queue │────▶│  Main Loop   │
//! │ (producer)  │     │  (lock-free) │     │  (consumer)  │
//! └─────────────┘     └──────────────┘     └──────────────┘
//! ```

use heapless::spsc::{Consumer, Producer, Queue};
use log::warn;

use crate::app::events::LedEvent;

/// Default queue size. Power of 2; holds `EVENT_QUEUE_CAP - 1` events.
pub const EVENT_QUEUE_CAP: usize = 32;

/// An event addressed to one LED channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelEvent {
    pub channel: u8,
    pub event: LedEvent,
}

impl ChannelEvent {
    pub const fn new(channel: u8, event: LedEvent) -> Self {
        Self { channel, event }
    }
}

/// Backing storage for the queue. Place in a `static` (or on the main
/// stack) and [`split`] it once at startup.
pub type EventQueue<const N: usize = EVENT_QUEUE_CAP> = Queue<ChannelEvent, N>;

/// Split a queue into its ISR-side and main-loop-side halves.
pub fn split<const N: usize>(
    queue: &mut EventQueue<N>,
) -> (EventProducer<'_, N>, EventConsumer<'_, N>) {
    let (p, c) = queue.split();
    (EventProducer { inner: p }, EventConsumer { inner: c })
}

// ── Producer ──────────────────────────────────────────────────

/// ISR-side handle. Safe to use from interrupt context.
pub struct EventProducer<'a, const N: usize = EVENT_QUEUE_CAP> {
    inner: Producer<'a, ChannelEvent, N>,
}

impl<const N: usize> EventProducer<'_, N> {
    /// Push an event. Returns `false` if the queue is full (event dropped).
    pub fn push(&mut self, event: ChannelEvent) -> bool {
        match self.inner.enqueue(event) {
            Ok(()) => true,
            Err(dropped) => {
                warn!("event queue full, dropped {:?}", dropped);
                false
            }
        }
    }
}

// ── Consumer ──────────────────────────────────────────────────

/// Main-loop-side handle.
pub struct EventConsumer<'a, const N: usize = EVENT_QUEUE_CAP> {
    inner: Consumer<'a, ChannelEvent, N>,
}

impl<const N: usize> EventConsumer<'_, N> {
    /// Pop the next event. Returns `None` if the queue is empty.
    pub fn pop(&mut self) -> Option<ChannelEvent> {
        self.inner.dequeue()
    }

    /// Drain all pending events into a callback, in FIFO order.
    pub fn drain(&mut self, mut handler: impl FnMut(ChannelEvent)) {
        while let Some(event) = self.pop() {
            handler(event);
        }
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
