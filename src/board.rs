//! Board integration: LED channels, their timers, and event routing.
//!
//! ```text
//!  ┌──────────────┐   ChannelEvent   ┌──────────────────────────────────┐
//!  │ SwitchInput  │──▶ EventQueue ──▶│ LedBoard                         │
//!  └──────────────┘                  │  ch0: LedInstance<ChannelDriver> │──▶ PinLed
//!                                    │  ch1: LedInstance<ChannelDriver> │──▶ PinLed
//!  system tick ─── run(elapsed) ────▶│  (one OneShotTimer per channel)  │
//!                                    └──────────────────────────────────┘
//! ```
//!
//! Each `run()` advances every channel's timer first and dispatches
//! timeouts, then drains queued switch events. Everything happens in the
//! caller's context, one event at a time.

use embedded_hal::digital::{InputPin, OutputPin};
use log::{info, warn};

use crate::app::events::{AppEvent, LedEvent};
use crate::app::ports::{EventSink, LedDriver};
use crate::app::service::LedInstance;
use crate::config::BoardConfig;
use crate::drivers::led_pin::{PinLed, Polarity};
use crate::drivers::switch::SwitchInput;
use crate::error::{ConfigError, Result};
use crate::events::{ChannelEvent, EventConsumer, EventProducer};
use crate::fsm::Dispatch;
use crate::fsm::context::LedLevel;
use crate::timer::OneShotTimer;

// ═══════════════════════════════════════════════════════════════
//  Channel driver
// ═══════════════════════════════════════════════════════════════

/// [`LedDriver`] for one board channel: a pin-backed LED plus the channel's
/// private one-shot timer.
pub struct ChannelDriver<P> {
    led: PinLed<P>,
    timer: OneShotTimer,
}

impl<P: OutputPin> ChannelDriver<P> {
    pub fn new(led: PinLed<P>) -> Self {
        Self {
            led,
            timer: OneShotTimer::new(),
        }
    }

    pub fn led(&self) -> &PinLed<P> {
        &self.led
    }

    pub fn timer(&self) -> &OneShotTimer {
        &self.timer
    }
}

impl<P: OutputPin> LedDriver for ChannelDriver<P> {
    fn set_level(&mut self, level: LedLevel) {
        self.led.set(level);
    }

    fn arm_timer(&mut self, ms: u32) {
        self.timer.arm(ms);
    }

    fn disarm_timer(&mut self) {
        self.timer.disarm();
    }
}

// ═══════════════════════════════════════════════════════════════
//  Board
// ═══════════════════════════════════════════════════════════════

/// `N` independent LED channels sharing one tick source.
pub struct LedBoard<P: OutputPin, const N: usize> {
    channels: heapless::Vec<LedInstance<ChannelDriver<P>>, N>,
    tick_ms: u32,
}

impl<P: OutputPin, const N: usize> LedBoard<P, N> {
    /// Build every channel from `config`, one LED pin per channel.
    ///
    /// Any invalid channel fails the whole board; no channel is usable
    /// until all of them are.
    pub fn new(
        config: &BoardConfig,
        pins: [P; N],
        polarity: Polarity,
        sink: &mut impl EventSink,
    ) -> Result<Self> {
        config.validate()?;
        if config.channels.len() != N {
            return Err(ConfigError::ChannelCountMismatch {
                configured: config.channels.len(),
                available: N,
            }
            .into());
        }

        let mut channels = heapless::Vec::new();
        for (pin, led_config) in pins.into_iter().zip(config.channels.iter()) {
            let driver = ChannelDriver::new(PinLed::new(pin, polarity));
            let led = LedInstance::new(led_config, driver)?;
            channels
                .push(led)
                .map_err(|_| ConfigError::ChannelCountMismatch {
                    configured: config.channels.len(),
                    available: N,
                })?;
        }

        for (idx, led) in channels.iter().enumerate() {
            sink.emit(&AppEvent::Started {
                channel: idx as u8,
                state: led.state(),
            });
        }
        info!("LED board ready: {} channels, tick={}ms", N, config.tick_ms);

        Ok(Self {
            channels,
            tick_ms: config.tick_ms,
        })
    }

    /// Advance every channel timer by `elapsed_ms` and dispatch a timeout to
    /// each channel whose timer expired.
    ///
    /// Time past a deadline is charged to the timer the timeout re-arms, so
    /// a step longer than one period fires every deadline it covers and the
    /// blink rate does not depend on the tick size.
    pub fn tick(&mut self, elapsed_ms: u32, sink: &mut impl EventSink) {
        for idx in 0..self.channels.len() {
            let mut budget = elapsed_ms;
            while let Some(overshoot) = self.channels[idx].driver_mut().timer.advance(budget) {
                let _ = self.dispatch_to(idx, LedEvent::Timeout, sink);
                // Nothing left to carry; a zero-length re-arm waits for the
                // next tick.
                if overshoot == 0 {
                    break;
                }
                budget = overshoot;
            }
        }
    }

    /// Route one queued event to its channel.
    pub fn handle(&mut self, event: ChannelEvent, sink: &mut impl EventSink) -> Dispatch {
        let idx = event.channel as usize;
        if idx >= self.channels.len() {
            warn!("board: event {:?} for unknown channel {}", event.event, event.channel);
            sink.emit(&AppEvent::UnknownChannel {
                channel: event.channel,
            });
            return Dispatch::Ignored;
        }
        self.dispatch_to(idx, event.event, sink)
    }

    /// One main-loop pass: timers first, then queued switch events.
    pub fn run<const Q: usize>(
        &mut self,
        elapsed_ms: u32,
        events: &mut EventConsumer<'_, Q>,
        sink: &mut impl EventSink,
    ) {
        self.tick(elapsed_ms, sink);
        events.drain(|event| {
            let _ = self.handle(event, sink);
        });
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn channel(&self, idx: usize) -> Option<&LedInstance<ChannelDriver<P>>> {
        self.channels.get(idx)
    }

    pub fn channels(&self) -> impl Iterator<Item = &LedInstance<ChannelDriver<P>>> {
        self.channels.iter()
    }

    pub fn len(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    /// Milliseconds per system tick.
    pub fn tick_ms(&self) -> u32 {
        self.tick_ms
    }

    // ── Internal ──────────────────────────────────────────────

    fn dispatch_to(&mut self, idx: usize, event: LedEvent, sink: &mut impl EventSink) -> Dispatch {
        let led = &mut self.channels[idx];
        let from = led.state();
        let result = led.dispatch(event);
        let to = led.state();
        if from != to {
            sink.emit(&AppEvent::StateChanged {
                channel: idx as u8,
                from,
                to,
            });
        }
        result
    }
}

/// Sample a switch and queue its edge, if any, for `channel`.
/// Returns `false` only when an edge was dropped because the queue is full.
pub fn sample_switch<I: InputPin, const Q: usize>(
    switch: &mut SwitchInput<I>,
    channel: u8,
    events: &mut EventProducer<'_, Q>,
) -> bool {
    match switch.sample() {
        Some(event) => events.push(ChannelEvent::new(channel, event)),
        None => true,
    }
}
