//! End-to-end tests for the board: queued switch events, tick-driven
//! timers, and pin output together.

use super::mock_hw::{MockPin, RecordingSink};

use ledhold::app::events::{AppEvent, LedEvent};
use ledhold::board::LedBoard;
use ledhold::config::{BoardConfig, LedConfig};
use ledhold::drivers::led_pin::Polarity;
use ledhold::events::{ChannelEvent, EventQueue, split};
use ledhold::fsm::LedState;
use ledhold::fsm::context::LedLevel;

fn single_channel(hold_ms: u32, toggle_ms: u32, polarity: Polarity) -> LedBoard<MockPin, 1> {
    let mut config = BoardConfig::default();
    config.channels.clear();
    config
        .channels
        .push(LedConfig::new(hold_ms, toggle_ms))
        .unwrap();
    LedBoard::new(
        &config,
        [MockPin::default()],
        polarity,
        &mut RecordingSink::new(),
    )
    .ok()
    .unwrap()
}

fn pin_high(board: &LedBoard<MockPin, 1>) -> bool {
    board.channel(0).unwrap().driver().led().pin().high
}

/// Press, hold through two blink periods, release.
#[test]
fn hold_then_blink_then_release() {
    let mut board = single_channel(3000, 1000, Polarity::ActiveHigh);
    let mut sink = RecordingSink::new();
    let mut q: EventQueue<8> = EventQueue::new();
    let (mut tx, mut rx) = split(&mut q);

    assert!(tx.push(ChannelEvent::new(0, LedEvent::SwitchPressed)));
    board.run(0, &mut rx, &mut sink);
    let led = board.channel(0).unwrap();
    assert_eq!(led.state(), LedState::On);
    assert!(pin_high(&board));

    // Hold interval elapses.
    board.run(2999, &mut rx, &mut sink);
    assert_eq!(board.channel(0).unwrap().state(), LedState::On);
    board.run(1, &mut rx, &mut sink);
    let led = board.channel(0).unwrap();
    assert_eq!(led.state(), LedState::HeldDown);
    // No toggle on entry.
    assert_eq!(led.output_level(), LedLevel::On);
    assert!(pin_high(&board));
    assert_eq!(led.driver().timer().remaining_ms(), Some(1000));

    // First blink period.
    board.run(1000, &mut rx, &mut sink);
    assert_eq!(board.channel(0).unwrap().output_level(), LedLevel::Off);
    assert!(!pin_high(&board));

    // Second blink period.
    board.run(1000, &mut rx, &mut sink);
    assert_eq!(board.channel(0).unwrap().output_level(), LedLevel::On);
    assert!(pin_high(&board));

    // Release mid-period.
    board.run(400, &mut rx, &mut sink);
    assert!(tx.push(ChannelEvent::new(0, LedEvent::SwitchReleased)));
    board.run(0, &mut rx, &mut sink);
    let led = board.channel(0).unwrap();
    assert_eq!(led.state(), LedState::Off);
    assert_eq!(led.output_level(), LedLevel::Off);
    assert!(!led.driver().timer().is_armed());
    assert!(!pin_high(&board));

    assert_eq!(
        sink.events,
        vec![
            AppEvent::StateChanged { channel: 0, from: LedState::Off, to: LedState::On },
            AppEvent::StateChanged { channel: 0, from: LedState::On, to: LedState::HeldDown },
            AppEvent::StateChanged { channel: 0, from: LedState::HeldDown, to: LedState::Off },
        ]
    );
}

#[test]
fn short_tap_never_blinks() {
    let mut board = single_channel(3000, 1000, Polarity::ActiveHigh);
    let mut sink = RecordingSink::new();
    let mut q: EventQueue<8> = EventQueue::new();
    let (mut tx, mut rx) = split(&mut q);

    assert!(tx.push(ChannelEvent::new(0, LedEvent::SwitchPressed)));
    board.run(1, &mut rx, &mut sink);
    board.run(2000, &mut rx, &mut sink);
    assert!(tx.push(ChannelEvent::new(0, LedEvent::SwitchReleased)));
    board.run(1, &mut rx, &mut sink);

    // Long after the hold interval nothing fires.
    for _ in 0..10 {
        board.run(1000, &mut rx, &mut sink);
    }
    let led = board.channel(0).unwrap();
    assert_eq!(led.state(), LedState::Off);
    assert!(!pin_high(&board));
    // Construction, press and release: one pin write each.
    assert_eq!(led.driver().led().pin().writes, 3);
}

#[test]
fn active_low_led_is_driven_inverted() {
    let mut board = single_channel(10, 5, Polarity::ActiveLow);
    let mut sink = RecordingSink::new();
    // Off after construction means pin HIGH on an active-low LED.
    assert!(pin_high(&board));

    let _ = board.handle(ChannelEvent::new(0, LedEvent::SwitchPressed), &mut sink);
    assert!(!pin_high(&board));
    board.tick(10, &mut sink);
    board.tick(5, &mut sink);
    assert_eq!(board.channel(0).unwrap().output_level(), LedLevel::Off);
    assert!(pin_high(&board));
}

#[test]
fn release_before_timeout_cancels_pending_expiry() {
    let mut board = single_channel(100, 50, Polarity::ActiveHigh);
    let mut sink = RecordingSink::new();

    let _ = board.handle(ChannelEvent::new(0, LedEvent::SwitchPressed), &mut sink);
    board.tick(99, &mut sink);
    let _ = board.handle(ChannelEvent::new(0, LedEvent::SwitchReleased), &mut sink);
    board.tick(1, &mut sink);
    board.tick(1000, &mut sink);
    assert_eq!(board.channel(0).unwrap().state(), LedState::Off);
    assert_eq!(board.channel(0).unwrap().transition_count(), 2);
}

#[test]
fn coarse_ticks_keep_the_blink_period() {
    // 7 ms ticks divide neither duration.
    let mut board = single_channel(10, 5, Polarity::ActiveHigh);
    let mut sink = RecordingSink::new();
    let _ = board.handle(ChannelEvent::new(0, LedEvent::SwitchPressed), &mut sink);

    for _ in 0..16 {
        board.tick(7, &mut sink);
    }

    // Deadlines at 10 (hold) then every 5 ms: 15, 20, ..., 110.
    let led = board.channel(0).unwrap();
    assert_eq!(led.state(), LedState::HeldDown);
    // Construction and press, then one write per toggle.
    assert_eq!(led.driver().led().pin().writes, 2 + 20);
    assert_eq!(led.output_level(), LedLevel::On);
    assert_eq!(led.driver().timer().remaining_ms(), Some(3));
}

#[test]
fn one_long_step_fires_every_covered_deadline() {
    let mut board = single_channel(10, 5, Polarity::ActiveHigh);
    let mut sink = RecordingSink::new();
    let _ = board.handle(ChannelEvent::new(0, LedEvent::SwitchPressed), &mut sink);
    sink.events.clear();

    board.tick(30, &mut sink);

    let led = board.channel(0).unwrap();
    assert_eq!(led.state(), LedState::HeldDown);
    // Hold expiry at 10, toggles at 15, 20, 25 and 30.
    assert_eq!(led.driver().led().pin().writes, 2 + 4);
    assert_eq!(led.output_level(), LedLevel::On);
    assert_eq!(led.driver().timer().remaining_ms(), Some(5));
    assert_eq!(
        sink.events,
        vec![AppEvent::StateChanged { channel: 0, from: LedState::On, to: LedState::HeldDown }]
    );
}
