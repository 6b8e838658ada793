//! Fuzz target: LED event sequences
//!
//! Maps each input byte to a switch edge or timer expiry and feeds it to a
//! single `LedInstance`, verifying:
//! - No panics under arbitrary event orderings
//! - A timer is pending exactly when the state is On or HeldDown
//! - The driver's last commanded level matches `output_level()`
//! - Off always means the LED is off
//!
//! cargo fuzz run fuzz_event_sequence

#![no_main]

use ledhold::app::events::LedEvent;
use ledhold::app::ports::LedDriver;
use ledhold::app::service::LedInstance;
use ledhold::config::LedConfig;
use ledhold::fsm::context::LedLevel;
use ledhold::fsm::LedState;
use libfuzzer_sys::fuzz_target;

#[derive(Default)]
struct TrackingDriver {
    level: Option<LedLevel>,
    armed: Option<u32>,
}

impl LedDriver for TrackingDriver {
    fn set_level(&mut self, level: LedLevel) {
        self.level = Some(level);
    }

    fn arm_timer(&mut self, ms: u32) {
        self.armed = Some(ms);
    }

    fn disarm_timer(&mut self) {
        self.armed = None;
    }
}

fuzz_target!(|data: &[u8]| {
    let Some((&first, rest)) = data.split_first() else {
        return;
    };
    let hold = u32::from(first >> 4) + 1;
    let toggle = u32::from(first & 0x0F) + 1;
    let Ok(mut led) = LedInstance::new(&LedConfig::new(hold, toggle), TrackingDriver::default())
    else {
        return;
    };

    for &b in rest {
        let event = match b % 3 {
            0 => LedEvent::SwitchPressed,
            1 => LedEvent::SwitchReleased,
            _ => LedEvent::Timeout,
        };
        let _ = led.dispatch(event);

        let drv = led.driver();
        assert_eq!(drv.level, Some(led.output_level()));
        match led.state() {
            LedState::Off => {
                assert_eq!(drv.armed, None);
                assert_eq!(led.output_level(), LedLevel::Off);
            }
            LedState::On => {
                assert_eq!(drv.armed, Some(hold));
                assert_eq!(led.output_level(), LedLevel::On);
            }
            LedState::HeldDown => assert_eq!(drv.armed, Some(toggle)),
        }
    }
});
