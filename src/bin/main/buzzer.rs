//! PWM buzzer behind the navigator's speaker seam.
//!
//! The LEDC timer is clocked for the app's tone frequency at construction;
//! `start` only gates the duty cycle. Ownership is a process-wide flag, so
//! a competing owner makes `acquire` wait out its window.

use core::cell::Cell;

use chime_core::platform::Speaker;
use critical_section::Mutex;
use embedded_hal::delay::DelayNs;
use esp_hal::{
    delay::Delay,
    ledc::{
        LowSpeed,
        channel::{self, ChannelIFace},
    },
};
use log::debug;

static SPEAKER_CLAIMED: Mutex<Cell<bool>> = Mutex::new(Cell::new(false));

const ACQUIRE_POLL_MS: u32 = 1;
const FULL_VOLUME_DUTY_PCT: u8 = 50;

pub struct PwmSpeaker<'a> {
    channel: channel::Channel<'a, LowSpeed>,
    tone_hz: u16,
    delay: Delay,
}

impl<'a> PwmSpeaker<'a> {
    pub fn new(channel: channel::Channel<'a, LowSpeed>, tone_hz: u16) -> Self {
        Self {
            channel,
            tone_hz,
            delay: Delay::new(),
        }
    }

    fn try_claim() -> bool {
        critical_section::with(|cs| {
            let claimed = SPEAKER_CLAIMED.borrow(cs);
            if claimed.get() {
                false
            } else {
                claimed.set(true);
                true
            }
        })
    }
}

impl Speaker for PwmSpeaker<'_> {
    fn acquire(&mut self, timeout_ms: u32) -> bool {
        let mut waited_ms = 0;
        loop {
            if Self::try_claim() {
                return true;
            }
            if waited_ms >= timeout_ms {
                return false;
            }
            self.delay.delay_ms(ACQUIRE_POLL_MS);
            waited_ms += ACQUIRE_POLL_MS;
        }
    }

    fn start(&mut self, frequency_hz: u16, volume: f32) {
        if frequency_hz != self.tone_hz {
            debug!(
                "tone: timer clocked for {} Hz, playing that instead of {} Hz",
                self.tone_hz, frequency_hz
            );
        }
        let duty = (volume.clamp(0.0, 1.0) * FULL_VOLUME_DUTY_PCT as f32) as u8;
        if self.channel.set_duty(duty).is_err() {
            debug!("tone: duty update rejected");
        }
    }

    fn stop(&mut self) {
        let _ = self.channel.set_duty(0);
    }

    fn release(&mut self) {
        critical_section::with(|cs| SPEAKER_CLAIMED.borrow(cs).set(false));
    }
}
