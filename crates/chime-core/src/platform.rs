//! Hardware seams the board implements for the navigator.

use embedded_hal::delay::DelayNs;

/// Exclusive tone output device.
///
/// Another owner can hold the device, so acquisition may fail even within
/// the timeout window. Every use is bracketed by `acquire`/`release`.
pub trait Speaker {
    /// Try to take the device, waiting at most `timeout_ms`.
    fn acquire(&mut self, timeout_ms: u32) -> bool;
    fn start(&mut self, frequency_hz: u16, volume: f32);
    fn stop(&mut self);
    fn release(&mut self);
}

/// Pseudo-random byte source.
pub trait EntropySource {
    fn random_byte(&mut self) -> u8;
}

/// Display backlight policy override, reverted at shutdown.
pub trait Backlight {
    fn set_backlight_enforced(&mut self, enforced: bool);
}

/// Scoped speaker acquisition; dropping the grant releases the device.
pub struct SpeakerGrant<'a, S: Speaker> {
    speaker: &'a mut S,
}

impl<'a, S: Speaker> SpeakerGrant<'a, S> {
    /// Returns `None` when the device stays busy for the whole window.
    pub fn acquire(speaker: &'a mut S, timeout_ms: u32) -> Option<Self> {
        if speaker.acquire(timeout_ms) {
            Some(Self { speaker })
        } else {
            None
        }
    }

    pub fn start(&mut self, frequency_hz: u16, volume: f32) {
        self.speaker.start(frequency_hz, volume);
    }

    pub fn stop(&mut self) {
        self.speaker.stop();
    }
}

impl<S: Speaker + DelayNs> SpeakerGrant<'_, S> {
    /// Block while the tone rings.
    pub fn sustain_ms(&mut self, duration_ms: u32) {
        self.speaker.delay_ms(duration_ms);
    }
}

impl<S: Speaker> Drop for SpeakerGrant<'_, S> {
    fn drop(&mut self) {
        self.speaker.release();
    }
}
