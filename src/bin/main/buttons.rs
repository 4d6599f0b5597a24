//! Four-key pad (UP/DOWN/OK/BACK) with stable-count debouncing.

use embedded_hal::digital::InputPin;
use heapless::Deque;

use chime_core::input::{InputEvent, InputProvider};

#[derive(Debug, Clone, Copy)]
pub struct ButtonConfig {
    active_low: bool,
    debounce_polls: u8,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            active_low: true,
            debounce_polls: 3,
        }
    }
}

impl ButtonConfig {
    pub const fn with_active_low(mut self, active_low: bool) -> Self {
        self.active_low = active_low;
        self
    }

    pub const fn with_debounce_polls(mut self, debounce_polls: u8) -> Self {
        self.debounce_polls = debounce_polls;
        self
    }
}

#[derive(Debug)]
pub enum ButtonPadError<UpErr, DownErr, OkErr, BackErr> {
    Up(UpErr),
    Down(DownErr),
    Ok(OkErr),
    Back(BackErr),
}

#[derive(Debug, Clone, Copy)]
struct DebouncedKey {
    raw: bool,
    stable: bool,
    stable_count: u8,
}

impl DebouncedKey {
    fn new(pressed: bool) -> Self {
        Self {
            raw: pressed,
            stable: pressed,
            stable_count: 0,
        }
    }

    /// Returns true on a debounced press edge.
    fn update(&mut self, pressed: bool, debounce_polls: u8) -> bool {
        if pressed == self.raw {
            self.stable_count = self.stable_count.saturating_add(1);
        } else {
            self.raw = pressed;
            self.stable_count = 0;
        }

        let threshold = debounce_polls.max(1);
        if self.stable_count >= threshold && self.stable != self.raw {
            self.stable = self.raw;
            return self.stable;
        }

        false
    }
}

#[derive(Debug)]
pub struct ButtonPad<UP, DOWN, OK, BACK> {
    up: UP,
    down: DOWN,
    ok: OK,
    back: BACK,
    config: ButtonConfig,
    keys: [DebouncedKey; 4],
    pending: Deque<InputEvent, 4>,
}

impl<UP, DOWN, OK, BACK> ButtonPad<UP, DOWN, OK, BACK>
where
    UP: InputPin,
    DOWN: InputPin,
    OK: InputPin,
    BACK: InputPin,
{
    pub fn new(
        mut up: UP,
        mut down: DOWN,
        mut ok: OK,
        mut back: BACK,
        config: ButtonConfig,
    ) -> Result<Self, ButtonPadError<UP::Error, DOWN::Error, OK::Error, BACK::Error>> {
        let levels = [
            up.is_high().map_err(ButtonPadError::Up)?,
            down.is_high().map_err(ButtonPadError::Down)?,
            ok.is_high().map_err(ButtonPadError::Ok)?,
            back.is_high().map_err(ButtonPadError::Back)?,
        ];
        let keys = levels.map(|high| DebouncedKey::new(pressed_from_level(high, config.active_low)));

        Ok(Self {
            up,
            down,
            ok,
            back,
            config,
            keys,
            pending: Deque::new(),
        })
    }

    fn poll_keys(
        &mut self,
    ) -> Result<(), ButtonPadError<UP::Error, DOWN::Error, OK::Error, BACK::Error>> {
        let up_high = self.up.is_high().map_err(ButtonPadError::Up)?;
        let down_high = self.down.is_high().map_err(ButtonPadError::Down)?;
        let ok_high = self.ok.is_high().map_err(ButtonPadError::Ok)?;
        let back_high = self.back.is_high().map_err(ButtonPadError::Back)?;

        let samples = [
            (up_high, InputEvent::Up),
            (down_high, InputEvent::Down),
            (ok_high, InputEvent::Ok),
            (back_high, InputEvent::Back),
        ];
        for (index, (high, event)) in samples.into_iter().enumerate() {
            let pressed = pressed_from_level(high, self.config.active_low);
            if self.keys[index].update(pressed, self.config.debounce_polls) {
                // Simultaneous edges queue; one event leaves per poll.
                let _ = self.pending.push_back(event);
            }
        }

        Ok(())
    }
}

impl<UP, DOWN, OK, BACK> InputProvider for ButtonPad<UP, DOWN, OK, BACK>
where
    UP: InputPin,
    DOWN: InputPin,
    OK: InputPin,
    BACK: InputPin,
{
    type Error = ButtonPadError<UP::Error, DOWN::Error, OK::Error, BACK::Error>;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error> {
        if let Some(event) = self.pending.pop_front() {
            return Ok(Some(event));
        }

        self.poll_keys()?;
        Ok(self.pending.pop_front())
    }
}

#[inline]
fn pressed_from_level(high: bool, active_low: bool) -> bool {
    if active_low { !high } else { high }
}
