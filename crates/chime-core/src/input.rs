//! Input abstraction layer.

/// Debounced key presses consumed by the navigator.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InputEvent {
    Up,
    Down,
    Ok,
    Back,
}

/// Polled input provider.
pub trait InputProvider {
    type Error;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error>;
}
