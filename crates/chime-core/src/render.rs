//! App-level view models consumed by the board renderer.

/// Prompt line shown on the start screen.
pub const START_PROMPT: &str = "OK = play tone";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MenuItemView<'a> {
    pub label: &'a str,
}

impl Default for MenuItemView<'_> {
    fn default() -> Self {
        Self { label: "" }
    }
}

/// App-level view model consumed by the board renderer.
pub enum Screen<'a> {
    Menu {
        title: &'a str,
        items: &'a [MenuItemView<'a>],
        cursor: usize,
    },
    Start {
        prompt: &'a str,
        /// Freshly sampled for this frame.
        random: u8,
    },
    About {
        text: &'a str,
        scroll: u16,
        line_total: u16,
    },
}
