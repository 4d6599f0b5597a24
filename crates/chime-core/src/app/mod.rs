//! Screen navigator state machine for the menu, start, and about screens.

use embedded_hal::delay::DelayNs;
use heapless::Deque;
use log::debug;

use crate::{
    input::{InputEvent, InputProvider},
    platform::{Backlight, EntropySource, Speaker, SpeakerGrant},
    render::{MenuItemView, START_PROMPT, Screen},
};

const EVENT_QUEUE_DEPTH: usize = 8;

/// Text rows the about screen shows at once.
pub const ABOUT_VISIBLE_LINES: u16 = 6;

const ABOUT_TEXT: &str = "Chime 0.1\n\
---\n\
A pocket noise box: the\n\
start screen redraws on\n\
its own every few seconds\n\
and OK plays a short\n\
4 kHz burst.\n\
\n\
Up/Down scrolls this\n\
text, Back returns to\n\
the menu.\n\
\n\
author: @chime-dev";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TickResult {
    NoRender,
    RenderRequested,
    /// Back pressed on the menu; the host loop should shut down.
    Exit,
}

/// Which screen currently owns input.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ScreenId {
    Menu,
    Start,
    About,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MenuId {
    Start,
    About,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MenuEntry {
    pub label: &'static str,
    pub id: MenuId,
}

pub const MENU_ENTRIES: [MenuEntry; 2] = [
    MenuEntry {
        label: "Start",
        id: MenuId::Start,
    },
    MenuEntry {
        label: "About",
        id: MenuId::About,
    },
];

const MENU_ENTRY_COUNT: usize = MENU_ENTRIES.len();

/// Messages queued for the dispatch step, consumed once.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CustomEvent {
    RedrawRequested,
    ConfirmPressed,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavigatorConfig {
    pub redraw_period_ms: u32,
    pub tone_frequency_hz: u16,
    pub tone_volume: f32,
    pub tone_duration_ms: u32,
    pub speaker_window_ms: u32,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            redraw_period_ms: 5_000,
            tone_frequency_hz: 4_000,
            tone_volume: 1.0,
            tone_duration_ms: 100,
            speaker_window_ms: 500,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum UiState {
    Menu,
    Start,
    About { scroll: u16 },
}

/// Periodic redraw schedule, armed only while the start screen is active.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct RedrawTimer {
    period_ms: u32,
    next_fire_ms: u64,
}

impl RedrawTimer {
    fn new(now_ms: u64, period_ms: u32) -> Self {
        Self {
            period_ms,
            next_fire_ms: now_ms + period_ms as u64,
        }
    }

    /// Reports at most one expiry per poll and schedules the next one.
    fn poll(&mut self, now_ms: u64) -> bool {
        if now_ms < self.next_fire_ms {
            return false;
        }
        self.next_fire_ms = self.next_fire_ms.saturating_add(self.period_ms as u64);
        if self.next_fire_ms <= now_ms {
            // The loop fell behind; do not burst-fire to catch up.
            self.next_fire_ms = now_ms + self.period_ms as u64;
        }
        true
    }
}

fn about_line_total() -> u16 {
    ABOUT_TEXT.lines().count() as u16
}

pub struct NavigatorApp<IN, PL>
where
    IN: InputProvider,
    PL: Speaker + EntropySource + Backlight + DelayNs,
{
    input: IN,
    platform: PL,
    config: NavigatorConfig,
    app_title: &'static str,
    ui: UiState,
    menu_cursor: u8,
    timer: Option<RedrawTimer>,
    events: Deque<CustomEvent, EVENT_QUEUE_DEPTH>,
    pending_redraw: bool,
    exit_requested: bool,
}

include!("view.rs");
include!("input.rs");
include!("runtime.rs");
include!("navigation.rs");

#[cfg(test)]
mod tests;
