use super::*;
use crate::{
    input::{InputEvent, InputProvider},
    platform::{Backlight, EntropySource, Speaker},
    render::{START_PROMPT, Screen},
};
use embedded_hal::delay::DelayNs;

struct ScriptedInput<'a> {
    events: &'a [InputEvent],
    cursor: usize,
}

impl<'a> ScriptedInput<'a> {
    const fn new(events: &'a [InputEvent]) -> Self {
        Self { events, cursor: 0 }
    }
}

impl InputProvider for ScriptedInput<'_> {
    type Error = ();

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error> {
        let Some(event) = self.events.get(self.cursor).copied() else {
            return Ok(None);
        };
        self.cursor = self.cursor.saturating_add(1);
        Ok(Some(event))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum AudioOp {
    Acquire { window_ms: u32, granted: bool },
    Start { frequency_hz: u16, volume: f32 },
    HoldMs(u32),
    Stop,
    Release,
}

struct RecordingPlatform {
    speaker_free: bool,
    audio: heapless::Vec<AudioOp, 16>,
    entropy: &'static [u8],
    entropy_draws: usize,
    backlight: heapless::Vec<bool, 4>,
}

impl RecordingPlatform {
    fn new() -> Self {
        Self {
            speaker_free: true,
            audio: heapless::Vec::new(),
            entropy: &[0x07, 0x2a, 0x9c, 0xff],
            entropy_draws: 0,
            backlight: heapless::Vec::new(),
        }
    }

    fn log(&mut self, op: AudioOp) {
        self.audio.push(op).unwrap();
    }
}

impl Speaker for RecordingPlatform {
    fn acquire(&mut self, timeout_ms: u32) -> bool {
        let granted = self.speaker_free;
        self.log(AudioOp::Acquire {
            window_ms: timeout_ms,
            granted,
        });
        granted
    }

    fn start(&mut self, frequency_hz: u16, volume: f32) {
        self.log(AudioOp::Start {
            frequency_hz,
            volume,
        });
    }

    fn stop(&mut self) {
        self.log(AudioOp::Stop);
    }

    fn release(&mut self) {
        self.log(AudioOp::Release);
    }
}

impl DelayNs for RecordingPlatform {
    fn delay_ns(&mut self, ns: u32) {
        self.log(AudioOp::HoldMs(ns / 1_000_000));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.log(AudioOp::HoldMs(ms));
    }
}

impl EntropySource for RecordingPlatform {
    fn random_byte(&mut self) -> u8 {
        let byte = self.entropy[self.entropy_draws % self.entropy.len()];
        self.entropy_draws += 1;
        byte
    }
}

impl Backlight for RecordingPlatform {
    fn set_backlight_enforced(&mut self, enforced: bool) {
        self.backlight.push(enforced).unwrap();
    }
}

fn make_app<'a>(
    events: &'a [InputEvent],
    platform: RecordingPlatform,
) -> NavigatorApp<ScriptedInput<'a>, RecordingPlatform> {
    NavigatorApp::new(
        ScriptedInput::new(events),
        platform,
        NavigatorConfig::default(),
        "Chime",
    )
}

#[test]
fn menu_selection_maps_to_target_screen() {
    let events = [InputEvent::Ok];
    let mut app = make_app(&events, RecordingPlatform::new());
    let _ = app.tick(0);
    assert_eq!(app.active_screen(), ScreenId::Start);
    assert!(app.timer.is_some());

    let events = [InputEvent::Down, InputEvent::Ok];
    let mut app = make_app(&events, RecordingPlatform::new());
    let _ = app.tick(0);
    assert_eq!(app.active_screen(), ScreenId::About);
    assert!(app.timer.is_none());
}

#[test]
fn leaving_start_releases_the_redraw_timer() {
    let events = [InputEvent::Ok, InputEvent::Back];
    let mut app = make_app(&events, RecordingPlatform::new());
    let _ = app.tick(0);
    assert_eq!(app.active_screen(), ScreenId::Menu);
    assert!(app.timer.is_none());
}

#[test]
fn back_on_menu_requests_exit() {
    let events = [InputEvent::Back];
    let mut app = make_app(&events, RecordingPlatform::new());
    assert_eq!(app.tick(0), TickResult::Exit);
}

#[test]
fn redraw_fires_once_per_period() {
    let events = [InputEvent::Ok];
    let mut app = make_app(&events, RecordingPlatform::new());
    assert_eq!(app.tick(0), TickResult::RenderRequested);
    assert_eq!(app.tick(4_999), TickResult::NoRender);
    assert_eq!(app.tick(5_000), TickResult::RenderRequested);
    assert_eq!(app.tick(5_001), TickResult::NoRender);
    assert_eq!(app.tick(10_000), TickResult::RenderRequested);
}

#[test]
fn redraw_timer_reports_one_expiry_per_period() {
    let mut timer = RedrawTimer::new(0, 5_000);
    assert!(!timer.poll(4_999));
    assert!(timer.poll(5_000));
    assert!(!timer.poll(5_001));
    assert!(timer.poll(10_000));
    // A stalled loop yields one expiry, not a burst.
    assert!(timer.poll(40_000));
    assert!(!timer.poll(40_001));
}

#[test]
fn random_value_is_sampled_at_draw_time_only() {
    let events = [InputEvent::Ok];
    let mut app = make_app(&events, RecordingPlatform::new());
    let _ = app.tick(0);
    assert_eq!(app.platform.entropy_draws, 0);

    let mut first = None;
    app.with_screen(|screen| {
        if let Screen::Start { prompt, random } = screen {
            assert_eq!(prompt, START_PROMPT);
            first = Some(random);
        }
    });
    assert_eq!(first, Some(0x07));
    assert_eq!(app.platform.entropy_draws, 1);

    // The redraw tick queues a repaint but samples nothing.
    let _ = app.tick(5_000);
    assert_eq!(app.platform.entropy_draws, 1);

    let mut second = None;
    app.with_screen(|screen| {
        if let Screen::Start { random, .. } = screen {
            second = Some(random);
        }
    });
    assert_eq!(second, Some(0x2a));
    assert_eq!(app.platform.entropy_draws, 2);
}

#[test]
fn confirm_press_plays_one_tone_burst() {
    let events = [InputEvent::Ok, InputEvent::Ok];
    let mut app = make_app(&events, RecordingPlatform::new());
    let _ = app.tick(0);
    assert_eq!(
        app.platform.audio.as_slice(),
        &[
            AudioOp::Acquire {
                window_ms: 500,
                granted: true
            },
            AudioOp::Start {
                frequency_hz: 4_000,
                volume: 1.0
            },
            AudioOp::HoldMs(100),
            AudioOp::Stop,
            AudioOp::Release,
        ]
    );
}

#[test]
fn busy_speaker_skips_the_burst_silently() {
    let mut platform = RecordingPlatform::new();
    platform.speaker_free = false;
    let events = [InputEvent::Ok, InputEvent::Ok];
    let mut app = make_app(&events, platform);
    let _ = app.tick(0);
    assert_eq!(
        app.platform.audio.as_slice(),
        &[AudioOp::Acquire {
            window_ms: 500,
            granted: false
        }]
    );
    // The press still counted as handled; the screen did not change.
    assert_eq!(app.active_screen(), ScreenId::Start);
}

#[test]
fn custom_events_are_dropped_outside_the_start_screen() {
    let events: [InputEvent; 0] = [];
    let mut app = make_app(&events, RecordingPlatform::new());
    app.send_custom_event(CustomEvent::ConfirmPressed);
    let _ = app.tick(0);
    assert!(app.platform.audio.is_empty());
    assert!(app.events.is_empty());
}

#[test]
fn menu_cursor_survives_screen_round_trips() {
    let events = [InputEvent::Down, InputEvent::Ok, InputEvent::Back];
    let mut app = make_app(&events, RecordingPlatform::new());
    let _ = app.tick(0);
    assert_eq!(app.active_screen(), ScreenId::Menu);
    assert_eq!(app.menu_cursor, 1);
}

#[test]
fn about_scroll_clamps_at_both_ends() {
    let events = [InputEvent::Down, InputEvent::Ok, InputEvent::Up];
    let mut app = make_app(&events, RecordingPlatform::new());
    let _ = app.tick(0);
    assert_eq!(app.ui, UiState::About { scroll: 0 });

    let max_scroll = about_line_total().saturating_sub(ABOUT_VISIBLE_LINES);
    for _ in 0..about_line_total() {
        app.apply_input_event(InputEvent::Down, 0);
    }
    assert_eq!(app.ui, UiState::About { scroll: max_scroll });
}

#[test]
fn backlight_is_enforced_for_the_app_lifetime() {
    let events: [InputEvent; 0] = [];
    let mut app = make_app(&events, RecordingPlatform::new());
    assert_eq!(app.platform.backlight.as_slice(), &[true]);
    app.shutdown();
    assert_eq!(app.platform.backlight.as_slice(), &[true, false]);
}

#[test]
fn reference_scenario_runs_end_to_end() {
    let select_start = [InputEvent::Ok];
    let confirm = [InputEvent::Ok];
    let back = [InputEvent::Back];

    let mut app = make_app(&select_start, RecordingPlatform::new());
    assert_eq!(app.tick(0), TickResult::RenderRequested);
    assert_eq!(app.active_screen(), ScreenId::Start);

    // One tick period later a redraw arrives on the queue.
    assert_eq!(app.tick(5_000), TickResult::RenderRequested);

    // Confirm press: exactly one burst while the device is free.
    app.input = ScriptedInput::new(&confirm);
    assert_eq!(app.tick(5_010), TickResult::NoRender);
    assert_eq!(app.platform.audio.len(), 5);

    // Back: timer released, menu active again.
    app.input = ScriptedInput::new(&back);
    assert_eq!(app.tick(5_020), TickResult::RenderRequested);
    assert_eq!(app.active_screen(), ScreenId::Menu);
    assert!(app.timer.is_none());
}
