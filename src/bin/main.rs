//! ESP32-S3 wiring for the Chime demo handheld: peripheral bring-up, the
//! board-side seam implementations, and the dispatch loop driving the
//! navigator.
#![no_std]
#![no_main]

use chime_core::{
    app::{NavigatorApp, NavigatorConfig, TickResult},
    platform::{Backlight, EntropySource, Speaker},
};
use embassy_executor::Spawner;
use embassy_time::Timer;
use embedded_hal::delay::DelayNs;
use esp_hal::{
    clock::CpuClock,
    delay::Delay,
    gpio::{Input, InputConfig, Level, Output, OutputConfig, Pull},
    i2c::master::{Config as I2cConfig, I2c},
    ledc::{
        LSGlobalClkSource, Ledc, LowSpeed,
        channel::{self, ChannelIFace},
        timer::{self as ledc_timer, TimerIFace},
    },
    rng::Rng,
    time::{Instant, Rate},
    timer::timg::TimerGroup,
};
use log::{LevelFilter, info};
use static_cell::StaticCell;

use buttons::{ButtonConfig, ButtonPad};
use buzzer::PwmSpeaker;

#[path = "main/buttons.rs"]
mod buttons;
#[path = "main/buzzer.rs"]
mod buzzer;
#[path = "main/oled.rs"]
mod oled;
#[path = "main/power.rs"]
mod power;

esp_bootloader_esp_idf::esp_app_desc!();

const TITLE: &str = "Chime";
const LOOP_PACE_MS: u64 = 1;
const BUTTON_DEBOUNCE_POLLS: u8 = 3;

static TONE_TIMER: StaticCell<ledc_timer::Timer<'static, LowSpeed>> = StaticCell::new();

/// Board-level implementation of the navigator's platform seams.
struct Board<'a> {
    speaker: PwmSpeaker<'a>,
    rng: Rng,
    backlight: Output<'a>,
    delay: Delay,
}

impl Speaker for Board<'_> {
    fn acquire(&mut self, timeout_ms: u32) -> bool {
        self.speaker.acquire(timeout_ms)
    }

    fn start(&mut self, frequency_hz: u16, volume: f32) {
        self.speaker.start(frequency_hz, volume);
    }

    fn stop(&mut self) {
        self.speaker.stop();
    }

    fn release(&mut self) {
        self.speaker.release();
    }
}

impl EntropySource for Board<'_> {
    fn random_byte(&mut self) -> u8 {
        (self.rng.random() & 0xff) as u8
    }
}

impl Backlight for Board<'_> {
    fn set_backlight_enforced(&mut self, enforced: bool) {
        let level = if enforced { Level::High } else { Level::Low };
        self.backlight.set_level(level);
    }
}

impl DelayNs for Board<'_> {
    fn delay_ns(&mut self, ns: u32) {
        self.delay.delay_ns(ns);
    }

    fn delay_us(&mut self, us: u32) {
        self.delay.delay_us(us);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }
}

#[esp_rtos::main]
async fn main(_spawner: Spawner) -> ! {
    esp_println::logger::init_logger(LevelFilter::Info);
    esp_println::println!("boot: chime starting");

    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);

    // Wiring used by this board:
    // OLED SDA=GPIO5 SCL=GPIO6, buttons UP=GPIO10 DOWN=GPIO11 OK=GPIO12
    // BACK=GPIO13, buzzer=GPIO18, backlight rail=GPIO7
    let i2c = I2c::new(peripherals.I2C0, I2cConfig::default())
        .unwrap()
        .with_sda(peripherals.GPIO5)
        .with_scl(peripherals.GPIO6);
    let mut display = oled::init(i2c);

    let input_cfg = InputConfig::default().with_pull(Pull::Up);
    let pad = ButtonPad::new(
        Input::new(peripherals.GPIO10, input_cfg),
        Input::new(peripherals.GPIO11, input_cfg),
        Input::new(peripherals.GPIO12, input_cfg),
        Input::new(peripherals.GPIO13, input_cfg),
        ButtonConfig::default().with_debounce_polls(BUTTON_DEBOUNCE_POLLS),
    )
    .unwrap();

    let navigator_config = NavigatorConfig::default();

    let mut ledc = Ledc::new(peripherals.LEDC);
    ledc.set_global_slow_clock(LSGlobalClkSource::APBClk);
    let tone_timer = TONE_TIMER.init(ledc.timer::<LowSpeed>(ledc_timer::Number::Timer0));
    tone_timer
        .configure(ledc_timer::config::Config {
            duty: ledc_timer::config::Duty::Duty10Bit,
            clock_source: ledc_timer::LSClockSource::APBClk,
            frequency: Rate::from_hz(navigator_config.tone_frequency_hz as u32),
        })
        .unwrap();
    let tone_timer: &'static ledc_timer::Timer<'static, LowSpeed> = tone_timer;

    let mut tone_channel = ledc.channel::<LowSpeed>(channel::Number::Channel0, peripherals.GPIO18);
    tone_channel
        .configure(channel::config::Config {
            timer: tone_timer,
            duty_pct: 0,
            pin_config: channel::config::PinConfig::PushPull,
        })
        .unwrap();

    let board = Board {
        speaker: PwmSpeaker::new(tone_channel, navigator_config.tone_frequency_hz),
        rng: Rng::new(),
        backlight: Output::new(peripherals.GPIO7, Level::Low, OutputConfig::default()),
        delay: Delay::new(),
    };

    let mut app = NavigatorApp::new(pad, board, navigator_config, TITLE);

    info!(
        "chime started: redraw_period_ms={} tone_hz={} tone_ms={}",
        navigator_config.redraw_period_ms,
        navigator_config.tone_frequency_hz,
        navigator_config.tone_duration_ms
    );
    info!("OLED pins: SDA=GPIO5 SCL=GPIO6");
    info!("Button pins: UP=GPIO10 DOWN=GPIO11 OK=GPIO12 BACK=GPIO13");
    info!("Buzzer pin: GPIO18, backlight rail: GPIO7");

    let loop_start = Instant::now();
    loop {
        let now_ms = loop_start.elapsed().as_millis();
        match app.tick(now_ms) {
            TickResult::Exit => break,
            TickResult::RenderRequested => {
                app.with_screen(|screen| oled::render(&mut display, screen));
            }
            TickResult::NoRender => {}
        }
        Timer::after_millis(LOOP_PACE_MS).await;
    }

    app.shutdown();
    info!("exit: back pressed on menu, entering deep sleep");
    oled::power_off(&mut display);
    power::enter_deep_sleep()
}
