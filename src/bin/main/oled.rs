//! SSD1306 rendering of the navigator's view models.

use core::fmt::Write;

use chime_core::{
    app::ABOUT_VISIBLE_LINES,
    render::{MenuItemView, Screen},
};
use embedded_graphics::{
    mono_font::{MonoTextStyle, MonoTextStyleBuilder, ascii::FONT_6X10},
    pixelcolor::BinaryColor,
    prelude::*,
    text::Text,
};
use heapless::String;
use ssd1306::{I2CDisplayInterface, Ssd1306, mode::BufferedGraphicsMode, prelude::*};

pub type Display<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// Initialise the display and clear the screen.
pub fn init<I2C>(i2c: I2C) -> Display<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    let interface = I2CDisplayInterface::new(i2c);
    let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
        .into_buffered_graphics_mode();
    let _ = display.init();
    display.clear_buffer();
    let _ = display.flush();
    display
}

fn text_style() -> MonoTextStyle<'static, BinaryColor> {
    MonoTextStyleBuilder::new()
        .font(&FONT_6X10)
        .text_color(BinaryColor::On)
        .build()
}

pub fn render<I2C>(display: &mut Display<I2C>, screen: Screen<'_>)
where
    I2C: embedded_hal::i2c::I2c,
{
    display.clear_buffer();
    match screen {
        Screen::Menu {
            title,
            items,
            cursor,
        } => draw_menu(display, title, items, cursor),
        Screen::Start { prompt, random } => draw_start(display, prompt, random),
        Screen::About { text, scroll, .. } => draw_about(display, text, scroll),
    }
    let _ = display.flush();
}

fn draw_menu<I2C>(
    display: &mut Display<I2C>,
    title: &str,
    items: &[MenuItemView<'_>],
    cursor: usize,
) where
    I2C: embedded_hal::i2c::I2c,
{
    let _ = Text::new(title, Point::new(0, 10), text_style()).draw(display);

    for (row, item) in items.iter().enumerate() {
        let marker = if row == cursor { ">" } else { " " };
        let mut line: String<36> = String::new();
        let _ = line.push_str(marker);
        let _ = line.push_str(" ");
        let _ = line.push_str(item.label);
        let y = 26 + (row as i32 * 12);
        let _ = Text::new(line.as_str(), Point::new(0, y), text_style()).draw(display);
    }
}

fn draw_start<I2C>(display: &mut Display<I2C>, prompt: &str, random: u8)
where
    I2C: embedded_hal::i2c::I2c,
{
    let _ = Text::new(prompt, Point::new(28, 30), text_style()).draw(display);

    let mut line: String<16> = String::new();
    let _ = write!(line, "random: {random}");
    let _ = Text::new(line.as_str(), Point::new(28, 42), text_style()).draw(display);
}

fn draw_about<I2C>(display: &mut Display<I2C>, text: &str, scroll: u16)
where
    I2C: embedded_hal::i2c::I2c,
{
    let visible = text
        .lines()
        .skip(scroll as usize)
        .take(ABOUT_VISIBLE_LINES as usize);
    for (row, line) in visible.enumerate() {
        let y = 10 + (row as i32 * 10);
        let _ = Text::new(line, Point::new(0, y), text_style()).draw(display);
    }
}

/// Blank and switch the panel off before deep sleep.
pub fn power_off<I2C>(display: &mut Display<I2C>)
where
    I2C: embedded_hal::i2c::I2c,
{
    display.clear_buffer();
    let _ = display.flush();
    let _ = display.set_display_on(false);
}
