pub mod anim;
pub mod layout;
pub mod style;

pub mod components;

use embedded_graphics::{
    mono_font::MonoFont,
    pixelcolor::{Rgb888, RgbColor},
};
use profont::{PROFONT_14_POINT, PROFONT_18_POINT, PROFONT_24_POINT};
use serde::Serializer;

pub const COLOR_BG_SCREEN: Rgb888 = Rgb888::new(0x00, 0x00, 0x00);
pub const COLOR_CARD_INACTIVE: Rgb888 = Rgb888::new(0x1F, 0x1F, 0x1F);
pub const COLOR_CARD_ACTIVE: Rgb888 = Rgb888::new(0x1B, 0x30, 0x1B);
pub const COLOR_CARD_MOVING: Rgb888 = Rgb888::new(0x33, 0x1A, 0x00);
pub const COLOR_CARD_STOPPED: Rgb888 = Rgb888::new(0x4A, 0x0E, 0x0E);
pub const COLOR_ACCENT_GREEN: Rgb888 = Rgb888::new(0x2E, 0xCC, 0x71);
pub const COLOR_ACCENT_ORANGE: Rgb888 = Rgb888::new(0xE6, 0x7E, 0x22);
pub const COLOR_ACCENT_RED: Rgb888 = Rgb888::new(0xE7, 0x4C, 0x3C);
pub const COLOR_TEXT_WHITE: Rgb888 = Rgb888::new(0xFF, 0xFF, 0xFF);
pub const COLOR_TEXT_GREY: Rgb888 = Rgb888::new(0x99, 0x99, 0x99);

pub const FONT_CLOCK: &MonoFont<'static> = &PROFONT_24_POINT;
pub const FONT_TEMPERATURE: &MonoFont<'static> = &PROFONT_24_POINT;
pub const FONT_LABEL: &MonoFont<'static> = &PROFONT_18_POINT;
pub const FONT_SMALL: &MonoFont<'static> = &PROFONT_14_POINT;

pub const SCREEN_PAD_HOR: u32 = 25;
pub const SCREEN_PAD_VER: u32 = 15;
pub const HEADER_HEIGHT: u32 = 110;
pub const GRID_PAD_TOP: u32 = 25;
pub const GRID_GAP: u32 = 12;

pub const CARD_WIDTH: u32 = 240;
pub const CARD_HEIGHT: u32 = 145;
pub const CARD_RADIUS: u32 = 12;
pub const CARD_PADDING: u32 = 14;

/// Serializes a color as `#RRGGBB`.
pub fn serialize_color<S: Serializer>(color: &Rgb888, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format!(
        "#{:02X}{:02X}{:02X}",
        color.r(),
        color.g(),
        color.b()
    ))
}
