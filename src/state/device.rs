use embedded_graphics::pixelcolor::Rgb888;
use enum_primitive::FromPrimitive;
use serde::Serialize;

use crate::display::{
    serialize_color, COLOR_ACCENT_GREEN, COLOR_ACCENT_ORANGE, COLOR_ACCENT_RED,
    COLOR_CARD_ACTIVE, COLOR_CARD_INACTIVE, COLOR_CARD_MOVING, COLOR_CARD_STOPPED,
    COLOR_TEXT_GREY, COLOR_TEXT_WHITE,
};

const STATE_COUNT: u8 = 4;

/// Border width used by every bordered device state.
pub const BORDER_WIDTH: u32 = 2;

enum_from_primitive! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
    pub enum DeviceState {
        Closed = 0,
        Open = 1,
        Moving = 2,
        Stopped = 3,
    }
}

impl DeviceState {
    pub fn from_int(int: u8) -> DeviceState {
        let Some(state) = DeviceState::from_u8(int % STATE_COUNT) else {
            return DeviceState::Closed;
        };
        state
    }

    /// Next state in the tap cycle Closed -> Open -> Moving -> Stopped -> Closed.
    pub fn next(self) -> DeviceState {
        DeviceState::from_int(self as u8 + 1)
    }

    /// Total mapping from state to the visuals of its card.
    pub fn visual(self) -> DeviceVisual {
        match self {
            DeviceState::Closed => DeviceVisual {
                background: COLOR_CARD_INACTIVE,
                border: None,
                blink: BorderBlink::None,
                status_text: "CLOSED".to_string(),
                status_color: COLOR_TEXT_GREY,
                icon_tint: COLOR_TEXT_GREY,
            },
            DeviceState::Open => DeviceVisual {
                background: COLOR_CARD_ACTIVE,
                border: Some(Border::new(COLOR_ACCENT_GREEN)),
                blink: BorderBlink::None,
                status_text: "OPEN".to_string(),
                status_color: COLOR_TEXT_WHITE,
                icon_tint: COLOR_ACCENT_GREEN,
            },
            DeviceState::Moving => DeviceVisual {
                background: COLOR_CARD_MOVING,
                border: Some(Border::new(COLOR_ACCENT_ORANGE)),
                blink: BorderBlink::Pulsing,
                status_text: "MOVING...".to_string(),
                status_color: COLOR_TEXT_WHITE,
                icon_tint: COLOR_ACCENT_ORANGE,
            },
            DeviceState::Stopped => DeviceVisual {
                background: COLOR_CARD_STOPPED,
                border: Some(Border::new(COLOR_ACCENT_RED)),
                blink: BorderBlink::None,
                status_text: "STOPPED".to_string(),
                status_color: COLOR_TEXT_WHITE,
                icon_tint: COLOR_ACCENT_RED,
            },
        }
    }
}

impl std::fmt::Display for DeviceState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match &self {
                DeviceState::Closed => "Closed",
                DeviceState::Open => "Open",
                DeviceState::Moving => "Moving",
                DeviceState::Stopped => "Stopped",
            }
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Border {
    #[serde(serialize_with = "serialize_color")]
    pub color: Rgb888,
    pub width: u32,
}

impl Border {
    pub const fn new(color: Rgb888) -> Self {
        Self {
            color,
            width: BORDER_WIDTH,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BorderBlink {
    None,
    Pulsing,
}

/// Everything a device state changes on its card. Derived, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeviceVisual {
    #[serde(serialize_with = "serialize_color")]
    pub background: Rgb888,
    pub border: Option<Border>,
    pub blink: BorderBlink,
    pub status_text: String,
    #[serde(serialize_with = "serialize_color")]
    pub status_color: Rgb888,
    #[serde(serialize_with = "serialize_color")]
    pub icon_tint: Rgb888,
}
