use std::error::Error;

use embedded_canvas::Canvas;
use embedded_graphics::pixelcolor::Rgb888;

use super::{DisplayAreaType, DisplayComponent};

/// Full-screen transparent tap catcher shown while the display is blanked.
#[derive(Debug)]
pub struct Screensaver {
    hidden: bool,
}

impl Screensaver {
    pub fn new() -> Self {
        Self { hidden: true }
    }

    pub fn show(&mut self) {
        self.hidden = false;
    }

    pub fn hide(&mut self) {
        self.hidden = true;
    }

    #[cfg(test)]
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }
}

impl DisplayComponent for Screensaver {
    fn get_type(&self) -> DisplayAreaType {
        DisplayAreaType::Fullscreen
    }

    fn get_name(&self) -> &str {
        "screensaver"
    }

    fn draw(&mut self, _target: &mut Canvas<Rgb888>) -> Result<(), Box<dyn Error>> {
        // Fully transparent, only catches taps
        Ok(())
    }

    fn get_z_index(&self) -> u32 {
        100
    }

    fn is_visible(&self) -> bool {
        !self.hidden
    }
}
