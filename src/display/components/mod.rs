use std::error::Error;

pub mod card;
pub mod header;
pub mod label;
pub mod overlay;

use embedded_canvas::Canvas;
use embedded_graphics::{geometry::Point, pixelcolor::Rgb888, primitives::Rectangle};

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum DisplayAreaType {
    Area(Rectangle), // fixed box on screen, i.e. a device card
    Fullscreen,      // covers the whole panel, i.e. the screensaver overlay
}

pub trait DisplayComponent {
    fn get_type(&self) -> DisplayAreaType;
    fn get_name(&self) -> &str;
    /// Draws in component-local coordinates onto a canvas sized to the area.
    fn draw(&mut self, target: &mut Canvas<Rgb888>) -> Result<(), Box<dyn Error>>;
    fn get_z_index(&self) -> u32;

    fn is_visible(&self) -> bool {
        true
    }

    /// Hit test in screen coordinates.
    fn contains(&self, point: Point) -> bool {
        if !self.is_visible() {
            return false;
        }
        match self.get_type() {
            DisplayAreaType::Area(area) => area.contains(point),
            DisplayAreaType::Fullscreen => true,
        }
    }
}
