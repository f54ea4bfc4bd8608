use std::error::Error;

use embedded_canvas::Canvas;
use embedded_graphics::{
    geometry::{Point, Size},
    image::Image,
    pixelcolor::Rgb888,
    primitives::Rectangle,
    text::Alignment,
    Drawable,
};
use tinybmp::Bmp;

use crate::display::{
    COLOR_ACCENT_ORANGE, COLOR_TEXT_GREY, COLOR_TEXT_WHITE, FONT_CLOCK, FONT_SMALL,
    FONT_TEMPERATURE,
};

use super::{label::Label, DisplayAreaType, DisplayComponent};

pub const WEATHER_BOX_WIDTH: u32 = 260;
const WEATHER_ICON_SIZE: u32 = 64;
const WEATHER_GAP: u32 = 15;
const DATE_PAD_LEFT: i32 = 5;
const DATE_PAD_TOP: i32 = 8;

/// Clock and date on the left, weather summary on the right.
pub struct Header {
    area: Rectangle,
    pub time: Label,
    pub date: Label,
    pub temperature: Label,
    pub description: Label,
    weather_icon: Bmp<'static, Rgb888>,
}

impl Header {
    pub fn new(area: Rectangle, time: &str, weather_icon: Bmp<'static, Rgb888>) -> Self {
        Self {
            area,
            time: Label::new(time, FONT_CLOCK, COLOR_TEXT_WHITE),
            date: Label::new("Wednesday, 26 Nov", FONT_SMALL, COLOR_TEXT_GREY),
            temperature: Label::new("24°C", FONT_TEMPERATURE, COLOR_TEXT_WHITE),
            description: Label::new("Sunny", FONT_SMALL, COLOR_ACCENT_ORANGE),
            weather_icon,
        }
    }

    pub fn set_time(&mut self, text: String) {
        self.time.text = text;
    }
}

fn text_width(label: &Label) -> u32 {
    let chars = label.text.chars().count() as u32;
    if chars == 0 {
        return 0;
    }
    let glyph = label.font.character_size.width;
    glyph * chars + label.font.character_spacing * (chars - 1)
}

impl DisplayComponent for Header {
    fn get_type(&self) -> DisplayAreaType {
        DisplayAreaType::Area(self.area)
    }

    fn get_name(&self) -> &str {
        "header"
    }

    fn draw(&mut self, target: &mut Canvas<Rgb888>) -> Result<(), Box<dyn Error>> {
        let Size { width, height } = self.area.size;

        // Time box
        let time_height = (self.time.height() + DATE_PAD_TOP as u32 + self.date.height()) as i32;
        let time_y = (height as i32 - time_height) / 2;
        self.time
            .draw(target, Point::new(0, time_y), Alignment::Left)?;
        self.date.draw(
            target,
            Point::new(
                DATE_PAD_LEFT,
                time_y + self.time.height() as i32 + DATE_PAD_TOP,
            ),
            Alignment::Left,
        )?;

        // Weather box, packed against the right edge
        let right = width as i32;
        let text_column = text_width(&self.temperature).max(text_width(&self.description));
        let icon_x = (right - (text_column + WEATHER_GAP + WEATHER_ICON_SIZE) as i32)
            .max(right - WEATHER_BOX_WIDTH as i32);
        let icon_y = (height as i32 - WEATHER_ICON_SIZE as i32) / 2;
        Image::new(&self.weather_icon, Point::new(icon_x, icon_y)).draw(target)?;

        let texts_height = (self.temperature.height() + self.description.height()) as i32;
        let texts_y = (height as i32 - texts_height) / 2;
        self.temperature
            .draw(target, Point::new(right, texts_y), Alignment::Right)?;
        self.description.draw(
            target,
            Point::new(right, texts_y + self.temperature.height() as i32),
            Alignment::Right,
        )?;

        Ok(())
    }

    fn get_z_index(&self) -> u32 {
        10
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::HEADER_HEIGHT;

    #[test]
    fn text_width_counts_spacing() {
        let label = Label::new("21:34", FONT_CLOCK, COLOR_TEXT_WHITE);
        let glyph = FONT_CLOCK.character_size.width;
        let spacing = FONT_CLOCK.character_spacing;
        assert_eq!(text_width(&label), glyph * 5 + spacing * 4);
        assert_eq!(text_width(&Label::new("", FONT_CLOCK, COLOR_TEXT_WHITE)), 0);
    }

    #[test]
    fn set_time_replaces_text() {
        let icon = Bmp::<Rgb888>::from_slice(crate::dashboard::CLEAR_DAY_BMP).unwrap();
        let mut header = Header::new(
            Rectangle::new(Point::new(25, 15), Size::new(750, HEADER_HEIGHT)),
            "21:34",
            icon,
        );
        header.set_time("21:35".to_string());
        assert_eq!(header.time.text, "21:35");

        let mut canvas = Canvas::<Rgb888>::new(header.area.size);
        assert!(header.draw(&mut canvas).is_ok());
    }
}
