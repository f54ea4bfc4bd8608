use std::error::Error;

use embedded_canvas::Canvas;
use embedded_graphics::{
    geometry::{Point, Size},
    image::Image,
    pixelcolor::Rgb888,
    prelude::{DrawTarget, Primitive},
    primitives::{Rectangle, RoundedRectangle},
    text::Alignment,
    Drawable,
};
use embedded_icon::{
    mdi::size32px::{ArrowUp, Battery50, Bell, Garage, Home, VolumeHigh},
    NewIcon,
};

use crate::{
    display::{
        style::Style, CARD_PADDING, CARD_RADIUS, COLOR_ACCENT_GREEN, COLOR_CARD_ACTIVE,
        COLOR_CARD_INACTIVE, COLOR_TEXT_GREY, COLOR_TEXT_WHITE, FONT_LABEL,
    },
    state::{device::BORDER_WIDTH, DeviceState, DeviceVisual},
};

use super::{label::Label, DisplayAreaType, DisplayComponent};

pub const ICON_SIZE: u32 = 32;

/// Stable handle of a card, minted by the dashboard builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardId(usize);

impl CardId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Home,
    Bell,
    Garage,
    Speaker,
    ArrowUp,
    Battery,
}

impl Glyph {
    pub fn draw<D>(&self, target: &mut D, top_left: Point, color: Rgb888) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        match self {
            Glyph::Home => Image::new(&Home::new(color), top_left).draw(target),
            Glyph::Bell => Image::new(&Bell::new(color), top_left).draw(target),
            Glyph::Garage => Image::new(&Garage::new(color), top_left).draw(target),
            Glyph::Speaker => Image::new(&VolumeHigh::new(color), top_left).draw(target),
            Glyph::ArrowUp => Image::new(&ArrowUp::new(color), top_left).draw(target),
            Glyph::Battery => Image::new(&Battery50::new(color), top_left).draw(target),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconLabel {
    pub glyph: Glyph,
    pub color: Rgb888,
}

/// A tappable tile: icon and title on top, status at the bottom.
///
/// Cards built with a [`DeviceState`] are stateful and follow the tap cycle,
/// the others are decorative.
#[derive(Debug, Clone)]
pub struct Card {
    pub name: &'static str,
    area: Rectangle,
    pub style: Style,
    pub icon: IconLabel,
    pub title: Label,
    pub status: Label,
    pub device: Option<DeviceState>,
}

impl Card {
    pub fn new(
        glyph: Glyph,
        title: &'static str,
        status_text: &str,
        is_active: bool,
        size: Size,
    ) -> Self {
        let style = if is_active {
            Style::new(COLOR_CARD_ACTIVE).with_border(COLOR_ACCENT_GREEN, BORDER_WIDTH)
        } else {
            Style::new(COLOR_CARD_INACTIVE)
        };
        Self {
            name: title,
            area: Rectangle::new(Point::zero(), size),
            style,
            icon: IconLabel {
                glyph,
                color: if is_active {
                    COLOR_ACCENT_GREEN
                } else {
                    COLOR_TEXT_GREY
                },
            },
            title: Label::new(title, FONT_LABEL, COLOR_TEXT_WHITE),
            status: Label::new(
                status_text,
                FONT_LABEL,
                if is_active {
                    COLOR_TEXT_WHITE
                } else {
                    COLOR_TEXT_GREY
                },
            ),
            device: None,
        }
    }

    pub fn area(&self) -> Rectangle {
        self.area
    }

    pub(crate) fn move_to(&mut self, top_left: Point) {
        self.area.top_left = top_left;
    }

    /// Applies every field of `visual`. A missing border only clears the width.
    pub fn apply(&mut self, visual: &DeviceVisual) {
        self.style.bg_color = visual.background;
        match visual.border {
            Some(border) => {
                self.style.border_color = border.color;
                self.style.border_width = border.width;
            }
            None => self.style.border_width = 0,
        }
        self.status.text = visual.status_text.clone();
        self.status.color = visual.status_color;
        self.icon.color = visual.icon_tint;
    }
}

impl DisplayComponent for Card {
    fn get_type(&self) -> DisplayAreaType {
        DisplayAreaType::Area(self.area)
    }

    fn get_name(&self) -> &str {
        self.name
    }

    fn draw(&mut self, target: &mut Canvas<Rgb888>) -> Result<(), Box<dyn Error>> {
        let bounds = Rectangle::new(Point::zero(), self.area.size);
        RoundedRectangle::with_equal_corners(bounds, Size::new(CARD_RADIUS, CARD_RADIUS))
            .into_styled(self.style.primitive())
            .draw(target)?;

        let inner = bounds.offset(-(CARD_PADDING as i32));
        let left = inner.top_left.x;
        let right = inner.top_left.x + inner.size.width as i32;

        self.icon.glyph.draw(target, inner.top_left, self.icon.color)?;

        let title_y = inner.top_left.y + (ICON_SIZE as i32 - self.title.height() as i32) / 2;
        self.title
            .draw(target, Point::new(right, title_y), Alignment::Right)?;

        let status_y = inner.top_left.y + inner.size.height as i32 - self.status.height() as i32;
        self.status
            .draw(target, Point::new(left, status_y), Alignment::Left)?;

        Ok(())
    }

    fn get_z_index(&self) -> u32 {
        20
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::style::OPA_COVER;
    use embedded_graphics::{geometry::Dimensions, pixelcolor::RgbColor, primitives::PointsIter};
    use embedded_graphics_simulator::SimulatorDisplay;

    fn card() -> Card {
        Card::new(Glyph::Home, "Gate", "CLOSED", false, Size::new(240, 145))
    }

    #[test]
    fn inactive_card_has_no_border() {
        let card = card();
        assert_eq!(card.style.bg_color, COLOR_CARD_INACTIVE);
        assert_eq!(card.style.border_width, 0);
        assert_eq!(card.icon.color, COLOR_TEXT_GREY);
        assert_eq!(card.status.color, COLOR_TEXT_GREY);
        assert_eq!(card.title.color, COLOR_TEXT_WHITE);
    }

    #[test]
    fn active_card_is_green() {
        let card = Card::new(Glyph::Speaker, "Salon", "ON", true, Size::new(240, 145));
        assert_eq!(card.style.bg_color, COLOR_CARD_ACTIVE);
        assert_eq!(card.style.border_color, COLOR_ACCENT_GREEN);
        assert_eq!(card.style.border_width, 2);
        assert_eq!(card.status.color, COLOR_TEXT_WHITE);
    }

    #[test]
    fn apply_then_close_clears_border() {
        let mut card = card();
        card.apply(&DeviceState::Stopped.visual());
        assert_eq!(card.style.border_width, 2);
        assert_eq!(card.status.text, "STOPPED");

        card.apply(&DeviceState::Closed.visual());
        assert_eq!(card.style.border_width, 0);
        assert_eq!(card.status.text, "CLOSED");
        assert_eq!(card.style.border_opa, OPA_COVER);
    }

    #[test]
    fn hit_test_uses_screen_area() {
        let mut card = card();
        card.move_to(Point::new(25, 150));
        assert!(card.contains(Point::new(25, 150)));
        assert!(card.contains(Point::new(264, 294)));
        assert!(!card.contains(Point::new(265, 150)));
        assert!(!card.contains(Point::new(10, 10)));
    }

    #[test]
    fn every_glyph_draws_in_its_color() {
        let glyphs = [
            Glyph::Home,
            Glyph::Bell,
            Glyph::Garage,
            Glyph::Speaker,
            Glyph::ArrowUp,
            Glyph::Battery,
        ];
        for glyph in glyphs {
            let mut display = SimulatorDisplay::<Rgb888>::new(Size::new(ICON_SIZE, ICON_SIZE));
            glyph
                .draw(&mut display, Point::zero(), COLOR_ACCENT_GREEN)
                .unwrap();
            let lit = display
                .bounding_box()
                .points()
                .filter(|p| display.get_pixel(*p) == COLOR_ACCENT_GREEN)
                .count();
            assert!(lit > 0, "{:?} drew nothing", glyph);
        }
    }

    #[test]
    fn draws_background_and_border() {
        let mut card = card();
        card.apply(&DeviceState::Open.visual());
        let mut canvas = Canvas::<Rgb888>::new(card.area().size);
        card.draw(&mut canvas).unwrap();

        let mut display = SimulatorDisplay::<Rgb888>::new(card.area().size);
        canvas.place_at(Point::zero()).draw(&mut display).unwrap();

        // Border sits inside the rounded box, background fills the middle
        assert_eq!(display.get_pixel(Point::new(120, 0)), COLOR_ACCENT_GREEN);
        assert_eq!(display.get_pixel(Point::new(120, 70)), COLOR_CARD_ACTIVE);
        // Rounded corner is left untouched
        assert_eq!(display.get_pixel(Point::new(0, 0)), Rgb888::BLACK);
    }
}
