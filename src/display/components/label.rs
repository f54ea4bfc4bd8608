use embedded_graphics::{
    geometry::Point,
    mono_font::{MonoFont, MonoTextStyle},
    pixelcolor::Rgb888,
    prelude::DrawTarget,
    text::{Alignment, Baseline, Text, TextStyleBuilder},
    Drawable,
};

#[derive(Debug, Clone)]
pub struct Label {
    pub text: String,
    pub font: &'static MonoFont<'static>,
    pub color: Rgb888,
}

impl Label {
    pub fn new(text: &str, font: &'static MonoFont<'static>, color: Rgb888) -> Self {
        Self {
            text: text.to_string(),
            font,
            color,
        }
    }

    pub fn height(&self) -> u32 {
        self.font.character_size.height
    }

    /// `position` is the top edge, left or right end depending on `alignment`.
    pub fn draw<D>(&self, target: &mut D, position: Point, alignment: Alignment) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        let character_style = MonoTextStyle::new(self.font, self.color);
        let text_style = TextStyleBuilder::new()
            .alignment(alignment)
            .baseline(Baseline::Top)
            .build();
        Text::with_text_style(&self.text, position, character_style, text_style).draw(target)?;
        Ok(())
    }
}
