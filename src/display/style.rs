use embedded_graphics::{
    pixelcolor::{Rgb888, RgbColor},
    primitives::{PrimitiveStyle, PrimitiveStyleBuilder, StrokeAlignment},
};

pub const OPA_COVER: u8 = 255;
pub const OPA_TRANSP: u8 = 0;

/// Box style of a card: background plus an inside border.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub bg_color: Rgb888,
    pub border_color: Rgb888,
    pub border_width: u32,
    pub border_opa: u8,
}

impl Style {
    pub const fn new(bg_color: Rgb888) -> Self {
        Self {
            bg_color,
            border_color: bg_color,
            border_width: 0,
            border_opa: OPA_COVER,
        }
    }

    pub const fn with_border(mut self, color: Rgb888, width: u32) -> Self {
        self.border_color = color;
        self.border_width = width;
        self
    }

    /// Border color as it lands on the background at the current opacity.
    pub fn rendered_border(&self) -> Rgb888 {
        blend(self.border_color, self.bg_color, self.border_opa)
    }

    pub fn primitive(&self) -> PrimitiveStyle<Rgb888> {
        let builder = PrimitiveStyleBuilder::new().fill_color(self.bg_color);
        if self.border_width == 0 || self.border_opa == OPA_TRANSP {
            return builder.build();
        }
        builder
            .stroke_color(self.rendered_border())
            .stroke_width(self.border_width)
            .stroke_alignment(StrokeAlignment::Inside)
            .build()
    }
}

/// Mixes `fg` over `bg` with `opa` in 0..=255.
pub fn blend(fg: Rgb888, bg: Rgb888, opa: u8) -> Rgb888 {
    let mix = |f: u8, b: u8| -> u8 {
        let opa = opa as u16;
        ((f as u16 * opa + b as u16 * (255 - opa) + 127) / 255) as u8
    };
    Rgb888::new(mix(fg.r(), bg.r()), mix(fg.g(), bg.g()), mix(fg.b(), bg.b()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blend_extremes() {
        let fg = Rgb888::new(0xE6, 0x7E, 0x22);
        let bg = Rgb888::new(0x33, 0x1A, 0x00);
        assert_eq!(blend(fg, bg, OPA_COVER), fg);
        assert_eq!(blend(fg, bg, OPA_TRANSP), bg);
    }

    #[test]
    fn blend_half() {
        let mid = blend(Rgb888::WHITE, Rgb888::BLACK, 128);
        assert_eq!(mid, Rgb888::new(128, 128, 128));
    }

    #[test]
    fn no_stroke_without_border() {
        let style = Style::new(Rgb888::BLACK);
        assert_eq!(style.primitive().stroke_color, None);

        let bordered = style.with_border(Rgb888::RED, 2);
        assert_eq!(bordered.primitive().stroke_color, Some(Rgb888::RED));
        assert_eq!(bordered.primitive().stroke_width, 2);
    }
}
