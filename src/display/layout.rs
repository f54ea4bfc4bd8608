use embedded_graphics::{
    geometry::{Point, Size},
    primitives::Rectangle,
};

/// Row-wrapping flex container with space-between distribution on each line.
#[derive(Debug, Clone, Copy)]
pub struct FlexRowWrap {
    pub area: Rectangle,
    pub gap: Size,
}

impl FlexRowWrap {
    pub fn new(area: Rectangle, gap: Size) -> Self {
        Self { area, gap }
    }

    /// Places items in order, starting a new line when the next item does not fit.
    pub fn place(&self, items: &[Size]) -> Vec<Rectangle> {
        let mut placed = Vec::with_capacity(items.len());
        let mut y = self.area.top_left.y;
        let mut start = 0;

        while start < items.len() {
            let mut end = start + 1;
            let mut used = items[start].width;
            while end < items.len() && used + self.gap.width + items[end].width <= self.area.size.width
            {
                used += self.gap.width + items[end].width;
                end += 1;
            }

            let line = &items[start..end];
            let widths: u32 = line.iter().map(|s| s.width).sum();
            let spacing = if line.len() > 1 {
                (self.area.size.width.saturating_sub(widths) / (line.len() as u32 - 1))
                    .max(self.gap.width)
            } else {
                0
            };

            let mut x = self.area.top_left.x;
            for size in line {
                placed.push(Rectangle::new(Point::new(x, y), *size));
                x += (size.width + spacing) as i32;
            }

            let line_height = line.iter().map(|s| s.height).max().unwrap_or(0);
            y += (line_height + self.gap.height) as i32;
            start = end;
        }

        placed
    }
}
