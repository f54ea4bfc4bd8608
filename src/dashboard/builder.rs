use std::time::Instant;

use embedded_graphics::{
    geometry::{Point, Size},
    primitives::Rectangle,
};
use tinybmp::Bmp;

use crate::{
    config::{Settings, HEIGHT, WIDTH},
    display::{
        anim::Animator,
        components::{
            card::{Card, CardId, Glyph},
            header::Header,
            overlay::Screensaver,
        },
        layout::FlexRowWrap,
        CARD_HEIGHT, CARD_WIDTH, GRID_GAP, GRID_PAD_TOP, HEADER_HEIGHT, SCREEN_PAD_HOR,
        SCREEN_PAD_VER,
    },
    hal::IoExpander,
    log,
    state::{ClockState, DeviceState, InactivityMonitor},
};

use super::{DashboardContext, DashboardError, CLEAR_DAY_BMP};

struct CardSpec {
    glyph: Glyph,
    title: &'static str,
    status: &'static str,
    is_active: bool,
    stateful: bool,
}

const CARDS: [CardSpec; 6] = [
    CardSpec {
        glyph: Glyph::Home,
        title: "Gate",
        status: "CLOSED",
        is_active: false,
        stateful: true,
    },
    CardSpec {
        glyph: Glyph::Bell,
        title: "Small gate",
        status: "CLOSED",
        is_active: false,
        stateful: false,
    },
    CardSpec {
        glyph: Glyph::Garage,
        title: "Garage",
        status: "CLOSED",
        is_active: false,
        stateful: true,
    },
    CardSpec {
        glyph: Glyph::Speaker,
        title: "Salon",
        status: "ON",
        is_active: true,
        stateful: false,
    },
    CardSpec {
        glyph: Glyph::ArrowUp,
        title: "Blinds",
        status: "OPEN",
        is_active: false,
        stateful: false,
    },
    CardSpec {
        glyph: Glyph::Battery,
        title: "Garden",
        status: "OFF",
        is_active: false,
        stateful: false,
    },
];

fn content_area() -> Rectangle {
    Rectangle::new(
        Point::new(SCREEN_PAD_HOR as i32, SCREEN_PAD_VER as i32),
        Size::new(WIDTH - 2 * SCREEN_PAD_HOR, HEIGHT - 2 * SCREEN_PAD_VER),
    )
}

impl DashboardContext {
    /// Builds the whole dashboard. Nothing can reach the context before this returns.
    pub fn build(
        settings: &Settings,
        expander: Box<dyn IoExpander>,
        now: Instant,
    ) -> Result<Self, DashboardError> {
        let weather_icon = Bmp::from_slice(CLEAR_DAY_BMP)
            .map_err(|e| DashboardError::Asset("clear_day.bmp", e))?;

        let content = content_area();
        let header_area = Rectangle::new(content.top_left, Size::new(content.size.width, HEADER_HEIGHT));
        let clock = ClockState::new(
            settings.clock_start.hour,
            settings.clock_start.minute,
            now,
        );

        let mut context = Self {
            header: Header::new(header_area, &clock.to_string(), weather_icon),
            cards: Vec::with_capacity(CARDS.len()),
            overlay: Screensaver::new(),
            animator: Animator::new(),
            power: InactivityMonitor::new(settings.screen_timeout(), now),
            clock,
            expander,
            pressed: None,
        };

        for entry in CARDS.iter() {
            let id = context.create_card(
                entry.glyph,
                entry.title,
                entry.status,
                entry.is_active,
                Size::new(CARD_WIDTH, CARD_HEIGHT),
            );
            if entry.stateful {
                context.cards[id.index()].device = Some(DeviceState::Closed);
                context.render(id, DeviceState::Closed, now);
            }
        }
        context.layout_grid(content);

        println!(
            "{} Dashboard built with {} cards",
            log::SCREEN,
            context.cards.len()
        );
        Ok(context)
    }

    /// Adds a card; it gets its place on screen from [`Self::layout_grid`].
    pub fn create_card(
        &mut self,
        glyph: Glyph,
        title: &'static str,
        status_text: &str,
        is_active: bool,
        size: Size,
    ) -> CardId {
        self.cards
            .push(Card::new(glyph, title, status_text, is_active, size));
        CardId::new(self.cards.len() - 1)
    }

    fn layout_grid(&mut self, content: Rectangle) {
        let offset = (HEADER_HEIGHT + GRID_PAD_TOP) as i32;
        let grid = Rectangle::new(
            content.top_left + Point::new(0, offset),
            Size::new(
                content.size.width,
                content.size.height.saturating_sub(offset as u32),
            ),
        );
        let sizes: Vec<Size> = self.cards.iter().map(|card| card.area().size).collect();
        let placed = FlexRowWrap::new(grid, Size::new(GRID_GAP, GRID_GAP)).place(&sizes);
        for (card, area) in self.cards.iter_mut().zip(placed) {
            card.move_to(area.top_left);
        }
    }
}
