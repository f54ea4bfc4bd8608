use std::time::Instant;

use debug_print::debug_println;
use embedded_canvas::Canvas;
use embedded_graphics::{
    geometry::Point,
    pixelcolor::Rgb888,
    prelude::{DrawTarget, RgbColor},
    Drawable,
};
use thiserror::Error;

use crate::{
    config::PULSE_HALF_PERIOD,
    display::{
        anim::{AnimatedProperty, Animation, Animator},
        components::{
            card::{Card, CardId},
            header::Header,
            overlay::Screensaver,
            DisplayAreaType, DisplayComponent,
        },
        style::{OPA_COVER, OPA_TRANSP},
        COLOR_BG_SCREEN,
    },
    hal::IoExpander,
    log,
    state::{BorderBlink, ClockState, DeviceState, InactivityMonitor, PowerState},
};

pub mod builder;

pub const CLEAR_DAY_BMP: &[u8] = include_bytes!("../../assets/clear_day.bmp");

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Could not decode asset '{0}': {1:?}")]
    Asset(&'static str, tinybmp::ParseError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnimKey(pub CardId, pub AnimatedProperty);

/// Owns every widget and both state machines. Handlers take it by `&mut`,
/// callers serialize access through one lock.
pub struct DashboardContext {
    header: Header,
    cards: Vec<Card>,
    overlay: Screensaver,
    animator: Animator<AnimKey>,
    power: InactivityMonitor,
    clock: ClockState,
    expander: Box<dyn IoExpander>,
    /// Where the current touch went down
    pressed: Option<Point>,
}

impl DashboardContext {
    /// Applies the visuals of `state` to a card.
    ///
    /// The running border pulse is cancelled and the border made opaque before
    /// anything else, so leaving `Moving` never keeps a stale pulse and
    /// rendering `Moving` twice never stacks two.
    pub fn render(&mut self, id: CardId, state: DeviceState, now: Instant) {
        let key = AnimKey(id, AnimatedProperty::BorderOpa);
        self.animator.cancel(key);

        let card = &mut self.cards[id.index()];
        card.style.border_opa = OPA_COVER;

        let visual = state.visual();
        card.apply(&visual);
        debug_println!(
            "{} {} -> {}",
            log::STATE,
            card.name,
            serde_json::to_string(&visual).unwrap_or_default()
        );

        if visual.blink == BorderBlink::Pulsing {
            self.animator.start(
                key,
                Animation::new(OPA_COVER as i32, OPA_TRANSP as i32, PULSE_HALF_PERIOD, now)
                    .with_playback(PULSE_HALF_PERIOD)
                    .repeat_infinite(),
            );
        }
    }

    /// Moves a stateful card one step along its cycle. Decorative cards ignore taps.
    pub fn advance(&mut self, id: CardId, now: Instant) -> Option<DeviceState> {
        let card = &mut self.cards[id.index()];
        let old = card.device?;
        let new = old.next();
        card.device = Some(new);
        println!("{} Updated {} old: {}, new: {}", log::STATE, card.name, old, new);

        self.render(id, new, now);
        Some(new)
    }

    /// Touch down anywhere.
    pub fn on_press(&mut self, point: Point, now: Instant) {
        self.power.note_input(now);
        self.pressed = Some(point);
    }

    /// Release at `point`. While blanked the overlay swallows it. A card only
    /// counts it as a click when the touch also went down on that card.
    pub fn on_tap(&mut self, point: Point, now: Instant) {
        let pressed = self.pressed.take();
        if self.overlay.contains(point) {
            self.wake(now);
            return;
        }
        self.power.note_input(now);

        let Some(id) = self.card_at(point) else {
            return;
        };
        if pressed.and_then(|p| self.card_at(p)) != Some(id) {
            debug_println!(
                "{} Release on {} did not start there, ignored",
                log::INPUT,
                self.cards[id.index()].name
            );
            return;
        }
        debug_println!("{} Tap on {}", log::INPUT, self.cards[id.index()].name);
        self.advance(id, now);
    }

    /// Overlay tap handler.
    pub fn wake(&mut self, now: Instant) {
        if self.power.wake(now).is_some() {
            self.write_backlight(true);
            println!("{} Display woken", log::POWER);
        }
        self.overlay.hide();
    }

    /// Inactivity timer callback.
    pub fn check_inactivity(&mut self, now: Instant) {
        if self.power.check(now) == Some(PowerState::Blanked) {
            self.overlay.show();
            self.write_backlight(false);
            println!(
                "{} Display blanked after {}s without input",
                log::POWER,
                self.power.inactive_for(now).as_secs()
            );
        }
    }

    /// Clock timer callback.
    pub fn advance_clock(&mut self, now: Instant) {
        if self.clock.advance(now) {
            self.header.set_time(self.clock.to_string());
        }
    }

    /// Steps running animations to `now`.
    pub fn animate(&mut self, now: Instant) {
        for (AnimKey(id, property), value) in self.animator.sample(now) {
            let card = &mut self.cards[id.index()];
            match property {
                AnimatedProperty::BorderOpa => {
                    card.style.border_opa = value.clamp(OPA_TRANSP as i32, OPA_COVER as i32) as u8
                }
            }
        }
    }

    pub fn draw<D>(&mut self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        if self.power.state() == PowerState::Blanked {
            return target.clear(Rgb888::BLACK);
        }
        target.clear(COLOR_BG_SCREEN)?;
        let screen = target.bounding_box();

        let mut components: Vec<&mut dyn DisplayComponent> = Vec::with_capacity(self.cards.len() + 2);
        components.push(&mut self.header);
        for card in self.cards.iter_mut() {
            components.push(card);
        }
        components.push(&mut self.overlay);
        components.sort_by_key(|c| c.get_z_index());

        for component in components {
            if !component.is_visible() {
                continue;
            }
            let area = match component.get_type() {
                DisplayAreaType::Area(area) => area,
                DisplayAreaType::Fullscreen => screen,
            };
            let mut canvas = Canvas::<Rgb888>::new(area.size);
            if let Err(e) = component.draw(&mut canvas) {
                println!(
                    "{} Could not draw {}: {}",
                    log::ERROR,
                    component.get_name(),
                    e
                );
                continue;
            }
            canvas.place_at(area.top_left).draw(target)?;
        }
        Ok(())
    }

    fn write_backlight(&mut self, on: bool) {
        if let Err(e) = self.expander.set_backlight(on) {
            println!("{} Backlight {}: {}", log::ERROR, if on { "on" } else { "off" }, e);
        }
    }

    fn card_at(&self, point: Point) -> Option<CardId> {
        self.cards
            .iter()
            .position(|card| card.contains(point))
            .map(CardId::new)
    }
}
