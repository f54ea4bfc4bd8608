use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard},
};

use debug_print::debug_println;
use embedded_graphics::{
    geometry::Size,
    pixelcolor::Rgb888,
    prelude::{DrawTarget, RgbColor},
};
use embedded_graphics_simulator::{
    sdl2::MouseButton, OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window,
};

use crate::{config::Settings, log};

use super::{HalError, InputEvent, IoExpander, Level, Line, Panel};

// Levels and history are only read back through the probe
#[cfg_attr(not(test), allow(dead_code))]
#[derive(Debug, Default)]
struct ExpanderState {
    initialised: bool,
    outputs_enabled: bool,
    levels: HashMap<Line, Level>,
    history: Vec<(Line, Level)>,
}

/// IO expander stand-in that remembers every line write.
#[derive(Debug, Default)]
pub struct SimulatedExpander {
    state: Arc<Mutex<ExpanderState>>,
}

/// Read side of a [`SimulatedExpander`], stays valid after the expander is boxed away.
#[cfg(test)]
#[derive(Debug, Clone)]
pub struct ExpanderProbe {
    state: Arc<Mutex<ExpanderState>>,
}

fn lock(state: &Mutex<ExpanderState>) -> MutexGuard<'_, ExpanderState> {
    state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl SimulatedExpander {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn probe(&self) -> ExpanderProbe {
        ExpanderProbe {
            state: self.state.clone(),
        }
    }
}

#[cfg(test)]
impl ExpanderProbe {
    pub fn level(&self, line: Line) -> Option<Level> {
        lock(&self.state).levels.get(&line).copied()
    }

    pub fn history(&self) -> Vec<(Line, Level)> {
        lock(&self.state).history.clone()
    }
}

impl IoExpander for SimulatedExpander {
    fn init(&mut self) -> Result<(), HalError> {
        lock(&self.state).initialised = true;
        Ok(())
    }

    fn enable_all_outputs(&mut self) -> Result<(), HalError> {
        let mut state = lock(&self.state);
        if !state.initialised {
            return Err(HalError::ExpanderNotReady);
        }
        state.outputs_enabled = true;
        Ok(())
    }

    fn digital_write(&mut self, line: Line, level: Level) -> Result<(), HalError> {
        let mut state = lock(&self.state);
        if !state.initialised {
            return Err(HalError::ExpanderNotReady);
        }
        if !state.outputs_enabled {
            return Err(HalError::NotOutput(line));
        }
        debug_println!("{} {:?} -> {:?}", log::HAL, line, level);
        state.levels.insert(line, level);
        state.history.push((line, level));
        Ok(())
    }
}

/// SDL window standing in for the RGB panel; the mouse plays the touch screen.
pub struct SimulatorPanel {
    display: SimulatorDisplay<Rgb888>,
    window: Option<Window>,
    title: String,
    scale: u32,
    touch_irq: Level,
}

impl SimulatorPanel {
    pub fn new(size: Size, settings: &Settings) -> Self {
        Self {
            display: SimulatorDisplay::new(size),
            window: None,
            title: settings.title.clone(),
            scale: settings.scale,
            touch_irq: Level::High,
        }
    }

    pub fn display_mut(&mut self) -> &mut SimulatorDisplay<Rgb888> {
        &mut self.display
    }

    /// Pushes the framebuffer to the window.
    pub fn flush(&mut self) -> Result<(), HalError> {
        let Some(window) = self.window.as_mut() else {
            return Err(HalError::PanelNotReady);
        };
        window.update(&self.display);
        Ok(())
    }

    pub fn poll_events(&mut self) -> Result<Vec<InputEvent>, HalError> {
        let Some(window) = self.window.as_mut() else {
            return Err(HalError::PanelNotReady);
        };
        let events = window
            .events()
            .filter_map(|event| match event {
                SimulatorEvent::Quit => Some(InputEvent::Quit),
                SimulatorEvent::MouseButtonDown {
                    mouse_btn: MouseButton::Left,
                    point,
                } => Some(InputEvent::Press(point)),
                SimulatorEvent::MouseButtonUp {
                    mouse_btn: MouseButton::Left,
                    point,
                } => Some(InputEvent::Tap(point)),
                _ => None,
            })
            .collect();
        Ok(events)
    }
}

impl Panel for SimulatorPanel {
    fn set_touch_irq(&mut self, level: Level) -> Result<(), HalError> {
        self.touch_irq = level;
        Ok(())
    }

    fn init(&mut self) -> Result<(), HalError> {
        if self.touch_irq != Level::Low {
            return Err(HalError::PanelInit(
                "touch interrupt line must be low during init".into(),
            ));
        }
        let output_settings = OutputSettingsBuilder::new().scale(self.scale).build();
        self.window = Some(Window::new(&self.title, &output_settings));
        self.display
            .clear(Rgb888::BLACK)
            .map_err(|e| HalError::PanelInit(format!("{:?}", e)))?;
        println!(
            "{} Simulator window '{}' at scale {}",
            log::SCREEN,
            self.title,
            self.scale
        );
        self.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_sees_writes_after_move() {
        let mut expander = SimulatedExpander::new();
        let probe = expander.probe();
        expander.init().unwrap();
        expander.enable_all_outputs().unwrap();

        let mut boxed: Box<dyn IoExpander> = Box::new(expander);
        boxed.set_backlight(false).unwrap();
        assert_eq!(probe.level(Line::Backlight), Some(Level::Low));
        assert_eq!(probe.level(Line::LcdReset), None);
        assert_eq!(probe.history(), vec![(Line::Backlight, Level::Low)]);
    }

    #[test]
    fn panel_needs_init_before_flush() {
        let mut panel = SimulatorPanel::new(Size::new(800, 480), &Settings::default());
        assert!(matches!(panel.flush(), Err(HalError::PanelNotReady)));
        assert!(matches!(panel.poll_events(), Err(HalError::PanelNotReady)));
        // Touch line still high, init refuses before opening a window
        assert!(matches!(panel.init(), Err(HalError::PanelInit(_))));
    }
}
