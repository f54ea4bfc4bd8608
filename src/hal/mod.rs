use std::time::Duration;

use embedded_graphics::geometry::Point;
use thiserror::Error;
use tokio::time::sleep;

use crate::log;

pub mod simulator;

#[derive(Error, Debug)]
pub enum HalError {
    #[error("IO expander is not initialised")]
    ExpanderNotReady,
    #[error("IO expander line {0:?} is not configured as output")]
    NotOutput(Line),
    #[error("Panel initialisation failed: {0}")]
    PanelInit(String),
    #[error("Panel is not initialised")]
    PanelNotReady,
}

/// Output lines of the CH422G IO expander, by pin number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Line {
    TouchReset = 1,
    Backlight = 2,
    LcdReset = 3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Low,
    High,
}

impl From<bool> for Level {
    fn from(value: bool) -> Self {
        if value {
            Level::High
        } else {
            Level::Low
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Finger down anywhere, counts as activity
    Press(Point),
    /// Finger released, a click on whatever is under it
    Tap(Point),
    Quit,
}

pub trait IoExpander: Send {
    fn init(&mut self) -> Result<(), HalError>;
    fn enable_all_outputs(&mut self) -> Result<(), HalError>;
    fn digital_write(&mut self, line: Line, level: Level) -> Result<(), HalError>;

    fn set_backlight(&mut self, on: bool) -> Result<(), HalError> {
        self.digital_write(Line::Backlight, on.into())
    }
}

pub trait Panel {
    /// Host GPIO wired to the touch controller interrupt line.
    fn set_touch_irq(&mut self, level: Level) -> Result<(), HalError>;
    fn init(&mut self) -> Result<(), HalError>;
}

/// Power sequence for the touch controller and LCD, must finish before any
/// widget or timer exists. Leaves the backlight on.
pub async fn bring_up<E, P>(expander: &mut E, panel: &mut P) -> Result<(), HalError>
where
    E: IoExpander + ?Sized,
    P: Panel + ?Sized,
{
    println!("{} Bringing up panel", log::HAL);

    expander.init()?;
    expander.enable_all_outputs()?;
    expander.digital_write(Line::TouchReset, Level::High)?;
    expander.digital_write(Line::LcdReset, Level::High)?;
    expander.digital_write(Line::Backlight, Level::High)?;
    sleep(Duration::from_millis(100)).await;

    expander.digital_write(Line::TouchReset, Level::Low)?;
    sleep(Duration::from_millis(100)).await;

    panel.set_touch_irq(Level::Low)?;
    sleep(Duration::from_millis(100)).await;

    expander.digital_write(Line::TouchReset, Level::High)?;
    sleep(Duration::from_millis(200)).await;

    panel.init()?;
    println!("{} Panel ready", log::HAL);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use simulator::SimulatedExpander;

    #[derive(Default)]
    struct RecordingPanel {
        touch_irq: Vec<Level>,
        initialised: bool,
    }

    impl Panel for RecordingPanel {
        fn set_touch_irq(&mut self, level: Level) -> Result<(), HalError> {
            self.touch_irq.push(level);
            Ok(())
        }

        fn init(&mut self) -> Result<(), HalError> {
            self.initialised = true;
            Ok(())
        }
    }

    #[tokio::test]
    async fn bring_up_sequence() {
        let mut expander = SimulatedExpander::new();
        let probe = expander.probe();
        let mut panel = RecordingPanel::default();

        bring_up(&mut expander, &mut panel).await.unwrap();

        assert_eq!(
            probe.history(),
            vec![
                (Line::TouchReset, Level::High),
                (Line::LcdReset, Level::High),
                (Line::Backlight, Level::High),
                (Line::TouchReset, Level::Low),
                (Line::TouchReset, Level::High),
            ]
        );
        assert_eq!(panel.touch_irq, vec![Level::Low]);
        assert!(panel.initialised);
        assert_eq!(probe.level(Line::Backlight), Some(Level::High));
    }

    struct FailingPanel;

    impl Panel for FailingPanel {
        fn set_touch_irq(&mut self, _level: Level) -> Result<(), HalError> {
            Ok(())
        }

        fn init(&mut self) -> Result<(), HalError> {
            Err(HalError::PanelInit("no display".into()))
        }
    }

    #[tokio::test]
    async fn panel_failure_propagates() {
        let mut expander = SimulatedExpander::new();
        let err = bring_up(&mut expander, &mut FailingPanel).await.unwrap_err();
        assert!(matches!(err, HalError::PanelInit(_)));
    }

    #[test]
    fn writes_need_enabled_outputs() {
        let mut expander = SimulatedExpander::new();
        assert!(matches!(
            expander.digital_write(Line::Backlight, Level::High),
            Err(HalError::ExpanderNotReady)
        ));
        expander.init().unwrap();
        assert!(matches!(
            expander.set_backlight(true),
            Err(HalError::NotOutput(Line::Backlight))
        ));
        expander.enable_all_outputs().unwrap();
        assert!(expander.set_backlight(false).is_ok());
    }
}
