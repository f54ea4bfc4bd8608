use std::{path::PathBuf, sync::Arc, time::Instant};

mod config;
mod dashboard;
mod display;
mod hal;
mod log;
mod state;
mod timers;

#[macro_use]
extern crate enum_primitive;

use embedded_graphics::geometry::Size;
use tokio::sync::Mutex;

use config::{Settings, FRAME_PERIOD, HEIGHT, TICK_PERIOD, WIDTH};
use dashboard::DashboardContext;
use hal::{
    simulator::{SimulatedExpander, SimulatorPanel},
    InputEvent,
};
use timers::{run_timer, SharedDashboard};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // --------- SETTINGS ---------
    let path = std::env::args().nth(1).map(PathBuf::from);
    let settings = Settings::load(path.as_deref())?;

    // --------- HARDWARE BRING-UP ---------
    let mut expander = SimulatedExpander::new();
    let mut panel = SimulatorPanel::new(Size::new(WIDTH, HEIGHT), &settings);
    hal::bring_up(&mut expander, &mut panel).await?;

    // --------- UI ---------
    let context = DashboardContext::build(&settings, Box::new(expander), Instant::now())?;
    let ui: SharedDashboard = Arc::new(Mutex::new(context));

    tokio::spawn(run_timer(
        "inactivity",
        TICK_PERIOD,
        ui.clone(),
        DashboardContext::check_inactivity,
    ));
    tokio::spawn(run_timer(
        "clock",
        TICK_PERIOD,
        ui.clone(),
        DashboardContext::advance_clock,
    ));

    // Input, animation and redraw share one loop, the window is not Send
    let mut frame = tokio::time::interval(FRAME_PERIOD);
    frame.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
    loop {
        frame.tick().await;
        let now = Instant::now();
        {
            let mut context = ui.lock().await;
            for event in panel.poll_events()? {
                match event {
                    InputEvent::Press(point) => context.on_press(point, now),
                    InputEvent::Tap(point) => context.on_tap(point, now),
                    InputEvent::Quit => {
                        println!("{} Window closed, exiting", log::THREAD);
                        return Ok(());
                    }
                }
            }
            context.animate(now);
            context.draw(panel.display_mut())?;
        }
        panel.flush()?;
    }
}
