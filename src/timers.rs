use std::{sync::Arc, time::Duration};

use tokio::{
    sync::Mutex,
    time::{interval, Instant, MissedTickBehavior},
};

use crate::{dashboard::DashboardContext, log};

/// The one UI lock. Timers, input and drawing all go through it.
pub type SharedDashboard = Arc<Mutex<DashboardContext>>;

pub type TimerCallback = fn(&mut DashboardContext, std::time::Instant);

/// Calls `callback` every `period` with the dashboard locked, forever.
pub(crate) async fn run_timer(
    name: &'static str,
    period: Duration,
    ui: SharedDashboard,
    callback: TimerCallback,
) {
    println!("{} Starting {} timer, every {:?}", log::THREAD, name, period);

    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    // First tick completes immediately
    ticker.tick().await;

    loop {
        let tick: Instant = ticker.tick().await;
        let mut context = ui.lock().await;
        callback(&mut *context, tick.into_std());
    }
}

#[cfg(test)]
mod tests {
    use std::time::Instant as StdInstant;

    use super::*;
    use crate::{
        config::Settings,
        hal::{simulator::SimulatedExpander, IoExpander},
        state::PowerState,
    };

    fn shared(start: StdInstant) -> SharedDashboard {
        let mut expander = SimulatedExpander::new();
        expander.init().unwrap();
        expander.enable_all_outputs().unwrap();
        let context = DashboardContext::build(&Settings::default(), Box::new(expander), start).unwrap();
        Arc::new(Mutex::new(context))
    }

    #[tokio::test(start_paused = true)]
    async fn timers_drive_clock_and_blanking() {
        let start = Instant::now().into_std();
        let ui = shared(start);

        let clock = tokio::spawn(run_timer(
            "clock",
            Duration::from_secs(1),
            ui.clone(),
            DashboardContext::advance_clock,
        ));
        let inactivity = tokio::spawn(run_timer(
            "inactivity",
            Duration::from_secs(1),
            ui.clone(),
            DashboardContext::check_inactivity,
        ));

        tokio::time::sleep(Duration::from_millis(61_500)).await;
        {
            let context = ui.lock().await;
            assert_eq!(context.clock_text(), "21:35");
            assert_eq!(context.power_state(), PowerState::Active);
        }

        tokio::time::sleep(Duration::from_secs(60)).await;
        {
            let context = ui.lock().await;
            assert_eq!(context.clock_text(), "21:36");
            assert_eq!(context.power_state(), PowerState::Blanked);
            assert!(context.overlay_visible());
        }

        clock.abort();
        inactivity.abort();
    }
}
