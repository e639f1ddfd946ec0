//! Fixed-rate tick driver for the simulation

use crate::store::GameStore;
use log::info;
use tokio::time::{interval, Duration, MissedTickBehavior};

/// Drives the simulation at `tick_rate` steps per second until the task is
/// dropped or aborted; there is no other shutdown path. Missed ticks are
/// skipped rather than bursted so a stalled scheduler cannot fast-forward
/// the ball. The pause flag is honored inside the step itself, so the driver
/// keeps ticking while paused and the state simply stays frozen.
pub async fn run_game_loop(store: GameStore, tick_rate: u32) {
    let tick_rate = tick_rate.max(1);
    let mut ticker = interval(Duration::from_secs_f64(1.0 / f64::from(tick_rate)));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    info!("game loop running at {} ticks per second", tick_rate);

    loop {
        ticker.tick().await;
        store.advance().await;
    }
}
