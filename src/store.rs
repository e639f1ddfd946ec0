//! Exclusive-access store for the authoritative game state
//!
//! One `GameState` exists per process, owned by a [`GameStore`] built at
//! startup and handed by clone to the tick driver and every request handler.
//! All access goes through [`GameStore::snapshot`] or [`GameStore::update`]:
//! a single exclusive mutex, deliberately not a reader/writer split. Updates
//! are tiny and frequent, so fully serialized access is the simplest
//! discipline that rules out torn reads (a ball position from mid-tick next
//! to a stale paddle). Critical sections are confined to in-memory field
//! updates; rendering and encoding always happen on a snapshot copy outside
//! the lock.

use crate::config::GameConfig;
use crate::game::{GameState, PaddleSide};
use log::info;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Cheaply cloneable handle to the shared simulation state.
#[derive(Clone)]
pub struct GameStore {
    state: Arc<Mutex<GameState>>,
    config: GameConfig,
}

impl GameStore {
    pub fn new(config: GameConfig) -> Self {
        Self {
            state: Arc::new(Mutex::new(GameState::new(&config))),
            config,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Consistent point-in-time copy of the state, taken under the lock.
    pub async fn snapshot(&self) -> GameState {
        *self.state.lock().await
    }

    /// Atomic read-modify-write. The closure runs with the lock held and
    /// must stay confined to in-memory field updates.
    pub async fn update<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut GameState) -> R,
    {
        let mut state = self.state.lock().await;
        f(&mut *state)
    }

    /// Applies one simulation step.
    pub async fn advance(&self) {
        let config = self.config;
        self.update(|state| state.step(&config)).await;
    }

    /// Flips the pause flag and returns the new value. Pausing and resuming
    /// are the same idempotent toggle of a single boolean.
    pub async fn toggle_pause(&self) -> bool {
        let paused = self
            .update(|state| {
                state.paused = !state.paused;
                state.paused
            })
            .await;
        info!("game {}", if paused { "paused" } else { "resumed" });
        paused
    }

    /// Overwrites a paddle position from a remote command, clamped to the
    /// playfield. Commands race with the AI under last-write-wins; both
    /// writers go through the same lock.
    pub async fn set_paddle(&self, side: PaddleSide, pos_y: i32) {
        let config = self.config;
        self.update(|state| state.set_paddle(side, pos_y, &config))
            .await;
    }
}
