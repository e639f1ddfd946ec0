//! Authoritative game state and the fixed-tick transition function
//!
//! This module owns the rules: ball motion, wall and paddle collision,
//! scoring resets, and the tracking AI that drives whichever paddle the ball
//! is approaching. Everything here is pure in-memory state manipulation;
//! locking, scheduling and serialization live elsewhere.

use crate::config::GameConfig;
use log::debug;
use serde::Serialize;

/// Which paddle a remote command addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddleSide {
    Left,
    Right,
}

impl PaddleSide {
    /// Maps a wire identifier to a side. Unknown identifiers yield `None`
    /// and the command is dropped without touching state.
    pub fn from_wire(id: &str) -> Option<Self> {
        match id {
            "p1" => Some(PaddleSide::Left),
            "p2" => Some(PaddleSide::Right),
            _ => None,
        }
    }
}

/// The single authoritative record of the match.
///
/// Positions are pixels; `ball_x`/`ball_y` is the ball center and
/// `player1_y`/`player2_y` are paddle top edges. Direction components are
/// always exactly +1 or -1, so speed is one pixel per tick per axis and a
/// collision is a sign flip. `paused` freezes the simulation and is not part
/// of the serialized snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameState {
    pub ball_x: i32,
    pub ball_y: i32,
    pub ball_dir_x: i32,
    pub ball_dir_y: i32,
    pub player1_y: i32,
    pub player2_y: i32,
    #[serde(skip)]
    pub paused: bool,
}

impl GameState {
    /// Starting position: ball at the field center heading down-right, both
    /// paddles vertically centered, running.
    pub fn new(config: &GameConfig) -> Self {
        let paddle_y = (config.field_height - config.paddle_height) / 2;
        Self {
            ball_x: config.field_width / 2,
            ball_y: config.field_height / 2,
            ball_dir_x: 1,
            ball_dir_y: 1,
            player1_y: paddle_y,
            player2_y: paddle_y,
            paused: false,
        }
    }

    /// Advances the simulation by one tick. A no-op while paused: the state
    /// is frozen, not discarded.
    ///
    /// Order matters: the ball moves first, then the AI reacts to the new
    /// position, then walls, then the paddle/goal checks on each side.
    pub fn step(&mut self, config: &GameConfig) {
        if self.paused {
            return;
        }

        self.ball_x += self.ball_dir_x;
        self.ball_y += self.ball_dir_y;

        self.drive_ai(config);

        // Top/bottom wall bounce. While the ball hugs a wall this can fire
        // on consecutive ticks.
        if self.ball_y <= 0 || self.ball_y >= config.field_height - config.ball_size {
            self.ball_dir_y = -self.ball_dir_y;
        }

        if self.ball_x <= config.paddle_width {
            if self.ball_y >= self.player1_y && self.ball_y <= self.player1_y + config.paddle_height
            {
                self.ball_dir_x = -self.ball_dir_x;
            } else if self.ball_x <= 0 {
                self.reset_ball(config);
            }
        } else if self.ball_x >= config.field_width - config.paddle_width - config.ball_size {
            if self.ball_y >= self.player2_y && self.ball_y <= self.player2_y + config.paddle_height
            {
                self.ball_dir_x = -self.ball_dir_x;
            } else if self.ball_x >= config.field_width - config.ball_size {
                self.reset_ball(config);
            }
        }
    }

    /// Tracking AI. Only the paddle the ball is heading toward moves; the
    /// far paddle holds position.
    fn drive_ai(&mut self, config: &GameConfig) {
        if self.ball_dir_x < 0 {
            self.player1_y = Self::track(self.player1_y, self.ball_y, config.p1_ai_speed, config);
        } else {
            self.player2_y = Self::track(self.player2_y, self.ball_y, config.p2_ai_speed, config);
        }
    }

    /// Moves a paddle one AI increment toward the ball and clamps it to the
    /// playfield. A paddle already centered on the ball holds still.
    fn track(paddle_y: i32, ball_y: i32, speed: i32, config: &GameConfig) -> i32 {
        let center = paddle_y + config.paddle_height / 2;
        let moved = if ball_y > center {
            paddle_y + speed
        } else if ball_y < center {
            paddle_y - speed
        } else {
            paddle_y
        };
        config.clamp_paddle_y(moved)
    }

    /// Scoring reset: re-center the ball and reverse both direction
    /// components, serving toward the side that just conceded.
    fn reset_ball(&mut self, config: &GameConfig) {
        self.ball_x = config.field_width / 2;
        self.ball_y = config.field_height / 2;
        self.ball_dir_x = -self.ball_dir_x;
        self.ball_dir_y = -self.ball_dir_y;
        debug!("ball passed the goal line, serving from center");
    }

    /// Overwrites a paddle position from a remote command, clamped to the
    /// playfield. Races with the AI are last-write-wins.
    pub fn set_paddle(&mut self, side: PaddleSide, pos_y: i32, config: &GameConfig) {
        let pos_y = config.clamp_paddle_y(pos_y);
        match side {
            PaddleSide::Left => self.player1_y = pos_y,
            PaddleSide::Right => self.player2_y = pos_y,
        }
    }
}
