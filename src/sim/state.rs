//! Game entities and session state
//!
//! Everything a session owns lives here: both paddles, the ball, the
//! scoreboard, and the phase flag. Ownership is explicit; collision checks
//! take references, there is no shared sprite registry.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::body::Body;
use super::collision::Hitbox;
use crate::clamp_span;
use crate::config::GameConfig;
use crate::consts::*;

/// Session phase; `Stopped` is absorbing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Session ended (score limit reached or external stop)
    Stopped,
}

/// A vertically-moving paddle; its x coordinate is fixed for the session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub body: Body,
    pub hitbox: Hitbox,
}

impl Paddle {
    /// Place a paddle at column `x`, vertically centered
    pub fn new(x: f32, bounds: Vec2, width: f32) -> Self {
        let size = Vec2::new(width, width * PADDLE_LENGTH_FACTOR as f32);
        let pos = Vec2::new(x, (bounds.y - size.y) / 2.0);
        Self {
            body: Body::new(pos, size),
            hitbox: Hitbox::Solid,
        }
    }

    /// Move up by `step`; the top edge never passes 0
    pub fn move_up(&mut self, step: f32) {
        self.body.pos.y = (self.body.pos.y - step).max(0.0);
    }

    /// Move down by `step`; the bottom edge never passes the screen bottom
    pub fn move_down(&mut self, step: f32, bounds: Vec2) {
        self.body.pos.y = clamp_span(self.body.pos.y + step, self.body.size.y, bounds.y);
    }
}

/// The ball: a square body whose velocity components are never zero
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub body: Body,
    pub hitbox: Hitbox,
}

impl Ball {
    /// Place a stationary ball at the screen center
    pub fn new(bounds: Vec2, width: f32) -> Self {
        let size = Vec2::splat(width);
        Self {
            body: Body::new((bounds - size) / 2.0, size),
            hitbox: Hitbox::Solid,
        }
    }

    /// Pick the opening direction from the session RNG
    pub fn serve(&mut self, rng: &mut Pcg32) {
        let dx = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        let dy = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        self.set_velocity(Vec2::new(dx, dy) * BALL_SPEED);
    }

    /// Velocity write; components that would vanish are pushed back to the
    /// minimum magnitude so the ball can never stall
    pub fn set_velocity(&mut self, vel: Vec2) {
        self.body.vel = Vec2::new(nonzero(vel.x), nonzero(vel.y));
    }

    /// Horizontal sign flip in response to a paddle hit
    pub fn bounce(&mut self) {
        self.body.vel.x = -self.body.vel.x;
    }
}

fn nonzero(v: f32) -> f32 {
    if v.abs() < BALL_MIN_COMPONENT {
        BALL_MIN_COMPONENT.copysign(if v == 0.0 { 1.0 } else { v })
    } else {
        v
    }
}

/// Monotonic score pair
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub player: u32,
    pub computer: u32,
}

impl Scoreboard {
    pub fn award_player(&mut self) {
        self.player += 1;
    }

    pub fn award_computer(&mut self) {
        self.computer += 1;
    }

    #[inline]
    pub fn total(&self) -> u32 {
        self.player + self.computer
    }

    pub fn as_pair(&self) -> (u32, u32) {
        (self.player, self.computer)
    }
}

/// RNG state wrapper for serialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed)
    }
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    /// RNG state
    pub rng_state: RngState,
    /// Screen bounds (width, height) in pixels
    pub bounds: Vec2,
    /// Paddle/ball thickness; also the player movement step
    pub step: f32,
    /// Combined score that ends the session
    pub score_limit: u32,
    /// Current phase
    pub phase: GamePhase,
    /// Player paddle (left column)
    pub player: Paddle,
    /// Computer paddle (right column)
    pub computer: Paddle,
    /// The ball
    pub ball: Ball,
    /// Score pair
    pub scores: Scoreboard,
}

impl GameState {
    /// Build a fresh session from a validated configuration
    pub fn new(config: &GameConfig) -> Self {
        let bounds = Vec2::new(config.screen_size.0 as f32, config.screen_size.1 as f32);
        let width = config.object_width as f32;

        let rng_state = RngState::new(config.seed);
        let mut ball = Ball::new(bounds, width);
        ball.serve(&mut rng_state.to_rng());

        Self {
            seed: config.seed,
            rng_state,
            bounds,
            step: width,
            score_limit: config.score_limit,
            phase: GamePhase::Running,
            player: Paddle::new(0.0, bounds, width),
            computer: Paddle::new(bounds.x - width, bounds, width),
            ball,
            scores: Scoreboard::default(),
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Force the terminal state; `Stopped` never transitions back
    pub fn stop(&mut self) {
        self.phase = GamePhase::Stopped;
    }

    /// Vertical midline separating the player and computer halves
    #[inline]
    pub fn midline(&self) -> f32 {
        self.bounds.x / 2.0
    }
}
