//! Session controller
//!
//! The boundary between the simulation core and the input/render layers.
//! The input layer calls the movement commands and `advance` once per frame;
//! the render layer reads `drawable_entities` and `scores`. The core itself
//! never touches a window, an event queue, or a file.

use glam::Vec2;

use crate::config::{Color, ConfigError, GameConfig};
use crate::sim::state::GameState;
use crate::sim::tick;

/// Read-only view of a persisted high-score table
///
/// The core only ever needs the lowest score still on the list; storage and
/// format belong to the provider.
pub trait ScoreProvider {
    /// Lowest score currently on the table; 0 while the table has room
    fn lowest_score(&self) -> u32;
}

/// One renderable entity, in screen pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawSprite {
    pub pos: Vec2,
    pub size: Vec2,
    pub color: Color,
}

/// Owns one game session and exposes its command/query surface
pub struct GameController {
    state: GameState,
    config: GameConfig,
    hi_scores: Box<dyn ScoreProvider>,
}

impl GameController {
    /// Create a session; rejects degenerate screen or object dimensions
    pub fn new(
        config: GameConfig,
        hi_scores: Box<dyn ScoreProvider>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let state = GameState::new(&config);
        log::info!(
            "new session: {}x{} screen, ends at {} total points",
            config.screen_size.0,
            config.screen_size.1,
            config.score_limit
        );
        Ok(Self {
            state,
            config,
            hi_scores,
        })
    }

    /// Move the player paddle one step up
    pub fn player_move_up(&mut self) {
        let step = self.state.step;
        self.state.player.move_up(step);
    }

    /// Move the player paddle one step down
    pub fn player_move_down(&mut self) {
        let step = self.state.step;
        let bounds = self.state.bounds;
        self.state.player.move_down(step, bounds);
    }

    /// Advance the session by one frame
    pub fn advance(&mut self) {
        tick::advance(&mut self.state);
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    /// Force the terminal state (quit signal from the outer loop)
    pub fn stop(&mut self) {
        self.state.stop();
    }

    /// `(player, computer)` score pair
    pub fn scores(&self) -> (u32, u32) {
        self.state.scores.as_pair()
    }

    /// Entities to draw, in stable order: player paddle, computer paddle, ball
    pub fn drawable_entities(&self) -> Vec<DrawSprite> {
        let color = self.config.foreground;
        [
            &self.state.player.body,
            &self.state.computer.body,
            &self.state.ball.body,
        ]
        .into_iter()
        .map(|body| DrawSprite {
            pos: body.pos,
            size: body.size,
            color,
        })
        .collect()
    }

    /// Backdrop color for the render layer
    pub fn background(&self) -> Color {
        self.config.background
    }

    /// Whether the player's score would enter the high-score table
    pub fn has_new_high_score(&self) -> bool {
        self.scores().0 > self.hi_scores.lowest_score()
    }

    /// Read access to the underlying session state
    pub fn state(&self) -> &GameState {
        &self.state
    }
}
