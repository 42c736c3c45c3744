//! Session configuration
//!
//! Colors and dimensions arrive from the embedding layer. Everything is
//! validated once, at construction, so the simulation itself stays
//! infallible.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// 8-bit RGB color, handed through untouched to the render layer
pub type Color = [u8; 3];

pub const BLACK: Color = [0, 0, 0];
pub const WHITE: Color = [255, 255, 255];

/// Construction-time validation failures
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Screen dimensions must both be positive
    #[error("screen dimensions must be positive, got {0}x{1}")]
    InvalidScreenSize(u32, u32),

    /// Paddles and ball would have no extent
    #[error("object width must be positive")]
    ZeroObjectWidth,

    /// Paddles or ball would not fit on the screen
    #[error("object width {width} does not fit a {screen_w}x{screen_h} screen")]
    ObjectTooLarge {
        width: u32,
        screen_w: u32,
        screen_h: u32,
    },

    /// The session could never end
    #[error("score limit must be positive")]
    ZeroScoreLimit,
}

/// Everything a session needs from the embedding layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Backdrop color
    pub background: Color,
    /// Paddle and ball color
    pub foreground: Color,
    /// Screen size in pixels (width, height)
    pub screen_size: (u32, u32),
    /// Paddle/ball thickness; also the player movement step
    pub object_width: u32,
    /// Combined score that ends a session
    pub score_limit: u32,
    /// Serve-direction seed; a fixed seed reproduces the session
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            background: BLACK,
            foreground: WHITE,
            screen_size: (SCREEN_WIDTH, SCREEN_HEIGHT),
            object_width: OBJECT_WIDTH,
            score_limit: SCORE_LIMIT,
            seed: 0,
        }
    }
}

impl GameConfig {
    /// Reject degenerate screen or object dimensions
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (w, h) = self.screen_size;
        if w == 0 || h == 0 {
            return Err(ConfigError::InvalidScreenSize(w, h));
        }
        if self.object_width == 0 {
            return Err(ConfigError::ZeroObjectWidth);
        }
        // Paddles are PADDLE_LENGTH_FACTOR objects tall, the ball one wide
        if self.object_width * PADDLE_LENGTH_FACTOR > h || self.object_width * 2 > w {
            return Err(ConfigError::ObjectTooLarge {
                width: self.object_width,
                screen_w: w,
                screen_h: h,
            });
        }
        if self.score_limit == 0 {
            return Err(ConfigError::ZeroScoreLimit);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(GameConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_zero_screen_dimension_rejected() {
        let mut config = GameConfig::default();
        config.screen_size = (0, 600);
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidScreenSize(0, 600))
        );
    }

    #[test]
    fn test_zero_object_width_rejected() {
        let mut config = GameConfig::default();
        config.object_width = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroObjectWidth));
    }

    #[test]
    fn test_oversized_object_rejected() {
        let mut config = GameConfig::default();
        config.screen_size = (800, 40);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ObjectTooLarge { .. })
        ));
    }

    #[test]
    fn test_zero_score_limit_rejected() {
        let mut config = GameConfig::default();
        config.score_limit = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroScoreLimit));
    }
}
