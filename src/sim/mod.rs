//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One update per rendered frame, fixed step order
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod body;
pub mod collision;
pub mod state;
pub mod tick;

pub use body::Body;
pub use collision::{Hitbox, SideWall, SpriteMask, WallContact, bodies_overlap, wall_contact};
pub use state::{Ball, GamePhase, GameState, Paddle, RngState, Scoreboard};
pub use tick::advance;
