//! Rally Pong entry point
//!
//! Headless demo drive: runs a full session with a scripted player against
//! the built-in opponent and reports the result. A real embedding would
//! poll input and draw `drawable_entities` each frame; this binary exercises
//! the same controller surface without a window.

use std::time::{SystemTime, UNIX_EPOCH};

use rally_pong::{GameConfig, GameController, HighScores};

/// Hard cap on demo length, in frames
const MAX_FRAMES: u32 = 1_000_000;

fn main() {
    env_logger::init();

    let config = GameConfig::default();
    let hi_scores = HighScores::load();
    let mut game = match GameController::new(config, Box::new(hi_scores)) {
        Ok(game) => game,
        Err(err) => {
            log::error!("invalid configuration: {err}");
            std::process::exit(1);
        }
    };

    let mut frames = 0u32;
    let mut last_scores = game.scores();

    while game.is_running() && frames < MAX_FRAMES {
        scripted_player(&mut game);
        game.advance();
        frames += 1;

        let scores = game.scores();
        if scores != last_scores {
            log::info!(
                "frame {frames}: player {} - computer {}",
                scores.0,
                scores.1
            );
            last_scores = scores;
        }
    }

    let (player, computer) = game.scores();
    println!("final score after {frames} frames: player {player} - computer {computer}");

    if game.has_new_high_score() {
        let mut table = HighScores::load();
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        if let Some(rank) = table.add_score(player, timestamp) {
            println!("new high score! rank {rank}");
            if let Err(err) = table.save() {
                log::warn!("failed to save high scores: {err}");
            }
        }
    }
}

/// One command per frame: step toward the ball's vertical center, with a
/// dead zone one step tall so the paddle does not jitter
fn scripted_player(game: &mut GameController) {
    let (paddle_y, ball_y, step) = {
        let state = game.state();
        (
            state.player.body.center().y,
            state.ball.body.center().y,
            state.step,
        )
    };

    if paddle_y > ball_y + step {
        game.player_move_up();
    } else if paddle_y < ball_y - step {
        game.player_move_down();
    }
}
