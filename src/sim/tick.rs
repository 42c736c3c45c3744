//! Per-frame update orchestration
//!
//! `advance` runs one frame in a fixed order: computer paddle move, ball
//! integration, wall contacts with scoring, paddle contacts, termination
//! check. The opponent moves first so its position is current if the ball
//! bounces off it in the same frame.

use super::collision::{SideWall, bodies_overlap, wall_contact};
use super::state::{GamePhase, GameState};

/// Advance the session by one frame. A no-op once the session has stopped.
pub fn advance(state: &mut GameState) {
    if state.phase == GamePhase::Stopped {
        return;
    }

    computer_move(state);
    integrate_ball(state);
    resolve_walls(state);
    resolve_paddles(state);
    check_scores(state);
}

/// Reflex opponent: tracks the ball at half the player step, and only while
/// the ball is past the midline and heading toward the computer's half.
fn computer_move(state: &mut GameState) {
    let ball = &state.ball.body;
    if ball.vel.x <= 0.0 || ball.pos.x < state.midline() {
        return;
    }

    let half_step = state.step / 2.0;
    let ball_center = ball.center().y;
    let paddle_center = state.computer.body.center().y;
    let bounds = state.bounds;

    if paddle_center > ball_center {
        state.computer.move_up(half_step);
    } else if paddle_center < ball_center {
        state.computer.move_down(half_step, bounds);
    }
}

fn integrate_ball(state: &mut GameState) {
    let ball = &mut state.ball.body;
    ball.pos += ball.vel;
}

/// Horizontal exits deflect the ball and score for the opposite side;
/// vertical walls only deflect. Both can trigger in a corner frame, but at
/// most one side scores. The ball is clamped back inside so it never lingers
/// out of bounds between frames.
fn resolve_walls(state: &mut GameState) {
    let contact = wall_contact(&state.ball.body, state.bounds);

    match contact.horizontal {
        Some(SideWall::Left) => {
            state.ball.body.vel.x = -state.ball.body.vel.x;
            state.scores.award_computer();
            log::debug!("computer scores, now {:?}", state.scores.as_pair());
        }
        Some(SideWall::Right) => {
            state.ball.body.vel.x = -state.ball.body.vel.x;
            state.scores.award_player();
            log::debug!("player scores, now {:?}", state.scores.as_pair());
        }
        None => {}
    }

    if contact.vertical {
        state.ball.body.vel.y = -state.ball.body.vel.y;
    }

    state.ball.body.clamp_to(state.bounds);
}

/// On overlap the ball bounces, at most once per contact: a bounce only
/// fires while the ball is moving toward the paddle it overlaps, so a
/// lingering overlap cannot re-flip the ball on later frames. There is no
/// positional correction; the sign flip separates the bodies on its own.
fn resolve_paddles(state: &mut GameState) {
    let ball = &state.ball;

    let hit = (ball.body.vel.x < 0.0
        && bodies_overlap(&ball.body, &ball.hitbox, &state.player.body, &state.player.hitbox))
        || (ball.body.vel.x > 0.0
            && bodies_overlap(
                &ball.body,
                &ball.hitbox,
                &state.computer.body,
                &state.computer.hitbox,
            ));

    if hit {
        state.ball.bounce();
    }
}

/// Terminal once the combined score reaches the limit
fn check_scores(state: &mut GameState) {
    if state.scores.total() >= state.score_limit {
        log::info!(
            "score limit reached at {:?}, stopping",
            state.scores.as_pair()
        );
        state.stop();
    }
}
