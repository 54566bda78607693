//! Per-tick simulation step
//!
//! Advances a session by one fixed tick: player physics, obstacle
//! spawning, obstacle movement with scoring and cleanup, collision, and
//! the score-driven speed ramp.

use rand::Rng;

use super::collision::{obstacle_box, player_box};
use super::state::{Obstacle, Player, Session};
use crate::consts::*;

/// Outbound notifications, fired synchronously from inside `step`
pub trait SessionHooks {
    /// Score increased by passing an obstacle; carries the new total
    fn on_score(&mut self, score: u32);
    /// A collision ended the run; fired exactly once per session
    fn on_game_over(&mut self, final_score: u32);
}

/// Hook sink that ignores all notifications
#[derive(Debug, Default)]
pub struct NullHooks;

impl SessionHooks for NullHooks {
    fn on_score(&mut self, _score: u32) {}
    fn on_game_over(&mut self, _final_score: u32) {}
}

/// Advance the session by one tick. No-op once the session has stopped.
pub fn step<H: SessionHooks>(session: &mut Session, hooks: &mut H) {
    if !session.running {
        return;
    }

    apply_physics(&mut session.player);
    spawn_obstacles(session);

    // Single in-order pass over the obstacles: advance, score, cleanup,
    // collision. Scoring is checked before collision for the same obstacle;
    // a removed obstacle takes no further part in this tick; the first hit
    // ends the tick immediately, skipping the speed ramp below.
    let speed = session.speed;
    let mut i = 0;
    while i < session.obstacles.len() {
        let obstacle = &mut session.obstacles[i];
        obstacle.x -= speed;

        if !obstacle.scored && obstacle.trailing_edge() < PLAYER_X {
            obstacle.scored = true;
            session.score += OBSTACLE_POINTS;
            hooks.on_score(session.score);
        }

        if session.obstacles[i].x < DESPAWN_X {
            session.obstacles.remove(i);
            continue;
        }

        if player_box(&session.player).overlaps(&obstacle_box(&session.obstacles[i])) {
            session.running = false;
            log::info!("game over at score {}", session.score);
            hooks.on_game_over(session.score);
            return;
        }

        i += 1;
    }

    session.speed = BASE_SPEED + session.score as f32 / SPEED_RAMP_DIVISOR;
}

/// Gravity, integration, and ground clamping
fn apply_physics(player: &mut Player) {
    player.vy += GRAVITY;
    player.y += player.vy;

    let rest = Player::ground_rest_y();
    if player.y >= rest {
        player.y = rest;
        player.vy = 0.0;
        player.jumping = false;
    }
}

/// Decrement the spawn countdown by the current speed; spawn and re-arm
/// once it runs out.
fn spawn_obstacles(session: &mut Session) {
    session.next_spawn -= session.speed;
    if session.next_spawn <= 0.0 {
        let height = OBSTACLE_MIN_HEIGHT + session.rng.random::<f32>() * OBSTACLE_HEIGHT_RANGE;
        let width = OBSTACLE_MIN_WIDTH + session.rng.random::<f32>() * OBSTACLE_WIDTH_RANGE;
        session.obstacles.push(Obstacle::spawn(width, height));
        session.next_spawn = SPAWN_GAP_MIN + session.rng.random::<f32>() * SPAWN_GAP_RANGE;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct RecordingHooks {
        scores: Vec<u32>,
        game_overs: Vec<u32>,
    }

    impl SessionHooks for RecordingHooks {
        fn on_score(&mut self, score: u32) {
            self.scores.push(score);
        }

        fn on_game_over(&mut self, final_score: u32) {
            self.game_overs.push(final_score);
        }
    }

    /// Session with spawning pushed far enough out that only hand-placed
    /// obstacles participate.
    fn quiet_session(seed: u64) -> Session {
        let mut session = Session::new(seed);
        session.next_spawn = 10_000.0;
        session
    }

    fn obstacle_at(x: f32, width: f32, height: f32) -> Obstacle {
        Obstacle {
            x,
            width,
            height,
            scored: false,
        }
    }

    #[test]
    fn test_rest_tick_leaves_player_unchanged() {
        let mut session = Session::new(1);
        let mut hooks = RecordingHooks::default();
        step(&mut session, &mut hooks);

        assert_eq!(session.player.y, Player::ground_rest_y());
        assert_eq!(session.player.vy, 0.0);
        assert!(!session.player.jumping);
        assert_eq!(session.next_spawn, FIRST_SPAWN_GAP - BASE_SPEED);
        assert!(hooks.scores.is_empty());
        assert!(hooks.game_overs.is_empty());
    }

    #[test]
    fn test_jump_lands_within_arc_bound() {
        let mut session = quiet_session(1);
        session.request_jump();

        // vy = -15 against g = 0.8 gives an arc of ~37 ticks
        let mut airborne_ticks = 0;
        for _ in 0..50 {
            step(&mut session, &mut NullHooks);
            assert!(session.player.y <= Player::ground_rest_y());
            if session.player.y == Player::ground_rest_y() {
                assert_eq!(session.player.vy, 0.0);
                assert!(!session.player.jumping);
            }
            if session.player.jumping {
                airborne_ticks += 1;
            }
        }
        assert!(!session.player.jumping, "player did not land within 50 ticks");
        assert!(airborne_ticks >= 30, "arc too short: {airborne_ticks} ticks");
    }

    #[test]
    fn test_no_double_jump_while_airborne() {
        let mut session = quiet_session(1);
        session.request_jump();
        for _ in 0..5 {
            step(&mut session, &mut NullHooks);
        }
        let vy_before = session.player.vy;
        session.request_jump();
        assert_eq!(session.player.vy, vy_before);
    }

    #[test]
    fn test_pass_scores_once_then_removes() {
        let mut session = quiet_session(7);
        session.obstacles.push(obstacle_at(200.0, 30.0, 40.0));
        let mut hooks = RecordingHooks::default();

        for tick_no in 0..60 {
            // One well-timed jump carries the player over the obstacle
            if tick_no == 14 {
                session.request_jump();
            }
            step(&mut session, &mut hooks);
            assert!(session.running, "unexpected collision at tick {tick_no}");
        }

        assert_eq!(hooks.scores, vec![10]);
        assert!(hooks.game_overs.is_empty());
        assert_eq!(session.score, 10);
        assert!(
            session.obstacles.is_empty(),
            "obstacle was not removed after leaving the screen"
        );
        assert_eq!(session.speed, BASE_SPEED + 10.0 / SPEED_RAMP_DIVISOR);
    }

    #[test]
    fn test_collision_stops_session_and_freezes_score() {
        let mut session = quiet_session(3);
        session.score = 30;
        session.speed = BASE_SPEED + 30.0 / SPEED_RAMP_DIVISOR;
        session.obstacles.push(obstacle_at(PLAYER_X, 30.0, 50.0));
        let mut hooks = RecordingHooks::default();

        step(&mut session, &mut hooks);
        assert!(!session.running);
        assert_eq!(hooks.game_overs, vec![30]);
        assert!(hooks.scores.is_empty());

        // A stopped session is inert: no mutation, no further callbacks
        let player = session.player.clone();
        let obstacles = session.obstacles.clone();
        let speed = session.speed;
        for _ in 0..10 {
            step(&mut session, &mut hooks);
        }
        assert_eq!(session.score, 30);
        assert_eq!(session.player, player);
        assert_eq!(session.obstacles, obstacles);
        assert_eq!(session.speed, speed);
        assert_eq!(hooks.game_overs.len(), 1);
        assert!(hooks.scores.is_empty());
    }

    #[test]
    fn test_pass_scores_before_later_obstacle_collides() {
        // In-order scan: the first obstacle's score is credited before the
        // second obstacle's collision ends the tick.
        let mut session = quiet_session(3);
        session.obstacles.push(obstacle_at(50.0, 5.0, 40.0));
        session.obstacles.push(obstacle_at(PLAYER_X + 5.0, 30.0, 50.0));
        let mut hooks = RecordingHooks::default();

        step(&mut session, &mut hooks);
        assert!(!session.running);
        assert_eq!(hooks.scores, vec![10]);
        assert_eq!(hooks.game_overs, vec![10]);
        // The collision tick ends immediately: no speed ramp applied
        assert_eq!(session.speed, BASE_SPEED);
    }

    #[test]
    fn test_speed_is_pure_function_of_score() {
        for score in [0u32, 10, 120, 990] {
            let mut session = quiet_session(5);
            session.score = score;
            step(&mut session, &mut NullHooks);
            assert_eq!(
                session.speed,
                BASE_SPEED + score as f32 / SPEED_RAMP_DIVISOR
            );
        }
    }

    #[test]
    fn test_spawned_obstacles_stay_in_range() {
        let mut session = Session::new(99);
        let mut spawned = 0;
        for _ in 0..3000 {
            let before = session.obstacles.len();
            step(&mut session, &mut NullHooks);
            if session.obstacles.len() > before {
                let ob = session.obstacles.last().expect("just spawned");
                assert!((OBSTACLE_MIN_HEIGHT..OBSTACLE_MIN_HEIGHT + OBSTACLE_HEIGHT_RANGE)
                    .contains(&ob.height));
                assert!((OBSTACLE_MIN_WIDTH..OBSTACLE_MIN_WIDTH + OBSTACLE_WIDTH_RANGE)
                    .contains(&ob.width));
                assert!(session.next_spawn > 0.0);
                assert!(session.next_spawn <= SPAWN_GAP_MIN + SPAWN_GAP_RANGE);
                spawned += 1;
            }
            // Keep the run alive: drop obstacles before they reach the player
            session.obstacles.retain(|o| o.x > 150.0);
        }
        assert!(spawned >= 20, "only {spawned} spawns in 3000 ticks");
    }

    #[test]
    fn test_same_seed_same_run() {
        let mut a = Session::new(99_999);
        let mut b = Session::new(99_999);

        for tick_no in 0..500u32 {
            if tick_no % 45 == 0 {
                a.request_jump();
                b.request_jump();
            }
            step(&mut a, &mut NullHooks);
            step(&mut b, &mut NullHooks);
        }

        assert_eq!(a.running, b.running);
        assert_eq!(a.score, b.score);
        assert_eq!(a.speed, b.speed);
        assert_eq!(a.player, b.player);
        assert_eq!(a.obstacles, b.obstacles);
    }
}
