//! Player movement integration
//!
//! Acceleration toward held directions, multiplicative friction, and
//! boundary clamping. Axes are independent; diagonal movement is not
//! normalized, which matches the game's calibrated feel.

use glam::Vec2;

use super::state::Player;
use super::tick::TickInput;
use crate::consts::SPEED_EPSILON;
use crate::tuning::PlayerTuning;

/// Advance player velocity and position by one `dt`-scaled step.
///
/// Acceleration is gated check-then-add: it applies only while the current
/// speed has not yet reached `max_speed` in that direction, so the achieved
/// speed can exceed the cap by at most one acceleration step.
pub fn integrate(
    player: &mut Player,
    input: &TickInput,
    bounds: Vec2,
    tuning: &PlayerTuning,
    dt: f32,
) {
    let accel = tuning.acceleration * dt;
    if input.up && player.vel.y > -tuning.max_speed {
        player.vel.y -= accel;
    }
    if input.down && player.vel.y < tuning.max_speed {
        player.vel.y += accel;
    }
    if input.left && player.vel.x > -tuning.max_speed {
        player.vel.x -= accel;
    }
    if input.right && player.vel.x < tuning.max_speed {
        player.vel.x += accel;
    }

    player.vel *= 1.0 - tuning.friction * dt;
    if player.vel.x.abs() < SPEED_EPSILON {
        player.vel.x = 0.0;
    }
    if player.vel.y.abs() < SPEED_EPSILON {
        player.vel.y = 0.0;
    }

    player.pos += player.vel * dt;

    // An axis that hits a wall stops dead; no bounce.
    let limit = bounds - player.size;
    player.pos = player.pos.clamp(Vec2::ZERO, limit);
    if player.pos.x == 0.0 || player.pos.x == limit.x {
        player.vel.x = 0.0;
    }
    if player.pos.y == 0.0 || player.pos.y == limit.y {
        player.vel.y = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const BOUNDS: Vec2 = Vec2::new(800.0, 600.0);

    fn held(up: bool, down: bool, left: bool, right: bool) -> TickInput {
        TickInput {
            up,
            down,
            left,
            right,
        }
    }

    #[test]
    fn test_acceleration_builds_speed() {
        let mut player = Player::centered(BOUNDS);
        let tuning = PlayerTuning::default();
        let input = held(false, false, false, true);

        integrate(&mut player, &input, BOUNDS, &tuning, 1.0);
        // One accel step survives friction: 0.25 * 0.98
        assert!((player.vel.x - 0.245).abs() < 1e-4);

        let x_before = player.pos.x;
        for _ in 0..10 {
            integrate(&mut player, &input, BOUNDS, &tuning, 1.0);
        }
        assert!(player.vel.x > 0.245);
        assert!(player.pos.x > x_before);
        assert_eq!(player.vel.y, 0.0);
    }

    #[test]
    fn test_speed_cap_overshoots_by_at_most_one_step() {
        // Huge arena so walls never interfere
        let bounds = Vec2::new(1e6, 1e6);
        let mut player = Player::centered(bounds);
        let tuning = PlayerTuning::default();
        let input = held(false, false, false, true);

        let mut top_speed = 0.0f32;
        for _ in 0..2000 {
            integrate(&mut player, &input, bounds, &tuning, 1.0);
            top_speed = top_speed.max(player.vel.x);
        }
        assert!(top_speed > tuning.max_speed * 0.9);
        assert!(top_speed <= tuning.max_speed + tuning.acceleration);
    }

    #[test]
    fn test_friction_decays_and_snaps_to_zero() {
        let bounds = Vec2::new(1e6, 1e6);
        let mut player = Player::centered(bounds);
        let tuning = PlayerTuning::default();
        player.vel = Vec2::new(2.0, -2.0);

        let idle = TickInput::default();
        let mut ticks = 0;
        while player.vel != Vec2::ZERO && ticks < 10_000 {
            integrate(&mut player, &idle, bounds, &tuning, 1.0);
            ticks += 1;
        }
        assert_eq!(player.vel, Vec2::ZERO);
        assert!(ticks < 1000, "friction never brought the player to rest");
    }

    #[test]
    fn test_wall_hug_left_keeps_position_and_zeroes_speed() {
        let mut player = Player::centered(BOUNDS);
        player.pos.x = 0.0;
        let tuning = PlayerTuning::default();
        let input = held(false, false, true, false);

        for _ in 0..200 {
            integrate(&mut player, &input, BOUNDS, &tuning, 1.0);
            assert_eq!(player.pos.x, 0.0);
            assert_eq!(player.vel.x, 0.0);
        }
    }

    #[test]
    fn test_clamp_at_far_wall_zeroes_velocity() {
        let mut player = Player::centered(BOUNDS);
        let tuning = PlayerTuning::default();
        let limit = BOUNDS - player.size;
        player.pos.x = limit.x - 1.0;
        player.vel.x = tuning.max_speed;

        integrate(&mut player, &TickInput::default(), BOUNDS, &tuning, 1.0);
        assert_eq!(player.pos.x, limit.x);
        assert_eq!(player.vel.x, 0.0);
    }

    proptest! {
        #[test]
        fn clamp_invariant_holds(
            steps in proptest::collection::vec(
                (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>(), 0.25f32..2.0),
                1..200,
            )
        ) {
            let tuning = PlayerTuning::default();
            let mut player = Player::centered(BOUNDS);
            let limit = BOUNDS - player.size;

            for (up, down, left, right, dt) in steps {
                let input = held(up, down, left, right);
                integrate(&mut player, &input, BOUNDS, &tuning, dt);

                prop_assert!(player.pos.x >= 0.0 && player.pos.x <= limit.x);
                prop_assert!(player.pos.y >= 0.0 && player.pos.y <= limit.y);
                if player.pos.x == 0.0 || player.pos.x == limit.x {
                    prop_assert_eq!(player.vel.x, 0.0);
                }
                if player.pos.y == 0.0 || player.pos.y == limit.y {
                    prop_assert_eq!(player.vel.y, 0.0);
                }
            }
        }
    }
}
