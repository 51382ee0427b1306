#[cfg(test)]
mod tests {
    use skirmish_core::constants::*;
    use skirmish_core::types::{Facing, Position};

    use crate::attack::{should_strike, AttackContext};
    use crate::pursuit::{evaluate, look_at, PursuitContext};

    fn attack_context(range: f32, last: Option<u64>, now: u64) -> AttackContext {
        AttackContext {
            range_to_target: range,
            last_attack_ms: last,
            now_ms: now,
            melee_range: MELEE_RANGE,
            cooldown_ms: MELEE_COOLDOWN_MS,
        }
    }

    // ---- Pursuit ----

    #[test]
    fn test_pursuit_steps_toward_target() {
        let ctx = PursuitContext {
            position: Position::new(10.0, 1.0, 0.0),
            target: Position::new(0.0, 1.0, 0.0),
            speed: ENEMY_SPEED,
        };
        let update = evaluate(&ctx);
        assert!((update.new_position.0.x - (10.0 - ENEMY_SPEED)).abs() < 1e-6);
        assert!((update.new_position.0.y - 1.0).abs() < 1e-6);
        assert!(update.new_position.0.z.abs() < 1e-6);
        assert!((update.range_to_target - (10.0 - ENEMY_SPEED)).abs() < 1e-5);
    }

    #[test]
    fn test_pursuit_step_length_is_speed_in_3d() {
        // Vertical offset is pursued too; the step length stays `speed`.
        let ctx = PursuitContext {
            position: Position::new(3.0, 1.0, 4.0),
            target: Position::new(0.0, 1.6, 0.0),
            speed: 0.5,
        };
        let update = evaluate(&ctx);
        let step = update.new_position.0 - ctx.position.0;
        assert!((step.length() - 0.5).abs() < 1e-5);
        assert!(step.y > 0.0, "Should climb toward a taller target");
    }

    #[test]
    fn test_pursuit_on_target_stays_put() {
        let p = Position::new(1.0, 1.0, 1.0);
        let update = evaluate(&PursuitContext {
            position: p,
            target: p,
            speed: ENEMY_SPEED,
        });
        assert_eq!(update.new_position, p);
        assert_eq!(update.new_facing, Facing::default());
    }

    #[test]
    fn test_facing_points_at_target() {
        let from = Position::new(5.0, 1.0, -3.0);
        let to = Position::new(-2.0, 1.6, 4.0);
        let facing = look_at(&from, &to);
        let expected = (to.0 - from.0).normalize();
        assert!(
            facing.forward().abs_diff_eq(expected, 1e-5),
            "forward {:?} should match {:?}",
            facing.forward(),
            expected
        );
    }

    // ---- Attack ----

    #[test]
    fn test_first_strike_is_immediate() {
        assert!(should_strike(&attack_context(1.0, None, 0)));
    }

    #[test]
    fn test_out_of_range_never_strikes() {
        assert!(!should_strike(&attack_context(MELEE_RANGE, None, 5_000)));
        assert!(!should_strike(&attack_context(10.0, Some(0), 5_000)));
    }

    #[test]
    fn test_cooldown_boundary() {
        assert!(!should_strike(&attack_context(1.0, Some(1_000), 1_999)));
        assert!(should_strike(&attack_context(1.0, Some(1_000), 2_000)));
    }

    #[test]
    fn test_clock_going_backwards_is_on_cooldown() {
        assert!(!should_strike(&attack_context(1.0, Some(5_000), 4_000)));
    }
}
