use std::f32::consts::{FRAC_PI_2, PI};

use glam::Vec3;

use crate::commands::PlayerCommand;
use crate::config::{ConfigError, Tuning};
use crate::constants::*;
use crate::enums::GamePhase;
use crate::events::{dispatch_events, GameEvent, PresentationSink};
use crate::state::FrameSnapshot;
use crate::types::{Facing, Position, SimTime};

fn assert_vec_close(actual: Vec3, expected: Vec3) {
    assert!(
        actual.abs_diff_eq(expected, 1e-5),
        "expected {expected:?}, got {actual:?}"
    );
}

// ---- Facing ----

#[test]
fn test_forward_at_rest_is_negative_z() {
    assert_vec_close(Facing::default().forward(), Vec3::NEG_Z);
}

#[test]
fn test_forward_follows_yaw() {
    // Positive yaw turns left (counter-clockwise seen from above).
    assert_vec_close(Facing::new(FRAC_PI_2, 0.0).forward(), Vec3::NEG_X);
    assert_vec_close(Facing::new(PI, 0.0).forward(), Vec3::Z);
}

#[test]
fn test_forward_follows_pitch() {
    assert_vec_close(Facing::new(0.0, FRAC_PI_2).forward(), Vec3::Y);
    // Pitch is applied after yaw, so looking up ignores heading.
    assert_vec_close(Facing::new(1.3, FRAC_PI_2).forward(), Vec3::Y);
}

#[test]
fn test_clamped_limits_pitch_only() {
    let f = Facing::new(12.0, 3.0).clamped();
    assert_eq!(f.yaw, 12.0);
    assert_eq!(f.pitch, FRAC_PI_2);
    let f = Facing::new(-12.0, -3.0).clamped();
    assert_eq!(f.yaw, -12.0);
    assert_eq!(f.pitch, -FRAC_PI_2);
}

#[test]
fn test_range_to() {
    let a = Position::new(0.0, 0.0, 0.0);
    let b = Position::new(3.0, 4.0, 0.0);
    assert!((a.range_to(&b) - 5.0).abs() < 1e-6);
}

#[test]
fn test_sim_time_advance() {
    let mut t = SimTime::default();
    t.advance(16);
    t.advance(33);
    assert_eq!(t.frame, 2);
    assert_eq!(t.now_ms, 33);
}

// ---- Phase ----

#[test]
fn test_only_playing_simulates() {
    assert!(!GamePhase::Menu.is_simulating());
    assert!(GamePhase::Playing.is_simulating());
    assert!(!GamePhase::GameOver.is_simulating());
    assert_eq!(GamePhase::default(), GamePhase::Menu);
}

// ---- Tuning ----

#[test]
fn test_default_tuning_matches_constants() {
    let t = Tuning::default();
    assert!(t.validate().is_ok());
    assert_eq!(t.clip_size, CLIP_SIZE);
    assert_eq!(t.starting_reserve, 90);
    assert_eq!(t.player_spawn, Vec3::new(0.0, 1.6, 0.0));
    assert_eq!(t.enemy_half_extents(), Vec3::new(0.5, 1.0, 0.5));
}

#[test]
fn test_partial_json_override() {
    let t = Tuning::from_json(r#"{ "wave_size": 3, "melee_cooldown_ms": 500 }"#).unwrap();
    assert_eq!(t.wave_size, 3);
    assert_eq!(t.melee_cooldown_ms, 500);
    assert_eq!(t.shot_damage, SHOT_DAMAGE);
}

#[test]
fn test_invalid_tuning_rejected() {
    let err = Tuning::from_json(r#"{ "clip_size": 0 }"#).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::Invalid {
            field: "clip_size",
            ..
        }
    ));

    let err = Tuning::from_json(r#"{ "spawn_radius_min": 60.0 }"#).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::Invalid {
            field: "spawn_radius_min",
            ..
        }
    ));
}

#[test]
fn test_malformed_json_is_parse_error() {
    let err = Tuning::from_json("{ not json").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
    assert!(err.to_string().starts_with("failed to parse config"));
}

// ---- Commands / events ----

#[test]
fn test_command_wire_shape() {
    let json = serde_json::to_string(&PlayerCommand::SetOrientationDelta { dx: 1.0, dy: -2.0 })
        .unwrap();
    assert_eq!(json, r#"{"type":"SetOrientationDelta","dx":1.0,"dy":-2.0}"#);

    let back: PlayerCommand = serde_json::from_str(r#"{"type":"Fire"}"#).unwrap();
    assert_eq!(back, PlayerCommand::Fire);
}

#[derive(Default)]
struct RecordingSink {
    stats: Vec<(u32, u32, u32)>,
    game_overs: Vec<u32>,
}

impl PresentationSink for RecordingSink {
    fn stats_changed(&mut self, health: u32, ammo: u32, score: u32) {
        self.stats.push((health, ammo, score));
    }

    fn game_over(&mut self, final_score: u32) {
        self.game_overs.push(final_score);
    }
}

#[test]
fn test_dispatch_routes_notifications_only() {
    let events = vec![
        GameEvent::ShotFired,
        GameEvent::StatsChanged {
            health: 100,
            ammo: 29,
            score: 0,
        },
        GameEvent::EnemyKilled { enemy_id: 3 },
        GameEvent::GameOver { final_score: 700 },
        GameEvent::PhaseChanged {
            from: GamePhase::GameOver,
            to: GamePhase::Menu,
        },
    ];
    let mut sink = RecordingSink::default();
    dispatch_events(&events, &mut sink);

    assert_eq!(sink.stats, vec![(100, 29, 0)]);
    assert_eq!(sink.game_overs, vec![700]);
}

#[test]
fn test_empty_snapshot_serializes() {
    let json = serde_json::to_string(&FrameSnapshot::default()).unwrap();
    assert!(json.contains(r#""phase":"Menu""#));
}
