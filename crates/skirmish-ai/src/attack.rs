//! Melee attack decision.

/// Input to the melee decision for a single enemy.
pub struct AttackContext {
    /// Current distance to the player.
    pub range_to_target: f32,
    /// Host time of this enemy's last hit, if it ever landed one.
    pub last_attack_ms: Option<u64>,
    pub now_ms: u64,
    pub melee_range: f32,
    pub cooldown_ms: u64,
}

/// Whether the enemy lands a hit this frame: strictly inside melee range and
/// off cooldown. An enemy that has never attacked is never on cooldown.
pub fn should_strike(ctx: &AttackContext) -> bool {
    if ctx.range_to_target >= ctx.melee_range {
        return false;
    }
    match ctx.last_attack_ms {
        None => true,
        Some(last) => ctx.now_ms.saturating_sub(last) >= ctx.cooldown_ms,
    }
}
