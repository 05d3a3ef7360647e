//! Damage calculation and application.

use crate::config::GameConfig;

/// Calculate damage from a basic attack.
///
/// # Formula
///
/// ```text
/// damage = max(1, attacker_strength - defender_strength / 4)
/// ```
///
/// Player and enemy attacks use the same formula.
pub fn calculate_damage(attacker_strength: u32, defender_strength: u32) -> u32 {
    attacker_strength
        .saturating_sub(defender_strength / GameConfig::DEFENSE_DIVISOR)
        .max(GameConfig::MINIMUM_DAMAGE)
}

/// Apply damage to current HP.
///
/// # Returns
///
/// New HP value (clamped to 0)
pub fn apply_damage(current_hp: u32, damage: u32) -> u32 {
    current_hp.saturating_sub(damage)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defender_strength_is_quartered() {
        assert_eq!(calculate_damage(15, 8), 13);
        assert_eq!(calculate_damage(8, 15), 5);
        assert_eq!(calculate_damage(25, 10), 23);
    }

    #[test]
    fn damage_is_never_below_one() {
        assert_eq!(calculate_damage(2, 25), 1);
        assert_eq!(calculate_damage(0, 0), 1);
    }

    #[test]
    fn health_floors_at_zero() {
        assert_eq!(apply_damage(10, 4), 6);
        assert_eq!(apply_damage(10, 40), 0);
    }
}
