//! Experience, gold, health and revival.
//!
//! These are the only primitives allowed to change a character's resources.
//! Combat rewards, quest rewards and consumable items all go through them.

use super::{Character, CharacterError};
use crate::config::GameConfig;

impl Character {
    /// Returns true if the character has no health left.
    #[inline]
    pub fn is_dead(&self) -> bool {
        self.health == 0
    }

    fn ensure_alive(&self) -> Result<(), CharacterError> {
        if self.is_dead() {
            return Err(CharacterError::CharacterDead {
                name: self.name.clone(),
            });
        }
        Ok(())
    }

    /// Adds experience and applies every level-up it pays for.
    ///
    /// Each level-up consumes `level * 100` experience (the level being left),
    /// raises max health by 10 and strength and magic by 2, and restores
    /// health to the new maximum. Returns the number of levels gained.
    pub fn gain_experience(&mut self, amount: u32) -> Result<u32, CharacterError> {
        self.ensure_alive()?;

        self.experience = self.experience.saturating_add(amount);

        let mut levels_gained = 0;
        while self.experience >= self.experience_to_next_level() {
            self.experience -= self.experience_to_next_level();
            self.level += 1;
            self.max_health += GameConfig::LEVEL_UP_MAX_HEALTH;
            self.strength += GameConfig::LEVEL_UP_STRENGTH;
            self.magic += GameConfig::LEVEL_UP_MAGIC;
            self.health = self.max_health;
            levels_gained += 1;
        }

        Ok(levels_gained)
    }

    /// Adds (or, with a negative amount, spends) gold and returns the new total.
    ///
    /// Rejects the change and leaves gold untouched if the total would be
    /// negative.
    pub fn add_gold(&mut self, amount: i64) -> Result<u32, CharacterError> {
        let new_total = i64::from(self.gold) + amount;
        let new_total =
            u32::try_from(new_total).map_err(|_| CharacterError::InvalidGoldOperation {
                gold: self.gold,
                amount,
            })?;

        self.gold = new_total;
        Ok(new_total)
    }

    /// Heals by `amount`, capped at max health.
    ///
    /// Returns the requested amount even when the cap absorbed part of it;
    /// the value is meant for messages, not bookkeeping.
    pub fn heal(&mut self, amount: u32) -> Result<u32, CharacterError> {
        self.ensure_alive()?;

        self.health = self.health.saturating_add(amount).min(self.max_health);
        Ok(amount)
    }

    /// Brings a dead character back with half of max health (rounded down).
    ///
    /// Returns false, and changes nothing, if the character is alive.
    pub fn revive(&mut self) -> bool {
        if !self.is_dead() {
            return false;
        }

        self.health = self.max_health / 2;
        true
    }
}

#[cfg(test)]
mod tests {
    use crate::character::{Character, CharacterClass, CharacterError};

    fn warrior() -> Character {
        Character::new("Hero", CharacterClass::Warrior)
    }

    #[test]
    fn single_level_up_applies_stat_gains() {
        let mut hero = warrior();
        hero.health = 10;

        let levels = hero.gain_experience(100).unwrap();

        assert_eq!(levels, 1);
        assert_eq!(hero.level, 2);
        assert_eq!(hero.experience, 0);
        assert_eq!(hero.max_health, 130);
        assert_eq!(hero.health, 130);
        assert_eq!(hero.strength, 17);
        assert_eq!(hero.magic, 7);
    }

    #[test]
    fn large_grant_is_traced_level_by_level() {
        let mut hero = warrior();

        // 250 -> level 2 costs 100 (150 left); level 3 needs 200.
        hero.gain_experience(250).unwrap();
        assert_eq!(hero.level, 2);
        assert_eq!(hero.experience, 150);

        // 150 + 50 = 200 -> level 3 (0 left).
        hero.gain_experience(50).unwrap();
        assert_eq!(hero.level, 3);
        assert_eq!(hero.experience, 0);
    }

    #[test]
    fn one_grant_can_cross_several_levels() {
        let mut hero = warrior();

        // 100 + 200 + 300 = 600 exactly reaches level 4.
        let levels = hero.gain_experience(650).unwrap();

        assert_eq!(levels, 3);
        assert_eq!(hero.level, 4);
        assert_eq!(hero.experience, 50);
        assert_eq!(hero.max_health, 150);
        assert_eq!(hero.strength, 21);
    }

    #[test]
    fn small_grant_does_not_level() {
        let mut hero = warrior();
        assert_eq!(hero.gain_experience(99).unwrap(), 0);
        assert_eq!(hero.level, 1);
        assert_eq!(hero.experience, 99);
    }

    #[test]
    fn dead_character_cannot_gain_experience_or_heal() {
        let mut hero = warrior();
        hero.health = 0;
        let before = hero.clone();

        assert!(matches!(
            hero.gain_experience(500),
            Err(CharacterError::CharacterDead { .. })
        ));
        assert!(matches!(
            hero.heal(10),
            Err(CharacterError::CharacterDead { .. })
        ));
        assert_eq!(hero, before);
    }

    #[test]
    fn gold_can_be_spent_down_to_zero() {
        let mut hero = warrior();
        assert_eq!(hero.add_gold(25).unwrap(), 125);
        assert_eq!(hero.add_gold(-125).unwrap(), 0);
    }

    #[test]
    fn overspending_gold_is_rejected_without_change() {
        let mut hero = warrior();

        let err = hero.add_gold(-101).unwrap_err();

        assert_eq!(
            err,
            CharacterError::InvalidGoldOperation {
                gold: 100,
                amount: -101
            }
        );
        assert_eq!(hero.gold, 100);
    }

    #[test]
    fn heal_reports_requested_amount_at_cap() {
        let mut hero = warrior();
        assert_eq!(hero.heal(30).unwrap(), 30);
        assert_eq!(hero.health, hero.max_health);

        hero.health = 100;
        assert_eq!(hero.heal(50).unwrap(), 50);
        assert_eq!(hero.health, 120);

        hero.health = 50;
        hero.heal(20).unwrap();
        assert_eq!(hero.health, 70);
    }

    #[test]
    fn revive_only_applies_to_dead_characters() {
        let mut hero = Character::new("Hero", CharacterClass::Rogue);
        assert!(!hero.revive());
        assert_eq!(hero.health, 90);

        hero.health = 0;
        assert!(hero.is_dead());
        assert!(hero.revive());
        assert_eq!(hero.health, 45);
    }

    #[test]
    fn revive_rounds_half_health_down() {
        let mut hero = warrior();
        hero.max_health = 125;
        hero.health = 0;
        hero.revive();
        assert_eq!(hero.health, 62);
    }
}
