//! Class abilities used by the special action in battle.
//!
//! Abilities only compute an [`AbilityEffect`]; the battle applies it and then
//! runs the same end-of-battle check it runs after a basic attack. New
//! abilities are added by registering them in an [`AbilityBook`] rather than
//! by touching the battle.

use std::collections::HashMap;

use crate::character::{Character, CharacterClass};
use crate::rng::{RollKind, RoundRoller};

/// Hit points restored by the cleric's heal.
pub const HEAL_AMOUNT: u32 = 30;

/// What an ability does this turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AbilityEffect {
    /// Damage dealt to the enemy.
    Damage(u32),
    /// Health restored to the user, capped at max health when applied.
    Heal(u32),
    /// The ability was used but had no effect. The turn is still spent.
    Miss,
}

/// A special ability.
pub trait Ability {
    /// Name shown in battle messages.
    fn name(&self) -> &'static str;

    /// Computes the effect of using the ability this round.
    fn resolve(&self, user: &Character, roller: &RoundRoller<'_>) -> AbilityEffect;
}

/// Warrior: deals twice the user's strength.
#[derive(Clone, Copy, Debug, Default)]
pub struct PowerStrike;

impl Ability for PowerStrike {
    fn name(&self) -> &'static str {
        "Power Strike"
    }

    fn resolve(&self, user: &Character, _roller: &RoundRoller<'_>) -> AbilityEffect {
        AbilityEffect::Damage(user.strength.saturating_mul(2))
    }
}

/// Mage: deals twice the user's magic.
#[derive(Clone, Copy, Debug, Default)]
pub struct Fireball;

impl Ability for Fireball {
    fn name(&self) -> &'static str {
        "Fireball"
    }

    fn resolve(&self, user: &Character, _roller: &RoundRoller<'_>) -> AbilityEffect {
        AbilityEffect::Damage(user.magic.saturating_mul(2))
    }
}

/// Rogue: on heads deals three times the user's strength, otherwise misses.
#[derive(Clone, Copy, Debug, Default)]
pub struct CriticalStrike;

impl Ability for CriticalStrike {
    fn name(&self) -> &'static str {
        "Critical Strike"
    }

    fn resolve(&self, user: &Character, roller: &RoundRoller<'_>) -> AbilityEffect {
        if roller.coin_flip(RollKind::CriticalStrike) {
            AbilityEffect::Damage(user.strength.saturating_mul(3))
        } else {
            AbilityEffect::Miss
        }
    }
}

/// Cleric: restores [`HEAL_AMOUNT`] health to the user.
#[derive(Clone, Copy, Debug, Default)]
pub struct Heal;

impl Ability for Heal {
    fn name(&self) -> &'static str {
        "Heal"
    }

    fn resolve(&self, _user: &Character, _roller: &RoundRoller<'_>) -> AbilityEffect {
        AbilityEffect::Heal(HEAL_AMOUNT)
    }
}

/// Class to ability lookup.
pub struct AbilityBook {
    abilities: HashMap<CharacterClass, Box<dyn Ability>>,
}

impl AbilityBook {
    /// A book with no abilities registered.
    pub fn empty() -> Self {
        Self {
            abilities: HashMap::new(),
        }
    }

    /// The standard book: one ability per playable class.
    pub fn standard() -> Self {
        let mut book = Self::empty();
        book.register(CharacterClass::Warrior, PowerStrike);
        book.register(CharacterClass::Mage, Fireball);
        book.register(CharacterClass::Rogue, CriticalStrike);
        book.register(CharacterClass::Cleric, Heal);
        book
    }

    /// Registers (or replaces) the ability for a class.
    pub fn register(&mut self, class: CharacterClass, ability: impl Ability + 'static) {
        self.abilities.insert(class, Box::new(ability));
    }

    pub fn for_class(&self, class: CharacterClass) -> Option<&dyn Ability> {
        self.abilities.get(&class).map(|ability| &**ability)
    }

    /// Looks up by class name, ignoring case. Unknown names have no ability.
    pub fn lookup(&self, class_name: &str) -> Option<&dyn Ability> {
        CharacterClass::from_name_ignore_case(class_name).and_then(|class| self.for_class(class))
    }
}

impl Default for AbilityBook {
    fn default() -> Self {
        Self::standard()
    }
}

impl core::fmt::Debug for AbilityBook {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_map()
            .entries(
                self.abilities
                    .iter()
                    .map(|(class, ability)| (class, ability.name())),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::RngOracle;

    struct Fixed(u32);

    impl RngOracle for Fixed {
        fn next_u32(&self, _seed: u64) -> u32 {
            self.0
        }
    }

    const HEADS: Fixed = Fixed(0);
    const TAILS: Fixed = Fixed(1);

    fn resolve(class: CharacterClass, rng: &Fixed) -> AbilityEffect {
        let book = AbilityBook::standard();
        let user = Character::new("Hero", class);
        let roller = RoundRoller::new(rng, 0, 0);
        book.for_class(class).unwrap().resolve(&user, &roller)
    }

    #[test]
    fn class_abilities() {
        assert_eq!(
            resolve(CharacterClass::Warrior, &HEADS),
            AbilityEffect::Damage(30)
        );
        assert_eq!(
            resolve(CharacterClass::Mage, &HEADS),
            AbilityEffect::Damage(40)
        );
        assert_eq!(
            resolve(CharacterClass::Cleric, &HEADS),
            AbilityEffect::Heal(30)
        );
    }

    #[test]
    fn critical_strike_depends_on_the_coin() {
        assert_eq!(
            resolve(CharacterClass::Rogue, &HEADS),
            AbilityEffect::Damage(36)
        );
        assert_eq!(resolve(CharacterClass::Rogue, &TAILS), AbilityEffect::Miss);
    }

    #[test]
    fn lookup_ignores_case() {
        let book = AbilityBook::standard();
        assert_eq!(book.lookup("wArRiOr").unwrap().name(), "Power Strike");
        assert_eq!(book.lookup("cleric").unwrap().name(), "Heal");
        assert!(book.lookup("Bard").is_none());
    }

    #[test]
    fn empty_book_has_no_abilities() {
        let book = AbilityBook::empty();
        assert!(book.for_class(CharacterClass::Mage).is_none());
    }
}
