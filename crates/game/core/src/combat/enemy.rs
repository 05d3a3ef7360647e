//! Enemy stat blocks and tier selection.

use super::CombatError;

/// Kind of enemy. Type keys are lowercase and matched exactly.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum EnemyKind {
    Goblin,
    Orc,
    Dragon,
}

impl EnemyKind {
    pub const ALL: [Self; 3] = [Self::Goblin, Self::Orc, Self::Dragon];

    /// Picks the tier for a character level.
    ///
    /// Levels up to 2 meet goblins, 3 to 5 meet orcs and 6 and above meet
    /// dragons. Level 0 never occurs but falls into the goblin tier.
    pub const fn for_level(level: u32) -> Self {
        match level {
            0..=2 => Self::Goblin,
            3..=5 => Self::Orc,
            _ => Self::Dragon,
        }
    }

    /// Display name used in battle messages.
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Goblin => "Goblin",
            Self::Orc => "Orc",
            Self::Dragon => "Dragon",
        }
    }
}

/// An enemy for one encounter.
///
/// Built fresh by the factory for each battle and owned by that battle.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Enemy {
    pub kind: EnemyKind,
    pub name: String,
    pub health: u32,
    pub max_health: u32,
    pub strength: u32,
    pub magic: u32,
    pub xp_reward: u32,
    pub gold_reward: u32,
}

impl Enemy {
    /// Builds a full-health enemy of the given kind.
    pub fn spawn(kind: EnemyKind) -> Self {
        // (health, strength, magic, xp_reward, gold_reward)
        let (health, strength, magic, xp_reward, gold_reward) = match kind {
            EnemyKind::Goblin => (50, 8, 2, 25, 10),
            EnemyKind::Orc => (80, 12, 5, 50, 25),
            EnemyKind::Dragon => (200, 25, 15, 200, 100),
        };

        Self {
            kind,
            name: kind.display_name().to_string(),
            health,
            max_health: health,
            strength,
            magic,
            xp_reward,
            gold_reward,
        }
    }

    /// Builds an enemy from its type key (`goblin`, `orc` or `dragon`).
    pub fn create(enemy_type: &str) -> Result<Self, CombatError> {
        let kind = enemy_type
            .parse::<EnemyKind>()
            .map_err(|_| CombatError::InvalidTarget(enemy_type.to_string()))?;
        Ok(Self::spawn(kind))
    }

    /// Builds the enemy matching a character level's tier.
    pub fn for_level(level: u32) -> Self {
        Self::spawn(EnemyKind::for_level(level))
    }

    #[inline]
    pub fn is_defeated(&self) -> bool {
        self.health == 0
    }
}
