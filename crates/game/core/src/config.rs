/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Gold charged to revive a dead character from the session menu.
    pub revive_cost: u32,
    /// Maximum number of item identifiers a character can carry.
    pub max_inventory_slots: usize,
    /// Percentage of an item's cost paid back when selling it.
    pub sell_percent: u32,
}

impl GameConfig {
    // ===== fixed rules =====
    pub const STARTING_LEVEL: u32 = 1;
    pub const STARTING_GOLD: u32 = 100;
    /// Experience needed to leave a level is `level * XP_PER_LEVEL`.
    pub const XP_PER_LEVEL: u32 = 100;
    pub const LEVEL_UP_MAX_HEALTH: u32 = 10;
    pub const LEVEL_UP_STRENGTH: u32 = 2;
    pub const LEVEL_UP_MAGIC: u32 = 2;
    /// Strength of a defender is divided by this before being subtracted from damage.
    pub const DEFENSE_DIVISOR: u32 = 4;
    pub const MINIMUM_DAMAGE: u32 = 1;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_REVIVE_COST: u32 = 50;
    pub const DEFAULT_MAX_INVENTORY_SLOTS: usize = 20;
    pub const DEFAULT_SELL_PERCENT: u32 = 50;

    pub fn new() -> Self {
        Self {
            revive_cost: Self::DEFAULT_REVIVE_COST,
            max_inventory_slots: Self::DEFAULT_MAX_INVENTORY_SLOTS,
            sell_percent: Self::DEFAULT_SELL_PERCENT,
        }
    }

    pub fn with_revive_cost(mut self, revive_cost: u32) -> Self {
        self.revive_cost = revive_cost;
        self
    }

    pub fn with_max_inventory_slots(mut self, max_inventory_slots: usize) -> Self {
        self.max_inventory_slots = max_inventory_slots;
        self
    }

    /// Gold paid back for selling an item with the given cost.
    pub fn sell_price(&self, cost: u32) -> u32 {
        cost.saturating_mul(self.sell_percent) / 100
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
