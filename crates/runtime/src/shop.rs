//! Shop and inventory: buying, selling, using and equipping items.
//!
//! The inventory is a list of item ids on the character; the same id may
//! appear more than once.

use game_content::{ItemCatalog, ItemDefinition, ItemEffect, ItemStat, ItemType};
use game_core::{Character, CharacterError, ErrorCategory, GameConfig, GameError};

/// Errors raised by shop and inventory operations. State is unchanged on
/// error.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InventoryError {
    #[error("item '{0}' not found")]
    ItemNotFound(String),

    #[error("inventory is full ({capacity} slots)")]
    InventoryFull { capacity: usize },

    #[error("item '{0}' is not in the inventory")]
    ItemNotInInventory(String),

    #[error("item '{0}' cannot be used")]
    NotConsumable(String),

    #[error("item '{0}' cannot be equipped")]
    NotEquippable(String),

    #[error(transparent)]
    Character(#[from] CharacterError),
}

impl GameError for InventoryError {
    fn category(&self) -> ErrorCategory {
        match self {
            Self::ItemNotFound(_) | Self::ItemNotInInventory(_) => ErrorCategory::NotFound,
            Self::InventoryFull { .. } => ErrorCategory::State,
            Self::NotConsumable(_) | Self::NotEquippable(_) => ErrorCategory::Validation,
            Self::Character(error) => error.category(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ItemNotFound(_) => "INVENTORY_ITEM_NOT_FOUND",
            Self::InventoryFull { .. } => "INVENTORY_FULL",
            Self::ItemNotInInventory(_) => "INVENTORY_ITEM_NOT_IN_INVENTORY",
            Self::NotConsumable(_) => "INVENTORY_NOT_CONSUMABLE",
            Self::NotEquippable(_) => "INVENTORY_NOT_EQUIPPABLE",
            Self::Character(error) => error.error_code(),
        }
    }
}

fn find<'a>(items: &'a ItemCatalog, id: &str) -> Result<&'a ItemDefinition, InventoryError> {
    items
        .get(id)
        .ok_or_else(|| InventoryError::ItemNotFound(id.to_string()))
}

fn inventory_position(character: &Character, id: &str) -> Result<usize, InventoryError> {
    character
        .inventory
        .iter()
        .position(|entry| entry == id)
        .ok_or_else(|| InventoryError::ItemNotInInventory(id.to_string()))
}

/// Buys an item, charging its cost.
///
/// Returns the gold left.
pub fn buy_item(
    character: &mut Character,
    items: &ItemCatalog,
    id: &str,
    config: &GameConfig,
) -> Result<u32, InventoryError> {
    let item = find(items, id)?;
    if character.inventory.len() >= config.max_inventory_slots {
        return Err(InventoryError::InventoryFull {
            capacity: config.max_inventory_slots,
        });
    }

    let gold = character.add_gold(-i64::from(item.cost))?;
    character.inventory.push(item.id.clone());

    tracing::info!("{} bought '{}' for {} gold", character.name, item.id, item.cost);
    Ok(gold)
}

/// Sells one copy of an item for `cost * sell_percent / 100`.
///
/// Returns the gold received.
pub fn sell_item(
    character: &mut Character,
    items: &ItemCatalog,
    id: &str,
    config: &GameConfig,
) -> Result<u32, InventoryError> {
    let item = find(items, id)?;
    let position = inventory_position(character, id)?;

    let price = config.sell_price(item.cost);
    character.add_gold(i64::from(price))?;
    character.inventory.remove(position);

    tracing::info!("{} sold '{}' for {} gold", character.name, item.id, price);
    Ok(price)
}

/// Raises a stat permanently.
fn raise_stat(character: &mut Character, effect: ItemEffect) {
    match effect.stat {
        ItemStat::Health => {
            character.health = character
                .health
                .saturating_add(effect.value)
                .min(character.max_health);
        }
        ItemStat::Strength => character.strength = character.strength.saturating_add(effect.value),
        ItemStat::Magic => character.magic = character.magic.saturating_add(effect.value),
        ItemStat::MaxHealth => {
            character.max_health = character.max_health.saturating_add(effect.value);
        }
    }
}

/// Uses up one consumable item.
///
/// `health` effects go through [`Character::heal`]; other stats are raised
/// permanently.
pub fn use_item(
    character: &mut Character,
    items: &ItemCatalog,
    id: &str,
) -> Result<ItemEffect, InventoryError> {
    let position = inventory_position(character, id)?;
    let item = find(items, id)?;
    if item.item_type != ItemType::Consumable {
        return Err(InventoryError::NotConsumable(id.to_string()));
    }
    if character.is_dead() {
        return Err(CharacterError::CharacterDead {
            name: character.name.clone(),
        }
        .into());
    }

    match item.effect.stat {
        ItemStat::Health => {
            character.heal(item.effect.value)?;
        }
        _ => raise_stat(character, item.effect),
    }
    character.inventory.remove(position);

    tracing::info!("{} used '{}' ({})", character.name, item.id, item.effect);
    Ok(item.effect)
}

/// Equips a weapon or armor.
///
/// The bonus is applied once and the item leaves the inventory, since it is
/// now worn.
pub fn equip_item(
    character: &mut Character,
    items: &ItemCatalog,
    id: &str,
) -> Result<ItemEffect, InventoryError> {
    let position = inventory_position(character, id)?;
    let item = find(items, id)?;
    if !matches!(item.item_type, ItemType::Weapon | ItemType::Armor) {
        return Err(InventoryError::NotEquippable(id.to_string()));
    }

    raise_stat(character, item.effect);
    character.inventory.remove(position);

    tracing::info!("{} equipped '{}' ({})", character.name, item.id, item.effect);
    Ok(item.effect)
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::CharacterClass;

    fn catalog() -> ItemCatalog {
        ItemCatalog::parse(
            "\
ITEM_ID: health_potion
NAME: Health Potion
TYPE: consumable
EFFECT: health:20
COST: 10
DESCRIPTION: Restores 20 health points.

ITEM_ID: tonic
NAME: Tonic
TYPE: consumable
EFFECT: max_health:5
COST: 30
DESCRIPTION: Toughens you up.

ITEM_ID: iron_sword
NAME: Iron Sword
TYPE: weapon
EFFECT: strength:5
COST: 60
DESCRIPTION: A plain blade.

ITEM_ID: crown
NAME: Crown
TYPE: armor
EFFECT: magic:3
COST: 500
DESCRIPTION: Heavy is the head.
",
        )
        .unwrap()
    }

    fn hero() -> Character {
        Character::new("Hero", CharacterClass::Warrior)
    }

    #[test]
    fn buy_charges_cost() {
        let items = catalog();
        let mut hero = hero();

        let gold = buy_item(&mut hero, &items, "iron_sword", &GameConfig::default()).unwrap();

        assert_eq!(gold, 40);
        assert_eq!(hero.inventory, ["iron_sword"]);
    }

    #[test]
    fn unaffordable_item_is_rejected_without_change() {
        let items = catalog();
        let mut hero = hero();
        let before = hero.clone();

        let err = buy_item(&mut hero, &items, "crown", &GameConfig::default()).unwrap_err();

        assert_eq!(err.category(), ErrorCategory::Economic);
        assert_eq!(hero, before);
    }

    #[test]
    fn full_inventory_rejects_purchase() {
        let items = catalog();
        let mut hero = hero();
        let config = GameConfig::default().with_max_inventory_slots(1);
        buy_item(&mut hero, &items, "health_potion", &config).unwrap();

        assert_eq!(
            buy_item(&mut hero, &items, "health_potion", &config).unwrap_err(),
            InventoryError::InventoryFull { capacity: 1 }
        );
        assert_eq!(hero.gold, 90);
    }

    #[test]
    fn unknown_item_cannot_be_bought() {
        let mut hero = hero();
        assert_eq!(
            buy_item(&mut hero, &catalog(), "dragon_egg", &GameConfig::default()).unwrap_err(),
            InventoryError::ItemNotFound("dragon_egg".into())
        );
    }

    #[test]
    fn sell_pays_half_and_removes_one_copy() {
        let items = catalog();
        let mut hero = hero();
        hero.inventory = vec!["iron_sword".into(), "iron_sword".into()];

        let price = sell_item(&mut hero, &items, "iron_sword", &GameConfig::default()).unwrap();

        assert_eq!(price, 30);
        assert_eq!(hero.gold, 130);
        assert_eq!(hero.inventory, ["iron_sword"]);
        assert_eq!(
            sell_item(&mut hero, &items, "crown", &GameConfig::default()).unwrap_err(),
            InventoryError::ItemNotInInventory("crown".into())
        );
    }

    #[test]
    fn potion_heals_and_is_consumed() {
        let items = catalog();
        let mut hero = hero();
        hero.health = 50;
        hero.inventory.push("health_potion".into());

        use_item(&mut hero, &items, "health_potion").unwrap();

        assert_eq!(hero.health, 70);
        assert!(hero.inventory.is_empty());
    }

    #[test]
    fn tonic_raises_max_health() {
        let items = catalog();
        let mut hero = hero();
        hero.inventory.push("tonic".into());

        use_item(&mut hero, &items, "tonic").unwrap();

        assert_eq!(hero.max_health, 125);
        assert_eq!(hero.health, 120);
    }

    #[test]
    fn dead_character_cannot_drink_potions() {
        let items = catalog();
        let mut hero = hero();
        hero.health = 0;
        hero.inventory.push("health_potion".into());
        let before = hero.clone();

        let err = use_item(&mut hero, &items, "health_potion").unwrap_err();

        assert!(matches!(
            err,
            InventoryError::Character(CharacterError::CharacterDead { .. })
        ));
        assert_eq!(hero, before);
    }

    #[test]
    fn weapons_are_equipped_not_used() {
        let items = catalog();
        let mut hero = hero();
        hero.inventory = vec!["iron_sword".into(), "health_potion".into()];

        assert_eq!(
            use_item(&mut hero, &items, "iron_sword").unwrap_err(),
            InventoryError::NotConsumable("iron_sword".into())
        );
        assert_eq!(
            equip_item(&mut hero, &items, "health_potion").unwrap_err(),
            InventoryError::NotEquippable("health_potion".into())
        );

        equip_item(&mut hero, &items, "iron_sword").unwrap();

        assert_eq!(hero.strength, 20);
        assert_eq!(hero.inventory, ["health_potion"]);
        assert!(matches!(
            equip_item(&mut hero, &items, "iron_sword"),
            Err(InventoryError::ItemNotInInventory(_))
        ));
    }
}
