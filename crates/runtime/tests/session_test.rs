use game_content::ContentFactory;
use game_core::{
    BattleEvent, BattleState, Character, CharacterClass, CombatError, ErrorCategory, GameError,
    PlayerAction, RngOracle,
};
use runtime::{
    BasicAttackProvider, CharacterRepository, FileCharacterRepository,
    InMemoryCharacterRepository, ScriptedActionProvider, Session, SessionError,
};
use tempfile::TempDir;

/// Every coin flip lands heads.
struct Heads;

impl RngOracle for Heads {
    fn next_u32(&self, _seed: u64) -> u32 {
        0
    }
}

/// Every coin flip lands tails.
struct Tails;

impl RngOracle for Tails {
    fn next_u32(&self, _seed: u64) -> u32 {
        1
    }
}

fn session(character: Character) -> Session {
    Session::new(character, Box::new(InMemoryCharacterRepository::new())).with_rng(Heads)
}

#[test]
fn warrior_beats_goblin_and_collects_rewards() {
    let mut session = session(Character::new("Hero", CharacterClass::Warrior));
    let mut provider = ScriptedActionProvider::default();

    let outcome = session.explore(&mut provider).unwrap();

    assert_eq!(outcome.enemy, "Goblin");
    assert_eq!(outcome.result.state, BattleState::PlayerWon);
    assert_eq!(outcome.levels_gained, 0);
    // 50 HP at 13 per hit takes four rounds; the goblin strikes back in three.
    assert_eq!(provider.reports().len(), 4);
    assert_eq!(
        provider.reports()[3].events.last(),
        Some(&BattleEvent::EnemyDefeated {
            name: "Goblin".into()
        })
    );

    let hero = session.character();
    assert_eq!(hero.health, 105);
    assert_eq!(hero.gold, 110);
    assert_eq!(hero.experience, 25);
}

#[test]
fn battle_rewards_can_level_up() {
    let mut hero = Character::new("Hero", CharacterClass::Warrior);
    hero.experience = 90;
    let mut session = session(hero);

    let outcome = session.explore(&mut BasicAttackProvider).unwrap();

    assert_eq!(outcome.levels_gained, 1);
    assert_eq!(session.character().level, 2);
    assert_eq!(session.character().experience, 15);
    assert_eq!(session.character().health, 130);
}

#[test]
fn escape_ends_battle_without_rewards() {
    let mut session = session(Character::new("Hero", CharacterClass::Rogue));
    let mut provider = ScriptedActionProvider::new([PlayerAction::Escape]);

    let outcome = session.explore(&mut provider).unwrap();

    assert_eq!(outcome.result.state, BattleState::Escaped);
    assert_eq!(outcome.result.winner(), None);
    assert_eq!(session.character().gold, 100);
    assert_eq!(session.character().health, 90);
}

#[test]
fn failed_escapes_keep_the_battle_going() {
    let mut session = Session::new(
        Character::new("Hero", CharacterClass::Warrior),
        Box::new(InMemoryCharacterRepository::new()),
    )
    .with_rng(Tails);
    let mut provider = ScriptedActionProvider::new([PlayerAction::Escape, PlayerAction::Escape]);

    let outcome = session.explore(&mut provider).unwrap();

    assert_eq!(outcome.result.state, BattleState::PlayerWon);
    assert_eq!(provider.reports()[0].events[0], BattleEvent::EscapeFailed);
    // Two failed escapes and three trades of blows before the killing hit.
    assert_eq!(session.character().health, 95);
}

#[test]
fn defeat_then_revive_for_gold() {
    let mut hero = Character::new("Hero", CharacterClass::Warrior);
    hero.level = 6;
    hero.health = 5;
    let mut session = session(hero);

    let outcome = session.explore(&mut BasicAttackProvider).unwrap();

    assert_eq!(outcome.enemy, "Dragon");
    assert_eq!(outcome.result.state, BattleState::EnemyWon);
    assert_eq!((outcome.result.xp_gained, outcome.result.gold_gained), (0, 0));
    assert!(session.character().is_dead());

    let err = session.explore(&mut BasicAttackProvider).unwrap_err();
    assert!(matches!(
        err,
        SessionError::Combat(CombatError::CharacterDead { .. })
    ));
    assert_eq!(err.category(), ErrorCategory::State);

    assert_eq!(session.revive_for_gold().unwrap(), 50);
    assert_eq!(session.character().health, 60);

    assert!(matches!(
        session.revive_for_gold(),
        Err(SessionError::NotDead { .. })
    ));
}

#[test]
fn revive_without_gold_is_rejected() {
    let mut hero = Character::new("Hero", CharacterClass::Mage);
    hero.health = 0;
    hero.gold = 49;
    let mut session = session(hero);

    let err = session.revive_for_gold().unwrap_err();

    assert_eq!(err.category(), ErrorCategory::Economic);
    assert!(session.character().is_dead());
    assert_eq!(session.character().gold, 49);
}

#[test]
fn save_and_load_through_files() {
    let dir = TempDir::new().unwrap();
    let repo = FileCharacterRepository::new(dir.path()).unwrap();
    let mut session = Session::new(
        Character::create("Wren", "Cleric").unwrap(),
        Box::new(repo.clone()),
    )
    .with_rng(Heads);
    session.explore(&mut BasicAttackProvider).unwrap();

    session.save().unwrap();

    let loaded = Session::load("Wren", Box::new(repo.clone())).unwrap();
    assert_eq!(loaded.character(), session.character());
    assert_eq!(repo.list().unwrap(), ["Wren"]);
}

#[test]
fn loading_unknown_character_is_not_found() {
    let err = Session::load("Ghost", Box::new(InMemoryCharacterRepository::new())).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::NotFound);
}

#[test]
fn quests_and_shop_with_default_content() {
    let dir = TempDir::new().unwrap();
    let factory = ContentFactory::new(dir.path().join("data"));
    factory.create_default_data_files().unwrap();

    let mut session = session(Character::new("Hero", CharacterClass::Rogue))
        .with_quests(factory.load_quests().unwrap())
        .with_items(factory.load_items().unwrap())
        .with_config(factory.load_config().unwrap());

    assert_eq!(session.available_quests().len(), 1);
    session.accept_quest("first_quest").unwrap();
    assert_eq!(session.active_quests().len(), 1);
    let reward = session.complete_quest("first_quest").unwrap();
    assert_eq!(reward.levels_gained, 1);
    assert_eq!(session.character().gold, 150);

    let err = session.accept_quest("first_quest").unwrap_err();
    assert_eq!(err.error_code(), "QUEST_ALREADY_COMPLETED");

    assert_eq!(session.buy_item("health_potion").unwrap(), 140);
    assert_eq!(session.sell_item("health_potion").unwrap(), 5);
    session.buy_item("health_potion").unwrap();
    session.use_item("health_potion").unwrap();
    assert!(session.character().inventory.is_empty());

    let err = session.use_item("health_potion").unwrap_err();
    assert_eq!(err.category(), ErrorCategory::NotFound);
}
