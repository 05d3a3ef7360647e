use game_core::{Character, CharacterClass, CodecError, ErrorCategory, GameError};
use runtime::{CharacterRepository, FileCharacterRepository, RepositoryError};
use tempfile::TempDir;

fn repository() -> (TempDir, FileCharacterRepository) {
    let dir = TempDir::new().unwrap();
    let repo = FileCharacterRepository::new(dir.path().join("save_games")).unwrap();
    (dir, repo)
}

#[test]
fn save_list_load_delete() {
    let (_dir, repo) = repository();
    let mut hero = Character::new("Aria", CharacterClass::Mage);
    hero.gain_experience(120).unwrap();
    hero.add_gold(-30).unwrap();
    hero.inventory = vec!["health_potion".into(), "health_potion".into()];
    hero.completed_quests.push("first_quest".into());

    repo.save(&hero).unwrap();

    assert!(repo.exists("Aria"));
    assert_eq!(repo.list().unwrap(), ["Aria"]);
    assert_eq!(repo.load("Aria").unwrap(), hero);

    repo.delete("Aria").unwrap();
    assert!(!repo.exists("Aria"));
    assert!(repo.list().unwrap().is_empty());
    assert!(matches!(
        repo.load("Aria"),
        Err(RepositoryError::CharacterNotFound { name }) if name == "Aria"
    ));
}

#[test]
fn saving_again_replaces_the_record() {
    let (_dir, repo) = repository();
    let mut hero = Character::new("Bram", CharacterClass::Warrior);
    repo.save(&hero).unwrap();

    hero.health = 7;
    hero.active_quests.push("goblin_cave".into());
    repo.save(&hero).unwrap();

    let loaded = repo.load("Bram").unwrap();
    assert_eq!(loaded.health, 7);
    assert_eq!(loaded.active_quests, ["goblin_cave"]);
}

#[test]
fn deleting_a_missing_character_fails() {
    let (_dir, repo) = repository();
    assert!(matches!(
        repo.delete("Nobody"),
        Err(RepositoryError::CharacterNotFound { .. })
    ));
}

#[test]
fn corrupted_file_is_reported_not_repaired() {
    let (_dir, repo) = repository();
    let path = repo.base_dir().join("Cass_save.txt");
    std::fs::write(&path, "NAME: Cass\nCLASS Rogue\n").unwrap();

    let err = repo.load("Cass").unwrap_err();

    assert!(matches!(
        err,
        RepositoryError::Codec(CodecError::SaveFileCorrupted { line: 2, .. })
    ));
    assert_eq!(
        std::fs::read_to_string(path).unwrap(),
        "NAME: Cass\nCLASS Rogue\n"
    );
}

#[test]
fn non_utf8_file_is_corrupted() {
    let (_dir, repo) = repository();
    std::fs::write(
        repo.base_dir().join("Bad_save.txt"),
        [b'N', b'A', b'M', b'E', b':', b' ', b'B', b'\n', 0xff, 0xfe, b'\n'],
    )
    .unwrap();

    let err = repo.load("Bad").unwrap_err();

    assert!(matches!(
        err,
        RepositoryError::Codec(CodecError::SaveFileCorrupted { line: 2, .. })
    ));
    assert_eq!(err.category(), ErrorCategory::Validation);
}

#[test]
fn save_recreates_a_removed_directory() {
    let (_dir, repo) = repository();
    std::fs::remove_dir_all(repo.base_dir()).unwrap();
    let hero = Character::new("Hero", CharacterClass::Mage);

    repo.save(&hero).unwrap();

    assert_eq!(repo.load("Hero").unwrap(), hero);
}

#[test]
fn incomplete_file_is_invalid_save_data() {
    let (_dir, repo) = repository();
    std::fs::write(
        repo.base_dir().join("Dov_save.txt"),
        "NAME: Dov\nCLASS: Cleric\nLEVEL: 1\n",
    )
    .unwrap();

    assert!(matches!(
        repo.load("Dov"),
        Err(RepositoryError::Codec(CodecError::InvalidSaveData(_)))
    ));
}
