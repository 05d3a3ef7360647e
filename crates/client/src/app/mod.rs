//! Menu-driven text frontend.
//!
//! The main menu creates, loads and deletes characters; the game menu (see
//! [`game`]) runs one [`Session`] until the player saves and quits or the
//! character dies for good.

mod battle;
pub mod console;
mod game;

pub use battle::ConsoleActionProvider;
pub use console::Console;

use std::io::{self, BufRead, Write};

use game_content::{ContentError, ContentFactory, ItemCatalog, QuestBook};
use game_core::{Character, CharacterClass, GameConfig};
use runtime::repository::validate_name;
use runtime::{CharacterRepository, FileCharacterRepository, Session};

/// Definitions and tuning shared by every session.
#[derive(Clone, Debug, Default)]
pub struct Content {
    pub quests: QuestBook,
    pub items: ItemCatalog,
    pub config: GameConfig,
}

impl Content {
    /// Loads definitions, writing the starter files first if they are missing.
    pub fn load(factory: &ContentFactory) -> Result<Self, ContentError> {
        for path in factory.create_default_data_files()? {
            tracing::info!("Created default data file {}", path.display());
        }

        let content = Self {
            quests: factory.load_quests()?,
            items: factory.load_items()?,
            config: factory.load_config()?,
        };
        tracing::info!(
            "Loaded {} quests and {} items from {}",
            content.quests.len(),
            content.items.len(),
            factory.data_dir().display()
        );
        Ok(content)
    }
}

pub struct App<R, W> {
    console: Console<R, W>,
    repository: FileCharacterRepository,
    content: Content,
    seed: u64,
}

impl<R: BufRead, W: Write> App<R, W> {
    pub fn new(
        console: Console<R, W>,
        repository: FileCharacterRepository,
        content: Content,
        seed: u64,
    ) -> Self {
        Self {
            console,
            repository,
            content,
            seed,
        }
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    /// Runs the main menu until the player exits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        self.console.say("=== QUEST CHRONICLES ===")?;

        loop {
            let choice = self.console.choose(
                "MAIN MENU",
                &["New Game", "Load Game", "Delete Save", "Exit"],
            )?;
            let session = match choice {
                Some(0) => self.new_game()?,
                Some(1) => self.load_game()?,
                Some(2) => {
                    self.delete_save()?;
                    None
                }
                _ => break,
            };

            if let Some(session) = session {
                self.play(session)?;
            }
        }

        self.console.say("Thanks for playing!")
    }

    fn session(&self, character: Character) -> Session {
        Session::new(character, Box::new(self.repository.clone()))
            .with_quests(self.content.quests.clone())
            .with_items(self.content.items.clone())
            .with_config(self.content.config.clone())
            .with_seed(self.seed)
    }

    fn new_game(&mut self) -> io::Result<Option<Session>> {
        let name = loop {
            let Some(name) = self.console.read_line("Enter character name: ")? else {
                return Ok(None);
            };
            match validate_name(&name) {
                Ok(()) => break name,
                Err(error) => self.console.report(&error)?,
            }
        };

        let options = CharacterClass::ALL.map(|class| {
            let stats = class.base_stats();
            format!(
                "{class} (HP {}, STR {}, MAG {})",
                stats.health, stats.strength, stats.magic
            )
        });
        let Some(index) = self.console.choose("Choose a class", &options)? else {
            return Ok(None);
        };

        if self.repository.exists(&name) {
            self.console
                .say(format_args!("Note: this replaces the existing save for {name}."))?;
        }

        let character = Character::new(name, CharacterClass::ALL[index]);
        tracing::info!("Created {} the {}", character.name, character.class);
        self.console.say(format_args!(
            "Welcome, {} the {}!",
            character.name, character.class
        ))?;

        let session = self.session(character);
        self.save(&session)?;
        Ok(Some(session))
    }

    fn choose_save(&mut self, title: &str) -> io::Result<Option<String>> {
        let names = match self.repository.list() {
            Ok(names) => names,
            Err(error) => {
                self.console.report(&error)?;
                return Ok(None);
            }
        };
        if names.is_empty() {
            self.console.say("No saved games found.")?;
            return Ok(None);
        }

        let choice = self.console.choose(title, names.as_slice())?;
        Ok(choice.map(|index| names[index].clone()))
    }

    fn load_game(&mut self) -> io::Result<Option<Session>> {
        let Some(name) = self.choose_save("Load which character?")? else {
            return Ok(None);
        };

        match Session::load(&name, Box::new(self.repository.clone())) {
            Ok(session) => {
                let session = session
                    .with_quests(self.content.quests.clone())
                    .with_items(self.content.items.clone())
                    .with_config(self.content.config.clone())
                    .with_seed(self.seed);
                self.console.say(format_args!("Welcome back, {name}!"))?;
                Ok(Some(session))
            }
            Err(error) => {
                self.console.report(&error)?;
                Ok(None)
            }
        }
    }

    fn delete_save(&mut self) -> io::Result<()> {
        let Some(name) = self.choose_save("Delete which character?")? else {
            return Ok(());
        };

        let confirm = self
            .console
            .read_line(&format!("Delete {name} permanently? (y/n): "))?;
        if !confirm.is_some_and(|answer| answer.eq_ignore_ascii_case("y")) {
            return self.console.say("Nothing deleted.");
        }

        match self.repository.delete(&name) {
            Ok(()) => {
                tracing::info!("Deleted save for {name}");
                self.console.say(format_args!("Deleted {name}."))
            }
            Err(error) => self.console.report(&error),
        }
    }

    /// Saves, reporting failure without ending the session.
    fn save(&mut self, session: &Session) -> io::Result<bool> {
        match session.save() {
            Ok(()) => {
                self.console.say("Game saved.")?;
                Ok(true)
            }
            Err(error) => {
                self.console.report(&error)?;
                Ok(false)
            }
        }
    }
}
