//! Game menu for a loaded session.

use std::io::{self, BufRead, Write};

use game_core::{BattleState, Character};
use runtime::Session;

use super::{App, ConsoleActionProvider};

const GAME_MENU: [&str; 7] = [
    "View Character Stats",
    "View Inventory",
    "Quest Menu",
    "Explore (Find Battles)",
    "Shop",
    "Save Game",
    "Save and Quit",
];

impl<R: BufRead, W: Write> App<R, W> {
    /// Runs the game menu until the player quits or the character is lost.
    ///
    /// Exhausted input saves and quits.
    pub(super) fn play(&mut self, mut session: Session) -> io::Result<()> {
        loop {
            let Some(choice) = self.console.choose("GAME MENU", &GAME_MENU)? else {
                self.save(&session)?;
                return Ok(());
            };

            match choice {
                0 => self.show_stats(session.character())?,
                1 => self.inventory_menu(&mut session)?,
                2 => self.quest_menu(&mut session)?,
                3 => {
                    if !self.explore(&mut session)? {
                        self.console.say("GAME OVER")?;
                        return Ok(());
                    }
                }
                4 => self.shop_menu(&mut session)?,
                5 => {
                    self.save(&session)?;
                }
                _ => {
                    if self.save(&session)? {
                        return Ok(());
                    }
                }
            }
        }
    }

    fn show_stats(&mut self, character: &Character) -> io::Result<()> {
        let console = &mut self.console;
        console.say(format_args!("\n=== {} ===", character.name))?;
        console.say(format_args!("Class: {}", character.class))?;
        console.say(format_args!(
            "Level: {} ({}/{} XP)",
            character.level,
            character.experience,
            character.experience_to_next_level()
        ))?;
        console.say(format_args!(
            "Health: {}/{}",
            character.health, character.max_health
        ))?;
        console.say(format_args!("Strength: {}", character.strength))?;
        console.say(format_args!("Magic: {}", character.magic))?;
        console.say(format_args!("Gold: {}", character.gold))?;
        console.say(format_args!(
            "Quests: {} active, {} completed",
            character.active_quests.len(),
            character.completed_quests.len()
        ))
    }

    /// Fights one battle. Returns false if the character ends up dead for
    /// good.
    fn explore(&mut self, session: &mut Session) -> io::Result<bool> {
        let mut provider = ConsoleActionProvider::new(&mut self.console);
        let outcome = match session.explore(&mut provider) {
            Ok(outcome) => outcome,
            Err(error) => {
                self.console.report(&error)?;
                return Ok(!session.character().is_dead() || self.handle_death(session)?);
            }
        };

        let result = outcome.result;
        match result.state {
            BattleState::PlayerWon => {
                self.console.say(format_args!(
                    "Victory! You gained {} XP and {} gold.",
                    result.xp_gained, result.gold_gained
                ))?;
                if outcome.levels_gained > 0 {
                    self.console.say(format_args!(
                        "LEVEL UP! You are now level {}.",
                        session.character().level
                    ))?;
                }
                Ok(true)
            }
            BattleState::Escaped => {
                self.console.say("You live to fight another day.")?;
                Ok(true)
            }
            BattleState::EnemyWon => {
                self.console
                    .say(format_args!("The {} has defeated you...", outcome.enemy))?;
                self.handle_death(session)
            }
            BattleState::Active => Ok(true),
        }
    }

    /// Offers a paid revive. Returns true if the character is alive again.
    fn handle_death(&mut self, session: &mut Session) -> io::Result<bool> {
        let cost = session.config().revive_cost;
        let options = [
            format!("Revive ({cost} gold)"),
            "Quit to main menu".to_string(),
        ];
        if self.console.choose("You have fallen", &options)? != Some(0) {
            return Ok(false);
        }

        match session.revive_for_gold() {
            Ok(gold) => {
                self.console.say(format_args!(
                    "You have been revived with {} health. {gold} gold left.",
                    session.character().health
                ))?;
                Ok(true)
            }
            Err(error) => {
                self.console.report(&error)?;
                Ok(false)
            }
        }
    }

    fn pick_inventory_item(
        &mut self,
        session: &Session,
        title: &str,
    ) -> io::Result<Option<String>> {
        let inventory = &session.character().inventory;
        if inventory.is_empty() {
            self.console.say("Your inventory is empty.")?;
            return Ok(None);
        }

        let labels: Vec<String> = inventory
            .iter()
            .map(|id| match session.items().get(id) {
                Some(item) => format!("{} ({}, {})", item.name, item.item_type, item.effect),
                None => format!("{id} (unknown item)"),
            })
            .collect();
        let choice = self.console.choose(title, labels.as_slice())?;
        Ok(choice.map(|index| inventory[index].clone()))
    }

    fn inventory_menu(&mut self, session: &mut Session) -> io::Result<()> {
        let capacity = session.config().max_inventory_slots;
        self.console.say(format_args!(
            "\nInventory: {}/{} slots",
            session.character().inventory.len(),
            capacity
        ))?;

        match self
            .console
            .choose("INVENTORY", &["Use Item", "Equip Item", "Back"])?
        {
            Some(0) => {
                if let Some(id) = self.pick_inventory_item(session, "Use which item?")? {
                    match session.use_item(&id) {
                        Ok(effect) => self.console.say(format_args!("Used {id}: {effect}."))?,
                        Err(error) => self.console.report(&error)?,
                    }
                }
            }
            Some(1) => {
                if let Some(id) = self.pick_inventory_item(session, "Equip which item?")? {
                    match session.equip_item(&id) {
                        Ok(effect) => self.console.say(format_args!("Equipped {id}: {effect}."))?,
                        Err(error) => self.console.report(&error)?,
                    }
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn quest_menu(&mut self, session: &mut Session) -> io::Result<()> {
        let choice = self.console.choose(
            "QUEST MENU",
            &[
                "View Active Quests",
                "View Available Quests",
                "View Completed Quests",
                "Accept Quest",
                "Complete Quest",
                "Abandon Quest",
                "Back",
            ],
        )?;

        match choice {
            Some(0) => {
                let lines: Vec<String> = session
                    .active_quests()
                    .into_iter()
                    .map(|quest| format!("{}: {}", quest.id, quest.title))
                    .collect();
                self.list("Active quests", &lines)?;
            }
            Some(1) => {
                let lines: Vec<String> = session
                    .available_quests()
                    .into_iter()
                    .map(|quest| {
                        format!(
                            "{}: {} ({} XP, {} gold)",
                            quest.id, quest.title, quest.reward_xp, quest.reward_gold
                        )
                    })
                    .collect();
                self.list("Available quests", &lines)?;
            }
            Some(2) => {
                let lines = session.character().completed_quests.clone();
                self.list("Completed quests", &lines)?;
            }
            Some(3) => {
                let ids: Vec<String> = session
                    .available_quests()
                    .into_iter()
                    .map(|quest| quest.id.clone())
                    .collect();
                if ids.is_empty() {
                    return self.console.say("No quests available.");
                }
                if let Some(index) = self.console.choose("Accept which quest?", ids.as_slice())? {
                    match session.accept_quest(&ids[index]) {
                        Ok(quest) => {
                            let message = format!("Accepted: {}", quest.title);
                            self.console.say(message)?;
                        }
                        Err(error) => self.console.report(&error)?,
                    }
                }
            }
            Some(4) => {
                let ids = session.character().active_quests.clone();
                if ids.is_empty() {
                    return self.console.say("No active quests.");
                }
                if let Some(index) = self.console.choose("Complete which quest?", ids.as_slice())? {
                    match session.complete_quest(&ids[index]) {
                        Ok(reward) => {
                            self.console.say(format_args!(
                                "Quest complete! +{} XP, +{} gold.",
                                reward.xp, reward.gold
                            ))?;
                            if reward.levels_gained > 0 {
                                self.console.say(format_args!(
                                    "LEVEL UP! You are now level {}.",
                                    session.character().level
                                ))?;
                            }
                        }
                        Err(error) => self.console.report(&error)?,
                    }
                }
            }
            Some(5) => {
                let ids = session.character().active_quests.clone();
                if ids.is_empty() {
                    return self.console.say("No active quests.");
                }
                if let Some(index) = self.console.choose("Abandon which quest?", ids.as_slice())? {
                    match session.abandon_quest(&ids[index]) {
                        Ok(()) => self.console.say(format_args!("Abandoned {}.", ids[index]))?,
                        Err(error) => self.console.report(&error)?,
                    }
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn shop_menu(&mut self, session: &mut Session) -> io::Result<()> {
        self.console
            .say(format_args!("\nYou have {} gold.", session.character().gold))?;

        match self.console.choose("SHOP", &["Buy Item", "Sell Item", "Back"])? {
            Some(0) => {
                let (ids, labels): (Vec<String>, Vec<String>) = session
                    .items()
                    .iter()
                    .map(|item| {
                        (
                            item.id.clone(),
                            format!(
                                "{} - {} gold ({}, {}): {}",
                                item.name, item.cost, item.item_type, item.effect, item.description
                            ),
                        )
                    })
                    .unzip();
                if ids.is_empty() {
                    return self.console.say("The shop is empty.");
                }
                if let Some(index) = self.console.choose("Buy which item?", labels.as_slice())? {
                    match session.buy_item(&ids[index]) {
                        Ok(gold) => self
                            .console
                            .say(format_args!("Bought {}. {gold} gold left.", ids[index]))?,
                        Err(error) => self.console.report(&error)?,
                    }
                }
            }
            Some(1) => {
                if let Some(id) = self.pick_inventory_item(session, "Sell which item?")? {
                    match session.sell_item(&id) {
                        Ok(price) => self
                            .console
                            .say(format_args!("Sold {id} for {price} gold."))?,
                        Err(error) => self.console.report(&error)?,
                    }
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn list(&mut self, title: &str, lines: &[String]) -> io::Result<()> {
        self.console.say(format_args!("\n{title}:"))?;
        if lines.is_empty() {
            return self.console.say("  (none)");
        }
        for line in lines {
            self.console.say(format_args!("  - {line}"))?;
        }
        Ok(())
    }
}
