//! Interactive menu session driving an [`OrderedStore`].
//!
//! The session owns the store for its lifetime. Emptiness checks and sort-key
//! changes go straight to the store; no shadow list of records is kept.

use crate::prompt::Prompter;
use anyhow::{Context, Result};
use potion_core::{Order, OrderedStore, Potion, SortKey};
use std::io::{BufRead, Write};
use std::ops::ControlFlow;

/// Default upper bound for each potion attribute
pub const DEFAULT_MAX_ATTRIBUTE: u32 = 100_000;

/// Configuration for a menu session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuOptions {
    /// Sort key to start with; prompted for when `None`
    pub sort_key: Option<SortKey>,

    /// Order used by "Display All Potions"
    pub display_order: Order,

    /// Largest value accepted for strength, speed and health
    pub max_attribute: u32,
}

impl Default for MenuOptions {
    fn default() -> Self {
        Self { sort_key: None, display_order: Order::Descending, max_attribute: DEFAULT_MAX_ATTRIBUTE }
    }
}

/// Main menu entries, numbered as shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// 1. Add Potion
    Add,
    /// 2. Display All Potions
    Display,
    /// 3. Search Potion by Name
    Search,
    /// 4. Delete Potion by Name
    Delete,
    /// 5. Clear All Potions
    Clear,
    /// 6. Change Sorting Method
    ChangeSort,
    /// 7. Quit
    Quit,
}

impl MenuChoice {
    /// Every entry, in menu order
    pub const ALL: [MenuChoice; 7] = [
        MenuChoice::Add,
        MenuChoice::Display,
        MenuChoice::Search,
        MenuChoice::Delete,
        MenuChoice::Clear,
        MenuChoice::ChangeSort,
        MenuChoice::Quit,
    ];

    /// Map a 1-based menu number to an entry
    #[must_use]
    pub fn from_number(number: i64) -> Option<Self> {
        usize::try_from(number)
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| Self::ALL.get(i).copied())
    }

    /// Text shown in the menu
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            MenuChoice::Add => "Add Potion",
            MenuChoice::Display => "Display All Potions",
            MenuChoice::Search => "Search Potion by Name",
            MenuChoice::Delete => "Delete Potion by Name",
            MenuChoice::Clear => "Clear All Potions",
            MenuChoice::ChangeSort => "Change Sorting Method",
            MenuChoice::Quit => "Quit",
        }
    }
}

/// One interactive session over an input and output stream
#[derive(Debug)]
pub struct Session<R, W> {
    prompter: Prompter<R, W>,
    store: OrderedStore,
    options: MenuOptions,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session with an empty store
    pub fn new(input: R, output: W, options: MenuOptions) -> Self {
        let store = OrderedStore::with_sort_key(options.sort_key.unwrap_or_default());
        Self { prompter: Prompter::new(input, output), store, options }
    }

    /// The store as it currently stands
    pub fn store(&self) -> &OrderedStore {
        &self.store
    }

    /// Consume the session, returning the store and the output stream
    pub fn into_parts(self) -> (OrderedStore, W) {
        (self.store, self.prompter.into_output())
    }

    /// Run the session until the user quits or input ends.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails.
    pub fn run(&mut self) -> Result<()> {
        self.prompter.say("Welcome to The Potion Creation Station!")?;

        let sort_key = match self.options.sort_key {
            Some(key) => key,
            None => {
                self.prompter.say("To get started, please select a potion sorting method:")?;
                let Some(key) = self.select_sort_key()? else { return Ok(()) };
                key
            }
        };
        if self.store.sort_key() != Some(sort_key) {
            self.store = std::mem::take(&mut self.store).resort(sort_key);
        }
        log::info!("session started, sorting by {sort_key}");

        self.prompter.say("Now onto the Potion Main Menu....")?;
        loop {
            self.show_menu()?;
            let Some(number) = self.prompter.int("Please select your choice!: ", 1, 7)? else {
                log::debug!("input ended at main menu");
                return Ok(());
            };
            let Some(choice) = MenuChoice::from_number(number) else { continue };

            log::debug!("menu choice {choice:?}");
            if self.dispatch(choice)?.is_break() {
                return Ok(());
            }
        }
    }

    fn show_menu(&mut self) -> Result<()> {
        self.prompter.say("\n--- Menu ---")?;
        self.prompter.say(
            "\n(Helpful Tip: Choose option 6 if you want to sort your potions differently!)",
        )?;
        for (i, choice) in MenuChoice::ALL.iter().enumerate() {
            self.prompter.say(format_args!("{}. {}", i + 1, choice.label()))?;
        }
        Ok(())
    }

    /// Prompt for a sort key, `None` at end of input
    fn select_sort_key(&mut self) -> Result<Option<SortKey>> {
        for (i, key) in SortKey::ALL.iter().enumerate() {
            self.prompter.say(format_args!("{}. {}", i + 1, key.label()))?;
        }
        let Some(number) = self.prompter.int("Please select your choice!: ", 1, 4)? else {
            return Ok(None);
        };
        Ok(SortKey::from_menu_choice(number))
    }

    /// Run one menu action. `Break` ends the session.
    fn dispatch(&mut self, choice: MenuChoice) -> Result<ControlFlow<()>> {
        match choice {
            MenuChoice::Add => self.add(),
            MenuChoice::Display => self.display(),
            MenuChoice::Search => self.search(),
            MenuChoice::Delete => self.delete(),
            MenuChoice::Clear => self.clear(),
            MenuChoice::ChangeSort => self.change_sort(),
            MenuChoice::Quit => {
                self.prompter.say(
                    "Thank you for visiting the Potion Creation Station! Good luck with future adventures!",
                )?;
                Ok(ControlFlow::Break(()))
            }
        }
    }

    /// Print the "empty inventory" message for `action`, returning `true` if
    /// the store is empty
    fn reject_if_empty(&mut self, action: &str) -> Result<bool> {
        if self.store.is_empty() {
            self.prompter.say(format_args!("You have no potions in your inventory to be {action}!"))?;
            return Ok(true);
        }
        Ok(false)
    }

    fn attribute(&mut self, prompt: &str) -> Result<Option<u32>> {
        let max = i64::from(self.options.max_attribute);
        let Some(value) = self.prompter.int(prompt, 0, max)? else { return Ok(None) };
        let value = u32::try_from(value).context("Attribute out of range")?;
        Ok(Some(value))
    }

    fn add(&mut self) -> Result<ControlFlow<()>> {
        let Some(name) = self.prompter.text("Potion name: ")? else { return Ok(ControlFlow::Break(())) };
        let Some(strength) = self.attribute("Strength: ")? else { return Ok(ControlFlow::Break(())) };
        let Some(speed) = self.attribute("Speed: ")? else { return Ok(ControlFlow::Break(())) };
        let Some(health) = self.attribute("Health: ")? else { return Ok(ControlFlow::Break(())) };

        let potion = Potion::new(name, strength, speed, health);
        log::debug!("adding {potion}");
        self.store.insert(potion);
        self.prompter.say("Potion added!")?;
        Ok(ControlFlow::Continue(()))
    }

    fn display(&mut self) -> Result<ControlFlow<()>> {
        if self.reject_if_empty("displayed")? {
            return Ok(ControlFlow::Continue(()));
        }
        self.prompter.say("\n=== Potion List ===")?;
        self.store.write_inorder(self.prompter.output(), self.options.display_order)?;
        Ok(ControlFlow::Continue(()))
    }

    fn search(&mut self) -> Result<ControlFlow<()>> {
        if self.reject_if_empty("searched for")? {
            return Ok(ControlFlow::Continue(()));
        }
        let Some(name) = self.prompter.text("Enter potion name: ")? else { return Ok(ControlFlow::Break(())) };

        match self.store.search(&name) {
            Some(potion) => self.prompter.say(potion)?,
            None => self.prompter.say("Potion not found.")?,
        }
        Ok(ControlFlow::Continue(()))
    }

    fn delete(&mut self) -> Result<ControlFlow<()>> {
        if self.reject_if_empty("deleted")? {
            return Ok(ControlFlow::Continue(()));
        }
        let Some(name) = self.prompter.text("Enter potion name: ")? else { return Ok(ControlFlow::Break(())) };

        match self.store.remove(&name) {
            Some(_) => self.prompter.say(
                "This Potion has been sent into the depths of the archive, never to be found again!",
            )?,
            None => self.prompter.say("Potion not found.")?,
        }
        Ok(ControlFlow::Continue(()))
    }

    fn clear(&mut self) -> Result<ControlFlow<()>> {
        if self.reject_if_empty("cleared")? {
            return Ok(ControlFlow::Continue(()));
        }
        self.store.clear();
        self.prompter.say("All potions cleared!")?;
        Ok(ControlFlow::Continue(()))
    }

    fn change_sort(&mut self) -> Result<ControlFlow<()>> {
        self.prompter.say("Please select a potion sorting method:")?;
        let Some(key) = self.select_sort_key()? else { return Ok(ControlFlow::Break(())) };

        self.store = std::mem::take(&mut self.store).resort(key);
        log::info!("sort key changed to {key}");
        self.prompter.say("Sorting method changed!")?;
        Ok(ControlFlow::Continue(()))
    }
}
