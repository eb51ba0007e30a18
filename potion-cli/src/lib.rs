//! Console front end for the Potion Creation Station.
//!
//! Prompts for and validates user input, then drives a
//! [`potion_core::OrderedStore`] through a numbered menu.

pub mod cli;
pub mod menu;
pub mod prompt;

pub use menu::{MenuChoice, MenuOptions, Session};
