//! Command-line arguments

use crate::menu::{DEFAULT_MAX_ATTRIBUTE, MenuOptions};
use clap::{Parser, ValueEnum};
use potion_core::{Order, SortKey};

/// The Potion Creation Station - an ordered potion inventory
#[derive(Debug, Parser)]
#[command(
    name = "potion",
    about = "Interactive potion inventory ordered by a chosen stat",
    version,
    after_help = "Set RUST_LOG to control log output (written to stderr)."
)]
pub struct Cli {
    /// Sort key to start with: total, strength, speed or health
    #[arg(short, long, value_name = "KEY", help = "Initial sort key (prompted for when omitted)")]
    pub sort_by: Option<SortKey>,

    /// Order used when displaying all potions
    #[arg(short, long, value_enum, default_value_t = DisplayOrder::Descending)]
    pub order: DisplayOrder,

    /// Largest accepted value for each attribute
    #[arg(long, default_value_t = DEFAULT_MAX_ATTRIBUTE)]
    pub max_attribute: u32,

    /// Enable verbose output
    #[arg(short, long, help = "Enable debug logging")]
    pub verbose: bool,
}

/// Display order accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DisplayOrder {
    /// Smallest key first
    Ascending,
    /// Largest key first
    Descending,
}

impl From<DisplayOrder> for Order {
    fn from(order: DisplayOrder) -> Self {
        match order {
            DisplayOrder::Ascending => Order::Ascending,
            DisplayOrder::Descending => Order::Descending,
        }
    }
}

impl Cli {
    /// Session options described by these arguments
    #[must_use]
    pub fn menu_options(&self) -> MenuOptions {
        MenuOptions {
            sort_key: self.sort_by,
            display_order: self.order.into(),
            max_attribute: self.max_attribute,
        }
    }
}
