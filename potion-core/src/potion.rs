//! The potion record stored by the inventory.

use std::fmt;

/// A named potion with three non-negative attributes.
///
/// The name is the record's identity for lookup and removal. It is not the
/// sort key and the store does not require it to be unique.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Potion {
    /// Display name, used by `search` and `remove`
    pub name: String,

    /// Strength attribute (STR)
    pub strength: u32,

    /// Speed attribute (SPD)
    pub speed: u32,

    /// Health attribute (HP)
    pub health: u32,
}

impl Potion {
    /// Create a new potion record
    #[must_use]
    pub fn new(name: impl Into<String>, strength: u32, speed: u32, health: u32) -> Self {
        Self { name: name.into(), strength, speed, health }
    }

    /// Sum of all three attributes.
    ///
    /// Widened to `u64` so three `u32::MAX` attributes cannot overflow.
    #[must_use]
    pub fn total(&self) -> u64 {
        u64::from(self.strength) + u64::from(self.speed) + u64::from(self.health)
    }
}

impl fmt::Display for Potion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (STR: {}, SPD: {}, HP: {}, Total: {})",
            self.name,
            self.strength,
            self.speed,
            self.health,
            self.total()
        )
    }
}
