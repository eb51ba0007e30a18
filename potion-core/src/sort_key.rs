//! Catalogue of the sort keys the inventory can be ordered by.

use crate::Potion;
use std::fmt;
use std::str::FromStr;

/// A named key projection over [`Potion`].
///
/// Any `Fn(&Potion) -> i64` can order a store; these are the ones offered to
/// users. A store's key is fixed for its lifetime, so switching keys means
/// rebuilding into a new store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortKey {
    /// Sum of all attributes
    #[default]
    Total,
    /// Strength attribute
    Strength,
    /// Speed attribute
    Speed,
    /// Health attribute
    Health,
}

impl SortKey {
    /// Every sort key, in menu order
    pub const ALL: [SortKey; 4] = [SortKey::Total, SortKey::Strength, SortKey::Speed, SortKey::Health];

    /// Project a potion onto this key.
    #[must_use]
    pub fn key(self, potion: &Potion) -> i64 {
        match self {
            // Three u32 values always fit in an i64
            SortKey::Total => {
                i64::from(potion.strength) + i64::from(potion.speed) + i64::from(potion.health)
            }
            SortKey::Strength => i64::from(potion.strength),
            SortKey::Speed => i64::from(potion.speed),
            SortKey::Health => i64::from(potion.health),
        }
    }

    /// Map a 1-based menu choice to a key (1 Total, 2 Strength, 3 Speed, 4 Health).
    #[must_use]
    pub fn from_menu_choice(choice: i64) -> Option<Self> {
        usize::try_from(choice)
            .ok()
            .and_then(|c| c.checked_sub(1))
            .and_then(|i| Self::ALL.get(i).copied())
    }

    /// Human-readable label used by the menu
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            SortKey::Total => "Total Stats",
            SortKey::Strength => "Strength",
            SortKey::Speed => "Speed",
            SortKey::Health => "Health",
        }
    }

    const fn as_str(self) -> &'static str {
        match self {
            SortKey::Total => "total",
            SortKey::Strength => "strength",
            SortKey::Speed => "speed",
            SortKey::Health => "health",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                anyhow::anyhow!("Unknown sort key '{s}': expected total, strength, speed or health")
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projections() {
        let p = Potion::new("p", 3, 4, 5);
        assert_eq!(SortKey::Total.key(&p), 12);
        assert_eq!(SortKey::Strength.key(&p), 3);
        assert_eq!(SortKey::Speed.key(&p), 4);
        assert_eq!(SortKey::Health.key(&p), 5);
    }

    #[test]
    fn test_menu_choice_mapping() {
        assert_eq!(SortKey::from_menu_choice(1), Some(SortKey::Total));
        assert_eq!(SortKey::from_menu_choice(2), Some(SortKey::Strength));
        assert_eq!(SortKey::from_menu_choice(3), Some(SortKey::Speed));
        assert_eq!(SortKey::from_menu_choice(4), Some(SortKey::Health));
        assert_eq!(SortKey::from_menu_choice(0), None);
        assert_eq!(SortKey::from_menu_choice(5), None);
        assert_eq!(SortKey::from_menu_choice(-1), None);
    }

    #[test]
    fn test_parse_and_display() {
        for key in SortKey::ALL {
            assert_eq!(key.to_string().parse::<SortKey>().unwrap(), key);
        }
        assert_eq!(" Speed ".parse::<SortKey>().unwrap(), SortKey::Speed);

        let err = "mana".parse::<SortKey>().unwrap_err();
        assert!(err.to_string().contains("Unknown sort key"));
    }

    #[test]
    fn test_default_is_total() {
        assert_eq!(SortKey::default(), SortKey::Total);
    }
}
