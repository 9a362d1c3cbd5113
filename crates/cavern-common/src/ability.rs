//! Player traversal abilities used to gate world progression.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseAbilityError;

/// A traversal capability the player can unlock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ability {
    /// Second jump while airborne.
    DoubleJump,
    /// Short horizontal burst.
    Dash,
    /// Climb vertical walls.
    WallClimb,
    /// Slow descent with extended horizontal travel.
    Glide,
}

impl Ability {
    /// All abilities, in gate-table order.
    pub const ALL: [Self; 4] = [Self::DoubleJump, Self::Dash, Self::WallClimb, Self::Glide];

    /// Stable string key (`double_jump`, `dash`, ...).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DoubleJump => "double_jump",
            Self::Dash => "dash",
            Self::WallClimb => "wall_climb",
            Self::Glide => "glide",
        }
    }

    const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Ability {
    type Err = ParseAbilityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|ability| ability.as_str() == s)
            .ok_or_else(|| ParseAbilityError(s.to_string()))
    }
}

/// A set of unlocked abilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct AbilitySet(u8);

impl AbilitySet {
    /// The empty set.
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Every ability unlocked.
    #[must_use]
    pub const fn all() -> Self {
        Self(0b1111)
    }

    /// Adds an ability. Returns `true` if it was not already present.
    pub fn insert(&mut self, ability: Ability) -> bool {
        let had = self.contains(ability);
        self.0 |= ability.bit();
        !had
    }

    /// Checks if an ability is unlocked.
    #[must_use]
    pub const fn contains(self, ability: Ability) -> bool {
        self.0 & ability.bit() != 0
    }

    /// Checks an optional edge requirement against this set.
    #[must_use]
    pub const fn satisfies(self, requirement: Option<Ability>) -> bool {
        match requirement {
            Some(ability) => self.contains(ability),
            None => true,
        }
    }

    /// Number of unlocked abilities.
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Checks if no ability is unlocked.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterates the unlocked abilities in gate-table order.
    pub fn iter(self) -> impl Iterator<Item = Ability> {
        Ability::ALL.into_iter().filter(move |a| self.contains(*a))
    }
}

impl FromIterator<Ability> for AbilitySet {
    fn from_iter<I: IntoIterator<Item = Ability>>(iter: I) -> Self {
        let mut set = Self::empty();
        for ability in iter {
            set.insert(ability);
        }
        set
    }
}

impl Extend<Ability> for AbilitySet {
    fn extend<I: IntoIterator<Item = Ability>>(&mut self, iter: I) {
        for ability in iter {
            self.insert(ability);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trip_names() {
        for ability in Ability::ALL {
            assert_eq!(ability.as_str().parse::<Ability>().ok(), Some(ability));
        }
        assert!("triple_jump".parse::<Ability>().is_err());
    }

    #[test]
    fn test_set_insert_and_len() {
        let mut set = AbilitySet::empty();
        assert!(set.is_empty());
        assert!(set.insert(Ability::WallClimb));
        assert!(!set.insert(Ability::WallClimb));
        assert_eq!(set.len(), 1);
        assert_eq!(AbilitySet::all().len(), 4);
    }

    #[test]
    fn test_satisfies() {
        let set: AbilitySet = [Ability::DoubleJump].into_iter().collect();
        assert!(set.satisfies(None));
        assert!(set.satisfies(Some(Ability::DoubleJump)));
        assert!(!set.satisfies(Some(Ability::Glide)));
    }

    #[test]
    fn test_iter_order() {
        let set: AbilitySet = [Ability::Glide, Ability::DoubleJump].into_iter().collect();
        let collected: Vec<_> = set.iter().collect();
        assert_eq!(collected, vec![Ability::DoubleJump, Ability::Glide]);
    }
}
