use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use uuid::Uuid;

use crate::error::BoardError;

macro_rules! opaque_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Kind prefix used for generated IDs
            pub const PREFIX: &'static str = $prefix;

            /// Creates a sequential ID from a counter (e.g., `list-3`)
            pub fn new(counter: u64) -> Self {
                Self(format!("{}-{}", Self::PREFIX, counter))
            }

            /// Creates a random ID (e.g., `list-5f0c...`)
            pub fn random() -> Self {
                Self(format!("{}-{}", Self::PREFIX, Uuid::new_v4()))
            }

            /// Returns the string representation
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Numeric suffix of a sequential ID, if this is one
            fn sequence(&self) -> Option<u64> {
                self.0
                    .strip_prefix(Self::PREFIX)
                    .and_then(|rest| rest.strip_prefix('-'))
                    .filter(|n| !n.is_empty() && n.bytes().all(|b| b.is_ascii_digit()))
                    .and_then(|n| n.parse().ok())
            }
        }

        impl FromStr for $name {
            type Err = BoardError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                if s.trim().is_empty() {
                    return Err(BoardError::InvalidId(s.to_string()));
                }
                Ok(Self(s.to_string()))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}

opaque_id!(
    /// Unique identifier for a list. Opaque to callers; any non-empty string
    /// supplied by a front end is accepted.
    ListId,
    "list"
);

opaque_id!(
    /// Unique identifier for a card, unique across the whole board
    CardId,
    "card"
);

/// How the engine mints new identifiers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    /// `<kind>-<uuid v4>`
    #[default]
    Uuid,
    /// `<kind>-<n>` from a monotonic counter
    Sequential,
}

/// Source of fresh list and card IDs.
///
/// Sequential counters only ever grow, so an ID is never handed out twice
/// even after the item it named was deleted. A counter that would pass
/// `u64::MAX` is exhausted (`None`) and random IDs are minted from then on.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    strategy: IdStrategy,
    next_list: Option<u64>,
    next_card: Option<u64>,
}

impl IdGenerator {
    pub fn new(strategy: IdStrategy) -> Self {
        Self {
            strategy,
            next_list: Some(1),
            next_card: Some(1),
        }
    }

    fn advance_past(counter: Option<u64>, taken: u64) -> Option<u64> {
        let next = counter?;
        taken.checked_add(1).map(|after| next.max(after))
    }

    /// Moves the sequential counters past IDs that are already taken
    pub fn reserve<'a>(
        &mut self,
        lists: impl IntoIterator<Item = &'a ListId>,
        cards: impl IntoIterator<Item = &'a CardId>,
    ) {
        for n in lists.into_iter().filter_map(ListId::sequence) {
            self.next_list = Self::advance_past(self.next_list, n);
        }
        for n in cards.into_iter().filter_map(CardId::sequence) {
            self.next_card = Self::advance_past(self.next_card, n);
        }
    }

    pub fn next_list_id(&mut self) -> ListId {
        match self.strategy {
            IdStrategy::Uuid => ListId::random(),
            IdStrategy::Sequential => match self.next_list {
                Some(n) => {
                    self.next_list = n.checked_add(1);
                    ListId::new(n)
                }
                None => ListId::random(),
            },
        }
    }

    pub fn next_card_id(&mut self) -> CardId {
        match self.strategy {
            IdStrategy::Uuid => CardId::random(),
            IdStrategy::Sequential => match self.next_card {
                Some(n) => {
                    self.next_card = n.checked_add(1);
                    CardId::new(n)
                }
                None => CardId::random(),
            },
        }
    }
}
