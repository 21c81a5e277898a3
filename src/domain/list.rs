use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{card::Card, id::CardId, id::ListId};

/// A named, ordered collection of cards
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct List {
    pub id: ListId,
    pub title: String,
    pub cards: Vec<Card>,
    pub created_at: DateTime<Utc>,
}

impl List {
    /// Creates an empty list
    pub fn new(id: ListId, title: String) -> Self {
        Self {
            id,
            title,
            cards: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Builder-style helper for seeding a list with cards
    pub fn with_cards(mut self, cards: Vec<Card>) -> Self {
        self.cards = cards;
        self
    }

    /// Copy of this list with a different title
    pub(crate) fn retitled(&self, title: String) -> Self {
        Self {
            title,
            ..self.clone()
        }
    }

    /// Copy of this list with a different card sequence
    pub(crate) fn with_card_sequence(&self, cards: Vec<Card>) -> Self {
        Self {
            id: self.id.clone(),
            title: self.title.clone(),
            cards,
            created_at: self.created_at,
        }
    }

    pub fn card(&self, id: &CardId) -> Option<&Card> {
        self.cards.iter().find(|card| &card.id == id)
    }

    pub fn card_position(&self, id: &CardId) -> Option<usize> {
        self.cards.iter().position(|card| &card.id == id)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
