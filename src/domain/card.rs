use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::id::CardId;

/// A single text item within a list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Card {
    /// Creates a new card. Callers are expected to pass already trimmed text.
    pub fn new(id: CardId, content: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            content,
            created_at: now,
            updated_at: now,
        }
    }

    /// Returns a copy of this card carrying new content
    pub fn with_content(&self, content: String) -> Self {
        Self {
            id: self.id.clone(),
            content,
            created_at: self.created_at,
            updated_at: Utc::now(),
        }
    }
}
