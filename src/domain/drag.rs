use serde::{Deserialize, Serialize};

use crate::domain::id::{CardId, ListId};

/// A position inside a drop container
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragLocation {
    /// For card drags this is the owning list's ID. For list drags it names
    /// the board's list strip and is only compared, never resolved.
    pub container_id: String,
    pub index: usize,
}

impl DragLocation {
    pub fn new(container_id: impl Into<String>, index: usize) -> Self {
        Self {
            container_id: container_id.into(),
            index,
        }
    }
}

/// Outcome of a finished drag gesture
///
/// A `destination` of `None` means the item was dropped outside any target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DragResult {
    List {
        source: DragLocation,
        #[serde(default)]
        destination: Option<DragLocation>,
        item_id: ListId,
    },
    Card {
        source: DragLocation,
        #[serde(default)]
        destination: Option<DragLocation>,
        item_id: CardId,
    },
}

impl DragResult {
    pub fn source(&self) -> &DragLocation {
        match self {
            Self::List { source, .. } | Self::Card { source, .. } => source,
        }
    }

    pub fn destination(&self) -> Option<&DragLocation> {
        match self {
            Self::List { destination, .. } | Self::Card { destination, .. } => {
                destination.as_ref()
            }
        }
    }

    /// True when the gesture was dropped outside any target
    pub fn is_cancelled(&self) -> bool {
        self.destination().is_none()
    }

    /// True when the item was dropped exactly where it was picked up
    pub fn is_in_place(&self) -> bool {
        self.destination()
            .map(|destination| destination == self.source())
            .unwrap_or(false)
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::List { .. } => "list",
            Self::Card { .. } => "card",
        }
    }
}
