use serde::{Deserialize, Serialize};

use crate::domain::{
    drag::DragResult,
    id::{CardId, ListId},
};

/// A user intent forwarded by a front end
///
/// Serialized with a `type` tag so a front end written in anything that can
/// produce JSON can drive the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Intent {
    AddList,
    UpdateListTitle {
        list_id: ListId,
        title: String,
    },
    DeleteList {
        list_id: ListId,
    },
    AddCard {
        list_id: ListId,
        content: String,
    },
    UpdateCard {
        list_id: ListId,
        card_id: CardId,
        content: String,
    },
    DeleteCard {
        list_id: ListId,
        card_id: CardId,
    },
    DragEnd {
        result: DragResult,
    },
}

impl Intent {
    /// Parses an intent from its JSON form
    pub fn from_json(json: &str) -> crate::error::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::AddList => "add_list",
            Self::UpdateListTitle { .. } => "update_list_title",
            Self::DeleteList { .. } => "delete_list",
            Self::AddCard { .. } => "add_card",
            Self::UpdateCard { .. } => "update_card",
            Self::DeleteCard { .. } => "delete_card",
            Self::DragEnd { .. } => "drag_end",
        }
    }
}
