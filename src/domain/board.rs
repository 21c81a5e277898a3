use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::{
    card::Card,
    drag::{DragLocation, DragResult},
    id::{CardId, IdStrategy, ListId},
    list::List,
    reorder::{move_between, move_within},
    text,
};
use crate::error::{BoardError, Result};

const DEFAULT_LIST_TITLE: &str = "New List";

/// Board configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub name: String,
    /// Title given to every freshly added list
    pub default_list_title: String,
    pub id_strategy: IdStrategy,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            name: "Board".to_string(),
            default_list_title: DEFAULT_LIST_TITLE.to_string(),
            id_strategy: IdStrategy::Uuid,
        }
    }
}

impl BoardConfig {
    /// Parses a configuration document, filling absent fields with defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: BoardConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Trimmed title for new lists, falling back to `"New List"` when the
    /// configured one is blank
    pub fn list_title(&self) -> &str {
        text::normalize(&self.default_list_title).unwrap_or(DEFAULT_LIST_TITLE)
    }

    pub fn validate(&self) -> Result<()> {
        if text::normalize(&self.default_list_title).is_none() {
            return Err(BoardError::ConfigError(
                "default_list_title must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Kanban board state: an ordered sequence of lists
///
/// A `Board` is an immutable snapshot. Every transition below returns a new
/// board and leaves `self` alone; lists a transition does not touch are
/// shared with the previous snapshot through their `Arc`.
///
/// A transition that cannot apply returns the reason as an error. Callers
/// driving an interactive session should treat any error as "keep the
/// current board", which is what [`crate::BoardEngine`] does.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    lists: Vec<Arc<List>>,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from existing lists. Use [`Board::validate`] before
    /// trusting ids that came from outside the engine.
    pub fn from_lists(lists: impl IntoIterator<Item = List>) -> Self {
        Self {
            lists: lists.into_iter().map(Arc::new).collect(),
        }
    }

    pub fn lists(&self) -> &[Arc<List>] {
        &self.lists
    }

    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    pub fn list(&self, id: &ListId) -> Option<&List> {
        self.lists
            .iter()
            .find(|list| &list.id == id)
            .map(Arc::as_ref)
    }

    pub fn list_position(&self, id: &ListId) -> Option<usize> {
        self.lists.iter().position(|list| &list.id == id)
    }

    /// Finds which list holds a card and where
    pub fn locate_card(&self, id: &CardId) -> Option<(&ListId, usize)> {
        self.lists.iter().find_map(|list| {
            list.card_position(id)
                .map(|position| (&list.id, position))
        })
    }

    pub fn card_count(&self) -> usize {
        self.lists.iter().map(|list| list.len()).sum()
    }

    pub fn list_ids(&self) -> impl Iterator<Item = &ListId> {
        self.lists.iter().map(|list| &list.id)
    }

    pub fn card_ids(&self) -> impl Iterator<Item = &CardId> {
        self.lists
            .iter()
            .flat_map(|list| list.cards.iter().map(|card| &card.id))
    }

    /// Checks that list ids and card ids are each unique on the board
    pub fn validate(&self) -> Result<()> {
        let mut lists = HashSet::new();
        for id in self.list_ids() {
            if !lists.insert(id) {
                return Err(BoardError::DuplicateListId(id.to_string()));
            }
        }

        let mut cards = HashSet::new();
        for id in self.card_ids() {
            if !cards.insert(id) {
                return Err(BoardError::DuplicateCardId(id.to_string()));
            }
        }
        Ok(())
    }

    /// Appends a new, empty list
    pub fn add_list(&self, id: ListId, title: &str) -> Result<Board> {
        let title = text::normalize(title).ok_or(BoardError::EmptyText)?;
        if self.list(&id).is_some() {
            return Err(BoardError::DuplicateListId(id.to_string()));
        }

        let mut lists = self.lists.clone();
        lists.push(Arc::new(List::new(id, title.to_string())));
        Ok(Board { lists })
    }

    /// Renames a list. Blank titles are never stored.
    pub fn update_list_title(&self, id: &ListId, new_title: &str) -> Result<Board> {
        let list = self.require_list(id)?;
        let title = text::normalize(new_title).ok_or(BoardError::EmptyText)?;
        if list.title == title {
            return Err(BoardError::Unchanged);
        }

        Ok(self.replace_lists(vec![list.retitled(title.to_string())]))
    }

    /// Removes a list together with all of its cards
    pub fn delete_list(&self, id: &ListId) -> Result<Board> {
        let position = self
            .list_position(id)
            .ok_or_else(|| BoardError::ListNotFound(id.to_string()))?;

        let mut lists = self.lists.clone();
        lists.remove(position);
        Ok(Board { lists })
    }

    /// Appends a card to the end of a list
    pub fn add_card(&self, list_id: &ListId, card_id: CardId, content: &str) -> Result<Board> {
        let list = self.require_list(list_id)?;
        let content = text::normalize(content).ok_or(BoardError::EmptyText)?;
        if self.locate_card(&card_id).is_some() {
            return Err(BoardError::DuplicateCardId(card_id.to_string()));
        }

        let mut cards = list.cards.clone();
        cards.push(Card::new(card_id, content.to_string()));
        Ok(self.replace_lists(vec![list.with_card_sequence(cards)]))
    }

    /// Replaces a card's content. Blank content is never stored.
    pub fn update_card(
        &self,
        list_id: &ListId,
        card_id: &CardId,
        new_content: &str,
    ) -> Result<Board> {
        let list = self.require_list(list_id)?;
        let position = Self::require_card(list, card_id)?;
        let content = text::normalize(new_content).ok_or(BoardError::EmptyText)?;
        if list.cards[position].content == content {
            return Err(BoardError::Unchanged);
        }

        let mut cards = list.cards.clone();
        cards[position] = cards[position].with_content(content.to_string());
        Ok(self.replace_lists(vec![list.with_card_sequence(cards)]))
    }

    pub fn delete_card(&self, list_id: &ListId, card_id: &CardId) -> Result<Board> {
        let list = self.require_list(list_id)?;
        let position = Self::require_card(list, card_id)?;

        let mut cards = list.cards.clone();
        cards.remove(position);
        Ok(self.replace_lists(vec![list.with_card_sequence(cards)]))
    }

    /// Applies the result of a finished drag gesture
    ///
    /// Containers are always resolved by id; indices only position an item
    /// inside a container that was already found. The item sitting at the
    /// source index must be the dragged one, otherwise the gesture layer is
    /// reporting coordinates from an older board and the drag is dropped.
    pub fn apply_drag_result(&self, result: &DragResult) -> Result<Board> {
        let destination = result.destination().ok_or(BoardError::DragCancelled)?;
        let source = result.source();
        if source == destination {
            return Err(BoardError::NoMovement);
        }

        match result {
            DragResult::List { item_id, .. } => {
                self.move_list(item_id, source.index, destination.index)
            }
            DragResult::Card { item_id, .. } => self.move_card(item_id, source, destination),
        }
    }

    fn move_list(&self, id: &ListId, from: usize, to: usize) -> Result<Board> {
        match self.lists.get(from) {
            Some(list) if &list.id == id => {}
            _ => {
                return Err(BoardError::StaleDrag(format!(
                    "list {} is not at index {}",
                    id, from
                )))
            }
        }

        let lists = move_within(&self.lists, from, to)
            .ok_or_else(|| BoardError::StaleDrag(format!("list index {} out of range", from)))?;
        Ok(Board { lists })
    }

    fn move_card(
        &self,
        id: &CardId,
        source: &DragLocation,
        destination: &DragLocation,
    ) -> Result<Board> {
        let source_list = self.container(&source.container_id)?;
        let destination_list = self.container(&destination.container_id)?;

        let position = Self::require_card(source_list, id)?;
        if position != source.index {
            return Err(BoardError::StaleDrag(format!(
                "card {} is at index {} of {}, not {}",
                id, position, source_list.id, source.index
            )));
        }

        let stale = || BoardError::StaleDrag(format!("card index {} out of range", source.index));

        if source_list.id == destination_list.id {
            let cards = move_within(&source_list.cards, source.index, destination.index)
                .ok_or_else(stale)?;
            return Ok(self.replace_lists(vec![source_list.with_card_sequence(cards)]));
        }

        let (remaining, received) = move_between(
            &source_list.cards,
            source.index,
            &destination_list.cards,
            destination.index,
        )
        .ok_or_else(stale)?;

        Ok(self.replace_lists(vec![
            source_list.with_card_sequence(remaining),
            destination_list.with_card_sequence(received),
        ]))
    }

    fn require_list(&self, id: &ListId) -> Result<&List> {
        self.list(id)
            .ok_or_else(|| BoardError::ListNotFound(id.to_string()))
    }

    fn require_card(list: &List, id: &CardId) -> Result<usize> {
        list.card_position(id).ok_or_else(|| BoardError::CardNotFound {
            list: list.id.to_string(),
            card: id.to_string(),
        })
    }

    /// Resolves a drop container id to the list it names
    fn container(&self, container_id: &str) -> Result<&List> {
        self.lists
            .iter()
            .find(|list| list.id.as_str() == container_id)
            .map(Arc::as_ref)
            .ok_or_else(|| BoardError::ListNotFound(container_id.to_string()))
    }

    /// New board where lists with matching ids are swapped for `updated`,
    /// keeping every position and sharing all other lists
    fn replace_lists(&self, mut updated: Vec<List>) -> Board {
        let lists = self
            .lists
            .iter()
            .map(|list| {
                match updated.iter().position(|candidate| candidate.id == list.id) {
                    Some(index) => Arc::new(updated.swap_remove(index)),
                    None => Arc::clone(list),
                }
            })
            .collect();
        Board { lists }
    }
}
