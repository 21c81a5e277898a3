use std::sync::Arc;

use tracing::{debug, trace};

use crate::{
    domain::{Board, BoardConfig, CardId, DragResult, IdGenerator, Intent, ListId},
    error::Result,
};

/// Owner of the committed board
///
/// Every intent computes a new [`Board`] from the current snapshot and
/// commits it as a whole, or leaves the snapshot untouched when the intent
/// cannot apply. Intent methods return the snapshot that is current after the
/// call; a rejected intent hands back the very same `Arc`, so
/// `Arc::ptr_eq` is a complete change check.
#[derive(Debug)]
pub struct BoardEngine {
    config: BoardConfig,
    ids: IdGenerator,
    board: Arc<Board>,
    revision: u64,
}

impl BoardEngine {
    /// Creates an engine holding an empty board
    pub fn new(config: BoardConfig) -> Self {
        Self {
            ids: IdGenerator::new(config.id_strategy),
            config,
            board: Arc::new(Board::new()),
            revision: 0,
        }
    }

    /// Creates an engine around an existing board
    ///
    /// Fails if the board repeats a list or card id, or the config is invalid.
    pub fn with_board(config: BoardConfig, board: Board) -> Result<Self> {
        config.validate()?;
        board.validate()?;

        let mut ids = IdGenerator::new(config.id_strategy);
        ids.reserve(board.list_ids(), board.card_ids());

        Ok(Self {
            config,
            ids,
            board: Arc::new(board),
            revision: 0,
        })
    }

    pub fn board(&self) -> &Arc<Board> {
        &self.board
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Number of boards committed since the engine was created
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn add_list(&mut self) -> Arc<Board> {
        let id = self.ids.next_list_id();
        let next = self.board.add_list(id, self.config.list_title());
        self.commit("add_list", next)
    }

    pub fn update_list_title(&mut self, list_id: &ListId, title: &str) -> Arc<Board> {
        let next = self.board.update_list_title(list_id, title);
        self.commit("update_list_title", next)
    }

    pub fn delete_list(&mut self, list_id: &ListId) -> Arc<Board> {
        let next = self.board.delete_list(list_id);
        self.commit("delete_list", next)
    }

    pub fn add_card(&mut self, list_id: &ListId, content: &str) -> Arc<Board> {
        let id = self.ids.next_card_id();
        let next = self.board.add_card(list_id, id, content);
        self.commit("add_card", next)
    }

    pub fn update_card(&mut self, list_id: &ListId, card_id: &CardId, content: &str) -> Arc<Board> {
        let next = self.board.update_card(list_id, card_id, content);
        self.commit("update_card", next)
    }

    pub fn delete_card(&mut self, list_id: &ListId, card_id: &CardId) -> Arc<Board> {
        let next = self.board.delete_card(list_id, card_id);
        self.commit("delete_card", next)
    }

    pub fn apply_drag_result(&mut self, result: &DragResult) -> Arc<Board> {
        let next = self.board.apply_drag_result(result);
        self.commit("apply_drag_result", next)
    }

    /// Routes a decoded intent to the matching operation
    pub fn dispatch(&mut self, intent: &Intent) -> Arc<Board> {
        match intent {
            Intent::AddList => self.add_list(),
            Intent::UpdateListTitle { list_id, title } => self.update_list_title(list_id, title),
            Intent::DeleteList { list_id } => self.delete_list(list_id),
            Intent::AddCard { list_id, content } => self.add_card(list_id, content),
            Intent::UpdateCard {
                list_id,
                card_id,
                content,
            } => self.update_card(list_id, card_id, content),
            Intent::DeleteCard { list_id, card_id } => self.delete_card(list_id, card_id),
            Intent::DragEnd { result } => self.apply_drag_result(result),
        }
    }

    fn commit(&mut self, operation: &'static str, next: Result<Board>) -> Arc<Board> {
        match next {
            Ok(board) => {
                self.board = Arc::new(board);
                self.revision += 1;
                trace!(
                    board = %self.config.name,
                    operation,
                    revision = self.revision,
                    "board committed"
                );
            }
            Err(reason) => {
                debug!(board = %self.config.name, operation, %reason, "intent dropped");
            }
        }
        Arc::clone(&self.board)
    }
}

impl Default for BoardEngine {
    fn default() -> Self {
        Self::new(BoardConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Card, DragLocation, IdStrategy, List};
    use crate::error::BoardError;
    use std::collections::HashSet;

    fn sequential() -> BoardEngine {
        BoardEngine::new(BoardConfig {
            id_strategy: IdStrategy::Sequential,
            ..BoardConfig::default()
        })
    }

    fn last_list_id(board: &Board) -> ListId {
        board.lists().last().unwrap().id.clone()
    }

    fn assert_unique_ids(board: &Board) {
        let lists: HashSet<_> = board.list_ids().collect();
        let cards: HashSet<_> = board.card_ids().collect();
        assert_eq!(lists.len(), board.len());
        assert_eq!(cards.len(), board.card_count());
    }

    #[test]
    fn test_engine_starts_empty() {
        let engine = BoardEngine::default();
        assert!(engine.board().is_empty());
        assert_eq!(engine.revision(), 0);
    }

    #[test]
    fn test_add_list_uses_default_title() {
        let mut engine = sequential();
        let board = engine.add_list();

        assert_eq!(board.len(), 1);
        assert_eq!(board.lists()[0].title, "New List");
        assert_eq!(board.lists()[0].id.as_str(), "list-1");
        assert_eq!(engine.revision(), 1);
    }

    #[test]
    fn test_configured_list_title() {
        let mut engine = BoardEngine::new(BoardConfig {
            default_list_title: "Backlog".to_string(),
            ..BoardConfig::default()
        });

        assert_eq!(engine.add_list().lists()[0].title, "Backlog");
    }

    #[test]
    fn test_blank_configured_title_still_adds_lists() {
        let mut engine = BoardEngine::new(BoardConfig {
            default_list_title: "   ".to_string(),
            ..BoardConfig::default()
        });

        let board = engine.add_list();
        assert_eq!(board.len(), 1);
        assert_eq!(board.lists()[0].title, "New List");
        assert_eq!(engine.revision(), 1);
    }

    #[test]
    fn test_add_list_after_seeding_last_sequential_id() {
        let seeded = ListId::new(u64::MAX);
        let board = Board::from_lists(vec![List::new(seeded.clone(), "Seeded".to_string())]);
        let mut engine = BoardEngine::with_board(
            BoardConfig {
                id_strategy: IdStrategy::Sequential,
                ..BoardConfig::default()
            },
            board,
        )
        .unwrap();

        engine.add_list();
        let board = engine.add_list();

        assert_eq!(board.len(), 3);
        assert_eq!(board.lists()[0].id, seeded);
        assert_unique_ids(&board);
    }

    #[test]
    fn test_config_name_from_json() {
        let config = BoardConfig::from_json(r#"{ "name": "Sprint 12" }"#).unwrap();
        let engine = BoardEngine::new(config);

        assert_eq!(engine.config().name, "Sprint 12");
        assert_eq!(engine.config().list_title(), "New List");
    }

    #[test]
    fn test_rejected_intent_keeps_same_snapshot() {
        let mut engine = sequential();
        let board = engine.add_list();
        let list_id = last_list_id(&board);

        let after = engine.update_card(&list_id, &CardId::new(1), "text");
        assert!(Arc::ptr_eq(&board, &after));

        let after = engine.update_list_title(&list_id, "   ");
        assert!(Arc::ptr_eq(&board, &after));
        assert_eq!(after.lists()[0].title, "New List");

        let after = engine.delete_list(&ListId::new(99));
        assert!(Arc::ptr_eq(&board, &after));

        assert_eq!(engine.revision(), 1);
    }

    #[test]
    fn test_committed_intent_replaces_snapshot() {
        let mut engine = sequential();
        let before = engine.add_list();
        let after = engine.update_list_title(&last_list_id(&before), "Todo");

        assert!(!Arc::ptr_eq(&before, &after));
        assert_eq!(before.lists()[0].title, "New List");
        assert_eq!(after.lists()[0].title, "Todo");
        assert!(Arc::ptr_eq(engine.board(), &after));
    }

    #[test]
    fn test_add_then_delete_list_restores_lists() {
        let mut engine = BoardEngine::default();
        engine.add_list();
        let first = engine.add_list();
        let list_id = last_list_id(&first);
        engine.add_card(&list_id, "keep me");
        let before = Arc::clone(engine.board());

        let added = engine.add_list();
        let after = engine.delete_list(&last_list_id(&added));

        assert_eq!(after.lists(), before.lists());
    }

    #[test]
    fn test_rejected_add_card_does_not_commit() {
        let mut engine = sequential();
        let list_id = last_list_id(&engine.add_list());

        engine.add_card(&list_id, "   ");
        engine.add_card(&ListId::new(50), "orphan");
        assert_eq!(engine.board().card_count(), 0);
        assert_eq!(engine.revision(), 1);

        let board = engine.add_card(&list_id, " first ");
        assert_eq!(board.list(&list_id).unwrap().cards[0].content, "first");
        assert_eq!(engine.revision(), 2);
    }

    #[test]
    fn test_ids_stay_unique_across_add_and_delete() {
        for strategy in [IdStrategy::Sequential, IdStrategy::Uuid] {
            let mut engine = BoardEngine::new(BoardConfig {
                id_strategy: strategy,
                ..BoardConfig::default()
            });
            let mut ever_seen_cards = HashSet::new();

            for round in 0..20 {
                let list_id = last_list_id(&engine.add_list());
                for n in 0..3 {
                    let board = engine.add_card(&list_id, &format!("card {round}.{n}"));
                    let card = board.list(&list_id).unwrap().cards.last().unwrap();
                    assert!(ever_seen_cards.insert(card.id.clone()));
                }

                let board = Arc::clone(engine.board());
                if round % 3 == 0 {
                    engine.delete_list(&list_id);
                } else {
                    let first = &board.list(&list_id).unwrap().cards[0];
                    engine.delete_card(&list_id, &first.id);
                }
                assert_unique_ids(engine.board());
            }
        }
    }

    #[test]
    fn test_drag_flow() {
        let mut engine = sequential();
        let x = last_list_id(&engine.add_list());
        let y = last_list_id(&engine.add_list());
        engine.add_card(&x, "c1");
        engine.add_card(&x, "c2");
        engine.add_card(&y, "c3");

        let board = engine.apply_drag_result(&DragResult::Card {
            source: DragLocation::new(x.as_str(), 0),
            destination: Some(DragLocation::new(y.as_str(), 1)),
            item_id: CardId::new(1),
        });

        let content = |id: &ListId| -> Vec<String> {
            board
                .list(id)
                .unwrap()
                .cards
                .iter()
                .map(|card| card.content.clone())
                .collect()
        };
        assert_eq!(content(&x), vec!["c2"]);
        assert_eq!(content(&y), vec!["c3", "c1"]);
    }

    #[test]
    fn test_cancelled_and_in_place_drags_are_noops() {
        let mut engine = sequential();
        engine.add_list();
        let board = engine.add_list();
        let revision = engine.revision();

        let cancelled = engine.apply_drag_result(&DragResult::List {
            source: DragLocation::new("board", 0),
            destination: None,
            item_id: ListId::new(1),
        });
        let in_place = engine.apply_drag_result(&DragResult::List {
            source: DragLocation::new("board", 1),
            destination: Some(DragLocation::new("board", 1)),
            item_id: ListId::new(2),
        });

        assert!(Arc::ptr_eq(&board, &cancelled));
        assert!(Arc::ptr_eq(&board, &in_place));
        assert_eq!(engine.revision(), revision);
    }

    #[test]
    fn test_dispatch() -> anyhow::Result<()> {
        let mut engine = sequential();
        let script = [
            r#"{ "type": "add_list" }"#,
            r#"{ "type": "add_list" }"#,
            r#"{ "type": "update_list_title", "list_id": "list-2", "title": "Done" }"#,
            r#"{ "type": "add_card", "list_id": "list-1", "content": "ship it" }"#,
            r#"{ "type": "drag_end", "result": {
                "kind": "card",
                "source": { "container_id": "list-1", "index": 0 },
                "destination": { "container_id": "list-2", "index": 0 },
                "item_id": "card-1" } }"#,
            r#"{ "type": "drag_end", "result": {
                "kind": "list",
                "source": { "container_id": "board", "index": 1 },
                "destination": { "container_id": "board", "index": 0 },
                "item_id": "list-2" } }"#,
        ];

        for json in script {
            engine.dispatch(&Intent::from_json(json)?);
        }

        let board = engine.board();
        assert_eq!(board.lists()[0].title, "Done");
        assert_eq!(board.lists()[0].cards[0].content, "ship it");
        assert!(board.lists()[1].is_empty());
        assert_eq!(engine.revision(), script.len() as u64);
        Ok(())
    }

    #[test]
    fn test_with_board_reserves_existing_ids() {
        let board = Board::from_lists(vec![List::new(ListId::new(3), "Seeded".to_string())
            .with_cards(vec![Card::new(CardId::new(7), "old".to_string())])]);
        let mut engine = BoardEngine::with_board(
            BoardConfig {
                id_strategy: IdStrategy::Sequential,
                ..BoardConfig::default()
            },
            board,
        )
        .unwrap();

        let board = engine.add_list();
        assert_eq!(last_list_id(&board).as_str(), "list-4");

        let board = engine.add_card(&ListId::new(3), "new");
        assert_eq!(board.lists()[0].cards[1].id.as_str(), "card-8");
    }

    #[test]
    fn test_with_board_rejects_duplicates() {
        let board = Board::from_lists(vec![
            List::new(ListId::new(1), "A".to_string()),
            List::new(ListId::new(1), "B".to_string()),
        ]);

        assert!(matches!(
            BoardEngine::with_board(BoardConfig::default(), board),
            Err(BoardError::DuplicateListId(_))
        ));
    }
}
