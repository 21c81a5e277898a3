//! # Tabula Core
//!
//! Board state engine for kanban-style list and card editing.
//!
//! The crate owns the canonical board model (an ordered sequence of lists,
//! each holding an ordered sequence of cards) and applies edits and
//! drag-and-drop results as atomic transitions. Rendering is left to the
//! caller: any front end can drive the engine through [`BoardEngine`] and
//! render the [`Board`] snapshots it hands back.

pub mod domain;
pub mod engine;
pub mod error;

// Re-export commonly used types
pub use domain::{
    board::{Board, BoardConfig},
    card::Card,
    draft::Draft,
    drag::{DragLocation, DragResult},
    id::{CardId, IdStrategy, ListId},
    intent::Intent,
    list::List,
};
pub use engine::BoardEngine;
pub use error::{BoardError, Result};
