pub mod board;
pub mod card;
pub mod draft;
pub mod drag;
pub mod id;
pub mod intent;
pub mod list;
pub mod reorder;
pub mod text;

pub use board::{Board, BoardConfig};
pub use card::Card;
pub use draft::Draft;
pub use drag::{DragLocation, DragResult};
pub use id::{CardId, IdGenerator, IdStrategy, ListId};
pub use intent::Intent;
pub use list::List;
pub use reorder::{move_between, move_within};
