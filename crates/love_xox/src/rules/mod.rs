//! Game rules for the XOX board.
//!
//! Pure functions over [`Board`](crate::Board). The session and the search
//! both evaluate positions through these, so terminal detection is defined
//! in exactly one place.

pub mod draw;
pub mod win;

pub use draw::{is_full, outcome};
pub use win::{WINNING_LINES, check_winner};
