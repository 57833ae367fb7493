//! Playing a ladder
//!
//! The per-move validation state machine and the small read-only extras the
//! presentation layers show alongside it.

mod rarity;
pub mod session;

pub use rarity::Rarity;
pub use session::{
    ERROR_DISPLAY_DURATION, ErrorSignal, LadderError, LadderSession, MAX_ROWS, Outcome, Status,
};
