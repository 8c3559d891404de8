//! Knight's tours on the folded cube.
//!
//! Purpose
//! - Resolve knight moves across folds: each single step re-derives its heading
//!   from the direction-remap table whenever it lands on another face.
//! - Search exhaustively for a tour from `(0,0,0)` with an explicit stack of
//!   branches, each owning its own path and visited flags.
//!
//! Layout
//! - `types.rs` (moves, config, results), `knight.rs` (resolver),
//!   `search.rs` (DFS), `verify.rs` (tour checks).

mod knight;
mod search;
mod types;
mod verify;

pub use knight::{knight_move, knight_moves, move_table, step};
pub use search::{search_tour, solve};
pub use types::{
    Branch, KnightMove, SearchCfg, SearchOutcome, SearchReport, SearchStats, Tour, TourError,
    TurnRule, KNIGHT_MOVES,
};
pub use verify::{is_closed, verify_tour};
