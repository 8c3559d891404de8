//! Curated API for the CLI, benches, and examples.
//!
//! Prefer these re-exports over module paths for consistency across callers.

// Cube graph
pub use crate::cube::{
    build_cube, cell_center, check_cube, check_embedding, check_tables, face_across, remap,
    Cell, CellCoord, CellId, Cube, CubeError, Direction, Link, DIRECTION_REMAP,
    FACE_ADJACENCY, FOLDS,
};
// Knight moves and tour search
pub use crate::tour::{
    is_closed, knight_move, knight_moves, move_table, search_tour, solve, verify_tour,
    KnightMove, SearchCfg, SearchOutcome, SearchReport, SearchStats, Tour, TourError,
    TurnRule, KNIGHT_MOVES,
};
