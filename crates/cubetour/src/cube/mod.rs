//! Folded cube graph: six N×N faces glued along the twelve edges of a fixed net.
//!
//! Purpose
//! - Build the cell graph once, with every relation written by an undirected join,
//!   so reciprocity holds by construction rather than by two passes agreeing.
//! - Keep the face adjacency, fold, and direction-remap tables declarative and
//!   cross-checked before any cell is wired.
//!
//! Layout
//! - `types.rs` (cells, directions, errors), `tables.rs` (net tables),
//!   `build.rs` (wiring and validation), `embed.rs` (3-D placement used to check
//!   the folds against the physical cube).

mod build;
mod embed;
mod tables;
mod types;

pub use build::{build_cube, check_cube};
pub use embed::{cell_center, check_embedding, face_frame, FaceFrame};
pub use tables::{
    check_tables, face_across, remap, try_remap, FaceNeighbors, Fold, Side, DIRECTION_REMAP,
    FACE_ADJACENCY, FOLDS,
};
pub use types::{Cell, CellCoord, CellId, Cube, CubeError, Direction, Link, FACES};

#[cfg(test)]
mod tests;
