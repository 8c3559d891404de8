//! Knight's tours on the surface of a folded N×N×N cube.
//!
//! The cube is folded from a fixed six-square net; `cube` builds the cell graph with
//! its cross-fold relations and `tour` resolves knight moves on it and searches for
//! a tour visiting every cell once.
//!
//! API Policy
//! - `api` is the curated surface for the CLI, benches, and examples. Module paths
//!   may move; prefer the re-exports.

pub mod api;
pub mod cube;
pub mod tour;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cube::{build_cube, CellCoord, CellId, Cube, CubeError, Direction};
pub use tour::{search_tour, solve, SearchCfg, SearchOutcome, SearchReport, TurnRule};
