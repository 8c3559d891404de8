//! Data types for knight moves, search configuration, and results.

use std::fmt;

use crate::cube::{CellCoord, CellId, Cube, Direction};

/// How the short leg of a knight move is oriented after the long leg.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TurnRule {
    /// Take `second` literally in the frame of the cell reached by the long leg.
    #[default]
    AsGiven,
    /// Rotate `second` by the quarter turns the long leg picked up while folding,
    /// so the short leg stays perpendicular to the arrival heading.
    FollowHeading,
}

impl TurnRule {
    pub fn name(self) -> &'static str {
        match self {
            TurnRule::AsGiven => "as-given",
            TurnRule::FollowHeading => "follow-heading",
        }
    }
}

impl fmt::Display for TurnRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Two steps along `first`, then one along `second`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KnightMove {
    pub first: Direction,
    pub second: Direction,
}

const fn km(first: Direction, second: Direction) -> KnightMove {
    KnightMove { first, second }
}

/// The eight knight moves, in the order the search expands them.
pub const KNIGHT_MOVES: [KnightMove; 8] = {
    use Direction::{Down, Left, Right, Up};
    [
        km(Up, Right),
        km(Up, Left),
        km(Down, Right),
        km(Down, Left),
        km(Right, Up),
        km(Right, Down),
        km(Left, Up),
        km(Left, Down),
    ]
};

/// Search configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchCfg {
    pub turn_rule: TurnRule,
    /// Stop after popping this many branches. `None` searches to exhaustion.
    pub max_branches: Option<u64>,
    /// Shuffle the move order of every expansion with this seed. `None` keeps
    /// `KNIGHT_MOVES` order, which makes the result canonical.
    pub shuffle_seed: Option<u64>,
}

/// Counters collected during one search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Branches popped and expanded.
    pub expanded: u64,
    /// Branches pushed, including the root.
    pub pushed: u64,
    /// Largest stack size seen.
    pub max_stack: usize,
}

/// A complete tour, in visiting order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tour {
    pub cells: Vec<CellId>,
}

impl Tour {
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn coords<'a>(&'a self, cube: &'a Cube) -> impl Iterator<Item = CellCoord> + 'a {
        self.cells.iter().map(move |&id| cube.coord(id))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    Found(Tour),
    /// The stack emptied: no tour exists from the origin under this configuration.
    Exhausted,
    /// `max_branches` was reached first.
    BudgetReached,
}

impl SearchOutcome {
    pub fn tour(&self) -> Option<&Tour> {
        match self {
            SearchOutcome::Found(t) => Some(t),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SearchOutcome::Found(_) => "found",
            SearchOutcome::Exhausted => "exhausted",
            SearchOutcome::BudgetReached => "budget_reached",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchReport {
    pub outcome: SearchOutcome,
    pub stats: SearchStats,
}

/// One partial path of the backtracking search. Each branch owns its path and
/// visited flags; children get copies.
#[derive(Clone, Debug)]
pub struct Branch {
    pub cell: CellId,
    pub path: Vec<CellId>,
    pub visited: Vec<bool>,
}

impl Branch {
    pub fn root(start: CellId, cells: usize) -> Self {
        Self {
            cell: start,
            path: Vec::with_capacity(cells),
            visited: vec![false; cells],
        }
    }

    /// Record `cell` as the newest step of this path.
    pub fn enter(&mut self) {
        self.path.push(self.cell);
        self.visited[self.cell.0] = true;
    }

    pub fn child(&self, next: CellId) -> Self {
        Self {
            cell: next,
            path: self.path.clone(),
            visited: self.visited.clone(),
        }
    }
}

/// Reasons a sequence of cells is not a tour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TourError {
    WrongLength { expected: usize, found: usize },
    WrongStart { found: CellCoord },
    UnknownCell { position: usize },
    Repeated { cell: CellCoord, position: usize },
    NotAKnightMove { from: CellCoord, to: CellCoord, position: usize },
}

impl fmt::Display for TourError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength { expected, found } => {
                write!(f, "tour has {found} cells, expected {expected}")
            }
            Self::WrongStart { found } => write!(f, "tour starts at {found}, not [0,0,0]"),
            Self::UnknownCell { position } => write!(f, "step {position} is not a cell of this cube"),
            Self::Repeated { cell, position } => write!(f, "{cell} visited again at step {position}"),
            Self::NotAKnightMove { from, to, position } => {
                write!(f, "step {position}: {from} -> {to} is not a knight move")
            }
        }
    }
}

impl std::error::Error for TourError {}
