//! Data types for the folded cube graph.
//!
//! Kept small and explicit to make `tables`, `build` and the tour modules easy to read.

use std::fmt;

/// Number of faces on the cube.
pub const FACES: usize = 6;

/// Travel direction inside one face's local frame.
///
/// Rows grow downward and columns grow to the right. The discriminants run clockwise,
/// so a quarter turn is `+1 mod 4`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    Right = 0,
    Down = 1,
    Left = 2,
    Up = 3,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Down,
        Direction::Left,
        Direction::Up,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn from_index(i: usize) -> Self {
        Self::ALL[i % 4]
    }

    #[inline]
    pub fn opposite(self) -> Self {
        self.turned(2)
    }

    /// Rotate clockwise by `quarters` quarter turns.
    #[inline]
    pub fn turned(self, quarters: usize) -> Self {
        Self::from_index(self.index() + quarters)
    }

    /// Clockwise quarter turns taking `self` to `other`.
    #[inline]
    pub fn quarters_to(self, other: Direction) -> usize {
        (other.index() + 4 - self.index()) % 4
    }

    /// Grid offset `(d_row, d_col)` of one step in this direction.
    #[inline]
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Up => (-1, 0),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Direction::Right => "right",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Up => "up",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Dense cell index: `(face * n + row) * n + col`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellId(pub usize);

/// Printable cell identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellCoord {
    pub face: usize,
    pub row: usize,
    pub col: usize,
}

impl CellCoord {
    #[inline]
    pub fn new(face: usize, row: usize, col: usize) -> Self {
        Self { face, row, col }
    }
}

impl fmt::Display for CellCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{},{}]", self.face, self.row, self.col)
    }
}

/// One outgoing neighbor relation.
///
/// `heading` is the direction of travel after arriving in `to`, expressed in the
/// frame of `to`'s face. It equals the departure direction unless the step folds
/// over a cube edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Link {
    pub to: CellId,
    pub heading: Direction,
}

/// Cell node: identity plus its four relations, indexed by `Direction::index`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pub coord: CellCoord,
    pub links: [Link; 4],
}

impl Cell {
    #[inline]
    pub fn link(&self, dir: Direction) -> Link {
        self.links[dir.index()]
    }
}

/// The folded cube: `6 * n * n` cells with complete, reciprocal relations.
///
/// Only constructed through `build_cube`, so every relation is present and validated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cube {
    pub(crate) width: usize,
    pub(crate) cells: Vec<Cell>,
}

impl Cube {
    /// Face width `n`.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Total number of cells, `6 * n * n`.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline]
    pub fn cell(&self, id: CellId) -> &Cell {
        &self.cells[id.0]
    }

    #[inline]
    pub fn coord(&self, id: CellId) -> CellCoord {
        self.cells[id.0].coord
    }

    #[inline]
    pub fn face_of(&self, id: CellId) -> usize {
        id.0 / (self.width * self.width)
    }

    /// Id of `(face, row, col)`, or `None` when out of range.
    pub fn id(&self, coord: CellCoord) -> Option<CellId> {
        let n = self.width;
        if coord.face >= FACES || coord.row >= n || coord.col >= n {
            return None;
        }
        Some(CellId((coord.face * n + coord.row) * n + coord.col))
    }

    /// Cell `(0, 0, 0)`, where every tour starts.
    #[inline]
    pub fn origin(&self) -> CellId {
        CellId(0)
    }

    #[inline]
    pub fn neighbor(&self, id: CellId, dir: Direction) -> CellId {
        self.cells[id.0].link(dir).to
    }

    #[inline]
    pub fn link(&self, id: CellId, dir: Direction) -> Link {
        self.cells[id.0].link(dir)
    }

    pub fn ids(&self) -> impl Iterator<Item = CellId> + '_ {
        (0..self.cells.len()).map(CellId)
    }
}

/// Errors raised while building or checking a cube.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CubeError {
    InvalidWidth { width: usize },
    InconsistentTables { reason: String },
    DoubleWired { cell: CellCoord, dir: Direction },
    MissingLink { cell: CellCoord, dir: Direction },
    RepeatedNeighbor { cell: CellCoord },
    Asymmetric { cell: CellCoord, dir: Direction },
    EmbeddingMismatch { cell: CellCoord, dir: Direction },
}

impl CubeError {
    pub(crate) fn tables(reason: impl Into<String>) -> Self {
        Self::InconsistentTables {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for CubeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWidth { width } => write!(f, "face width must be >= 1 (got {width})"),
            Self::InconsistentTables { reason } => write!(f, "inconsistent fold tables: {reason}"),
            Self::DoubleWired { cell, dir } => write!(f, "{cell} wired twice towards {dir}"),
            Self::MissingLink { cell, dir } => write!(f, "{cell} has no neighbor towards {dir}"),
            Self::RepeatedNeighbor { cell } => write!(f, "{cell} has a repeated neighbor"),
            Self::Asymmetric { cell, dir } => {
                write!(f, "relation {cell} -> {dir} has no matching way back")
            }
            Self::EmbeddingMismatch { cell, dir } => write!(
                f,
                "relation {cell} -> {dir} does not join adjacent cells on the folded cube"
            ),
        }
    }
}

impl std::error::Error for CubeError {}
