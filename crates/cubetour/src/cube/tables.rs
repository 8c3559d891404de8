//! Declarative fold tables for the fixed net.
//!
//! ```text
//!     0
//! 1 2 3
//!     4 5
//! ```
//!
//! Faces keep the orientation drawn above; each face's "up" is its own after folding.
//! The three tables overlap; `check_tables` cross-checks them before every build.

use super::types::{CubeError, Direction, FACES};

/// Faces across the four edges of one face.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaceNeighbors {
    pub up: usize,
    pub down: usize,
    pub left: usize,
    pub right: usize,
}

impl FaceNeighbors {
    #[inline]
    pub fn toward(&self, dir: Direction) -> usize {
        match dir {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }
}

const fn adj(up: usize, down: usize, left: usize, right: usize) -> FaceNeighbors {
    FaceNeighbors {
        up,
        down,
        left,
        right,
    }
}

/// Which face lies across each edge once folded.
pub const FACE_ADJACENCY: [FaceNeighbors; FACES] = [
    adj(1, 3, 2, 5),
    adj(0, 4, 5, 2),
    adj(0, 4, 1, 3),
    adj(0, 4, 2, 5),
    adj(3, 1, 2, 5),
    adj(3, 1, 4, 0),
];

/// One side of a seam: a face and the edge of that face.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Side {
    pub face: usize,
    pub edge: Direction,
}

/// A cube edge: glues `a.edge` of `a.face` to `b.edge` of `b.face`.
///
/// Position `i` along `a` meets position `i` along `b`, or `n - 1 - i` when `reversed`.
/// Positions count columns on the up/down edges and rows on the left/right edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fold {
    pub a: Side,
    pub b: Side,
    pub reversed: bool,
}

impl Fold {
    /// Position on `b` matching position `i` on `a`.
    #[inline]
    pub fn partner(&self, i: usize, n: usize) -> usize {
        if self.reversed {
            n - 1 - i
        } else {
            i
        }
    }
}

const fn fold(fa: usize, ea: Direction, fb: usize, eb: Direction, reversed: bool) -> Fold {
    Fold {
        a: Side { face: fa, edge: ea },
        b: Side { face: fb, edge: eb },
        reversed,
    }
}

/// The twelve cube edges of the net, each listed once.
pub const FOLDS: [Fold; 12] = {
    use Direction::{Down, Left, Right, Up};
    [
        fold(3, Up, 0, Down, false),
        fold(3, Down, 4, Up, false),
        fold(3, Left, 2, Right, false),
        fold(3, Right, 5, Up, true),
        fold(0, Up, 1, Up, true),
        fold(0, Left, 2, Up, false),
        fold(0, Right, 5, Right, true),
        fold(4, Down, 1, Down, true),
        fold(4, Left, 2, Down, true),
        fold(4, Right, 5, Left, false),
        fold(2, Left, 1, Right, false),
        fold(1, Left, 5, Down, true),
    ]
};

const R: Option<Direction> = Some(Direction::Right);
const D: Option<Direction> = Some(Direction::Down);
const L: Option<Direction> = Some(Direction::Left);
const U: Option<Direction> = Some(Direction::Up);
const X: Option<Direction> = None;

/// `DIRECTION_REMAP[from][to]`: heading after stepping from face `from` onto face `to`.
///
/// `None` marks pairs that never share an edge (a face and itself, or opposite faces).
pub const DIRECTION_REMAP: [[Option<Direction>; FACES]; FACES] = [
    [X, D, D, D, X, L],
    [D, X, R, X, U, U],
    [R, L, X, R, R, X],
    [U, X, L, X, D, D],
    [X, U, U, U, X, R],
    [L, R, X, L, L, X],
];

#[inline]
pub fn face_across(face: usize, edge: Direction) -> usize {
    FACE_ADJACENCY[face].toward(edge)
}

#[inline]
pub fn try_remap(from: usize, to: usize) -> Option<Direction> {
    DIRECTION_REMAP.get(from)?.get(to).copied().flatten()
}

/// Heading after crossing from `from` onto `to`.
///
/// Panics if the faces are not adjacent: callers only ask after observing a face
/// change along a validated link.
#[inline]
pub fn remap(from: usize, to: usize) -> Direction {
    match try_remap(from, to) {
        Some(d) => d,
        None => panic!("no direction remap for non-adjacent faces {from} -> {to}"),
    }
}

/// Verify the three tables are total and agree with each other.
pub fn check_tables() -> Result<(), CubeError> {
    for (face, nb) in FACE_ADJACENCY.iter().enumerate() {
        let mut seen = [false; FACES];
        for dir in Direction::ALL {
            let other = nb.toward(dir);
            if other >= FACES || other == face {
                return Err(CubeError::tables(format!(
                    "face {face} {dir} points at invalid face {other}"
                )));
            }
            if std::mem::replace(&mut seen[other], true) {
                return Err(CubeError::tables(format!(
                    "face {face} lists face {other} twice"
                )));
            }
        }
    }

    let mut sides = [[false; 4]; FACES];
    let mut pairs = [[false; FACES]; FACES];
    for f in FOLDS.iter() {
        for (s, t) in [(f.a, f.b), (f.b, f.a)] {
            if std::mem::replace(&mut sides[s.face][s.edge.index()], true) {
                return Err(CubeError::tables(format!(
                    "edge {} of face {} folded twice",
                    s.edge, s.face
                )));
            }
            if face_across(s.face, s.edge) != t.face {
                return Err(CubeError::tables(format!(
                    "fold {}:{} -> {} disagrees with face adjacency ({})",
                    s.face,
                    s.edge,
                    t.face,
                    face_across(s.face, s.edge)
                )));
            }
            if std::mem::replace(&mut pairs[s.face][t.face], true) {
                return Err(CubeError::tables(format!(
                    "faces {} and {} share more than one edge",
                    s.face, t.face
                )));
            }
            // Entering `t` through its edge means heading away from that edge.
            if try_remap(s.face, t.face) != Some(t.edge.opposite()) {
                return Err(CubeError::tables(format!(
                    "remap {} -> {} should be {}",
                    s.face,
                    t.face,
                    t.edge.opposite()
                )));
            }
        }
    }

    for from in 0..FACES {
        for to in 0..FACES {
            if try_remap(from, to).is_some() != pairs[from][to] {
                return Err(CubeError::tables(format!(
                    "remap entry {from} -> {to} does not match the folds"
                )));
            }
        }
    }
    Ok(())
}
