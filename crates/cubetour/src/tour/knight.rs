//! Knight-move resolution across folded face boundaries.

use crate::cube::{remap, CellId, Cube, Direction};

use super::types::{KnightMove, TurnRule, KNIGHT_MOVES};

/// One grid step: the cell reached and the heading to keep travelling with.
///
/// The heading changes only when the step lands on another face, and then comes
/// from the direction-remap table.
#[inline]
pub fn step(cube: &Cube, from: CellId, dir: Direction) -> (CellId, Direction) {
    let link = cube.link(from, dir);
    let (a, b) = (cube.face_of(from), cube.face_of(link.to));
    let heading = if a != b { remap(a, b) } else { dir };
    debug_assert_eq!(heading, link.heading, "remap table disagrees with wiring");
    (link.to, heading)
}

/// Destination of `mv` from `start`.
pub fn knight_move(cube: &Cube, start: CellId, mv: KnightMove, rule: TurnRule) -> CellId {
    let mut cur = start;
    let mut dir = mv.first;
    for _ in 0..2 {
        (cur, dir) = step(cube, cur, dir);
    }
    let second = match rule {
        TurnRule::AsGiven => mv.second,
        TurnRule::FollowHeading => mv.second.turned(mv.first.quarters_to(dir)),
    };
    let (end, _) = step(cube, cur, second);
    end
}

/// All eight destinations from `start`, in `KNIGHT_MOVES` order. May repeat cells
/// on small cubes.
pub fn knight_moves(cube: &Cube, start: CellId, rule: TurnRule) -> [CellId; 8] {
    KNIGHT_MOVES.map(|mv| knight_move(cube, start, mv, rule))
}

/// `knight_moves` for every cell, indexed by `CellId`.
pub fn move_table(cube: &Cube, rule: TurnRule) -> Vec<[CellId; 8]> {
    cube.ids().map(|id| knight_moves(cube, id, rule)).collect()
}
