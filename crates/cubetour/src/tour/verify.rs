//! Independent tour checks.

use crate::cube::{CellId, Cube};

use super::knight::knight_moves;
use super::types::{TourError, TurnRule};

/// Check that `cells` is a tour of `cube`: every cell once, starting at `(0,0,0)`,
/// each step one knight move under `rule`.
pub fn verify_tour(cube: &Cube, cells: &[CellId], rule: TurnRule) -> Result<(), TourError> {
    if cells.len() != cube.len() {
        return Err(TourError::WrongLength {
            expected: cube.len(),
            found: cells.len(),
        });
    }
    let mut seen = vec![false; cube.len()];
    for (position, &id) in cells.iter().enumerate() {
        if id.0 >= cube.len() {
            return Err(TourError::UnknownCell { position });
        }
        if position == 0 && id != cube.origin() {
            return Err(TourError::WrongStart {
                found: cube.coord(id),
            });
        }
        if std::mem::replace(&mut seen[id.0], true) {
            return Err(TourError::Repeated {
                cell: cube.coord(id),
                position,
            });
        }
        if position > 0 {
            let prev = cells[position - 1];
            if !knight_moves(cube, prev, rule).contains(&id) {
                return Err(TourError::NotAKnightMove {
                    from: cube.coord(prev),
                    to: cube.coord(id),
                    position,
                });
            }
        }
    }
    Ok(())
}

/// Whether one knight move leads from the last cell back to the first.
pub fn is_closed(cube: &Cube, cells: &[CellId], rule: TurnRule) -> bool {
    match (cells.first(), cells.last()) {
        (Some(&first), Some(&last)) => knight_moves(cube, last, rule).contains(&first),
        _ => false,
    }
}
