//! Graph construction: in-face grid joins, then one join per fold position.

use super::tables::{check_tables, try_remap, Fold, Side, FOLDS};
use super::types::{Cell, CellCoord, CellId, Cube, CubeError, Direction, Link, FACES};

/// Build the folded cube graph for face width `width`.
///
/// Every relation is written by `Wiring::join`, which sets both endpoints at once;
/// the finished graph is then checked for totality, distinct neighbors, and reciprocity.
pub fn build_cube(width: usize) -> Result<Cube, CubeError> {
    if width == 0 {
        return Err(CubeError::InvalidWidth { width });
    }
    check_tables()?;
    let n = width;
    let mut wiring = Wiring::new(n);

    // Grid neighbors on the same face. Covers interior cells entirely and the
    // inward / along-edge relations of edge cells.
    for face in 0..FACES {
        for row in 0..n {
            for col in 0..n {
                let here = cell_id(n, face, row, col);
                if col + 1 < n {
                    let right = cell_id(n, face, row, col + 1);
                    wiring.join(here, Direction::Right, right, Direction::Left)?;
                }
                if row + 1 < n {
                    let below = cell_id(n, face, row + 1, col);
                    wiring.join(here, Direction::Down, below, Direction::Up)?;
                }
            }
        }
    }
    let grid_joins = wiring.joins;

    // Cube edges. Corner cells pick up one relation from each of their two folds.
    for f in FOLDS.iter() {
        join_fold(&mut wiring, f)?;
    }
    let fold_joins = wiring.joins - grid_joins;

    let cube = wiring.finish()?;
    check_cube(&cube)?;
    tracing::debug!(
        width = n,
        cells = cube.len(),
        grid_joins,
        fold_joins,
        "built cube graph"
    );
    Ok(cube)
}

/// Check totality, distinct neighbors, reciprocity, and remap agreement of a cube.
pub fn check_cube(cube: &Cube) -> Result<(), CubeError> {
    for id in cube.ids() {
        let cell = cube.cell(id);
        let mut targets = cell.links.map(|l| l.to);
        targets.sort_unstable();
        if targets.windows(2).any(|w| w[0] == w[1]) || targets.contains(&id) {
            return Err(CubeError::RepeatedNeighbor { cell: cell.coord });
        }
        for dir in Direction::ALL {
            let link = cell.link(dir);
            let back = cube.link(link.to, link.heading.opposite());
            if back.to != id || back.heading != dir.opposite() {
                return Err(CubeError::Asymmetric {
                    cell: cell.coord,
                    dir,
                });
            }
            let (from_face, to_face) = (cube.face_of(id), cube.face_of(link.to));
            let expected = if from_face == to_face {
                Some(dir)
            } else {
                try_remap(from_face, to_face)
            };
            let Some(expected) = expected else {
                return Err(CubeError::tables(format!(
                    "{} -> {dir} crosses between faces {from_face} and {to_face}, which share no edge",
                    cell.coord
                )));
            };
            if link.heading != expected {
                return Err(CubeError::tables(format!(
                    "{} -> {dir} arrives heading {} but the remap table says {expected}",
                    cell.coord, link.heading
                )));
            }
        }
    }
    Ok(())
}

fn join_fold(wiring: &mut Wiring, f: &Fold) -> Result<(), CubeError> {
    let n = wiring.n;
    for i in 0..n {
        let a = edge_cell(n, f.a, i);
        let b = edge_cell(n, f.b, f.partner(i, n));
        wiring.join(a, f.a.edge, b, f.b.edge)?;
    }
    Ok(())
}

#[inline]
fn cell_id(n: usize, face: usize, row: usize, col: usize) -> CellId {
    CellId((face * n + row) * n + col)
}

/// Cell at position `i` along the given edge of a face.
fn edge_cell(n: usize, side: Side, i: usize) -> CellId {
    let last = n - 1;
    let (row, col) = match side.edge {
        Direction::Up => (0, i),
        Direction::Down => (last, i),
        Direction::Left => (i, 0),
        Direction::Right => (i, last),
    };
    cell_id(n, side.face, row, col)
}

/// Relations under construction.
struct Wiring {
    n: usize,
    coords: Vec<CellCoord>,
    slots: Vec<[Option<Link>; 4]>,
    joins: usize,
}

impl Wiring {
    fn new(n: usize) -> Self {
        let mut coords = Vec::with_capacity(FACES * n * n);
        for face in 0..FACES {
            for row in 0..n {
                for col in 0..n {
                    coords.push(CellCoord::new(face, row, col));
                }
            }
        }
        let slots = vec![[None; 4]; coords.len()];
        Self {
            n,
            coords,
            slots,
            joins: 0,
        }
    }

    /// Join `a` (leaving towards `exit_a`) with `b` (leaving towards `exit_b`).
    ///
    /// Arriving in `b` heads away from `exit_b`, and vice versa.
    fn join(
        &mut self,
        a: CellId,
        exit_a: Direction,
        b: CellId,
        exit_b: Direction,
    ) -> Result<(), CubeError> {
        self.set(
            a,
            exit_a,
            Link {
                to: b,
                heading: exit_b.opposite(),
            },
        )?;
        self.set(
            b,
            exit_b,
            Link {
                to: a,
                heading: exit_a.opposite(),
            },
        )?;
        self.joins += 1;
        Ok(())
    }

    fn set(&mut self, id: CellId, dir: Direction, link: Link) -> Result<(), CubeError> {
        let slot = &mut self.slots[id.0][dir.index()];
        if slot.is_some() {
            return Err(CubeError::DoubleWired {
                cell: self.coords[id.0],
                dir,
            });
        }
        *slot = Some(link);
        Ok(())
    }

    fn finish(self) -> Result<Cube, CubeError> {
        let mut cells = Vec::with_capacity(self.coords.len());
        for (coord, slots) in self.coords.into_iter().zip(self.slots) {
            let mut links = [Link {
                to: CellId(0),
                heading: Direction::Right,
            }; 4];
            for dir in Direction::ALL {
                links[dir.index()] = slots[dir.index()]
                    .ok_or(CubeError::MissingLink { cell: coord, dir })?;
            }
            cells.push(Cell { coord, links });
        }
        Ok(Cube {
            width: self.n,
            cells,
        })
    }
}
