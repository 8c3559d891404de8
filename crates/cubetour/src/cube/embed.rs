//! 3-D placement of the six face frames on the cube `[0, n]^3`.
//!
//! Used to check the fold tables against the physical fold: every relation must join
//! two cells whose centres sit half a unit either side of a shared cell boundary.
//! Arithmetic runs on doubled integer coordinates so the checks are exact.

use nalgebra::Vector3;

use super::types::{CellCoord, CellId, Cube, CubeError, Direction, FACES};

/// Frame of one face on the unit cube: top-left corner, then the unit vectors
/// along increasing row and increasing column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaceFrame {
    pub origin: Vector3<i64>,
    pub row_axis: Vector3<i64>,
    pub col_axis: Vector3<i64>,
}

/// Raw frames as `[origin, row_axis, col_axis]`.
/// x to the right, y away from the viewer, z up; face 3 is the front.
const FRAMES: [[[i64; 3]; 3]; FACES] = [
    [[0, 1, 1], [0, -1, 0], [1, 0, 0]],
    [[1, 1, 1], [0, 0, -1], [-1, 0, 0]],
    [[0, 1, 1], [0, 0, -1], [0, -1, 0]],
    [[0, 0, 1], [0, 0, -1], [1, 0, 0]],
    [[0, 0, 0], [0, 1, 0], [1, 0, 0]],
    [[1, 0, 0], [0, 1, 0], [0, 0, 1]],
];

/// Frame of `face` on the unit cube.
pub fn face_frame(face: usize) -> FaceFrame {
    let [o, r, c] = FRAMES[face];
    FaceFrame {
        origin: Vector3::from(o),
        row_axis: Vector3::from(r),
        col_axis: Vector3::from(c),
    }
}

impl FaceFrame {
    /// Unit vector of travel in `dir` on this face.
    pub fn axis(&self, dir: Direction) -> Vector3<i64> {
        match dir {
            Direction::Right => self.col_axis,
            Direction::Left => -self.col_axis,
            Direction::Down => self.row_axis,
            Direction::Up => -self.row_axis,
        }
    }

    /// Outward normal when the frame is right-handed with respect to the cube.
    pub fn normal(&self) -> Vector3<i64> {
        self.row_axis.cross(&self.col_axis)
    }
}

/// Twice the centre of a cell on a cube of width `n`.
fn doubled_center(n: usize, c: CellCoord) -> Vector3<i64> {
    let f = face_frame(c.face);
    let (n, r, k) = (n as i64, c.row as i64, c.col as i64);
    f.origin * (2 * n) + f.row_axis * (2 * r + 1) + f.col_axis * (2 * k + 1)
}

/// Centre of a cell on a cube of width `n`.
pub fn cell_center(n: usize, c: CellCoord) -> Vector3<f64> {
    doubled_center(n, c).map(|v| v as f64 * 0.5)
}

/// Check every relation of `cube` against the 3-D fold, including arrival headings.
pub fn check_embedding(cube: &Cube) -> Result<(), CubeError> {
    let n = cube.width();
    for id in cube.ids() {
        let from = cube.coord(id);
        let here = doubled_center(n, from);
        for dir in Direction::ALL {
            let link = cube.link(id, dir);
            let to = cube.coord(link.to);
            // Half a step reaches the shared boundary; half a step along the arrival
            // heading must land exactly on the neighbor's centre.
            let boundary = here + face_frame(from.face).axis(dir);
            let expected = boundary + face_frame(to.face).axis(link.heading);
            if expected != doubled_center(n, to) {
                return Err(CubeError::EmbeddingMismatch { cell: from, dir });
            }
        }
    }
    Ok(())
}

impl Cube {
    /// See `check_embedding`.
    pub fn verify_embedding(&self) -> Result<(), CubeError> {
        check_embedding(self)
    }

    /// Centre of `id` in cube coordinates.
    pub fn center(&self, id: CellId) -> Vector3<f64> {
        cell_center(self.width, self.coord(id))
    }
}
