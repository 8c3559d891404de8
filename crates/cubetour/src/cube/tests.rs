//! Graph construction checks: totality, reciprocity, and agreement with the 3-D fold.

use super::*;
use nalgebra::Vector3;
use proptest::prelude::*;

fn at(cube: &Cube, face: usize, row: usize, col: usize) -> CellId {
    cube.id(CellCoord::new(face, row, col)).unwrap()
}

#[test]
fn tables_are_consistent() {
    check_tables().unwrap();
}

#[test]
fn zero_width_is_rejected() {
    assert_eq!(
        build_cube(0).unwrap_err(),
        CubeError::InvalidWidth { width: 0 }
    );
}

#[test]
fn cell_count_and_distinct_neighbors() {
    for n in 1..=6 {
        let cube = build_cube(n).unwrap();
        assert_eq!(cube.len(), 6 * n * n);
        assert_eq!(cube.width(), n);
        for id in cube.ids() {
            let mut seen: Vec<CellId> = Direction::ALL
                .iter()
                .map(|&d| cube.neighbor(id, d))
                .collect();
            seen.sort();
            seen.dedup();
            assert_eq!(seen.len(), 4, "n={n} cell={}", cube.coord(id));
            assert!(!seen.contains(&id));
        }
    }
}

#[test]
fn ids_round_trip_through_coords() {
    let cube = build_cube(3).unwrap();
    for id in cube.ids() {
        assert_eq!(cube.id(cube.coord(id)), Some(id));
    }
    assert_eq!(cube.id(CellCoord::new(6, 0, 0)), None);
    assert_eq!(cube.id(CellCoord::new(0, 3, 0)), None);
    assert_eq!(cube.coord(cube.origin()), CellCoord::new(0, 0, 0));
}

#[test]
fn round_trip_returns_to_origin() {
    for n in [2, 3, 4] {
        let cube = build_cube(n).unwrap();
        for id in cube.ids() {
            for dir in Direction::ALL {
                let out = cube.link(id, dir);
                let back = cube.link(out.to, out.heading.opposite());
                assert_eq!(back.to, id, "n={n} {} {dir}", cube.coord(id));
                assert_eq!(back.heading, dir.opposite());
            }
        }
    }
}

#[test]
fn in_face_steps_keep_heading() {
    let cube = build_cube(3).unwrap();
    let centre = at(&cube, 2, 1, 1);
    assert_eq!(cube.link(centre, Direction::Up).to, at(&cube, 2, 0, 1));
    assert_eq!(cube.link(centre, Direction::Down).to, at(&cube, 2, 2, 1));
    assert_eq!(cube.link(centre, Direction::Left).to, at(&cube, 2, 1, 0));
    assert_eq!(cube.link(centre, Direction::Right).to, at(&cube, 2, 1, 2));
    for dir in Direction::ALL {
        assert_eq!(cube.link(centre, dir).heading, dir);
    }
}

#[test]
fn origin_corner_wiring() {
    let cube = build_cube(3).unwrap();
    let o = cube.origin();
    // Top edge of face 0 folds onto the top edge of face 1, reversed.
    assert_eq!(
        cube.link(o, Direction::Up),
        Link {
            to: at(&cube, 1, 0, 2),
            heading: Direction::Down
        }
    );
    // Left edge of face 0 folds onto the top edge of face 2.
    assert_eq!(
        cube.link(o, Direction::Left),
        Link {
            to: at(&cube, 2, 0, 0),
            heading: Direction::Down
        }
    );
    assert_eq!(cube.neighbor(o, Direction::Right), at(&cube, 0, 0, 1));
    assert_eq!(cube.neighbor(o, Direction::Down), at(&cube, 0, 1, 0));
}

#[test]
fn reversed_and_straight_folds() {
    let cube = build_cube(4).unwrap();
    // 3:right -> 5:up runs reversed: row i meets column n-1-i.
    for i in 0..4 {
        let l = cube.link(at(&cube, 3, i, 3), Direction::Right);
        assert_eq!(l.to, at(&cube, 5, 0, 3 - i));
        assert_eq!(l.heading, Direction::Down);
    }
    // 4:right -> 5:left runs straight.
    for i in 0..4 {
        let l = cube.link(at(&cube, 4, i, 3), Direction::Right);
        assert_eq!(l.to, at(&cube, 5, i, 0));
        assert_eq!(l.heading, Direction::Right);
    }
}

#[test]
fn fold_crossings_follow_face_adjacency_and_remap() {
    let cube = build_cube(3).unwrap();
    for id in cube.ids() {
        for dir in Direction::ALL {
            let link = cube.link(id, dir);
            let (from, to) = (cube.face_of(id), cube.face_of(link.to));
            if from != to {
                assert_eq!(face_across(from, dir), to);
                assert_eq!(remap(from, to), link.heading);
            }
        }
    }
}

#[test]
fn single_cell_faces_touch_their_four_neighbors() {
    let cube = build_cube(1).unwrap();
    assert_eq!(cube.len(), 6);
    for face in 0..FACES {
        let id = at(&cube, face, 0, 0);
        for dir in Direction::ALL {
            assert_eq!(cube.face_of(cube.neighbor(id, dir)), face_across(face, dir));
        }
    }
}

#[test]
fn rebuild_is_identical() {
    for n in [1, 2, 5] {
        assert_eq!(build_cube(n).unwrap(), build_cube(n).unwrap());
    }
}

#[test]
fn frames_face_outward() {
    // Cube centre is (1/2, 1/2, 1/2); compare doubled coordinates.
    let centre2 = Vector3::new(1i64, 1, 1);
    for face in 0..FACES {
        let f = face_frame(face);
        let face_centre2 = f.origin * 2 + f.row_axis + f.col_axis;
        assert!(f.normal().dot(&(face_centre2 - centre2)) > 0, "face {face}");
    }
}

#[test]
fn cell_centres_lie_on_the_surface() {
    let cube = build_cube(3).unwrap();
    for id in cube.ids() {
        let c = cube.center(id);
        let on_wall = c.iter().any(|&v| v == 0.0 || v == 3.0);
        let inside = c.iter().all(|&v| (0.0..=3.0).contains(&v));
        assert!(on_wall && inside, "{} at {c:?}", cube.coord(id));
    }
}

#[test]
fn corrupted_link_is_caught() {
    let mut cube = build_cube(3).unwrap();
    let o = cube.origin();
    cube.cells[o.0].links[Direction::Up.index()].to = at(&cube, 1, 0, 0);
    assert!(matches!(
        check_cube(&cube),
        Err(CubeError::Asymmetric { .. })
    ));
    assert!(check_embedding(&cube).is_err());
}

#[test]
fn direction_turns() {
    use Direction::*;
    assert_eq!(Right.turned(1), Down);
    assert_eq!(Up.turned(1), Right);
    assert_eq!(Left.opposite(), Right);
    assert_eq!(Up.quarters_to(Down), 2);
    assert_eq!(Down.quarters_to(Right), 3);
    assert_eq!(Up.offset(), (-1, 0));
}

proptest! {
    #[test]
    fn prop_every_width_builds_a_valid_folded_cube(n in 1usize..=8) {
        let cube = build_cube(n).unwrap();
        prop_assert_eq!(cube.len(), 6 * n * n);
        prop_assert!(check_cube(&cube).is_ok());
        prop_assert!(check_embedding(&cube).is_ok());
    }

    #[test]
    fn prop_round_trip_any_cell(n in 1usize..=8, pick in any::<prop::sample::Index>(), d in 0usize..4) {
        let cube = build_cube(n).unwrap();
        let id = CellId(pick.index(cube.len()));
        let dir = Direction::from_index(d);
        let out = cube.link(id, dir);
        let back = cube.link(out.to, out.heading.opposite());
        prop_assert_eq!(back.to, id);
    }
}
