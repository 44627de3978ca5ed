//! Shape tests - canonical matrices and clockwise bounding-box rotation

use blockfall::{Shape, ShapeKind};

// ============== Canonical Shape Tests ==============

#[test]
fn test_i_canonical_shape() {
    let i = Shape::canonical(ShapeKind::I);
    assert_eq!((i.rows(), i.cols()), (1, 4));
    assert_eq!(i.offsets(), [(0, 0), (1, 0), (2, 0), (3, 0)]);
}

#[test]
fn test_o_canonical_shape() {
    let o = Shape::canonical(ShapeKind::O);
    assert_eq!((o.rows(), o.cols()), (2, 2));
    assert_eq!(o.offsets(), [(0, 0), (1, 0), (0, 1), (1, 1)]);
}

#[test]
fn test_t_canonical_shape() {
    let t = Shape::canonical(ShapeKind::T);
    assert_eq!((t.rows(), t.cols()), (2, 3));
    assert_eq!(t.offsets(), [(0, 0), (1, 0), (2, 0), (1, 1)]);
}

#[test]
fn test_l_canonical_shape() {
    let l = Shape::canonical(ShapeKind::L);
    assert_eq!(l.offsets(), [(0, 0), (1, 0), (2, 0), (0, 1)]);
}

#[test]
fn test_j_canonical_shape() {
    let j = Shape::canonical(ShapeKind::J);
    assert_eq!(j.offsets(), [(0, 0), (1, 0), (2, 0), (2, 1)]);
}

#[test]
fn test_s_canonical_shape() {
    let s = Shape::canonical(ShapeKind::S);
    assert_eq!(s.offsets(), [(1, 0), (2, 0), (0, 1), (1, 1)]);
}

#[test]
fn test_z_canonical_shape() {
    let z = Shape::canonical(ShapeKind::Z);
    assert_eq!(z.offsets(), [(0, 0), (1, 0), (1, 1), (2, 1)]);
}

// ============== Rotation Tests ==============

#[test]
fn test_t_rotation_cycle() {
    let t = Shape::canonical(ShapeKind::T);

    let east = t.rotated_cw();
    assert_eq!((east.rows(), east.cols()), (3, 2));
    assert_eq!(east.offsets(), [(1, 0), (0, 1), (1, 1), (1, 2)]);

    let south = east.rotated_cw();
    assert_eq!(south.offsets(), [(1, 0), (0, 1), (1, 1), (2, 1)]);

    let west = south.rotated_cw();
    assert_eq!(west.offsets(), [(0, 0), (0, 1), (1, 1), (0, 2)]);

    assert_eq!(west.rotated_cw(), t);
}

#[test]
fn test_i_has_exactly_two_orientations() {
    let horizontal = Shape::canonical(ShapeKind::I);
    let vertical = horizontal.rotated_cw();

    assert_eq!((vertical.rows(), vertical.cols()), (4, 1));
    assert_eq!(vertical.offsets(), [(0, 0), (0, 1), (0, 2), (0, 3)]);
    assert_eq!(vertical.rotated_cw(), horizontal);
}

#[test]
fn test_o_rotation_is_identity() {
    let o = Shape::canonical(ShapeKind::O);
    assert_eq!(o.rotated_cw(), o);
}

#[test]
fn test_s_and_z_single_rotations() {
    let s = Shape::canonical(ShapeKind::S).rotated_cw();
    assert_eq!(s.offsets(), [(0, 0), (0, 1), (1, 1), (1, 2)]);

    let z = Shape::canonical(ShapeKind::Z).rotated_cw();
    assert_eq!(z.offsets(), [(1, 0), (0, 1), (1, 1), (0, 2)]);
}

#[test]
fn test_l_and_j_single_rotations() {
    let l = Shape::canonical(ShapeKind::L).rotated_cw();
    assert_eq!(l.offsets(), [(0, 0), (1, 0), (1, 1), (1, 2)]);

    let j = Shape::canonical(ShapeKind::J).rotated_cw();
    assert_eq!(j.offsets(), [(1, 0), (1, 1), (0, 2), (1, 2)]);
}

#[test]
fn test_four_rotations_restore_every_shape() {
    for kind in ShapeKind::ALL {
        let canonical = Shape::canonical(kind);
        let mut shape = canonical;
        for _ in 0..4 {
            shape = shape.rotated_cw();
        }
        assert_eq!(shape, canonical, "{:?} did not return to canonical", kind);
    }
}

#[test]
fn test_rotation_swaps_bounding_box() {
    for kind in ShapeKind::ALL {
        let mut shape = Shape::canonical(kind);
        for _ in 0..4 {
            let rotated = shape.rotated_cw();
            assert_eq!(rotated.rows(), shape.cols());
            assert_eq!(rotated.cols(), shape.rows());
            shape = rotated;
        }
    }
}
