//! Integration tests for affine transform construction and composition.
//!
//! Each scenario is checked under both vector conventions: the matrices differ
//! by a transpose, the transformed vectors must not.

use approx::assert_abs_diff_eq;
use linmat::prelude::*;
use linmat::{LinAlgError, rotate, scale, transform, translate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::{FRAC_PI_2, PI};

const CONVENTIONS: [Convention; 2] = [Convention::RowVector, Convention::ColumnVector];

fn random_vec3(rng: &mut StdRng) -> Vec3<f64> {
    Vec3::new(rng.gen_range(-5.0..5.0), rng.gen_range(-5.0..5.0), rng.gen_range(-5.0..5.0))
}

/// Half turn about +z maps +x to -x.
#[test]
fn half_turn_about_z() {
    for conv in CONVENTIONS {
        let m = rotate(PI, Vec3::new(0.0, 0.0, 1.0), conv).unwrap();
        let v = transform(Vec4::new(1.0, 0.0, 0.0, 0.0), &m, conv);
        assert_abs_diff_eq!(v.x, -1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(v.y, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(v.z, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(v.w, 0.0, epsilon = 1e-12);
    }
}

/// Row-vector translation of the origin point.
#[test]
fn row_vector_translation_of_origin() {
    let m = translate(1.0_f64, 2.0, 3.0, Convention::RowVector);
    let p = Vec4::new(0.0, 0.0, 0.0, 1.0) * m;
    assert_eq!(p.to_array(), [1.0, 2.0, 3.0, 1.0]);
    assert_eq!((m * Vec4::new(0.0, 0.0, 0.0, 1.0)).to_array(), [0.0, 0.0, 0.0, 1.0]);
}

/// Random rotations preserve length and compose with their inverse to identity.
#[test]
fn rotations_are_rigid() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..100 {
        let axis = random_vec3(&mut rng);
        let angle = rng.gen_range(-PI..PI);
        let v = random_vec3(&mut rng);
        for conv in CONVENTIONS {
            let m = rotate(angle, axis, conv).unwrap();
            let moved = linmat::transform_direction(v, &m, conv);
            assert_abs_diff_eq!(moved.length(), v.length(), epsilon = 1e-9);

            let inv = m.inverse();
            assert!(inv.success);
            assert_eq!(inv.value, m.transpose());
        }
    }
}

/// Rotating about an axis leaves the axis itself fixed.
#[test]
fn rotation_axis_is_fixed() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..50 {
        let axis = random_vec3(&mut rng);
        for conv in CONVENTIONS {
            let m = rotate(rng.gen_range(0.0..6.0), axis, conv).unwrap();
            assert_eq!(linmat::transform_direction(axis, &m, conv), axis);
        }
    }
}

/// Building blocks composed by hand match `Affine` composition.
#[test]
fn manual_and_affine_composition_agree() {
    let mut rng = StdRng::seed_from_u64(9);
    for _ in 0..25 {
        let offset = random_vec3(&mut rng);
        let factors = Vec3::new(rng.gen_range(0.5..2.0), rng.gen_range(0.5..2.0), rng.gen_range(0.5..2.0));
        let angle = rng.gen_range(-PI..PI);
        let p = random_vec3(&mut rng);

        let row_matrix = scale(factors.x, factors.y, factors.z)
            * rotate(angle, Vec3::new(0.0, 1.0, 0.0), Convention::RowVector).unwrap()
            * translate(offset.x, offset.y, offset.z, Convention::RowVector);
        let col_matrix = translate(offset.x, offset.y, offset.z, Convention::ColumnVector)
            * rotate(angle, Vec3::new(0.0, 1.0, 0.0), Convention::ColumnVector).unwrap()
            * scale(factors.x, factors.y, factors.z);
        assert_eq!(row_matrix.transpose(), col_matrix);

        for conv in CONVENTIONS {
            let affine = Affine::scaling(factors, conv)
                .then(&Affine::rotation(angle, Vec3::new(0.0, 1.0, 0.0), conv).unwrap())
                .unwrap()
                .then(&Affine::translation(offset, conv))
                .unwrap();
            let expected = linmat::transform_point(p, &row_matrix, Convention::RowVector);
            assert_eq!(affine.apply_point(p), expected);
        }
    }
}

/// Affine inverses undo the forward transform for points and directions.
#[test]
fn affine_inverse_round_trip() {
    let conv = Convention::RowVector;
    let t = Affine::rotation(FRAC_PI_2, Vec3::new(1.0, 1.0, 0.0), conv)
        .unwrap()
        .then(&Affine::translation(Vec3::new(-3.0, 0.5, 8.0), conv))
        .unwrap();
    let inv = t.inverse().unwrap();
    let p = Vec3::new(1.0, 2.0, 3.0);
    assert_eq!(inv.apply_point(t.apply_point(p)), p);
    assert_eq!(inv.apply_direction(t.apply_direction(p)), p);
}

/// Batch application matches applying one vector at a time.
#[test]
fn batch_matches_single_application() {
    let mut rng = StdRng::seed_from_u64(17);
    let t = Affine::rotation(0.7, Vec3::new(0.2, -1.0, 0.4), Convention::ColumnVector)
        .unwrap()
        .then(&Affine::translation(Vec3::new(1.0, 2.0, 3.0), Convention::ColumnVector))
        .unwrap();
    let inputs: Vec<Vec4<f64>> = (0..1000)
        .map(|_| Vec4::from_point(random_vec3(&mut rng)))
        .collect();
    let mut batch = inputs.clone();
    t.apply_batch(&mut batch);
    for (before, after) in inputs.iter().zip(&batch) {
        assert_eq!(t.apply(*before), *after);
    }
}

/// Degenerate axes and mixed conventions are reported as errors.
#[test]
fn invalid_inputs_are_errors() {
    assert!(matches!(
        rotate(1.0_f32, Vec3::ZERO, Convention::ColumnVector),
        Err(LinAlgError::DegenerateInput(_))
    ));
    let a = Affine::<f32>::identity(Convention::RowVector);
    let b = Affine::<f32>::identity(Convention::ColumnVector);
    assert_eq!(a.then(&b), Err(LinAlgError::ConventionMismatch));
}
