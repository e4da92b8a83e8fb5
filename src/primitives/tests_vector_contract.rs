// =========================================================================
// FALSIFY-VE: Vector primitives contract (matriz primitives)
//
// Each test tries to falsify one clause of the Vector contract: the
// element-wise algebra over the single column, deep-copy independence, and
// the matrix-level delegation.
// =========================================================================

use super::*;

/// FALSIFY-VE-001: Addition is commutative: u + v = v + u
#[test]
fn falsify_ve_001_add_commutative() {
    let u = Vector::from_slice(&[1.0, -2.0, 3.5]).expect("non-empty");
    let v = Vector::from_slice(&[4.0, 0.25, -6.0]).expect("non-empty");

    let uv = u.add(&v).expect("same length");
    let vu = v.add(&u).expect("same length");

    assert_eq!(uv, vu, "FALSIFIED VE-001: u+v != v+u");
}

/// FALSIFY-VE-002: Subtraction undoes addition, up to rounding
#[test]
fn falsify_ve_002_sub_undoes_add() {
    let u = Vector::from_slice(&[1.1, -2.2, 3.3, 0.7]).expect("non-empty");
    let v = Vector::from_slice(&[0.4, 5.0, -1.25, 2.0]).expect("non-empty");

    let back = u.add(&v).expect("same length").sub(&v).expect("same length");

    for i in 0..u.len() {
        assert!(
            (back[i] - u[i]).abs() < 1e-12,
            "FALSIFIED VE-002: ((u+v)-v)[{i}]={} != u[{i}]={}",
            back[i],
            u[i]
        );
    }
}

/// FALSIFY-VE-003: Clones share no storage with the source
#[test]
fn falsify_ve_003_clone_independent() {
    let v = Vector::from_slice(&[1.0, 2.0, 3.0]).expect("non-empty");
    let mut copy = v.clone();

    copy.set(1, 99.0);

    assert_eq!(v[1], 2.0, "FALSIFIED VE-003: mutating a clone moved the source");
    assert_eq!(copy[1], 99.0, "FALSIFIED VE-003: clone write lost");
}

/// FALSIFY-VE-004: Identity matvec: I * v = v
#[test]
fn falsify_ve_004_identity_matvec() {
    let v = Vector::from_slice(&[1.5, -2.0, 3.0]).expect("non-empty");
    let eye = Matrix::new(3, 3).expect("valid");

    let result = eye.matvec(&v).expect("compatible dims");

    assert_eq!(result, v, "FALSIFIED VE-004: I*v != v");
}

/// FALSIFY-VE-005: The backing matrix is one column wide at all times
#[test]
fn falsify_ve_005_always_one_column() {
    let v = Vector::from_slice(&[1.0, 2.0, 3.0, 4.0]).expect("non-empty");

    assert_eq!(
        v.as_matrix().shape(),
        (4, 1),
        "FALSIFIED VE-005: backing matrix is not a column"
    );

    let sum = v.add(&v).expect("same length");
    assert_eq!(
        sum.as_matrix().shape(),
        (4, 1),
        "FALSIFIED VE-005: arithmetic broke the column shape"
    );
}

mod vector_proptest_falsify {
    use super::*;
    use proptest::prelude::*;

    /// FALSIFY-VE-001-prop: Addition commutative for random vectors
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(30))]

        #[test]
        fn falsify_ve_001_prop_add_commutative(
            len in 1..=16usize,
            seed in 0..500u32,
        ) {
            let data_u: Vec<f64> = (0..len)
                .map(|i| ((i as f64 + f64::from(seed)) * 0.37).sin() * 10.0)
                .collect();
            let data_v: Vec<f64> = (0..len)
                .map(|i| ((i as f64 + f64::from(seed)) * 0.53).cos() * 10.0)
                .collect();
            let u = Vector::from_vec(data_u).expect("non-empty");
            let v = Vector::from_vec(data_v).expect("non-empty");

            prop_assert_eq!(
                u.add(&v).expect("same length"),
                v.add(&u).expect("same length"),
                "FALSIFIED VE-001-prop: u+v != v+u"
            );
        }
    }
}
