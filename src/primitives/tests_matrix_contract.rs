// =========================================================================
// FALSIFY-MX: Matrix primitives contract (matriz primitives)
//
// Each test tries to falsify one clause of the Matrix contract: operator
// algebra, the exact-equality rule, the row-operation no-ops, and the
// Gauss-Jordan inversion round trip with its fixed last-row pivot fallback.
//
// References:
//   - Golub & Van Loan (2013) "Matrix Computations"
// =========================================================================

use super::*;

/// FALSIFY-MX-001: Addition is commutative: A + B = B + A
#[test]
fn falsify_mx_001_add_commutative() {
    let a = Matrix::from_vec(2, 3, vec![1.0, -2.0, 3.5, 4.0, 0.25, -6.0]).expect("valid");
    let b = Matrix::from_vec(2, 3, vec![9.0, 8.0, -7.0, 0.5, 11.0, 10.0]).expect("valid");

    let ab = a.add(&b).expect("same shape");
    let ba = b.add(&a).expect("same shape");

    assert_eq!(ab, ba, "FALSIFIED MX-001: A+B != B+A");
}

/// FALSIFY-MX-002: Identity matmul: A * I = A, exactly
#[test]
fn falsify_mx_002_identity_matmul() {
    let a =
        Matrix::from_vec(3, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]).expect("valid");
    let eye = Matrix::new(3, 3).expect("valid");

    let result = a.matmul(&eye).expect("compatible dims");

    assert_eq!(result, a, "FALSIFIED MX-002: A*I != A");
}

/// FALSIFY-MX-003: Transpose-avoidance: A * B^T via matmul_transpose
/// matches the naive matmul(A, transpose(B))
#[test]
fn falsify_mx_003_matmul_transpose_cross_check() {
    let a = Matrix::from_vec(2, 4, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]).expect("valid");
    let b = Matrix::from_vec(3, 4, (1..=12).map(f64::from).collect()).expect("valid");

    let fused = a.matmul_transpose(&b).expect("column counts match");
    let naive = a.matmul(&b.transpose()).expect("inner dims match");

    assert_eq!(
        fused, naive,
        "FALSIFIED MX-003: matmul_transpose != matmul(transpose)"
    );
}

/// FALSIFY-MX-004: Inversion round trip: round(M * M^-1) = I
#[test]
fn falsify_mx_004_invert_round_trip() {
    let original = Matrix::from_vec(
        3,
        3,
        vec![3.0, 1.0, 0.0, -1.0, 3.0, -1.0, 0.0, -3.0, 1.0],
    )
    .expect("valid");
    let mut working = original.clone();

    let inverse = working.destructive_invert().expect("determinant is 1");
    let mut product = original.matmul(&inverse).expect("compatible dims");
    product.round();

    assert_eq!(
        product,
        Matrix::new(3, 3).expect("valid"),
        "FALSIFIED MX-004: round(M * inv(M)) != I"
    );
}

/// FALSIFY-MX-005: Self row operations are no-ops for any row and scalar
#[test]
fn falsify_mx_005_self_row_ops_noop() {
    let reference = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).expect("valid");

    let mut m = reference.clone();
    m.swap_rows(0, 0).expect("self swap is a no-op");
    m.shear_row(1, 1, 42.0).expect("self shear is a no-op");

    assert_eq!(m, reference, "FALSIFIED MX-005: self row op changed cells");
}

/// FALSIFY-MX-006: Equality is exact, not approximate
#[test]
fn falsify_mx_006_equality_exact() {
    let a = Matrix::from_vec(1, 2, vec![1.0, 1.0 + f64::EPSILON]).expect("valid");
    let b = Matrix::from_vec(1, 2, vec![1.0, 1.0]).expect("valid");

    assert_ne!(a, b, "FALSIFIED MX-006: one-ulp difference compared equal");
    assert_eq!(a, a.clone(), "FALSIFIED MX-006: matrix != its own clone");
}

mod matrix_proptest_falsify {
    use super::*;
    use proptest::prelude::*;

    /// FALSIFY-MX-001-prop: Addition commutative for random matrices
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(30))]

        #[test]
        fn falsify_mx_001_prop_add_commutative(
            rows in 1..=8usize,
            cols in 1..=8usize,
            seed in 0..500u32,
        ) {
            let data_a: Vec<f64> = (0..rows * cols)
                .map(|i| ((i as f64 + f64::from(seed)) * 0.37).sin() * 10.0)
                .collect();
            let data_b: Vec<f64> = (0..rows * cols)
                .map(|i| ((i as f64 + f64::from(seed)) * 0.53).cos() * 10.0)
                .collect();
            let a = Matrix::from_vec(rows, cols, data_a).expect("valid");
            let b = Matrix::from_vec(rows, cols, data_b).expect("valid");

            prop_assert_eq!(
                a.add(&b).expect("same shape"),
                b.add(&a).expect("same shape"),
                "FALSIFIED MX-001-prop: A+B != B+A"
            );
        }
    }

    /// FALSIFY-MX-003-prop: matmul_transpose cross-check for random shapes
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(30))]

        #[test]
        fn falsify_mx_003_prop_matmul_transpose(
            rows_a in 1..=6usize,
            rows_b in 1..=6usize,
            shared_cols in 1..=6usize,
            seed in 0..500u32,
        ) {
            let data_a: Vec<f64> = (0..rows_a * shared_cols)
                .map(|i| ((i as f64 + f64::from(seed)) * 0.37).sin() * 10.0)
                .collect();
            let data_b: Vec<f64> = (0..rows_b * shared_cols)
                .map(|i| ((i as f64 + f64::from(seed)) * 0.53).cos() * 10.0)
                .collect();
            let a = Matrix::from_vec(rows_a, shared_cols, data_a).expect("valid");
            let b = Matrix::from_vec(rows_b, shared_cols, data_b).expect("valid");

            let fused = a.matmul_transpose(&b).expect("column counts match");
            let naive = a.matmul(&b.transpose()).expect("inner dims match");

            prop_assert_eq!(
                fused, naive,
                "FALSIFIED MX-003-prop: matmul_transpose != matmul(transpose)"
            );
        }
    }

    /// FALSIFY-MX-004-prop: Invert round trip on diagonally dominant matrices
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(20))]

        #[test]
        fn falsify_mx_004_prop_invert_round_trip(
            n in 1..=6usize,
            seed in 0..500u32,
        ) {
            // strict diagonal dominance keeps the matrix invertible and the
            // elimination well conditioned
            let mut data: Vec<f64> = (0..n * n)
                .map(|i| ((i as f64 + f64::from(seed)) * 0.37).sin() * 2.0)
                .collect();
            for i in 0..n {
                data[i * n + i] += 4.0 * n as f64;
            }
            let original = Matrix::from_vec(n, n, data).expect("valid");
            let mut working = original.clone();

            let inverse = working.destructive_invert().expect("diagonally dominant");
            let mut product = original.matmul(&inverse).expect("compatible dims");
            product.round();

            prop_assert_eq!(
                product,
                Matrix::new(n, n).expect("valid"),
                "FALSIFIED MX-004-prop: round(M * inv(M)) != I"
            );
        }
    }
}
