// =========================================================================
// Algebraic contracts for the Matrix primitives.
//
// References:
//   - Golub & Van Loan (2013) "Matrix Computations"
// =========================================================================

use super::*;

/// Transpose involution: (A^T)^T = A
#[test]
fn contract_transpose_involution() {
    let a = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).expect("valid");
    let att = a.transpose().transpose();

    assert_eq!(att.shape(), a.shape());
    for i in 0..2 {
        for j in 0..3 {
            assert!(
                (att.get(i, j).unwrap() - a.get(i, j).unwrap()).abs() < 1e-12,
                "(A^T)^T[{i},{j}] != A[{i},{j}]"
            );
        }
    }
}

/// Transpose swaps shape: (m x n)^T = (n x m)
#[test]
fn contract_transpose_swaps_shape() {
    let a = Matrix::zeros(3, 5).expect("valid");
    assert_eq!(a.transpose().shape(), (5, 3));
}

/// Matmul shape: (m x k) * (k x n) = (m x n)
#[test]
fn contract_matmul_shape() {
    let a = Matrix::new(2, 3, 1.0).expect("valid");
    let b = Matrix::new(3, 4, 1.0).expect("valid");
    assert_eq!(a.matmul(&b).expect("compatible dims").shape(), (2, 4));
}

mod matrix_proptest_contract {
    use super::*;
    use proptest::prelude::*;

    fn seeded(rows: usize, cols: usize, seed: u32) -> Matrix {
        let data: Vec<f64> = (0..rows * cols)
            .map(|i| ((i as f64 + f64::from(seed)) * 0.37).sin() * 10.0)
            .collect();
        Matrix::from_vec(rows, cols, data).expect("valid")
    }

    /// (A + B) - B = A elementwise for equal shapes
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(30))]

        #[test]
        fn prop_add_sub_roundtrip(
            rows in 1..=8usize,
            cols in 1..=8usize,
            seed in 0..500u32,
        ) {
            let a = seeded(rows, cols, seed);
            let b = seeded(rows, cols, seed.wrapping_add(77));
            let back = a.add(&b).expect("same shape").sub(&b).expect("same shape");

            for i in 0..rows {
                for j in 0..cols {
                    prop_assert!(
                        (back.get(i, j).unwrap() - a.get(i, j).unwrap()).abs() < 1e-9,
                        "((A+B)-B)[{},{}] != A[{},{}]", i, j, i, j
                    );
                }
            }
        }
    }

    /// Transpose involution for random matrices
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(30))]

        #[test]
        fn prop_transpose_involution(
            rows in 1..=8usize,
            cols in 1..=8usize,
            seed in 0..500u32,
        ) {
            let a = seeded(rows, cols, seed);
            let att = a.transpose().transpose();
            prop_assert_eq!(att, a);
        }
    }

    /// Identity matmul for random square matrices
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(20))]

        #[test]
        fn prop_identity_matmul(
            n in 1..=6usize,
            seed in 0..500u32,
        ) {
            let a = seeded(n, n, seed);
            let eye = Matrix::eye(n).expect("valid");
            let result = eye.matmul(&a).expect("compatible");

            for i in 0..n {
                for j in 0..n {
                    prop_assert!(
                        (result.get(i, j).unwrap() - a.get(i, j).unwrap()).abs() < 1e-9,
                        "(I*A)[{},{}] != A[{},{}]", i, j, i, j
                    );
                }
            }
        }
    }

    /// Dot product commutes regardless of operand orientation
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(30))]

        #[test]
        fn prop_dot_commutative(
            len in 1..=8usize,
            seed in 0..500u32,
            a_is_row: bool,
            b_is_row: bool,
        ) {
            let a = if a_is_row {
                seeded(1, len, seed)
            } else {
                seeded(len, 1, seed)
            };
            let b = if b_is_row {
                seeded(1, len, seed.wrapping_add(123))
            } else {
                seeded(len, 1, seed.wrapping_add(123))
            };

            let ab = a.dot(&b).expect("vectors of equal length");
            let ba = b.dot(&a).expect("vectors of equal length");
            prop_assert!((ab - ba).abs() < 1e-9, "dot(a,b)={} != dot(b,a)={}", ab, ba);
        }
    }
}
