// =========================================================================
// Solver contract: elimination must reproduce known solutions and keep
// residuals small on well-conditioned (diagonally dominant) systems.
// =========================================================================

use super::*;

mod solver_proptest_contract {
    use super::*;
    use proptest::prelude::*;

    /// Strictly diagonally dominant matrices are nonsingular, so the
    /// solver must recover the exact solution the rhs was built from.
    fn dominant(n: usize, seed: u32) -> Matrix {
        let mut data: Vec<f64> = (0..n * n)
            .map(|i| ((i as f64 + f64::from(seed)) * 0.37).sin() * 2.0)
            .collect();
        for i in 0..n {
            data[i * n + i] = 4.0 * n as f64 + data[i * n + i].abs();
        }
        Matrix::from_vec(n, n, data).expect("valid")
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(30))]

        #[test]
        fn prop_solve_recovers_known_solution(
            n in 1..=6usize,
            seed in 0..500u32,
        ) {
            let m = dominant(n, seed);
            let truth: Vec<f64> = (0..n)
                .map(|i| ((i as f64 - f64::from(seed)) * 0.71).cos() * 5.0)
                .collect();
            let truth = Matrix::from_vec(n, 1, truth).expect("valid");
            let q = m.matmul(&truth).expect("n x n * n x 1");

            let v = m.solve(&q).expect("diagonally dominant system");
            prop_assert_eq!(v.shape(), (n, 1));
            for i in 0..n {
                prop_assert!(
                    (v.get(i, 0).unwrap() - truth.get(i, 0).unwrap()).abs() < 1e-8,
                    "solution diverges at row {}", i
                );
            }
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(30))]

        #[test]
        fn prop_solve_residual_is_small(
            n in 1..=6usize,
            seed in 0..500u32,
        ) {
            let m = dominant(n, seed);
            let q = Matrix::from_vec(
                n,
                1,
                (0..n).map(|i| (i as f64 + 1.0) * 0.5).collect(),
            )
            .expect("valid");

            let v = m.solve(&q).expect("diagonally dominant system");
            let back = m.matmul(&v).expect("n x n * n x 1");
            for i in 0..n {
                prop_assert!(
                    (back.get(i, 0).unwrap() - q.get(i, 0).unwrap()).abs() < 1e-9,
                    "residual too large at row {}", i
                );
            }
        }
    }
}
