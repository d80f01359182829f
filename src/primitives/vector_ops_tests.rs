use super::*;

fn row(values: &[f64]) -> Matrix {
    Matrix::from_vec(1, values.len(), values.to_vec()).expect("valid row vector")
}

fn col(values: &[f64]) -> Matrix {
    Matrix::from_vec(values.len(), 1, values.to_vec()).expect("valid column vector")
}

#[test]
fn test_dot_row_row() {
    let c = row(&[1.0, 3.0, -5.0]);
    let d = row(&[4.0, -2.0, -1.0]);
    // 1*4 + 3*(-2) + (-5)*(-1) = 3
    assert!((c.dot(&d).unwrap() - 3.0).abs() < 1e-12);
}

#[test]
fn test_dot_mixed_orientations() {
    let c = row(&[1.0, 3.0, -5.0]);
    let d = col(&[4.0, -2.0, -1.0]);
    assert!((c.dot(&d).unwrap() - 3.0).abs() < 1e-12);
    assert!((c.transpose().dot(&d).unwrap() - 3.0).abs() < 1e-12);
    assert!((c.transpose().dot(&d.transpose()).unwrap() - 3.0).abs() < 1e-12);
}

#[test]
fn test_dot_commutative() {
    let a = row(&[2.0, -1.0, 0.5, 7.0]);
    let b = col(&[1.0, 1.0, 4.0, -3.0]);
    assert!((a.dot(&b).unwrap() - b.dot(&a).unwrap()).abs() < 1e-12);
}

#[test]
fn test_dot_not_a_vector() {
    let m = Matrix::zeros(2, 3).expect("valid");
    let v = row(&[1.0, 2.0, 3.0]);
    assert!(matches!(
        m.dot(&v).unwrap_err(),
        MatrizError::NotAVector { .. }
    ));
}

#[test]
fn test_dot_length_mismatch() {
    // 4x1 column against a length-3 row: normalization flips the column
    // into a 1x4 row, leaving a genuine length mismatch
    let a = row(&[1.0, 2.0, 3.0]);
    let b = col(&[1.0, 2.0, 3.0, 4.0]);
    assert_eq!(
        a.dot(&b).unwrap_err(),
        MatrizError::LengthMismatch { left: 3, right: 4 }
    );
}

#[test]
fn test_cross_known_value() {
    let c = row(&[1.0, 3.0, -5.0]);
    let d = row(&[4.0, -2.0, -1.0]);
    let x = c.cross(&d).expect("same orientation, length 3");
    assert_eq!(x.shape(), (1, 3));
    assert_eq!(x.as_slice(), &[-13.0, -19.0, -14.0]);
}

#[test]
fn test_cross_anti_commutative() {
    let a = row(&[1.0, 3.0, -5.0]);
    let b = row(&[4.0, -2.0, -1.0]);
    let ab = a.cross(&b).expect("valid");
    let ba = b.cross(&a).expect("valid");
    let neg = ba.mul_scalar(-1.0);
    for (x, y) in ab.as_slice().iter().zip(neg.as_slice()) {
        assert!((x - y).abs() < 1e-12);
    }
}

#[test]
fn test_cross_preserves_column_orientation() {
    let a = col(&[1.0, 0.0, 0.0]);
    let b = col(&[0.0, 1.0, 0.0]);
    let x = a.cross(&b).expect("same orientation, length 3");
    assert_eq!(x.shape(), (3, 1));
    assert_eq!(x.as_slice(), &[0.0, 0.0, 1.0]);
}

#[test]
fn test_cross_orientation_mismatch() {
    let a = row(&[1.0, 0.0, 0.0]);
    let b = col(&[0.0, 1.0, 0.0]);
    assert_eq!(
        a.cross(&b).unwrap_err(),
        MatrizError::OrientationMismatch {
            left: (1, 3),
            right: (3, 1)
        }
    );
}

#[test]
fn test_cross_requires_length_three() {
    let a = row(&[1.0, 2.0, 3.0, 4.0]);
    let b = row(&[5.0, 6.0, 7.0, 8.0]);
    assert_eq!(a.cross(&b).unwrap_err(), MatrizError::DimensionError { len: 4 });
}

#[test]
fn test_cross_does_not_mutate_inputs() {
    let a = col(&[1.0, 0.0, 0.0]);
    let b = col(&[0.0, 1.0, 0.0]);
    let a_before = a.clone();
    let b_before = b.clone();
    let _ = a.cross(&b).expect("valid");
    assert_eq!(a, a_before);
    assert_eq!(b, b_before);
}
