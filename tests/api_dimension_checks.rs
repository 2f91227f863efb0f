#![allow(non_snake_case)]

use lupmat::{algebra::*, regression::*};

// a collection of tests to ensure that data of
// incompatible dimension won't be accepted

#[test]
fn api_dim_check_dot() {
    let A = Matrix::<f64>::ones((2, 3));

    // inner dimensions agree
    assert_eq!(dot(&A, &A.t()).unwrap().size(), (2, 2));
    assert_eq!(dot(&A.t(), &A).unwrap().size(), (3, 3));

    // inner dimensions disagree
    let err = dot(&A, &A).unwrap_err();
    assert!(matches!(
        err,
        DenseMatrixError::DimensionMismatch {
            left: (2, 3),
            right: (2, 3)
        }
    ));
    assert_eq!(err.to_string(), "cannot multiply 2x3 matrix with 2x3 matrix");
}

#[test]
fn api_dim_check_square() {
    let A = Matrix::<f64>::ones((2, 3));
    assert!(matches!(
        lup_decompose(&A, DEFAULT_TOLERANCE),
        Err(DenseMatrixError::NotSquare { rows: 2, cols: 3 })
    ));
    assert!(matches!(
        solve(&A, &[1., 1.], DEFAULT_PRECISION),
        Err(DenseMatrixError::NotSquare { .. })
    ));
    assert!(matches!(
        inverse(&A, DEFAULT_PRECISION),
        Err(DenseMatrixError::NotSquare { .. })
    ));
    assert!(matches!(
        determinant(&A),
        Err(DenseMatrixError::NotSquare { .. })
    ));
}

#[test]
fn api_dim_check_rhs() {
    let A = Matrix::<f64>::identity(3);
    for len in [0, 2, 4] {
        let b = vec![1.; len];
        assert!(matches!(
            solve(&A, &b, DEFAULT_PRECISION),
            Err(DenseMatrixError::IncompatibleVector { expected: 3, found }) if found == len
        ));
    }
}

#[test]
fn api_dim_check_elementwise() {
    let A = Matrix::<f64>::ones((2, 2));
    let B = Matrix::<f64>::ones((2, 3));
    assert!(A.add(&B).is_err());
    assert!(A.subtract(&B).is_err());
    assert!(A.add(&A).is_ok());
}

#[test]
fn api_dim_check_insert() {
    let A = Matrix::<f64>::ones((2, 3));
    assert!(append(&A, &[0.; 3], MatrixAxis::Row).is_ok());
    assert!(append(&A, &[0.; 2], MatrixAxis::Row).is_err());
    assert!(prepend(&A, &[0.; 2], MatrixAxis::Column).is_ok());
    assert!(prepend(&A, &[0.; 3], MatrixAxis::Column).is_err());
}

#[test]
fn api_dim_check_from_rows() {
    assert!(Matrix::from_rows(vec![vec![1., 2.], vec![3., 4.]]).is_ok());
    assert!(matches!(
        Matrix::from_rows(vec![vec![1., 2.], vec![3.]]),
        Err(DenseMatrixError::RaggedRows { row: 1, .. })
    ));
}

#[test]
fn api_dim_check_regression() {
    let X = Matrix::<f64>::ones((4, 2));
    let mut model = LinearRegression::default();

    // targets must be one column with one row per observation
    assert!(model.train(&X, &Matrix::ones((4, 2))).is_err());
    assert!(model.train(&X, &Matrix::ones((3, 1))).is_err());
    assert!(!model.is_trained());
}
