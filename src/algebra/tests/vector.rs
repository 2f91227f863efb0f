#![allow(non_snake_case)]
use crate::algebra::*;

#[test]
fn test_set_and_sum() {
    let mut x = vec![3., 0., 2., 1.];
    assert_eq!(x.sum(), 6.);
    x.set(2.);
    assert_eq!(x, vec![2.; 4]);
    assert_eq!(x.sum(), 8.);
}

#[test]
fn test_matrix_data_norms() {
    let A = Matrix::from(&[[3., 0.], [0., 4.]]);
    assert_eq!(A.data().norm(), 5.);
    assert_eq!(A.norm(), 5.);
    assert_eq!(A.data().sumsq(), 25.);
}

#[test]
fn test_row_distance() {
    let A = Matrix::from(&[[1., 1.], [4., 5.]]);
    assert_eq!(A[0].dist(&A[1]), 5.);
    assert_eq!(A[0].norm_inf_diff(&A[1]), 4.);
}
