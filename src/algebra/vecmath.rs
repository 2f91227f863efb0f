use super::{FloatT, VectorMath};
use std::iter::zip;

impl<T: FloatT> VectorMath for [T] {
    type T = T;

    fn set(&mut self, c: T) -> &mut Self {
        self.fill(c);
        self
    }

    fn sum(&self) -> T {
        self.iter().fold(T::zero(), |acc, &x| acc + x)
    }

    fn sumsq(&self) -> T {
        self.iter().fold(T::zero(), |acc, &x| acc + x * x)
    }

    // 2-norm
    fn norm(&self) -> T {
        T::sqrt(self.sumsq())
    }

    fn dist(&self, y: &Self) -> T {
        assert_eq!(self.len(), y.len());
        let dist2 = zip(self, y).fold(T::zero(), |acc, (&x, &y)| acc + T::powi(x - y, 2));
        T::sqrt(dist2)
    }

    // max absolute difference (used for unit testing)
    fn norm_inf_diff(&self, b: &[T]) -> T {
        zip(self, b).fold(T::zero(), |acc, (x, y)| T::max(acc, T::abs(*x - *y)))
    }
}

#[test]
fn test_sum() {
    let x = vec![1., 2., 3., 6.];
    assert_eq!(x.sum(), 12.);
    assert_eq!(Vec::<f64>::new().sum(), 0.);
}

#[test]
fn test_norms() {
    let x = [3., -4.];
    assert_eq!(x.sumsq(), 25.);
    assert_eq!(x.norm(), 5.);

    let y = [0., 0.];
    assert_eq!(x.dist(&y), 5.);
    assert_eq!(x.norm_inf_diff(&y), 4.);
}

#[test]
fn test_set() {
    let mut x = vec![1., 2., 3.];
    x.set(-1.);
    assert_eq!(x, [-1., -1., -1.]);
}
