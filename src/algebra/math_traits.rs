use super::FloatT;

// Elementwise math on scalars and slices used by the dense kernels.
// Implemented generically for floats of type FloatT.

/// Scalar operations on [`FloatT`](crate::algebra::FloatT)

pub trait ScalarMath {
    type T: FloatT;

    /// Rounds to a fixed number of decimal digits, where `scale` is
    /// `10^digits`.
    ///
    /// Machine epsilon is added before scaling to counteract representation
    /// error (so that e.g. `1.0049999999999999` rounds like `1.005`), and
    /// ties round away from zero.
    fn round_scaled(&self, scale: Self::T) -> Self::T;
}

/// Vector operations on slices of [`FloatT`](crate::algebra::FloatT)

pub trait VectorMath {
    type T;

    /// set all elements to the same value
    fn set(&mut self, c: Self::T) -> &mut Self;

    /// Sum of elements.
    fn sum(&self) -> Self::T;

    /// Sum of squares of the elements.
    fn sumsq(&self) -> Self::T;

    /// 2-norm
    fn norm(&self) -> Self::T;

    /// Standard Euclidian or 2-norm distance from `self` to `y`
    fn dist(&self, y: &Self) -> Self::T;

    /// Maximum absolute elementwise difference between `self` and `b`
    fn norm_inf_diff(&self, b: &Self) -> Self::T;
}
