use super::{AsFloatT, FloatT, ScalarMath};

impl<T: FloatT> ScalarMath for T {
    type T = T;
    fn round_scaled(&self, scale: T) -> T {
        // Float::round is half away from zero
        let scaled = (*self + T::epsilon()) * scale;
        if !scaled.is_finite() {
            // more digits than T can hold, nothing to round
            return *self;
        }
        scaled.round() / scale
    }
}

// 10^digits as a scaling constant for round_scaled.  Saturates to
// infinity for digits beyond the range of T.
pub(crate) fn precision_scale<T: FloatT>(digits: u32) -> T {
    let ten: T = (10.0).as_T();
    ten.powi(i32::try_from(digits).unwrap_or(i32::MAX))
}

#[test]
fn test_round_scaled() {
    let scale: f64 = precision_scale(6);
    assert_eq!(scale, 1e6);
    assert_eq!((42.999_999_9_f64).round_scaled(scale), 43.0);
    assert_eq!((-0.499_999_999_9_f64).round_scaled(scale), -0.5);
    assert_eq!((1.0000004_f64).round_scaled(scale), 1.0);

    // ties go away from zero
    let scale: f64 = precision_scale(0);
    assert_eq!((2.5_f64).round_scaled(scale), 3.0);
    assert_eq!((-3.5_f64).round_scaled(scale), -4.0);
}

#[test]
fn test_round_scaled_huge_precision() {
    for digits in [400, i32::MAX as u32 + 1, u32::MAX] {
        let scale: f64 = precision_scale(digits);
        assert_eq!(scale, f64::INFINITY);
        assert_eq!((1.0_f64 / 3.0).round_scaled(scale), 1.0 / 3.0);
        assert_eq!((0.0_f64).round_scaled(scale), 0.0);
        assert_eq!((-12.5_f64).round_scaled(scale), -12.5);
    }
}
