#![allow(non_snake_case)]
use num_traits::{Float, FromPrimitive, NumAssign};
use std::fmt::{Debug, Display, LowerExp};

/// Main trait for floating point types used in `lupmat`.
///
/// All matrix entries and every intermediate value of the LU kernel are
/// represented on values implementing `FloatT`.  The library is specified
/// and tested against `f64`, which is the default type parameter
/// everywhere.  Any type satisfying the bounds below (e.g. `f32`) also
/// works.
///
/// `FloatT` relies on [`num_traits`](num_traits) for most of its constituent
/// trait bounds.
pub trait FloatT:
    'static
    + Send
    + Sync
    + Float
    + NumAssign
    + Default
    + FromPrimitive
    + Display
    + LowerExp
    + Debug
    + Sized
{
}

impl<T> FloatT for T where
    T: 'static
        + Send
        + Sync
        + Float
        + NumAssign
        + Default
        + FromPrimitive
        + Display
        + LowerExp
        + Debug
        + Sized
{
}

/// Trait for converting Rust primitives to [`FloatT`](crate::algebra::FloatT)
///
/// This convenience trait is implemented on f32/64 and u32/64/usize.  It is
/// used internally for converting constant primitives to `FloatT`, and by the
/// settings builders for converting defaults of primitive type.

// NB: `AsFloatT` lets us write (1e-6).as_T() on constants,
// rather than T::from_f64(1e-6).unwrap() everywhere
pub trait AsFloatT<T>: 'static {
    fn as_T(&self) -> T;
}

macro_rules! impl_as_FloatT {
    ($ty:ty, $ident:ident) => {
        impl<T> AsFloatT<T> for $ty
        where
            T: std::ops::Mul<T, Output = T> + FromPrimitive + 'static,
        {
            #[inline]
            fn as_T(&self) -> T {
                T::$ident(*self).unwrap()
            }
        }
    };
}
impl_as_FloatT!(u32, from_u32);
impl_as_FloatT!(u64, from_u64);
impl_as_FloatT!(usize, from_usize);
impl_as_FloatT!(f32, from_f32);
impl_as_FloatT!(f64, from_f64);

#[test]
fn test_as_float() {
    let x: f64 = (1e-6).as_T();
    assert_eq!(x, 1e-6);
    let y: f32 = 3u32.as_T();
    assert_eq!(y, 3.0);
    let z: f64 = 7usize.as_T();
    assert_eq!(z, 7.0);
}
