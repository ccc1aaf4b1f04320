use std::fmt;

use nalgebra::Scalar;
use num_traits::NumAssign;

use crate::type_name::TypeName;

/// Element types accepted by [`NumericArray`](crate::math::NumericArray).
///
/// Every element type carries a reflected name, which is what lets the array
/// names be assembled at compile time.
pub trait Numeric: Scalar + Copy + NumAssign + PartialOrd + fmt::Display + TypeName {}

macro_rules! impl_numeric {
    ($($ty:ty),*) => {
        $(impl Numeric for $ty {})*
    };
}

impl_numeric!(f32, f64, i8, i16, i32, i64, u8, u16, u32, u64);
