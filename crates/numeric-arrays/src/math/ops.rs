//! Arithmetic on [`NumericArray`]. Every operator forwards to the wrapped
//! nalgebra vector and returns a `NumericArray`, so results stay assignable
//! wherever the array type is expected.
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use nalgebra::SVector;

use crate::math::{Numeric, NumericArray};

macro_rules! impl_elementwise_ops {
    () => {
        impl_elementwise_ops! {@ += Add::add, AddAssign::add_assign}
        impl_elementwise_ops! {@ -= Sub::sub, SubAssign::sub_assign}
    };
    (@
        $operator:tt
        $base_trait:ident :: $base_method:ident ,
        $assign_trait:ident :: $assign_method:ident
    ) => {
        impl<T: Numeric, const N: usize> $assign_trait for NumericArray<T, N> {
            #[inline]
            fn $assign_method(&mut self, rhs: Self) {
                *self.as_vector_mut() $operator rhs.into_inner();
            }
        }

        impl<'a, T: Numeric, const N: usize> $assign_trait<&'a NumericArray<T, N>>
            for NumericArray<T, N>
        {
            #[inline]
            fn $assign_method(&mut self, rhs: &'a NumericArray<T, N>) {
                *self.as_vector_mut() $operator rhs.as_vector();
            }
        }

        impl<T: Numeric, const N: usize> $assign_trait<SVector<T, N>> for NumericArray<T, N> {
            #[inline]
            fn $assign_method(&mut self, rhs: SVector<T, N>) {
                *self.as_vector_mut() $operator rhs;
            }
        }

        impl<T: Numeric, const N: usize> $base_trait for NumericArray<T, N> {
            type Output = NumericArray<T, N>;

            #[inline]
            fn $base_method(mut self, rhs: Self) -> Self::Output {
                $assign_trait::$assign_method(&mut self, rhs);
                self
            }
        }

        impl<'a, T: Numeric, const N: usize> $base_trait<&'a NumericArray<T, N>>
            for &'a NumericArray<T, N>
        {
            type Output = NumericArray<T, N>;

            #[inline]
            fn $base_method(self, rhs: &'a NumericArray<T, N>) -> Self::Output {
                let mut out = *self;
                $assign_trait::$assign_method(&mut out, rhs);
                out
            }
        }

        impl<T: Numeric, const N: usize> $base_trait<SVector<T, N>> for NumericArray<T, N> {
            type Output = NumericArray<T, N>;

            #[inline]
            fn $base_method(mut self, rhs: SVector<T, N>) -> Self::Output {
                $assign_trait::$assign_method(&mut self, rhs);
                self
            }
        }

        impl<T: Numeric, const N: usize> $base_trait<NumericArray<T, N>> for SVector<T, N> {
            type Output = NumericArray<T, N>;

            #[inline]
            fn $base_method(mut self, rhs: NumericArray<T, N>) -> Self::Output {
                self $operator rhs.into_inner();
                NumericArray::from(self)
            }
        }
    };
}

macro_rules! impl_scalar_ops {
    () => {
        impl_scalar_ops! {@ *= Mul::mul, MulAssign::mul_assign}
        impl_scalar_ops! {@ /= Div::div, DivAssign::div_assign}
    };
    (@
        $operator:tt
        $base_trait:ident :: $base_method:ident ,
        $assign_trait:ident :: $assign_method:ident
    ) => {
        impl<T: Numeric, const N: usize> $assign_trait<T> for NumericArray<T, N> {
            #[inline]
            fn $assign_method(&mut self, rhs: T) {
                *self.as_vector_mut() $operator rhs;
            }
        }

        impl<T: Numeric, const N: usize> $base_trait<T> for NumericArray<T, N> {
            type Output = NumericArray<T, N>;

            #[inline]
            fn $base_method(mut self, rhs: T) -> Self::Output {
                $assign_trait::$assign_method(&mut self, rhs);
                self
            }
        }

        impl<'a, T: Numeric, const N: usize> $base_trait<T> for &'a NumericArray<T, N> {
            type Output = NumericArray<T, N>;

            #[inline]
            fn $base_method(self, rhs: T) -> Self::Output {
                let mut out = *self;
                $assign_trait::$assign_method(&mut out, rhs);
                out
            }
        }
    };
}

impl_elementwise_ops! {}
impl_scalar_ops! {}

impl<T, const N: usize> Neg for NumericArray<T, N>
where
    T: Numeric + Neg<Output = T>,
{
    type Output = NumericArray<T, N>;

    #[inline]
    fn neg(self) -> Self::Output {
        NumericArray::from(-self.into_inner())
    }
}

// `scalar * array` needs one impl per concrete scalar type.
macro_rules! impl_left_scalar_mul {
    ($($ty:ty),*) => {
        $(
            impl<const N: usize> Mul<NumericArray<$ty, N>> for $ty {
                type Output = NumericArray<$ty, N>;

                #[inline]
                fn mul(self, rhs: NumericArray<$ty, N>) -> Self::Output {
                    rhs * self
                }
            }

            impl<'a, const N: usize> Mul<&'a NumericArray<$ty, N>> for $ty {
                type Output = NumericArray<$ty, N>;

                #[inline]
                fn mul(self, rhs: &'a NumericArray<$ty, N>) -> Self::Output {
                    *rhs * self
                }
            }
        )*
    };
}

impl_left_scalar_mul!(f32, f64, i8, i16, i32, i64, u8, u16, u32, u64);
