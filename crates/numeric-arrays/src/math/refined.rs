//! Element-specialised arrays: [`FloatArray`], [`DoubleArray`], [`IntArray`]
//! and [`UIntArray`].
//!
//! Each one wraps a [`NumericArray`] with the element type fixed, dereferences
//! to it, and re-exposes the full construction, assignment and arithmetic
//! surface so that it accepts any `N×1` nalgebra expression exactly like the
//! generic array does. The only difference between them is the element type
//! and the reflected name.
use std::fmt;
use std::ops::{
    Add, AddAssign, Deref, DerefMut, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg,
    Range, Sub, SubAssign,
};

use nalgebra::{Const, Matrix, RawStorage, SVector, U1};
use num_traits::AsPrimitive;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::{FormatConfig, FormattedArray};
use crate::error::ArrayError;
use crate::math::NumericArray;
use crate::type_name::{TypeName, TypeNameBuf};

macro_rules! refined_binary_op {
    ($name:ident, $elem:ty, $base_trait:ident :: $base_method:ident, $assign_trait:ident :: $assign_method:ident) => {
        impl<const N: usize> $base_trait for $name<N> {
            type Output = $name<N>;

            #[inline]
            fn $base_method(self, rhs: Self) -> Self::Output {
                $name($base_trait::$base_method(self.0, rhs.0))
            }
        }

        impl<'a, const N: usize> $base_trait<&'a $name<N>> for &'a $name<N> {
            type Output = $name<N>;

            #[inline]
            fn $base_method(self, rhs: &'a $name<N>) -> Self::Output {
                $name($base_trait::$base_method(&self.0, &rhs.0))
            }
        }

        impl<const N: usize> $base_trait<SVector<$elem, N>> for $name<N> {
            type Output = $name<N>;

            #[inline]
            fn $base_method(self, rhs: SVector<$elem, N>) -> Self::Output {
                $name($base_trait::$base_method(self.0, rhs))
            }
        }

        impl<const N: usize> $base_trait<$name<N>> for SVector<$elem, N> {
            type Output = $name<N>;

            #[inline]
            fn $base_method(self, rhs: $name<N>) -> Self::Output {
                $name($base_trait::$base_method(self, rhs.0))
            }
        }

        impl<const N: usize> $assign_trait for $name<N> {
            #[inline]
            fn $assign_method(&mut self, rhs: Self) {
                $assign_trait::$assign_method(&mut self.0, rhs.0);
            }
        }

        impl<'a, const N: usize> $assign_trait<&'a $name<N>> for $name<N> {
            #[inline]
            fn $assign_method(&mut self, rhs: &'a $name<N>) {
                $assign_trait::$assign_method(&mut self.0, &rhs.0);
            }
        }

        impl<const N: usize> $assign_trait<SVector<$elem, N>> for $name<N> {
            #[inline]
            fn $assign_method(&mut self, rhs: SVector<$elem, N>) {
                $assign_trait::$assign_method(&mut self.0, rhs);
            }
        }
    };
}

macro_rules! refined_scalar_op {
    ($name:ident, $elem:ty, $base_trait:ident :: $base_method:ident, $assign_trait:ident :: $assign_method:ident) => {
        impl<const N: usize> $base_trait<$elem> for $name<N> {
            type Output = $name<N>;

            #[inline]
            fn $base_method(self, rhs: $elem) -> Self::Output {
                $name($base_trait::$base_method(self.0, rhs))
            }
        }

        impl<'a, const N: usize> $base_trait<$elem> for &'a $name<N> {
            type Output = $name<N>;

            #[inline]
            fn $base_method(self, rhs: $elem) -> Self::Output {
                $name($base_trait::$base_method(&self.0, rhs))
            }
        }

        impl<const N: usize> $assign_trait<$elem> for $name<N> {
            #[inline]
            fn $assign_method(&mut self, rhs: $elem) {
                $assign_trait::$assign_method(&mut self.0, rhs);
            }
        }
    };
}

macro_rules! refined_array {
    ($(#[$meta:meta])* $name:ident, $elem:ty, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name<const N: usize>(NumericArray<$elem, N>);

        impl<const N: usize> $name<N> {
            /// Number of elements.
            pub const LEN: usize = N;

            pub fn zeros() -> Self {
                Self(NumericArray::zeros())
            }

            pub fn from_element(value: $elem) -> Self {
                Self(NumericArray::from_element(value))
            }

            pub const fn from_array(values: [$elem; N]) -> Self {
                Self(NumericArray::from_array(values))
            }

            pub fn from_fn<F>(f: F) -> Self
            where
                F: FnMut(usize) -> $elem,
            {
                Self(NumericArray::from_fn(f))
            }

            /// Copies the first `N` elements; panics on a shorter buffer.
            pub fn from_slice(values: &[$elem]) -> Self {
                Self(NumericArray::from_slice(values))
            }

            pub fn try_from_slice(values: &[$elem]) -> Result<Self, ArrayError> {
                NumericArray::try_from_slice(values).map(Self)
            }

            pub fn from_indexable<S, U>(source: &S) -> Self
            where
                S: Index<usize, Output = U> + ?Sized,
                U: AsPrimitive<$elem>,
            {
                Self(NumericArray::from_indexable(source))
            }

            pub fn from_matrix<S>(expr: &Matrix<$elem, Const<N>, U1, S>) -> Self
            where
                S: RawStorage<$elem, Const<N>, U1>,
            {
                Self(NumericArray::from_matrix(expr))
            }

            pub fn assign<S>(&mut self, expr: &Matrix<$elem, Const<N>, U1, S>) -> &mut Self
            where
                S: RawStorage<$elem, Const<N>, U1>,
            {
                self.0.assign(expr);
                self
            }

            pub fn random_using<R>(rng: &mut R) -> Self
            where
                R: Rng + ?Sized,
            {
                Self(NumericArray::random_using(rng))
            }

            pub fn random_range_using<R>(rng: &mut R, range: Range<$elem>) -> Self
            where
                R: Rng + ?Sized,
            {
                Self(NumericArray::random_range_using(rng, range))
            }

            pub fn into_numeric(self) -> NumericArray<$elem, N> {
                self.0
            }

            pub fn to_array(self) -> [$elem; N] {
                self.0.to_array()
            }

            pub fn display_with<'a>(&'a self, config: &'a FormatConfig) -> FormattedArray<'a, $elem> {
                self.0.display_with(config)
            }
        }

        impl<const N: usize> Deref for $name<N> {
            type Target = NumericArray<$elem, N>;

            #[inline]
            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl<const N: usize> DerefMut for $name<N> {
            #[inline]
            fn deref_mut(&mut self) -> &mut Self::Target {
                &mut self.0
            }
        }

        impl<const N: usize> Index<usize> for $name<N> {
            type Output = $elem;

            fn index(&self, index: usize) -> &Self::Output {
                &self.0[index]
            }
        }

        impl<const N: usize> IndexMut<usize> for $name<N> {
            fn index_mut(&mut self, index: usize) -> &mut Self::Output {
                &mut self.0[index]
            }
        }

        impl<const N: usize> From<NumericArray<$elem, N>> for $name<N> {
            fn from(array: NumericArray<$elem, N>) -> Self {
                Self(array)
            }
        }

        impl<const N: usize> From<$name<N>> for NumericArray<$elem, N> {
            fn from(array: $name<N>) -> Self {
                array.0
            }
        }

        impl<const N: usize> From<SVector<$elem, N>> for $name<N> {
            fn from(vector: SVector<$elem, N>) -> Self {
                Self(NumericArray::from(vector))
            }
        }

        impl<const N: usize> From<$name<N>> for SVector<$elem, N> {
            fn from(array: $name<N>) -> Self {
                array.0.into_inner()
            }
        }

        impl<const N: usize> From<[$elem; N]> for $name<N> {
            fn from(values: [$elem; N]) -> Self {
                Self::from_array(values)
            }
        }

        impl<const N: usize> From<$name<N>> for [$elem; N] {
            fn from(array: $name<N>) -> Self {
                array.to_array()
            }
        }

        impl<const N: usize> IntoIterator for $name<N> {
            type Item = $elem;
            type IntoIter = std::array::IntoIter<$elem, N>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.into_iter()
            }
        }

        impl<'a, const N: usize> IntoIterator for &'a $name<N> {
            type Item = &'a $elem;
            type IntoIter = std::slice::Iter<'a, $elem>;

            fn into_iter(self) -> Self::IntoIter {
                (&self.0).into_iter()
            }
        }

        impl<'a, const N: usize> IntoIterator for &'a mut $name<N> {
            type Item = &'a mut $elem;
            type IntoIter = std::slice::IterMut<'a, $elem>;

            fn into_iter(self) -> Self::IntoIter {
                (&mut self.0).into_iter()
            }
        }

        refined_binary_op!($name, $elem, Add::add, AddAssign::add_assign);
        refined_binary_op!($name, $elem, Sub::sub, SubAssign::sub_assign);
        refined_scalar_op!($name, $elem, Mul::mul, MulAssign::mul_assign);
        refined_scalar_op!($name, $elem, Div::div, DivAssign::div_assign);

        impl<const N: usize> Mul<$name<N>> for $elem {
            type Output = $name<N>;

            #[inline]
            fn mul(self, rhs: $name<N>) -> Self::Output {
                rhs * self
            }
        }

        impl<'a, const N: usize> Mul<&'a $name<N>> for $elem {
            type Output = $name<N>;

            #[inline]
            fn mul(self, rhs: &'a $name<N>) -> Self::Output {
                rhs * self
            }
        }

        impl<const N: usize> TypeName for $name<N> {
            const TYPE_NAME: TypeNameBuf = TypeNameBuf::literal(concat!($prefix, "<"))
                .push_decimal(N)
                .push_str(">");
        }

        impl<const N: usize> fmt::Display for $name<N> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

macro_rules! refined_neg {
    ($($name:ident),*) => {
        $(
            impl<const N: usize> Neg for $name<N> {
                type Output = $name<N>;

                #[inline]
                fn neg(self) -> Self::Output {
                    $name(-self.0)
                }
            }
        )*
    };
}

refined_array!(
    /// A [`NumericArray`] of `f32`, reflected as `CArrayFloat<N>`.
    FloatArray,
    f32,
    "CArrayFloat"
);

refined_array!(
    /// A [`NumericArray`] of `f64`, reflected as `CArrayDouble<N>`.
    ///
    /// ```
    /// use numeric_arrays::DoubleArray;
    ///
    /// let a = DoubleArray::<2>::from_array([1.0, 2.0]);
    /// let b = DoubleArray::<2>::from_array([10.0, 20.0]);
    /// let c: DoubleArray<2> = a + b;
    /// assert_eq!(c.to_array(), [11.0, 22.0]);
    /// ```
    ///
    /// A `3×1` expression does not fit a `DoubleArray<4>`:
    ///
    /// ```compile_fail
    /// use nalgebra::Vector3;
    /// use numeric_arrays::DoubleArray;
    ///
    /// let mut a = DoubleArray::<4>::zeros();
    /// a.assign(&Vector3::new(1.0, 2.0, 3.0));
    /// ```
    ///
    /// There is no `From` conversion from an arbitrary indexable source;
    /// `from_indexable` has to be called by name:
    ///
    /// ```compile_fail
    /// use numeric_arrays::DoubleArray;
    ///
    /// let _ = DoubleArray::<3>::from(vec![1.0, 2.0, 3.0]);
    /// ```
    ///
    /// A zero-length array is rejected at compile time:
    ///
    /// ```compile_fail
    /// use numeric_arrays::DoubleArray;
    ///
    /// let _ = DoubleArray::<0>::default();
    /// ```
    DoubleArray,
    f64,
    "CArrayDouble"
);

refined_array!(
    /// A [`NumericArray`] of `i32`, reflected as `CArrayInt<N>`.
    IntArray,
    i32,
    "CArrayInt"
);

refined_array!(
    /// A [`NumericArray`] of `u32`, reflected as `CArrayUInt<N>`.
    UIntArray,
    u32,
    "CArrayUInt"
);

refined_neg!(FloatArray, DoubleArray, IntArray);
