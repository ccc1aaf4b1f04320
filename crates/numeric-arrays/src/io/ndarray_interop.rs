//! Conversions between the array types and `ndarray::Array1`.
//!
//! Going to ndarray always succeeds; coming back requires the exact length.
use ndarray::{Array1, ArrayView1};

use crate::error::ArrayError;
use crate::math::{DoubleArray, FloatArray, IntArray, Numeric, NumericArray, UIntArray};

impl<T: Numeric, const N: usize> NumericArray<T, N> {
    pub fn to_ndarray(&self) -> Array1<T> {
        Array1::from_vec(self.to_vec())
    }

    pub fn try_from_ndarray(view: ArrayView1<'_, T>) -> Result<Self, ArrayError> {
        if view.len() != N {
            log::debug!(
                "Rejecting ndarray of length {} for {}",
                view.len(),
                <Self as crate::type_name::TypeName>::TYPE_NAME
            );
            return Err(ArrayError::LengthMismatch {
                expected: N,
                found: view.len(),
            });
        }
        Ok(Self::from_fn(|i| view[i]))
    }
}

impl<T: Numeric, const N: usize> From<NumericArray<T, N>> for Array1<T> {
    fn from(array: NumericArray<T, N>) -> Self {
        array.to_ndarray()
    }
}

impl<'a, T: Numeric, const N: usize> TryFrom<&'a Array1<T>> for NumericArray<T, N> {
    type Error = ArrayError;

    fn try_from(array: &'a Array1<T>) -> Result<Self, Self::Error> {
        Self::try_from_ndarray(array.view())
    }
}

macro_rules! refined_ndarray_interop {
    ($($name:ident => $elem:ty),*) => {
        $(
            impl<const N: usize> From<$name<N>> for Array1<$elem> {
                fn from(array: $name<N>) -> Self {
                    array.to_ndarray()
                }
            }

            impl<'a, const N: usize> TryFrom<&'a Array1<$elem>> for $name<N> {
                type Error = ArrayError;

                fn try_from(array: &'a Array1<$elem>) -> Result<Self, Self::Error> {
                    NumericArray::try_from_ndarray(array.view()).map(Self::from)
                }
            }
        )*
    };
}

refined_ndarray_interop!(
    FloatArray => f32,
    DoubleArray => f64,
    IntArray => i32,
    UIntArray => u32
);

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_round_trip_through_ndarray() {
        let a = DoubleArray::<3>::from_array([1.0, 2.0, 3.0]);
        let nd: Array1<f64> = a.into();
        assert_eq!(nd, array![1.0, 2.0, 3.0]);
        let back = DoubleArray::<3>::try_from(&nd).unwrap();
        assert_eq!(back, a);
    }

    #[test]
    fn test_length_must_match_exactly() {
        let nd = array![1, 2, 3, 4];
        let err = NumericArray::<i32, 3>::try_from(&nd).unwrap_err();
        assert_eq!(
            err,
            ArrayError::LengthMismatch {
                expected: 3,
                found: 4
            }
        );
    }

    #[test]
    fn test_from_strided_view() {
        let nd = array![0u32, 1, 2, 3, 4, 5];
        let evens = nd.slice(ndarray::s![..;2]);
        let a = UIntArray::<3>::from(NumericArray::<u32, 3>::try_from_ndarray(evens).unwrap());
        assert_eq!(a.to_array(), [0, 2, 4]);
    }
}
