//! Fixed-size numeric arrays backed by nalgebra column vectors.
//!
//! `NumericArray<T, N>` is the generic form; `FloatArray`, `DoubleArray`,
//! `IntArray` and `UIntArray` fix the element type. All of them are `Copy`,
//! store their elements inline and reach the nalgebra vector API through
//! `Deref`.
pub mod array;
pub mod ops;
pub mod refined;
pub mod scalar;

pub use array::NumericArray;
pub use refined::{DoubleArray, FloatArray, IntArray, UIntArray};
pub use scalar::Numeric;
