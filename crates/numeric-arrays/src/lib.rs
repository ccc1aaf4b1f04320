//! numeric-arrays: fixed-size numeric arrays that are also nalgebra vectors.
//!
//! `NumericArray<T, N>` wraps an `nalgebra::SVector<T, N>` and can be handed
//! both to linear-algebra code (through `Deref` and the arithmetic operators)
//! and to generic code that only needs `Index<usize>` and a compile-time
//! length. `FloatArray`, `DoubleArray`, `IntArray` and `UIntArray` fix the
//! element type. Every array type reports a canonical name at compile time
//! (`CArrayDouble<3>`, `CArrayNumeric<int,5>`, ...) through [`TypeName`],
//! which the serde support uses to tag stored arrays.
pub mod config;
pub mod error;
pub mod io;
pub mod math;
pub mod type_name;

pub use config::FormatConfig;
pub use error::ArrayError;
pub use io::Tagged;
pub use math::{DoubleArray, FloatArray, IntArray, Numeric, NumericArray, UIntArray};
pub use type_name::{type_name, TypeName, TypeNameBuf};
