//! Serialization and interop with other array libraries.
pub mod ndarray_interop;
pub mod serialization;

pub use serialization::Tagged;
