//! Integration tests for construction, assignment and value semantics of the
//! numeric array types.

use std::ops::Index;

use nalgebra::{Matrix3, SVector, Vector3};
use numeric_arrays::{DoubleArray, FloatArray, IntArray, NumericArray, UIntArray};

/// A subscriptable source that computes its elements.
struct Halves([f32; 8]);

impl Halves {
    fn new() -> Self {
        let mut values = [0.0f32; 8];
        for (i, v) in values.iter_mut().enumerate() {
            *v = i as f32 * 0.5;
        }
        Halves(values)
    }
}

impl Index<usize> for Halves {
    type Output = f32;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

// ---------------------------------------------------------------------------
// Length
// ---------------------------------------------------------------------------

#[test]
fn every_type_reports_its_length() {
    assert_eq!(NumericArray::<f64, 5>::zeros().len(), 5);
    assert_eq!(NumericArray::<u8, 1>::LEN, 1);
    assert_eq!(FloatArray::<4>::zeros().len(), 4);
    assert_eq!(DoubleArray::<3>::LEN, 3);
    assert_eq!(IntArray::<7>::zeros().iter().count(), 7);
    assert_eq!(UIntArray::<2>::zeros().into_iter().count(), 2);
}

// ---------------------------------------------------------------------------
// Construction from a raw buffer
// ---------------------------------------------------------------------------

#[test]
fn double_array_from_buffer() {
    let buffer = [1.0, 2.0, 3.0];
    let a = DoubleArray::<3>::from_slice(&buffer);
    assert_eq!(a[0], 1.0);
    assert_eq!(a[1], 2.0);
    assert_eq!(a[2], 3.0);
}

#[test]
fn buffer_round_trip_for_several_lengths() {
    let buffer: Vec<i32> = (0..16).map(|i| i * i - 7).collect();

    let a = IntArray::<1>::from_slice(&buffer);
    assert_eq!(a.to_vec(), buffer[..1].to_vec());
    let b = IntArray::<9>::from_slice(&buffer);
    assert_eq!(b.to_vec(), buffer[..9].to_vec());
    let c = NumericArray::<i32, 16>::from_slice(&buffer);
    assert_eq!(c.to_vec(), buffer);
}

#[test]
fn try_from_slice_rejects_short_buffer() {
    assert!(UIntArray::<4>::try_from_slice(&[1, 2, 3]).is_err());
    assert!(UIntArray::<4>::try_from_slice(&[1, 2, 3, 4]).is_ok());
}

// ---------------------------------------------------------------------------
// Construction from a subscriptable source
// ---------------------------------------------------------------------------

#[test]
fn float_array_from_subscriptable_source() {
    let a = FloatArray::<4>::from_indexable(&Halves::new());
    assert_eq!(a.to_array(), [0.0, 0.5, 1.0, 1.5]);
}

#[test]
fn subscriptable_source_converts_elements() {
    let source: Vec<u8> = vec![3, 1, 4, 1, 5];
    let a = NumericArray::<f64, 5>::from_indexable(&source);
    assert_eq!(a.to_array(), [3.0, 1.0, 4.0, 1.0, 5.0]);

    let b = IntArray::<3>::from_indexable(&[1.9f64, -1.9, 0.2][..]);
    assert_eq!(b.to_array(), [1, -1, 0]);
}

#[test]
fn from_fn_matches_computed_source() {
    let a = FloatArray::<4>::from_fn(|i| i as f32 * 0.5);
    assert_eq!(a, FloatArray::<4>::from_indexable(&Halves::new()));
}

// ---------------------------------------------------------------------------
// Expression assignment
// ---------------------------------------------------------------------------

#[test]
fn sum_of_two_arrays() {
    let a = DoubleArray::<2>::from_array([1.0, 2.0]);
    let b = DoubleArray::<2>::from_array([10.0, 20.0]);
    let c: DoubleArray<2> = a + b;
    assert_eq!(c.to_array(), [11.0, 22.0]);
}

#[test]
fn elementwise_sum_matches_host_semantics() {
    let a = NumericArray::<f64, 6>::from_fn(|i| i as f64 * 1.5);
    let b = NumericArray::<f64, 6>::from_fn(|i| 10.0 - i as f64);
    let c = a + b;
    let host: SVector<f64, 6> = a.into_inner() + b.into_inner();
    for i in 0..6 {
        assert_eq!(c[i], a[i] + b[i]);
        assert_eq!(c[i], host[i]);
    }
}

#[test]
fn scalar_multiplication_in_place() {
    let mut a = DoubleArray::<3>::from_array([1.0, 2.0, 3.0]);
    a = 2.0 * a;
    assert_eq!(a.to_array(), [2.0, 4.0, 6.0]);
}

#[test]
fn assign_from_host_expressions() {
    let m = Matrix3::new(2.0, 0.0, 0.0, 0.0, 3.0, 0.0, 0.0, 0.0, 4.0);
    let v = Vector3::new(1.0, 1.0, 1.0);

    let mut a = DoubleArray::<3>::zeros();
    a.assign(&(m * v));
    assert_eq!(a.to_array(), [2.0, 3.0, 4.0]);

    a.assign(&m.column(2));
    assert_eq!(a.to_array(), [0.0, 0.0, 4.0]);

    let mut b = NumericArray::<f64, 2>::zeros();
    b.assign(&v.fixed_rows::<2>(1));
    assert_eq!(b.to_array(), [1.0, 1.0]);
}

#[test]
fn host_operations_are_reachable() {
    let a = DoubleArray::<3>::from_array([3.0, 0.0, 4.0]);
    assert_eq!(a.norm(), 5.0);
    assert_eq!(a.sum(), 7.0);
    assert_eq!(a.dot(a.as_vector()), 25.0);
}

// ---------------------------------------------------------------------------
// Value semantics
// ---------------------------------------------------------------------------

#[test]
fn copies_are_independent() {
    let original = IntArray::<3>::from_array([1, 2, 3]);
    let mut copy = original;
    copy[0] = 100;
    assert_eq!(original.to_array(), [1, 2, 3]);
    assert_eq!(copy.to_array(), [100, 2, 3]);

    let generic = NumericArray::<f32, 2>::from_array([1.0, 2.0]);
    let mut cloned = generic.clone();
    cloned *= 3.0;
    assert_eq!(generic.to_array(), [1.0, 2.0]);
    assert_eq!(cloned.to_array(), [3.0, 6.0]);
}

#[test]
fn refinements_convert_to_and_from_generic_form() {
    let a = UIntArray::<3>::from_array([7, 8, 9]);
    let generic: NumericArray<u32, 3> = a.into();
    let back: UIntArray<3> = generic.into();
    assert_eq!(back, a);

    let host: SVector<u32, 3> = back.into();
    assert_eq!(host, SVector::<u32, 3>::new(7, 8, 9));
}

#[test]
fn subscript_mutation() {
    let mut a = FloatArray::<3>::zeros();
    for (i, v) in a.iter_mut().enumerate() {
        *v = i as f32;
    }
    a[2] = 10.0;
    assert_eq!(a.to_array(), [0.0, 1.0, 10.0]);
}
