use std::fmt;
use std::ops::{Deref, DerefMut, Index, IndexMut, Range};

use nalgebra::{ArrayStorage, Const, Matrix, RawStorage, SVector, U1};
use num_traits::AsPrimitive;
use rand::distributions::uniform::SampleUniform;
use rand::distributions::{Distribution, Standard};
use rand::Rng;

use crate::config::{FormatConfig, FormattedArray};
use crate::error::ArrayError;
use crate::math::Numeric;
use crate::type_name::{TypeName, TypeNameBuf};

/// A fixed-size numeric array that is also an nalgebra column vector.
///
/// The whole `SVector<T, N>` surface (`len`, `iter`, `dot`, `norm`, `sum`, ...)
/// is reachable through `Deref`; the array adds buffer/indexable construction,
/// assignment from any `N×1` nalgebra expression and a reflected type name.
///
/// ```
/// use nalgebra::Matrix3;
/// use numeric_arrays::NumericArray;
///
/// let m = Matrix3::new(1.0, 0.0, 0.0, 0.0, 2.0, 0.0, 0.0, 0.0, 3.0);
/// let v = NumericArray::<f64, 3>::from_array([1.0, 1.0, 1.0]);
///
/// let mut out = NumericArray::<f64, 3>::zeros();
/// out.assign(&(m * v.as_vector()));
/// assert_eq!(out.to_array(), [1.0, 2.0, 3.0]);
/// assert_eq!(out.len(), 3);
/// ```
///
/// Building from an arbitrary indexable source always takes an explicit call
/// to [`from_indexable`](Self::from_indexable); no `From`/`Into` exists for it:
///
/// ```compile_fail
/// use numeric_arrays::NumericArray;
///
/// let _: NumericArray<f64, 3> = vec![1.0, 2.0, 3.0].into();
/// ```
///
/// The length must be positive, checked when the type is used:
///
/// ```compile_fail
/// use numeric_arrays::NumericArray;
///
/// let _ = NumericArray::<f64, 0>::zeros();
/// ```
#[derive(Clone, Copy, Debug)]
pub struct NumericArray<T, const N: usize>(SVector<T, N>);

impl<T: Numeric, const N: usize> NumericArray<T, N> {
    const NON_EMPTY: () = assert!(N > 0, "numeric arrays need at least one element");

    /// Number of elements.
    pub const LEN: usize = N;

    const fn wrap(vector: SVector<T, N>) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::NON_EMPTY;
        Self(vector)
    }

    /// Zero-filled array; also what `Default` returns.
    pub fn zeros() -> Self {
        Self::wrap(SVector::zeros())
    }

    pub fn from_element(value: T) -> Self {
        Self::wrap(SVector::from_element(value))
    }

    pub const fn from_array(values: [T; N]) -> Self {
        Self::wrap(SVector::from_array_storage(ArrayStorage([values])))
    }

    /// Element `i` is `f(i)`.
    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self::wrap(SVector::from_fn(|i, _| f(i)))
    }

    /// Copies the first `N` elements of `values`.
    ///
    /// Panics when `values` holds fewer than `N` elements; see
    /// [`try_from_slice`](Self::try_from_slice) for the fallible form.
    pub fn from_slice(values: &[T]) -> Self {
        assert!(
            values.len() >= N,
            "from_slice needs at least {} elements, got {}",
            N,
            values.len()
        );
        Self::from_fn(|i| values[i])
    }

    pub fn try_from_slice(values: &[T]) -> Result<Self, ArrayError> {
        if values.len() < N {
            log::debug!(
                "Rejecting buffer of {} elements for {}",
                values.len(),
                Self::TYPE_NAME
            );
            return Err(ArrayError::LengthMismatch {
                expected: N,
                found: values.len(),
            });
        }
        Ok(Self::from_fn(|i| values[i]))
    }

    /// Builds the array from anything implementing `Index<usize>`, converting
    /// each of `source[0..N]` with `as` semantics.
    ///
    /// ```
    /// use numeric_arrays::NumericArray;
    ///
    /// let source = vec![1i32, 2, 3, 4];
    /// let a = NumericArray::<f64, 3>::from_indexable(&source);
    /// assert_eq!(a.to_array(), [1.0, 2.0, 3.0]);
    /// ```
    pub fn from_indexable<S, U>(source: &S) -> Self
    where
        S: Index<usize, Output = U> + ?Sized,
        U: AsPrimitive<T>,
    {
        Self::from_fn(|i| source[i].as_())
    }

    /// Evaluates any `N×1` nalgebra expression (owned vector, view, column).
    pub fn from_matrix<S>(expr: &Matrix<T, Const<N>, U1, S>) -> Self
    where
        S: RawStorage<T, Const<N>, U1>,
    {
        Self::from_fn(|i| expr[i])
    }

    /// Replaces every element with the evaluation of `expr`.
    ///
    /// The shape is checked by the compiler:
    ///
    /// ```compile_fail
    /// use nalgebra::Vector3;
    /// use numeric_arrays::NumericArray;
    ///
    /// let mut a = NumericArray::<f64, 4>::zeros();
    /// a.assign(&Vector3::new(1.0, 2.0, 3.0));
    /// ```
    pub fn assign<S>(&mut self, expr: &Matrix<T, Const<N>, U1, S>) -> &mut Self
    where
        S: RawStorage<T, Const<N>, U1>,
    {
        self.0.copy_from(expr);
        self
    }

    /// Element-wise `as` conversion to another numeric type.
    pub fn convert<U>(&self) -> NumericArray<U, N>
    where
        T: AsPrimitive<U>,
        U: Numeric,
    {
        NumericArray::from_fn(|i| self.0[i].as_())
    }

    /// Samples each element from rand's `Standard` distribution.
    pub fn random_using<R>(rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
        Standard: Distribution<T>,
    {
        Self::from_fn(|_| rng.gen())
    }

    /// Samples each element uniformly from `range`. Panics on an empty range.
    pub fn random_range_using<R>(rng: &mut R, range: Range<T>) -> Self
    where
        R: Rng + ?Sized,
        T: SampleUniform,
    {
        Self::from_fn(|_| rng.gen_range(range.clone()))
    }

    pub fn as_vector(&self) -> &SVector<T, N> {
        &self.0
    }

    pub fn as_vector_mut(&mut self) -> &mut SVector<T, N> {
        &mut self.0
    }

    pub fn into_inner(self) -> SVector<T, N> {
        self.0
    }

    pub fn to_array(self) -> [T; N] {
        let [column] = self.0.data.0;
        column
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.0.as_slice().to_vec()
    }

    pub fn display_with<'a>(&'a self, config: &'a FormatConfig) -> FormattedArray<'a, T> {
        FormattedArray::new(self.0.as_slice(), config)
    }
}

impl<T: Numeric, const N: usize> Default for NumericArray<T, N> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<T: Numeric, const N: usize> PartialEq for NumericArray<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.0.as_slice() == other.0.as_slice()
    }
}

impl<T: Numeric, const N: usize> Deref for NumericArray<T, N> {
    type Target = SVector<T, N>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T: Numeric, const N: usize> DerefMut for NumericArray<T, N> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T: Numeric, const N: usize> Index<usize> for NumericArray<T, N> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<T: Numeric, const N: usize> IndexMut<usize> for NumericArray<T, N> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

impl<T: Numeric, const N: usize> From<[T; N]> for NumericArray<T, N> {
    fn from(values: [T; N]) -> Self {
        Self::from_array(values)
    }
}

impl<T: Numeric, const N: usize> From<SVector<T, N>> for NumericArray<T, N> {
    fn from(vector: SVector<T, N>) -> Self {
        Self::wrap(vector)
    }
}

impl<T: Numeric, const N: usize> From<NumericArray<T, N>> for SVector<T, N> {
    fn from(array: NumericArray<T, N>) -> Self {
        array.0
    }
}

impl<T: Numeric, const N: usize> From<NumericArray<T, N>> for [T; N] {
    fn from(array: NumericArray<T, N>) -> Self {
        array.to_array()
    }
}

impl<T: Numeric, const N: usize> IntoIterator for NumericArray<T, N> {
    type Item = T;
    type IntoIter = std::array::IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.to_array().into_iter()
    }
}

impl<'a, T: Numeric, const N: usize> IntoIterator for &'a NumericArray<T, N> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.as_slice().iter()
    }
}

impl<'a, T: Numeric, const N: usize> IntoIterator for &'a mut NumericArray<T, N> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.as_mut_slice().iter_mut()
    }
}

impl<T: Numeric, const N: usize> TypeName for NumericArray<T, N> {
    const TYPE_NAME: TypeNameBuf = TypeNameBuf::literal("CArrayNumeric<")
        .push(T::TYPE_NAME)
        .push_str(",")
        .push_decimal(N)
        .push_str(">");
}

/// Renders as `[a, b, c]`, the same text as a default [`FormatConfig`].
impl<T: Numeric, const N: usize> fmt::Display for NumericArray<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (idx, value) in self.0.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::{Matrix3, Vector3};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_from_slice_ignores_extra_elements() {
        let a = NumericArray::<f64, 2>::from_slice(&[1.0, 2.0, 3.0]);
        assert_eq!(a.to_array(), [1.0, 2.0]);
    }

    #[test]
    #[should_panic(expected = "at least 3 elements")]
    fn test_from_slice_short_buffer_panics() {
        let _ = NumericArray::<f64, 3>::from_slice(&[1.0, 2.0]);
    }

    #[test]
    fn test_try_from_slice_reports_length() {
        let err = NumericArray::<i32, 4>::try_from_slice(&[1, 2]).unwrap_err();
        assert_eq!(
            err,
            ArrayError::LengthMismatch {
                expected: 4,
                found: 2
            }
        );
    }

    #[test]
    fn test_from_matrix_column_view() {
        let m = Matrix3::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0);
        let col = NumericArray::<f64, 3>::from_matrix(&m.column(1));
        assert_eq!(col.to_array(), [2.0, 5.0, 8.0]);
    }

    #[test]
    fn test_assign_chains() {
        let mut a = NumericArray::<f32, 3>::zeros();
        a.assign(&Vector3::new(1.0, 2.0, 3.0))[0] = 10.0;
        assert_eq!(a.to_array(), [10.0, 2.0, 3.0]);
    }

    #[test]
    fn test_convert_truncates_like_as() {
        let a = NumericArray::<f64, 3>::from_array([1.9, -2.5, 3.0]);
        let b: NumericArray<i32, 3> = a.convert();
        assert_eq!(b.to_array(), [1, -2, 3]);
    }

    #[test]
    fn test_random_is_deterministic_for_seed() {
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);
        let a = NumericArray::<f64, 8>::random_using(&mut rng1);
        let b = NumericArray::<f64, 8>::random_using(&mut rng2);
        assert_eq!(a, b);
        assert!(a.iter().all(|v| (0.0..1.0).contains(v)));
    }

    #[test]
    fn test_random_range_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let a = NumericArray::<i32, 16>::random_range_using(&mut rng, -3..3);
        assert!(a.iter().all(|v| (-3..3).contains(v)));
    }

    #[test]
    fn test_display() {
        let a = NumericArray::<i32, 3>::from_array([1, 2, 3]);
        assert_eq!(a.to_string(), "[1, 2, 3]");
    }

    #[test]
    fn test_display_matches_default_config() {
        let a = NumericArray::<f64, 3>::from_array([1.5, -0.25, 2.0]);
        assert_eq!(
            a.to_string(),
            a.display_with(&FormatConfig::default()).to_string()
        );
        assert_eq!(NumericArray::<u8, 1>::from_array([7]).to_string(), "[7]");
    }
}
