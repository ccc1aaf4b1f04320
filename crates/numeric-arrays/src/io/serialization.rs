//! serde support for the array types.
//!
//! Arrays serialize as fixed-length tuples of their elements. [`Tagged`] adds
//! the reflected type name next to the values so a reader can check it got the
//! array type it expected.
use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{SerializeStruct, SerializeTuple, Serializer};
use serde::{Deserialize, Serialize};

use crate::error::ArrayError;
use crate::math::{Numeric, NumericArray};
use crate::type_name::{TypeName, TypeNameBuf};

impl<T, const N: usize> Serialize for NumericArray<T, N>
where
    T: Numeric + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut tuple = serializer.serialize_tuple(N)?;
        for value in self.iter() {
            tuple.serialize_element(value)?;
        }
        tuple.end()
    }
}

struct NumericArrayVisitor<T, const N: usize>(PhantomData<T>);

impl<'de, T, const N: usize> Visitor<'de> for NumericArrayVisitor<T, N>
where
    T: Numeric + Deserialize<'de>,
{
    type Value = NumericArray<T, N>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a sequence of {} {} values", N, T::TYPE_NAME)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut array = NumericArray::zeros();
        for i in 0..N {
            array[i] = seq
                .next_element()?
                .ok_or_else(|| de::Error::invalid_length(i, &self))?;
        }
        Ok(array)
    }
}

impl<'de, T, const N: usize> Deserialize<'de> for NumericArray<T, N>
where
    T: Numeric + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_tuple(N, NumericArrayVisitor::<T, N>(PhantomData))
    }
}

/// An array serialized together with its reflected type name.
///
/// ```
/// use numeric_arrays::{DoubleArray, Tagged};
///
/// let json = serde_json::to_string(&Tagged(DoubleArray::<2>::from_array([1.0, 2.0]))).unwrap();
/// assert_eq!(json, r#"{"type":"CArrayDouble<2>","values":[1.0,2.0]}"#);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tagged<A>(pub A);

impl<A: TypeName> Tagged<A> {
    pub fn type_name(&self) -> TypeNameBuf {
        A::TYPE_NAME
    }

    pub fn into_inner(self) -> A {
        self.0
    }
}

impl<A> Serialize for Tagged<A>
where
    A: TypeName + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Tagged", 2)?;
        state.serialize_field("type", A::TYPE_NAME.as_str())?;
        state.serialize_field("values", &self.0)?;
        state.end()
    }
}

#[derive(Deserialize)]
#[serde(field_identifier, rename_all = "lowercase")]
enum TaggedField {
    Type,
    Values,
}

fn check_type_name<A, E>(found: String) -> Result<(), E>
where
    A: TypeName,
    E: de::Error,
{
    if A::TYPE_NAME == found.as_str() {
        return Ok(());
    }
    let err = ArrayError::TypeMismatch {
        expected: A::TYPE_NAME.to_string(),
        found,
    };
    log::warn!("Rejecting tagged array: {}", err);
    Err(E::custom(err))
}

/// Reads the name before the values, so a mismatch is reported as such even
/// when the stored values would not decode as `A`.
struct TaggedVisitor<A>(PhantomData<A>);

impl<'de, A> Visitor<'de> for TaggedVisitor<A>
where
    A: TypeName + Deserialize<'de>,
{
    type Value = Tagged<A>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a tagged {} array", A::TYPE_NAME)
    }

    fn visit_seq<S>(self, mut seq: S) -> Result<Self::Value, S::Error>
    where
        S: SeqAccess<'de>,
    {
        let found: String = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(0, &self))?;
        check_type_name::<A, _>(found)?;
        let values = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(1, &self))?;
        Ok(Tagged(values))
    }

    fn visit_map<M>(self, mut map: M) -> Result<Self::Value, M::Error>
    where
        M: MapAccess<'de>,
    {
        let mut checked = false;
        let mut values: Option<A> = None;
        // `values` seen before `type` is held undecoded until the name is known.
        let mut pending: Option<serde_json::Value> = None;

        while let Some(field) = map.next_key()? {
            match field {
                TaggedField::Type => {
                    if checked {
                        return Err(de::Error::duplicate_field("type"));
                    }
                    check_type_name::<A, _>(map.next_value()?)?;
                    checked = true;
                }
                TaggedField::Values => {
                    if values.is_some() || pending.is_some() {
                        return Err(de::Error::duplicate_field("values"));
                    }
                    if checked {
                        values = Some(map.next_value()?);
                    } else {
                        pending = Some(map.next_value()?);
                    }
                }
            }
        }

        if !checked {
            return Err(de::Error::missing_field("type"));
        }
        match (values, pending) {
            (Some(values), _) => Ok(Tagged(values)),
            (None, Some(raw)) => A::deserialize(raw).map(Tagged).map_err(de::Error::custom),
            (None, None) => Err(de::Error::missing_field("values")),
        }
    }
}

impl<'de, A> Deserialize<'de> for Tagged<A>
where
    A: TypeName + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_struct(
            "Tagged",
            &["type", "values"],
            TaggedVisitor::<A>(PhantomData),
        )
    }
}
