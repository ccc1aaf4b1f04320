//! Compile-time type names used as serialization keys and in diagnostics.
//!
//! Names are assembled by const evaluation into a fixed-capacity buffer, so
//! `<A as TypeName>::TYPE_NAME` is an ordinary constant and never allocates.
//! A name longer than [`TYPE_NAME_CAPACITY`] fails const evaluation.
use std::fmt;
use std::ops::Deref;

/// Maximum length in bytes of a reflected type name.
pub const TYPE_NAME_CAPACITY: usize = 64;

/// A const-constructible string holding a reflected type name.
#[derive(Clone, Copy)]
pub struct TypeNameBuf {
    bytes: [u8; TYPE_NAME_CAPACITY],
    len: usize,
}

impl TypeNameBuf {
    pub const fn new() -> Self {
        Self {
            bytes: [0; TYPE_NAME_CAPACITY],
            len: 0,
        }
    }

    pub const fn literal(s: &str) -> Self {
        Self::new().push_str(s)
    }

    pub const fn push_str(self, s: &str) -> Self {
        self.push_bytes(s.as_bytes(), s.len())
    }

    /// Appends another reflected name.
    pub const fn push(self, other: TypeNameBuf) -> Self {
        self.push_bytes(&other.bytes, other.len)
    }

    /// Appends the base-10 rendering of `value`, `0` for zero.
    pub const fn push_decimal(mut self, mut value: usize) -> Self {
        if value == 0 {
            return self.push_str("0");
        }
        let mut digits = [0u8; 20];
        let mut count = 0;
        while value > 0 {
            digits[count] = b'0' + (value % 10) as u8;
            value /= 10;
            count += 1;
        }
        assert!(
            self.len + count <= TYPE_NAME_CAPACITY,
            "type name exceeds TYPE_NAME_CAPACITY"
        );
        while count > 0 {
            count -= 1;
            self.bytes[self.len] = digits[count];
            self.len += 1;
        }
        self
    }

    const fn push_bytes(mut self, src: &[u8], len: usize) -> Self {
        assert!(
            self.len + len <= TYPE_NAME_CAPACITY,
            "type name exceeds TYPE_NAME_CAPACITY"
        );
        let mut i = 0;
        while i < len {
            self.bytes[self.len + i] = src[i];
            i += 1;
        }
        self.len += len;
        self
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub const fn as_str(&self) -> &str {
        // Only whole `&str` values and ASCII digits are ever pushed.
        match std::str::from_utf8(self.bytes.split_at(self.len).0) {
            Ok(s) => s,
            Err(_) => panic!("type name is not valid UTF-8"),
        }
    }

    /// Byte-wise comparison usable in const assertions.
    pub const fn eq_str(&self, other: &str) -> bool {
        let other = other.as_bytes();
        if other.len() != self.len {
            return false;
        }
        let mut i = 0;
        while i < self.len {
            if self.bytes[i] != other[i] {
                return false;
            }
            i += 1;
        }
        true
    }
}

impl Default for TypeNameBuf {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for TypeNameBuf {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl PartialEq for TypeNameBuf {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for TypeNameBuf {}

impl PartialEq<str> for TypeNameBuf {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for TypeNameBuf {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl fmt::Display for TypeNameBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for TypeNameBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

/// Types with a canonical textual name.
pub trait TypeName {
    const TYPE_NAME: TypeNameBuf;
}

/// Returns the reflected name of `A`; usable in `const` items.
///
/// ```
/// use numeric_arrays::{type_name, DoubleArray, TypeNameBuf};
///
/// const NAME: TypeNameBuf = type_name::<DoubleArray<3>>();
/// const _: () = assert!(NAME.eq_str("CArrayDouble<3>"));
/// assert_eq!(NAME, "CArrayDouble<3>");
/// ```
pub const fn type_name<A: TypeName>() -> TypeNameBuf {
    A::TYPE_NAME
}

macro_rules! element_type_name {
    ($($ty:ty => $name:literal),* $(,)?) => {
        $(
            impl TypeName for $ty {
                const TYPE_NAME: TypeNameBuf = TypeNameBuf::literal($name);
            }
        )*
    };
}

element_type_name! {
    f32 => "float",
    f64 => "double",
    i8 => "int8_t",
    i16 => "int16_t",
    i32 => "int",
    i64 => "int64_t",
    u8 => "uint8_t",
    u16 => "uint16_t",
    u32 => "unsigned int",
    u64 => "uint64_t",
}
