//! Nullable conversions between Rust and **SQL** primitive kinds.
//!
//! # Kinds
//!
//! | Rust type                 | Logical token    | SQLite / MySQL / PostgreSQL column     |
//! |---------------------------|------------------|----------------------------------------|
//! | `bool`                    | `bool_null`      | BOOLEAN / BOOLEAN / boolean            |
//! | [`Byte`]                  | `byte_null`      | TINYINT UNSIGNED / BINARY / bytea      |
//! | `Vec<u8>`                 | `bytes_null`     | BLOB / BLOB / bytea                    |
//! | `f32`                     | `float32_null`   | FLOAT / FLOAT / real                   |
//! | `f64`                     | `float64_null`   | DOUBLE / DOUBLE / double precision     |
//! | `i8`                      | `int8_null`      | TINYINT / TINYINT / smallint           |
//! | `i16`                     | `int16_null`     | SMALLINT / SMALLINT / smallint         |
//! | `i32`                     | `int32_null`     | INT / INT / integer                    |
//! | `i64`                     | `int64_null`     | BIGINT / BIGINT / bigint               |
//! | `isize`                   | `int_null`       | BIGINT / BIGINT / bigint               |
//! | `u8`                      | `uint8_null`     | TINYINT UNSIGNED / … / bit(8)          |
//! | `u16`                     | `uint16_null`    | SMALLINT UNSIGNED / … / bit(16)        |
//! | `u32`                     | `uint32_null`    | INT UNSIGNED / … / numeric             |
//! | `u64`                     | `uint64_null`    | BIGINT UNSIGNED / … / bit(64)          |
//! | `usize`                   | `uint_null`      | BIGINT UNSIGNED / … / bit(64)          |
//! | `String`                  | `string_null`    | TEXT / TEXT / text                     |
//! | `time::OffsetDateTime`    | `timestamp_null` | DATETIME / TIMESTAMP NULL … / timestamp |
//!
//! #### Note: Unsigned integers
//!
//! PostgreSQL has no native unsigned column types. Unsigned kinds (except
//! `u32`, which uses a `numeric` column) are stored in `bit(N)` columns as
//! fixed-width bit-strings via [`crate::bits`], and every unsigned decode
//! accepts both the decimal and the bit-string form of the stored value.
//!
//! # Nullability
//!
//! [`Nullable<T>`] wraps any kind above and represents a potentially NULL
//! column. On the text side it serializes to the value's literal or `null`.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, Deserializer, Visitor};
use serde::ser::Serializer;

use crate::{
    dialect::Dialect,
    error::{DecodeError, EncodeError},
    value::Value,
};

macro_rules! forward_serde {
    () => {
        fn serialize<S: serde::Serializer>(
            &self,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            serde::Serialize::serialize(self, serializer)
        }

        fn deserialize<'de, D: serde::Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Self, D::Error> {
            serde::Deserialize::deserialize(deserializer)
        }
    };
}

mod bool;
mod byte;
mod bytes;
mod float;
mod int;
mod str;
mod time;
mod uint;

pub use byte::Byte;

/// A primitive kind that can live in a nullable SQL column.
///
/// Implementations form a closed set; the trait carries everything that
/// varies per kind so that [`Nullable<T>`] can stay a single generic
/// container.
pub trait SqlPrimitive: Sized {
    /// Backend-agnostic logical kind token, consumed by schema migration
    /// tooling for cross-backend type inference.
    const DATA_TYPE: &'static str;

    /// Physical column type for the given backend.
    fn column_type(dialect: Dialect) -> &'static str;

    /// Backend-neutral storage representation of a present value.
    fn encode(&self) -> Result<Value, EncodeError>;

    /// Storage representation for a specific backend. Kinds the backend
    /// stores natively fall through to [`SqlPrimitive::encode`].
    fn encode_for(&self, dialect: Dialect) -> Result<Value, EncodeError> {
        let _ = dialect;
        self.encode()
    }

    /// Coerce a non-NULL driver value into this kind.
    fn decode(value: &Value) -> Result<Self, DecodeError>;

    /// Serialize a present value; `null` is handled by [`Nullable`].
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error>;

    /// Deserialize a present (non-`null`) value.
    fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error>;
}

/// A value of kind `T` or an explicit SQL NULL.
///
/// The absent cell carries no residual value, so two absent cells of the same
/// kind always compare equal regardless of how they were produced, and
/// `Default` is the absent cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Nullable<T> {
    value: Option<T>,
}

impl<T> Nullable<T> {
    /// Construct from a present value or absence.
    pub fn new(value: Option<T>) -> Self {
        Nullable { value }
    }

    /// The absent cell.
    pub fn null() -> Self {
        Nullable { value: None }
    }

    /// Either `None` or a reference to the present value.
    pub fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Consume the cell, yielding the present value if any.
    pub fn into_inner(self) -> Option<T> {
        self.value
    }

    /// Replace the cell contents in place.
    pub fn set(&mut self, value: Option<T>) {
        self.value = value;
    }

    pub fn is_null(&self) -> bool {
        self.value.is_none()
    }
}

impl<T: SqlPrimitive> Nullable<T> {
    /// Backend-agnostic logical kind token, e.g. `"int64_null"`.
    pub fn data_type() -> &'static str {
        T::DATA_TYPE
    }

    /// Physical column type for the given backend.
    pub fn column_type(dialect: Dialect) -> &'static str {
        T::column_type(dialect)
    }

    /// Decode a driver value into a new cell. `Value::Null` produces the
    /// absent cell; anything else is coerced into `T`.
    pub fn from_value(value: &Value) -> Result<Self, DecodeError> {
        if value.is_null() {
            return Ok(Nullable::null());
        }
        T::decode(value).map(Nullable::from)
    }

    /// Decode a driver value into this cell in place.
    ///
    /// The replacement is built before the cell is touched: on error the
    /// cell keeps its previous contents.
    pub fn scan(&mut self, value: &Value) -> Result<(), DecodeError> {
        *self = Self::from_value(value)?;
        tracing::trace!(
            kind = T::DATA_TYPE,
            null = self.is_null(),
            "scanned driver value"
        );
        Ok(())
    }

    /// Backend-neutral storage representation: `Value::Null` when absent.
    pub fn to_value(&self) -> Result<Value, EncodeError> {
        match &self.value {
            None => Ok(Value::Null),
            Some(v) => v.encode(),
        }
    }

    /// Storage representation for a specific backend. Differs from
    /// [`Nullable::to_value`] only for kinds the backend cannot store
    /// natively, such as unsigned integers on PostgreSQL.
    pub fn to_value_for(&self, dialect: Dialect) -> Result<Value, EncodeError> {
        match &self.value {
            None => Ok(Value::Null),
            Some(v) => v.encode_for(dialect),
        }
    }
}

impl<T> From<T> for Nullable<T> {
    fn from(value: T) -> Self {
        Nullable { value: Some(value) }
    }
}

impl<T> From<Option<T>> for Nullable<T> {
    fn from(value: Option<T>) -> Self {
        Nullable { value }
    }
}

impl<T> From<Nullable<T>> for Option<T> {
    fn from(cell: Nullable<T>) -> Self {
        cell.value
    }
}

impl<T: SqlPrimitive> serde::Serialize for Nullable<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match &self.value {
            None => serializer.serialize_none(),
            Some(v) => serializer.serialize_some(&Present(v)),
        }
    }
}

struct Present<'a, T>(&'a T);

impl<T: SqlPrimitive> serde::Serialize for Present<'_, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        SqlPrimitive::serialize(self.0, serializer)
    }
}

impl<'de, T: SqlPrimitive> serde::Deserialize<'de> for Nullable<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct NullableVisitor<T>(PhantomData<T>);

        impl<'de, T: SqlPrimitive> Visitor<'de> for NullableVisitor<T> {
            type Value = Nullable<T>;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a nullable primitive value")
            }

            fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(Nullable::null())
            }

            fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(Nullable::null())
            }

            fn visit_some<D: Deserializer<'de>>(
                self,
                deserializer: D,
            ) -> Result<Self::Value, D::Error> {
                <T as SqlPrimitive>::deserialize(deserializer).map(Nullable::from)
            }
        }

        deserializer.deserialize_option(NullableVisitor(PhantomData))
    }
}
