use crate::{
    dialect::Dialect,
    error::{DecodeError, EncodeError},
    types::SqlPrimitive,
    value::Value,
};

/// A single byte stored as a one-byte binary column.
///
/// Distinct from `u8`, which is the 8-bit unsigned *integer* kind: a `Byte`
/// column holds raw binary data, not a number, so the two map to different
/// column types and storage representations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Byte(pub u8);

impl From<u8> for Byte {
    fn from(value: u8) -> Self {
        Byte(value)
    }
}

impl SqlPrimitive for Byte {
    const DATA_TYPE: &'static str = "byte_null";

    fn column_type(dialect: Dialect) -> &'static str {
        match dialect {
            Dialect::Sqlite => "TINYINT UNSIGNED",
            Dialect::Mysql => "BINARY",
            Dialect::Postgres => "bytea",
        }
    }

    fn encode(&self) -> Result<Value, EncodeError> {
        Ok(Value::Blob(vec![self.0]))
    }

    fn decode(value: &Value) -> Result<Self, DecodeError> {
        // Some backends hand the column back as an integer; everything else
        // arrives as a buffer whose first byte is the value.
        if let Value::Integer(v) = value {
            return Ok(Byte(*v as u8));
        }
        let buffer = value.blob()?;
        match buffer.first() {
            Some(b) => Ok(Byte(*b)),
            None => Err(DecodeError::Parse("empty buffer for byte column".into())),
        }
    }

    forward_serde!();
}
