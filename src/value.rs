//! The driver-side value representation and the scalar coercion table.
//!
//! [`Value`] is a closed enumeration of everything a database driver may hand
//! back for a single column: the NULL sentinel or one of six typed payloads.
//! The accessor methods implement the promotion table a conventional SQL
//! client library applies when a column's concrete representation does not
//! match the kind the caller asked for — a logically 8-bit integer column may
//! arrive as a 64-bit integer, a decimal string, or a byte buffer, depending
//! on the backend and driver.
//!
//! Each accessor either produces the requested kind or fails with
//! [`DecodeError::Conversion`]; no rule is ever applied silently outside this
//! table.

use time::format_description::well_known::Rfc3339;
use time::macros::format_description as fd;
use time::{OffsetDateTime, PrimitiveDateTime};

use crate::error::DecodeError;

/// A single column value as produced by a database driver.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Integer(i64),
    Real(f64),
    Text(String),
    Blob(Vec<u8>),
    Datetime(OffsetDateTime),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Name of the concrete representation, for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Integer(_) => "integer",
            Value::Real(_) => "real",
            Value::Text(_) => "text",
            Value::Blob(_) => "blob",
            Value::Datetime(_) => "datetime",
        }
    }

    fn conversion(&self, to: &'static str) -> DecodeError {
        DecodeError::Conversion {
            from: self.type_name(),
            to,
        }
    }

    /// Coerce to a 64-bit signed integer. Decimal strings and byte buffers
    /// are parsed; floats are not silently rounded.
    pub fn int64(&self) -> Result<i64, DecodeError> {
        match self {
            Value::Integer(v) => Ok(*v),
            Value::Text(v) => Ok(v.parse()?),
            Value::Blob(v) => Ok(std::str::from_utf8(v)
                .map_err(|e| DecodeError::Parse(e.to_string()))?
                .parse()?),
            _ => Err(self.conversion("integer")),
        }
    }

    /// Coerce to a 64-bit float. Integers widen; strings parse.
    pub fn real(&self) -> Result<f64, DecodeError> {
        match self {
            Value::Real(v) => Ok(*v),
            Value::Integer(v) => Ok(*v as f64),
            Value::Text(v) => Ok(v.parse()?),
            Value::Blob(v) => Ok(std::str::from_utf8(v)
                .map_err(|e| DecodeError::Parse(e.to_string()))?
                .parse()?),
            _ => Err(self.conversion("real")),
        }
    }

    /// Coerce to text. Numeric values format as decimal literals, byte
    /// buffers must be valid UTF-8, datetimes format as RFC 3339.
    pub fn text(&self) -> Result<String, DecodeError> {
        match self {
            Value::Text(v) => Ok(v.clone()),
            Value::Blob(v) => Ok(String::from_utf8(v.clone())?),
            Value::Integer(v) => Ok(v.to_string()),
            Value::Real(v) => Ok(v.to_string()),
            Value::Bool(v) => Ok(v.to_string()),
            Value::Datetime(v) => v
                .format(&Rfc3339)
                .map_err(|e| DecodeError::Parse(e.to_string())),
            Value::Null => Err(self.conversion("text")),
        }
    }

    /// Coerce to a byte buffer. Text converts to its bytes; numeric values
    /// to their decimal literal bytes.
    pub fn blob(&self) -> Result<Vec<u8>, DecodeError> {
        match self {
            Value::Blob(v) => Ok(v.clone()),
            Value::Text(v) => Ok(v.clone().into_bytes()),
            Value::Integer(v) => Ok(v.to_string().into_bytes()),
            Value::Real(v) => Ok(v.to_string().into_bytes()),
            _ => Err(self.conversion("blob")),
        }
    }

    /// Coerce to a boolean. Integers must be exactly 0 or 1; text must be
    /// one of `true`, `false`, `1`, `0`.
    pub fn bool(&self) -> Result<bool, DecodeError> {
        match self {
            Value::Bool(v) => Ok(*v),
            Value::Integer(0) => Ok(false),
            Value::Integer(1) => Ok(true),
            Value::Text(v) => match v.as_str() {
                "true" | "1" => Ok(true),
                "false" | "0" => Ok(false),
                _ => Err(DecodeError::Parse(format!("invalid boolean: {v}"))),
            },
            _ => Err(self.conversion("bool")),
        }
    }

    /// Coerce to a datetime. Text parses as RFC 3339 or as a space- or
    /// T-separated `YYYY-MM-DD HH:MM:SS[.subsecond]` value assumed to be in
    /// UTC; integers are Unix timestamps.
    pub fn datetime(&self) -> Result<OffsetDateTime, DecodeError> {
        match self {
            Value::Datetime(v) => Ok(*v),
            Value::Text(v) => datetime_from_text(v),
            Value::Blob(v) => {
                datetime_from_text(std::str::from_utf8(v).map_err(|e| {
                    DecodeError::Parse(e.to_string())
                })?)
            }
            Value::Integer(v) => OffsetDateTime::from_unix_timestamp(*v)
                .map_err(|e| DecodeError::Range(e.to_string())),
            _ => Err(self.conversion("datetime")),
        }
    }
}

fn datetime_from_text(value: &str) -> Result<OffsetDateTime, DecodeError> {
    if let Ok(dt) = OffsetDateTime::parse(value, &Rfc3339) {
        return Ok(dt);
    }

    let formats = [
        fd!("[year]-[month]-[day] [hour]:[minute]:[second].[subsecond]"),
        fd!("[year]-[month]-[day] [hour]:[minute]:[second]"),
        fd!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond]"),
        fd!("[year]-[month]-[day]T[hour]:[minute]:[second]"),
    ];

    for format in formats {
        if let Ok(dt) = PrimitiveDateTime::parse(value, format) {
            return Ok(dt.assume_utc());
        }
    }

    Err(DecodeError::Parse(format!("invalid datetime: {value}")))
}
