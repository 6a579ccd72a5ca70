//! Nullable SQL primitive values.
//!
//! Every supported primitive kind — booleans, bytes and byte buffers, floats,
//! signed and unsigned integers of each width, strings and timestamps — can be
//! wrapped in [`Nullable<T>`] to represent a column value that is either
//! present or an explicit SQL NULL.
//!
//! A cell converts four ways:
//!
//! - **Text**: serde `Serialize`/`Deserialize`, with absence as `null`.
//! - **Storage**: [`Value`], a closed representation of what database drivers
//!   produce and accept, via [`Nullable::from_value`], [`Nullable::scan`],
//!   [`Nullable::to_value`] and [`Nullable::to_value_for`].
//! - **Schema descriptors**: a backend-agnostic logical token
//!   ([`Nullable::data_type`]) and a [`Dialect`]-keyed physical column type
//!   ([`Nullable::column_type`]), consumed by external migration tooling.
//! - **Bit-strings**: unsigned kinds round-trip through [`bits`] on backends
//!   without native unsigned columns.
//!
//! ```
//! use nullity::{Dialect, Nullable, Value};
//!
//! let mut age: Nullable<u16> = Nullable::from(4321);
//! assert_eq!(serde_json::to_string(&age)?, "4321");
//!
//! // PostgreSQL stores unsigned values in bit(N) columns.
//! assert_eq!(
//!     age.to_value_for(Dialect::Postgres)?,
//!     Value::Text("0001000011100001".into())
//! );
//!
//! age.scan(&Value::Null)?;
//! assert!(age.is_null());
//! assert_eq!(serde_json::to_string(&age)?, "null");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod bits;
mod dialect;
mod error;
pub mod types;
mod value;

pub use crate::{
    dialect::{Dialect, UnknownDialect},
    error::{DecodeError, EncodeError},
    types::{Byte, Nullable, SqlPrimitive},
    value::Value,
};
