//! Types for working with errors produced by nullity.

use std::num::{ParseFloatError, ParseIntError, TryFromIntError};
use std::string::FromUtf8Error;

/// An error that occurred while decoding a driver value or a text literal.
#[derive(thiserror::Error, Debug)]
pub enum DecodeError {
    /// The source driver value has no defined mapping to the target kind.
    #[error("cannot convert {from} to {to}")]
    Conversion {
        from: &'static str,
        to: &'static str,
    },

    /// A malformed literal was encountered while parsing.
    #[error("parse error: {0}")]
    Parse(String),

    /// The value does not fit in the target kind.
    #[error("value out of range: {0}")]
    Range(String),
}

impl From<std::convert::Infallible> for DecodeError {
    fn from(err: std::convert::Infallible) -> Self {
        match err {}
    }
}

impl From<TryFromIntError> for DecodeError {
    fn from(err: TryFromIntError) -> Self {
        DecodeError::Range(err.to_string())
    }
}

impl From<ParseIntError> for DecodeError {
    fn from(err: ParseIntError) -> Self {
        DecodeError::Parse(err.to_string())
    }
}

impl From<ParseFloatError> for DecodeError {
    fn from(err: ParseFloatError) -> Self {
        DecodeError::Parse(err.to_string())
    }
}

impl From<FromUtf8Error> for DecodeError {
    fn from(err: FromUtf8Error) -> Self {
        DecodeError::Parse(err.to_string())
    }
}

/// An error that occurred while encoding a value for the database.
#[derive(thiserror::Error, Debug)]
pub enum EncodeError {
    #[error("encoding conversion error: {0}")]
    Conversion(String),
}
