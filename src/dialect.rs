//! Supported database backends.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// A relational backend with its own physical type mapping.
///
/// This is a closed set: every descriptor lookup and dialect-specific encode
/// in the crate is total over it. Backends outside this set are rejected when
/// the name is parsed, rather than silently mapped to an empty column type.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Dialect {
    Sqlite,
    Mysql,
    Postgres,
}

impl Dialect {
    pub fn name(&self) -> &'static str {
        match self {
            Dialect::Sqlite => "sqlite",
            Dialect::Mysql => "mysql",
            Dialect::Postgres => "postgres",
        }
    }
}

impl Display for Dialect {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Error returned when a dialect name is not one of the supported backends.
#[derive(thiserror::Error, Debug)]
#[error("unknown dialect: {0}")]
pub struct UnknownDialect(pub String);

impl FromStr for Dialect {
    type Err = UnknownDialect;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sqlite" => Ok(Dialect::Sqlite),
            "mysql" => Ok(Dialect::Mysql),
            "postgres" => Ok(Dialect::Postgres),
            _ => Err(UnknownDialect(s.to_owned())),
        }
    }
}
