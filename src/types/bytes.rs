use crate::{
    dialect::Dialect,
    error::{DecodeError, EncodeError},
    types::SqlPrimitive,
    value::Value,
};

impl SqlPrimitive for Vec<u8> {
    const DATA_TYPE: &'static str = "bytes_null";

    fn column_type(dialect: Dialect) -> &'static str {
        match dialect {
            Dialect::Sqlite | Dialect::Mysql => "BLOB",
            Dialect::Postgres => "bytea",
        }
    }

    fn encode(&self) -> Result<Value, EncodeError> {
        Ok(Value::Blob(self.clone()))
    }

    fn decode(value: &Value) -> Result<Self, DecodeError> {
        value.blob()
    }

    forward_serde!();
}
