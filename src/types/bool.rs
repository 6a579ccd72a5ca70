use crate::{
    dialect::Dialect,
    error::{DecodeError, EncodeError},
    types::SqlPrimitive,
    value::Value,
};

impl SqlPrimitive for bool {
    const DATA_TYPE: &'static str = "bool_null";

    fn column_type(dialect: Dialect) -> &'static str {
        match dialect {
            Dialect::Sqlite | Dialect::Mysql => "BOOLEAN",
            Dialect::Postgres => "boolean",
        }
    }

    fn encode(&self) -> Result<Value, EncodeError> {
        Ok(Value::Bool(*self))
    }

    fn decode(value: &Value) -> Result<Self, DecodeError> {
        value.bool()
    }

    forward_serde!();
}
