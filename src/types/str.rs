use crate::{
    dialect::Dialect,
    error::{DecodeError, EncodeError},
    types::SqlPrimitive,
    value::Value,
};

impl SqlPrimitive for String {
    const DATA_TYPE: &'static str = "string_null";

    fn column_type(dialect: Dialect) -> &'static str {
        match dialect {
            Dialect::Sqlite | Dialect::Mysql => "TEXT",
            Dialect::Postgres => "text",
        }
    }

    fn encode(&self) -> Result<Value, EncodeError> {
        Ok(Value::Text(self.clone()))
    }

    fn decode(value: &Value) -> Result<Self, DecodeError> {
        value.text()
    }

    forward_serde!();
}
