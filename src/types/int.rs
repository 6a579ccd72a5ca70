use crate::{
    dialect::Dialect,
    error::{DecodeError, EncodeError},
    types::SqlPrimitive,
    value::Value,
};

// Narrowing keeps the low bits rather than rejecting, matching what
// conventional SQL client libraries do when a wider integer arrives for a
// narrower column.
macro_rules! signed_int {
    ($t:ty, $data_type:literal, $common:literal, $pg:literal) => {
        impl SqlPrimitive for $t {
            const DATA_TYPE: &'static str = $data_type;

            fn column_type(dialect: Dialect) -> &'static str {
                match dialect {
                    Dialect::Sqlite | Dialect::Mysql => $common,
                    Dialect::Postgres => $pg,
                }
            }

            fn encode(&self) -> Result<Value, EncodeError> {
                Ok(Value::Integer(*self as i64))
            }

            fn decode(value: &Value) -> Result<Self, DecodeError> {
                Ok(value.int64()? as $t)
            }

            forward_serde!();
        }
    };
}

signed_int!(i8, "int8_null", "TINYINT", "smallint");
signed_int!(i16, "int16_null", "SMALLINT", "smallint");
signed_int!(i32, "int32_null", "INT", "integer");
signed_int!(i64, "int64_null", "BIGINT", "bigint");
signed_int!(isize, "int_null", "BIGINT", "bigint");
