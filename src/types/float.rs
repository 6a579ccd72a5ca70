use crate::{
    dialect::Dialect,
    error::{DecodeError, EncodeError},
    types::SqlPrimitive,
    value::Value,
};

impl SqlPrimitive for f32 {
    const DATA_TYPE: &'static str = "float32_null";

    fn column_type(dialect: Dialect) -> &'static str {
        match dialect {
            Dialect::Sqlite | Dialect::Mysql => "FLOAT",
            Dialect::Postgres => "real",
        }
    }

    fn encode(&self) -> Result<Value, EncodeError> {
        Ok(Value::Real((*self).into()))
    }

    fn decode(value: &Value) -> Result<Self, DecodeError> {
        // Drivers traffic in doubles; narrowing keeps 32-bit precision.
        Ok(value.real()? as f32)
    }

    forward_serde!();
}

impl SqlPrimitive for f64 {
    const DATA_TYPE: &'static str = "float64_null";

    fn column_type(dialect: Dialect) -> &'static str {
        match dialect {
            Dialect::Sqlite | Dialect::Mysql => "DOUBLE",
            Dialect::Postgres => "double precision",
        }
    }

    fn encode(&self) -> Result<Value, EncodeError> {
        Ok(Value::Real(*self))
    }

    fn decode(value: &Value) -> Result<Self, DecodeError> {
        value.real()
    }

    forward_serde!();
}

#[cfg(test)]
mod tests {
    use crate::{Nullable, Value};

    // A 32-bit float round-trips at 32-bit IEEE-754 precision: widened back
    // to a double, 24.78f32 is exactly 24.780000686645508.
    #[test]
    fn test_f32_scan_keeps_ieee754_rounding() {
        let mut cell: Nullable<f32> = Nullable::null();

        cell.scan(&Value::Real(24.78)).unwrap();
        assert_eq!(*cell.get().unwrap() as f64, 24.780000686645508);

        cell.scan(&Value::Real(-24.78)).unwrap();
        assert_eq!(*cell.get().unwrap() as f64, -24.780000686645508);

        cell.scan(&Value::Real(782.873129836256643728346128238420)).unwrap();
        assert_eq!(*cell.get().unwrap() as f64, 782.8731079101562);

        cell.scan(&Value::Real(-782.873129836256643728346128238420)).unwrap();
        assert_eq!(*cell.get().unwrap() as f64, -782.8731079101562);

        cell.scan(&Value::Null).unwrap();
        assert_eq!(cell.get(), None);
    }

    #[test]
    fn test_f32_encodes_widened() {
        let stored = Nullable::from(24.78f32).to_value().unwrap();
        assert_eq!(stored, Value::Real(24.780000686645508));
    }

    #[test]
    fn test_f64_scan_promotions() {
        let mut cell: Nullable<f64> = Nullable::null();

        cell.scan(&Value::Real(939399419.1225182)).unwrap();
        assert_eq!(cell.get(), Some(&939399419.1225182));

        cell.scan(&Value::Integer(3)).unwrap();
        assert_eq!(cell.get(), Some(&3.0));

        cell.scan(&Value::Text("2.25".into())).unwrap();
        assert_eq!(cell.get(), Some(&2.25));
    }
}
