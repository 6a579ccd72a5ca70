use crate::{
    bits,
    dialect::Dialect,
    error::{DecodeError, EncodeError},
    types::SqlPrimitive,
    value::Value,
};

// Unsigned values are stored as text so backends without a native unsigned
// type can hold the full range: a decimal literal for SQLite and MySQL, a
// fixed-width bit-string for a PostgreSQL bit(N) column. Reads accept either
// form, told apart by the bit-width heuristic in [`bits::decode`].
macro_rules! unsigned_int {
    ($t:ty, $width:literal, $data_type:literal, $common:literal, $pg:literal) => {
        impl SqlPrimitive for $t {
            const DATA_TYPE: &'static str = $data_type;

            fn column_type(dialect: Dialect) -> &'static str {
                match dialect {
                    Dialect::Sqlite | Dialect::Mysql => $common,
                    Dialect::Postgres => $pg,
                }
            }

            fn encode(&self) -> Result<Value, EncodeError> {
                Ok(Value::Text(self.to_string()))
            }

            fn encode_for(&self, dialect: Dialect) -> Result<Value, EncodeError> {
                match dialect {
                    Dialect::Sqlite | Dialect::Mysql => self.encode(),
                    Dialect::Postgres => {
                        tracing::trace!(
                            kind = Self::DATA_TYPE,
                            width = $width,
                            "encoding unsigned value as bit-string"
                        );
                        Ok(Value::Text(bits::encode(*self as u64, $width)))
                    }
                }
            }

            fn decode(value: &Value) -> Result<Self, DecodeError> {
                let text = value.text()?;
                Ok(bits::decode(&text, $width)?.try_into()?)
            }

            forward_serde!();
        }
    };
}

unsigned_int!(u8, 8, "uint8_null", "TINYINT UNSIGNED", "bit(8)");
unsigned_int!(u16, 16, "uint16_null", "SMALLINT UNSIGNED", "bit(16)");
unsigned_int!(u64, 64, "uint64_null", "BIGINT UNSIGNED", "bit(64)");
unsigned_int!(usize, 64, "uint_null", "BIGINT UNSIGNED", "bit(64)");

// u32 is the odd one out: it goes into a PostgreSQL numeric column as a
// plain integer instead of a bit-string.
impl SqlPrimitive for u32 {
    const DATA_TYPE: &'static str = "uint32_null";

    fn column_type(dialect: Dialect) -> &'static str {
        match dialect {
            Dialect::Sqlite | Dialect::Mysql => "INT UNSIGNED",
            Dialect::Postgres => "numeric",
        }
    }

    fn encode(&self) -> Result<Value, EncodeError> {
        Ok(Value::Text(self.to_string()))
    }

    fn encode_for(&self, dialect: Dialect) -> Result<Value, EncodeError> {
        match dialect {
            Dialect::Sqlite | Dialect::Mysql => self.encode(),
            Dialect::Postgres => Ok(Value::Integer(*self as i64)),
        }
    }

    fn decode(value: &Value) -> Result<Self, DecodeError> {
        let text = value.text()?;
        Ok(bits::decode(&text, 32)?.try_into()?)
    }

    forward_serde!();
}

#[cfg(test)]
mod tests {
    use crate::{Dialect, Nullable, Value};

    #[test]
    fn test_scan_decimal_and_binary() {
        let mut cell: Nullable<u64> = Nullable::null();

        cell.scan(&Value::Integer(37)).unwrap();
        assert_eq!(cell.get(), Some(&37));

        cell.scan(&Value::Text(
            "0000000000000000000000000000000000000000000000000000000000010001".into(),
        ))
        .unwrap();
        assert_eq!(cell.get(), Some(&17));

        cell.scan(&Value::Text(
            "0000000000000000000000000000000000000000000000000001000011100001".into(),
        ))
        .unwrap();
        assert_eq!(cell.get(), Some(&4321));

        cell.scan(&Value::Integer(50000000000)).unwrap();
        assert_eq!(cell.get(), Some(&50000000000));

        cell.scan(&Value::Null).unwrap();
        assert_eq!(cell.get(), None);
    }

    #[test]
    fn test_u16_bit_string_round_trip() {
        let cell = Nullable::from(4321u16);
        let stored = cell.to_value_for(Dialect::Postgres).unwrap();
        assert_eq!(stored, Value::Text("0001000011100001".into()));
        assert_eq!(Nullable::<u16>::from_value(&stored).unwrap(), cell);
    }

    #[test]
    fn test_neutral_encode_is_decimal_text() {
        let stored = Nullable::from(4321u16).to_value().unwrap();
        assert_eq!(stored, Value::Text("4321".into()));

        let stored = Nullable::from(4321u16)
            .to_value_for(Dialect::Sqlite)
            .unwrap();
        assert_eq!(stored, Value::Text("4321".into()));
    }

    #[test]
    fn test_out_of_range_decimal_errors() {
        let mut cell = Nullable::from(7u8);
        assert!(cell.scan(&Value::Text("300".into())).is_err());
        assert_eq!(cell.get(), Some(&7));

        assert!(Nullable::<u32>::from_value(&Value::Text("5000000000".into())).is_err());
    }

    #[test]
    fn test_u32_postgres_is_plain_integer() {
        let stored = Nullable::from(654321u32)
            .to_value_for(Dialect::Postgres)
            .unwrap();
        assert_eq!(stored, Value::Integer(654321));
    }

    #[test]
    fn test_null_writes_null_for_every_dialect() {
        let cell: Nullable<u64> = Nullable::null();
        for dialect in [Dialect::Sqlite, Dialect::Mysql, Dialect::Postgres] {
            assert!(cell.to_value_for(dialect).unwrap().is_null());
        }
    }
}
