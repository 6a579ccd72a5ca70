use time::{OffsetDateTime, UtcOffset};

use crate::{
    dialect::Dialect,
    error::{DecodeError, EncodeError},
    types::SqlPrimitive,
    value::Value,
};

/// Timestamps are normalized to UTC on both the read and the write side, so
/// a value survives a round trip through any backend unchanged regardless of
/// the offset it was constructed with.
impl SqlPrimitive for OffsetDateTime {
    const DATA_TYPE: &'static str = "timestamp_null";

    fn column_type(dialect: Dialect) -> &'static str {
        match dialect {
            Dialect::Sqlite => "DATETIME",
            Dialect::Mysql => "TIMESTAMP NULL DEFAULT NULL",
            Dialect::Postgres => "timestamp",
        }
    }

    fn encode(&self) -> Result<Value, EncodeError> {
        Ok(Value::Datetime(self.to_offset(UtcOffset::UTC)))
    }

    fn decode(value: &Value) -> Result<Self, DecodeError> {
        Ok(value.datetime()?.to_offset(UtcOffset::UTC))
    }

    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        time::serde::rfc3339::serialize(self, serializer)
    }

    fn deserialize<'de, D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        time::serde::rfc3339::deserialize(deserializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Nullable;
    use time::macros::datetime;

    #[test]
    fn test_scan() {
        let mut cell: Nullable<OffsetDateTime> = Nullable::null();

        let dt = datetime!(2015-11-19 01:01:39 UTC);
        cell.scan(&Value::Datetime(dt)).unwrap();
        assert_eq!(cell.get(), Some(&dt));

        cell.scan(&Value::Text("2014-10-18T00:00:38.697Z".into())).unwrap();
        assert_eq!(cell.get(), Some(&datetime!(2014-10-18 00:00:38.697 UTC)));

        cell.scan(&Value::Integer(dt.unix_timestamp())).unwrap();
        assert_eq!(cell.get(), Some(&dt));

        cell.scan(&Value::Null).unwrap();
        assert_eq!(cell.get(), None);
    }

    #[test]
    fn test_offset_normalizes_to_utc() {
        let local = datetime!(2016-03-07 22:36:55.135 +03:30);
        let cell = Nullable::from(local);

        let stored = cell.to_value().unwrap();
        assert_eq!(
            stored,
            Value::Datetime(datetime!(2016-03-07 19:06:55.135 UTC))
        );

        let read = Nullable::<OffsetDateTime>::from_value(&stored).unwrap();
        assert_eq!(read.get().unwrap().offset(), UtcOffset::UTC);
        // Same instant, different offset representation.
        assert_eq!(read.get().unwrap(), &local);
    }

    #[test]
    fn test_malformed_text_errors() {
        let mut cell = Nullable::from(datetime!(2019-01-02 05:10:20 UTC));
        assert!(cell.scan(&Value::Text("not a date".into())).is_err());
        assert_eq!(cell.get(), Some(&datetime!(2019-01-02 05:10:20 UTC)));
    }
}
