//! Conversion between typed records and store rows.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use wellness_store::Row;

pub fn to_row<T: Serialize>(value: &T) -> Result<Row, serde_json::Error> {
    serde_json::to_value(value).and_then(serde_json::from_value)
}

pub fn from_row<T: DeserializeOwned>(row: Row) -> Result<T, serde_json::Error> {
    serde_json::from_value(Value::Object(row))
}

pub fn from_rows<T: DeserializeOwned>(rows: Vec<Row>) -> Result<Vec<T>, serde_json::Error> {
    rows.into_iter().map(from_row).collect()
}
