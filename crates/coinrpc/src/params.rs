//! JSON-compatible call parameters.
//!
//! Parameters travel as JSON values, with one addition over what JSON can
//! say natively: [`Param::Decimal`] carries an arbitrary-precision decimal
//! that is only converted to a floating-point JSON number at encode time,
//! after rounding to the client's configured precision.

use std::collections::BTreeMap;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::error::RpcError;

/// A single positional RPC parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum Param {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Decimal(Decimal),
    String(String),
    Array(Vec<Param>),
    Object(BTreeMap<String, Param>),
}

impl Param {
    /// Encode into a JSON value, rounding decimals to `precision`
    /// fractional digits.
    ///
    /// Rounding is half-even, the decimal-arithmetic default. A non-finite
    /// float or a decimal with no floating-point representation is not
    /// representable in JSON and fails the whole encode.
    pub(crate) fn to_json(&self, precision: u32) -> Result<serde_json::Value, RpcError> {
        match self {
            Param::Null => Ok(serde_json::Value::Null),
            Param::Bool(b) => Ok(serde_json::Value::Bool(*b)),
            Param::Int(n) => Ok(serde_json::Value::Number((*n).into())),
            Param::Float(f) => number_from_f64(*f),
            Param::Decimal(d) => {
                let rounded = d.round_dp(precision);
                let float = rounded
                    .to_f64()
                    .ok_or_else(|| RpcError::NotSerializable(format!("decimal {d}")))?;
                number_from_f64(float)
            }
            Param::String(s) => Ok(serde_json::Value::String(s.clone())),
            Param::Array(items) => items
                .iter()
                .map(|item| item.to_json(precision))
                .collect::<Result<Vec<_>, _>>()
                .map(serde_json::Value::Array),
            Param::Object(entries) => {
                let mut map = serde_json::Map::with_capacity(entries.len());
                for (key, value) in entries {
                    map.insert(key.clone(), value.to_json(precision)?);
                }
                Ok(serde_json::Value::Object(map))
            }
        }
    }
}

fn number_from_f64(float: f64) -> Result<serde_json::Value, RpcError> {
    serde_json::Number::from_f64(float)
        .map(serde_json::Value::Number)
        .ok_or_else(|| RpcError::NotSerializable(format!("non-finite number {float}")))
}

impl From<bool> for Param {
    fn from(value: bool) -> Self {
        Param::Bool(value)
    }
}

impl From<i32> for Param {
    fn from(value: i32) -> Self {
        Param::Int(value.into())
    }
}

impl From<i64> for Param {
    fn from(value: i64) -> Self {
        Param::Int(value)
    }
}

impl From<u32> for Param {
    fn from(value: u32) -> Self {
        Param::Int(value.into())
    }
}

impl From<f64> for Param {
    fn from(value: f64) -> Self {
        Param::Float(value)
    }
}

impl From<Decimal> for Param {
    fn from(value: Decimal) -> Self {
        Param::Decimal(value)
    }
}

impl From<&str> for Param {
    fn from(value: &str) -> Self {
        Param::String(value.to_owned())
    }
}

impl From<String> for Param {
    fn from(value: String) -> Self {
        Param::String(value)
    }
}

impl From<Vec<Param>> for Param {
    fn from(value: Vec<Param>) -> Self {
        Param::Array(value)
    }
}

impl<T: Into<Param>> From<Option<T>> for Param {
    fn from(value: Option<T>) -> Self {
        value.map_or(Param::Null, Into::into)
    }
}

impl From<serde_json::Value> for Param {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Param::Null,
            serde_json::Value::Bool(b) => Param::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(int) => Param::Int(int),
                // u64 beyond i64::MAX or a fractional literal.
                None => Param::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Param::String(s),
            serde_json::Value::Array(items) => {
                Param::Array(items.into_iter().map(Param::from).collect())
            }
            serde_json::Value::Object(entries) => Param::Object(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, Param::from(value)))
                    .collect(),
            ),
        }
    }
}
