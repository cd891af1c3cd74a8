//! Host data passed into a [`crate::Context`] and exchanged with functions.
//!
//! `Data` is the boundary type between host programs and the engine. It keeps
//! integers and floats apart the way hosts usually hold them; once inside the
//! engine both become [`Value::Number`].

use std::collections::HashMap;

use crate::{error::Error, value::Value};

/// A host-native data value.
///
/// # Examples
///
/// ```
/// use predicate_lang::Data;
/// use std::collections::HashMap;
///
/// let mut foo = HashMap::new();
/// foo.insert("value".to_string(), Data::Integer(4));
///
/// let mut root = HashMap::new();
/// root.insert("foo".to_string(), Data::Object(foo));
/// let data = Data::Object(root);
/// assert!(data.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Data {
    #[default]
    Nil,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    /// Elements may be scalars or objects, never arrays
    Array(Vec<Data>),
    Object(HashMap<String, Data>),
}

impl Data {
    pub fn type_name(&self) -> &'static str {
        match self {
            Data::Nil => "nil",
            Data::Bool(_) => "bool",
            Data::Integer(_) => "integer",
            Data::Float(_) => "float",
            Data::String(_) => "string",
            Data::Array(_) => "array",
            Data::Object(_) => "object",
        }
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Data::Nil)
    }

    /// Numeric view of integers and floats.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Data::Integer(n) => Some(*n as f64),
            Data::Float(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Data::String(s) => Some(s),
            _ => None,
        }
    }

    /// Recursively checks that the data has a shape the engine supports.
    ///
    /// Arrays may not directly contain arrays and floats must be finite.
    pub fn validate(&self) -> Result<(), Error> {
        match self {
            Data::Float(n) if !n.is_finite() => Err(Error::UnsupportedType(format!(
                "non-finite number {n} in data"
            ))),
            Data::Array(items) => items.iter().try_for_each(|item| match item {
                Data::Array(_) => Err(Error::UnsupportedType(
                    "arrays may not contain arrays".to_string(),
                )),
                other => other.validate(),
            }),
            Data::Object(map) => map.values().try_for_each(Data::validate),
            _ => Ok(()),
        }
    }
}

impl From<bool> for Data {
    fn from(b: bool) -> Self {
        Data::Bool(b)
    }
}

impl From<i64> for Data {
    fn from(n: i64) -> Self {
        Data::Integer(n)
    }
}

impl From<i32> for Data {
    fn from(n: i32) -> Self {
        Data::Integer(n.into())
    }
}

impl From<f64> for Data {
    fn from(n: f64) -> Self {
        Data::Float(n)
    }
}

impl From<&str> for Data {
    fn from(s: &str) -> Self {
        Data::String(s.to_string())
    }
}

impl From<String> for Data {
    fn from(s: String) -> Self {
        Data::String(s)
    }
}

impl From<Vec<Data>> for Data {
    fn from(items: Vec<Data>) -> Self {
        Data::Array(items)
    }
}

impl From<HashMap<String, Data>> for Data {
    fn from(map: HashMap<String, Data>) -> Self {
        Data::Object(map)
    }
}

impl<T: Into<Data>> From<Option<T>> for Data {
    fn from(value: Option<T>) -> Self {
        value.map_or(Data::Nil, Into::into)
    }
}

/// Data to engine value. Integers and floats both become numbers.
impl From<&Data> for Value {
    fn from(data: &Data) -> Self {
        match data {
            Data::Nil => Value::Nil,
            Data::Bool(b) => Value::Bool(*b),
            Data::Integer(n) => Value::Number(*n as f64),
            Data::Float(n) => Value::Number(*n),
            Data::String(s) => Value::String(s.clone()),
            Data::Array(items) => Value::Array(items.iter().map(Value::from).collect()),
            Data::Object(map) => Value::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), Value::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<Data> for Value {
    fn from(data: Data) -> Self {
        match data {
            Data::Nil => Value::Nil,
            Data::Bool(b) => Value::Bool(b),
            Data::Integer(n) => Value::Number(n as f64),
            Data::Float(n) => Value::Number(n),
            Data::String(s) => Value::String(s),
            Data::Array(items) => Value::Array(items.into_iter().map(Value::from).collect()),
            Data::Object(map) => {
                Value::Object(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

/// Engine value to data, as handed to functions. Numbers become floats.
impl From<Value> for Data {
    fn from(value: Value) -> Self {
        match value {
            Value::Nil => Data::Nil,
            Value::Bool(b) => Data::Bool(b),
            Value::Number(n) => Data::Float(n),
            Value::String(s) => Data::String(s),
            Value::Array(items) => Data::Array(items.into_iter().map(Data::from).collect()),
            Value::Object(map) => {
                Data::Object(map.into_iter().map(|(k, v)| (k, Data::from(v))).collect())
            }
        }
    }
}

impl From<serde_json::Value> for Data {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Data::Nil,
            serde_json::Value::Bool(b) => Data::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Data::Integer(i)
                } else {
                    n.as_f64().map_or(Data::Nil, Data::Float)
                }
            }
            serde_json::Value::String(s) => Data::String(s),
            serde_json::Value::Array(arr) => Data::Array(arr.into_iter().map(Data::from).collect()),
            serde_json::Value::Object(obj) => {
                Data::Object(obj.into_iter().map(|(k, v)| (k, Data::from(v))).collect())
            }
        }
    }
}

impl From<Data> for serde_json::Value {
    fn from(data: Data) -> Self {
        match data {
            Data::Nil => serde_json::Value::Null,
            Data::Bool(b) => serde_json::Value::Bool(b),
            Data::Integer(i) => serde_json::Value::Number(i.into()),
            Data::Float(f) => serde_json::Number::from_f64(f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Data::String(s) => serde_json::Value::String(s),
            Data::Array(arr) => {
                serde_json::Value::Array(arr.into_iter().map(serde_json::Value::from).collect())
            }
            Data::Object(obj) => serde_json::Value::Object(
                obj.into_iter()
                    .map(|(k, v)| (k, serde_json::Value::from(v)))
                    .collect(),
            ),
        }
    }
}
