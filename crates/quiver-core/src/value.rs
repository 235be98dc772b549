//! Dynamic values flowing through every quiver operation.
//!
//! `Value` mirrors the JSON data model plus an explicit `Absent` marker that
//! stands for "no such key / no such element". Mappings keep insertion order.

use std::borrow::Cow;
use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Ordered string-keyed mapping.
pub type Map = IndexMap<String, Value>;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    /// Missing key, empty `min`/`max`, unmatched lookup. Serializes as `null`.
    #[serde(skip_deserializing)]
    Absent,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Value>),
    Map(Map),
}

impl Value {
    /// Build a number, folding integral finite floats into `Int`.
    pub fn number(f: f64) -> Value {
        if f.is_finite() && f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
            Value::Int(f as i64)
        } else {
            Value::Float(f)
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Absent => "absent",
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::List(_) => "list",
            Value::Map(_) => "map",
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }

    /// `Absent` or `Null`.
    pub fn is_nullish(&self) -> bool {
        matches!(self, Value::Absent | Value::Null)
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Float(_))
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Numeric view of `Int`/`Float` only; no coercion.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Numeric coercion: numbers as-is, booleans 1/0, `Null` 0, strings parsed
    /// after trimming (empty string is 0), everything else NaN.
    pub fn to_number(&self) -> f64 {
        match self {
            Value::Int(i) => *i as f64,
            Value::Float(f) => *f,
            Value::Bool(b) => {
                if *b {
                    1.0
                } else {
                    0.0
                }
            }
            Value::Null => 0.0,
            Value::Str(s) => parse_number(s),
            Value::Absent | Value::List(_) | Value::Map(_) => f64::NAN,
        }
    }

    /// `-1 * value` under numeric coercion. Non-numeric input yields NaN.
    pub fn negated(&self) -> Value {
        Value::number(-self.to_number())
    }

    /// Render the value the way it appears when used as a mapping key.
    pub fn key_string(&self) -> String {
        match self {
            Value::Absent => "undefined".to_string(),
            Value::Null => "null".to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Int(i) => i.to_string(),
            Value::Float(f) => float_to_string(*f),
            Value::Str(s) => s.clone(),
            Value::List(items) => items
                .iter()
                .map(|v| match v {
                    Value::Absent | Value::Null => String::new(),
                    other => other.key_string(),
                })
                .collect::<Vec<_>>()
                .join(","),
            Value::Map(_) => "[object Object]".to_string(),
        }
    }

    /// Borrowing lookup into a mapping or sequence.
    pub fn get(&self, key: &Key) -> Option<&Value> {
        match (self, key) {
            (Value::Map(m), key) => m.get(&*key.as_name()),
            (Value::List(items), Key::Index(i)) => items.get(*i),
            (Value::List(items), Key::Name(n)) => {
                n.parse::<usize>().ok().and_then(|i| items.get(i))
            }
            _ => None,
        }
    }

    /// Owned lookup; strings are indexable by character position.
    /// Anything that cannot be read yields `Absent`.
    pub fn lookup(&self, key: &Key) -> Value {
        if let Value::Str(s) = self {
            let idx = match key {
                Key::Index(i) => Some(*i),
                Key::Name(n) => n.parse::<usize>().ok(),
            };
            return idx
                .and_then(|i| s.chars().nth(i))
                .map(|c| Value::Str(c.to_string()))
                .unwrap_or(Value::Absent);
        }
        self.get(key).cloned().unwrap_or(Value::Absent)
    }
}

fn parse_number(s: &str) -> f64 {
    let t = s.trim();
    if t.is_empty() {
        return 0.0;
    }
    match t {
        "Infinity" | "+Infinity" => f64::INFINITY,
        "-Infinity" => f64::NEG_INFINITY,
        // Rust accepts "inf"/"nan" spellings that are not numeric literals here.
        _ if t.chars().any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E') => f64::NAN,
        _ => t.parse::<f64>().unwrap_or(f64::NAN),
    }
}

fn float_to_string(f: f64) -> String {
    if f.is_nan() {
        "NaN".to_string()
    } else if f.is_infinite() {
        if f > 0.0 {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else if f != 0.0 && (f.abs() >= 1e21 || f.abs() < 1e-6) {
        // Exponent form past the same magnitudes where JSON-style number
        // rendering switches: `1e+21`, `1.5e-7`.
        let s = format!("{:e}", f);
        match s.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
            _ => s,
        }
    } else {
        f.to_string()
    }
}

impl PartialEq for Value {
    /// Structural equality; `Int` and `Float` compare numerically.
    fn eq(&self, other: &Self) -> bool {
        use Value::*;
        match (self, other) {
            (Absent, Absent) | (Null, Null) => true,
            (Bool(a), Bool(b)) => a == b,
            (Int(a), Int(b)) => a == b,
            (Int(_), Float(_)) | (Float(_), Int(_)) => {
                crate::compare::number_cmp(self, other) == Some(std::cmp::Ordering::Equal)
            }
            (Float(a), Float(b)) => a == b,
            (Str(a), Str(b)) => a == b,
            (List(a), List(b)) => a == b,
            (Map(a), Map(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_json::to_string(self) {
            Ok(s) => f.write_str(&s),
            Err(_) => f.write_str(&self.key_string()),
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Absent
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i as i64)
    }
}

impl From<usize> for Value {
    fn from(i: usize) -> Self {
        Value::number(i as f64)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::number(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl From<Map> for Value {
    fn from(m: Map) -> Self {
        Value::Map(m)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Value::Absent)
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => Value::number(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Value::Str(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(obj) => {
                Value::Map(obj.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(v: Value) -> Self {
        match v {
            Value::Absent | Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(b),
            Value::Int(i) => serde_json::Value::from(i),
            Value::Float(f) => serde_json::Number::from_f64(f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::Str(s) => serde_json::Value::String(s),
            Value::List(items) => {
                serde_json::Value::Array(items.into_iter().map(Into::into).collect())
            }
            Value::Map(m) => {
                serde_json::Value::Object(m.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
        }
    }
}

/// A field name or a positional index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    Name(String),
    Index(usize),
}

impl Key {
    /// Strings become names; non-negative integers become indices.
    pub fn from_value(v: &Value) -> Option<Key> {
        match v {
            Value::Str(s) => Some(Key::Name(s.clone())),
            Value::Int(i) if *i >= 0 => Some(Key::Index(*i as usize)),
            _ => None,
        }
    }

    pub fn as_name(&self) -> Cow<'_, str> {
        match self {
            Key::Name(n) => Cow::Borrowed(n),
            Key::Index(i) => Cow::Owned(i.to_string()),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_name())
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::Name(s.to_string())
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Key::Name(s)
    }
}

impl From<usize> for Key {
    fn from(i: usize) -> Self {
        Key::Index(i)
    }
}
