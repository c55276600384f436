//! Field values carried by errors.
//!
//! Errors keep their construction parameters (`argument_value`, `resource`,
//! `min`, ...) as plain attributes, so a value must be able to hold anything
//! a caller might reasonably pass in: scalars, collections, values with their
//! own `Display`, even callables. [`translate_value`] turns any of them into
//! the text that appears inside a message.

use std::any::Any;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

/// Rendering used for [`Value::Function`].
pub const FUNCTION_TEXT: &str = "<function>";

/// Rendering used when a structured value cannot be serialized.
pub const OBJECT_TEXT: &str = "<object>";

/// A single error field value.
#[derive(Clone)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Str(String),
    List(Vec<Value>),
    Map(BTreeMap<String, Value>),
    /// Anything with its own string conversion.
    Display(Arc<dyn fmt::Display + Send + Sync>),
    /// An opaque callable (callback, handler, ...). Never rendered.
    Function(Arc<dyn Any + Send + Sync>),
}

impl Value {
    /// Wrap a value whose `Display` impl should be used in messages.
    pub fn display<T>(value: T) -> Self
    where
        T: fmt::Display + Send + Sync + 'static,
    {
        Value::Display(Arc::new(value))
    }

    /// Wrap a callable handle.
    pub fn function<F>(f: F) -> Self
    where
        F: Send + Sync + 'static,
    {
        Value::Function(Arc::new(f))
    }

    /// `true` for an empty list. Empty collections count as "not provided".
    #[inline]
    pub fn is_empty_list(&self) -> bool {
        matches!(self, Value::List(items) if items.is_empty())
    }

    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }
}

/// Render a value for inclusion in an error message.
///
/// - strings render as-is, numbers and booleans via `Display`
/// - functions render as `<function>`
/// - `Display` values use their own conversion
/// - lists and maps are serialized as JSON, falling back to `<object>`
///
/// Never panics.
///
/// ```
/// use serror_core::value::{translate_value, Value};
///
/// assert_eq!(translate_value(&Value::from(100)), "100");
/// assert_eq!(translate_value(&Value::from(vec!["a", "b"])), r#"["a","b"]"#);
/// assert_eq!(translate_value(&Value::function(|| ())), "<function>");
/// ```
pub fn translate_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Int(n) => n.to_string(),
        Value::UInt(n) => n.to_string(),
        Value::Float(n) => n.to_string(),
        Value::Str(s) => s.clone(),
        Value::Display(d) => d.to_string(),
        Value::Function(_) => FUNCTION_TEXT.to_string(),
        Value::List(_) | Value::Map(_) => {
            serde_json::to_string(value).unwrap_or_else(|_| OBJECT_TEXT.to_string())
        }
    }
}

// ── Serialize ─────────────────────────────────────────────────────

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(n) => serializer.serialize_i64(*n),
            Value::UInt(n) => serializer.serialize_u64(*n),
            Value::Float(n) => serializer.serialize_f64(*n),
            Value::Str(s) => serializer.serialize_str(s),
            Value::Display(d) => serializer.collect_str(d),
            Value::Function(_) => serializer.serialize_str(FUNCTION_TEXT),
            Value::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Map(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (k, v) in entries {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}

// ── Debug / PartialEq ─────────────────────────────────────────────

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "Null"),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Int(n) => write!(f, "Int({n})"),
            Value::UInt(n) => write!(f, "UInt({n})"),
            Value::Float(n) => write!(f, "Float({n})"),
            Value::Str(s) => write!(f, "Str({s:?})"),
            Value::List(items) => f.debug_list().entries(items).finish(),
            Value::Map(entries) => f.debug_map().entries(entries).finish(),
            Value::Display(d) => write!(f, "Display({:?})", d.to_string()),
            Value::Function(_) => write!(f, "Function"),
        }
    }
}

/// Data variants compare structurally; `Display` and `Function` compare
/// by identity.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::UInt(a), Value::UInt(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            (Value::Display(a), Value::Display(b)) => Arc::ptr_eq(a, b),
            (Value::Function(a), Value::Function(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

// ── Conversions ───────────────────────────────────────────────────

macro_rules! from_int {
    ($variant:ident, $target:ty; $($t:ty),*) => {
        $(
            impl From<$t> for Value {
                #[inline]
                fn from(n: $t) -> Self {
                    Value::$variant(n as $target)
                }
            }
        )*
    };
}

from_int!(Int, i64; i8, i16, i32, i64, isize);
from_int!(UInt, u64; u8, u16, u32, u64, usize);

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Float(n as f64)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
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

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Value::Str(s.clone())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<BTreeMap<String, T>> for Value {
    fn from(entries: BTreeMap<String, T>) -> Self {
        Value::Map(entries.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else if let Some(u) = n.as_u64() {
                    Value::UInt(u)
                } else {
                    Value::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => Value::Str(s),
            serde_json::Value::Array(items) => Value::from(items),
            serde_json::Value::Object(entries) => {
                Value::Map(entries.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    struct Celsius(f64);

    impl fmt::Display for Celsius {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}°C", self.0)
        }
    }

    #[test]
    fn scalars() {
        assert_eq!(translate_value(&Value::from("bar")), "bar");
        assert_eq!(translate_value(&Value::from(100)), "100");
        assert_eq!(translate_value(&Value::from(-3_i64)), "-3");
        assert_eq!(translate_value(&Value::from(2.5)), "2.5");
        assert_eq!(translate_value(&Value::from(100.0)), "100");
        assert_eq!(translate_value(&Value::from(true)), "true");
        assert_eq!(translate_value(&Value::Null), "null");
    }

    #[test]
    fn function_is_opaque() {
        let v = Value::function(|x: i32| x + 1);
        assert_eq!(translate_value(&v), FUNCTION_TEXT);
    }

    #[test]
    fn display_uses_own_conversion() {
        let v = Value::display(Celsius(21.5));
        assert_eq!(translate_value(&v), "21.5°C");
    }

    #[test]
    fn collections_serialize_as_json() {
        let mut map = BTreeMap::new();
        map.insert("port".to_string(), Value::from(8080));
        map.insert("hooks".to_string(), Value::function(|| ()));
        map.insert("temp".to_string(), Value::display(Celsius(3.0)));
        assert_eq!(
            translate_value(&Value::Map(map)),
            r#"{"hooks":"<function>","port":8080,"temp":"3°C"}"#
        );
        assert_eq!(translate_value(&Value::from(vec![1, 2])), "[1,2]");
    }

    #[test]
    fn empty_list_detection() {
        assert!(Value::List(vec![]).is_empty_list());
        assert!(!Value::from(vec!["x"]).is_empty_list());
        assert!(!Value::from("").is_empty_list());
    }

    #[test]
    fn from_json() {
        let v = Value::from(serde_json::json!({"a": [1, "two", null], "b": 1.5}));
        assert_eq!(translate_value(&v), r#"{"a":[1,"two",null],"b":1.5}"#);
    }

    #[test]
    fn equality() {
        assert_eq!(Value::from("a"), Value::from("a".to_string()));
        assert_ne!(Value::from(1), Value::from(1_u64));
        let f = Value::function(|| ());
        assert_eq!(f.clone(), f);
        assert_ne!(f, Value::function(|| ()));
    }
}
