use std::collections::HashMap;

/// A document value traversed by property paths.
///
/// This type represents all valid JSON types with a distinction between
/// integers and floats (unlike standard JSON which only has "number").
/// For path resolution every scalar is opaque: only the object / array /
/// literal shape matters, see [`ValueKind`].
///
/// # Examples
///
/// ```
/// use propmap::{Value, ValueKind};
/// use std::collections::HashMap;
///
/// let mut obj = HashMap::new();
/// obj.insert("id".to_string(), Value::String("x".to_string()));
/// let object = Value::Object(obj);
///
/// assert_eq!(object.kind(), ValueKind::Object);
/// assert_eq!(
///     object.as_object().and_then(|o| o.get("id")),
///     Some(&Value::String("x".to_string()))
/// );
/// assert_eq!(Value::Integer(42).kind(), ValueKind::Literal);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// JSON null
    Null,

    /// JSON boolean (true/false)
    Boolean(bool),

    /// Floating-point number
    Float(f64),

    /// Integer number (preserved separately from floats)
    Integer(i64),

    /// UTF-8 string
    String(String),

    /// Array of values (homogeneous or heterogeneous)
    Array(Vec<Value>),

    /// Object with string keys and value values
    Object(HashMap<String, Value>),
}

/// Structural shape of a [`Value`] as seen by the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// Named-field record
    Object,
    /// Ordered sequence
    Array,
    /// Any scalar leaf (null, boolean, number, string)
    Literal,
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueKind::Object => write!(f, "object"),
            ValueKind::Array => write!(f, "array"),
            ValueKind::Literal => write!(f, "literal"),
        }
    }
}

impl Value {
    /// Classify the value by shape
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Object(_) => ValueKind::Object,
            Value::Array(_) => ValueKind::Array,
            Value::Null
            | Value::Boolean(_)
            | Value::Float(_)
            | Value::Integer(_)
            | Value::String(_) => ValueKind::Literal,
        }
    }

    /// Returns a human-readable type name, finer grained than [`Value::kind`]
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Boolean(_) => "boolean",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }

    pub fn as_object(&self) -> Option<&HashMap<String, Value>> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(arr) => Some(arr.as_slice()),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

#[test]
fn test_kind_classification() {
    assert_eq!(Value::Null.kind(), ValueKind::Literal);
    assert_eq!(Value::Float(1.5).kind(), ValueKind::Literal);
    assert_eq!(Value::Array(vec![]).kind(), ValueKind::Array);
    assert_eq!(Value::Object(HashMap::new()).kind(), ValueKind::Object);
}

#[test]
fn test_shape_accessors() {
    assert_eq!(Value::from("scalar").as_object(), None);
    assert_eq!(Value::from("scalar").as_array(), None);
    assert_eq!(Value::Array(vec![Value::Null]).as_array(), Some(&[Value::Null][..]));
}
