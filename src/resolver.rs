use crate::{
    convert::value_to_json,
    parser::parse,
    segment::{PathSegment, SegmentKind},
    trace::{NoopObserver, ResolveObserver, Step},
    value::{Value, ValueKind},
};

/// Errors that can occur while resolving a path against a document.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolveError {
    /// The value's shape does not fit the segment applied to it
    ShapeMismatch {
        expected: ValueKind,
        actual: ValueKind,
        value: Value,
    },

    /// The value is an object but lacks the named field
    MissingField { field: String, value: Value },
}

impl ResolveError {
    fn shape_mismatch(expected: ValueKind, value: &Value) -> Self {
        ResolveError::ShapeMismatch {
            expected,
            actual: value.kind(),
            value: value.clone(),
        }
    }

    /// The value the failing segment was applied to
    pub fn value(&self) -> &Value {
        match self {
            ResolveError::ShapeMismatch { value, .. } | ResolveError::MissingField { value, .. } => {
                value
            }
        }
    }
}

impl std::fmt::Display for ResolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResolveError::ShapeMismatch {
                expected, value, ..
            } => write!(
                f,
                "Shape mismatch: expected {}, got {} with value: {}",
                expected,
                value.type_name(),
                value_to_json(value.clone())
            ),
            ResolveError::MissingField { field, value } => write!(
                f,
                "Missing field: expected object with field '{}', got: {}",
                field,
                value_to_json(value.clone())
            ),
        }
    }
}

impl std::error::Error for ResolveError {}

/// Walks a document according to a parsed path.
///
/// The resolver never mutates its input; results are owned copies of the
/// values found. Every decision is reported to the observer, which defaults
/// to [`NoopObserver`].
///
/// # Examples
///
/// ```
/// use propmap::{Resolver, Value, parse};
/// use std::collections::HashMap;
///
/// let mut doc = HashMap::new();
/// doc.insert("id".to_string(), Value::from("x"));
///
/// let mut resolver = Resolver::new();
/// let result = resolver.resolve(&Value::Object(doc), &parse("id")).unwrap();
/// assert_eq!(result, Value::from("x"));
/// ```
#[derive(Debug, Default)]
pub struct Resolver<O = NoopObserver> {
    observer: O,
}

impl Resolver {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<O: ResolveObserver> Resolver<O> {
    pub fn with_observer(observer: O) -> Self {
        Resolver { observer }
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn into_observer(self) -> O {
        self.observer
    }

    /// Resolve `segments` against `value`, starting at the first segment.
    pub fn resolve(&mut self, value: &Value, segments: &[PathSegment]) -> Result<Value, ResolveError> {
        self.resolve_from(value, segments, 0)
    }

    fn resolve_from(
        &mut self,
        value: &Value,
        segments: &[PathSegment],
        index: usize,
    ) -> Result<Value, ResolveError> {
        let Some(segment) = segments.get(index) else {
            self.observer.on_step(index, None, Step::End, value);
            return Ok(value.clone());
        };

        match segment.kind() {
            SegmentKind::Literal if !segment.has_name() => {
                self.observer.on_step(index, Some(segment), Step::Verbatim, value);
                Ok(value.clone())
            }

            SegmentKind::Literal => {
                self.observer.on_step(index, Some(segment), Step::Leaf, value);
                field(value, segment.name()).cloned()
            }

            SegmentKind::ObjectStep if segment.is_root() || !segment.has_name() => {
                self.observer.on_step(index, Some(segment), Step::Root, value);
                self.resolve_from(value, segments, index + 1)
            }

            SegmentKind::ObjectStep => {
                self.observer.on_step(index, Some(segment), Step::Descend, value);
                let child = field(value, segment.name())?;
                self.resolve_from(child, segments, index + 1)
            }

            SegmentKind::ArrayStep => {
                self.observer.on_step(index, Some(segment), Step::FanOut, value);
                let target = if segment.has_name() {
                    field(value, segment.name())?
                } else {
                    value
                };
                let items = target
                    .as_array()
                    .ok_or_else(|| ResolveError::shape_mismatch(ValueKind::Array, target))?;

                items
                    .iter()
                    .map(|item| self.resolve_from(item, segments, index + 1))
                    .collect::<Result<Vec<_>, _>>()
                    .map(Value::Array)
            }
        }
    }
}

fn field<'v>(value: &'v Value, name: &str) -> Result<&'v Value, ResolveError> {
    let obj = value
        .as_object()
        .ok_or_else(|| ResolveError::shape_mismatch(ValueKind::Object, value))?;

    obj.get(name).ok_or_else(|| ResolveError::MissingField {
        field: name.to_string(),
        value: value.clone(),
    })
}

/// Resolve `segments` against `value` without diagnostics.
pub fn resolve(value: &Value, segments: &[PathSegment]) -> Result<Value, ResolveError> {
    Resolver::new().resolve(value, segments)
}

/// Parse `path` and resolve it against `value`.
///
/// # Examples
///
/// ```
/// use propmap::{Value, resolve_path};
///
/// let doc = Value::from("literalUserId");
/// assert_eq!(resolve_path(&doc, "").unwrap(), doc);
/// ```
pub fn resolve_path(value: &Value, path: &str) -> Result<Value, ResolveError> {
    resolve(value, &parse(path))
}
