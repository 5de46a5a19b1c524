use std::{collections::HashMap, str::FromStr};

use crate::{convert::value_to_json, value::Value};

/// Meta flag set on the synthetic segment that stands for the whole document.
pub const ROOT_META: &str = "root";

/// How a [`PathSegment`] moves through a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    /// Terminal extraction
    ///
    /// Unnamed: the current value is the answer.
    /// Named: the field's value is the answer, nothing further is visited.
    Literal,

    /// Descend one level into the named field, then continue.
    ///
    /// An empty name consumes the step without consuming a data level.
    ObjectStep,

    /// Fan out: apply the remaining segments to every element of an array.
    ///
    /// When named, the field is looked up first and must hold the array.
    ArrayStep,
}

impl SegmentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SegmentKind::Literal => "literal",
            SegmentKind::ObjectStep => "object",
            SegmentKind::ArrayStep => "array",
        }
    }
}

impl std::fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a segment kind tag is not recognised
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSegmentKind(pub String);

impl std::fmt::Display for UnknownSegmentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unknown segment kind: '{}'", self.0)
    }
}

impl std::error::Error for UnknownSegmentKind {}

impl FromStr for SegmentKind {
    type Err = UnknownSegmentKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "literal" => Ok(SegmentKind::Literal),
            "object" => Ok(SegmentKind::ObjectStep),
            "array" => Ok(SegmentKind::ArrayStep),
            other => Err(UnknownSegmentKind(other.to_string())),
        }
    }
}

/// One parsed step of a property path.
///
/// Segments are produced by [`crate::parse`] and never mutated afterwards.
///
/// # Examples
///
/// ```
/// use propmap::{PathSegment, SegmentKind};
///
/// let seg = PathSegment::new("roles", SegmentKind::ArrayStep);
/// assert!(seg.has_name());
/// assert!(seg.matches_kind(SegmentKind::ArrayStep));
///
/// let root = PathSegment::root();
/// assert!(root.is_root());
/// assert_eq!(root.name(), "");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PathSegment {
    name: String,
    kind: SegmentKind,
    meta: HashMap<String, Value>,
}

/// A parsed property path.
pub type Path = Vec<PathSegment>;

impl PathSegment {
    pub fn new(name: impl Into<String>, kind: SegmentKind) -> Self {
        PathSegment {
            name: name.into(),
            kind,
            meta: HashMap::new(),
        }
    }

    /// The synthetic segment inserted in front of paths that start with `[]`.
    pub fn root() -> Self {
        PathSegment::new("", SegmentKind::ObjectStep).with_meta(ROOT_META, Value::Boolean(true))
    }

    pub fn with_meta(mut self, key: impl Into<String>, value: Value) -> Self {
        self.meta.insert(key.into(), value);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn has_name(&self) -> bool {
        !self.name.is_empty()
    }

    pub fn kind(&self) -> SegmentKind {
        self.kind
    }

    pub fn matches_kind(&self, kind: SegmentKind) -> bool {
        self.kind == kind
    }

    pub fn meta(&self) -> &HashMap<String, Value> {
        &self.meta
    }

    pub fn is_root(&self) -> bool {
        matches!(self.meta.get(ROOT_META), Some(Value::Boolean(true)))
    }

    /// Render as `{"name": .., "type": .., "meta": {..}}`
    pub fn to_json(&self) -> serde_json::Value {
        let meta: serde_json::Map<String, serde_json::Value> = self
            .meta
            .iter()
            .map(|(k, v)| (k.clone(), value_to_json(v.clone())))
            .collect();

        serde_json::json!({
            "name": self.name,
            "type": self.kind.as_str(),
            "meta": meta,
        })
    }
}

/// Render a whole path as a JSON array of segment objects.
pub fn segments_to_json(segments: &[PathSegment]) -> serde_json::Value {
    serde_json::Value::Array(segments.iter().map(PathSegment::to_json).collect())
}
