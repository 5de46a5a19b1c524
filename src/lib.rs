pub mod convert;
pub mod parser;
pub mod resolver;
pub mod segment;
pub mod trace;
pub mod value;

pub use parser::parse;
pub use resolver::{ResolveError, Resolver, resolve, resolve_path};
pub use segment::{Path, PathSegment, SegmentKind, segments_to_json};
#[cfg(feature = "trace")]
pub use trace::TracingObserver;
pub use trace::{NoopObserver, ResolveObserver, Step};
pub use value::{Value, ValueKind};
