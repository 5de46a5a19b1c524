//! Step-by-step diagnostics for path resolution.
//!
//! The resolver reports every decision it takes to a [`ResolveObserver`].
//! Observers are injected through [`crate::Resolver::with_observer`] and never
//! influence the result.

use crate::{segment::PathSegment, value::Value};

/// The branch the resolver took for one segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Ran past the last segment; the current value is returned
    End,
    /// Unnamed literal; the current value is returned unexamined
    Verbatim,
    /// Named literal; the field value is returned
    Leaf,
    /// Empty-named object step; no data level consumed
    Root,
    /// Named object step; descended into the field
    Descend,
    /// Array step; remaining segments applied to each element
    FanOut,
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Step::End => "end",
            Step::Verbatim => "verbatim",
            Step::Leaf => "leaf",
            Step::Root => "root",
            Step::Descend => "descend",
            Step::FanOut => "fan-out",
        };
        f.write_str(name)
    }
}

/// Receives one call per resolution step.
///
/// `segment` is `None` for [`Step::End`]. `value` is the value the step was
/// applied to, before any field lookup.
pub trait ResolveObserver {
    fn on_step(&mut self, index: usize, segment: Option<&PathSegment>, step: Step, value: &Value);
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl ResolveObserver for NoopObserver {
    fn on_step(&mut self, _: usize, _: Option<&PathSegment>, _: Step, _: &Value) {}
}

/// Emits a `tracing` event at TRACE level for every step.
///
/// Installing a subscriber is left to the application.
#[cfg(feature = "trace")]
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

#[cfg(feature = "trace")]
impl ResolveObserver for TracingObserver {
    fn on_step(&mut self, index: usize, segment: Option<&PathSegment>, step: Step, value: &Value) {
        let (name, kind) = segment
            .map(|s| (s.name(), s.kind().as_str()))
            .unwrap_or(("", ""));

        tracing::trace!(
            target: "propmap::resolve",
            index,
            step = %step,
            name,
            kind,
            value_type = value.type_name(),
            "resolving path segment"
        );
    }
}

impl<O: ResolveObserver + ?Sized> ResolveObserver for &mut O {
    fn on_step(&mut self, index: usize, segment: Option<&PathSegment>, step: Step, value: &Value) {
        (**self).on_step(index, segment, step, value);
    }
}
