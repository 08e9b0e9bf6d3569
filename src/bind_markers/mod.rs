//! Bind markers: placeholders spliced into rendered SQL and the binding
//! action that goes with each of them.
//!
//! A [`BindMarkersFactory`] is a fixed, per-dialect strategy. Every operation
//! asks it for a fresh [`BindMarkers`] sequence, so placeholders never collide
//! within one statement and sequences are never shared between statements.

mod named;

use std::collections::HashSet;

use crate::error::SqlDialectError;
use crate::sink::{BindTarget, StatementSink};
use crate::types::{RowValues, ValueType};

pub use named::filter_ascii_alphanumeric;

/// A single placeholder occurrence in a rendered statement.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BindMarker {
    /// Positional marker such as `$1`, bound by its 0-based `index`.
    Indexed { placeholder: String, index: usize },
    /// Named marker such as `@P_id`, bound by `identifier` (the name without prefix).
    Named {
        placeholder: String,
        identifier: String,
    },
}

impl BindMarker {
    /// The exact text to splice into SQL.
    #[must_use]
    pub fn placeholder(&self) -> &str {
        match self {
            BindMarker::Indexed { placeholder, .. } | BindMarker::Named { placeholder, .. } => {
                placeholder
            }
        }
    }

    /// The sink target this marker writes to.
    #[must_use]
    pub fn target(&self) -> BindTarget<'_> {
        match self {
            BindMarker::Indexed { index, .. } => BindTarget::Index(*index),
            BindMarker::Named { identifier, .. } => BindTarget::Name(identifier),
        }
    }

    /// Bind `value` onto `sink` at this marker.
    ///
    /// # Errors
    ///
    /// Propagates any error returned by the sink.
    pub fn bind<S>(&self, sink: &mut S, value: RowValues) -> Result<(), SqlDialectError>
    where
        S: StatementSink + ?Sized,
    {
        sink.bind(self.target(), value)
    }

    /// Bind a NULL of `value_type` onto `sink` at this marker.
    ///
    /// # Errors
    ///
    /// Propagates any error returned by the sink.
    pub fn bind_null<S>(&self, sink: &mut S, value_type: ValueType) -> Result<(), SqlDialectError>
    where
        S: StatementSink + ?Sized,
    {
        sink.bind_null(self.target(), value_type)
    }
}

/// Per-dialect strategy producing [`BindMarkers`] sequences.
#[derive(Debug, Clone, Copy)]
pub enum BindMarkersFactory {
    /// Markers are `prefix` followed by `begin_with + k` for the k-th marker.
    Indexed {
        prefix: &'static str,
        begin_with: usize,
    },
    /// Markers are `prefix` followed by a name derived from the hint.
    Named {
        prefix: &'static str,
        name_prefix: &'static str,
        max_length: usize,
        filter: fn(&str) -> String,
    },
}

impl BindMarkersFactory {
    #[must_use]
    pub const fn indexed(prefix: &'static str, begin_with: usize) -> Self {
        BindMarkersFactory::Indexed { prefix, begin_with }
    }

    /// `filter` turns a hint into a name fragment; an empty result means the
    /// hint is unusable and a synthetic name is generated instead.
    #[must_use]
    pub const fn named(
        prefix: &'static str,
        name_prefix: &'static str,
        max_length: usize,
        filter: fn(&str) -> String,
    ) -> Self {
        BindMarkersFactory::Named {
            prefix,
            name_prefix,
            max_length,
            filter,
        }
    }

    /// Start a new, independent marker sequence.
    #[must_use]
    pub fn create(&self) -> BindMarkers {
        BindMarkers {
            strategy: *self,
            counter: 0,
            issued: HashSet::new(),
        }
    }
}

/// Marker generator for one statement.
#[derive(Debug)]
pub struct BindMarkers {
    strategy: BindMarkersFactory,
    counter: usize,
    issued: HashSet<String>,
}

impl BindMarkers {
    /// Next marker with a generated name.
    pub fn next(&mut self) -> BindMarker {
        self.next_with_hint("")
    }

    /// Next marker, using `hint` for the placeholder name where the dialect
    /// supports named markers.
    pub fn next_with_hint(&mut self, hint: &str) -> BindMarker {
        let ordinal = self.counter;
        self.counter += 1;

        match self.strategy {
            BindMarkersFactory::Indexed { prefix, begin_with } => BindMarker::Indexed {
                placeholder: format!("{prefix}{}", begin_with + ordinal),
                index: ordinal,
            },
            BindMarkersFactory::Named {
                prefix,
                name_prefix,
                max_length,
                filter,
            } => {
                let filtered = filter(hint);
                let candidate = if filtered.is_empty() {
                    format!("{name_prefix}{ordinal}")
                } else {
                    format!("{name_prefix}{filtered}")
                };
                let identifier = named::unique_name(&candidate, max_length, &self.issued);
                self.issued.insert(identifier.clone());

                BindMarker::Named {
                    placeholder: format!("{prefix}{identifier}"),
                    identifier,
                }
            }
        }
    }
}
