//! The driver-facing side of binding.
//!
//! Bind markers never talk to a driver directly. They write through a
//! [`StatementSink`], which a driver adapter implements for its statement
//! type. [`BoundParams`] is the in-memory sink used when the driver wants the
//! values collected up front (tokio-postgres takes a parameter slice).

use tracing::trace;

use crate::error::SqlDialectError;
use crate::types::{RowValues, ValueType};

/// Where a marker writes its value: a 0-based index or a marker name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BindTarget<'a> {
    Index(usize),
    Name(&'a str),
}

/// A statement that accepts values, or typed nulls, at a bind target.
pub trait StatementSink {
    /// Bind `value` at `target`.
    ///
    /// # Errors
    ///
    /// Returns `SqlDialectError` if the sink cannot accept the target or value.
    fn bind(&mut self, target: BindTarget<'_>, value: RowValues) -> Result<(), SqlDialectError>;

    /// Bind a NULL of type `value_type` at `target`.
    ///
    /// # Errors
    ///
    /// Returns `SqlDialectError` if the sink cannot accept the target.
    fn bind_null(
        &mut self,
        target: BindTarget<'_>,
        value_type: ValueType,
    ) -> Result<(), SqlDialectError>;
}

/// A bound value: either a concrete value or a typed null.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundValue {
    Value(RowValues),
    Null(ValueType),
}

impl BoundValue {
    #[must_use]
    pub fn is_null(&self) -> bool {
        match self {
            BoundValue::Value(value) => value.is_null(),
            BoundValue::Null(_) => true,
        }
    }

    #[must_use]
    pub fn as_value(&self) -> Option<&RowValues> {
        match self {
            BoundValue::Value(value) => Some(value),
            BoundValue::Null(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum OwnedTarget {
    Index(usize),
    Name(String),
}

impl OwnedTarget {
    fn matches(&self, target: BindTarget<'_>) -> bool {
        match (self, target) {
            (OwnedTarget::Index(a), BindTarget::Index(b)) => *a == b,
            (OwnedTarget::Name(a), BindTarget::Name(b)) => a == b,
            _ => false,
        }
    }

    fn as_target(&self) -> BindTarget<'_> {
        match self {
            OwnedTarget::Index(index) => BindTarget::Index(*index),
            OwnedTarget::Name(name) => BindTarget::Name(name),
        }
    }
}

impl From<BindTarget<'_>> for OwnedTarget {
    fn from(target: BindTarget<'_>) -> Self {
        match target {
            BindTarget::Index(index) => OwnedTarget::Index(index),
            BindTarget::Name(name) => OwnedTarget::Name(name.to_string()),
        }
    }
}

/// Recording sink holding bound values in first-binding order.
///
/// Binding a target twice replaces the earlier value, the same way a prepared
/// statement behaves, so one `BoundParams` can be reused for a batch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoundParams {
    entries: Vec<(OwnedTarget, BoundValue)>,
}

impl BoundParams {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Value bound at a 0-based index.
    #[must_use]
    pub fn get_index(&self, index: usize) -> Option<&BoundValue> {
        self.get(BindTarget::Index(index))
    }

    /// Value bound at a marker name.
    #[must_use]
    pub fn get_name(&self, name: &str) -> Option<&BoundValue> {
        self.get(BindTarget::Name(name))
    }

    fn get(&self, target: BindTarget<'_>) -> Option<&BoundValue> {
        self.entries
            .iter()
            .find(|(bound, _)| bound.matches(target))
            .map(|(_, value)| value)
    }

    /// Iterate bindings in the order their targets were first bound.
    pub fn iter(&self) -> impl Iterator<Item = (BindTarget<'_>, &BoundValue)> {
        self.entries
            .iter()
            .map(|(target, value)| (target.as_target(), value))
    }

    /// Values ordered by index, for drivers that bind positionally.
    ///
    /// # Errors
    ///
    /// Returns `SqlDialectError::ParameterError` if a named binding is present or
    /// the indices do not form a contiguous range starting at 0.
    pub fn positional(&self) -> Result<Vec<&BoundValue>, SqlDialectError> {
        let mut indexed = Vec::with_capacity(self.entries.len());
        for (target, value) in &self.entries {
            match target {
                OwnedTarget::Index(index) => indexed.push((*index, value)),
                OwnedTarget::Name(name) => {
                    return Err(SqlDialectError::ParameterError(format!(
                        "named binding {name} cannot be used positionally"
                    )));
                }
            }
        }
        indexed.sort_by_key(|(index, _)| *index);

        for (expected, (index, _)) in indexed.iter().enumerate() {
            if *index != expected {
                return Err(SqlDialectError::ParameterError(format!(
                    "no value bound at index {expected}"
                )));
            }
        }

        Ok(indexed.into_iter().map(|(_, value)| value).collect())
    }

    fn put(&mut self, target: BindTarget<'_>, value: BoundValue) {
        trace!(?target, ?value, "binding value");
        if let Some(slot) = self
            .entries
            .iter_mut()
            .find(|(bound, _)| bound.matches(target))
        {
            slot.1 = value;
        } else {
            self.entries.push((target.into(), value));
        }
    }
}

impl StatementSink for BoundParams {
    fn bind(&mut self, target: BindTarget<'_>, value: RowValues) -> Result<(), SqlDialectError> {
        self.put(target, BoundValue::Value(value));
        Ok(())
    }

    fn bind_null(
        &mut self,
        target: BindTarget<'_>,
        value_type: ValueType,
    ) -> Result<(), SqlDialectError> {
        self.put(target, BoundValue::Null(value_type));
        Ok(())
    }
}
