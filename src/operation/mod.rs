//! Bindable operations: a rendered query plus the markers it was rendered with.
//!
//! The marker for every logical name is fixed when the operation is built.
//! Binding afterwards only looks markers up, so an operation can be bound any
//! number of times, against any number of sinks, without changing its query.

macro_rules! impl_bindable_by_name {
    ($ty:ty) => {
        impl $crate::operation::QueryOperation for $ty {
            fn to_query(&self) -> &str {
                &self.query
            }
        }

        impl $crate::operation::BindableOperation for $ty {
            fn bind(
                &self,
                sink: &mut dyn $crate::sink::StatementSink,
                name: &str,
                value: $crate::types::RowValues,
            ) -> Result<(), $crate::error::SqlDialectError> {
                self.markers.require(name)?.bind(sink, value)
            }

            fn bind_null(
                &self,
                sink: &mut dyn $crate::sink::StatementSink,
                name: &str,
                value_type: $crate::types::ValueType,
            ) -> Result<(), $crate::error::SqlDialectError> {
                self.markers.require(name)?.bind_null(sink, value_type)
            }
        }

        impl $ty {
            /// Registered names and their markers, in registration order.
            pub fn markers(&self) -> impl Iterator<Item = (&str, &$crate::bind_markers::BindMarker)> {
                self.markers.iter()
            }
        }
    };
}

mod insert;
mod select;
mod update;

pub use insert::BindableInsert;
pub use select::BindableSelect;
pub use update::BindableUpdate;

pub(crate) use select::trailing_limit;

use crate::bind_markers::{BindMarker, BindMarkers};
use crate::error::SqlDialectError;
use crate::insert_values::SettableValue;
use crate::sink::{BoundValue, StatementSink};
use crate::types::{RowValues, ValueType};

/// An operation that can be rendered as a SQL string.
pub trait QueryOperation {
    /// The SQL text to hand to the driver's prepare call.
    fn to_query(&self) -> &str;
}

/// An operation whose values are bound by logical name.
pub trait BindableOperation: QueryOperation {
    /// Bind `value` to the marker registered for `name`.
    ///
    /// # Errors
    ///
    /// Returns `SqlDialectError::UnknownBindName` if `name` was not registered
    /// when the operation was built, or the sink's error.
    fn bind(
        &self,
        sink: &mut dyn StatementSink,
        name: &str,
        value: RowValues,
    ) -> Result<(), SqlDialectError>;

    /// Bind a typed NULL to the marker registered for `name`.
    ///
    /// # Errors
    ///
    /// Returns `SqlDialectError::UnknownBindName` if `name` was not registered
    /// when the operation was built, or the sink's error.
    fn bind_null(
        &self,
        sink: &mut dyn StatementSink,
        name: &str,
        value_type: ValueType,
    ) -> Result<(), SqlDialectError>;

    /// Bind every value in `values`, stopping at the first failure.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by [`BindableOperation::bind`] or
    /// [`BindableOperation::bind_null`].
    fn bind_all(
        &self,
        sink: &mut dyn StatementSink,
        values: &[SettableValue],
    ) -> Result<(), SqlDialectError> {
        for settable in values {
            match settable.bound() {
                BoundValue::Value(value) => self.bind(sink, settable.name(), value.clone())?,
                BoundValue::Null(value_type) => {
                    self.bind_null(sink, settable.name(), *value_type)?;
                }
            }
        }
        Ok(())
    }
}

/// A bindable operation with a distinguished marker for a single-key
/// `WHERE <id> = <marker>` predicate.
pub trait BindIdOperation: BindableOperation {
    /// The marker of the id predicate. It is not reachable by name.
    fn id_marker(&self) -> &BindMarker;

    /// Bind the id value.
    ///
    /// # Errors
    ///
    /// Returns the sink's error.
    fn bind_id(&self, sink: &mut dyn StatementSink, value: RowValues) -> Result<(), SqlDialectError> {
        self.id_marker().bind(sink, value)
    }

    /// Bind a typed NULL as the id value.
    ///
    /// # Errors
    ///
    /// Returns the sink's error.
    fn bind_id_null(
        &self,
        sink: &mut dyn StatementSink,
        value_type: ValueType,
    ) -> Result<(), SqlDialectError> {
        self.id_marker().bind_null(sink, value_type)
    }

    /// Bind several ids at once.
    ///
    /// # Errors
    ///
    /// Always returns `SqlDialectError::Unimplemented`: operations render a
    /// single-key predicate.
    fn bind_ids(
        &self,
        _sink: &mut dyn StatementSink,
        values: &[RowValues],
    ) -> Result<(), SqlDialectError> {
        Err(SqlDialectError::Unimplemented(format!(
            "binding {} ids to a single-key predicate",
            values.len()
        )))
    }
}

/// Frozen, insertion-ordered association of logical names to markers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct MarkerMap {
    entries: Box<[(String, BindMarker)]>,
}

impl MarkerMap {
    /// Allocate one marker per distinct column, in column order, and return the
    /// placeholder to render at each column position.
    pub(crate) fn allocate<I, S>(bind_markers: &mut BindMarkers, columns: I) -> (Self, Vec<(S, String)>)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut entries: Vec<(String, BindMarker)> = Vec::new();
        let mut rendered = Vec::new();

        for column in columns {
            let placeholder = match entries.iter().find(|(name, _)| name == column.as_ref()) {
                Some((_, marker)) => marker.placeholder().to_string(),
                None => {
                    let marker = bind_markers.next_with_hint(column.as_ref());
                    let placeholder = marker.placeholder().to_string();
                    entries.push((column.as_ref().to_string(), marker));
                    placeholder
                }
            };
            rendered.push((column, placeholder));
        }

        (
            Self {
                entries: entries.into_boxed_slice(),
            },
            rendered,
        )
    }

    pub(crate) fn require(&self, name: &str) -> Result<&BindMarker, SqlDialectError> {
        self.entries
            .iter()
            .find(|(registered, _)| registered == name)
            .map(|(_, marker)| marker)
            .ok_or_else(|| SqlDialectError::UnknownBindName(name.to_string()))
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (&str, &BindMarker)> {
        self.entries
            .iter()
            .map(|(name, marker)| (name.as_str(), marker))
    }
}
