//! Values collected by logical column name ahead of an `INSERT`.

use crate::sink::BoundValue;
use crate::types::{RowValues, ValueType};

/// A value, or typed null, destined for the column `name`.
#[derive(Debug, Clone, PartialEq)]
pub struct SettableValue {
    name: String,
    value: BoundValue,
}

impl SettableValue {
    #[must_use]
    pub fn value(name: impl Into<String>, value: RowValues) -> Self {
        Self {
            name: name.into(),
            value: BoundValue::Value(value),
        }
    }

    #[must_use]
    pub fn null(name: impl Into<String>, value_type: ValueType) -> Self {
        Self {
            name: name.into(),
            value: BoundValue::Null(value_type),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn bound(&self) -> &BoundValue {
        &self.value
    }
}

/// Ordered column values for an insert, built by threading the value through
/// each call.
///
/// ```rust
/// use sql_dialect::prelude::*;
///
/// let values = InsertValues::new()
///     .value("id", RowValues::Int(42055))
///     .value("name", RowValues::Text("SCHAUFELRADBAGGER".into()))
///     .null_value("manual", ValueType::Int);
///
/// assert_eq!(values.column_names().collect::<Vec<_>>(), ["id", "name", "manual"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InsertValues {
    values: Vec<SettableValue>,
}

impl InsertValues {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `name` to `value`. A repeated name replaces the earlier value but
    /// keeps its position.
    #[must_use]
    pub fn value(self, name: impl Into<String>, value: RowValues) -> Self {
        self.with(SettableValue::value(name, value))
    }

    /// Set `name` to a NULL of `value_type`.
    #[must_use]
    pub fn null_value(self, name: impl Into<String>, value_type: ValueType) -> Self {
        self.with(SettableValue::null(name, value_type))
    }

    #[must_use]
    pub fn with(mut self, settable: SettableValue) -> Self {
        match self.values.iter_mut().find(|v| v.name == settable.name) {
            Some(existing) => *existing = settable,
            None => self.values.push(settable),
        }
        self
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(SettableValue::name)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[SettableValue] {
        &self.values
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }
}
