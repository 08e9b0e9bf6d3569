//! Convenient imports for common functionality.
//!
//! This module re-exports the most commonly used types and traits so that
//! building and binding an operation needs a single `use`.

pub use crate::bind_markers::{BindMarker, BindMarkers, BindMarkersFactory};
pub use crate::dialect::{ClausePosition, Dialect, LimitClause, LimitSyntax};
pub use crate::error::SqlDialectError;
pub use crate::insert_values::{InsertValues, SettableValue};
pub use crate::operation::{
    BindIdOperation, BindableInsert, BindableOperation, BindableSelect, BindableUpdate,
    QueryOperation,
};
pub use crate::sink::{BindTarget, BoundParams, BoundValue, StatementSink};
pub use crate::statement_factory::StatementFactory;
pub use crate::types::{DatabaseType, RowValues, ValueType};

#[cfg(feature = "postgres")]
pub use crate::postgres::Params as PostgresParams;
