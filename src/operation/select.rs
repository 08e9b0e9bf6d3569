use super::{BindIdOperation, MarkerMap};
use crate::bind_markers::{BindMarker, BindMarkers};
use crate::dialect::{ClausePosition, LimitClause};
use crate::error::SqlDialectError;

/// `SELECT <columns> FROM <table> WHERE <id> = <id marker>`, optionally limited.
///
/// Selected columns are literal names, so the only bindable value is the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindableSelect {
    markers: MarkerMap,
    id_marker: BindMarker,
    query: String,
}

impl BindableSelect {
    /// Allocate the id marker and render the query with `render`.
    pub(crate) fn new<F>(mut bind_markers: BindMarkers, id_column: &str, render: F) -> Self
    where
        F: FnOnce(&BindMarker) -> String,
    {
        let id_marker = bind_markers.next_with_hint(id_column);
        let query = render(&id_marker);

        Self {
            markers: MarkerMap::default(),
            id_marker,
            query,
        }
    }
}

impl_bindable_by_name!(BindableSelect);

impl BindIdOperation for BindableSelect {
    fn id_marker(&self) -> &BindMarker {
        &self.id_marker
    }
}

/// The clause text for `limit` rows, to be appended after the base query.
pub(crate) fn trailing_limit(clause: LimitClause, limit: u64) -> Result<String, SqlDialectError> {
    match clause.position() {
        ClausePosition::End => Ok(clause.clause(limit)),
        ClausePosition::Start => Err(SqlDialectError::Unsupported(format!(
            "Limit clause position {:?} not supported",
            clause.position()
        ))),
    }
}
