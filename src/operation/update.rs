use super::{BindIdOperation, MarkerMap};
use crate::bind_markers::{BindMarker, BindMarkers};

/// `UPDATE <table> SET <col>=<marker>, ... WHERE <id> = <id marker>`.
///
/// The id marker is allocated before the column markers, so with indexed
/// markers the id is always `$1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindableUpdate {
    markers: MarkerMap,
    id_marker: BindMarker,
    query: String,
}

impl BindableUpdate {
    pub(crate) fn new<I, S>(
        mut bind_markers: BindMarkers,
        table: &str,
        columns: I,
        id_column: &str,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let id_marker = bind_markers.next_with_hint(id_column);
        let (markers, rendered) = MarkerMap::allocate(&mut bind_markers, columns);

        let set_clause = rendered
            .iter()
            .map(|(column, placeholder)| format!("{}={placeholder}", column.as_ref()))
            .collect::<Vec<_>>()
            .join(", ");

        let query = format!(
            "UPDATE {table} SET {set_clause} WHERE {id_column} = {}",
            id_marker.placeholder()
        );

        Self {
            markers,
            id_marker,
            query,
        }
    }
}

impl_bindable_by_name!(BindableUpdate);

impl BindIdOperation for BindableUpdate {
    fn id_marker(&self) -> &BindMarker {
        &self.id_marker
    }
}
