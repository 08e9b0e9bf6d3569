use super::MarkerMap;
use crate::bind_markers::BindMarkers;

/// `INSERT INTO <table> (<columns>) VALUES(<markers>)`, optionally followed by
/// the dialect's generated-keys clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindableInsert {
    markers: MarkerMap,
    query: String,
}

impl BindableInsert {
    pub(crate) fn new<I, S>(
        mut bind_markers: BindMarkers,
        table: &str,
        columns: I,
        returning: &str,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let (markers, rendered) = MarkerMap::allocate(&mut bind_markers, columns);

        let columns_string = rendered
            .iter()
            .map(|(column, _)| column.as_ref())
            .collect::<Vec<_>>()
            .join(",");
        let placeholders_string = rendered
            .iter()
            .map(|(_, placeholder)| placeholder.as_str())
            .collect::<Vec<_>>()
            .join(",");

        let mut query = format!("INSERT INTO {table} ({columns_string}) VALUES({placeholders_string})");
        if !returning.trim().is_empty() {
            query.push(' ');
            query.push_str(returning);
        }

        Self { markers, query }
    }
}

impl_bindable_by_name!(BindableInsert);
