//! Statement assembly: combines a [`Dialect`] with table and column names into
//! bindable operations.

use tracing::debug;

use crate::dialect::Dialect;
use crate::error::SqlDialectError;
use crate::insert_values::InsertValues;
use crate::operation::{
    BindableInsert, BindableOperation, BindableSelect, BindableUpdate, QueryOperation,
    trailing_limit,
};
use crate::sink::StatementSink;
use crate::types::DatabaseType;

/// Builds operations for one dialect.
///
/// ```rust
/// use sql_dialect::prelude::*;
///
/// let factory = StatementFactory::new(Dialect::Postgres);
/// let insert = factory.insert_and_return_generated_keys("legoset", ["id", "name", "manual"]);
/// assert_eq!(
///     insert.to_query(),
///     "INSERT INTO legoset (id,name,manual) VALUES($1,$2,$3) RETURNING *"
/// );
///
/// let mut params = BoundParams::new();
/// insert.bind(&mut params, "id", RowValues::Int(42055))?;
/// insert.bind_null(&mut params, "manual", ValueType::Int)?;
/// # Ok::<(), SqlDialectError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatementFactory {
    dialect: Dialect,
}

impl StatementFactory {
    #[must_use]
    pub fn new(dialect: Dialect) -> Self {
        Self { dialect }
    }

    #[must_use]
    pub fn for_database(database_type: DatabaseType) -> Self {
        Self::new(database_type.dialect())
    }

    #[must_use]
    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Projection for a select: the given columns, or `*` when there are none.
    #[must_use]
    pub fn all_columns<I, S>(columns: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let columns: Vec<String> = columns
            .into_iter()
            .map(|column| column.as_ref().to_string())
            .collect();

        if columns.is_empty() {
            return vec!["*".to_string()];
        }
        columns
    }

    /// `INSERT` of `columns` into `table`, returning generated keys where the
    /// dialect supports it. Each column is bindable by its name.
    pub fn insert_and_return_generated_keys<I, S>(&self, table: &str, columns: I) -> BindableInsert
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let insert = BindableInsert::new(
            self.dialect.bind_markers_factory().create(),
            table,
            columns,
            self.dialect.generated_keys_clause(),
        );
        debug!(dialect = %self.dialect, sql = insert.to_query(), "built insert");
        insert
    }

    /// `INSERT` of every collected value, bound onto `sink`.
    ///
    /// # Errors
    ///
    /// Returns `SqlDialectError::ParameterError` if `values` is empty, or the
    /// first error raised while binding. Binding stops there, so `sink` may
    /// hold only some of the values; discard it or rebind every value.
    pub fn insert_values(
        &self,
        table: &str,
        values: &InsertValues,
        sink: &mut dyn StatementSink,
    ) -> Result<BindableInsert, SqlDialectError> {
        if values.is_empty() {
            return Err(SqlDialectError::ParameterError(format!(
                "no values to insert into {table}"
            )));
        }

        let insert = self.insert_and_return_generated_keys(table, values.column_names());
        insert.bind_all(sink, values.as_slice())?;
        Ok(insert)
    }

    /// `UPDATE` of `columns` on the row whose `id_column` matches the id marker.
    pub fn update_by_id<I, S>(&self, table: &str, columns: I, id_column: &str) -> BindableUpdate
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let update = BindableUpdate::new(
            self.dialect.bind_markers_factory().create(),
            table,
            columns,
            id_column,
        );
        debug!(dialect = %self.dialect, sql = update.to_query(), "built update");
        update
    }

    /// `SELECT` of `columns` from the row whose `id_column` matches the id marker.
    pub fn select_by_id<I, S>(&self, table: &str, columns: I, id_column: &str) -> BindableSelect
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let column_clause = Self::all_columns(columns).join(", ");

        let select = BindableSelect::new(
            self.dialect.bind_markers_factory().create(),
            id_column,
            |marker| {
                format!(
                    "SELECT {column_clause} FROM {table} WHERE {id_column} = {}",
                    marker.placeholder()
                )
            },
        );
        debug!(dialect = %self.dialect, sql = select.to_query(), "built select");
        select
    }

    /// Same as [`StatementFactory::select_by_id`], limited to `limit` rows.
    ///
    /// # Errors
    ///
    /// Returns `SqlDialectError::Unimplemented` if the dialect has no limit
    /// clause, and `SqlDialectError::Unsupported` if its clause does not go at
    /// the end of the statement.
    pub fn select_by_id_with_limit<I, S>(
        &self,
        table: &str,
        columns: I,
        id_column: &str,
        limit: u64,
    ) -> Result<BindableSelect, SqlDialectError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let limit_clause = self.dialect.limit().ok_or_else(|| {
            SqlDialectError::Unimplemented(format!(
                "dialect {} has no limit clause",
                self.dialect
            ))
        })?;
        let limit_text = trailing_limit(limit_clause, limit)?;
        let column_clause = Self::all_columns(columns).join(", ");

        let select = BindableSelect::new(
            self.dialect.bind_markers_factory().create(),
            id_column,
            |marker| {
                format!(
                    "SELECT {column_clause} FROM {table} WHERE {id_column} = {} {limit_text}",
                    marker.placeholder()
                )
            },
        );
        debug!(dialect = %self.dialect, sql = select.to_query(), limit, "built limited select");
        Ok(select)
    }
}
