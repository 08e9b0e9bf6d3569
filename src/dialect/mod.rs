//! SQL dialects: the per-product facts statement assembly depends on.
//!
//! A dialect is exactly four things: its bind marker strategy, its
//! generated-keys clause, its limit clause syntax and where that clause goes.
//! Everything else is dialect-agnostic.

mod mssql;
mod postgres;

use std::fmt;

use crate::bind_markers::BindMarkersFactory;

/// Where a limit clause is spliced relative to the base query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClausePosition {
    Start,
    End,
}

/// Row-limiting syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LimitSyntax {
    /// `LIMIT <n>`
    Limit,
    /// `FETCH NEXT <n> ROWS ONLY`
    FetchNext,
}

/// A dialect's limit clause: how it renders and where it goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LimitClause {
    syntax: LimitSyntax,
    position: ClausePosition,
}

impl LimitClause {
    #[must_use]
    pub const fn new(syntax: LimitSyntax, position: ClausePosition) -> Self {
        Self { syntax, position }
    }

    /// Render the clause for `limit` rows.
    #[must_use]
    pub fn clause(&self, limit: u64) -> String {
        match self.syntax {
            LimitSyntax::Limit => format!("LIMIT {limit}"),
            LimitSyntax::FetchNext => format!("FETCH NEXT {limit} ROWS ONLY"),
        }
    }

    #[must_use]
    pub fn position(&self) -> ClausePosition {
        self.position
    }
}

/// The supported SQL dialects.
///
/// Dialects are immutable values and can be shared freely:
/// ```rust
/// use sql_dialect::prelude::*;
///
/// let dialect = Dialect::Postgres;
/// let mut markers = dialect.bind_markers_factory().create();
/// assert_eq!(markers.next().placeholder(), "$1");
/// assert_eq!(dialect.generated_keys_clause(), "RETURNING *");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// `PostgreSQL`: `$1`-style indexed markers.
    Postgres,
    /// Microsoft SQL Server: `@P_name`-style named markers.
    SqlServer,
}

impl Dialect {
    /// Bind marker strategy for this dialect.
    #[must_use]
    pub fn bind_markers_factory(&self) -> &'static BindMarkersFactory {
        match self {
            Dialect::Postgres => &postgres::BIND_MARKERS,
            Dialect::SqlServer => &mssql::BIND_MARKERS,
        }
    }

    /// Fragment appended to an `INSERT` to return generated keys; empty when
    /// the dialect needs none.
    #[must_use]
    pub fn generated_keys_clause(&self) -> &'static str {
        match self {
            Dialect::Postgres => postgres::GENERATED_KEYS,
            Dialect::SqlServer => mssql::GENERATED_KEYS,
        }
    }

    /// The limit clause, `None` for dialects without paging support.
    #[must_use]
    pub fn limit(&self) -> Option<LimitClause> {
        match self {
            Dialect::Postgres => Some(postgres::LIMIT),
            Dialect::SqlServer => Some(mssql::LIMIT),
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Dialect::Postgres => "postgres",
            Dialect::SqlServer => "mssql",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
