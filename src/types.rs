use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::dialect::Dialect;
use crate::error::SqlDialectError;

/// Values that can be bound to a statement through a bind marker.
///
/// The same enum is used for every dialect, so callers never branch on driver types:
/// ```rust
/// use sql_dialect::prelude::*;
///
/// let params = vec![
///     RowValues::Int(42055),
///     RowValues::Text("Ninjago Temple".into()),
///     RowValues::Bool(true),
/// ];
/// # let _ = params;
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum RowValues {
    /// Integer value (64-bit)
    Int(i64),
    /// Floating point value (64-bit)
    Float(f64),
    /// Text/string value
    Text(String),
    /// Boolean value
    Bool(bool),
    /// Timestamp value
    Timestamp(NaiveDateTime),
    /// Untyped NULL value
    Null,
    /// JSON value
    JSON(JsonValue),
    /// Binary data
    Blob(Vec<u8>),
}

impl RowValues {
    /// Check if this value is NULL
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// The type tag of this value, `None` for an untyped NULL.
    #[must_use]
    pub fn value_type(&self) -> Option<ValueType> {
        match self {
            RowValues::Int(_) => Some(ValueType::Int),
            RowValues::Float(_) => Some(ValueType::Float),
            RowValues::Text(_) => Some(ValueType::Text),
            RowValues::Bool(_) => Some(ValueType::Bool),
            RowValues::Timestamp(_) => Some(ValueType::Timestamp),
            RowValues::Null => None,
            RowValues::JSON(_) => Some(ValueType::Json),
            RowValues::Blob(_) => Some(ValueType::Blob),
        }
    }
}

/// Type tag for a typed NULL binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    Int,
    Float,
    Text,
    Bool,
    Timestamp,
    Json,
    Blob,
}

/// The database products with a built-in dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseType {
    /// `PostgreSQL` database
    Postgres,
    /// SQL Server database
    Mssql,
}

impl DatabaseType {
    /// The dialect used to render statements for this database.
    #[must_use]
    pub fn dialect(self) -> Dialect {
        match self {
            DatabaseType::Postgres => Dialect::Postgres,
            DatabaseType::Mssql => Dialect::SqlServer,
        }
    }
}

impl FromStr for DatabaseType {
    type Err = SqlDialectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" | "pg" => Ok(DatabaseType::Postgres),
            "mssql" | "sqlserver" | "sql-server" => Ok(DatabaseType::Mssql),
            other => Err(SqlDialectError::ConfigError(format!(
                "unknown database type: {other}"
            ))),
        }
    }
}

impl fmt::Display for DatabaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatabaseType::Postgres => f.write_str("postgres"),
            DatabaseType::Mssql => f.write_str("mssql"),
        }
    }
}
