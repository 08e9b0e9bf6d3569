//! Dialect-aware SQL statement assembly and parameter binding.
//!
//! A [`Dialect`](dialect::Dialect) knows how its database spells bind markers,
//! row limits and generated-key retrieval. The
//! [`StatementFactory`](statement_factory::StatementFactory) turns a dialect,
//! a table and its columns into operations whose values are bound by logical
//! column name, whatever the marker syntax:
//!
//! ```rust
//! use sql_dialect::prelude::*;
//!
//! let factory = StatementFactory::for_database(DatabaseType::Mssql);
//! let select = factory.select_by_id_with_limit("legoset", ["id", "name"], "id", 1)?;
//! assert_eq!(
//!     select.to_query(),
//!     "SELECT id, name FROM legoset WHERE id = @P_id FETCH NEXT 1 ROWS ONLY"
//! );
//!
//! let mut params = BoundParams::new();
//! select.bind_id(&mut params, RowValues::Int(42055))?;
//! assert!(params.get_name("P_id").is_some());
//! # Ok::<(), SqlDialectError>(())
//! ```

pub mod bind_markers;
pub mod dialect;
pub mod error;
pub mod insert_values;
pub mod operation;
pub mod prelude;
pub mod sink;
pub mod statement_factory;
pub mod types;

#[cfg(feature = "postgres")]
pub mod postgres;

pub use error::SqlDialectError;
