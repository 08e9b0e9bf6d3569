// PostgreSQL module - hands bound values to tokio-postgres
//
// - params: `ToSql` for bound values and positional parameter slices

pub mod params;

pub use params::Params;
