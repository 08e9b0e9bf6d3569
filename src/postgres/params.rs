use std::error::Error;

use tokio_postgres::types::{IsNull, ToSql, Type, to_sql_checked};
use tokio_util::bytes;

use crate::error::SqlDialectError;
use crate::sink::{BoundParams, BoundValue};
use crate::types::RowValues;

/// Container for Postgres parameters with lifetime tracking
pub struct Params<'a> {
    references: Vec<&'a (dyn ToSql + Sync)>,
}

impl<'a> Params<'a> {
    /// Order the values bound through `$n` markers for `Client::query`/`execute`.
    ///
    /// # Errors
    ///
    /// Returns `SqlDialectError::ParameterError` if a value was bound by name or
    /// an index between the first and last binding was never bound.
    pub fn convert(params: &'a BoundParams) -> Result<Params<'a>, SqlDialectError> {
        let ordered = params.positional()?;

        // Pre-allocate capacity for better performance
        let mut references = Vec::with_capacity(ordered.len());
        for value in ordered {
            references.push(value as &(dyn ToSql + Sync));
        }

        Ok(Params { references })
    }

    /// Get a reference to the underlying parameter array
    #[must_use]
    pub fn as_refs(&self) -> &[&(dyn ToSql + Sync)] {
        &self.references
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.references.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.references.is_empty()
    }
}

impl ToSql for RowValues {
    fn to_sql(
        &self,
        ty: &Type,
        out: &mut bytes::BytesMut,
    ) -> Result<IsNull, Box<dyn Error + Sync + Send>> {
        // Narrow to the parameter's wire width; mismatches fall through to the
        // inner type's own check.
        match self {
            RowValues::Int(i) => match *ty {
                Type::INT2 => i16::try_from(*i)
                    .map_err(|_| format!("{i} out of range for {ty}"))?
                    .to_sql(ty, out),
                Type::INT4 => i32::try_from(*i)
                    .map_err(|_| format!("{i} out of range for {ty}"))?
                    .to_sql(ty, out),
                _ => i.to_sql_checked(ty, out),
            },
            #[allow(clippy::cast_possible_truncation)]
            RowValues::Float(f) => match *ty {
                Type::FLOAT4 => (*f as f32).to_sql(ty, out),
                _ => f.to_sql_checked(ty, out),
            },
            RowValues::Text(s) => s.to_sql_checked(ty, out),
            RowValues::Bool(b) => b.to_sql_checked(ty, out),
            RowValues::Timestamp(dt) => match *ty {
                Type::TIMESTAMPTZ => dt.and_utc().to_sql(ty, out),
                Type::DATE => dt.date().to_sql(ty, out),
                _ => dt.to_sql_checked(ty, out),
            },
            RowValues::Null => Ok(IsNull::Yes),
            RowValues::JSON(jsval) => jsval.to_sql_checked(ty, out),
            RowValues::Blob(bytes) => bytes.to_sql_checked(ty, out),
        }
    }

    fn accepts(ty: &Type) -> bool {
        // Only accept types we can properly handle
        match *ty {
            // Integer types
            Type::INT2 | Type::INT4 | Type::INT8 => true,
            // Floating point types
            Type::FLOAT4 | Type::FLOAT8 => true,
            // Text types
            Type::TEXT | Type::VARCHAR | Type::BPCHAR | Type::NAME => true,
            // Boolean type
            Type::BOOL => true,
            // Date/time types
            Type::TIMESTAMP | Type::TIMESTAMPTZ | Type::DATE => true,
            // JSON types
            Type::JSON | Type::JSONB => true,
            // Binary data
            Type::BYTEA => true,
            // For any other type, we don't accept
            _ => false,
        }
    }

    to_sql_checked!();
}

impl ToSql for BoundValue {
    fn to_sql(
        &self,
        ty: &Type,
        out: &mut bytes::BytesMut,
    ) -> Result<IsNull, Box<dyn Error + Sync + Send>> {
        match self {
            BoundValue::Value(value) => value.to_sql_checked(ty, out),
            // The server infers the parameter type from the statement.
            BoundValue::Null(_) => Ok(IsNull::Yes),
        }
    }

    // A typed null fits any column; concrete values are checked in `to_sql`.
    fn accepts(_ty: &Type) -> bool {
        true
    }

    to_sql_checked!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::{BindTarget, StatementSink};
    use crate::types::ValueType;

    #[test]
    fn converts_in_index_order() {
        let mut bound = BoundParams::new();
        bound.bind(BindTarget::Index(1), RowValues::Text("X".into())).unwrap();
        bound.bind_null(BindTarget::Index(2), ValueType::Int).unwrap();
        bound.bind(BindTarget::Index(0), RowValues::Int(42055)).unwrap();

        let params = Params::convert(&bound).unwrap();
        assert_eq!(params.len(), 3);
        assert_eq!(params.as_refs().len(), 3);
    }

    #[test]
    fn typed_null_encodes_as_null() {
        let mut out = bytes::BytesMut::new();
        let is_null = BoundValue::Null(ValueType::Int)
            .to_sql(&Type::INT8, &mut out)
            .unwrap();
        assert!(matches!(is_null, IsNull::Yes));
        assert!(out.is_empty());
    }

    #[test]
    fn int_value_encodes_big_endian() {
        let mut out = bytes::BytesMut::new();
        let is_null = BoundValue::Value(RowValues::Int(7))
            .to_sql(&Type::INT8, &mut out)
            .unwrap();
        assert!(matches!(is_null, IsNull::No));
        assert_eq!(&out[..], &7i64.to_be_bytes());
    }

    #[test]
    fn int_narrows_to_int4_and_int2() {
        let mut out = bytes::BytesMut::new();
        BoundValue::Value(RowValues::Int(42055))
            .to_sql_checked(&Type::INT4, &mut out)
            .unwrap();
        assert_eq!(&out[..], &42055i32.to_be_bytes());

        let mut out = bytes::BytesMut::new();
        RowValues::Int(-3).to_sql_checked(&Type::INT2, &mut out).unwrap();
        assert_eq!(&out[..], &(-3i16).to_be_bytes());
    }

    #[test]
    fn int_out_of_range_for_column_is_an_error() {
        let mut out = bytes::BytesMut::new();
        assert!(RowValues::Int(70_000).to_sql_checked(&Type::INT2, &mut out).is_err());
        assert!(
            RowValues::Int(i64::from(i32::MAX) + 1)
                .to_sql_checked(&Type::INT4, &mut out)
                .is_err()
        );
    }

    #[test]
    fn float_narrows_to_float4() {
        let mut out = bytes::BytesMut::new();
        RowValues::Float(1.5).to_sql_checked(&Type::FLOAT4, &mut out).unwrap();
        assert_eq!(&out[..], &1.5f32.to_be_bytes());
    }

    #[test]
    fn mismatched_value_is_rejected() {
        let mut out = bytes::BytesMut::new();
        assert!(RowValues::Int(1).to_sql_checked(&Type::TEXT, &mut out).is_err());
        assert!(
            BoundValue::Value(RowValues::Text("x".into()))
                .to_sql_checked(&Type::INT4, &mut out)
                .is_err()
        );
        assert!(out.is_empty());
    }

    #[test]
    fn typed_null_fits_any_column() {
        let mut out = bytes::BytesMut::new();
        let is_null = BoundValue::Null(ValueType::Float)
            .to_sql_checked(&Type::NUMERIC, &mut out)
            .unwrap();
        assert!(matches!(is_null, IsNull::Yes));
    }

    #[test]
    fn named_bindings_are_rejected() {
        let mut bound = BoundParams::new();
        bound.bind(BindTarget::Name("P_id"), RowValues::Int(1)).unwrap();
        assert!(Params::convert(&bound).is_err());
    }
}
