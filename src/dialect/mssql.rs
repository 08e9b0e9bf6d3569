use super::{ClausePosition, LimitClause, LimitSyntax};
use crate::bind_markers::{BindMarkersFactory, filter_ascii_alphanumeric};

// Marker names (without `@`) are capped at 32 characters.
pub(super) static BIND_MARKERS: BindMarkersFactory =
    BindMarkersFactory::named("@", "P", 32, filter_ascii_alphanumeric);

pub(super) const GENERATED_KEYS: &str = "select SCOPE_IDENTITY() AS GENERATED_KEYS";

pub(super) const LIMIT: LimitClause =
    LimitClause::new(LimitSyntax::FetchNext, ClausePosition::End);
