use super::{ClausePosition, LimitClause, LimitSyntax};
use crate::bind_markers::BindMarkersFactory;

pub(super) static BIND_MARKERS: BindMarkersFactory = BindMarkersFactory::indexed("$", 1);

pub(super) const GENERATED_KEYS: &str = "RETURNING *";

pub(super) const LIMIT: LimitClause = LimitClause::new(LimitSyntax::Limit, ClausePosition::End);
