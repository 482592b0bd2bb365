use serde::{Deserialize, Serialize, Serializer, ser::SerializeMap};

use crate::{
    config::PaginationConfig,
    error::Result,
    models::entity::Entity,
    validation::parse_query_number,
};

/// Raw `?offset=&limit=&search=` query string, parsed leniently so bad numbers
/// are reported through the response envelope.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListParams {
    pub offset: Option<String>,
    pub limit: Option<String>,
    pub search: Option<String>,
}

/// A validated list request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRequest {
    pub offset: i64,
    pub limit: i64,
    /// Substring matched case-insensitively against `name`, exactly as sent.
    /// Empty means no filter.
    pub search: String,
}

impl ListRequest {
    /// Applies the shared defaults: offset 0, `default_limit` when the limit is
    /// absent or 0, and never more than `max_limit`.
    pub fn from_params(params: &ListParams, pagination: PaginationConfig) -> Result<Self> {
        let offset = parse_query_number("offset", params.offset.as_deref())?.unwrap_or(0);
        let limit = match parse_query_number("limit", params.limit.as_deref())? {
            None | Some(0) => pagination.default_limit,
            Some(limit) => limit.min(pagination.max_limit),
        };

        Ok(Self {
            offset: i64::from(offset),
            limit: i64::from(limit),
            search: params.search.clone().unwrap_or_default(),
        })
    }
}

/// One page of records plus the total number of rows matching the filter.
#[derive(Debug, Clone)]
pub struct ListResponse<E> {
    pub count: i64,
    pub items: Vec<E>,
}

/// Serializes as `{"count": n, "<plural>": [...]}`.
impl<E: Entity> Serialize for ListResponse<E> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("count", &self.count)?;
        map.serialize_entry(E::PLURAL, &self.items)?;
        map.end()
    }
}
