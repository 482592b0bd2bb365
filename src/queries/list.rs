//! SQL for paginated, searchable listings.
//!
//! Both the count and the page are built with `QueryBuilder`, so the search
//! term, offset and limit are always bound parameters.

use sqlx::{Postgres, QueryBuilder};

use crate::models::{Entity, ListRequest};

/// Escapes `LIKE` wildcards so the term matches literally.
/// Backslash is PostgreSQL's default escape character.
pub fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn push_search(builder: &mut QueryBuilder<'static, Postgres>, search: &str) {
    if !search.is_empty() {
        builder
            .push(" WHERE name ILIKE '%' || ")
            .push_bind(escape_like(search))
            .push(" || '%'");
    }
}

/// Total rows of `E` matching `search`.
pub fn count_query<E: Entity>(search: &str) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(format!("SELECT COUNT(*) FROM {}", E::TABLE));
    push_search(&mut builder, search);
    builder
}

/// One page of `E`, newest first.
pub fn page_query<E: Entity>(request: &ListRequest) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(format!("SELECT {} FROM {}", E::COLUMNS, E::TABLE));
    push_search(&mut builder, &request.search);
    builder
        .push(" ORDER BY created_at DESC, id OFFSET ")
        .push_bind(request.offset)
        .push(" LIMIT ")
        .push_bind(request.limit);
    builder
}
