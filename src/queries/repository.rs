//! The generic data-access contract and its PostgreSQL implementation.

use std::marker::PhantomData;

use async_trait::async_trait;
use tracing::{debug, info};
use uuid::Uuid;

use crate::{
    database::DbPool,
    error::{Error, Result},
    models::{Entity, ListRequest, ListResponse, entity::patch_column},
    queries::{
        list::{count_query, page_query},
        params::{NamedParams, to_positional},
    },
};

/// CRUD operations shared by every entity.
#[async_trait]
pub trait Repository<E: Entity>: Send + Sync {
    /// Inserts a new record and returns its generated id.
    async fn create(&self, input: &E::Create) -> Result<Uuid>;

    /// Fails with `Error::NotFound` when no row has this id.
    async fn get_by_id(&self, id: Uuid) -> Result<E>;

    async fn list(&self, request: &ListRequest) -> Result<ListResponse<E>>;

    /// Replaces every settable field. Returns rows affected.
    async fn update(&self, id: Uuid, input: &E::Update) -> Result<u64>;

    /// Deleting a missing id is not an error.
    async fn delete(&self, id: Uuid) -> Result<()>;

    /// Updates only the supplied columns. Returns rows affected.
    async fn patch(&self, id: Uuid, fields: &NamedParams) -> Result<u64>;
}

/// `Repository` over a PostgreSQL pool, driven entirely by `E`'s definition.
pub struct PgRepository<E> {
    pool: DbPool,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity> PgRepository<E> {
    pub fn new(pool: DbPool) -> Self {
        Self {
            pool,
            _entity: PhantomData,
        }
    }
}

/// `UPDATE` touching exactly `columns`, plus `updated_at` when the table has it.
pub(crate) fn patch_template<'a, E: Entity>(columns: impl Iterator<Item = &'a str>) -> String {
    let mut assignments: Vec<String> = columns
        .map(|column| format!("{column} = :{column}"))
        .collect();
    if E::HAS_UPDATED_AT {
        assignments.push("updated_at = now()".to_string());
    }

    format!(
        "UPDATE {} SET {} WHERE id = :id",
        E::TABLE,
        assignments.join(", ")
    )
}

#[async_trait]
impl<E: Entity> Repository<E> for PgRepository<E> {
    async fn create(&self, input: &E::Create) -> Result<Uuid> {
        let id = Uuid::new_v4();
        let statement = to_positional(E::INSERT, &E::create_params(id, input))?;

        statement.query().execute(&self.pool).await?;

        info!(entity = E::NAME, id = %id, "Record created");
        Ok(id)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<E> {
        debug!(entity = E::NAME, id = %id, "Fetching record");

        let sql = format!("SELECT {} FROM {} WHERE id = $1", E::COLUMNS, E::TABLE);
        sqlx::query_as::<_, E>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Error::NotFound(format!("{} not found", E::NAME)))
    }

    async fn list(&self, request: &ListRequest) -> Result<ListResponse<E>> {
        debug!(
            entity = E::NAME,
            offset = request.offset,
            limit = request.limit,
            search = %request.search,
            "Listing records"
        );

        let mut count = count_query::<E>(&request.search);
        let total = count.build_query_scalar::<i64>().fetch_one(&self.pool).await?;

        let mut page = page_query::<E>(request);
        let items = page.build_query_as::<E>().fetch_all(&self.pool).await?;

        Ok(ListResponse {
            count: total,
            items,
        })
    }

    async fn update(&self, id: Uuid, input: &E::Update) -> Result<u64> {
        let statement = to_positional(E::UPDATE, &E::update_params(id, input))?;

        let rows = statement.query().execute(&self.pool).await?.rows_affected();

        info!(entity = E::NAME, id = %id, rows, "Record updated");
        Ok(rows)
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        let sql = format!("DELETE FROM {} WHERE id = $1", E::TABLE);
        let rows = sqlx::query(&sql)
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        info!(entity = E::NAME, id = %id, rows, "Record deleted");
        Ok(())
    }

    async fn patch(&self, id: Uuid, fields: &NamedParams) -> Result<u64> {
        if fields.is_empty() {
            return Err(Error::Validation("no fields to update".to_string()));
        }
        if E::PATCHABLE.is_empty() {
            return Err(Error::Validation(format!(
                "{} does not support partial updates",
                E::NAME
            )));
        }
        if let Some(column) = fields.names().find(|name| patch_column::<E>(name).is_none()) {
            return Err(Error::Validation(format!(
                "Field `{}` cannot be patched on {}",
                column,
                E::NAME
            )));
        }

        let template = patch_template::<E>(fields.names());
        let statement = to_positional(&template, &fields.clone().with("id", id))?;

        let rows = statement.query().execute(&self.pool).await?.rows_affected();

        info!(entity = E::NAME, id = %id, fields = fields.len(), rows, "Record patched");
        Ok(rows)
    }
}
