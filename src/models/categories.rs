use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::{
    error::Result,
    models::entity::Entity,
    queries::{
        params::{NamedParams, named_params},
        repository::Repository,
        store::Storage,
    },
    validation::{Validate, validate_name},
};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCategory {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateCategory {
    pub name: String,
}

impl Validate for NewCategory {
    fn validate(&self) -> Result<()> {
        validate_name(&self.name)
    }
}

impl Validate for UpdateCategory {
    fn validate(&self) -> Result<()> {
        validate_name(&self.name)
    }
}

impl Entity for Category {
    type Create = NewCategory;
    type Update = UpdateCategory;

    const NAME: &'static str = "Category";
    const PLURAL: &'static str = "categories";
    const TABLE: &'static str = "categories";
    const COLUMNS: &'static str = "id, name, created_at";
    const INSERT: &'static str = "INSERT INTO categories (id, name) VALUES (:id, :name)";
    const UPDATE: &'static str = "UPDATE categories SET name = :name WHERE id = :id";
    const HAS_UPDATED_AT: bool = false;

    fn create_params(id: Uuid, input: &NewCategory) -> NamedParams {
        named_params!(id, input; name)
    }

    fn update_params(id: Uuid, input: &UpdateCategory) -> NamedParams {
        named_params!(id, input; name)
    }

    fn repository(storage: &dyn Storage) -> &dyn Repository<Self> {
        storage.categories()
    }
}
