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

/// Authors carry no modification timestamp.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Author {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAuthor {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateAuthor {
    pub name: String,
}

impl Validate for NewAuthor {
    fn validate(&self) -> Result<()> {
        validate_name(&self.name)
    }
}

impl Validate for UpdateAuthor {
    fn validate(&self) -> Result<()> {
        validate_name(&self.name)
    }
}

impl Entity for Author {
    type Create = NewAuthor;
    type Update = UpdateAuthor;

    const NAME: &'static str = "Author";
    const PLURAL: &'static str = "authors";
    const TABLE: &'static str = "author";
    const COLUMNS: &'static str = "id, name, created_at";
    const INSERT: &'static str = "INSERT INTO author (id, name) VALUES (:id, :name)";
    const UPDATE: &'static str = "UPDATE author SET name = :name WHERE id = :id";
    const HAS_UPDATED_AT: bool = false;

    fn create_params(id: Uuid, input: &NewAuthor) -> NamedParams {
        named_params!(id, input; name)
    }

    fn update_params(id: Uuid, input: &UpdateAuthor) -> NamedParams {
        named_params!(id, input; name)
    }

    fn repository(storage: &dyn Storage) -> &dyn Repository<Self> {
        storage.authors()
    }
}
