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
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub balance: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub balance: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUser {
    pub name: String,
    pub balance: f64,
}

impl Validate for NewUser {
    fn validate(&self) -> Result<()> {
        validate_name(&self.name)
    }
}

impl Validate for UpdateUser {
    fn validate(&self) -> Result<()> {
        validate_name(&self.name)
    }
}

impl Entity for User {
    type Create = NewUser;
    type Update = UpdateUser;

    const NAME: &'static str = "User";
    const PLURAL: &'static str = "users";
    const TABLE: &'static str = "users";
    const COLUMNS: &'static str = "id, name, balance, created_at, updated_at";
    const INSERT: &'static str = r#"
        INSERT INTO users (id, name, balance, updated_at)
        VALUES (:id, :name, :balance, now())
    "#;
    const UPDATE: &'static str = r#"
        UPDATE users
        SET name = :name,
            balance = :balance,
            updated_at = now()
        WHERE id = :id
    "#;

    fn create_params(id: Uuid, input: &NewUser) -> NamedParams {
        named_params!(id, input; name, balance)
    }

    fn update_params(id: Uuid, input: &UpdateUser) -> NamedParams {
        named_params!(id, input; name, balance)
    }

    fn repository(storage: &dyn Storage) -> &dyn Repository<Self> {
        storage.users()
    }
}
