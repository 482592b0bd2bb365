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
pub struct Customer {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCustomer {
    pub name: String,
    pub phone: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateCustomer {
    pub name: String,
    pub phone: String,
}

impl Validate for NewCustomer {
    fn validate(&self) -> Result<()> {
        validate_name(&self.name)
    }
}

impl Validate for UpdateCustomer {
    fn validate(&self) -> Result<()> {
        validate_name(&self.name)
    }
}

impl Entity for Customer {
    type Create = NewCustomer;
    type Update = UpdateCustomer;

    const NAME: &'static str = "Customer";
    const PLURAL: &'static str = "customers";
    const TABLE: &'static str = "customers";
    const COLUMNS: &'static str = "id, name, phone, created_at, updated_at";
    const INSERT: &'static str = r#"
        INSERT INTO customers (id, name, phone, updated_at)
        VALUES (:id, :name, :phone, now())
    "#;
    const UPDATE: &'static str = r#"
        UPDATE customers
        SET name = :name,
            phone = :phone,
            updated_at = now()
        WHERE id = :id
    "#;

    fn create_params(id: Uuid, input: &NewCustomer) -> NamedParams {
        named_params!(id, input; name, phone)
    }

    fn update_params(id: Uuid, input: &UpdateCustomer) -> NamedParams {
        named_params!(id, input; name, phone)
    }

    fn repository(storage: &dyn Storage) -> &dyn Repository<Self> {
        storage.customers()
    }
}
