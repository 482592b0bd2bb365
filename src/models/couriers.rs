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
pub struct Courier {
    pub id: Uuid,
    pub name: String,
    pub phone_number: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCourier {
    pub name: String,
    pub phone_number: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateCourier {
    pub name: String,
    pub phone_number: String,
}

impl Validate for NewCourier {
    fn validate(&self) -> Result<()> {
        validate_name(&self.name)
    }
}

impl Validate for UpdateCourier {
    fn validate(&self) -> Result<()> {
        validate_name(&self.name)
    }
}

impl Entity for Courier {
    type Create = NewCourier;
    type Update = UpdateCourier;

    const NAME: &'static str = "Courier";
    const PLURAL: &'static str = "couriers";
    const TABLE: &'static str = "courier";
    const COLUMNS: &'static str = "id, name, phone_number, created_at, updated_at";
    const INSERT: &'static str = r#"
        INSERT INTO courier (id, name, phone_number, updated_at)
        VALUES (:id, :name, :phone_number, now())
    "#;
    const UPDATE: &'static str = r#"
        UPDATE courier
        SET name = :name,
            phone_number = :phone_number,
            updated_at = now()
        WHERE id = :id
    "#;

    fn create_params(id: Uuid, input: &NewCourier) -> NamedParams {
        named_params!(id, input; name, phone_number)
    }

    fn update_params(id: Uuid, input: &UpdateCourier) -> NamedParams {
        named_params!(id, input; name, phone_number)
    }

    fn repository(storage: &dyn Storage) -> &dyn Repository<Self> {
        storage.couriers()
    }
}
