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

/// A product belonging to a category.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub price: f64,
    pub category_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub category_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateProduct {
    pub name: String,
    pub price: f64,
    pub category_id: Uuid,
}

impl Validate for NewProduct {
    fn validate(&self) -> Result<()> {
        validate_name(&self.name)
    }
}

impl Validate for UpdateProduct {
    fn validate(&self) -> Result<()> {
        validate_name(&self.name)
    }
}

impl Entity for Product {
    type Create = NewProduct;
    type Update = UpdateProduct;

    const NAME: &'static str = "Product";
    const PLURAL: &'static str = "products";
    const TABLE: &'static str = "product";
    const COLUMNS: &'static str = "id, name, price, category_id, created_at, updated_at";
    const INSERT: &'static str = r#"
        INSERT INTO product (id, name, price, category_id, updated_at)
        VALUES (:id, :name, :price, :category_id, now())
    "#;
    const UPDATE: &'static str = r#"
        UPDATE product
        SET name = :name,
            price = :price,
            category_id = :category_id,
            updated_at = now()
        WHERE id = :id
    "#;

    fn create_params(id: Uuid, input: &NewProduct) -> NamedParams {
        named_params!(id, input; name, price, category_id)
    }

    fn update_params(id: Uuid, input: &UpdateProduct) -> NamedParams {
        named_params!(id, input; name, price, category_id)
    }

    fn repository(storage: &dyn Storage) -> &dyn Repository<Self> {
        storage.products()
    }
}
