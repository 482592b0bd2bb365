use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::{
    error::Result,
    models::entity::{ColumnKind, Entity},
    queries::{
        params::{NamedParams, named_params},
        repository::Repository,
        store::Storage,
    },
    validation::{Validate, validate_name, validate_non_negative},
};

/// An order placed by a customer for a product, delivered by a courier.
///
/// `latitude`/`longitude` locate the delivery address. Referenced ids are
/// checked by the database's foreign keys, not here.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Order {
    pub id: Uuid,
    pub name: String,
    pub price: f64,
    pub phone_number: String,
    pub latitude: f64,
    pub longitude: f64,
    pub user_id: Uuid,
    pub customer_id: Uuid,
    pub courier_id: Uuid,
    pub product_id: Uuid,
    pub quantity: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewOrder {
    pub name: String,
    pub price: f64,
    pub phone_number: String,
    pub latitude: f64,
    #[serde(alias = "longtitude")]
    pub longitude: f64,
    pub user_id: Uuid,
    pub customer_id: Uuid,
    pub courier_id: Uuid,
    pub product_id: Uuid,
    pub quantity: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateOrder {
    pub name: String,
    pub price: f64,
    pub phone_number: String,
    pub latitude: f64,
    #[serde(alias = "longtitude")]
    pub longitude: f64,
    pub user_id: Uuid,
    pub customer_id: Uuid,
    pub courier_id: Uuid,
    pub product_id: Uuid,
    pub quantity: i32,
}

impl Validate for NewOrder {
    fn validate(&self) -> Result<()> {
        validate_name(&self.name)?;
        validate_non_negative("quantity", self.quantity)
    }
}

impl Validate for UpdateOrder {
    fn validate(&self) -> Result<()> {
        validate_name(&self.name)?;
        validate_non_negative("quantity", self.quantity)
    }
}

impl Entity for Order {
    type Create = NewOrder;
    type Update = UpdateOrder;

    const NAME: &'static str = "Order";
    const PLURAL: &'static str = "orders";
    const TABLE: &'static str = "orders";
    const COLUMNS: &'static str = "id, name, price, phone_number, latitude, longitude, user_id, \
                                   customer_id, courier_id, product_id, quantity, created_at, \
                                   updated_at";
    const INSERT: &'static str = r#"
        INSERT INTO orders (
            id, name, price, phone_number, latitude, longitude,
            user_id, customer_id, courier_id, product_id, quantity, updated_at
        )
        VALUES (
            :id, :name, :price, :phone_number, :latitude, :longitude,
            :user_id, :customer_id, :courier_id, :product_id, :quantity, now()
        )
    "#;
    const UPDATE: &'static str = r#"
        UPDATE orders
        SET name = :name,
            price = :price,
            phone_number = :phone_number,
            latitude = :latitude,
            longitude = :longitude,
            user_id = :user_id,
            customer_id = :customer_id,
            courier_id = :courier_id,
            product_id = :product_id,
            quantity = :quantity,
            updated_at = now()
        WHERE id = :id
    "#;
    const PATCHABLE: &'static [(&'static str, ColumnKind)] = &[
        ("name", ColumnKind::Text),
        ("price", ColumnKind::Float),
        ("phone_number", ColumnKind::Text),
        ("latitude", ColumnKind::Float),
        ("longitude", ColumnKind::Float),
        ("user_id", ColumnKind::Uuid),
        ("customer_id", ColumnKind::Uuid),
        ("courier_id", ColumnKind::Uuid),
        ("product_id", ColumnKind::Uuid),
        ("quantity", ColumnKind::Int),
    ];

    fn create_params(id: Uuid, input: &NewOrder) -> NamedParams {
        named_params!(id, input; name, price, phone_number, latitude, longitude,
            user_id, customer_id, courier_id, product_id, quantity)
    }

    fn update_params(id: Uuid, input: &UpdateOrder) -> NamedParams {
        named_params!(id, input; name, price, phone_number, latitude, longitude,
            user_id, customer_id, courier_id, product_id, quantity)
    }

    fn repository(storage: &dyn Storage) -> &dyn Repository<Self> {
        storage.orders()
    }
}
