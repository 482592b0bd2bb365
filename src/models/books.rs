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
    validation::{Validate, validate_name, validate_non_negative},
};

/// A book with its commercial figures. Cost, sale price, profit and profit
/// status are stored exactly as the caller supplies them.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Book {
    pub id: Uuid,
    pub name: String,
    pub price: f64,
    pub count: i32,
    pub cost_price: f64,
    pub profit_status: String,
    pub profit: f64,
    pub sell_price: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewBook {
    pub name: String,
    pub price: f64,
    pub count: i32,
    #[serde(alias = "came_price")]
    pub cost_price: f64,
    pub profit_status: String,
    pub profit: f64,
    pub sell_price: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateBook {
    pub name: String,
    pub price: f64,
    pub count: i32,
    #[serde(alias = "came_price")]
    pub cost_price: f64,
    pub profit_status: String,
    pub profit: f64,
    pub sell_price: f64,
}

impl Validate for NewBook {
    fn validate(&self) -> Result<()> {
        validate_name(&self.name)?;
        validate_non_negative("count", self.count)
    }
}

impl Validate for UpdateBook {
    fn validate(&self) -> Result<()> {
        validate_name(&self.name)?;
        validate_non_negative("count", self.count)
    }
}

impl Entity for Book {
    type Create = NewBook;
    type Update = UpdateBook;

    const NAME: &'static str = "Book";
    const PLURAL: &'static str = "books";
    const TABLE: &'static str = "book";
    const COLUMNS: &'static str = "id, name, price, count, cost_price, profit_status, profit, \
                                   sell_price, created_at, updated_at";
    const INSERT: &'static str = r#"
        INSERT INTO book (
            id, name, price, count, cost_price, profit_status, profit, sell_price, updated_at
        )
        VALUES (:id, :name, :price, :count, :cost_price, :profit_status, :profit, :sell_price, now())
    "#;
    const UPDATE: &'static str = r#"
        UPDATE book
        SET name = :name,
            price = :price,
            count = :count,
            cost_price = :cost_price,
            profit_status = :profit_status,
            profit = :profit,
            sell_price = :sell_price,
            updated_at = now()
        WHERE id = :id
    "#;

    fn create_params(id: Uuid, input: &NewBook) -> NamedParams {
        named_params!(id, input; name, price, count, cost_price, profit_status, profit, sell_price)
    }

    fn update_params(id: Uuid, input: &UpdateBook) -> NamedParams {
        named_params!(id, input; name, price, count, cost_price, profit_status, profit, sell_price)
    }

    fn repository(storage: &dyn Storage) -> &dyn Repository<Self> {
        storage.books()
    }
}
