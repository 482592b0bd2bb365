//! Aggregates one repository per entity behind a single handle.

use async_trait::async_trait;

use crate::{
    config::DatabaseConfig,
    database::{self, DbPool},
    error::Result,
    models::{
        authors::Author, books::Book, categories::Category, couriers::Courier,
        customers::Customer, orders::Order, products::Product, users::User,
    },
    queries::repository::{PgRepository, Repository},
};

/// Access to every entity's repository.
#[async_trait]
pub trait Storage: Send + Sync {
    fn books(&self) -> &dyn Repository<Book>;
    fn users(&self) -> &dyn Repository<User>;
    fn authors(&self) -> &dyn Repository<Author>;
    fn customers(&self) -> &dyn Repository<Customer>;
    fn couriers(&self) -> &dyn Repository<Courier>;
    fn products(&self) -> &dyn Repository<Product>;
    fn categories(&self) -> &dyn Repository<Category>;
    fn orders(&self) -> &dyn Repository<Order>;

    /// Releases the underlying connections.
    async fn close(&self);
}

/// PostgreSQL-backed `Storage`. All repositories share one pool.
pub struct Store {
    pool: DbPool,
    books: PgRepository<Book>,
    users: PgRepository<User>,
    authors: PgRepository<Author>,
    customers: PgRepository<Customer>,
    couriers: PgRepository<Courier>,
    products: PgRepository<Product>,
    categories: PgRepository<Category>,
    orders: PgRepository<Order>,
}

impl Store {
    pub fn new(pool: DbPool) -> Self {
        Self {
            books: PgRepository::new(pool.clone()),
            users: PgRepository::new(pool.clone()),
            authors: PgRepository::new(pool.clone()),
            customers: PgRepository::new(pool.clone()),
            couriers: PgRepository::new(pool.clone()),
            products: PgRepository::new(pool.clone()),
            categories: PgRepository::new(pool.clone()),
            orders: PgRepository::new(pool.clone()),
            pool,
        }
    }

    /// Opens a pool from `config` and builds the store on it.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let pool = database::connect(config).await?;
        Ok(Self::new(pool))
    }
}

#[async_trait]
impl Storage for Store {
    fn books(&self) -> &dyn Repository<Book> {
        &self.books
    }

    fn users(&self) -> &dyn Repository<User> {
        &self.users
    }

    fn authors(&self) -> &dyn Repository<Author> {
        &self.authors
    }

    fn customers(&self) -> &dyn Repository<Customer> {
        &self.customers
    }

    fn couriers(&self) -> &dyn Repository<Courier> {
        &self.couriers
    }

    fn products(&self) -> &dyn Repository<Product> {
        &self.products
    }

    fn categories(&self) -> &dyn Repository<Category> {
        &self.categories
    }

    fn orders(&self) -> &dyn Repository<Order> {
        &self.orders
    }

    async fn close(&self) {
        tracing::info!("Closing database pool");
        self.pool.close().await;
    }
}
