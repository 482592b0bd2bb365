pub mod authors;
pub mod books;
pub mod categories;
pub mod couriers;
pub mod customers;
pub mod entity;
pub mod list;
pub mod orders;
pub mod products;
pub mod response;
pub mod users;

pub use entity::{ColumnKind, Entity};
pub use list::{ListParams, ListRequest, ListResponse};
pub use response::ApiResponse;
