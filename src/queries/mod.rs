pub mod list;
pub mod params;
pub mod repository;
pub mod store;

pub use repository::{PgRepository, Repository};
pub use store::{Storage, Store};
