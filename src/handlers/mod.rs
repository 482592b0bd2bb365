pub mod entities;
pub mod extractors;
pub mod health;

pub use entities::{entity_routes, patchable_entity_routes};
pub use extractors::EntityId;
pub use health::health_check;
