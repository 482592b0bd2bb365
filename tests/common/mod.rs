#![allow(dead_code)]

pub mod test_app;

pub use database::TestDb;
pub use memory_store::MemoryStore;
pub use test_app::TestApp;
