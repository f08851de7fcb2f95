pub mod catalog;

pub use catalog::{CatalogStore, StoreError};
