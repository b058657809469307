//! Infrastructure layer for the Reference Data module.
//!
//! Contains the SeaORM storage adapter, migrations and the built-in catalog.

pub mod storage;

pub use storage::SeaOrmReferenceDataRepository;
