//! Storage infrastructure for Reference Data.

pub mod db;
pub mod entity;
pub mod mapper;
pub mod migrations;
pub mod sea_orm_repo;
pub mod seed_data;

pub use sea_orm_repo::SeaOrmReferenceDataRepository;
