use sea_orm_migration::prelude::*;

mod initial_001;
mod localized_name_function_002;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(initial_001::Migration),
            Box::new(localized_name_function_002::Migration),
        ]
    }
}
