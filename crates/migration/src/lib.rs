//! Migrator registering entity-specific migrations in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240216_000001_create_customer;
mod m20240216_000002_create_product;
mod m20240216_000003_create_shopping_cart;
mod m20240216_000004_create_cart_product;
mod m20240216_000005_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240216_000001_create_customer::Migration),
            Box::new(m20240216_000002_create_product::Migration),
            Box::new(m20240216_000003_create_shopping_cart::Migration),
            Box::new(m20240216_000004_create_cart_product::Migration),
            // Indexes should always be applied last
            Box::new(m20240216_000005_add_indexes::Migration),
        ]
    }
}
