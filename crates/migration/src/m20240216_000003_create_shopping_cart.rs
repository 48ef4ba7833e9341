//! Create `shopping_cart` table with FK to `customer`.
//!
//! Cart name is optional. Deleting a customer cascades to its carts.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ShoppingCart::Table)
                    .if_not_exists()
                    .col(pk_auto(ShoppingCart::Id))
                    .col(string_len_null(ShoppingCart::Name, 255))
                    .col(integer(ShoppingCart::CustomerId).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_shopping_cart_customer")
                            .from(ShoppingCart::Table, ShoppingCart::CustomerId)
                            .to(Customer::Table, Customer::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(ShoppingCart::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum ShoppingCart { Table, Id, Name, CustomerId }

#[derive(DeriveIden)]
enum Customer { Table, Id }
