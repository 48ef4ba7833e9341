//! Secondary indexes on the FK columns queried by the services.
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .name("idx_shopping_cart_customer_id")
                    .table(ShoppingCart::Table)
                    .col(ShoppingCart::CustomerId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_cart_product_shopping_cart_id")
                    .table(CartProduct::Table)
                    .col(CartProduct::ShoppingCartId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_cart_product_shopping_cart_id")
                    .table(CartProduct::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_shopping_cart_customer_id")
                    .table(ShoppingCart::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum ShoppingCart { Table, CustomerId }

#[derive(DeriveIden)]
enum CartProduct { Table, ShoppingCartId }
