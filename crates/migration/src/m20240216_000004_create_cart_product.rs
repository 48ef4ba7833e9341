//! Create `cart_product` table with FKs to `product` and `shopping_cart`.
//!
//! `product_id` is unique: a product appears in at most one cart association.
//! No cascade toward `product`; removing a cart removes its associations.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CartProduct::Table)
                    .if_not_exists()
                    .col(pk_auto(CartProduct::Id))
                    .col(integer(CartProduct::Amount).not_null())
                    .col(integer(CartProduct::ProductId).unique_key().not_null())
                    .col(integer(CartProduct::ShoppingCartId).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cart_product_product")
                            .from(CartProduct::Table, CartProduct::ProductId)
                            .to(Product::Table, Product::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cart_product_shopping_cart")
                            .from(CartProduct::Table, CartProduct::ShoppingCartId)
                            .to(ShoppingCart::Table, ShoppingCart::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(CartProduct::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum CartProduct { Table, Id, Amount, ProductId, ShoppingCartId }

#[derive(DeriveIden)]
enum Product { Table, Id }

#[derive(DeriveIden)]
enum ShoppingCart { Table, Id }
