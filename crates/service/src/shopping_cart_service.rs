use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
    TransactionTrait,
};
use tracing::info;

use models::{cart_product, shopping_cart};

use crate::{customer_service, dto::CartDto, errors::ServiceError};

/// List the carts owned by a customer. The customer existence check is
/// delegated to the customer service and its not-found error propagates.
pub async fn get_shopping_carts(
    db: &DatabaseConnection,
    customer_id: i32,
) -> Result<Vec<shopping_cart::Model>, ServiceError> {
    let found = customer_service::get_customer_by_id(db, customer_id).await?;
    shopping_cart::Entity::find()
        .filter(shopping_cart::Column::CustomerId.eq(found.id))
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

/// Fetch a cart by id, enforcing ownership. A cart owned by a different
/// customer is indistinguishable from a missing one.
pub async fn get_shopping_cart_by_id(
    db: &DatabaseConnection,
    customer_id: i32,
    cart_id: i32,
) -> Result<shopping_cart::Model, ServiceError> {
    let cart = shopping_cart::Entity::find_by_id(cart_id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    match cart {
        Some(cart) if cart.customer_id == customer_id => Ok(cart),
        _ => Err(ServiceError::CartNotFound),
    }
}

/// Create a cart under an existing customer.
pub async fn create_shopping_cart(
    db: &DatabaseConnection,
    customer_id: i32,
    dto: &CartDto,
) -> Result<shopping_cart::Model, ServiceError> {
    let found = customer_service::get_customer_by_id(db, customer_id).await?;
    let created = shopping_cart::create(db, found.id, dto.name.as_deref()).await?;
    info!(cart_id = created.id, customer_id, "created shopping cart");
    Ok(created)
}

/// Rename a cart, ownership-checked.
pub async fn edit_shopping_cart(
    db: &DatabaseConnection,
    customer_id: i32,
    cart_id: i32,
    dto: &CartDto,
) -> Result<shopping_cart::Model, ServiceError> {
    let cart = get_shopping_cart_by_id(db, customer_id, cart_id).await?;
    let mut am: shopping_cart::ActiveModel = cart.into();
    am.name = Set(dto.name.clone());
    let updated = am
        .update(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    info!(cart_id, customer_id, "renamed shopping cart");
    Ok(updated)
}

/// Delete a cart and its product associations, ownership-checked.
pub async fn delete_shopping_cart(
    db: &DatabaseConnection,
    customer_id: i32,
    cart_id: i32,
) -> Result<(), ServiceError> {
    let cart = get_shopping_cart_by_id(db, customer_id, cart_id).await?;

    // Associations and the cart row go in one transaction.
    let txn = db.begin().await.map_err(|e| ServiceError::Db(e.to_string()))?;
    cart_product::Entity::delete_many()
        .filter(cart_product::Column::ShoppingCartId.eq(cart.id))
        .exec(&txn)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    shopping_cart::Entity::delete_by_id(cart.id)
        .exec(&txn)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    txn.commit().await.map_err(|e| ServiceError::Db(e.to_string()))?;
    info!(cart_id, customer_id, "deleted shopping cart");
    Ok(())
}
