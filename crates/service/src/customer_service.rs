use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
    TransactionTrait,
};
use tracing::info;

use models::{cart_product, customer, shopping_cart};

use crate::{dto::CustomerDto, errors::ServiceError};

/// List all customers.
pub async fn get_customers(db: &DatabaseConnection) -> Result<Vec<customer::Model>, ServiceError> {
    customer::Entity::find()
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

/// Fetch a customer by id.
pub async fn get_customer_by_id(
    db: &DatabaseConnection,
    customer_id: i32,
) -> Result<customer::Model, ServiceError> {
    customer::Entity::find_by_id(customer_id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or(ServiceError::CustomerNotFound)
}

/// Create a customer from a validated DTO.
pub async fn create_customer(
    db: &DatabaseConnection,
    dto: &CustomerDto,
) -> Result<customer::Model, ServiceError> {
    let created = customer::create(db, &dto.name).await?;
    info!(customer_id = created.id, "created customer");
    Ok(created)
}

/// Rename a customer.
pub async fn edit_customer(
    db: &DatabaseConnection,
    customer_id: i32,
    dto: &CustomerDto,
) -> Result<customer::Model, ServiceError> {
    customer::validate_name(&dto.name)?;
    let mut am: customer::ActiveModel = get_customer_by_id(db, customer_id).await?.into();
    am.name = Set(dto.name.clone());
    let updated = am
        .update(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    info!(customer_id, "renamed customer");
    Ok(updated)
}

/// Delete a customer together with its carts and their associations.
pub async fn delete_customer(
    db: &DatabaseConnection,
    customer_id: i32,
) -> Result<(), ServiceError> {
    let found = get_customer_by_id(db, customer_id).await?;

    // Orphan removal is performed here rather than left to the backend's FK
    // behavior, so it holds on every driver. The whole cascade runs in one
    // transaction; a fault mid-sequence must not commit a partial delete.
    let txn = db.begin().await.map_err(|e| ServiceError::Db(e.to_string()))?;
    let carts = shopping_cart::Entity::find()
        .filter(shopping_cart::Column::CustomerId.eq(found.id))
        .all(&txn)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    for cart in &carts {
        cart_product::Entity::delete_many()
            .filter(cart_product::Column::ShoppingCartId.eq(cart.id))
            .exec(&txn)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
    }
    shopping_cart::Entity::delete_many()
        .filter(shopping_cart::Column::CustomerId.eq(found.id))
        .exec(&txn)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    customer::Entity::delete_by_id(found.id)
        .exec(&txn)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    txn.commit().await.map_err(|e| ServiceError::Db(e.to_string()))?;

    info!(customer_id, carts = carts.len(), "deleted customer");
    Ok(())
}
