use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};
use tracing::info;

use models::{cart_product, product};

use crate::{dto::CartProductDto, errors::ServiceError, shopping_cart_service};

/// List the product associations of a cart. A cart that cannot be resolved
/// (missing or owned by someone else) yields an empty list, not an error.
pub async fn get_cart_products(
    db: &DatabaseConnection,
    customer_id: i32,
    cart_id: i32,
) -> Result<Vec<cart_product::Model>, ServiceError> {
    let cart = match shopping_cart_service::get_shopping_cart_by_id(db, customer_id, cart_id).await
    {
        Ok(cart) => cart,
        Err(ServiceError::CartNotFound) => return Ok(Vec::new()),
        Err(e) => return Err(e),
    };
    cart_product::Entity::find()
        .filter(cart_product::Column::ShoppingCartId.eq(cart.id))
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

/// Fetch one association inside a cart. Cart resolution failures propagate as
/// CartNotFound; an id absent from that cart is ProductInCartNotFound.
pub async fn get_cart_product_by_id(
    db: &DatabaseConnection,
    customer_id: i32,
    cart_id: i32,
    cart_product_id: i32,
) -> Result<cart_product::Model, ServiceError> {
    let cart = shopping_cart_service::get_shopping_cart_by_id(db, customer_id, cart_id).await?;
    cart_product::Entity::find()
        .filter(cart_product::Column::Id.eq(cart_product_id))
        .filter(cart_product::Column::ShoppingCartId.eq(cart.id))
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or(ServiceError::ProductInCartNotFound)
}

/// Add a product to a cart after validating the amount against current stock.
pub async fn add_cart_product_to_cart(
    db: &DatabaseConnection,
    customer_id: i32,
    cart_id: i32,
    dto: &CartProductDto,
) -> Result<cart_product::Model, ServiceError> {
    let cart = shopping_cart_service::get_shopping_cart_by_id(db, customer_id, cart_id).await?;
    let found = product::Entity::find_by_id(dto.product_id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or(ServiceError::ProductNotFound)?;
    verify_amount_in_range(dto.amount, found.stock)?;

    let created = cart_product::create(db, cart.id, found.id, dto.amount).await?;
    info!(
        cart_product_id = created.id,
        cart_id,
        product_id = found.id,
        amount = dto.amount,
        "added product to cart"
    );
    Ok(created)
}

/// Change the amount of an existing association. The amount is re-validated
/// against the product's current stock; the product reference never changes.
pub async fn edit_cart_product(
    db: &DatabaseConnection,
    customer_id: i32,
    cart_id: i32,
    cart_product_id: i32,
    dto: &CartProductDto,
) -> Result<cart_product::Model, ServiceError> {
    let existing = get_cart_product_by_id(db, customer_id, cart_id, cart_product_id).await?;
    let found = product::Entity::find_by_id(existing.product_id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or(ServiceError::ProductNotFound)?;
    verify_amount_in_range(dto.amount, found.stock)?;

    let mut am: cart_product::ActiveModel = existing.into();
    am.amount = Set(dto.amount);
    let updated = am
        .update(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    info!(cart_product_id, cart_id, amount = dto.amount, "updated cart product amount");
    Ok(updated)
}

/// Remove an association from a cart.
pub async fn delete_cart_product(
    db: &DatabaseConnection,
    customer_id: i32,
    cart_id: i32,
    cart_product_id: i32,
) -> Result<(), ServiceError> {
    let existing = get_cart_product_by_id(db, customer_id, cart_id, cart_product_id).await?;
    cart_product::Entity::delete_by_id(existing.id)
        .exec(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    info!(cart_product_id, cart_id, "removed product from cart");
    Ok(())
}

/// Floor check first, then the stock ceiling.
fn verify_amount_in_range(amount: i32, stock: i32) -> Result<(), ServiceError> {
    if amount < 1 {
        return Err(ServiceError::AmountEqualOrLowerThanZero);
    }
    if amount > stock {
        return Err(ServiceError::AmountGreaterThanStock);
    }
    Ok(())
}
