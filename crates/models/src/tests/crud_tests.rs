use crate::{cart_product, customer, product, shopping_cart};
use anyhow::Result;
use migration::MigratorTrait;
use sea_orm::{
    ColumnTrait, ConnectOptions, Database, DatabaseConnection, EntityTrait, ModelTrait,
    QueryFilter,
};

/// Setup an isolated in-memory database with migrations applied.
/// A single-connection pool keeps the whole test on one SQLite memory handle.
async fn setup_test_db() -> Result<DatabaseConnection> {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1);
    let db = Database::connect(opts).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

#[tokio::test]
async fn test_customer_crud() -> Result<()> {
    let db = setup_test_db().await?;

    let created = customer::create(&db, "Alice").await?;
    assert_eq!(created.name, "Alice");
    assert!(created.id > 0);

    let found = customer::Entity::find_by_id(created.id).one(&db).await?;
    assert_eq!(found.as_ref().map(|c| c.id), Some(created.id));

    let by_name = customer::Entity::find()
        .filter(customer::Column::Name.eq("Alice"))
        .one(&db)
        .await?;
    assert_eq!(by_name.map(|c| c.id), Some(created.id));

    customer::Entity::delete_by_id(created.id).exec(&db).await?;
    let gone = customer::Entity::find_by_id(created.id).one(&db).await?;
    assert!(gone.is_none());
    Ok(())
}

#[tokio::test]
async fn test_customer_create_rejects_blank_name() -> Result<()> {
    let db = setup_test_db().await?;
    assert!(customer::create(&db, "   ").await.is_err());
    Ok(())
}

#[tokio::test]
async fn test_product_create_and_validation() -> Result<()> {
    let db = setup_test_db().await?;

    let p = product::create(&db, "rubber duck", 10, 3.99).await?;
    assert_eq!(p.stock, 10);
    assert_eq!(p.price, 3.99);

    assert!(product::create(&db, "bad", -1, 1.0).await.is_err());
    assert!(product::create(&db, "bad", 1, -1.0).await.is_err());
    assert!(product::create(&db, "", 1, 1.0).await.is_err());
    Ok(())
}

#[tokio::test]
async fn test_shopping_cart_belongs_to_customer() -> Result<()> {
    let db = setup_test_db().await?;

    let c = customer::create(&db, "Bob").await?;
    let cart = shopping_cart::create(&db, c.id, Some("groceries")).await?;
    assert_eq!(cart.customer_id, c.id);
    assert_eq!(cart.name.as_deref(), Some("groceries"));

    let unnamed = shopping_cart::create(&db, c.id, None).await?;
    assert!(unnamed.name.is_none());

    let carts = shopping_cart::Entity::find()
        .filter(shopping_cart::Column::CustomerId.eq(c.id))
        .all(&db)
        .await?;
    assert_eq!(carts.len(), 2);

    // the customer side of the relation reaches the same rows
    let related = c.find_related(shopping_cart::Entity).all(&db).await?;
    assert_eq!(related.len(), 2);
    Ok(())
}

#[tokio::test]
async fn test_cart_relations_resolve_both_ends() -> Result<()> {
    let db = setup_test_db().await?;

    let c = customer::create(&db, "Dave").await?;
    let cart = shopping_cart::create(&db, c.id, None).await?;
    let p = product::create(&db, "kettle", 2, 30.0).await?;
    let cp = cart_product::create(&db, cart.id, p.id, 1).await?;

    let owner = cart.find_related(customer::Entity).one(&db).await?;
    assert_eq!(owner.map(|o| o.id), Some(c.id));

    let contents = cart.find_related(cart_product::Entity).all(&db).await?;
    assert_eq!(contents.len(), 1);

    let product_row = cp.find_related(product::Entity).one(&db).await?;
    assert_eq!(product_row.map(|pr| pr.id), Some(p.id));
    Ok(())
}

#[tokio::test]
async fn test_cart_product_unique_per_product() -> Result<()> {
    let db = setup_test_db().await?;

    let c = customer::create(&db, "Carol").await?;
    let cart = shopping_cart::create(&db, c.id, None).await?;
    let p = product::create(&db, "teapot", 5, 12.5).await?;

    let cp = cart_product::create(&db, cart.id, p.id, 3).await?;
    assert_eq!(cp.amount, 3);
    assert_eq!(cp.product_id, p.id);
    assert_eq!(cp.shopping_cart_id, cart.id);

    // product_id carries a unique index; a second association must fail
    assert!(cart_product::create(&db, cart.id, p.id, 1).await.is_err());
    Ok(())
}
