//! Integration tests for the PostgreSQL product repository
//!
//! Run with: `cargo test -p domain_products --test integration_test -- --ignored`
//! (requires Docker)

use domain_products::*;
use test_utils::{TestDataBuilder, TestDatabase, assertions::{assert_close, assert_some}};

fn new_product(builder: &TestDataBuilder, suffix: &str) -> CreateProduct {
    CreateProduct {
        name: builder.name("product", suffix),
        price: builder.price(),
        quantity: builder.quantity(),
    }
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_create_and_get() {
    let db = TestDatabase::new().await;
    let builder = TestDataBuilder::from_test_name("test_create_and_get");
    let service = ProductService::new(PgProductRepository::new(db.connection()));

    let input = new_product(&builder, "main");
    let created = service.create_product(input.clone()).await.unwrap();
    assert!(created.id > 0);
    assert_eq!(created.name, input.name);

    let fetched = service.get_product(created.id).await.unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
#[ignore]
async fn test_list_is_ordered_by_id() {
    let db = TestDatabase::new().await;
    let builder = TestDataBuilder::from_test_name("test_list_is_ordered_by_id");
    let repo = PgProductRepository::new(db.connection());

    let first = repo.create(new_product(&builder, "a")).await.unwrap();
    let second = repo.create(new_product(&builder, "b")).await.unwrap();

    let ids: Vec<i32> = repo.list().await.unwrap().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);
}

#[tokio::test]
#[ignore]
async fn test_update_replaces_all_fields() {
    let db = TestDatabase::new().await;
    let builder = TestDataBuilder::from_test_name("test_update_replaces_all_fields");
    let service = ProductService::new(PgProductRepository::new(db.connection()));

    let created = service
        .create_product(new_product(&builder, "before"))
        .await
        .unwrap();

    service
        .update_product(
            created.id,
            UpdateProduct {
                id: created.id,
                name: "Renamed".to_string(),
                price: 9.25,
                quantity: 0,
            },
        )
        .await
        .unwrap();

    let updated = service.get_product(created.id).await.unwrap();
    assert_eq!(updated.name, "Renamed");
    assert_close(updated.price, 9.25, "updated price");
    assert_eq!(updated.quantity, 0);
}

#[tokio::test]
#[ignore]
async fn test_delete_then_get_is_not_found() {
    let db = TestDatabase::new().await;
    let builder = TestDataBuilder::from_test_name("test_delete_then_get_is_not_found");
    let service = ProductService::new(PgProductRepository::new(db.connection()));

    let created = service
        .create_product(new_product(&builder, "gone"))
        .await
        .unwrap();
    service.delete_product(created.id).await.unwrap();

    assert!(matches!(
        service.get_product(created.id).await,
        Err(ProductError::NotFound(id)) if id == created.id
    ));
    assert!(matches!(
        service.delete_product(created.id).await,
        Err(ProductError::NotFound(_))
    ));
}

#[tokio::test]
#[ignore]
async fn test_update_after_concurrent_delete_is_not_found() {
    let db = TestDatabase::new().await;
    let builder = TestDataBuilder::from_test_name("test_update_after_concurrent_delete");
    let repo = PgProductRepository::new(db.connection());

    let created = repo.create(new_product(&builder, "raced")).await.unwrap();
    assert_some(repo.get_by_id(created.id).await.unwrap(), "seeded product");

    // Another writer removes the row between read and write
    db.execute(&format!("DELETE FROM products WHERE id = {}", created.id))
        .await;

    let mut product = created.clone();
    product.quantity += 1;
    assert!(matches!(
        repo.update(product).await,
        Err(ProductError::ConcurrencyConflict(_))
    ));

    let service = ProductService::new(repo);
    let result = service
        .update_product(
            created.id,
            UpdateProduct {
                id: created.id,
                name: created.name.clone(),
                price: created.price,
                quantity: created.quantity,
            },
        )
        .await;
    assert!(matches!(result, Err(ProductError::NotFound(_))));
}
