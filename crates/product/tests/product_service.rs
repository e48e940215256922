mod common;

use common::{Call, RecordingRepository, catalog, command_service, create_request, query_service};
use product::{
    abstract_trait::product::service::{ProductCommandServiceTrait, ProductQueryServiceTrait},
    domain::requests::product::FindProductsByPriceRange,
};
use shared::utils::{Method, Status};

fn ids<T>(items: &[T], id: impl Fn(&T) -> &str) -> Vec<String> {
    let mut ids: Vec<String> = items.iter().map(|i| id(i).to_string()).collect();
    ids.sort();
    ids
}

#[tokio::test]
async fn find_all_returns_every_product() {
    let repo = RecordingRepository::with_products(catalog());
    let service = query_service(&repo);

    let response = service.find_all().await.expect("find_all should succeed");

    assert_eq!(response.status, "success");
    assert_eq!(response.data.len(), 4);
    assert_eq!(
        ids(&response.data, |p| &p.id),
        vec!["p-1", "p-2", "p-3", "p-4"]
    );
    assert_eq!(repo.calls(), vec![Call::FindAll]);
}

#[tokio::test]
async fn find_all_on_empty_store_is_not_an_error() {
    let repo = RecordingRepository::new();
    let service = query_service(&repo);

    let response = service.find_all().await.expect("empty list is valid");

    assert!(response.data.is_empty());
}

#[tokio::test]
async fn create_product_returns_saved_product_with_id() {
    let repo = RecordingRepository::new();
    let service = command_service(&repo);
    let req = create_request(Some("Test Product"), "Red", 100.0, 10);

    let response = service
        .create_product(&req)
        .await
        .expect("valid product should be created");

    let created = response.data;
    assert!(!created.id.is_empty());
    assert_eq!(created.name, "Test Product");
    assert_eq!(created.description.as_deref(), Some("Test Description"));
    assert_eq!(created.color.as_deref(), Some("Red"));
    assert_eq!(created.price, 100.0);
    assert_eq!(created.stock_quantity, 10);

    assert_eq!(repo.saves(), 1);
    assert_eq!(repo.stored().len(), 1);
    assert_eq!(repo.stored()[0].id.as_deref(), Some(created.id.as_str()));
}

#[tokio::test]
async fn create_product_accepts_zero_price_and_stock() {
    let repo = RecordingRepository::new();
    let service = command_service(&repo);
    let req = create_request(Some("Freebie"), "White", 0.0, 0);

    let response = service.create_product(&req).await.expect("zero is allowed");

    assert_eq!(response.data.price, 0.0);
    assert_eq!(response.data.stock_quantity, 0);
}

#[tokio::test]
async fn create_product_passes_an_unsaved_product_to_the_repository() {
    let repo = RecordingRepository::new();
    let service = command_service(&repo);
    let req = create_request(Some("Lamp"), "Yellow", 12.5, 3);

    service.create_product(&req).await.expect("create");

    let saved: Vec<_> = repo
        .calls()
        .into_iter()
        .filter_map(|c| match c {
            Call::Save(p) => Some(p),
            _ => None,
        })
        .collect();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].id, None);
    assert_eq!(saved[0].name, "Lamp");
    assert_eq!(saved[0].price, 12.5);
}

#[tokio::test]
async fn delete_product_checks_existence_then_deletes_once() {
    let repo = RecordingRepository::with_products(catalog());
    let service = command_service(&repo);

    let response = service
        .delete_product(Some("p-2"))
        .await
        .expect("existing product should be deleted");

    assert_eq!(response.status, "success");
    assert_eq!(
        repo.calls(),
        vec![
            Call::ExistsById("p-2".into()),
            Call::DeleteById("p-2".into()),
        ]
    );
    assert!(repo.stored().iter().all(|p| p.id.as_deref() != Some("p-2")));
}

#[tokio::test]
async fn find_by_name_returns_exact_matches() {
    let repo = RecordingRepository::with_products(catalog());
    let service = query_service(&repo);

    let response = service
        .find_by_name(Some("Product A"))
        .await
        .expect("two products share the name");

    assert_eq!(ids(&response.data, |p| &p.id), vec!["p-1", "p-4"]);
    assert!(response.data.iter().all(|p| p.name == "Product A"));
    assert_eq!(repo.calls(), vec![Call::FindByName("Product A".into())]);
}

#[tokio::test]
async fn find_by_color_returns_exact_matches() {
    let repo = RecordingRepository::with_products(catalog());
    let service = query_service(&repo);

    let response = service
        .find_by_color(Some("Red"))
        .await
        .expect("two red products");

    assert_eq!(ids(&response.data, |p| &p.id), vec!["p-1", "p-3"]);
    assert!(
        response
            .data
            .iter()
            .all(|p| p.color.as_deref() == Some("Red"))
    );
}

#[tokio::test]
async fn find_by_price_range_is_inclusive() {
    let repo = RecordingRepository::with_products(catalog());
    let service = query_service(&repo);

    let response = service
        .find_by_price_range(&FindProductsByPriceRange {
            min_price: 10.0,
            max_price: 30.99,
        })
        .await
        .expect("bounds are inclusive");

    assert_eq!(ids(&response.data, |p| &p.id), vec!["p-1", "p-2", "p-3"]);
    assert_eq!(
        repo.calls(),
        vec![Call::FindByPriceBetween(10.0, 30.99)]
    );
}

#[tokio::test]
async fn find_by_price_range_accepts_equal_bounds() {
    let repo = RecordingRepository::with_products(catalog());
    let service = query_service(&repo);

    let response = service
        .find_by_price_range(&FindProductsByPriceRange {
            min_price: 20.0,
            max_price: 20.0,
        })
        .await
        .expect("single price point");

    assert_eq!(ids(&response.data, |p| &p.id), vec!["p-2"]);
}

#[tokio::test]
async fn outcomes_are_counted_per_method() {
    let repo = RecordingRepository::with_products(catalog());
    let query = query_service(&repo);
    let command = command_service(&repo);

    query.find_all().await.expect("find_all");
    query.find_by_color(Some("Purple")).await.unwrap_err();
    command
        .create_product(&create_request(Some("Desk"), "Brown", 80.0, 2))
        .await
        .expect("create");

    assert_eq!(query.metrics().count(Method::Get, Status::Success), 1);
    assert_eq!(query.metrics().count(Method::Get, Status::Error), 1);
    assert_eq!(command.metrics().count(Method::Post, Status::Success), 1);
}
