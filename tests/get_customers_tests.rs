//! Integration tests for the customer and product services.

mod fixtures;

use crud::prelude::*;
use fixtures::{Fixture, last_names};

fn params() -> CustomerResourceParameter {
    CustomerResourceParameter::default()
}

#[tokio::test]
async fn test_defaults_sort_ascending_by_last_name() {
    let fixture = Fixture::new();

    let result = fixture.services().get_customers.execute(params()).await.unwrap();

    assert_eq!(
        last_names(&result.results),
        vec!["Boyce", "Renze", "Richardson", "Showman", "Smith"]
    );
    assert_eq!(
        result.pagination,
        PaginationMetadata {
            total_count: 5,
            page_size: 10,
            current_page: 1,
            total_pages: 1,
        }
    );
}

#[tokio::test]
async fn test_descending_name_sort() {
    let fixture = Fixture::new();
    let parameter = CustomerResourceParameter {
        is_ascending: false,
        ..params()
    };

    let result = fixture.services().get_customers.execute(parameter).await.unwrap();

    assert_eq!(
        last_names(&result.results),
        vec!["Smith", "Showman", "Richardson", "Renze", "Boyce"]
    );
}

#[tokio::test]
async fn test_unknown_sort_field_ignores_direction() {
    let fixture = Fixture::new();
    let parameter = CustomerResourceParameter {
        sort_by: "email".to_string(),
        is_ascending: false,
        ..params()
    };

    let result = fixture.services().get_customers.execute(parameter).await.unwrap();

    assert_eq!(last_names(&result.results)[0], "Boyce");
}

#[tokio::test]
async fn test_search_text_filters_on_full_name() {
    let fixture = Fixture::new();
    let parameter = CustomerResourceParameter {
        search_text: Some("Jane Smith".to_string()),
        ..params()
    };

    let result = fixture.services().get_customers.execute(parameter).await.unwrap();

    assert_eq!(result.results.len(), 1);
    assert_eq!(result.results[0].first_name, "Jane");
    assert_eq!(result.results[0].sales[0].product_name, "Laptop");
    assert_eq!(result.pagination.total_count, 1);
}

#[tokio::test]
async fn test_search_text_without_match() {
    let fixture = Fixture::new();
    let parameter = CustomerResourceParameter {
        search_text: Some("Nobody".to_string()),
        ..params()
    };

    let result = fixture.services().get_customers.execute(parameter).await.unwrap();

    assert!(result.results.is_empty());
    assert_eq!(result.pagination.total_count, 0);
    assert_eq!(result.pagination.total_pages, 0);
}

#[tokio::test]
async fn test_pages_walk_the_sorted_list() {
    let fixture = Fixture::new();
    let services = fixture.services();

    let mut seen = Vec::new();
    for current_page in 1..=3 {
        let parameter = CustomerResourceParameter {
            current_page,
            page_size: Some(2),
            ..params()
        };
        let result = services.get_customers.execute(parameter).await.unwrap();

        assert_eq!(result.pagination.total_count, 5);
        assert_eq!(result.pagination.total_pages, 3);
        seen.extend(result.results.into_iter().map(|c| c.last_name));
    }

    assert_eq!(seen, vec!["Boyce", "Renze", "Richardson", "Showman", "Smith"]);
}

#[tokio::test]
async fn test_unpaged_request_returns_everyone() {
    let fixture = Fixture::new();
    let parameter = CustomerResourceParameter {
        current_page: UNPAGED,
        page_size: Some(2),
        ..params()
    };

    let result = fixture.services().get_customers.execute(parameter).await.unwrap();

    assert_eq!(result.results.len(), 5);
    assert_eq!(result.pagination.total_pages, 3);
}

#[tokio::test]
async fn test_zero_page_size_is_a_validation_error() {
    let fixture = Fixture::new();
    let parameter = CustomerResourceParameter {
        page_size: Some(0),
        ..params()
    };

    let err = fixture.services().get_customers.execute(parameter).await.unwrap_err();

    assert!(matches!(err, CrudError::Validation(_)));
}

#[tokio::test]
async fn test_page_size_is_capped_and_defaulted_by_config() {
    let fixture = Fixture::new();
    let services = fixture.services_with(PagingConfig {
        default_page_size: 2,
        max_page_size: 3,
    });

    let defaulted = services.get_customers.execute(params()).await.unwrap();
    assert_eq!(defaulted.pagination.page_size, 2);
    assert_eq!(defaulted.results.len(), 2);

    let capped = services
        .get_customers
        .execute(CustomerResourceParameter {
            page_size: Some(50),
            ..params()
        })
        .await
        .unwrap();
    assert_eq!(capped.pagination.page_size, 3);
    assert_eq!(capped.pagination.total_pages, 2);
}

#[tokio::test]
async fn test_get_customer_returns_details() {
    let fixture = Fixture::new();
    let will = fixture.customer("Will");

    let customer = fixture.services().get_customer.execute(will.id).await.unwrap();

    assert_eq!(customer.customer_id, will.id);
    assert_eq!(customer.last_name, "Showman");
    assert_eq!(customer.sales.len(), 2);
    assert_eq!(customer.sales[1].product_name, "Speaker");
    assert_eq!(customer.sales[1].total_price, 198.0);
}

#[tokio::test]
async fn test_get_unknown_customer_is_not_found() {
    let fixture = Fixture::new();

    let err = fixture
        .services()
        .get_customer
        .execute(Uuid::new_v4())
        .await
        .unwrap_err();

    assert!(matches!(err, CrudError::Entity(EntityError::NotFound { .. })));
}

#[tokio::test]
async fn test_get_products() {
    let fixture = Fixture::new();

    let products = fixture.services().get_products.execute().await.unwrap();

    let names: Vec<_> = products.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Laptop", "Speaker"]);
    assert_eq!(products[0].product_id, fixture.products[0].id);
}
