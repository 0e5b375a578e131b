//! Unit tests for Sales crate
//! Use cases and routers run against the in-memory store in
//! `crate::testing`, which mimics the customer/order inner join.

#[cfg(test)]
mod use_case_tests {
    use std::sync::Arc;

    use kernel::id::{CustomerId, OrderId};
    use kernel::pagination::{PageRequest, SearchTerm};

    use crate::application::*;
    use crate::error::SalesError;
    use crate::testing::InMemorySalesRepository;

    fn customer(name: &str, phone: &str) -> CustomerInput {
        CustomerInput {
            name: name.to_string(),
            phone: phone.to_string(),
        }
    }

    fn order(customer_id: i32, service: &str) -> OrderInput {
        OrderInput {
            customer_id: CustomerId::new(customer_id),
            service: service.to_string(),
            amount: 2,
            unit: "hours".to_string(),
            price: 50,
        }
    }

    fn use_cases() -> (
        ManageCustomerUseCase<InMemorySalesRepository>,
        ManageOrderUseCase<InMemorySalesRepository>,
        Arc<InMemorySalesRepository>,
    ) {
        let repo = Arc::new(InMemorySalesRepository::default());
        (
            ManageCustomerUseCase::new(repo.clone()),
            ManageOrderUseCase::new(repo.clone()),
            repo,
        )
    }

    #[tokio::test]
    async fn test_acme_cleaning_scenario() {
        let (customers, orders, _) = use_cases();

        let acme = customers.create(customer("Acme", "555-0100")).await.unwrap();
        assert_eq!(acme.id, CustomerId::new(1));

        let created = orders.create(order(1, "Cleaning")).await.unwrap();
        assert_eq!(created.id, OrderId::new(1));

        let fetched = orders.get(OrderId::new(1)).await.unwrap();
        assert_eq!(fetched.customer_id, CustomerId::new(1));
        assert_eq!(fetched.name, "Acme");
        assert_eq!(fetched.phone, "555-0100");
        assert_eq!(fetched.service, "Cleaning");
        assert_eq!((fetched.amount, fetched.price), (2, 50));
        assert_eq!(fetched.unit, "hours");
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_order_for_missing_customer_is_rejected() {
        let (_, orders, repo) = use_cases();

        let err = orders.create(order(7, "Cleaning")).await.unwrap_err();

        assert!(matches!(err, SalesError::CustomerNotFound(id) if id == CustomerId::new(7)));
        assert_eq!(err.to_string(), "Customer with id [7] not found");
        assert_eq!(repo.stored_orders().await, 0);
    }

    #[tokio::test]
    async fn test_deleted_customer_hides_its_orders() {
        let (customers, orders, repo) = use_cases();
        customers.create(customer("Acme", "555-0100")).await.unwrap();
        customers.create(customer("Beta", "555-0200")).await.unwrap();
        orders.create(order(1, "Cleaning")).await.unwrap();
        orders.create(order(2, "Cleaning")).await.unwrap();

        customers.delete(CustomerId::new(1)).await.unwrap();

        let err = orders.get(OrderId::new(1)).await.unwrap_err();
        assert!(matches!(err, SalesError::OrderNotFound(_)));

        let page = orders.list(None, PageRequest::default()).await.unwrap();
        assert_eq!(page.count, 1);
        assert_eq!(page.items[0].id, OrderId::new(2));

        // Still stored, just unreachable through the join
        assert_eq!(repo.stored_orders().await, 2);
    }

    #[tokio::test]
    async fn test_customer_rename_shows_in_orders() {
        let (customers, orders, _) = use_cases();
        customers.create(customer("Acme", "555-0100")).await.unwrap();
        orders.create(order(1, "Cleaning")).await.unwrap();

        customers
            .update(CustomerId::new(1), customer("Acme Ltd", "555-0101"))
            .await
            .unwrap();

        let fetched = orders.get(OrderId::new(1)).await.unwrap();
        assert_eq!(fetched.name, "Acme Ltd");
        assert_eq!(fetched.phone, "555-0101");
    }

    #[tokio::test]
    async fn test_order_update() {
        let (customers, orders, _) = use_cases();
        customers.create(customer("Acme", "555-0100")).await.unwrap();
        customers.create(customer("Beta", "555-0200")).await.unwrap();
        let created = orders.create(order(1, "Cleaning")).await.unwrap();

        orders
            .update(created.id, order(2, "Window washing"))
            .await
            .unwrap();
        let fetched = orders.get(created.id).await.unwrap();
        assert_eq!(fetched.customer_id, CustomerId::new(2));
        assert_eq!(fetched.name, "Beta");
        assert_eq!(fetched.service, "Window washing");
        assert_eq!(fetched.created_at, created.created_at);

        let err = orders
            .update(created.id, order(99, "Cleaning"))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 404);
        assert_eq!(
            err.to_string(),
            "Order with id [1] or customer with id [99] not found"
        );

        let err = orders
            .update(OrderId::new(5), order(1, "Cleaning"))
            .await
            .unwrap_err();
        assert!(matches!(err, SalesError::OrderOrCustomerNotFound { .. }));
    }

    #[tokio::test]
    async fn test_missing_rows_are_not_found() {
        let (customers, orders, _) = use_cases();

        let err = customers.get(CustomerId::new(3)).await.unwrap_err();
        assert_eq!(err.to_string(), "Customer with id [3] not found");
        assert_eq!(err.status_code(), 404);

        let err = orders.get(OrderId::new(3)).await.unwrap_err();
        assert_eq!(err.to_string(), "Order with id [3] not found");

        assert!(customers
            .update(CustomerId::new(3), customer("X", ""))
            .await
            .is_err());
        assert!(customers.delete(CustomerId::new(3)).await.is_err());
        assert!(orders.delete(OrderId::new(3)).await.is_err());
    }

    #[tokio::test]
    async fn test_customer_search_is_case_insensitive() {
        let (customers, _, _) = use_cases();
        for name in ["John", "Amy", "josephine", "Bo Jones"] {
            customers.create(customer(name, "")).await.unwrap();
        }

        let page = customers
            .list(SearchTerm::new(Some("jo".into())), PageRequest::default())
            .await
            .unwrap();
        let names: Vec<_> = page.items.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["John", "josephine", "Bo Jones"]);
        assert_eq!((page.count, page.total_pages), (3, 1));

        let page = customers
            .list(SearchTerm::new(Some(String::new())), PageRequest::new(Some(2), Some(3)))
            .await
            .unwrap();
        assert_eq!(page.count, 4);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.items.len(), 1);
    }

    #[tokio::test]
    async fn test_order_search_uses_service() {
        let (customers, orders, _) = use_cases();
        customers.create(customer("Cleaning Co", "")).await.unwrap();
        orders.create(order(1, "Deep CLEANING")).await.unwrap();
        orders.create(order(1, "Gardening")).await.unwrap();

        let page = orders
            .list(SearchTerm::new(Some("clean".into())), PageRequest::default())
            .await
            .unwrap();

        assert_eq!(page.count, 1);
        assert_eq!(page.items[0].service, "Deep CLEANING");
    }
}

#[cfg(test)]
mod router_tests {
    use std::sync::Arc;

    use auth::AuthConfig;
    use auth::domain::value_object::access_claims::AccessClaims;
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use chrono::Utc;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::presentation::router::sales_router;
    use crate::testing::InMemorySalesRepository;

    struct TestApp {
        router: Router,
        repo: InMemorySalesRepository,
        token: String,
    }

    fn app() -> TestApp {
        let config = Arc::new(AuthConfig::new(b"sales-secret"));
        let claims = AccessClaims::new("tester", Utc::now(), config.token_ttl_chrono());
        let token = config.signer().sign(&claims).unwrap();
        let repo = InMemorySalesRepository::default();
        TestApp {
            router: sales_router(repo.clone(), config),
            repo,
            token,
        }
    }

    async fn request(
        app: &TestApp,
        token: Option<&str>,
        method: &str,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header("X-JWT-TOKEN", token);
        }
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    /// Request carrying a valid token
    async fn send(app: &TestApp, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        request(app, Some(&app.token), method, uri, body).await
    }

    async fn seed(app: &TestApp) {
        let (status, _) = send(
            app,
            "POST",
            "/customer",
            Some(json!({ "name": "Acme", "phone": "555-0100" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (status, _) = send(
            app,
            "POST",
            "/order",
            Some(json!({
                "customer_id": 1,
                "service": "Cleaning",
                "amount": 2,
                "unit": "hours",
                "price": 50
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_get_order_returns_joined_customer() {
        let app = app();
        seed(&app).await;

        let (status, mut body) = send(&app, "GET", "/order/1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["created_at"].is_string());
        body.as_object_mut().unwrap().remove("created_at");

        assert_eq!(
            body,
            json!({
                "id": 1,
                "customer_id": 1,
                "name": "Acme",
                "phone": "555-0100",
                "service": "Cleaning",
                "amount": 2,
                "unit": "hours",
                "price": 50
            })
        );
    }

    #[tokio::test]
    async fn test_list_envelopes() {
        let app = app();
        seed(&app).await;

        let (status, body) = send(&app, "GET", "/customer?search=ACM", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], 1);
        assert_eq!(body["total"], 1);
        assert_eq!(body["page"], 1);
        assert_eq!(body["limit"], 10);
        assert_eq!(body["data"][0]["name"], "Acme");

        let (_, body) = send(&app, "GET", "/order?search=xyz&page=3", None).await;
        assert_eq!(body["data"], json!([]));
        assert_eq!(body["count"], 0);
        assert_eq!(body["total"], 0);
        assert_eq!(body["page"], 3);
    }

    #[tokio::test]
    async fn test_mutation_receipts() {
        let app = app();
        seed(&app).await;

        let (status, body) = send(
            &app,
            "PUT",
            "/order/1",
            Some(json!({
                "id": 42,
                "customer_id": 1,
                "service": "Polishing",
                "amount": 3,
                "unit": "hours",
                "price": 60
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "updated order": 1 }));

        let (status, body) = send(
            &app,
            "PUT",
            "/customer/1",
            Some(json!({ "name": "Acme Ltd", "phone": "555-0101" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "updated customer": 1 }));

        let (_, order) = send(&app, "GET", "/order/1", None).await;
        assert_eq!(order["service"], "Polishing");
        assert_eq!(order["name"], "Acme Ltd");

        let (status, body) = send(&app, "DELETE", "/order/1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "deleted order": 1 }));

        let (status, body) = send(&app, "DELETE", "/customer/1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "deleted customer": 1 }));
    }

    #[tokio::test]
    async fn test_deleting_customer_hides_order_over_http() {
        let app = app();
        seed(&app).await;

        send(&app, "DELETE", "/customer/1", None).await;

        let (status, body) = send(&app, "GET", "/order/1", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "Order with id [1] not found" }));

        let (_, list) = send(&app, "GET", "/order", None).await;
        assert_eq!(list["count"], 0);
    }

    #[tokio::test]
    async fn test_errors() {
        let app = app();

        let (status, body) = send(&app, "GET", "/customer/abc", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Invalid ID given abc" }));

        let (status, body) = send(&app, "GET", "/customer/9", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "Customer with id [9] not found" }));

        let (status, body) = send(&app, "GET", "/order?limit=ten", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Invalid limit given ten" }));

        let (status, body) = send(
            &app,
            "POST",
            "/order",
            Some(json!({ "customer_id": 5, "service": "Cleaning" })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "Customer with id [5] not found" }));

        let (status, body) = send(
            &app,
            "POST",
            "/order",
            Some(json!({ "customer_id": 1, "amount": "two" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());

        let (status, _) = send(&app, "PATCH", "/customer/1", None).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_routes_require_token() {
        let app = app();
        seed(&app).await;
        let denied = json!({ "error": "Permission denied" });

        let calls = [
            ("GET", "/customer", None),
            ("GET", "/customer/1", None),
            ("PUT", "/customer/1", Some(json!({ "name": "Hijacked", "phone": "" }))),
            ("DELETE", "/customer/1", None),
            ("GET", "/order", None),
            ("GET", "/order/1", None),
            ("POST", "/order", Some(json!({ "customer_id": 1, "service": "Free" }))),
            ("DELETE", "/order/1", None),
        ];
        for (method, uri, body) in calls {
            for token in [None, Some("garbage")] {
                let (status, body) = request(&app, token, method, uri, body.clone()).await;
                assert_eq!(status, StatusCode::FORBIDDEN, "{method} {uri}");
                assert_eq!(body, denied, "{method} {uri}");
            }
        }

        assert_eq!(app.repo.stored_customers().await, 1);
        assert_eq!(app.repo.stored_orders().await, 1);
        let (_, customer) = send(&app, "GET", "/customer/1", None).await;
        assert_eq!(customer["name"], "Acme");
    }

    #[tokio::test]
    async fn test_unsupported_method_is_405_without_token() {
        let app = app();

        for (method, uri) in [("PATCH", "/customer/1"), ("PUT", "/order"), ("DELETE", "/customer")] {
            let (status, _) = request(&app, None, method, uri, None).await;
            assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED, "{method} {uri}");
        }
    }
}
