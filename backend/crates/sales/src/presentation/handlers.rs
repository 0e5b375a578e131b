//! HTTP Handlers

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use kernel::error::app_error::ErrorBody;
use kernel::extract::{JsonBody, PathParam, QueryParams};
use kernel::id::{CustomerId, OrderId};
use kernel::pagination::{ListQuery, ListResponse};
use serde_json::Value;

use crate::application::{
    CustomerInput, ManageCustomerUseCase, ManageOrderUseCase, OrderInput,
};
use crate::domain::repository::{CustomerRepository, OrderRepository};
use crate::error::SalesResult;
use crate::presentation::dto::{
    CustomerRequest, CustomerResponse, OrderRequest, OrderResponse, customer_deleted,
    customer_updated, order_deleted, order_updated,
};

/// Shared state for sales handlers
pub struct SalesAppState<R>
where
    R: CustomerRepository + OrderRepository + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

impl<R> Clone for SalesAppState<R>
where
    R: CustomerRepository + OrderRepository + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
        }
    }
}

impl From<CustomerRequest> for CustomerInput {
    fn from(req: CustomerRequest) -> Self {
        Self {
            name: req.name,
            phone: req.phone,
        }
    }
}

impl From<OrderRequest> for OrderInput {
    fn from(req: OrderRequest) -> Self {
        Self {
            customer_id: req.customer_id,
            service: req.service,
            amount: req.amount,
            unit: req.unit,
            price: req.price,
        }
    }
}

// ============================================================================
// Customers
// ============================================================================

/// List customers, filtered by name
#[utoipa::path(
    get,
    path = "/customer",
    tag = "customer",
    params(
        ("search" = Option<String>, Query, description = "Case-insensitive substring of the name"),
        ("page" = Option<i64>, Query, description = "1-based page, default 1"),
        ("limit" = Option<i64>, Query, description = "Page size, default 10")
    ),
    responses(
        (status = 200, description = "One page of customers", body = ListResponse<CustomerResponse>),
        (status = 400, description = "Malformed page or limit", body = ErrorBody),
        (status = 403, description = "Missing or invalid token", body = ErrorBody)
    ),
    security(("jwt_token" = []))
)]
pub async fn list_customers<R>(
    State(state): State<SalesAppState<R>>,
    QueryParams(query): QueryParams<ListQuery>,
) -> SalesResult<Json<ListResponse<CustomerResponse>>>
where
    R: CustomerRepository + OrderRepository + Send + Sync + 'static,
{
    let (term, page) = query.parse()?;

    let customers = ManageCustomerUseCase::new(state.repo.clone())
        .list(term, page)
        .await?;

    Ok(Json(ListResponse::new(
        customers.map(CustomerResponse::from),
        page,
    )))
}

/// Get one customer
#[utoipa::path(
    get,
    path = "/customer/{id}",
    tag = "customer",
    params(("id" = i32, Path, description = "Customer id")),
    responses(
        (status = 200, description = "Customer", body = CustomerResponse),
        (status = 403, description = "Missing or invalid token", body = ErrorBody),
        (status = 404, description = "No such customer", body = ErrorBody)
    ),
    security(("jwt_token" = []))
)]
pub async fn get_customer<R>(
    State(state): State<SalesAppState<R>>,
    PathParam(raw_id): PathParam<String>,
) -> SalesResult<Json<CustomerResponse>>
where
    R: CustomerRepository + OrderRepository + Send + Sync + 'static,
{
    let id = CustomerId::parse(&raw_id)?;

    let customer = ManageCustomerUseCase::new(state.repo.clone()).get(id).await?;

    Ok(Json(customer.into()))
}

/// Create a customer
#[utoipa::path(
    post,
    path = "/customer",
    tag = "customer",
    request_body = CustomerRequest,
    responses(
        (status = 200, description = "Created customer", body = CustomerResponse),
        (status = 400, description = "Name or phone too long", body = ErrorBody),
        (status = 403, description = "Missing or invalid token", body = ErrorBody)
    ),
    security(("jwt_token" = []))
)]
pub async fn create_customer<R>(
    State(state): State<SalesAppState<R>>,
    JsonBody(req): JsonBody<CustomerRequest>,
) -> SalesResult<Json<CustomerResponse>>
where
    R: CustomerRepository + OrderRepository + Send + Sync + 'static,
{
    let customer = ManageCustomerUseCase::new(state.repo.clone())
        .create(req.into())
        .await?;

    Ok(Json(customer.into()))
}

/// Replace a customer's name and phone
#[utoipa::path(
    put,
    path = "/customer/{id}",
    tag = "customer",
    params(("id" = i32, Path, description = "Customer id")),
    request_body = CustomerRequest,
    responses(
        (status = 200, description = "Receipt: `{\"updated customer\": id}`"),
        (status = 403, description = "Missing or invalid token", body = ErrorBody),
        (status = 404, description = "No such customer", body = ErrorBody)
    ),
    security(("jwt_token" = []))
)]
pub async fn update_customer<R>(
    State(state): State<SalesAppState<R>>,
    PathParam(raw_id): PathParam<String>,
    JsonBody(req): JsonBody<CustomerRequest>,
) -> SalesResult<Json<Value>>
where
    R: CustomerRepository + OrderRepository + Send + Sync + 'static,
{
    let id = CustomerId::parse(&raw_id)?;

    ManageCustomerUseCase::new(state.repo.clone())
        .update(id, req.into())
        .await?;

    Ok(Json(customer_updated(id)))
}

/// Delete a customer
#[utoipa::path(
    delete,
    path = "/customer/{id}",
    tag = "customer",
    params(("id" = i32, Path, description = "Customer id")),
    responses(
        (status = 200, description = "Receipt: `{\"deleted customer\": id}`"),
        (status = 403, description = "Missing or invalid token", body = ErrorBody),
        (status = 404, description = "No such customer", body = ErrorBody)
    ),
    security(("jwt_token" = []))
)]
pub async fn delete_customer<R>(
    State(state): State<SalesAppState<R>>,
    PathParam(raw_id): PathParam<String>,
) -> SalesResult<Json<Value>>
where
    R: CustomerRepository + OrderRepository + Send + Sync + 'static,
{
    let id = CustomerId::parse(&raw_id)?;

    ManageCustomerUseCase::new(state.repo.clone())
        .delete(id)
        .await?;

    Ok(Json(customer_deleted(id)))
}

// ============================================================================
// Orders
// ============================================================================

/// List orders, filtered by service
#[utoipa::path(
    get,
    path = "/order",
    tag = "order",
    params(
        ("search" = Option<String>, Query, description = "Case-insensitive substring of the service"),
        ("page" = Option<i64>, Query, description = "1-based page, default 1"),
        ("limit" = Option<i64>, Query, description = "Page size, default 10")
    ),
    responses(
        (status = 200, description = "One page of orders", body = ListResponse<OrderResponse>),
        (status = 400, description = "Malformed page or limit", body = ErrorBody),
        (status = 403, description = "Missing or invalid token", body = ErrorBody)
    ),
    security(("jwt_token" = []))
)]
pub async fn list_orders<R>(
    State(state): State<SalesAppState<R>>,
    QueryParams(query): QueryParams<ListQuery>,
) -> SalesResult<Json<ListResponse<OrderResponse>>>
where
    R: CustomerRepository + OrderRepository + Send + Sync + 'static,
{
    let (term, page) = query.parse()?;

    let orders = ManageOrderUseCase::new(state.repo.clone())
        .list(term, page)
        .await?;

    Ok(Json(ListResponse::new(orders.map(OrderResponse::from), page)))
}

/// Get one order
#[utoipa::path(
    get,
    path = "/order/{id}",
    tag = "order",
    params(("id" = i32, Path, description = "Order id")),
    responses(
        (status = 200, description = "Order", body = OrderResponse),
        (status = 403, description = "Missing or invalid token", body = ErrorBody),
        (status = 404, description = "No such order", body = ErrorBody)
    ),
    security(("jwt_token" = []))
)]
pub async fn get_order<R>(
    State(state): State<SalesAppState<R>>,
    PathParam(raw_id): PathParam<String>,
) -> SalesResult<Json<OrderResponse>>
where
    R: CustomerRepository + OrderRepository + Send + Sync + 'static,
{
    let id = OrderId::parse(&raw_id)?;

    let order = ManageOrderUseCase::new(state.repo.clone()).get(id).await?;

    Ok(Json(order.into()))
}

/// Create an order for an existing customer
#[utoipa::path(
    post,
    path = "/order",
    tag = "order",
    request_body = OrderRequest,
    responses(
        (status = 200, description = "Created order", body = OrderResponse),
        (status = 400, description = "Unreadable body or field too long", body = ErrorBody),
        (status = 403, description = "Missing or invalid token", body = ErrorBody),
        (status = 404, description = "Unknown customer", body = ErrorBody)
    ),
    security(("jwt_token" = []))
)]
pub async fn create_order<R>(
    State(state): State<SalesAppState<R>>,
    JsonBody(req): JsonBody<OrderRequest>,
) -> SalesResult<Json<OrderResponse>>
where
    R: CustomerRepository + OrderRepository + Send + Sync + 'static,
{
    let order = ManageOrderUseCase::new(state.repo.clone())
        .create(req.into())
        .await?;

    Ok(Json(order.into()))
}

/// Replace an order
#[utoipa::path(
    put,
    path = "/order/{id}",
    tag = "order",
    params(("id" = i32, Path, description = "Order id")),
    request_body = OrderRequest,
    responses(
        (status = 200, description = "Receipt: `{\"updated order\": id}`"),
        (status = 403, description = "Missing or invalid token", body = ErrorBody),
        (status = 404, description = "No such order or customer", body = ErrorBody)
    ),
    security(("jwt_token" = []))
)]
pub async fn update_order<R>(
    State(state): State<SalesAppState<R>>,
    PathParam(raw_id): PathParam<String>,
    JsonBody(req): JsonBody<OrderRequest>,
) -> SalesResult<Json<Value>>
where
    R: CustomerRepository + OrderRepository + Send + Sync + 'static,
{
    let id = OrderId::parse(&raw_id)?;

    ManageOrderUseCase::new(state.repo.clone())
        .update(id, req.into())
        .await?;

    Ok(Json(order_updated(id)))
}

/// Delete an order
#[utoipa::path(
    delete,
    path = "/order/{id}",
    tag = "order",
    params(("id" = i32, Path, description = "Order id")),
    responses(
        (status = 200, description = "Receipt: `{\"deleted order\": id}`"),
        (status = 403, description = "Missing or invalid token", body = ErrorBody),
        (status = 404, description = "No such order", body = ErrorBody)
    ),
    security(("jwt_token" = []))
)]
pub async fn delete_order<R>(
    State(state): State<SalesAppState<R>>,
    PathParam(raw_id): PathParam<String>,
) -> SalesResult<Json<Value>>
where
    R: CustomerRepository + OrderRepository + Send + Sync + 'static,
{
    let id = OrderId::parse(&raw_id)?;

    ManageOrderUseCase::new(state.repo.clone()).delete(id).await?;

    Ok(Json(order_deleted(id)))
}
