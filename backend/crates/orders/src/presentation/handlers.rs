//! HTTP Handlers

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, Query, State};
use kernel::id::OrderId;

use crate::application::config::OrderConfig;
use crate::application::delete_order::DeleteOrderUseCase;
use crate::application::place_order::PlaceOrderUseCase;
use crate::application::query_orders::{GetOrderUseCase, ListOrdersUseCase};
use crate::application::update_status::UpdateOrderStatusUseCase;
use crate::domain::checkout::CheckoutInput;
use crate::domain::repository::OrderRepository;
use crate::error::{OrderError, OrderResult};
use crate::presentation::dto::{
    CheckoutRequest, CreateOrderResponse, DeleteOrderResponse, ListOrdersQuery, OrderResponse,
    UpdateStatusRequest,
};

/// Shared state for order handlers
#[derive(Clone)]
pub struct OrderAppState<R>
where
    R: OrderRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<OrderConfig>,
}

fn order_id(path: Result<Path<i64>, PathRejection>) -> OrderResult<OrderId> {
    let Path(id) =
        path.map_err(|_| OrderError::ValidationFailed("order id must be an integer".into()))?;
    Ok(OrderId::from_i64(id))
}

/// POST /api/orders
pub async fn create_order<R>(
    State(state): State<OrderAppState<R>>,
    payload: Result<Json<CheckoutRequest>, JsonRejection>,
) -> OrderResult<Json<CreateOrderResponse>>
where
    R: OrderRepository + Clone + Send + Sync + 'static,
{
    let Json(req) = payload.map_err(|e| OrderError::ValidationFailed(e.body_text()))?;

    let use_case = PlaceOrderUseCase::new(state.repo.clone(), state.config.clone());
    let order_id = use_case.execute(CheckoutInput::from(req)).await?;

    Ok(Json(CreateOrderResponse {
        success: true,
        order_id: order_id.as_i64(),
    }))
}

/// GET /api/orders
pub async fn list_orders<R>(
    State(state): State<OrderAppState<R>>,
    Query(query): Query<ListOrdersQuery>,
) -> OrderResult<Json<Vec<OrderResponse>>>
where
    R: OrderRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListOrdersUseCase::new(state.repo.clone(), state.config.clone());
    let orders = use_case.execute(query.email.as_deref()).await?;

    Ok(Json(orders.into_iter().map(OrderResponse::from).collect()))
}

/// GET /api/orders/{id}
pub async fn get_order<R>(
    State(state): State<OrderAppState<R>>,
    path: Result<Path<i64>, PathRejection>,
) -> OrderResult<Json<OrderResponse>>
where
    R: OrderRepository + Clone + Send + Sync + 'static,
{
    let id = order_id(path)?;
    let use_case = GetOrderUseCase::new(state.repo.clone(), state.config.clone());
    let order = use_case.execute(id).await?;

    Ok(Json(order.into()))
}

/// PUT /api/orders/{id}/status
pub async fn update_status<R>(
    State(state): State<OrderAppState<R>>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UpdateStatusRequest>, JsonRejection>,
) -> OrderResult<Json<OrderResponse>>
where
    R: OrderRepository + Clone + Send + Sync + 'static,
{
    let id = order_id(path)?;
    let Json(req) = payload.map_err(|e| OrderError::ValidationFailed(e.body_text()))?;

    let use_case = UpdateOrderStatusUseCase::new(state.repo.clone(), state.config.clone());
    let order = use_case.execute(id, &req.status).await?;

    Ok(Json(order.into()))
}

/// DELETE /api/orders/{id}
pub async fn delete_order<R>(
    State(state): State<OrderAppState<R>>,
    path: Result<Path<i64>, PathRejection>,
) -> OrderResult<Json<DeleteOrderResponse>>
where
    R: OrderRepository + Clone + Send + Sync + 'static,
{
    let id = order_id(path)?;
    DeleteOrderUseCase::new(state.repo.clone(), state.config.clone())
        .execute(id)
        .await?;

    Ok(Json(DeleteOrderResponse {
        success: true,
        message: "Order deleted",
    }))
}
