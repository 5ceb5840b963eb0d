//! Order Router

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, put},
};

use crate::application::config::OrderConfig;
use crate::domain::repository::OrderRepository;
use crate::infra::postgres::PgOrderRepository;
use crate::presentation::handlers::{self, OrderAppState};

/// Create the order router with PostgreSQL repository
pub fn order_router(repo: PgOrderRepository, config: OrderConfig) -> Router {
    order_router_generic(repo, config)
}

/// Create a generic order router for any repository implementation
pub fn order_router_generic<R>(repo: R, config: OrderConfig) -> Router
where
    R: OrderRepository + Clone + Send + Sync + 'static,
{
    let state = OrderAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    Router::new()
        .route(
            "/",
            get(handlers::list_orders::<R>).post(handlers::create_order::<R>),
        )
        .route(
            "/{id}",
            get(handlers::get_order::<R>).delete(handlers::delete_order::<R>),
        )
        .route("/{id}/status", put(handlers::update_status::<R>))
        .with_state(state)
}
