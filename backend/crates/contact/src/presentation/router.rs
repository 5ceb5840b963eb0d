//! Contact Router

use std::sync::Arc;

use axum::{
    Router,
    routing::{delete, get},
};

use crate::application::config::ContactConfig;
use crate::domain::repository::{ContactRepository, SubscriberRepository};
use crate::infra::postgres::PgContactRepository;
use crate::presentation::handlers::{self, ContactAppState};

/// Create the contact router with PostgreSQL repository
pub fn contact_router(repo: PgContactRepository, config: ContactConfig) -> Router {
    contact_router_generic(repo, config)
}

/// Create a generic contact router for any repository implementation
pub fn contact_router_generic<R>(repo: R, config: ContactConfig) -> Router
where
    R: ContactRepository + SubscriberRepository + Clone + Send + Sync + 'static,
{
    let state = ContactAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    Router::new()
        .route(
            "/contacts",
            get(handlers::list_contacts::<R>).post(handlers::submit_contact::<R>),
        )
        .route("/contacts/{id}", delete(handlers::delete_contact::<R>))
        .route(
            "/subscribe",
            get(handlers::list_subscribers::<R>).post(handlers::subscribe::<R>),
        )
        .route("/subscribe/{id}", delete(handlers::unsubscribe::<R>))
        .with_state(state)
}
