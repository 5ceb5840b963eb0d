//! Auth Router

use std::sync::Arc;

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::application::config::AuthConfig;
use crate::domain::repository::{AdminRepository, CustomerRepository};
use crate::infra::postgres::PgAuthRepository;
use crate::presentation::handlers::{self, AuthAppState};

/// Create the auth router with PostgreSQL repository
pub fn auth_router(repo: PgAuthRepository, config: AuthConfig) -> Router {
    auth_router_generic(repo, config)
}

/// Create a generic auth router for any repository implementation
pub fn auth_router_generic<R>(repo: R, config: AuthConfig) -> Router
where
    R: CustomerRepository + AdminRepository + Clone + Send + Sync + 'static,
{
    let state = AuthAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    Router::new()
        // Customers
        .route("/signup", post(handlers::sign_up::<R>))
        .route("/login", post(handlers::sign_in::<R>))
        .route("/users", get(handlers::list_users::<R>))
        .route("/users/{id}", delete(handlers::delete_user::<R>))
        .route("/change-password", put(handlers::change_password::<R>))
        // Admins
        .route("/admin/login", post(handlers::admin_sign_in::<R>))
        .route(
            "/admins",
            get(handlers::list_admins::<R>).post(handlers::create_admin::<R>),
        )
        .route("/admins/{id}", delete(handlers::delete_admin::<R>))
        .with_state(state)
}
