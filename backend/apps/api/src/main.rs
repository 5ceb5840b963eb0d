//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

mod config;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use auth::{PgAuthRepository, auth_router};
use axum::{
    Router, http,
    http::{Method, header},
};
use contact::{PgContactRepository, contact_router};
use orders::{PgOrderRepository, order_router};
use otp::{CleanupExpiredUseCase, OtpConfig, PgOtpRepository, otp_router};
use payment::{RazorpayGateway, payment_router};
use platform::mail::SmtpMailer;
use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ApiConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            "api=info,orders=info,otp=info,auth=info,contact=info,payment=info,tower_http=info"
                .into()
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ApiConfig::from_env()?;

    // Database connection
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(config.db_acquire_timeout)
        .connect(config.database_url.expose_secret())
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    // Startup cleanup: remove expired OTP challenges
    // Errors here should not prevent server startup
    let otp_config = config.otp_config();
    let cleanup = CleanupExpiredUseCase::new(
        Arc::new(PgOtpRepository::new(pool.clone())),
        Arc::new(otp_config.clone()),
    );
    if let Err(e) = cleanup.execute().await {
        tracing::warn!(error = %e, "OTP cleanup failed, continuing anyway");
    }
    spawn_otp_cleanup(pool.clone(), otp_config.clone(), config.otp_cleanup_interval);

    let mailer = SmtpMailer::new(&config.smtp)?;
    let gateway = RazorpayGateway::new(config.razorpay.clone())?;

    // CORS configuration
    let allowed_origins: Vec<http::HeaderValue> = config
        .frontend_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .allow_credentials(true);

    // Build router
    let api = Router::new()
        .nest(
            "/orders",
            order_router(PgOrderRepository::new(pool.clone()), config.order_config()),
        )
        .nest(
            "/otp",
            otp_router(PgOtpRepository::new(pool.clone()), mailer, otp_config),
        )
        .nest("/payment", payment_router(gateway, config.payment_config()))
        .merge(auth_router(
            PgAuthRepository::new(pool.clone()),
            config.auth_config(),
        ))
        .merge(contact_router(
            PgContactRepository::new(pool.clone()),
            config.contact_config(),
        ));

    let app = Router::new()
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    tracing::info!("Listening on {}", config.bind_addr);

    let listener = TcpListener::bind(config.bind_addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Periodically purge expired challenges; the first tick fires immediately
/// and is skipped because startup already ran a pass.
fn spawn_otp_cleanup(pool: PgPool, config: OtpConfig, every: Duration) {
    let cleanup = CleanupExpiredUseCase::new(
        Arc::new(PgOtpRepository::new(pool)),
        Arc::new(config),
    );
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        ticker.tick().await;
        loop {
            ticker.tick().await;
            if let Err(e) = cleanup.execute().await {
                tracing::warn!(error = %e, "Periodic OTP cleanup failed");
            }
        }
    });
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
