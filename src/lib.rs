//! # biztime: a small billing API
//!
//! `biztime` is a REST API for tracking companies, the invoices billed to
//! them, and the industries they operate in. It exposes plain CRUD endpoints
//! over four PostgreSQL tables and shapes every response as JSON: successes
//! wrap their payload in a resource-named envelope, failures produce a
//! uniform `{"error": {"message", "status"}}` envelope.
//!
//! ## Architecture
//!
//! The application is built on [Axum](https://github.com/tokio-rs/axum) for
//! the HTTP layer and uses PostgreSQL (via SQLx) for persistence. Requests
//! flow through three thin layers:
//!
//! - the router (built here in [`build_router`]) dispatches to a handler in
//!   [`api::handlers`],
//! - the handler validates the request and calls a repository in
//!   [`db::handlers`],
//! - the repository runs parameterized SQL and maps rows into
//!   [`db::models`] structs.
//!
//! There is no shared mutable state beyond the connection pool: handlers
//! receive an [`AppState`] clone via axum's `State` extractor and acquire a
//! pool connection per request. Schema migrations are embedded in the binary
//! and run at startup.
//!
//! ## Quick Start
//!
//! ```no_run
//! use clap::Parser;
//! use biztime::{Application, Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let args = biztime::config::Args::parse();
//!     let config = Config::load(&args)?;
//!
//!     biztime::telemetry::init_telemetry()?;
//!
//!     let app = Application::new(config).await?;
//!     app.serve(async {
//!         tokio::signal::ctrl_c().await.expect("Failed to listen for Ctrl+C");
//!     })
//!     .await?;
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod db;
pub mod errors;
pub mod telemetry;

#[cfg(test)]
pub mod test_utils;

use crate::api::handlers::{companies, industries, invoices};
use crate::errors::Error;
use axum::{
    Router,
    routing::{get, post},
};
pub use config::Config;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::{Level, debug, info, instrument};

/// Application state shared across all request handlers.
///
/// Cloned into each handler via axum's `State` extractor; `db` is the
/// PostgreSQL connection pool every request draws from.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
}

/// Get the biztime database migrator
pub fn migrator() -> sqlx::migrate::Migrator {
    sqlx::migrate!("./migrations")
}

/// Connect to the database and run pending migrations
async fn setup_database(config: &Config) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.pool.max_connections)
        .min_connections(config.pool.min_connections)
        .connect(&config.database_url)
        .await?;

    migrator().run(&pool).await?;

    Ok(pool)
}

/// Build the application router with all endpoints and middleware.
///
/// Unmatched routes fall through to a handler producing the generic
/// `Not Found` error envelope.
#[instrument(skip_all)]
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(|| async { "OK" }))
        // Companies
        .route("/companies", get(companies::list_companies).post(companies::create_company))
        .route(
            "/companies/{code}",
            get(companies::get_company)
                .put(companies::replace_company)
                .patch(companies::patch_company)
                .delete(companies::delete_company),
        )
        // Invoices
        .route("/invoices", get(invoices::list_invoices).post(invoices::create_invoice))
        .route(
            "/invoices/{id}",
            get(invoices::get_invoice)
                .put(invoices::update_invoice)
                .delete(invoices::delete_invoice),
        )
        .route("/invoices/companies/{code}", get(invoices::company_invoices))
        // Industries
        .route("/industries", get(industries::list_industries).post(industries::create_industry))
        .route("/industries/company/{code}", post(industries::associate_industry))
        .fallback(|| async { Error::RouteNotFound })
        .with_state(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}

/// Main application struct that owns all resources and lifecycle.
///
/// 1. **Create**: [`Application::new`] connects to the database, runs
///    migrations, and builds the router
/// 2. **Serve**: [`Application::serve`] binds a TCP port and handles
///    requests until the shutdown future resolves
pub struct Application {
    router: Router,
    config: Config,
    pool: PgPool,
}

impl Application {
    /// Create a new application instance with all resources initialized
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        debug!("Starting biztime with configuration: {:#?}", config);

        let pool = setup_database(&config).await?;

        Ok(Self::with_pool(config, pool))
    }

    /// Assemble the application around an existing connection pool.
    ///
    /// Used by tests, where the pool (and its migrations) come from the test
    /// harness rather than from configuration.
    pub fn with_pool(config: Config, pool: PgPool) -> Self {
        let state = AppState {
            db: pool.clone(),
            config: config.clone(),
        };
        let router = build_router(state);

        Self { router, config, pool }
    }

    /// Convert application into a test server (for tests)
    #[cfg(test)]
    pub fn into_test_server(self) -> axum_test::TestServer {
        axum_test::TestServer::new(self.router).expect("Failed to create test server")
    }

    /// Start serving the application
    pub async fn serve<F>(self, shutdown: F) -> anyhow::Result<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let bind_addr = self.config.bind_address();
        let listener = TcpListener::bind(&bind_addr).await?;
        info!("biztime listening on http://{}", bind_addr);

        axum::serve(listener, self.router.into_make_service())
            .with_graceful_shutdown(shutdown)
            .await?;

        info!("Closing database connections...");
        self.pool.close().await;

        Ok(())
    }
}
