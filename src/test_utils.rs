//! Test utilities for integration testing.

use crate::config::{Config, PoolSettings};
use crate::db::handlers::{Companies, Industries, Invoices};
use crate::db::models::companies::{Company, CompanyCreateDBRequest};
use crate::db::models::industries::{Industry, IndustryCreateDBRequest};
use crate::db::models::invoices::{Invoice, InvoiceCreateDBRequest};
use axum_test::TestServer;
use sqlx::PgPool;

/// Build a test server over the given pool. The pool comes from the
/// `#[sqlx::test]` harness, which has already applied migrations.
pub async fn create_test_app(pool: PgPool) -> TestServer {
    let config = create_test_config();
    let app = crate::Application::with_pool(config, pool);

    app.into_test_server()
}

pub fn create_test_config() -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        // Unused: tests inject the pool directly
        database_url: "postgresql://postgres@localhost/biztime_test".to_string(),
        pool: PoolSettings {
            max_connections: 1,
            min_connections: 1,
        },
    }
}

pub async fn seed_company(pool: &PgPool, code: &str, name: &str, description: &str) -> Company {
    let mut conn = pool.acquire().await.expect("Failed to acquire connection");
    Companies::new(&mut conn)
        .create(&CompanyCreateDBRequest {
            code: code.to_string(),
            name: name.to_string(),
            description: Some(description.to_string()),
        })
        .await
        .expect("Failed to create test company")
}

pub async fn seed_invoice(pool: &PgPool, comp_code: &str, amt: f64) -> Invoice {
    let mut conn = pool.acquire().await.expect("Failed to acquire connection");
    Invoices::new(&mut conn)
        .create(&InvoiceCreateDBRequest {
            comp_code: comp_code.to_string(),
            amt,
        })
        .await
        .expect("Failed to create test invoice")
}

pub async fn seed_industry(pool: &PgPool, code: &str, name: &str) -> Industry {
    let mut conn = pool.acquire().await.expect("Failed to acquire connection");
    Industries::new(&mut conn)
        .create(&IndustryCreateDBRequest {
            code: code.to_string(),
            name: name.to_string(),
        })
        .await
        .expect("Failed to create test industry")
}

pub async fn seed_association(pool: &PgPool, comp_code: &str, industry_code: &str) {
    let mut conn = pool.acquire().await.expect("Failed to acquire connection");
    Industries::new(&mut conn)
        .associate(comp_code, industry_code)
        .await
        .expect("Failed to create test association");
}
