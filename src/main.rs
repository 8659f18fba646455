//! Binary entry point for the payroll engine API server.

use std::env;

use dotenvy::dotenv;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use payroll_engine::api::{AppState, create_router};
use payroll_engine::store::MemoryStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing as early as possible
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Environment variables may be set externally; a .env file is optional
    dotenv().ok();

    let store = MemoryStore::new();

    // Seed the first admin so the role table is administrable at all
    match env::var("PAYROLL_ADMIN_ID") {
        Ok(raw) => {
            let admin_id: Uuid = raw.parse()?;
            store.bootstrap_admin(admin_id)?;
            info!(admin_id = %admin_id, "Bootstrapped admin role");
        }
        Err(_) => {
            warn!("PAYROLL_ADMIN_ID not set; starting without an admin principal");
        }
    }

    let bind_addr = env::var("PAYROLL_BIND").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!(addr = %bind_addr, "Payroll engine listening");

    let router = create_router(AppState::new(store));
    axum::serve(listener, router).await?;

    Ok(())
}
