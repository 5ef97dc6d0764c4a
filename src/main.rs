use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::AppState;
use patient_core::db::open_database;
use patient_core::{
    CoreConfig, PatientService, SqlitePatientRepository, database_location_from_env_value,
};

/// Main entry point for the patient service
///
/// Resolves configuration once, opens (and migrates) the patient store, then serves the REST
/// API until Ctrl-C.
///
/// # Environment Variables
/// - `PATIENT_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `PATIENT_DB_PATH`: SQLite database file (default: "patient_data/patients.db"; ":memory:" for
///   an in-memory store)
/// - `RUST_LOG`: additional tracing filter directives
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the patient store cannot be opened or migrated,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("patient_run=info".parse()?)
                .add_directive("api_rest=info".parse()?)
                .add_directive("patient_core=info".parse()?)
                .add_directive("tower_http=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rest_addr = std::env::var("PATIENT_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
    let cfg = CoreConfig::new(database_location_from_env_value(
        std::env::var("PATIENT_DB_PATH").ok(),
    ));

    let conn = open_database(cfg.database())?;
    let patient_service = PatientService::new(Arc::new(SqlitePatientRepository::new(conn)));

    let listener = tokio::net::TcpListener::bind(&rest_addr).await?;
    tracing::info!("++ Starting patient service REST API on {}", rest_addr);

    api_rest::serve(listener, AppState::new(patient_service)).await?;

    tracing::info!("-- Patient service stopped");
    Ok(())
}
