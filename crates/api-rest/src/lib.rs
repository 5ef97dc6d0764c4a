//! # API REST
//!
//! REST API implementation for the patient service.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON bodies, status codes, CORS, request tracing)
//!
//! Handlers hold no business logic: they parse the path identifier, validate the body, call
//! [`PatientService`] and let [`ApiError`] translate failures.

#![warn(rust_2018_idioms)]

pub mod error;

use api_shared::{HealthRes, HealthService, MessageRes, PatientRequest, PatientResponse};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use patient_core::{validate, PatientId, PatientService, ValidationMode};
use tokio::net::TcpListener;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use error::ApiError;

/// Application state shared across REST API handlers
#[derive(Clone)]
pub struct AppState {
    patient_service: PatientService,
}

impl AppState {
    pub fn new(patient_service: PatientService) -> Self {
        Self { patient_service }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health,
        get_patient,
        list_patients,
        create_patient,
        update_patient,
        delete_patient,
    ),
    components(schemas(HealthRes, PatientRequest, PatientResponse, MessageRes)),
    tags((name = "Patient APIs", description = "API for managing Patients"))
)]
pub struct ApiDoc;

/// Builds the application router with all patient routes, docs and middleware.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/patients", get(list_patients).post(create_patient))
        .route(
            "/patients/:id",
            get(get_patient).put(update_patient).delete(delete_patient),
        )
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Serves `router(state)` on `listener` until Ctrl-C is received.
///
/// # Errors
///
/// Returns an error if the HTTP server fails while running.
pub async fn serve(listener: TcpListener, state: AppState) -> std::io::Result<()> {
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("-- Shutdown signal received, draining connections");
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Returns UP while the service is running. Used by monitoring and load balancer health checks.
#[axum::debug_handler]
async fn health() -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    get,
    path = "/patients/{id}",
    tag = "Patient APIs",
    params(("id" = String, Path, description = "Patient ID (UUID)")),
    responses(
        (status = 200, description = "Patient found", body = PatientResponse),
        (status = 400, description = "Malformed patient ID", body = MessageRes),
        (status = 404, description = "Patient not found", body = MessageRes)
    )
)]
/// Get patient by ID
#[axum::debug_handler]
async fn get_patient(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PatientResponse>, ApiError> {
    let id = PatientId::parse(&id)?;
    Ok(Json(state.patient_service.get_by_id(id)?))
}

#[utoipa::path(
    get,
    path = "/patients",
    tag = "Patient APIs",
    responses(
        (status = 200, description = "All patients", body = [PatientResponse]),
        (status = 500, description = "Internal server error", body = MessageRes)
    )
)]
/// Get all patients
#[axum::debug_handler]
async fn list_patients(
    State(state): State<AppState>,
) -> Result<Json<Vec<PatientResponse>>, ApiError> {
    Ok(Json(state.patient_service.list_all()?))
}

#[utoipa::path(
    post,
    path = "/patients",
    tag = "Patient APIs",
    request_body = PatientRequest,
    responses(
        (status = 200, description = "Patient created", body = PatientResponse),
        (status = 400, description = "Field errors or email already exists"),
        (status = 500, description = "Internal server error", body = MessageRes)
    )
)]
/// Create a new Patient
///
/// Applies the create rule set, which additionally requires `registeredDate`.
#[axum::debug_handler]
async fn create_patient(
    State(state): State<AppState>,
    payload: Result<Json<PatientRequest>, JsonRejection>,
) -> Result<Json<PatientResponse>, ApiError> {
    let Json(req) = payload?;
    let validated = validate(&req, ValidationMode::Create)?;
    Ok(Json(state.patient_service.create(validated)?))
}

#[utoipa::path(
    put,
    path = "/patients/{id}",
    tag = "Patient APIs",
    params(("id" = String, Path, description = "Patient ID (UUID)")),
    request_body = PatientRequest,
    responses(
        (status = 200, description = "Patient updated", body = PatientResponse),
        (status = 400, description = "Field errors, malformed ID or email already exists"),
        (status = 404, description = "Patient not found", body = MessageRes)
    )
)]
/// Update existing Patient
///
/// Replaces name, email, address and date of birth. `registeredDate` is ignored.
#[axum::debug_handler]
async fn update_patient(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<PatientRequest>, JsonRejection>,
) -> Result<Json<PatientResponse>, ApiError> {
    let id = PatientId::parse(&id)?;
    let Json(req) = payload?;
    let validated = validate(&req, ValidationMode::Update)?;
    Ok(Json(state.patient_service.update(id, validated)?))
}

#[utoipa::path(
    delete,
    path = "/patients/{id}",
    tag = "Patient APIs",
    params(("id" = String, Path, description = "Patient ID (UUID)")),
    responses(
        (status = 204, description = "Patient deleted (or already absent)"),
        (status = 400, description = "Malformed patient ID", body = MessageRes)
    )
)]
/// Delete a Patient
#[axum::debug_handler]
async fn delete_patient(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = PatientId::parse(&id)?;
    state.patient_service.delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}
