// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod request_log;

use axum::{
    Json, Router,
    extract::{
        Path, State as AxumState,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::{get, patch, post},
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};
use yep_api::{
    ApiError, BusinessProfileInfo, CreateBusinessProfileRequest, CreateBusinessProfileResponse,
    CreateMentorRequest, CreateYouthProfileRequest, MentorAssignmentInfo, MentorInfo,
    ReplaceYouthRelationshipsRequest, SuccessResponse, UpdateBusinessProfileRequest,
    UpdateMentorStatusRequest, YouthProfileInfo, YouthRelationshipInfo,
};
use yep_persistence::Persistence;

/// YEP Server - HTTP server for the Youth Entrepreneurship Program registry
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long, env = "YEP_DATABASE")]
    database: Option<String>,

    /// Address to bind the server to
    #[arg(long, env = "YEP_BIND", default_value = "127.0.0.1")]
    bind: String,

    /// Port to bind the server to
    #[arg(short, long, env = "YEP_PORT", default_value_t = 3000)]
    port: u16,
}

/// Application state shared across handlers.
///
/// Handlers hold the lock for the whole of their persistence work, so
/// database writes are applied one request at a time.
#[derive(Clone)]
struct AppState {
    persistence: Arc<Mutex<Persistence>>,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// Liveness response.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct HealthResponse {
    status: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
#[derive(Debug)]
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::InvalidInput { .. } => Self {
                status: StatusCode::BAD_REQUEST,
                message: err.to_string(),
            },
            ApiError::ResourceNotFound { .. } => Self {
                status: StatusCode::NOT_FOUND,
                message: err.to_string(),
            },
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: err.to_string(),
                }
            }
        }
    }
}

impl From<JsonRejection> for HttpError {
    fn from(rejection: JsonRejection) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: format!("Invalid request body: {}", rejection.body_text()),
        }
    }
}

impl From<PathRejection> for HttpError {
    fn from(rejection: PathRejection) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: format!("Invalid path parameter: {}", rejection.body_text()),
        }
    }
}

// ============================================================================
// Business Profiles
// ============================================================================

/// Handler for POST `/api/business-profiles`.
async fn handle_create_business_profile(
    AxumState(app_state): AxumState<AppState>,
    payload: Result<Json<CreateBusinessProfileRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateBusinessProfileResponse>), HttpError> {
    let Json(req) = payload?;
    info!(
        business_name = %req.business_name,
        district = %req.district,
        youth_count = req.youth_ids.len(),
        "Handling create_business_profile request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: CreateBusinessProfileResponse =
        yep_api::create_business_profile(&mut persistence, req)?;
    drop(persistence);

    Ok((StatusCode::CREATED, Json(response)))
}

/// Handler for GET `/api/business-profiles`.
async fn handle_list_business_profiles(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<Vec<BusinessProfileInfo>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let businesses: Vec<BusinessProfileInfo> = yep_api::list_business_profiles(&mut persistence)?;
    Ok(Json(businesses))
}

/// Handler for GET `/api/business-profiles/{id}`.
async fn handle_get_business_profile(
    AxumState(app_state): AxumState<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<BusinessProfileInfo>, HttpError> {
    let Path(business_id) = path?;
    let mut persistence = app_state.persistence.lock().await;
    let business: BusinessProfileInfo =
        yep_api::get_business_profile(&mut persistence, business_id)?;
    Ok(Json(business))
}

/// Handler for PATCH `/api/business-profiles/{id}`.
async fn handle_update_business_profile(
    AxumState(app_state): AxumState<AppState>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UpdateBusinessProfileRequest>, JsonRejection>,
) -> Result<Json<BusinessProfileInfo>, HttpError> {
    let Path(business_id) = path?;
    let Json(req) = payload?;
    info!(business_id, "Handling update_business_profile request");

    let mut persistence = app_state.persistence.lock().await;
    let business: BusinessProfileInfo =
        yep_api::update_business_profile(&mut persistence, business_id, req)?;
    Ok(Json(business))
}

/// Handler for DELETE `/api/business-profiles/{id}`.
async fn handle_delete_business_profile(
    AxumState(app_state): AxumState<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<SuccessResponse>, HttpError> {
    let Path(business_id) = path?;
    info!(business_id, "Handling delete_business_profile request");

    let mut persistence = app_state.persistence.lock().await;
    let response: SuccessResponse =
        yep_api::delete_business_profile(&mut persistence, business_id)?;
    Ok(Json(response))
}

/// Handler for POST `/api/business-profiles/youth-relationships`.
async fn handle_replace_youth_relationships(
    AxumState(app_state): AxumState<AppState>,
    payload: Result<Json<ReplaceYouthRelationshipsRequest>, JsonRejection>,
) -> Result<Json<SuccessResponse>, HttpError> {
    let Json(req) = payload?;
    info!(
        business_id = req.business_id,
        youth_count = req.youth_ids.len(),
        "Handling replace_youth_relationships request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: SuccessResponse = yep_api::replace_youth_relationships(&mut persistence, &req)?;
    Ok(Json(response))
}

/// Handler for GET `/api/business-profiles/{id}/mentor-assignments`.
async fn handle_get_mentor_assignments(
    AxumState(app_state): AxumState<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Vec<MentorAssignmentInfo>>, HttpError> {
    let Path(business_id) = path?;
    let mut persistence = app_state.persistence.lock().await;
    let assignments: Vec<MentorAssignmentInfo> =
        yep_api::get_mentor_assignments(&mut persistence, business_id)?;
    Ok(Json(assignments))
}

/// Handler for GET `/api/business-profiles/{id}/youth-relationships`.
async fn handle_get_youth_relationships(
    AxumState(app_state): AxumState<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Vec<YouthRelationshipInfo>>, HttpError> {
    let Path(business_id) = path?;
    let mut persistence = app_state.persistence.lock().await;
    let relationships: Vec<YouthRelationshipInfo> =
        yep_api::get_youth_relationships(&mut persistence, business_id)?;
    Ok(Json(relationships))
}

// ============================================================================
// Youth Profiles
// ============================================================================

/// Handler for POST `/api/youth-profiles`.
async fn handle_create_youth_profile(
    AxumState(app_state): AxumState<AppState>,
    payload: Result<Json<CreateYouthProfileRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<YouthProfileInfo>), HttpError> {
    let Json(req) = payload?;

    let mut persistence = app_state.persistence.lock().await;
    let youth: YouthProfileInfo = yep_api::create_youth_profile(&mut persistence, req)?;
    Ok((StatusCode::CREATED, Json(youth)))
}

/// Handler for GET `/api/youth-profiles`.
async fn handle_list_youth_profiles(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<Vec<YouthProfileInfo>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let youth: Vec<YouthProfileInfo> = yep_api::list_youth_profiles(&mut persistence)?;
    Ok(Json(youth))
}

/// Handler for GET `/api/youth-profiles/{id}`.
async fn handle_get_youth_profile(
    AxumState(app_state): AxumState<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<YouthProfileInfo>, HttpError> {
    let Path(youth_id) = path?;
    let mut persistence = app_state.persistence.lock().await;
    let youth: YouthProfileInfo = yep_api::get_youth_profile(&mut persistence, youth_id)?;
    Ok(Json(youth))
}

// ============================================================================
// Mentors
// ============================================================================

/// Handler for POST `/api/mentors`.
async fn handle_create_mentor(
    AxumState(app_state): AxumState<AppState>,
    payload: Result<Json<CreateMentorRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MentorInfo>), HttpError> {
    let Json(req) = payload?;
    info!(name = %req.name, "Handling create_mentor request");

    let mut persistence = app_state.persistence.lock().await;
    let mentor: MentorInfo = yep_api::create_mentor(&mut persistence, req)?;
    Ok((StatusCode::CREATED, Json(mentor)))
}

/// Handler for GET `/api/mentors`.
async fn handle_list_mentors(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<Vec<MentorInfo>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let mentors: Vec<MentorInfo> = yep_api::list_mentors(&mut persistence)?;
    Ok(Json(mentors))
}

/// Handler for PATCH `/api/mentors/{id}/status`.
async fn handle_update_mentor_status(
    AxumState(app_state): AxumState<AppState>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UpdateMentorStatusRequest>, JsonRejection>,
) -> Result<Json<MentorInfo>, HttpError> {
    let Path(mentor_id) = path?;
    let Json(req) = payload?;

    let mut persistence = app_state.persistence.lock().await;
    let mentor: MentorInfo = yep_api::update_mentor_status(&mut persistence, mentor_id, req)?;
    Ok(Json(mentor))
}

/// Handler for GET `/health`.
#[allow(clippy::unused_async)]
async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: String::from("ok"),
    })
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    let api: Router<AppState> = Router::new()
        .route(
            "/business-profiles",
            post(handle_create_business_profile).get(handle_list_business_profiles),
        )
        .route(
            "/business-profiles/youth-relationships",
            post(handle_replace_youth_relationships),
        )
        .route(
            "/business-profiles/{id}",
            get(handle_get_business_profile)
                .patch(handle_update_business_profile)
                .delete(handle_delete_business_profile),
        )
        .route(
            "/business-profiles/{id}/mentor-assignments",
            get(handle_get_mentor_assignments),
        )
        .route(
            "/business-profiles/{id}/youth-relationships",
            get(handle_get_youth_relationships),
        )
        .route(
            "/youth-profiles",
            post(handle_create_youth_profile).get(handle_list_youth_profiles),
        )
        .route("/youth-profiles/{id}", get(handle_get_youth_profile))
        .route(
            "/mentors",
            post(handle_create_mentor).get(handle_list_mentors),
        )
        .route("/mentors/{id}/status", patch(handle_update_mentor_status));

    Router::new()
        .nest("/api", api)
        .route("/health", get(handle_health))
        .layer(middleware::from_fn(request_log::log_requests))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing YEP Server");

    // Initialize persistence (in-memory or file-based based on CLI argument)
    let persistence: Persistence = if let Some(db_path) = &args.database {
        info!(path = %db_path, "Using file-based database");
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
    };

    let app: Router = build_router(app_state);

    let listener = tokio::net::TcpListener::bind((args.bind.as_str(), args.port)).await?;
    info!(addr = %listener.local_addr()?, "Server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
