use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::debug;
use validator::Validate;

use crate::{
    api::{app_state::AppState, dto::learning_dto::*},
    error::AppError,
    models::learning::SessionStatus,
    services::learning::{CurriculumDraft, SessionDraft, SessionUpdate},
};

pub async fn create_session(
    State(state): State<AppState>,
    Json(request): Json<CreateSessionRequest>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Creating learning session: {}", request.name);
    request.validate()?;

    let graph = state.concepts.read();
    let session = state
        .learning
        .create_session(&graph, SessionDraft::from(request))?;
    drop(graph);

    Ok((StatusCode::CREATED, Json(SessionResponse::from(session))))
}

pub async fn list_sessions(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    debug!("Listing learning sessions");

    let sessions: Vec<SessionResponse> = state
        .learning
        .list_sessions()
        .into_iter()
        .map(SessionResponse::from)
        .collect();

    Ok(Json(sessions))
}

pub async fn update_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateSessionRequest>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Updating learning session: {}", id);

    let status = request
        .status
        .as_deref()
        .map(str::parse::<SessionStatus>)
        .transpose()?;
    let session = state.learning.update_session(
        &id,
        SessionUpdate {
            status,
            current_focus: request.current_focus,
        },
    )?;

    Ok(Json(SessionResponse::from(session)))
}

pub async fn upload_curriculum(
    State(state): State<AppState>,
    Json(request): Json<UploadCurriculumRequest>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Uploading curriculum: {}", request.title);
    request.validate()?;

    let graph = state.concepts.read();
    let curriculum = state
        .learning
        .create_curriculum(&graph, CurriculumDraft::from(request))?;
    drop(graph);

    Ok((StatusCode::CREATED, Json(CurriculumResponse::from(curriculum))))
}

pub async fn list_curricula(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    debug!("Listing curricula");

    let curricula: Vec<CurriculumResponse> = state
        .learning
        .list_curricula()
        .into_iter()
        .map(CurriculumResponse::from)
        .collect();

    Ok(Json(curricula))
}
