use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::debug;
use validator::Validate;

use crate::{
    api::{app_state::AppState, dto::share_dto::*},
    error::AppError,
    models::share::ShareDraft,
};

pub async fn publish_share(
    State(state): State<AppState>,
    Json(request): Json<PublishShareRequest>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Publishing share '{}' by {}", request.title, request.author);
    request.validate()?;

    let share = state.shares.publish(ShareDraft::from(request))?;
    state.metrics.record_share_published();

    Ok((StatusCode::CREATED, Json(ShareResponse::from(share))))
}

pub async fn list_shares(
    State(state): State<AppState>,
    Query(params): Query<ListSharesParams>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = params.viewer.unwrap_or_default();
    debug!("Listing shares for viewer '{}'", viewer);

    let shares: Vec<ShareResponse> = state
        .shares
        .visible_to(&viewer)
        .into_iter()
        .map(ShareResponse::from)
        .collect();

    Ok(Json(shares))
}

pub async fn authorize_share(
    State(state): State<AppState>,
    Path(share_id): Path<String>,
    Json(request): Json<AuthorizeShareRequest>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Authorizing handles on share {}", share_id);

    let share = state
        .shares
        .authorize(&share_id, request.handles.into_handles())?;

    Ok(Json(ShareResponse::from(share)))
}

pub async fn share_matchups(
    State(state): State<AppState>,
    Query(params): Query<MatchupParams>,
) -> Result<impl IntoResponse, AppError> {
    let limit = params.limit.unwrap_or(state.graph_config.matchup_limit);
    debug!("Matchups for '{}' (limit={})", params.viewer, limit);

    let matches: Vec<ShareMatchResponse> = state
        .shares
        .matchups(&params.viewer)?
        .into_iter()
        .take(limit)
        .map(ShareMatchResponse::from)
        .collect();

    Ok(Json(matches))
}

pub async fn compare_handles(
    State(state): State<AppState>,
    Query(params): Query<CompareParams>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Comparing '{}' with '{}'", params.handle_a, params.handle_b);

    let comparison = state.shares.compare(&params.handle_a, &params.handle_b);

    Ok(Json(HandleComparisonResponse::from(comparison)))
}
