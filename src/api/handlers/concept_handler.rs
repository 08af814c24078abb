use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::debug;
use validator::Validate;

use crate::{
    api::{app_state::AppState, dto::concept_dto::*},
    error::AppError,
    models::concept::ConceptDraft,
    services::find_path,
};

pub async fn upsert_concept(
    State(state): State<AppState>,
    Json(request): Json<UpsertConceptRequest>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Upserting concept: {}", request.name);
    request.validate()?;

    let outcome = state.concepts.upsert(ConceptDraft::from(request))?;
    state.metrics.record_concept_upsert();

    let status = if outcome.created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(ConceptResponse::from(outcome.concept))))
}

pub async fn list_concepts(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    debug!("Listing concepts");

    let concepts: Vec<ConceptResponse> = state
        .concepts
        .list()
        .into_iter()
        .map(ConceptResponse::from)
        .collect();

    Ok(Json(concepts))
}

pub async fn get_concept(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Getting concept: {}", name);

    // 同一读快照内取详情，避免与并发写交错
    let graph = state.concepts.read();
    let concept = graph
        .get(&name)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("Unknown concept: {}", name)))?;
    let dependents = graph.dependents(&name)?;
    let prerequisite_chain = graph.prerequisite_chain(&name)?;
    drop(graph);

    Ok(Json(ConceptDetailResponse {
        concept: concept.into(),
        dependents,
        prerequisite_chain,
    }))
}

pub async fn delete_concept(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Deleting concept: {}", name);

    state.concepts.delete(&name)?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn create_relationship(
    State(state): State<AppState>,
    Json(request): Json<RelationshipRequest>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Linking {} -> {}", request.source, request.target);
    request.validate()?;

    let (source, target) = request.names();
    let relationship = state.concepts.link(source, target)?;

    Ok((
        StatusCode::CREATED,
        Json(RelationshipResponse::from(relationship)),
    ))
}

pub async fn list_relationships(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Listing relationships");

    let relationships: Vec<RelationshipResponse> = state
        .concepts
        .list_relationships()
        .into_iter()
        .map(RelationshipResponse::from)
        .collect();

    Ok(Json(relationships))
}

pub async fn delete_relationship(
    State(state): State<AppState>,
    Json(request): Json<RelationshipRequest>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Unlinking {} -> {}", request.source, request.target);
    request.validate()?;

    let (source, target) = request.names();
    state.concepts.unlink(source, target)?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn learning_path(
    State(state): State<AppState>,
    Query(params): Query<LearningPathParams>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Computing learning path: {} -> {}", params.start, params.goal);
    params.validate()?;

    let (start, goal) = params.endpoints();
    let graph = state.concepts.read();
    let names = find_path(&graph, start, goal)?;
    let path: Vec<ConceptResponse> = names
        .iter()
        .filter_map(|name| graph.get(name).cloned())
        .map(ConceptResponse::from)
        .collect();
    drop(graph);

    Ok(Json(LearningPathResponse {
        steps: path.len().saturating_sub(1),
        path,
    }))
}
