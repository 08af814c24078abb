use axum::{Json, extract::State, response::IntoResponse};
use tracing::debug;
use validator::Validate;

use crate::{
    api::{app_state::AppState, dto::quiz_dto::*},
    error::AppError,
    models::quiz::Difficulty,
};

pub async fn generate_quiz(
    State(state): State<AppState>,
    Json(request): Json<GenerateQuizRequest>,
) -> Result<impl IntoResponse, AppError> {
    debug!(
        "Generating {} quiz question(s) for {}",
        request.count, request.concept
    );
    request.validate()?;

    let difficulty: Difficulty = request.difficulty.as_deref().unwrap_or_default().parse()?;
    let graph = state.concepts.read();
    let questions = state
        .quizzes
        .generate(&graph, &request.concept, difficulty, request.count)?;
    drop(graph);

    Ok(Json(GenerateQuizResponse {
        questions: questions
            .into_iter()
            .map(QuizQuestionResponse::from)
            .collect(),
    }))
}

pub async fn attempt_quiz(
    State(state): State<AppState>,
    Json(request): Json<QuizAttemptRequest>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Grading attempt for question {}", request.question_id);
    request.validate()?;

    let choice = request.choice().ok_or_else(|| {
        AppError::Validation("Either selected_index or choice is required".to_string())
    })?;
    let outcome = state.quizzes.attempt(&request.question_id, choice)?;
    state.metrics.record_quiz_attempt();

    Ok(Json(QuizAttemptResponse::from(outcome)))
}
