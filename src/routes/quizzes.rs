use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};

use crate::{
    dto::quiz_dto::{QuizPayload, QuizResponse},
    error::Result,
    routes::json_body,
    AppState,
};

#[utoipa::path(
    post,
    path = "/quizzes",
    request_body = QuizPayload,
    responses(
        (status = 200, description = "A random unseen question, or null when the quiz is over", body = QuizResponse),
        (status = 400, description = "Missing or malformed JSON body")
    )
)]
#[axum::debug_handler]
pub async fn next_quiz_question(
    State(state): State<AppState>,
    payload: std::result::Result<Json<Option<QuizPayload>>, JsonRejection>,
) -> Result<Json<QuizResponse>> {
    let request = json_body(payload)?.into_request()?;
    let question = state.quiz_service.next_question(request).await?;

    Ok(Json(QuizResponse {
        success: true,
        question,
    }))
}
