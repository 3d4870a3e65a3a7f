pub mod categories;
pub mod health;
pub mod questions;
pub mod quizzes;

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    extract::{Path, Query},
    routing::{delete, get, post},
    Json, Router,
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use crate::{
    docs::ApiDoc,
    dto::question_dto::PageQuery,
    error::{Error, Result},
    middleware::cors::trivia_cors,
    AppState,
};

/// The full application: every endpoint plus CORS and request tracing.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/api-docs/openapi.json", get(openapi))
        .route(
            "/questions",
            get(questions::list_questions).post(questions::create_or_search_questions),
        )
        .route("/questions/:id", delete(questions::delete_question))
        .route("/categories", get(categories::list_categories))
        .route(
            "/categories/:id/questions",
            get(categories::list_questions_by_category),
        )
        .route("/quizzes", post(quizzes::next_quiz_question))
        .fallback(not_found)
        .with_state(state)
        .layer(trivia_cors())
        .layer(TraceLayer::new_for_http())
}

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

async fn not_found() -> Error {
    Error::NotFound("No such route".to_string())
}

/// Unwraps a JSON body. An absent, unparseable or `null` body is a bad request.
pub(crate) fn json_body<T>(payload: std::result::Result<Json<Option<T>>, JsonRejection>) -> Result<T> {
    match payload {
        Ok(Json(Some(body))) => Ok(body),
        Ok(Json(None)) => Err(Error::BadRequest("Request body is null".to_string())),
        Err(rejection) => Err(Error::BadRequest(rejection.body_text())),
    }
}

/// Non-integer ids never name a resource.
pub(crate) fn path_id(id: std::result::Result<Path<i32>, PathRejection>) -> Result<i32> {
    id.map(|Path(id)| id)
        .map_err(|rejection| Error::NotFound(rejection.body_text()))
}

/// A query string that does not deserialize (e.g. a repeated `page`) reads as page 1.
pub(crate) fn page_query(query: std::result::Result<Query<PageQuery>, QueryRejection>) -> PageQuery {
    match query {
        Ok(Query(query)) => query,
        Err(rejection) => {
            tracing::debug!(error = %rejection.body_text(), "Ignoring malformed query string");
            PageQuery::default()
        }
    }
}
