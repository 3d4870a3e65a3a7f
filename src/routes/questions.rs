use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    response::{IntoResponse, Json, Response},
};

use crate::{
    dto::question_dto::{
        CreateQuestionResponse, DeleteQuestionResponse, PageQuery, QuestionListResponse,
        QuestionPayload, QuestionRequest, SearchQuestionsResponse,
    },
    error::{Error, Result},
    models::category::category_map,
    routes::{json_body, page_query, path_id},
    utils::pagination::paginate,
    AppState,
};

#[utoipa::path(
    get,
    path = "/questions",
    params(
        ("page" = Option<i64>, Query, description = "1-based page number, 10 questions per page")
    ),
    responses(
        (status = 200, description = "One page of questions with all categories", body = QuestionListResponse),
        (status = 404, description = "Page is empty")
    )
)]
#[axum::debug_handler]
pub async fn list_questions(
    State(state): State<AppState>,
    query: std::result::Result<Query<PageQuery>, QueryRejection>,
) -> Result<Json<QuestionListResponse>> {
    let query = page_query(query);
    let questions = state.question_service.list_all().await?;
    let categories = state.category_service.list_all().await?;

    let page = query.page();
    let selected = paginate(&questions, page);
    if selected.is_empty() {
        return Err(Error::NotFound(format!("No questions on page {}", page)));
    }

    Ok(Json(QuestionListResponse {
        success: true,
        questions: selected,
        categories: category_map(categories),
        current_category: None,
        total_questions: questions.len() as i64,
    }))
}

#[utoipa::path(
    delete,
    path = "/questions/{id}",
    params(
        ("id" = i32, Path, description = "Question ID")
    ),
    responses(
        (status = 200, description = "Question deleted", body = DeleteQuestionResponse),
        (status = 404, description = "Question not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_question(
    State(state): State<AppState>,
    id: std::result::Result<Path<i32>, PathRejection>,
) -> Result<Json<DeleteQuestionResponse>> {
    let id = path_id(id)?;
    state.question_service.delete(id).await?;

    Ok(Json(DeleteQuestionResponse {
        success: true,
        deleted: id,
        message: "Question was deleted successfully".to_string(),
    }))
}

#[utoipa::path(
    post,
    path = "/questions",
    params(
        ("page" = Option<i64>, Query, description = "Page of the returned question list")
    ),
    request_body = QuestionPayload,
    responses(
        (status = 200, description = "Search results, or the created question id with the question list", body = CreateQuestionResponse),
        (status = 400, description = "Missing or malformed JSON body"),
        (status = 404, description = "Search matched nothing"),
        (status = 422, description = "Required question fields missing or invalid")
    )
)]
#[axum::debug_handler]
pub async fn create_or_search_questions(
    State(state): State<AppState>,
    query: std::result::Result<Query<PageQuery>, QueryRejection>,
    payload: std::result::Result<Json<Option<QuestionPayload>>, JsonRejection>,
) -> Result<Response> {
    let query = page_query(query);
    let payload = json_body(payload)?;

    match payload.into_request()? {
        QuestionRequest::Search(term) => {
            let matches = state.question_service.search(&term).await?;
            if matches.is_empty() {
                return Err(Error::NotFound(format!("No questions match '{}'", term)));
            }
            let total_questions = state.question_service.count().await?;

            Ok(Json(SearchQuestionsResponse {
                success: true,
                questions: paginate(&matches, query.page()),
                total_questions,
                current_category: None,
            })
            .into_response())
        }
        QuestionRequest::Create(new_question) => {
            let created = state.question_service.create(new_question).await?;
            let questions = state.question_service.list_all().await?;

            Ok(Json(CreateQuestionResponse {
                success: true,
                created: created.id,
                questions: paginate(&questions, query.page()),
                total_questions: questions.len() as i64,
                current_category: None,
            })
            .into_response())
        }
    }
}
