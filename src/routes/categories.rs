use axum::{
    extract::{rejection::PathRejection, Path, State},
    response::Json,
};

use crate::{
    dto::{category_dto::CategoryListResponse, question_dto::CategoryQuestionsResponse},
    error::{Error, Result},
    models::category::category_map,
    routes::path_id,
    AppState,
};

#[utoipa::path(
    get,
    path = "/categories",
    responses(
        (status = 200, description = "All categories keyed by id", body = CategoryListResponse),
        (status = 404, description = "No categories exist")
    )
)]
#[axum::debug_handler]
pub async fn list_categories(State(state): State<AppState>) -> Result<Json<CategoryListResponse>> {
    let categories = state.category_service.list_all().await?;
    if categories.is_empty() {
        return Err(Error::NotFound("No categories".to_string()));
    }

    let total_categories = categories.len();
    Ok(Json(CategoryListResponse {
        success: true,
        categories: category_map(categories),
        total_categories,
    }))
}

/// 404 covers both an unknown category and a category without questions.
#[utoipa::path(
    get,
    path = "/categories/{id}/questions",
    params(
        ("id" = i32, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Every question in the category", body = CategoryQuestionsResponse),
        (status = 404, description = "Category has no questions")
    )
)]
#[axum::debug_handler]
pub async fn list_questions_by_category(
    State(state): State<AppState>,
    id: std::result::Result<Path<i32>, PathRejection>,
) -> Result<Json<CategoryQuestionsResponse>> {
    let category = path_id(id)?;
    let questions = state.question_service.list_by_category(category).await?;
    if questions.is_empty() {
        return Err(Error::NotFound(format!(
            "No questions in category {}",
            category
        )));
    }
    let total_questions = state.question_service.count().await?;

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        questions,
        total_questions,
        current_category: category,
    }))
}
