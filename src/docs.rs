use utoipa::OpenApi;

use crate::dto::{
    category_dto::CategoryListResponse,
    question_dto::{
        CategoryQuestionsResponse, CreateQuestionResponse, DeleteQuestionResponse,
        QuestionListResponse, QuestionPayload, SearchQuestionsResponse,
    },
    quiz_dto::{QuizCategory, QuizPayload, QuizResponse},
};
use crate::models::{category::Category, question::Question};
use crate::routes;

#[derive(OpenApi)]
#[openapi(
    info(title = "Trivia API", description = "Questions, categories and quiz play"),
    paths(
        routes::health::health,
        routes::questions::list_questions,
        routes::questions::create_or_search_questions,
        routes::questions::delete_question,
        routes::categories::list_categories,
        routes::categories::list_questions_by_category,
        routes::quizzes::next_quiz_question,
    ),
    components(schemas(
        Question,
        Category,
        QuestionPayload,
        QuestionListResponse,
        SearchQuestionsResponse,
        CreateQuestionResponse,
        DeleteQuestionResponse,
        CategoryQuestionsResponse,
        CategoryListResponse,
        QuizPayload,
        QuizCategory,
        QuizResponse,
    ))
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_endpoint() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();
        for expected in [
            "/health",
            "/questions",
            "/questions/{id}",
            "/categories",
            "/categories/{id}/questions",
            "/quizzes",
        ] {
            assert!(paths.contains(&expected), "missing {}", expected);
        }
    }
}
