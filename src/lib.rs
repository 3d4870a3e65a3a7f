pub mod config;
pub mod database;
pub mod docs;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use crate::services::{
    category_service::CategoryService, question_service::QuestionService,
    quiz_service::QuizService,
};
use sqlx::PgPool;

/// Per-request dependencies, built once from the pool and handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub question_service: QuestionService,
    pub category_service: CategoryService,
    pub quiz_service: QuizService,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        let question_service = QuestionService::new(pool.clone());
        let category_service = CategoryService::new(pool);
        let quiz_service = QuizService::new(question_service.clone());

        Self {
            question_service,
            category_service,
            quiz_service,
        }
    }
}
