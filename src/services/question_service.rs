use crate::dto::question_dto::NewQuestion;
use crate::error::{Error, Result};
use crate::models::question::Question;
use sqlx::PgPool;

#[derive(Clone)]
pub struct QuestionService {
    pool: PgPool,
}

impl QuestionService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_all(&self) -> Result<Vec<Question>> {
        let items = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    pub async fn count(&self) -> Result<i64> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM questions")
            .fetch_one(&self.pool)
            .await?;

        Ok(total)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Question> {
        let question = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        question.ok_or_else(|| Error::NotFound(format!("Question {} not found", id)))
    }

    /// Case-insensitive substring match on the question text, ordered by id.
    pub async fn search(&self, term: &str) -> Result<Vec<Question>> {
        let pattern = format!("%{}%", escape_like(term));
        let items = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE question ILIKE $1
            ORDER BY id
            "#,
        )
        .bind(pattern)
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    pub async fn list_by_category(&self, category: i32) -> Result<Vec<Question>> {
        let items = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE category = $1
            ORDER BY id
            "#,
        )
        .bind(category)
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    pub async fn create(&self, payload: NewQuestion) -> Result<Question> {
        let question = sqlx::query_as::<_, Question>(
            r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES ($1, $2, $3, $4)
            RETURNING id, question, answer, category, difficulty
            "#,
        )
        .bind(payload.question)
        .bind(payload.answer)
        .bind(payload.category)
        .bind(payload.difficulty)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!(
            question_id = question.id,
            category = question.category,
            "Question created"
        );
        Ok(question)
    }

    pub async fn delete(&self, id: i32) -> Result<Question> {
        let question = self.get_by_id(id).await?;

        sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        tracing::info!(question_id = id, "Question deleted");
        Ok(question)
    }
}

/// Escapes LIKE wildcards so the term matches literally (backslash is the default escape).
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
