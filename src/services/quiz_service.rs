use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::dto::quiz_dto::QuizRequest;
use crate::error::Result;
use crate::models::question::Question;
use crate::services::question_service::QuestionService;

#[derive(Clone)]
pub struct QuizService {
    questions: QuestionService,
}

impl QuizService {
    pub fn new(questions: QuestionService) -> Self {
        Self { questions }
    }

    /// Next random question the player has not seen yet, or `None` once the pool is exhausted.
    pub async fn next_question(&self, request: QuizRequest) -> Result<Option<Question>> {
        let pool = match request.category {
            Some(category) => self.questions.list_by_category(category).await?,
            None => self.questions.list_all().await?,
        };
        let previous: HashSet<i32> = request.previous_questions.into_iter().collect();

        let next = pick_unseen(pool, &previous, &mut rand::thread_rng());
        match &next {
            Some(question) => tracing::debug!(
                question_id = question.id,
                category = ?request.category,
                asked = previous.len(),
                "Quiz question selected"
            ),
            None => tracing::debug!(category = ?request.category, "Quiz pool exhausted"),
        }
        Ok(next)
    }
}

pub fn pick_unseen<R: Rng + ?Sized>(
    pool: Vec<Question>,
    previous: &HashSet<i32>,
    rng: &mut R,
) -> Option<Question> {
    let remaining: Vec<Question> = pool
        .into_iter()
        .filter(|q| !previous.contains(&q.id))
        .collect();
    remaining.choose(rng).cloned()
}
