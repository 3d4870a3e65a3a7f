use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use utoipa::ToSchema;

use crate::error::{Error, Result};
use crate::models::category::CategoryMap;
use crate::models::question::Question;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PageQuery {
    pub page: Option<String>,
}

impl PageQuery {
    /// Unparseable or absent values fall back to the first page.
    pub fn page(&self) -> i64 {
        self.page
            .as_deref()
            .and_then(|raw| raw.trim().parse().ok())
            .unwrap_or(1)
    }
}

/// Body of `POST /questions`. Either a search (`searchTerm`) or a new question.
#[derive(Debug, Clone, Deserialize, Default, ToSchema)]
#[serde(default)]
pub struct QuestionPayload {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
    pub question: Option<String>,
    pub answer: Option<String>,
    #[schema(value_type = Option<i32>)]
    pub category: Option<JsonValue>,
    #[schema(value_type = Option<i32>)]
    pub difficulty: Option<JsonValue>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionRequest {
    Search(String),
    Create(NewQuestion),
}

/// Stored as sent; only presence and integer-ness are checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}

impl QuestionPayload {
    pub fn into_request(self) -> Result<QuestionRequest> {
        if let Some(term) = self.search_term.filter(|t| !t.is_empty()) {
            return Ok(QuestionRequest::Search(term));
        }

        let (Some(question), Some(answer), Some(category), Some(difficulty)) =
            (self.question, self.answer, self.category, self.difficulty)
        else {
            return Err(Error::Unprocessable(
                "question, answer, category and difficulty are required".to_string(),
            ));
        };

        Ok(QuestionRequest::Create(NewQuestion {
            question,
            answer,
            category: int_field("category", &category)?,
            difficulty: int_field("difficulty", &difficulty)?,
        }))
    }
}

/// Accepts a JSON integer or a string holding one, as sent by form-driven clients.
pub(crate) fn as_int(value: &JsonValue) -> Option<i32> {
    match value {
        JsonValue::Number(n) => n.as_i64().and_then(|v| i32::try_from(v).ok()),
        JsonValue::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn int_field(name: &str, value: &JsonValue) -> Result<i32> {
    as_int(value).ok_or_else(|| Error::Unprocessable(format!("{} must be an integer", name)))
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct QuestionListResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    #[schema(value_type = Object)]
    pub categories: CategoryMap,
    pub current_category: Option<i32>,
    pub total_questions: i64,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SearchQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: i64,
    pub current_category: Option<i32>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CreateQuestionResponse {
    pub success: bool,
    pub created: i32,
    pub questions: Vec<Question>,
    pub total_questions: i64,
    pub current_category: Option<i32>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DeleteQuestionResponse {
    pub success: bool,
    pub deleted: i32,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: i64,
    pub current_category: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: JsonValue) -> QuestionPayload {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn search_term_selects_search_branch() {
        let req = payload(json!({ "searchTerm": "Where" })).into_request().unwrap();
        assert_eq!(req, QuestionRequest::Search("Where".into()));
    }

    #[test]
    fn search_term_wins_over_question_fields() {
        let req = payload(json!({
            "searchTerm": "title",
            "question": "Q",
            "answer": "A",
            "category": 1,
            "difficulty": 1
        }))
        .into_request()
        .unwrap();
        assert_eq!(req, QuestionRequest::Search("title".into()));
    }

    #[test]
    fn empty_body_is_unprocessable() {
        let err = payload(json!({})).into_request().unwrap_err();
        assert!(matches!(err, Error::Unprocessable(_)));
    }

    #[test]
    fn empty_search_term_falls_through_to_create() {
        let err = payload(json!({ "searchTerm": "" })).into_request().unwrap_err();
        assert!(matches!(err, Error::Unprocessable(_)));
    }

    #[test]
    fn null_field_counts_as_missing() {
        let err = payload(json!({
            "question": "Where are the Pyramids?",
            "answer": "Egypt",
            "category": null,
            "difficulty": 1
        }))
        .into_request()
        .unwrap_err();
        assert!(matches!(err, Error::Unprocessable(_)));
    }

    #[test]
    fn complete_payload_builds_new_question() {
        let req = payload(json!({
            "question": "  Where are the Pyramids ?",
            "answer": "Egypt",
            "category": 3,
            "difficulty": "1"
        }))
        .into_request()
        .unwrap();
        assert_eq!(
            req,
            QuestionRequest::Create(NewQuestion {
                question: "  Where are the Pyramids ?".into(),
                answer: "Egypt".into(),
                category: 3,
                difficulty: 1,
            })
        );
    }

    #[test]
    fn any_present_values_are_accepted_unchanged() {
        for (question, difficulty) in [("", 0), ("Q", 7), (" ", -1)] {
            let req = payload(json!({
                "question": question,
                "answer": "",
                "category": 3,
                "difficulty": difficulty
            }))
            .into_request()
            .unwrap();
            assert_eq!(
                req,
                QuestionRequest::Create(NewQuestion {
                    question: question.into(),
                    answer: String::new(),
                    category: 3,
                    difficulty,
                })
            );
        }
    }

    #[test]
    fn non_numeric_category_is_unprocessable() {
        let err = payload(json!({
            "question": "Q",
            "answer": "A",
            "category": "history",
            "difficulty": 2
        }))
        .into_request()
        .unwrap_err();
        assert!(matches!(err, Error::Unprocessable(_)));
    }

    #[test]
    fn page_query_defaults_to_first_page() {
        assert_eq!(PageQuery::default().page(), 1);
        assert_eq!(PageQuery { page: Some("abc".into()) }.page(), 1);
        assert_eq!(PageQuery { page: Some("3".into()) }.page(), 3);
        assert_eq!(PageQuery { page: Some("0".into()) }.page(), 0);
    }
}
