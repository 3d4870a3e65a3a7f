use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use utoipa::ToSchema;

use crate::dto::question_dto::as_int;
use crate::error::{Error, Result};
use crate::models::question::Question;

#[derive(Debug, Clone, Deserialize, Default, ToSchema)]
#[serde(default)]
pub struct QuizPayload {
    pub previous_questions: Vec<i32>,
    pub quiz_category: Option<QuizCategory>,
}

/// The category picked in the quiz UI. An object without `id` means every category.
#[derive(Debug, Clone, Serialize, Deserialize, Default, ToSchema)]
#[serde(default)]
pub struct QuizCategory {
    #[schema(value_type = Option<i32>)]
    pub id: Option<JsonValue>,
    #[serde(rename = "type")]
    pub category_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizRequest {
    pub previous_questions: Vec<i32>,
    pub category: Option<i32>,
}

impl QuizPayload {
    pub fn into_request(self) -> Result<QuizRequest> {
        let category = match self.quiz_category.and_then(|c| c.id) {
            None | Some(JsonValue::Null) => None,
            Some(raw) => Some(as_int(&raw).ok_or_else(|| {
                Error::BadRequest(format!("quiz_category.id is not an integer: {}", raw))
            })?),
        };
        Ok(QuizRequest {
            previous_questions: self.previous_questions,
            category,
        })
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Option<Question>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(value: JsonValue) -> Result<QuizRequest> {
        serde_json::from_value::<QuizPayload>(value)
            .unwrap()
            .into_request()
    }

    #[test]
    fn missing_fields_mean_all_categories_and_no_history() {
        let req = request(json!({})).unwrap();
        assert!(req.previous_questions.is_empty());
        assert_eq!(req.category, None);
    }

    #[test]
    fn empty_or_null_category_means_all() {
        assert_eq!(request(json!({ "quiz_category": {} })).unwrap().category, None);
        assert_eq!(request(json!({ "quiz_category": null })).unwrap().category, None);
    }

    #[test]
    fn category_id_accepts_number_or_numeric_string() {
        let req = request(json!({
            "previous_questions": [1, 2, 3],
            "quiz_category": { "id": 4, "type": "History" }
        }))
        .unwrap();
        assert_eq!(req.category, Some(4));
        assert_eq!(req.previous_questions, vec![1, 2, 3]);

        let req = request(json!({ "quiz_category": { "id": "2", "type": "Art" } })).unwrap();
        assert_eq!(req.category, Some(2));
    }

    #[test]
    fn non_numeric_category_id_is_bad_request() {
        let err = request(json!({ "quiz_category": { "id": "art" } })).unwrap_err();
        assert!(matches!(err, Error::BadRequest(_)));
    }
}
