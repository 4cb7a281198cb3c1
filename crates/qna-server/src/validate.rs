//! Request validators
//!
//! Pure functions from raw, untrusted payload fields to normalized
//! domain values. Every string is trimmed; a value that is absent,
//! not a string, or empty after trimming fails the same way. No
//! validator touches the store: a request that fails here never
//! reaches a query.

use serde_json::Value;

use qna_store::{NewQuestion, QuestionPatch, SearchFilter, Vote};

use crate::api::rest::types::{
    AnswerCreatePayload, QuestionCreatePayload, QuestionUpdatePayload, SearchParams, VotePayload,
};
use crate::error::ApiError;

/// Maximum answer length in characters, after trimming
pub const MAX_ANSWER_LEN: usize = 300;

/// Trim a JSON value down to a usable string.
///
/// Returns `None` for non-strings and for strings that are empty
/// after trimming; both are treated as "not supplied".
fn trimmed_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        _ => None,
    }
}

fn required(value: Option<&Value>) -> Result<String, ApiError> {
    value
        .and_then(trimmed_string)
        .ok_or_else(|| ApiError::InvalidInput("Invalid request data.".to_string()))
}

/// Question-Create: title, description, and category are all required
pub fn question_create(payload: &QuestionCreatePayload) -> Result<NewQuestion, ApiError> {
    Ok(NewQuestion {
        title: required(payload.title.as_ref())?,
        description: required(payload.description.as_ref())?,
        category: required(payload.category.as_ref())?,
    })
}

/// Question-Update: optional title and/or description, category forbidden.
///
/// The category is immutable; a request that so much as mentions it is
/// rejected outright rather than silently ignored. At least one of
/// title/description must be supplied. Fields left out become `None`
/// in the patch, which the store reads as "keep the existing value".
pub fn question_update(payload: &QuestionUpdatePayload) -> Result<QuestionPatch, ApiError> {
    if payload.category.is_some() {
        return Err(ApiError::InvalidInput("Invalid request data.".to_string()));
    }

    if payload.title.is_none() && payload.description.is_none() {
        return Err(ApiError::InvalidInput("Invalid request data.".to_string()));
    }

    let title = match payload.title.as_ref() {
        Some(value) => Some(
            trimmed_string(value)
                .ok_or_else(|| ApiError::InvalidInput("Invalid request data.".to_string()))?,
        ),
        None => None,
    };

    let description = match payload.description.as_ref() {
        Some(value) => Some(
            trimmed_string(value)
                .ok_or_else(|| ApiError::InvalidInput("Invalid request data.".to_string()))?,
        ),
        None => None,
    };

    Ok(QuestionPatch { title, description })
}

/// Question-Search: at least one of title/category must be a non-blank
/// string; blank parameters count as absent
pub fn question_search(params: &SearchParams) -> Result<SearchFilter, ApiError> {
    let title = params
        .title
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty());
    let category = params
        .category
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty());

    if title.is_none() && category.is_none() {
        return Err(ApiError::InvalidInput(
            "Invalid search parameters.".to_string(),
        ));
    }

    let mut filter = SearchFilter::new();
    if let Some(title) = title {
        filter = filter.title(title);
    }
    if let Some(category) = category {
        filter = filter.category(category);
    }

    Ok(filter)
}

/// Answer-Create: content required, non-empty, at most 300 characters
/// after trimming
pub fn answer_create(payload: &AnswerCreatePayload) -> Result<String, ApiError> {
    let content = payload
        .content
        .as_ref()
        .and_then(trimmed_string)
        .ok_or_else(|| {
            ApiError::InvalidInput("Answer content must be a non-empty string.".to_string())
        })?;

    if content.chars().count() > MAX_ANSWER_LEN {
        return Err(ApiError::InvalidInput(
            "Answer content must not exceed 300 characters.".to_string(),
        ));
    }

    Ok(content)
}

/// Vote: the body's vote field must be exactly +1 or -1
pub fn vote(payload: &VotePayload) -> Result<Vote, ApiError> {
    payload
        .vote
        .as_ref()
        .and_then(Value::as_i64)
        .and_then(Vote::from_value)
        .ok_or_else(|| ApiError::InvalidInput("Invalid vote value.".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn val(v: serde_json::Value) -> Option<Value> {
        Some(v)
    }

    #[test]
    fn test_question_create_accepts_and_trims() {
        let payload = QuestionCreatePayload {
            title: val(json!("  What is Rust?  ")),
            description: val(json!("Explain ownership")),
            category: val(json!("Programming")),
        };

        let question = question_create(&payload).unwrap();
        assert_eq!(question.title, "What is Rust?");
        assert_eq!(question.description, "Explain ownership");
        assert_eq!(question.category, "Programming");
    }

    #[test]
    fn test_question_create_rejects_missing_field() {
        let payload = QuestionCreatePayload {
            title: val(json!("t")),
            description: None,
            category: val(json!("c")),
        };
        assert!(matches!(
            question_create(&payload),
            Err(ApiError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_question_create_rejects_blank_field() {
        let payload = QuestionCreatePayload {
            title: val(json!("   ")),
            description: val(json!("d")),
            category: val(json!("c")),
        };
        assert!(question_create(&payload).is_err());
    }

    #[test]
    fn test_question_create_rejects_non_string_field() {
        let payload = QuestionCreatePayload {
            title: val(json!(42)),
            description: val(json!("d")),
            category: val(json!("c")),
        };
        assert!(question_create(&payload).is_err());
    }

    #[test]
    fn test_question_update_title_only() {
        let payload = QuestionUpdatePayload {
            title: val(json!(" new title ")),
            description: None,
            category: None,
        };

        let patch = question_update(&payload).unwrap();
        assert_eq!(patch.title.as_deref(), Some("new title"));
        assert!(patch.description.is_none());
    }

    #[test]
    fn test_question_update_rejects_category_regardless_of_value() {
        for category in [json!("Music"), json!(""), json!(null), json!(7)] {
            let payload = QuestionUpdatePayload {
                title: val(json!("fine")),
                description: None,
                category: val(category),
            };
            assert!(
                matches!(question_update(&payload), Err(ApiError::InvalidInput(_))),
                "category presence must be rejected"
            );
        }
    }

    #[test]
    fn test_question_update_rejects_null_fields() {
        // A null field is present but not a string; it must fail like
        // any other non-string, never be folded into "absent".
        let null_title = QuestionUpdatePayload {
            title: val(json!(null)),
            description: val(json!("still fine")),
            category: None,
        };
        assert!(matches!(
            question_update(&null_title),
            Err(ApiError::InvalidInput(_))
        ));

        let null_description = QuestionUpdatePayload {
            title: None,
            description: val(json!(null)),
            category: None,
        };
        assert!(question_update(&null_description).is_err());
    }

    #[test]
    fn test_question_update_rejects_both_absent() {
        let payload = QuestionUpdatePayload {
            title: None,
            description: None,
            category: None,
        };
        assert!(question_update(&payload).is_err());
    }

    #[test]
    fn test_question_update_rejects_blank_present_field() {
        let payload = QuestionUpdatePayload {
            title: val(json!("")),
            description: None,
            category: None,
        };
        assert!(question_update(&payload).is_err());
    }

    #[test]
    fn test_search_requires_at_least_one_param() {
        let params = SearchParams {
            title: None,
            category: None,
        };
        assert!(question_search(&params).is_err());

        let blank = SearchParams {
            title: Some("   ".to_string()),
            category: None,
        };
        assert!(question_search(&blank).is_err());
    }

    #[test]
    fn test_search_builds_filter_in_order() {
        let params = SearchParams {
            title: Some(" Java ".to_string()),
            category: Some("Art".to_string()),
        };
        let filter = question_search(&params).unwrap();
        let (predicate, values) = filter.predicate_sql(1);
        assert_eq!(predicate, "title ILIKE $1 OR category ILIKE $2");
        assert_eq!(values, vec!["%Java%".to_string(), "%Art%".to_string()]);
    }

    #[test]
    fn test_answer_create_trims_and_accepts() {
        let payload = AnswerCreatePayload {
            content: val(json!("  a perfectly fine answer  ")),
        };
        assert_eq!(answer_create(&payload).unwrap(), "a perfectly fine answer");
    }

    #[test]
    fn test_answer_create_length_boundary() {
        let exactly = AnswerCreatePayload {
            content: val(json!("x".repeat(300))),
        };
        assert_eq!(answer_create(&exactly).unwrap().chars().count(), 300);

        let over = AnswerCreatePayload {
            content: val(json!("x".repeat(301))),
        };
        assert!(matches!(
            answer_create(&over),
            Err(ApiError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_answer_create_length_checked_after_trim() {
        // 300 content characters padded with whitespace still passes.
        let padded = AnswerCreatePayload {
            content: val(json!(format!("  {}  ", "x".repeat(300)))),
        };
        assert!(answer_create(&padded).is_ok());
    }

    #[test]
    fn test_answer_create_rejects_blank_and_missing() {
        assert!(answer_create(&AnswerCreatePayload { content: None }).is_err());
        assert!(answer_create(&AnswerCreatePayload {
            content: val(json!("   "))
        })
        .is_err());
        assert!(answer_create(&AnswerCreatePayload {
            content: val(json!(123))
        })
        .is_err());
    }

    #[test]
    fn test_vote_accepts_only_signed_units() {
        let up = VotePayload { vote: val(json!(1)) };
        assert_eq!(vote(&up).unwrap(), Vote::Up);

        let down = VotePayload { vote: val(json!(-1)) };
        assert_eq!(vote(&down).unwrap(), Vote::Down);
    }

    #[test]
    fn test_vote_rejects_everything_else() {
        for bad in [json!(0), json!(2), json!(-2), json!("1"), json!(null), json!(1.5)] {
            let payload = VotePayload { vote: val(bad) };
            assert!(matches!(vote(&payload), Err(ApiError::InvalidInput(_))));
        }

        let missing = VotePayload { vote: None };
        assert!(vote(&missing).is_err());
    }
}
