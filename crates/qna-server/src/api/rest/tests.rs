//! Tests for REST API components

#![cfg(test)]

use super::types::*;
use serde_json::json;

#[test]
fn test_message_response_shape() {
    let response = MessageResponse::new("Question updated successfully.");
    let value = serde_json::to_value(&response).unwrap();
    assert_eq!(value, json!({"message": "Question updated successfully."}));
}

#[test]
fn test_created_response_shape() {
    let response = CreatedResponse {
        message: "Question created successfully.".to_string(),
        id: 12,
    };
    let value = serde_json::to_value(&response).unwrap();
    assert_eq!(
        value,
        json!({"message": "Question created successfully.", "id": 12})
    );
}

#[test]
fn test_data_response_wraps_payload() {
    let response = DataResponse { data: vec![1, 2, 3] };
    let value = serde_json::to_value(&response).unwrap();
    assert_eq!(value, json!({"data": [1, 2, 3]}));
}

#[test]
fn test_update_payload_keeps_explicit_null_category() {
    // {"category": null} must remain observable so the validator can
    // reject the attempt to touch the category.
    let payload: QuestionUpdatePayload =
        serde_json::from_value(json!({"title": "t", "category": null})).unwrap();
    assert!(payload.category.is_some());
}

#[test]
fn test_update_payload_keeps_explicit_null_title_and_description() {
    // {"title": null} is a present field; the validator must get to
    // see it and reject it rather than serde collapsing it to None.
    let payload: QuestionUpdatePayload =
        serde_json::from_value(json!({"title": null, "description": null})).unwrap();
    assert_eq!(payload.title, Some(json!(null)));
    assert_eq!(payload.description, Some(json!(null)));
}

#[test]
fn test_answer_item_drops_question_id() {
    let item = AnswerItem::from(qna_store::Answer {
        id: 3,
        question_id: 9,
        content: "listed".to_string(),
    });
    let value = serde_json::to_value(&item).unwrap();
    assert_eq!(value, json!({"id": 3, "content": "listed"}));
}

#[test]
fn test_update_payload_absent_category_is_none() {
    let payload: QuestionUpdatePayload = serde_json::from_value(json!({"title": "t"})).unwrap();
    assert!(payload.category.is_none());
}

#[test]
fn test_create_payload_tolerates_any_field_types() {
    // Type enforcement belongs to the validator, not deserialization.
    let payload: QuestionCreatePayload =
        serde_json::from_value(json!({"title": 42, "description": true})).unwrap();
    assert!(payload.title.is_some());
    assert!(payload.description.is_some());
    assert!(payload.category.is_none());
}

#[test]
fn test_vote_payload_decodes_numbers_verbatim() {
    let payload: VotePayload = serde_json::from_value(json!({"vote": -1})).unwrap();
    assert_eq!(payload.vote, Some(json!(-1)));
}

#[test]
fn test_search_params_from_query_shape() {
    let params: SearchParams =
        serde_json::from_value(json!({"title": "java"})).unwrap();
    assert_eq!(params.title.as_deref(), Some("java"));
    assert!(params.category.is_none());
}
