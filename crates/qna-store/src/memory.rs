//! In-memory store implementation
//!
//! Keeps every table in process memory behind a single `RwLock`. Used
//! as the injected test double for the HTTP layer and for running the
//! service without a database. Behavior mirrors the PostgreSQL
//! implementation, including the lack of cascade on question delete
//! and the constraint failure when an answer references a missing
//! question.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{StoreError, StoreResult};
use crate::models::{Answer, NewQuestion, Question, QuestionPatch, ScoreSummary, Vote};
use crate::search::SearchFilter;
use crate::traits::QnaStore;

#[derive(Debug, Default)]
struct Tables {
    questions: BTreeMap<i64, Question>,
    answers: BTreeMap<i64, Answer>,
    question_votes: Vec<(i64, i16)>,
    answer_votes: Vec<(i64, i16)>,
    next_question_id: i64,
    next_answer_id: i64,
}

/// In-memory implementation of [`QnaStore`]
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl QnaStore for MemoryStore {
    async fn insert_question(&self, question: NewQuestion) -> StoreResult<i64> {
        let mut tables = self.tables.write().await;
        tables.next_question_id += 1;
        let id = tables.next_question_id;
        tables.questions.insert(
            id,
            Question {
                id,
                title: question.title,
                description: question.description,
                category: question.category,
            },
        );
        Ok(id)
    }

    async fn list_questions(&self) -> StoreResult<Vec<Question>> {
        let tables = self.tables.read().await;
        Ok(tables.questions.values().cloned().collect())
    }

    async fn get_question(&self, id: i64) -> StoreResult<Option<Question>> {
        let tables = self.tables.read().await;
        Ok(tables.questions.get(&id).cloned())
    }

    async fn search_questions(&self, filter: &SearchFilter) -> StoreResult<Vec<Question>> {
        let tables = self.tables.read().await;
        // BTreeMap iterates ascending; reverse for newest-first.
        Ok(tables
            .questions
            .values()
            .rev()
            .filter(|question| filter.matches(question))
            .cloned()
            .collect())
    }

    async fn update_question(&self, id: i64, patch: QuestionPatch) -> StoreResult<u64> {
        let mut tables = self.tables.write().await;
        match tables.questions.get_mut(&id) {
            Some(question) => {
                if let Some(title) = patch.title {
                    question.title = title;
                }
                if let Some(description) = patch.description {
                    question.description = description;
                }
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_question(&self, id: i64) -> StoreResult<u64> {
        let mut tables = self.tables.write().await;
        // No cascade: answers and ledger entries stay behind.
        Ok(u64::from(tables.questions.remove(&id).is_some()))
    }

    async fn question_exists(&self, id: i64) -> StoreResult<bool> {
        let tables = self.tables.read().await;
        Ok(tables.questions.contains_key(&id))
    }

    async fn insert_answer(&self, question_id: i64, content: String) -> StoreResult<i64> {
        let mut tables = self.tables.write().await;
        if !tables.questions.contains_key(&question_id) {
            return Err(StoreError::Constraint(format!(
                "answers.question_id references missing question {}",
                question_id
            )));
        }
        tables.next_answer_id += 1;
        let id = tables.next_answer_id;
        tables.answers.insert(
            id,
            Answer {
                id,
                question_id,
                content,
            },
        );
        Ok(id)
    }

    async fn list_answers(&self, question_id: i64) -> StoreResult<Vec<Answer>> {
        let tables = self.tables.read().await;
        Ok(tables
            .answers
            .values()
            .filter(|answer| answer.question_id == question_id)
            .cloned()
            .collect())
    }

    async fn delete_answers(&self, question_id: i64) -> StoreResult<u64> {
        let mut tables = self.tables.write().await;
        let before = tables.answers.len();
        tables
            .answers
            .retain(|_, answer| answer.question_id != question_id);
        Ok((before - tables.answers.len()) as u64)
    }

    async fn answer_exists(&self, id: i64) -> StoreResult<bool> {
        let tables = self.tables.read().await;
        Ok(tables.answers.contains_key(&id))
    }

    async fn insert_question_vote(&self, question_id: i64, vote: Vote) -> StoreResult<()> {
        let mut tables = self.tables.write().await;
        tables.question_votes.push((question_id, vote.value()));
        Ok(())
    }

    async fn insert_answer_vote(&self, answer_id: i64, vote: Vote) -> StoreResult<()> {
        let mut tables = self.tables.write().await;
        tables.answer_votes.push((answer_id, vote.value()));
        Ok(())
    }

    async fn question_score(&self, question_id: i64) -> StoreResult<ScoreSummary> {
        let tables = self.tables.read().await;
        Ok(ScoreSummary::tally(
            tables
                .question_votes
                .iter()
                .filter(|(target, _)| *target == question_id)
                .map(|(_, value)| *value),
        ))
    }

    async fn answer_score(&self, answer_id: i64) -> StoreResult<ScoreSummary> {
        let tables = self.tables.read().await;
        Ok(ScoreSummary::tally(
            tables
                .answer_votes
                .iter()
                .filter(|(target, _)| *target == answer_id)
                .map(|(_, value)| *value),
        ))
    }
}
