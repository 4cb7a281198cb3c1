//! Core trait definition for the store capability
//!
//! Handlers and guards are written against [`QnaStore`] rather than a
//! concrete connection pool, so the HTTP layer can be exercised with
//! [`crate::MemoryStore`] in tests and run against
//! `PostgresStore` in production.
//!
//! # Examples
//!
//! ```
//! use qna_store::{MemoryStore, NewQuestion, QnaStore};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), qna_store::StoreError> {
//! let store = MemoryStore::new();
//! let id = store
//!     .insert_question(NewQuestion {
//!         title: "What is Rust?".to_string(),
//!         description: "Explain the borrow checker".to_string(),
//!         category: "Programming".to_string(),
//!     })
//!     .await?;
//! assert!(store.question_exists(id).await?);
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;

use crate::models::{Answer, NewQuestion, Question, QuestionPatch, ScoreSummary, Vote};
use crate::search::SearchFilter;
use crate::StoreResult;

/// Store operations required by the Q&A service
///
/// Mutations report affected-row counts instead of failing on absent
/// rows; callers map a zero count to their own not-found handling.
/// Vote ledgers are append-only: there is no update or single-entry
/// delete for votes.
#[async_trait]
pub trait QnaStore: Send + Sync {
    /// Insert a question, returning the generated id
    async fn insert_question(&self, question: NewQuestion) -> StoreResult<i64>;

    /// All questions, in no guaranteed order
    async fn list_questions(&self) -> StoreResult<Vec<Question>>;

    /// A single question by id, `None` if absent
    async fn get_question(&self, id: i64) -> StoreResult<Option<Question>>;

    /// Questions matching the filter, newest (highest id) first
    async fn search_questions(&self, filter: &SearchFilter) -> StoreResult<Vec<Question>>;

    /// Apply a partial update; returns the number of rows affected
    async fn update_question(&self, id: i64, patch: QuestionPatch) -> StoreResult<u64>;

    /// Delete a question by id; returns the number of rows affected.
    ///
    /// Does not cascade: the question's answers and votes stay in
    /// their tables.
    async fn delete_question(&self, id: i64) -> StoreResult<u64>;

    /// Whether a question with this id exists
    async fn question_exists(&self, id: i64) -> StoreResult<bool>;

    /// Insert an answer under a question, returning the generated id.
    ///
    /// No parent pre-check is performed here; a dangling question id
    /// surfaces as a constraint failure from the store.
    async fn insert_answer(&self, question_id: i64, content: String) -> StoreResult<i64>;

    /// Answers for a question, ordered by ascending id
    async fn list_answers(&self, question_id: i64) -> StoreResult<Vec<Answer>>;

    /// Delete every answer for a question; returns how many went away
    async fn delete_answers(&self, question_id: i64) -> StoreResult<u64>;

    /// Whether an answer with this id exists
    async fn answer_exists(&self, id: i64) -> StoreResult<bool>;

    /// Append one entry to a question's vote ledger
    async fn insert_question_vote(&self, question_id: i64, vote: Vote) -> StoreResult<()>;

    /// Append one entry to an answer's vote ledger
    async fn insert_answer_vote(&self, answer_id: i64, vote: Vote) -> StoreResult<()>;

    /// Reduce a question's vote ledger into a score summary
    async fn question_score(&self, question_id: i64) -> StoreResult<ScoreSummary>;

    /// Reduce an answer's vote ledger into a score summary
    async fn answer_score(&self, answer_id: i64) -> StoreResult<ScoreSummary>;
}
