//! Data-consistency layer for the Q&A service
//!
//! This crate defines the domain models, the [`QnaStore`] capability
//! trait that handlers are written against, and two implementations:
//!
//! - [`PostgresStore`]: backed by a bounded `sqlx` connection pool
//!   (requires the `postgres` feature)
//! - [`MemoryStore`]: in-process tables, used as a test double and for
//!   local experimentation
//!
//! Reads and writes go through parameterized statements only. Vote
//! ledgers are append-only; scores are reduced from the ledger on
//! every request (see [`ScoreSummary::tally`]).
//!
//! The table layout expected by the PostgreSQL implementation is
//! documented in `schema.sql` at the crate root.

pub mod error;
pub mod memory;
pub mod models;
pub mod search;
pub mod traits;

#[cfg(feature = "postgres")]
pub mod postgres;

pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use models::{Answer, NewQuestion, Question, QuestionPatch, ScoreSummary, Vote};
pub use search::{SearchField, SearchFilter};
pub use traits::QnaStore;

#[cfg(feature = "postgres")]
pub use postgres::PostgresStore;
