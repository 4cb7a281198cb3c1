//! Q&A Service HTTP Server Library
//!
//! Request validation, existence guards, and REST handlers for the
//! question/answer/vote/score API.

pub mod api;
pub mod config;
pub mod error;
pub mod guard;
pub mod validate;
