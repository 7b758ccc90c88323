//! namematch-core — Round selection, answer scoring, and statistics.
//!
//! This crate holds the quiz engine that both the command-line game and the
//! request/response web flow drive: the roster, round building, answer
//! evaluation, and the persisted accuracy statistics.

pub mod config;
pub mod engine;
pub mod error;
pub mod evaluator;
pub mod model;
pub mod selector;
pub mod session;
pub mod shared;
pub mod statistics;
pub mod storage;
pub mod store;
pub mod traits;

pub use engine::QuizEngine;
pub use error::{QuizError, Result};
pub use traits::QuizRepository;
