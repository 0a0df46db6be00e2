//! Keyword-to-response dispatch.
//!
//! The selector is a pure function: it takes the user's text and a
//! pseudo-random source and returns a canned reply. There is no model, no
//! scoring, no retrieval — a prioritized substring rule list chooses among
//! fixed texts, and a handful of rules pick uniformly from small fixed sets.

mod replies;
mod rules;

pub use replies::WELCOME;
pub use rules::{Reply, ReplyKind, select};
