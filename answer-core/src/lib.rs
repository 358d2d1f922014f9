//! # answer-core
//!
//! Core types and traits for the answer bot: [`Update`], [`Answer`], the [`Normalizer`] / [`Solver`] /
//! [`Replier`] capabilities, reply markup rendering, and tracing initialization. Transport-agnostic; used by
//! answer-pipeline, answer-solvers and answer-telegram.

pub mod error;
pub mod logger;
pub mod markup;
pub mod reply;
pub mod solve;
pub mod types;

pub use error::{AnswerError, Result};
pub use logger::init_tracing;
pub use markup::Markup;
pub use reply::{OutboundReply, Replier};
pub use solve::{IdentityNormalizer, Normalizer, Solver};
pub use types::{Answer, Button, ButtonAction, ConversationId, Keyboard, LinkPreview, Update};
