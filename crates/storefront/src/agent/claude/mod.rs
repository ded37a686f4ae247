//! Anthropic Messages API integration for the shopping assistant.
//!
//! The assistant runs a tool-use loop: the model picks a tool, the executor
//! runs it against the catalog or order store, and the result goes back into
//! the conversation until the model answers in plain text. Only the
//! non-streaming Messages API surface is used; the loop needs complete
//! responses before it can continue.

mod client;
mod error;
mod types;

pub use client::ClaudeClient;
pub use error::{ApiErrorResponse, ClaudeError};
pub use types::{
    ChatRequest, ChatResponse, ContentBlock, Message, MessageContent, StopReason, Tool, Usage,
};
