//! Chat service orchestrating the assistant's tool-use loop.
//!
//! This service is stateless: the caller supplies the prior transcript with
//! each request and receives the new assistant turns back. Nothing is
//! persisted and nothing is shared between invocations, so concurrent chats
//! are fully independent.
//!
//! The flow per request:
//! 1. Assemble the gateway (tools + instructions) for the bound identity
//! 2. Convert the transcript to Messages API format
//! 3. Call the model
//! 4. Execute requested tools, feeding results back
//! 5. Loop until the model answers in text

use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use crystal_harmony_core::CustomerId;

use crate::catalog::{CatalogStore, OrderStore};

use super::claude::{ClaudeClient, ClaudeError, ContentBlock, Message, MessageContent, StopReason};
use super::tools::{ToolContext, ToolExecutor};
use super::create_shopping_agent;

/// Maximum number of tool use iterations to prevent infinite loops.
const MAX_TOOL_ITERATIONS: usize = 10;

/// Errors that can occur in the chat service.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    /// Messages API error.
    #[error("assistant API error: {0}")]
    Claude(#[from] ClaudeError),

    /// The transcript ends with an assistant turn or is empty.
    #[error("conversation must end with a user message")]
    NoUserMessage,

    /// Too many tool iterations (possible infinite loop).
    #[error("too many tool iterations")]
    TooManyToolIterations,
}

/// One plain-text turn of the conversation, as carried by the API.
///
/// Tool use and tool results stay internal to the loop; the transcript the
/// rendering layer sees is text only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    /// "user" or "assistant".
    pub role: String,
    /// Turn text.
    pub content: String,
}

impl ChatTurn {
    /// True when this turn was written by the user.
    #[must_use]
    pub fn is_user(&self) -> bool {
        self.role == "user"
    }
}

/// Chat service for one assistant exchange.
pub struct ChatService<'a, C, O> {
    claude: &'a ClaudeClient,
    catalog: &'a C,
    orders: &'a O,
    context: ToolContext,
}

impl<'a, C: CatalogStore, O: OrderStore> ChatService<'a, C, O> {
    /// Create a new chat service.
    #[must_use]
    pub const fn new(
        claude: &'a ClaudeClient,
        catalog: &'a C,
        orders: &'a O,
        context: ToolContext,
    ) -> Self {
        Self {
            claude,
            catalog,
            orders,
            context,
        }
    }

    /// Run one exchange: send the transcript, execute any tool calls, and
    /// return the assistant's new turns.
    ///
    /// # Errors
    ///
    /// Returns an error if the transcript is malformed, the model API
    /// fails, or the tool loop exceeds its iteration budget.
    #[instrument(skip(self, transcript), fields(turns = transcript.len(), authenticated = identity.is_some()))]
    pub async fn respond(
        &self,
        identity: Option<&CustomerId>,
        transcript: &[ChatTurn],
    ) -> Result<Vec<ChatTurn>, ChatError> {
        if !transcript.last().is_some_and(ChatTurn::is_user) {
            return Err(ChatError::NoUserMessage);
        }

        let agent = create_shopping_agent(identity);
        let executor = ToolExecutor::new(
            self.catalog,
            self.orders,
            identity.cloned(),
            self.context.clone(),
        );

        let mut messages = convert_transcript(transcript);
        let mut replies: Vec<ChatTurn> = Vec::new();
        let mut iterations = 0;

        loop {
            iterations += 1;
            if iterations > MAX_TOOL_ITERATIONS {
                warn!("Too many tool iterations, stopping");
                return Err(ChatError::TooManyToolIterations);
            }

            let response = self
                .claude
                .chat(
                    messages.clone(),
                    Some(agent.instructions.clone()),
                    Some(agent.tools.clone()),
                )
                .await?;

            info!(
                stop_reason = ?response.stop_reason,
                content_blocks = response.content.len(),
                "assistant response received"
            );

            let mut has_tool_use = false;
            let mut tool_results: Vec<ContentBlock> = Vec::new();

            for block in &response.content {
                match block {
                    ContentBlock::Text { text } => {
                        replies.push(ChatTurn {
                            role: "assistant".to_string(),
                            content: text.clone(),
                        });
                    }
                    ContentBlock::ToolUse { id, name, input } => {
                        has_tool_use = true;

                        let result = executor.execute(name, input).await;
                        let (content, is_error) = match result {
                            Ok(r) => (r, false),
                            Err(e) => (format!("Error: {e}"), true),
                        };

                        tool_results.push(ContentBlock::ToolResult {
                            tool_use_id: id.clone(),
                            content,
                            is_error: Some(is_error),
                        });
                    }
                    ContentBlock::ToolResult { .. } => {
                        // Should not appear in a model response
                    }
                }
            }

            // If the model wants tool results, add them and continue
            if has_tool_use && response.stop_reason == Some(StopReason::ToolUse) {
                messages.push(Message {
                    role: "assistant".to_string(),
                    content: MessageContent::Blocks(response.content.clone()),
                });
                messages.push(Message {
                    role: "user".to_string(),
                    content: MessageContent::Blocks(tool_results),
                });

                continue;
            }

            // Done - no more tool use
            break;
        }

        Ok(replies)
    }
}

/// Convert the plain-text transcript to Messages API format.
fn convert_transcript(transcript: &[ChatTurn]) -> Vec<Message> {
    transcript
        .iter()
        .map(|turn| {
            if turn.is_user() {
                Message::user(turn.content.clone())
            } else {
                Message::assistant(turn.content.clone())
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_transcript_roles() {
        let transcript = vec![
            ChatTurn {
                role: "user".to_string(),
                content: "Hi".to_string(),
            },
            ChatTurn {
                role: "assistant".to_string(),
                content: "Welcome".to_string(),
            },
        ];
        let messages = convert_transcript(&transcript);
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, "user");
        assert_eq!(messages[1].role, "assistant");
    }

    #[test]
    fn test_chat_turn_is_user() {
        let turn = ChatTurn {
            role: "user".to_string(),
            content: "hello".to_string(),
        };
        assert!(turn.is_user());

        let turn = ChatTurn {
            role: "assistant".to_string(),
            content: "hi".to_string(),
        };
        assert!(!turn.is_user());
    }
}
