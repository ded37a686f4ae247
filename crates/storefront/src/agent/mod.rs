//! The conversational shopping assistant.
//!
//! # Architecture
//!
//! - [`claude`] - Messages API client and wire types
//! - [`instructions`] - immutable instruction documents
//! - [`tools`] - tool definitions and the bound executor
//! - [`service`] - the stateless tool-use chat loop
//!
//! The gateway ([`create_shopping_agent`]) is a pure configuration step: it
//! assembles the toolset and instruction document for one session from the
//! optional customer identity. No network or store access happens here.

pub mod claude;
pub mod instructions;
pub mod service;
pub mod tools;

pub use claude::{ClaudeClient, ClaudeError};
pub use service::{ChatError, ChatService, ChatTurn};
pub use tools::{ToolContext, ToolExecutor};

use crystal_harmony_core::CustomerId;

use claude::Tool;
use instructions::assemble_instructions;
use tools::toolset_for;

/// One session's assistant configuration: the callable tools and the
/// instruction document that steers them.
#[derive(Debug, Clone)]
pub struct ShoppingAgent {
    /// Tools offered to the model.
    pub tools: Vec<Tool>,
    /// Assembled instruction document.
    pub instructions: String,
}

/// Assemble the assistant configuration for an optional customer identity.
///
/// With no identity the toolset holds only the search tool and the
/// instructions explain the sign-in requirement; with an identity the order
/// tool joins the set and the instructions cover order lookups instead.
#[must_use]
pub fn create_shopping_agent(identity: Option<&CustomerId>) -> ShoppingAgent {
    let authenticated = identity.is_some();
    ShoppingAgent {
        tools: toolset_for(authenticated),
        instructions: assemble_instructions(authenticated),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anonymous_agent_has_search_only() {
        let agent = create_shopping_agent(None);
        let names: Vec<&str> = agent.tools.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["searchProducts"]);
        assert!(agent.instructions.contains("Sign-in Required"));
    }

    #[test]
    fn test_authenticated_agent_has_both_tools() {
        let customer = CustomerId::new("customer-1");
        let agent = create_shopping_agent(Some(&customer));
        let names: Vec<&str> = agent.tools.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["searchProducts", "getMyOrders"]);
        assert!(agent.instructions.contains("getMyOrders Tool Usage"));
    }
}
