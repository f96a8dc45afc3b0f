//! Language-model capability.
//!
//! The classifier asks two questions about a domain: which industries it
//! belongs to and which country it is from. Replies are free text; the
//! classifier extracts known taxonomy terms from them.

mod chat;
mod prompts;

use async_trait::async_trait;

use crate::error_handling::CapabilityError;

pub use chat::ChatModel;
pub use prompts::{ChatMessage, PromptSet, Role};

/// A model that answers classification questions in free text.
///
/// `prompt` is the base domain followed by any gathered context.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// Reply naming the industries the domain belongs to.
    async fn classify(&self, prompt: &str) -> Result<String, CapabilityError>;

    /// Reply naming the country the domain is from.
    async fn geolocate(&self, prompt: &str) -> Result<String, CapabilityError>;
}
