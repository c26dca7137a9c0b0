// SPDX-License-Identifier: MIT

//! Task agents
//!
//! Each agent fulfills one career-assistance task via generation and/or
//! search calls. Agents are constructed per request; the fallback latch is
//! instance state and never leaks between unrelated queries.

mod fallback;
mod interview;
mod job;
mod learning;
pub mod prompts;
mod resume;

pub use interview::InterviewAgent;
pub use job::JobSearchAgent;
pub use learning::LearningAgent;
pub use resume::ResumeAgent;

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{CompassError, ModelError};
use crate::model::{Content, GenerationConfig, Model};
use crate::search::SearchProvider;

/// Result of a file-producing task
#[derive(Debug, Clone, Serialize)]
pub struct TaskOutput {
    pub content: String,
    pub file_path: PathBuf,
}

/// One turn in a chat-style interaction (mock interview)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: String,
    pub content: String,
}

impl ChatTurn {
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: "assistant".to_string(),
            content: content.into(),
        }
    }
}

/// Shared plumbing for all task agents: model handle, optional search
/// provider, and the per-instance fallback latch.
pub(crate) struct AgentCore {
    model: Arc<dyn Model>,
    search: Option<Arc<dyn SearchProvider>>,
    fallback: AtomicBool,
}

impl AgentCore {
    pub(crate) fn new(model: Arc<dyn Model>, search: Option<Arc<dyn SearchProvider>>) -> Self {
        Self {
            model,
            search,
            fallback: AtomicBool::new(false),
        }
    }

    /// True once any external call has failed for this instance
    pub(crate) fn latched(&self) -> bool {
        self.fallback.load(Ordering::Relaxed)
    }

    pub(crate) fn latch(&self) {
        self.fallback.store(true, Ordering::Relaxed);
    }

    /// Fetch web search context for a prompt. Absence of a provider is not
    /// an error; a failing provider is.
    pub(crate) async fn search_context(&self, query: &str) -> Result<String, CompassError> {
        match &self.search {
            Some(provider) => provider.search(query).await,
            None => Ok("No web search results available.".to_string()),
        }
    }

    /// Single-prompt generation call
    pub(crate) async fn generate(
        &self,
        prompt: String,
        temperature: Option<f32>,
    ) -> Result<String, ModelError> {
        let config = GenerationConfig {
            temperature,
            max_output_tokens: None,
        };
        self.model
            .generate(&[Content::user(prompt)], Some(&config))
            .await
    }

    /// Generation call over an explicit conversation history
    pub(crate) async fn generate_chat(
        &self,
        history: &[Content],
        temperature: Option<f32>,
    ) -> Result<String, ModelError> {
        let config = GenerationConfig {
            temperature,
            max_output_tokens: None,
        };
        self.model.generate(history, Some(&config)).await
    }
}
