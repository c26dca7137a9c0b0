// SPDX-License-Identifier: MIT

//! Learning resource agent - tutorials and Q&A about generative AI

use std::sync::Arc;

use super::{fallback, prompts, AgentCore, TaskOutput};
use crate::error::CompassError;
use crate::model::Model;
use crate::search::SearchProvider;
use crate::storage::OutputStore;

pub struct LearningAgent {
    core: AgentCore,
    store: OutputStore,
}

impl LearningAgent {
    pub fn new(
        model: Arc<dyn Model>,
        search: Option<Arc<dyn SearchProvider>>,
        store: OutputStore,
    ) -> Self {
        Self {
            core: AgentCore::new(model, search),
            store,
        }
    }

    /// Put this instance into fallback mode (canned responses only)
    pub fn force_fallback(&self) {
        self.core.latch();
    }

    /// Create a tutorial based on the user's query
    pub async fn create_tutorial(&self, query: &str) -> Result<TaskOutput, CompassError> {
        let content = if self.core.latched() {
            fallback::learning_overview(query)
        } else {
            match self.try_generate(&format!("tutorial {query}"), query, true).await {
                Ok(content) => content,
                Err(e) => {
                    log::warn!("Tutorial generation failed, using fallback: {}", e);
                    self.core.latch();
                    fallback::learning_overview(query)
                }
            }
        };

        let file_path = self
            .store
            .save(&content, &format!("tutorial_{query}"), "md")
            .await?;

        Ok(TaskOutput { content, file_path })
    }

    /// Answer a question about generative AI
    pub async fn answer_query(&self, query: &str) -> Result<TaskOutput, CompassError> {
        let content = if self.core.latched() {
            fallback::learning_overview(query)
        } else {
            match self.try_generate(query, query, false).await {
                Ok(content) => content,
                Err(e) => {
                    log::warn!("Query answering failed, using fallback: {}", e);
                    self.core.latch();
                    fallback::learning_overview(query)
                }
            }
        };

        let file_path = self
            .store
            .save(&content, &format!("answer_{query}"), "md")
            .await?;

        Ok(TaskOutput { content, file_path })
    }

    async fn try_generate(
        &self,
        search_query: &str,
        query: &str,
        tutorial: bool,
    ) -> Result<String, CompassError> {
        let search_results = self.core.search_context(search_query).await?;
        let prompt = if tutorial {
            prompts::tutorial(query, &search_results)
        } else {
            prompts::answer_query(query, &search_results)
        };
        Ok(self.core.generate(prompt, None).await?)
    }
}
