// SPDX-License-Identifier: MIT

//! Resume drafting agent

use std::sync::Arc;

use super::{fallback, prompts, AgentCore, TaskOutput};
use crate::error::CompassError;
use crate::model::Model;
use crate::search::SearchProvider;
use crate::storage::OutputStore;

pub struct ResumeAgent {
    core: AgentCore,
    store: OutputStore,
}

impl ResumeAgent {
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

    /// Draft a customized resume for a tech role in AI / Generative AI
    pub async fn create_resume(&self, query: &str) -> Result<TaskOutput, CompassError> {
        let content = if self.core.latched() {
            fallback::resume_template(query)
        } else {
            match self.try_create_resume(query).await {
                Ok(content) => content,
                Err(e) => {
                    log::warn!("Resume generation failed, using fallback: {}", e);
                    self.core.latch();
                    fallback::resume_template(query)
                }
            }
        };

        let file_path = self
            .store
            .save(&content, &format!("resume_{query}"), "md")
            .await?;

        Ok(TaskOutput { content, file_path })
    }

    async fn try_create_resume(&self, query: &str) -> Result<String, CompassError> {
        let search_results = self
            .core
            .search_context(&format!("resume expectations {query}"))
            .await?;
        let prompt = prompts::resume(query, &search_results);
        Ok(self.core.generate(prompt, None).await?)
    }
}
