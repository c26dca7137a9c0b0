// SPDX-License-Identifier: MIT

//! Job search agent

use std::sync::Arc;

use super::{fallback, prompts, AgentCore, TaskOutput};
use crate::error::CompassError;
use crate::model::Model;
use crate::search::SearchProvider;
use crate::storage::OutputStore;

pub struct JobSearchAgent {
    core: AgentCore,
    store: OutputStore,
}

impl JobSearchAgent {
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

    /// Search for job listings matching the user's criteria
    pub async fn find_jobs(&self, query: &str) -> Result<TaskOutput, CompassError> {
        let content = if self.core.latched() {
            fallback::job_listings(query)
        } else {
            match self.try_find_jobs(query).await {
                Ok(content) => content,
                Err(e) => {
                    log::warn!("Job search failed, using fallback: {}", e);
                    self.core.latch();
                    fallback::job_listings(query)
                }
            }
        };

        let file_path = self
            .store
            .save(&content, &format!("job_search_{query}"), "md")
            .await?;

        Ok(TaskOutput { content, file_path })
    }

    async fn try_find_jobs(&self, query: &str) -> Result<String, CompassError> {
        let search_results = self
            .core
            .search_context(&format!("job listings {query}"))
            .await?;
        let prompt = prompts::job_search(query, &search_results);
        Ok(self.core.generate(prompt, None).await?)
    }
}
