// SPDX-License-Identifier: MIT

//! Interview preparation agent - question lists and mock interviews
//!
//! The mock interview is chat-style: it returns content with an assistant
//! role instead of persisting a file, and it accepts prior turns so the
//! interview can continue across requests.

use std::sync::Arc;

use super::{fallback, prompts, AgentCore, ChatTurn, TaskOutput};
use crate::error::CompassError;
use crate::model::{Content, Model};
use crate::search::SearchProvider;
use crate::storage::OutputStore;

/// Interviews run a little warmer than classification
const INTERVIEW_TEMPERATURE: f32 = 0.7;

pub struct InterviewAgent {
    core: AgentCore,
    store: OutputStore,
}

impl InterviewAgent {
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

    /// Generate a structured list of interview questions
    pub async fn generate_questions(&self, query: &str) -> Result<TaskOutput, CompassError> {
        let content = if self.core.latched() {
            fallback::interview_questions(query)
        } else {
            match self.try_generate_questions(query).await {
                Ok(content) => content,
                Err(e) => {
                    log::warn!("Interview question generation failed, using fallback: {}", e);
                    self.core.latch();
                    fallback::interview_questions(query)
                }
            }
        };

        let file_path = self
            .store
            .save(&content, &format!("interview_questions_{query}"), "md")
            .await?;

        Ok(TaskOutput { content, file_path })
    }

    /// Run one turn of a mock interview. Pass prior turns to continue a
    /// session; an empty history starts a new one.
    pub async fn conduct_mock_interview(
        &self,
        query: &str,
        chat_history: &[ChatTurn],
    ) -> Result<ChatTurn, CompassError> {
        if self.core.latched() {
            return Ok(ChatTurn::assistant(fallback::interviewer_reply()));
        }

        let result = if chat_history.is_empty() {
            self.core
                .generate(
                    prompts::mock_interview_open(query),
                    Some(INTERVIEW_TEMPERATURE),
                )
                .await
        } else {
            let formatted = format_history(chat_history);
            self.core
                .generate_chat(
                    &[Content::user(prompts::mock_interview_continue(
                        query, &formatted,
                    ))],
                    Some(INTERVIEW_TEMPERATURE),
                )
                .await
        };

        match result {
            Ok(content) => Ok(ChatTurn::assistant(content)),
            Err(e) => {
                log::warn!("Mock interview turn failed, using fallback: {}", e);
                self.core.latch();
                Ok(ChatTurn::assistant(fallback::interviewer_reply()))
            }
        }
    }

    async fn try_generate_questions(&self, query: &str) -> Result<String, CompassError> {
        let search_results = self
            .core
            .search_context(&format!("interview questions {query}"))
            .await?;
        let prompt = prompts::interview_questions(query, &search_results);
        Ok(self
            .core
            .generate(prompt, Some(INTERVIEW_TEMPERATURE))
            .await?)
    }
}

/// Render prior turns the way the interviewer prompt expects them
fn format_history(history: &[ChatTurn]) -> String {
    history
        .iter()
        .map(|turn| {
            let speaker = if turn.role == "assistant" {
                "Interviewer"
            } else {
                "Candidate"
            };
            format!("{}: {}", speaker, turn.content)
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_history_maps_roles() {
        let history = vec![
            ChatTurn {
                role: "assistant".to_string(),
                content: "Tell me about yourself.".to_string(),
            },
            ChatTurn {
                role: "user".to_string(),
                content: "I build ML systems.".to_string(),
            },
        ];

        let formatted = format_history(&history);
        assert!(formatted.starts_with("Interviewer: Tell me about yourself."));
        assert!(formatted.contains("Candidate: I build ML systems."));
    }

    #[test]
    fn test_format_empty_history() {
        assert_eq!(format_history(&[]), "");
    }
}
