// SPDX-License-Identifier: MIT

//! Prompt-based query classifiers
//!
//! Three classification calls: a top-level 4-way categorization and two
//! binary disambiguators. Each is a single generation call with a fixed
//! few-shot template; no retries, no output validation. The router
//! downstream interprets the free-text output.
//!
//! Generation failures are absorbed here with a canned category token so the
//! workflow still completes; the latch is per instance, and an instance
//! lives for one workflow run.

use std::sync::Arc;

use crate::agents::prompts;
use crate::model::{Content, GenerationConfig, Model};

/// Classification runs cooler than content generation
const CLASSIFY_TEMPERATURE: f32 = 0.5;

/// Canned category tokens used when the generation call fails
const FALLBACK_TOP_LEVEL: &str = "1";
const FALLBACK_LEARNING: &str = "Question";
const FALLBACK_INTERVIEW: &str = "Mock";

pub struct QueryClassifier {
    model: Arc<dyn Model>,
    fallback: std::sync::atomic::AtomicBool,
}

impl QueryClassifier {
    pub fn new(model: Arc<dyn Model>) -> Self {
        Self {
            model,
            fallback: std::sync::atomic::AtomicBool::new(false),
        }
    }

    /// Put this instance into fallback mode (canned categories only)
    pub fn force_fallback(&self) {
        self.fallback
            .store(true, std::sync::atomic::Ordering::Relaxed);
    }

    fn latched(&self) -> bool {
        self.fallback.load(std::sync::atomic::Ordering::Relaxed)
    }

    /// Top-level categorization: output is expected to contain one of the
    /// digits 1-4
    pub async fn categorize(&self, query: &str) -> String {
        self.classify(prompts::categorize(query), FALLBACK_TOP_LEVEL)
            .await
    }

    /// Learning disambiguation: Tutorial vs Question
    pub async fn classify_learning(&self, query: &str) -> String {
        self.classify(prompts::classify_learning(query), FALLBACK_LEARNING)
            .await
    }

    /// Interview disambiguation: Mock vs Question
    pub async fn classify_interview(&self, query: &str) -> String {
        self.classify(prompts::classify_interview(query), FALLBACK_INTERVIEW)
            .await
    }

    async fn classify(&self, prompt: String, fallback_token: &str) -> String {
        if self.latched() {
            return fallback_token.to_string();
        }

        let config = GenerationConfig {
            temperature: Some(CLASSIFY_TEMPERATURE),
            max_output_tokens: None,
        };

        match self
            .model
            .generate(&[Content::user(prompt)], Some(&config))
            .await
        {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("Classifier call failed, using canned category: {}", e);
                self.force_fallback();
                fallback_token.to_string()
            }
        }
    }
}
