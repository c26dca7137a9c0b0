// SPDX-License-Identifier: MIT

//! Workflow state - the single mutable record threaded through the graph

/// Per-invocation workflow state.
///
/// `query` is immutable once set. `category` holds whatever raw text the
/// last classifier node produced; it is overwritten, not merged. `response`
/// is set exactly once, by exactly one terminal handler.
#[derive(Debug, Clone)]
pub struct WorkflowState {
    query: String,
    category: Option<String>,
    response: Option<String>,
}

impl WorkflowState {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            category: None,
            response: None,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Raw classifier output, or "" before the categorize node has run
    pub fn category(&self) -> &str {
        self.category.as_deref().unwrap_or("")
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = Some(category.into());
    }

    pub fn response(&self) -> Option<&str> {
        self.response.as_deref()
    }

    pub fn set_response(&mut self, response: impl Into<String>) {
        debug_assert!(self.response.is_none(), "response set more than once");
        self.response = Some(response.into());
    }
}
