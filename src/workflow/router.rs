// SPDX-License-Identifier: MIT

//! Pure routing functions over raw classifier output
//!
//! Classifier output is free text; it may carry more than the bare label, so
//! every check tests for presence of the marker anywhere in the string. That
//! makes routing robust to minor verbosity but fragile to a reply that
//! happens to contain an unrelated matching substring. This is a known,
//! deliberate property of the classification contract.

/// Nodes of the workflow graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeId {
    Categorize,
    HandleLearningResource,
    HandleInterviewPreparation,
    HandleResumeMaking,
    JobSearch,
    MockInterview,
    InterviewTopicsQuestions,
    TutorialAgent,
    AskQueryBot,
}

/// Top-level query category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Learning,
    Resume,
    Interview,
    JobSearch,
    Unrecognized,
}

impl Category {
    /// Parse raw classifier text by ordered digit-marker containment
    pub fn parse(raw: &str) -> Self {
        if raw.contains('1') {
            Category::Learning
        } else if raw.contains('2') {
            Category::Resume
        } else if raw.contains('3') {
            Category::Interview
        } else if raw.contains('4') {
            Category::JobSearch
        } else {
            Category::Unrecognized
        }
    }
}

/// Learning-branch path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LearningPath {
    Question,
    Tutorial,
    Unrecognized,
}

impl LearningPath {
    pub fn parse(raw: &str) -> Self {
        let lower = raw.to_lowercase();
        if lower.contains("question") {
            LearningPath::Question
        } else if lower.contains("tutorial") {
            LearningPath::Tutorial
        } else {
            LearningPath::Unrecognized
        }
    }
}

/// Interview-branch path. There is no unrecognized case: anything that is
/// not a question request is treated as a mock-interview request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterviewPath {
    Question,
    Mock,
}

impl InterviewPath {
    pub fn parse(raw: &str) -> Self {
        let lower = raw.to_lowercase();
        if lower.contains("question") {
            InterviewPath::Question
        } else {
            InterviewPath::Mock
        }
    }
}

/// Route from the top-level categorize node. Returns None when the category
/// text matches none of the known markers (no handler runs).
pub fn route_query(category: &str) -> Option<NodeId> {
    match Category::parse(category) {
        Category::Learning => Some(NodeId::HandleLearningResource),
        Category::Resume => Some(NodeId::HandleResumeMaking),
        Category::Interview => Some(NodeId::HandleInterviewPreparation),
        Category::JobSearch => Some(NodeId::JobSearch),
        Category::Unrecognized => None,
    }
}

/// Route from the interview disambiguator. Total: ambiguity defaults to the
/// mock interview.
pub fn route_interview(category: &str) -> NodeId {
    match InterviewPath::parse(category) {
        InterviewPath::Question => NodeId::InterviewTopicsQuestions,
        InterviewPath::Mock => NodeId::MockInterview,
    }
}

/// Route from the learning disambiguator
pub fn route_learning(category: &str) -> Option<NodeId> {
    match LearningPath::parse(category) {
        LearningPath::Question => Some(NodeId::AskQueryBot),
        LearningPath::Tutorial => Some(NodeId::TutorialAgent),
        LearningPath::Unrecognized => None,
    }
}
