// SPDX-License-Identifier: MIT

//! Graph definition and executor
//!
//! The graph is data: a table of `{node, transition}` rows consumed by a
//! generic step loop. Classifier nodes write `category`, terminal nodes
//! write `response` and transition to End. This keeps the state machine
//! testable without executing any agent.

use std::sync::Arc;

use serde::Serialize;

use super::classifier::QueryClassifier;
use super::router::{route_interview, route_learning, route_query, NodeId};
use super::state::WorkflowState;
use crate::agents::{InterviewAgent, JobSearchAgent, LearningAgent, ResumeAgent};
use crate::config::Settings;
use crate::error::{CompassError, WorkflowError};
use crate::model::gemini::GeminiModel;
use crate::model::Model;
use crate::search::{BraveSearch, SearchProvider};
use crate::storage::OutputStore;

/// The graph is a two-level tree; anything deeper means the table is broken
const MAX_STEPS: u32 = 8;

/// Where control goes after a node completes
#[derive(Clone, Copy)]
pub enum Transition {
    /// Pick the next node from the current category text; None is a
    /// no-route condition
    Branch(fn(&str) -> Option<NodeId>),
    /// Terminal node
    End,
}

/// One row of the workflow graph
pub struct NodeSpec {
    pub id: NodeId,
    pub transition: Transition,
}

fn route_interview_edge(category: &str) -> Option<NodeId> {
    Some(route_interview(category))
}

/// The complete transition table. Entry node is `Categorize`.
pub const TRANSITIONS: &[NodeSpec] = &[
    NodeSpec {
        id: NodeId::Categorize,
        transition: Transition::Branch(route_query),
    },
    NodeSpec {
        id: NodeId::HandleLearningResource,
        transition: Transition::Branch(route_learning),
    },
    NodeSpec {
        id: NodeId::HandleInterviewPreparation,
        transition: Transition::Branch(route_interview_edge),
    },
    NodeSpec {
        id: NodeId::HandleResumeMaking,
        transition: Transition::End,
    },
    NodeSpec {
        id: NodeId::JobSearch,
        transition: Transition::End,
    },
    NodeSpec {
        id: NodeId::MockInterview,
        transition: Transition::End,
    },
    NodeSpec {
        id: NodeId::InterviewTopicsQuestions,
        transition: Transition::End,
    },
    NodeSpec {
        id: NodeId::TutorialAgent,
        transition: Transition::End,
    },
    NodeSpec {
        id: NodeId::AskQueryBot,
        transition: Transition::End,
    },
];

fn transition_for(id: NodeId) -> Option<&'static Transition> {
    TRANSITIONS
        .iter()
        .find(|spec| spec.id == id)
        .map(|spec| &spec.transition)
}

/// Final result of a workflow run
#[derive(Debug, Clone, Serialize)]
pub struct WorkflowOutcome {
    pub category: String,
    pub response: String,
}

/// Executes the career-assistant graph for a single query
pub struct CareerWorkflow {
    classifier: QueryClassifier,
    learning: LearningAgent,
    interview: InterviewAgent,
    resume: ResumeAgent,
    job: JobSearchAgent,
}

impl CareerWorkflow {
    /// Wire up the workflow from explicit collaborators. `classifier_model`
    /// handles categorization; `agent_model` handles content generation.
    pub fn new(
        classifier_model: Arc<dyn Model>,
        agent_model: Arc<dyn Model>,
        search: Option<Arc<dyn SearchProvider>>,
        store: OutputStore,
    ) -> Self {
        Self {
            classifier: QueryClassifier::new(classifier_model),
            learning: LearningAgent::new(agent_model.clone(), search.clone(), store.clone()),
            interview: InterviewAgent::new(agent_model.clone(), search.clone(), store.clone()),
            resume: ResumeAgent::new(agent_model.clone(), search.clone(), store.clone()),
            job: JobSearchAgent::new(agent_model, search, store),
        }
    }

    /// Build a workflow from runtime settings. Fails only on construction
    /// problems (missing API key); per-request generation failures are
    /// absorbed by the agents.
    pub fn from_settings(settings: &Settings) -> Result<Self, CompassError> {
        let classifier_model: Arc<dyn Model> = Arc::new(GeminiModel::new(
            settings.flash_model.clone(),
            settings.google_api_key.clone(),
        ));
        let agent_model: Arc<dyn Model> = Arc::new(GeminiModel::new(
            settings.pro_model.clone(),
            settings.google_api_key.clone(),
        ));

        let search: Option<Arc<dyn SearchProvider>> = settings
            .brave_api_key
            .as_ref()
            .map(|key| Arc::new(BraveSearch::new(key.clone())) as Arc<dyn SearchProvider>);

        let store = OutputStore::new(settings.output_dir.clone());

        let workflow = Self::new(classifier_model, agent_model, search, store);
        if settings.use_canned_responses {
            workflow.force_fallback();
        }

        Ok(workflow)
    }

    /// Latch every component into fallback mode (canned responses, no
    /// external calls)
    pub fn force_fallback(&self) {
        self.classifier.force_fallback();
        self.learning.force_fallback();
        self.interview.force_fallback();
        self.resume.force_fallback();
        self.job.force_fallback();
    }

    /// Run the workflow for one query: entry at `Categorize`, one path to a
    /// terminal node, then done.
    pub async fn run(&self, query: &str) -> Result<WorkflowOutcome, CompassError> {
        let mut state = WorkflowState::new(query);
        let mut current = NodeId::Categorize;

        for step in 1..=MAX_STEPS {
            log::info!("Workflow step {}: executing {:?}", step, current);
            self.execute(current, &mut state).await?;

            let transition = transition_for(current)
                .ok_or_else(|| CompassError::other(format!("Node {:?} not in table", current)))?;

            match transition {
                Transition::End => {
                    let response = state
                        .response()
                        .filter(|r| !r.is_empty())
                        .ok_or(WorkflowError::MissingResponse)?
                        .to_string();
                    return Ok(WorkflowOutcome {
                        category: state.category().to_string(),
                        response,
                    });
                }
                Transition::Branch(route) => {
                    current = route(state.category()).ok_or_else(|| {
                        log::error!("No route for category {:?}", state.category());
                        WorkflowError::NoRoute {
                            category: state.category().to_string(),
                        }
                    })?;
                }
            }
        }

        Err(WorkflowError::MaxSteps { limit: MAX_STEPS }.into())
    }

    async fn execute(&self, node: NodeId, state: &mut WorkflowState) -> Result<(), CompassError> {
        match node {
            NodeId::Categorize => {
                let category = self.classifier.categorize(state.query()).await;
                state.set_category(category);
            }
            NodeId::HandleLearningResource => {
                let category = self.classifier.classify_learning(state.query()).await;
                state.set_category(category);
            }
            NodeId::HandleInterviewPreparation => {
                let category = self.classifier.classify_interview(state.query()).await;
                state.set_category(category);
            }
            NodeId::HandleResumeMaking => {
                let out = self.resume.create_resume(state.query()).await?;
                state.set_response(out.file_path.display().to_string());
            }
            NodeId::JobSearch => {
                let out = self.job.find_jobs(state.query()).await?;
                state.set_response(out.file_path.display().to_string());
            }
            NodeId::InterviewTopicsQuestions => {
                let out = self.interview.generate_questions(state.query()).await?;
                state.set_response(out.file_path.display().to_string());
            }
            NodeId::MockInterview => {
                let turn = self
                    .interview
                    .conduct_mock_interview(state.query(), &[])
                    .await?;
                state.set_response(turn.content);
            }
            NodeId::TutorialAgent => {
                let out = self.learning.create_tutorial(state.query()).await?;
                state.set_response(out.file_path.display().to_string());
            }
            NodeId::AskQueryBot => {
                let out = self.learning.answer_query(state.query()).await?;
                state.set_response(out.file_path.display().to_string());
            }
        }
        Ok(())
    }
}
