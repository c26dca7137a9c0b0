// SPDX-License-Identifier: MIT

//! HTTP surface
//!
//! One workflow endpoint plus direct per-task endpoints. Shared startup
//! state is limited to the model/search/store handles; agents (and their
//! fallback latches) are constructed per request so nothing leaks between
//! unrelated queries.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::agents::{ChatTurn, InterviewAgent, JobSearchAgent, LearningAgent, ResumeAgent, TaskOutput};
use crate::config::Settings;
use crate::error::CompassError;
use crate::model::gemini::GeminiModel;
use crate::model::Model;
use crate::search::{BraveSearch, SearchProvider};
use crate::storage::OutputStore;
use crate::workflow::{CareerWorkflow, WorkflowOutcome};

/// Handles shared across requests. Everything request-scoped (agents,
/// latches, workflow state) is built inside the handlers.
#[derive(Clone)]
pub struct AppState {
    classifier_model: Arc<dyn Model>,
    agent_model: Arc<dyn Model>,
    search: Option<Arc<dyn SearchProvider>>,
    store: OutputStore,
    use_canned_responses: bool,
}

impl AppState {
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

        Ok(Self {
            classifier_model,
            agent_model,
            search,
            store: OutputStore::new(settings.output_dir.clone()),
            use_canned_responses: settings.use_canned_responses,
        })
    }

    fn workflow(&self) -> CareerWorkflow {
        let workflow = CareerWorkflow::new(
            self.classifier_model.clone(),
            self.agent_model.clone(),
            self.search.clone(),
            self.store.clone(),
        );
        if self.use_canned_responses {
            workflow.force_fallback();
        }
        workflow
    }

    fn learning_agent(&self) -> LearningAgent {
        let agent = LearningAgent::new(
            self.agent_model.clone(),
            self.search.clone(),
            self.store.clone(),
        );
        if self.use_canned_responses {
            agent.force_fallback();
        }
        agent
    }

    fn interview_agent(&self) -> InterviewAgent {
        let agent = InterviewAgent::new(
            self.agent_model.clone(),
            self.search.clone(),
            self.store.clone(),
        );
        if self.use_canned_responses {
            agent.force_fallback();
        }
        agent
    }

    fn resume_agent(&self) -> ResumeAgent {
        let agent = ResumeAgent::new(
            self.agent_model.clone(),
            self.search.clone(),
            self.store.clone(),
        );
        if self.use_canned_responses {
            agent.force_fallback();
        }
        agent
    }

    fn job_agent(&self) -> JobSearchAgent {
        let agent = JobSearchAgent::new(
            self.agent_model.clone(),
            self.search.clone(),
            self.store.clone(),
        );
        if self.use_canned_responses {
            agent.force_fallback();
        }
        agent
    }
}

#[derive(Deserialize)]
struct QueryRequest {
    query: String,
}

#[derive(Deserialize)]
struct ChatRequest {
    query: String,
    #[serde(default)]
    chat_history: Option<Vec<ChatTurn>>,
}

#[derive(Serialize)]
struct FileResponse {
    content: String,
    file_path: String,
}

impl From<TaskOutput> for FileResponse {
    fn from(out: TaskOutput) -> Self {
        Self {
            content: out.content,
            file_path: out.file_path.display().to_string(),
        }
    }
}

type ApiError = (StatusCode, Json<Value>);

fn internal_error(e: impl std::fmt::Display) -> ApiError {
    log::error!("Request failed: {}", e);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": e.to_string() })),
    )
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/workflow", post(run_workflow))
        .route("/api/learning/tutorial", post(create_tutorial))
        .route("/api/learning/query", post(answer_query))
        .route("/api/interview/questions", post(interview_questions))
        .route("/api/interview/mock", post(mock_interview))
        .route("/api/resume/create", post(create_resume))
        .route("/api/job/search", post(search_jobs))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn serve(settings: &Settings, port: u16) -> Result<(), CompassError> {
    let state = AppState::from_settings(settings)?;
    let app = router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    log::info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .await
        .map_err(|e| CompassError::other(e.to_string()))?;

    Ok(())
}

async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Run the complete routing workflow for one query
async fn run_workflow(
    State(state): State<AppState>,
    Json(payload): Json<QueryRequest>,
) -> Result<Json<WorkflowOutcome>, ApiError> {
    let workflow = state.workflow();
    let outcome = workflow.run(&payload.query).await.map_err(internal_error)?;
    Ok(Json(outcome))
}

async fn create_tutorial(
    State(state): State<AppState>,
    Json(payload): Json<QueryRequest>,
) -> Result<Json<FileResponse>, ApiError> {
    let agent = state.learning_agent();
    let out = agent
        .create_tutorial(&payload.query)
        .await
        .map_err(internal_error)?;
    Ok(Json(out.into()))
}

async fn answer_query(
    State(state): State<AppState>,
    Json(payload): Json<QueryRequest>,
) -> Result<Json<FileResponse>, ApiError> {
    let agent = state.learning_agent();
    let out = agent
        .answer_query(&payload.query)
        .await
        .map_err(internal_error)?;
    Ok(Json(out.into()))
}

async fn interview_questions(
    State(state): State<AppState>,
    Json(payload): Json<QueryRequest>,
) -> Result<Json<FileResponse>, ApiError> {
    let agent = state.interview_agent();
    let out = agent
        .generate_questions(&payload.query)
        .await
        .map_err(internal_error)?;
    Ok(Json(out.into()))
}

async fn mock_interview(
    State(state): State<AppState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatTurn>, ApiError> {
    let agent = state.interview_agent();
    let history = payload.chat_history.unwrap_or_default();
    let turn = agent
        .conduct_mock_interview(&payload.query, &history)
        .await
        .map_err(internal_error)?;
    Ok(Json(turn))
}

async fn create_resume(
    State(state): State<AppState>,
    Json(payload): Json<QueryRequest>,
) -> Result<Json<FileResponse>, ApiError> {
    let agent = state.resume_agent();
    let out = agent
        .create_resume(&payload.query)
        .await
        .map_err(internal_error)?;
    Ok(Json(out.into()))
}

async fn search_jobs(
    State(state): State<AppState>,
    Json(payload): Json<QueryRequest>,
) -> Result<Json<FileResponse>, ApiError> {
    let agent = state.job_agent();
    let out = agent
        .find_jobs(&payload.query)
        .await
        .map_err(internal_error)?;
    Ok(Json(out.into()))
}
