// SPDX-License-Identifier: MIT

//! Query-routing workflow
//!
//! A fixed two-level decision tree: classify the query, branch on the
//! classification, dispatch to a task agent, terminate. The transition
//! rules live in a declarative table ([graph::TRANSITIONS]) consumed by a
//! generic executor ([graph::CareerWorkflow]).

pub mod classifier;
pub mod graph;
pub mod router;
pub mod state;

pub use graph::{CareerWorkflow, WorkflowOutcome};
pub use router::NodeId;
pub use state::WorkflowState;
