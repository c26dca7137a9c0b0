// SPDX-License-Identifier: MIT

//! compass-rs - a career assistant that routes free-text queries to
//! specialized task agents (learning content, resume drafting, interview
//! preparation, job search) backed by a generative model and web search.

pub mod agents;
pub mod config;
pub mod error;
pub mod model;
pub mod search;
pub mod server;
pub mod storage;
pub mod workflow;
