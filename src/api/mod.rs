//! HTTP API for taskpilot.
//!
//! ## Endpoints
//!
//! - `POST /analyze-tasks/` - Score and rank a submitted task list
//! - `GET /suggest-tasks/` - Top 3 suggestions from the stored tasks
//! - `GET /health` - Health check

mod routes;
pub mod types;

pub use routes::serve;
pub use types::*;
