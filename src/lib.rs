//! # taskpilot
//!
//! Backend service that scores and ranks to-do tasks by computed priority.
//!
//! This library provides:
//! - HTTP API for analyzing a submitted task list under a weighting strategy
//! - Top-N suggestions computed over tasks persisted in Supabase
//! - A deterministic, side-effect-free scoring core
//!
//! ## Request Flow
//! 1. Receive a task list via API (or fetch stored tasks from Supabase)
//! 2. Normalize each raw task into a canonical record
//! 3. Score every task against the full batch under the selected strategy
//! 4. Sort descending by score and respond
//!
//! ## Modules
//! - `api`: HTTP routes and wire types
//! - `scoring`: task normalization and the priority scoring core
//! - `store`: Supabase PostgREST client for persisted tasks

pub mod api;
pub mod config;
pub mod scoring;
pub mod store;

pub use config::Config;
