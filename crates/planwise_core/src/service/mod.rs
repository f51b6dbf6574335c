//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store operations and heuristics into use-case level APIs.
//! - Keep embedding layers (UI, persistence) decoupled from heuristic
//!   details.

pub mod planner_service;
