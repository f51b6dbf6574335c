//! Planner domain models.
//!
//! # Responsibility
//! - Define canonical data structures shared by store, heuristics and
//!   services.
//! - Keep the wire contract stable: uuid ids, ISO-8601 timestamps, optional
//!   category references.
//!
//! # Invariants
//! - Every record is identified by a stable per-entity uuid.
//! - Categories are referenced by id and never owned by referencing records.

pub mod category;
pub mod event;
pub mod goal;
pub mod habit;
pub mod profile;
pub mod reward;
pub mod task;
