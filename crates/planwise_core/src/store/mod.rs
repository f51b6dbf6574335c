//! Planner data-access layer.
//!
//! # Responsibility
//! - Replace ambient session state with an explicit, caller-owned store.
//! - Keep persistence outside the core: the store is serializable data, not
//!   a storage engine.

pub mod planner_store;
