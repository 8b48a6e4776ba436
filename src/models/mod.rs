//! Core data models for the crate
//!
//! This module contains the rule record and payload structures, separated
//! from the logic that validates and submits them.

pub mod rule;

// Re-export the main rule types for easier access
pub use rule::{Rule, RuleList, RulesPayload};
