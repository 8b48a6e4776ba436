pub mod models;
pub mod rules;
pub mod settings;
pub mod utils;

// Re-export the main rule types for easier access
pub use models::{Rule, RuleList};

// Re-export the pipeline entry points and error type
pub use rules::{add_rule, add_rules, add_rules_json, build_rule, RulesError};

// Re-export configuration types
pub use settings::{resolve, Auth, Config, ConfigOverrides};
