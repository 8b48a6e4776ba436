//! Configuration resolution
//!
//! Merges explicit overrides, environment variables, and an optional config
//! file into the `Config` consumed by the rules pipeline.

pub mod config;

pub use config::{resolve, Auth, Config, ConfigOverrides};
