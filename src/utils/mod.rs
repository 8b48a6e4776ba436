pub mod http;

// Re-export the transport seam
pub use http::{HttpRulePoster, PostResponse, RulePoster};
