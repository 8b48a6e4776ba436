//! Rule construction, validation, and submission

pub mod builder;
pub mod submit;
pub mod url;
pub mod validate;

use thiserror::Error;

pub use builder::build_rule;
pub use submit::{
    add_rule, add_rule_with, add_rules, add_rules_json, add_rules_json_with, add_rules_with,
};
pub use url::generate_rules_url;
pub use validate::{check_rules_list, parse_rules_list};

/// Errors raised by the rules pipeline.
///
/// The first three kinds fire before any network traffic; `RuleAddFailed`
/// means a request was attempted and rejected or could not complete.
#[derive(Error, Debug)]
pub enum RulesError {
    #[error("Bad argument: {0}")]
    BadArgument(String),

    #[error("Bad PowerTrack URL: {0}")]
    BadPowerTrackUrl(String),

    #[error("Rules list format error: {0}")]
    RulesListFormat(String),

    #[error(
        "Failed to add rules: HTTP response code: {code}, text: '{text}'",
        code = status_or_none(.status_code)
    )]
    RuleAddFailed {
        /// Status code of the response, if one was received at all
        status_code: Option<u16>,
        /// Response body, or a transport error description
        text: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

fn status_or_none(status_code: &Option<u16>) -> String {
    match status_code {
        Some(code) => code.to_string(),
        None => "none".to_string(),
    }
}
