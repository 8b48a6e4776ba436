use serde::{Deserialize, Serialize};

/// A single filtering rule: a filter expression plus an optional label.
///
/// Rules are immutable once built. The remote API accepts exactly these two
/// fields; anything else in an incoming document is rejected during
/// deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Rule {
    /// The filter expression
    pub value: String,
    /// Free-form label attached to matches of this rule
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

impl Rule {
    /// Create a rule with no tag
    pub fn new(value: impl Into<String>) -> Self {
        Rule {
            value: value.into(),
            tag: None,
        }
    }

    /// Create a rule with a tag
    pub fn with_tag(value: impl Into<String>, tag: impl Into<String>) -> Self {
        Rule {
            value: value.into(),
            tag: Some(tag.into()),
        }
    }
}

/// An ordered collection of rules
pub type RuleList = Vec<Rule>;

/// The wire-level object posted to the rules endpoint:
/// `{"rules": [{"value": "...", "tag": "..."?}, ...]}`
#[derive(Debug, Clone, Serialize)]
pub struct RulesPayload {
    pub rules: RuleList,
}

impl RulesPayload {
    pub fn new(rules: RuleList) -> Self {
        RulesPayload { rules }
    }
}
