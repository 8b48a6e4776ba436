use serde_json::Value;

use crate::models::RuleList;
use crate::rules::RulesError;

/// Keys a rule object may carry
const EXPECTED_KEYS: [&str; 2] = ["value", "tag"];

fn fail() -> RulesError {
    RulesError::RulesListFormat(
        "rules list is not in the correct format, use build_rule to build your rules".to_string(),
    )
}

/// Check that a JSON document is a structurally valid rules list.
///
/// The document must be an array whose every element is an object with a
/// string `value`, an optional string `tag`, and no other keys. The first
/// violation aborts the check.
///
/// # Arguments
/// * `rules` - The JSON document to check
///
/// # Returns
/// * `Ok(())` if every element satisfies the rule contract
/// * `Err(RulesError::RulesListFormat)` on the first violation
pub fn check_rules_list(rules: &Value) -> Result<(), RulesError> {
    let list = rules.as_array().ok_or_else(fail)?;

    for rule in list {
        let obj = rule.as_object().ok_or_else(fail)?;

        match obj.get("value") {
            Some(value) if value.is_string() => {}
            _ => return Err(fail()),
        }

        if let Some(tag) = obj.get("tag") {
            if !tag.is_string() {
                return Err(fail());
            }
        }

        for key in obj.keys() {
            if !EXPECTED_KEYS.contains(&key.as_str()) {
                return Err(fail());
            }
        }
    }

    Ok(())
}

/// Parse a JSON document into a typed rule list, rejecting malformed shapes.
///
/// This is `check_rules_list` followed by deserialization, for callers that
/// start from untyped input such as a rules file.
pub fn parse_rules_list(rules: &Value) -> Result<RuleList, RulesError> {
    check_rules_list(rules)?;
    serde_json::from_value(rules.clone()).map_err(|e| RulesError::RulesListFormat(e.to_string()))
}
