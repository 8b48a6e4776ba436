use log::{debug, info};
use serde_json::{json, Value};

use crate::models::Rule;
use crate::rules::builder::build_rule;
use crate::rules::url::generate_rules_url;
use crate::rules::validate::check_rules_list;
use crate::rules::RulesError;
use crate::settings::Config;
use crate::utils::http::{HttpRulePoster, RulePoster};

/// Validate a rules document, derive the rules endpoint, and POST the
/// payload through the given transport.
///
/// The payload looks like:
/// ```json
/// {
///     "rules": [
///         {"value": "rule1", "tag": "tag1"},
///         {"value": "rule2"}
///     ]
/// }
/// ```
///
/// Exactly one request is made; any status outside [200, 300) or a
/// transport failure is reported as `RuleAddFailed`.
fn post_rules(poster: &dyn RulePoster, conf: &Config, rules: Value) -> Result<(), RulesError> {
    check_rules_list(&rules)?;
    let rules_url = generate_rules_url(&conf.url)?;
    let rule_count = rules.as_array().map(|list| list.len()).unwrap_or(0);
    let payload = json!({ "rules": rules });

    debug!("posting {} rules to '{}'", rule_count, rules_url);
    match poster.post(&rules_url, &conf.auth, &payload) {
        Ok(resp) if (200..300).contains(&resp.status) => {
            info!("added {} rules, HTTP {}", rule_count, resp.status);
            Ok(())
        }
        Ok(resp) => Err(RulesError::RuleAddFailed {
            status_code: Some(resp.status),
            text: resp.body,
        }),
        Err(e) => Err(RulesError::RuleAddFailed {
            status_code: None,
            text: e,
        }),
    }
}

/// Add a single rule, using the transport provided.
pub fn add_rule_with(
    poster: &dyn RulePoster,
    rule_text: Option<&str>,
    tag: Option<&str>,
    conf: &Config,
) -> Result<(), RulesError> {
    let rule = build_rule(rule_text, tag)?;
    add_rules_with(poster, &[rule], conf)
}

/// Add an already-built list of rules, using the transport provided.
pub fn add_rules_with(
    poster: &dyn RulePoster,
    rules: &[Rule],
    conf: &Config,
) -> Result<(), RulesError> {
    let rules = serde_json::to_value(rules)
        .map_err(|e| RulesError::RulesListFormat(e.to_string()))?;
    post_rules(poster, conf, rules)
}

/// Add a hand-built JSON rules list, using the transport provided.
pub fn add_rules_json_with(
    poster: &dyn RulePoster,
    rules: &Value,
    conf: &Config,
) -> Result<(), RulesError> {
    post_rules(poster, conf, rules.clone())
}

/// Synchronously add a single rule to the configured PowerTrack stream.
pub fn add_rule(rule_text: Option<&str>, tag: Option<&str>, conf: &Config) -> Result<(), RulesError> {
    add_rule_with(&HttpRulePoster::from_config(conf), rule_text, tag, conf)
}

/// Synchronously add multiple rules to the configured PowerTrack stream in
/// one request. The list still passes through full structural validation.
pub fn add_rules(rules: &[Rule], conf: &Config) -> Result<(), RulesError> {
    add_rules_with(&HttpRulePoster::from_config(conf), rules, conf)
}

/// Synchronously add a hand-built JSON rules list. The document must be an
/// array of `{"value": ..., "tag"?: ...}` objects.
pub fn add_rules_json(rules: &Value, conf: &Config) -> Result<(), RulesError> {
    add_rules_json_with(&HttpRulePoster::from_config(conf), rules, conf)
}
