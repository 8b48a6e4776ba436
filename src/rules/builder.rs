use crate::models::Rule;
use crate::rules::RulesError;

/// Build a normalized rule from a rule expression and an optional tag.
///
/// The expression must be present; an empty string is still accepted. An
/// empty tag is treated as no tag.
///
/// # Examples
/// ```
/// use powertrack_rules::rules::build_rule;
///
/// let rule = build_rule(Some("lang:en beach"), Some("vacation")).unwrap();
/// assert_eq!(rule.value, "lang:en beach");
/// assert_eq!(rule.tag.as_deref(), Some("vacation"));
/// ```
pub fn build_rule(rule_text: Option<&str>, tag: Option<&str>) -> Result<Rule, RulesError> {
    let value = rule_text
        .ok_or_else(|| RulesError::BadArgument("rule_text cannot be None".to_string()))?;

    let mut rule = Rule::new(value);
    if let Some(tag) = tag {
        if !tag.is_empty() {
            rule.tag = Some(tag.to_string());
        }
    }
    Ok(rule)
}
