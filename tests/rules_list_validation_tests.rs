use serde_json::json;

use powertrack_rules::rules::{check_rules_list, parse_rules_list, RulesError};

#[cfg(test)]
mod rules_list_validation_tests {
    use super::*;

    #[test]
    fn test_well_formed_lists_pass() {
        let cases = [
            json!([]),
            json!([{"value": "rule1"}]),
            json!([{"value": "rule1", "tag": "tag1"}]),
            json!([{"value": ""}, {"value": "rule2", "tag": ""}]),
        ];
        for rules in &cases {
            assert!(check_rules_list(rules).is_ok(), "rejected {}", rules);
        }
    }

    #[test]
    fn test_malformed_lists_are_rejected() {
        let cases = [
            // not a sequence
            json!({"value": "rule1"}),
            json!("rule1"),
            json!(42),
            json!(null),
            // element is not a mapping
            json!([["value", "rule1"]]),
            json!([null]),
            // missing value key
            json!([{"tag": "tag1"}]),
            json!([{}]),
            // non-text value
            json!([{"value": 1}]),
            json!([{"value": null}]),
            json!([{"value": ["rule1"]}]),
            // non-text tag
            json!([{"value": "rule1", "tag": 1}]),
            json!([{"value": "rule1", "tag": null}]),
            // extra keys
            json!([{"value": "rule1", "id": "abc"}]),
            json!([{"value": "rule1", "tag": "tag1", "weight": 2}]),
            // one bad element poisons the whole list
            json!([{"value": "rule1"}, {"tag": "tag2"}]),
        ];
        for rules in &cases {
            assert!(
                matches!(check_rules_list(rules), Err(RulesError::RulesListFormat(_))),
                "accepted {}",
                rules
            );
        }
    }

    #[test]
    fn test_validation_is_idempotent() {
        let rules = json!([{"value": "rule1", "tag": "tag1"}]);
        let before = rules.clone();

        assert!(check_rules_list(&rules).is_ok());
        assert!(check_rules_list(&rules).is_ok());
        assert_eq!(rules, before);

        let bad = json!([{"value": 1}]);
        assert!(check_rules_list(&bad).is_err());
        assert!(check_rules_list(&bad).is_err());
    }

    #[test]
    fn test_parse_yields_typed_rules() {
        let rules = json!([{"value": "rule1", "tag": "tag1"}, {"value": "rule2"}]);
        let parsed = parse_rules_list(&rules).unwrap();

        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].value, "rule1");
        assert_eq!(parsed[0].tag.as_deref(), Some("tag1"));
        assert_eq!(parsed[1].value, "rule2");
        assert_eq!(parsed[1].tag, None);
    }

    #[test]
    fn test_parse_rejects_what_validation_rejects() {
        let rules = json!([{"value": "rule1", "other": true}]);
        assert!(matches!(
            parse_rules_list(&rules),
            Err(RulesError::RulesListFormat(_))
        ));
    }
}
