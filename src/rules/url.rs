use crate::rules::RulesError;

/// Derive the rules endpoint from a PowerTrack stream URL.
///
/// The stream URL must contain `.json`; every occurrence is replaced with
/// `/rules.json`. The check is substring presence, not a suffix match, and
/// the replacement covers all occurrences, matching the behavior of the
/// live endpoints.
///
/// # Examples
/// ```
/// use powertrack_rules::rules::generate_rules_url;
///
/// let url = generate_rules_url("https://stream.example.com/stream.json").unwrap();
/// assert_eq!(url, "https://stream.example.com/stream/rules.json");
/// ```
pub fn generate_rules_url(stream_url: &str) -> Result<String, RulesError> {
    if !stream_url.contains(".json") {
        return Err(RulesError::BadPowerTrackUrl(
            "Doesn't end with .json".to_string(),
        ));
    }
    Ok(stream_url.replace(".json", "/rules.json"))
}
