use std::env;
use std::fs;
use std::path::PathBuf;

use log::debug;
use serde::Deserialize;
use url::Url;

use crate::rules::RulesError;

/// Basic auth credentials for the rules endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Auth {
    pub username: String,
    pub password: String,
}

/// Resolved client configuration, threaded explicitly into every call
#[derive(Debug, Clone)]
pub struct Config {
    /// Base PowerTrack stream URL (the `.json` one, not the rules endpoint)
    pub url: String,
    pub auth: Auth,
    /// Optional proxy for the transport (e.g., "http://127.0.0.1:8080")
    pub proxy: Option<String>,
}

impl Config {
    pub fn new(
        url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Config {
            url: url.into(),
            auth: Auth {
                username: username.into(),
                password: password.into(),
            },
            proxy: None,
        }
    }
}

/// Explicit values that take precedence over environment and file layers
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Path to the config file; defaults to `$POWERTRACK_CONFIG`, then
    /// `$HOME/.powertrack`
    pub config_path: Option<String>,
    pub url: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub proxy: Option<String>,
}

/// On-disk config file shape, TOML or YAML:
///
/// ```toml
/// [powertrack]
/// url = "https://stream.example.com/stream.json"
///
/// [auth]
/// username = "user"
/// password = "pass"
/// ```
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    #[serde(default)]
    powertrack: FileStreamSection,
    #[serde(default)]
    auth: FileAuthSection,
}

#[derive(Debug, Default, Deserialize)]
struct FileStreamSection {
    url: Option<String>,
    proxy: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct FileAuthSection {
    username: Option<String>,
    password: Option<String>,
}

impl FileConfig {
    fn load_from_content(content: &str) -> Result<Self, RulesError> {
        // YAML configs carry a top-level section marker; everything else is
        // treated as TOML
        if content.contains("powertrack:") || content.contains("auth:") {
            return serde_yaml::from_str(content)
                .map_err(|e| RulesError::Config(format!("Failed to parse YAML config: {}", e)));
        }

        toml::from_str(content)
            .map_err(|e| RulesError::Config(format!("Failed to parse TOML config: {}", e)))
    }
}

fn env_opt(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.is_empty())
}

fn default_config_path() -> Option<PathBuf> {
    if let Some(path) = env_opt("POWERTRACK_CONFIG") {
        return Some(PathBuf::from(path));
    }
    env_opt("HOME").map(|home| PathBuf::from(home).join(".powertrack"))
}

/// Resolve a `Config` by layering, most significant first: explicit
/// overrides, then `POWERTRACK_*` environment variables, then the config
/// file. A missing file is skipped; a file that exists but does not parse
/// is an error.
///
/// Environment variables: `POWERTRACK_URL`, `POWERTRACK_AUTH_USERNAME`,
/// `POWERTRACK_AUTH_PASSWORD`, `POWERTRACK_PROXY`, `POWERTRACK_CONFIG`.
pub fn resolve(overrides: ConfigOverrides) -> Result<Config, RulesError> {
    let path = overrides
        .config_path
        .clone()
        .map(PathBuf::from)
        .or_else(default_config_path);

    let mut file_config = FileConfig::default();
    if let Some(path) = path {
        if path.is_file() {
            let content = fs::read_to_string(&path).map_err(|e| {
                RulesError::Config(format!(
                    "Failed to read config file '{}': {}",
                    path.display(),
                    e
                ))
            })?;
            file_config = FileConfig::load_from_content(&content)?;
            debug!("loaded configuration from '{}'", path.display());
        } else {
            debug!("no config file at '{}', skipping", path.display());
        }
    }

    let url = overrides
        .url
        .or_else(|| env_opt("POWERTRACK_URL"))
        .or(file_config.powertrack.url)
        .ok_or_else(|| RulesError::Config("no PowerTrack url configured".to_string()))?;

    let username = overrides
        .username
        .or_else(|| env_opt("POWERTRACK_AUTH_USERNAME"))
        .or(file_config.auth.username)
        .ok_or_else(|| RulesError::Config("no auth username configured".to_string()))?;

    let password = overrides
        .password
        .or_else(|| env_opt("POWERTRACK_AUTH_PASSWORD"))
        .or(file_config.auth.password)
        .ok_or_else(|| RulesError::Config("no auth password configured".to_string()))?;

    let proxy = overrides
        .proxy
        .or_else(|| env_opt("POWERTRACK_PROXY"))
        .or(file_config.powertrack.proxy);

    Url::parse(&url)
        .map_err(|e| RulesError::Config(format!("invalid PowerTrack url '{}': {}", url, e)))?;

    Ok(Config {
        url,
        auth: Auth { username, password },
        proxy,
    })
}
