use std::time::Duration;

use reqwest::{Client, Proxy};
use serde_json::Value;

use crate::settings::{Auth, Config};

/// Default timeout for HTTP requests in seconds
const DEFAULT_TIMEOUT: u64 = 15;

#[derive(Debug, Clone, Default)]
pub struct ProxyConfig {
    pub proxy: Option<String>,
}

pub fn parse_proxy(proxy_str: &str) -> ProxyConfig {
    if proxy_str.is_empty() || proxy_str == "NONE" {
        ProxyConfig { proxy: None }
    } else {
        ProxyConfig {
            proxy: Some(proxy_str.to_string()),
        }
    }
}

/// Outcome of a POST exchange: the status code and the raw body text
#[derive(Debug, Clone)]
pub struct PostResponse {
    pub status: u16,
    pub body: String,
}

/// The transport seam: one authenticated JSON POST per call.
///
/// Implementations return the response regardless of status code; status
/// interpretation belongs to the caller. Errors are transport-level
/// descriptions (connection refused, timeout, ...).
pub trait RulePoster {
    fn post(&self, url: &str, auth: &Auth, body: &Value) -> Result<PostResponse, String>;
}

/// Production transport backed by reqwest
#[derive(Debug, Clone)]
pub struct HttpRulePoster {
    pub timeout: u64,
    pub proxy: ProxyConfig,
}

impl Default for HttpRulePoster {
    fn default() -> Self {
        HttpRulePoster {
            timeout: DEFAULT_TIMEOUT,
            proxy: ProxyConfig::default(),
        }
    }
}

impl HttpRulePoster {
    pub fn from_config(conf: &Config) -> Self {
        HttpRulePoster {
            timeout: DEFAULT_TIMEOUT,
            proxy: parse_proxy(conf.proxy.as_deref().unwrap_or("")),
        }
    }
}

impl RulePoster for HttpRulePoster {
    fn post(&self, url: &str, auth: &Auth, body: &Value) -> Result<PostResponse, String> {
        web_post(url, auth, body, &self.proxy, self.timeout)
    }
}

/// Makes an authenticated JSON POST request to the specified URL
///
/// # Arguments
/// * `url` - The URL to post to
/// * `auth` - Basic auth credentials
/// * `body` - The JSON body to send
/// * `proxy_config` - Optional proxy (e.g., "http://127.0.0.1:8080")
/// * `timeout` - Request timeout in seconds
///
/// # Returns
/// * `Ok(PostResponse)` - The response status and body, whatever the status
/// * `Err(String)` - Error message if the request could not complete
pub async fn web_post_async(
    url: &str,
    auth: &Auth,
    body: &Value,
    proxy_config: &ProxyConfig,
    timeout: u64,
) -> Result<PostResponse, String> {
    // Build client with proxy if specified
    let mut client_builder = Client::builder()
        .timeout(Duration::from_secs(timeout))
        .user_agent("powertrack-rules");

    if let Some(proxy) = &proxy_config.proxy {
        if !proxy.is_empty() {
            match Proxy::all(proxy) {
                Ok(proxy) => {
                    client_builder = client_builder.proxy(proxy);
                }
                Err(e) => {
                    return Err(format!("Failed to set proxy: {}", e));
                }
            }
        }
    }

    let client = match client_builder.build() {
        Ok(client) => client,
        Err(e) => {
            return Err(format!("Failed to build HTTP client: {}", e));
        }
    };

    let response = match client
        .post(url)
        .basic_auth(&auth.username, Some(&auth.password))
        .json(body)
        .send()
        .await
    {
        Ok(resp) => resp,
        Err(e) => {
            return Err(format!("Failed to send request: {}", e));
        }
    };

    let status = response.status().as_u16();
    match response.text().await {
        Ok(body) => Ok(PostResponse { status, body }),
        Err(e) => Err(format!("Failed to read response body: {}", e)),
    }
}

/// Synchronous version of web_post_async that uses a tokio runtime to run
/// the async function.
pub fn web_post(
    url: &str,
    auth: &Auth,
    body: &Value,
    proxy_config: &ProxyConfig,
    timeout: u64,
) -> Result<PostResponse, String> {
    let rt = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            return Err(format!("Failed to create tokio runtime: {}", e));
        }
    };

    rt.block_on(web_post_async(url, auth, body, proxy_config, timeout))
}
