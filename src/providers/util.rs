use anyhow::{Result, anyhow};
use serde::de::DeserializeOwned;
use tracing::debug;

pub const USER_AGENT: &str = "fxview/0.1";

/// Issues a GET and decodes the JSON body.
///
/// # Parameters
/// - `url`: fully formed request URL
/// - `subject`: what is being requested, used in error messages
///
/// # Returns
/// The decoded body, or an error for transport failures, non-success
/// statuses and malformed JSON. Nothing is retried.
pub async fn get_json<T: DeserializeOwned>(url: &str, subject: &str) -> Result<T> {
    debug!("Requesting {} from {}", subject, url);

    let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| anyhow!("Request error: {} for {}", e, subject))?;

    if !response.status().is_success() {
        return Err(anyhow!("HTTP error: {} for {}", response.status(), subject));
    }

    let text = response.text().await?;
    serde_json::from_str(&text)
        .map_err(|e| anyhow!("Failed to parse JSON response for {}: {}", subject, e))
}
