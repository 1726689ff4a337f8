//! Bounded HTTP fetch for the remote summarization path.

use once_cell::sync::Lazy;
use reqwest::Client;
use tracing::debug;
use url::Url;

use crate::core::config::EngineConfig;
use crate::errors::SummarizeError;

// Static client so concurrent summaries share one connection pool. The
// request deadline is applied per call from the engine config, not here.
static HTTP_CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder().build().unwrap_or_else(|_| {
        // This should not happen with default configuration, but provides a fallback
        Client::new()
    })
});

/// Single GET, no retries. Any network fault, timeout, or non-success
/// status is a `FetchFailure`; re-invocation is the caller's call.
pub async fn fetch_page(url: &str, config: &EngineConfig) -> Result<String, SummarizeError> {
    let parsed = Url::parse(url)
        .map_err(|e| SummarizeError::FetchFailure(format!("invalid url {url}: {e}")))?;
    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(SummarizeError::FetchFailure(format!(
            "unsupported scheme: {}",
            parsed.scheme()
        )));
    }

    let response = HTTP_CLIENT
        .get(parsed)
        .header(reqwest::header::USER_AGENT, &config.user_agent)
        .timeout(config.fetch_timeout)
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(SummarizeError::FetchFailure(format!(
            "HTTP {}",
            response.status()
        )));
    }

    let body = response.text().await?;
    debug!("fetched {} bytes from {}", body.len(), url);

    #[cfg(feature = "debug-logs")]
    debug!("fetched body:\n{}", body);

    Ok(body)
}
