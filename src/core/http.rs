use std::time::Duration;

use reqwest::{
    header::USER_AGENT,
    Client,
    Response,
    Url,
};

use crate::core::SentimentError;

pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";

pub fn http_client() -> Result<Client, SentimentError> {
    Client::builder()
        .timeout(Duration::from_secs(120))
        .build()
        .map_err(|e| SentimentError::Custom(format!("HTTP client build failed: {e}")))
}

/// Parses a user-supplied base URL. Only absolute http(s) URLs are accepted;
/// trailing slashes are dropped so endpoint paths can be appended directly.
pub fn parse_api_base(raw: &str) -> Result<String, SentimentError> {
    let trimmed = raw.trim();
    let url = Url::parse(trimmed)
        .map_err(|e| SentimentError::InvalidBaseUrl(format!("{trimmed}: {e}")))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(SentimentError::InvalidBaseUrl(format!(
            "{trimmed}: unsupported scheme '{}'",
            url.scheme()
        )));
    }

    if url.host_str().is_none() {
        return Err(SentimentError::InvalidBaseUrl(format!("{trimmed}: missing host")));
    }

    Ok(trimmed.trim_end_matches('/').to_string())
}

pub fn ensure_success(resp: &Response) -> Result<(), SentimentError> {
    if !resp.status().is_success() {
        return Err(SentimentError::Status {
            status: resp.status(),
            url: resp.url().to_string(),
        });
    }
    Ok(())
}

pub fn user_agent() -> (reqwest::header::HeaderName, String) {
    (USER_AGENT, format!("sentimentsense/{} (+reqwest)", env!("CARGO_PKG_VERSION")))
}
