//! Generic RPC call utilities with caching, retry logic, and error handling
//!
//! Reads go through [`fetch`] (cached, retried) or [`fetch_fresh`] (retried,
//! skips the cache lookup). Writes go through [`mutate`]: exactly one attempt,
//! and the whole response cache is dropped once it succeeds.

use rand::Rng;
use reqwest::{Client, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};

use crate::constants::retry::{BASE_DELAY_MS, JITTER_FRACTION, MAX_ATTEMPTS};
use crate::data_fetcher::cache::{
    cache_http_response, clear_http_response_cache, get_cached_http_response, response_cache_key,
};
use crate::error::AppError;

/// Error body returned by the RPC layer on failure.
#[derive(serde::Deserialize)]
struct RpcErrorBody {
    #[serde(default)]
    code: String,
    #[serde(default)]
    message: String,
}

/// Cached, retried read.
#[instrument(skip(client, body))]
pub(super) async fn fetch<B, T>(
    client: &Client,
    url: &str,
    body: &B,
    ttl_seconds: u64,
) -> Result<T, AppError>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    let body_text = serde_json::to_string(body)?;
    let key = response_cache_key(url, &body_text);

    if let Some(cached_response) = get_cached_http_response(&key).await {
        debug!("Using cached response for URL: {url}");
        match serde_json::from_str::<T>(&cached_response) {
            Ok(parsed) => return Ok(parsed),
            Err(e) => {
                warn!("Failed to parse cached response for URL {}: {}", url, e);
            }
        }
    }

    read_and_cache(client, url, key, body_text, ttl_seconds).await
}

/// Retried read that ignores any cached copy. The fresh body still replaces
/// the cache entry so later cached reads see it.
#[instrument(skip(client, body))]
pub(super) async fn fetch_fresh<B, T>(
    client: &Client,
    url: &str,
    body: &B,
    ttl_seconds: u64,
) -> Result<T, AppError>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    let body_text = serde_json::to_string(body)?;
    let key = response_cache_key(url, &body_text);
    read_and_cache(client, url, key, body_text, ttl_seconds).await
}

/// Single-attempt write. On success the response cache is cleared so no read
/// can return data from before the write.
#[instrument(skip(client, body))]
pub(super) async fn mutate<B, T>(client: &Client, url: &str, body: &B) -> Result<T, AppError>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    let body_text = serde_json::to_string(body)?;
    info!("Calling mutation: {url}");

    let response = match post(client, url, body_text).await {
        Ok(resp) => resp,
        Err(e) => {
            error!("Mutation request failed for URL {}: {}", url, e);
            return Err(map_request_error(e, url));
        }
    };

    let response_text = read_success_body(response, url).await?;
    let parsed = parse_response::<T>(&response_text, url)?;

    clear_http_response_cache().await;
    Ok(parsed)
}

async fn read_and_cache<T: DeserializeOwned>(
    client: &Client,
    url: &str,
    key: String,
    body_text: String,
    ttl_seconds: u64,
) -> Result<T, AppError> {
    info!("Fetching data from URL: {url}");

    let response = send_with_retry(client, url, &body_text).await?;
    let response_text = read_success_body(response, url).await?;

    let parsed = parse_response::<T>(&response_text, url)?;
    // Cache only parsable payloads
    cache_http_response(key, response_text, ttl_seconds).await;
    Ok(parsed)
}

async fn post(client: &Client, url: &str, body_text: String) -> Result<Response, reqwest::Error> {
    client
        .post(url)
        .header(reqwest::header::CONTENT_TYPE, "application/json")
        .body(body_text)
        .send()
        .await
}

/// Backoff step with +/- `JITTER_FRACTION` random spread.
fn jittered(backoff: Duration) -> Duration {
    let factor = 1.0 + rand::rng().random_range(-JITTER_FRACTION..=JITTER_FRACTION);
    backoff.mul_f64(factor)
}

/// Sends a read, retrying timeouts, connection failures, 429 and 5xx.
async fn send_with_retry(
    client: &Client,
    url: &str,
    body_text: &str,
) -> Result<Response, AppError> {
    let mut attempt = 0u32;
    let mut backoff = Duration::from_millis(BASE_DELAY_MS);

    loop {
        match post(client, url, body_text.to_string()).await {
            Ok(resp) => {
                let status = resp.status();
                if (status.as_u16() == 429 || status.is_server_error()) && attempt < MAX_ATTEMPTS {
                    // Respect Retry-After if provided
                    let retry_after = resp
                        .headers()
                        .get(reqwest::header::RETRY_AFTER)
                        .and_then(|h| h.to_str().ok())
                        .and_then(|s| s.parse::<u64>().ok())
                        .map(Duration::from_secs);
                    let wait = retry_after.unwrap_or_else(|| jittered(backoff));
                    warn!(
                        "Transient {} from {}. Retrying in {:?} (attempt {}/{})",
                        status,
                        url,
                        wait,
                        attempt + 1,
                        MAX_ATTEMPTS
                    );
                    tokio::time::sleep(wait).await;
                    attempt += 1;
                    backoff = backoff.saturating_mul(2);
                    continue;
                }
                return Ok(resp);
            }
            Err(e) => {
                if (e.is_timeout() || e.is_connect()) && attempt < MAX_ATTEMPTS {
                    let wait = jittered(backoff);
                    warn!(
                        "Request error {} for {}. Retrying in {:?} (attempt {}/{})",
                        e,
                        url,
                        wait,
                        attempt + 1,
                        MAX_ATTEMPTS
                    );
                    tokio::time::sleep(wait).await;
                    attempt += 1;
                    backoff = backoff.saturating_mul(2);
                    continue;
                }
                error!("Request failed for URL {}: {}", url, e);
                return Err(map_request_error(e, url));
            }
        }
    }
}

fn map_request_error(e: reqwest::Error, url: &str) -> AppError {
    if e.is_timeout() {
        AppError::network_timeout(url)
    } else if e.is_connect() {
        AppError::network_connection(url, e.to_string())
    } else {
        AppError::ApiFetch(e)
    }
}

/// Maps non-success statuses to typed errors and returns the body otherwise.
async fn read_success_body(response: Response, url: &str) -> Result<String, AppError> {
    let status = response.status();
    debug!("Response status: {status}");

    if !status.is_success() {
        let status_code = status.as_u16();
        let reason = status.canonical_reason().unwrap_or("Unknown error");
        // The service explains rejected calls in a JSON error body
        let message = match response.text().await {
            Ok(text) => rpc_error_message(&text).unwrap_or_else(|| reason.to_string()),
            Err(_) => reason.to_string(),
        };

        error!("HTTP {} - {} (URL: {})", status_code, message, url);

        return Err(match status_code {
            404 => AppError::api_not_found(url),
            429 => AppError::api_rate_limit(message, url),
            400..=499 => AppError::api_client_error(status_code, message, url),
            502 | 503 => AppError::api_service_unavailable(status_code, message, url),
            _ => AppError::api_server_error(status_code, message, url),
        });
    }

    match response.text().await {
        Ok(text) => {
            debug!("Response length: {} bytes", text.len());
            Ok(text)
        }
        Err(e) => {
            error!("Failed to read response text from URL {}: {}", url, e);
            Err(AppError::ApiFetch(e))
        }
    }
}

fn rpc_error_message(text: &str) -> Option<String> {
    let body: RpcErrorBody = serde_json::from_str(text).ok()?;
    match (body.code.is_empty(), body.message.is_empty()) {
        (true, true) => None,
        (true, false) => Some(body.message),
        (false, true) => Some(body.code),
        (false, false) => Some(format!("{}: {}", body.code, body.message)),
    }
}

fn parse_response<T: DeserializeOwned>(response_text: &str, url: &str) -> Result<T, AppError> {
    serde_json::from_str::<T>(response_text).map_err(|e| {
        error!("Failed to parse API response: {} (URL: {})", e, url);
        error!(
            "Response text (first 200 chars): {}",
            response_text.chars().take(200).collect::<String>()
        );

        let trimmed = response_text.trim_start();
        if trimmed.is_empty() {
            AppError::api_no_data("Response body is empty", url)
        } else if !trimmed.starts_with('{') && !trimmed.starts_with('[') {
            AppError::api_malformed_json("Response is not valid JSON", url)
        } else {
            AppError::api_unexpected_structure(e.to_string(), url)
        }
    })
}
