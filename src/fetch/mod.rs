//! Shared request plumbing for the three API façades.

mod basic;
mod client;
pub mod auth;

pub use basic::BasicClient;
pub use client::HttpClient;

use std::path::Path;

use bytes::Bytes;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use reqwest::{Method, Request, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

use crate::error::{ApiError, Error};

/// Parses and normalizes a base URL so endpoint paths join under it.
pub(crate) fn parse_base(base_url: &str) -> Result<Url, Error> {
    let normalized = if base_url.ends_with('/') {
        base_url.to_string()
    } else {
        format!("{base_url}/")
    };
    Url::parse(&normalized).map_err(|e| Error::Url(e.to_string()))
}

/// Builds an endpoint URL, dropping query parameters with `None` values.
pub(crate) fn endpoint(
    base: &Url,
    path: &str,
    params: &[(&str, Option<String>)],
) -> Result<Url, Error> {
    let mut url = base.join(path).map_err(|e| Error::Url(e.to_string()))?;
    {
        let mut pairs = url.query_pairs_mut();
        for (name, value) in params {
            if let Some(value) = value {
                pairs.append_pair(name, value);
            }
        }
    }
    if url.query() == Some("") {
        url.set_query(None);
    }
    Ok(url)
}

async fn execute<C: HttpClient>(client: &C, req: Request) -> Result<Response, Error> {
    debug!(method = %req.method(), url = %req.url(), "issuing request");
    Ok(client.execute(req).await?)
}

/// Consumes a non-2xx response into the uniform API error.
async fn into_api_error(resp: Response) -> Result<Error, Error> {
    let status = resp.status();
    let body = resp.bytes().await?;
    let err = ApiError::from_response(status, &body);
    warn!(status = status.as_u16(), %err, "request rejected by upstream");
    Ok(Error::Api(err))
}

/// GET with `Accept: application/json`, deserialized into `T`.
pub(crate) async fn get_json<C, T>(client: &C, url: Url) -> Result<T, Error>
where
    C: HttpClient,
    T: DeserializeOwned,
{
    let mut req = Request::new(Method::GET, url);
    req.headers_mut()
        .insert(ACCEPT, HeaderValue::from_static("application/json"));

    let resp = execute(client, req).await?;
    if !resp.status().is_success() {
        return Err(into_api_error(resp).await?);
    }
    let body = resp.bytes().await?;
    Ok(serde_json::from_slice(&body)?)
}

/// GET returning the raw body.
pub(crate) async fn get_bytes<C: HttpClient>(client: &C, url: Url) -> Result<Bytes, Error> {
    let resp = execute(client, Request::new(Method::GET, url)).await?;
    if !resp.status().is_success() {
        return Err(into_api_error(resp).await?);
    }
    Ok(resp.bytes().await?)
}

/// GET issued for its response headers; the body is discarded.
///
/// The feed endpoints disallow HEAD, so this is a plain GET.
pub(crate) async fn get_headers<C: HttpClient>(
    client: &C,
    url: Url,
) -> Result<(StatusCode, HeaderMap), Error> {
    let resp = execute(client, Request::new(Method::GET, url)).await?;
    if !resp.status().is_success() {
        return Err(into_api_error(resp).await?);
    }
    Ok((resp.status(), resp.headers().clone()))
}

/// Streams a GET response to a local file, returning the bytes written.
pub(crate) async fn download<C: HttpClient>(
    client: &C,
    url: Url,
    destination: &Path,
) -> Result<u64, Error> {
    let mut resp = execute(client, Request::new(Method::GET, url)).await?;
    if !resp.status().is_success() {
        return Err(into_api_error(resp).await?);
    }

    let mut file = tokio::fs::File::create(destination).await?;
    let mut written = 0u64;
    while let Some(chunk) = resp.chunk().await? {
        file.write_all(&chunk).await?;
        written += chunk.len() as u64;
    }
    file.flush().await?;

    debug!(bytes = written, path = %destination.display(), "download complete");
    Ok(written)
}
