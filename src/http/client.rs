//! HTTP client used for both the release query and the asset download.

use anyhow::Result;
use futures_util::StreamExt;
use log::debug;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use super::progress::download_bar;
use super::status::network_error;
use crate::error::UpdateError;

/// HTTP client wrapper. Each call issues exactly one request.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Creates a new HTTP client wrapping the given reqwest Client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Performs a GET request and deserializes the JSON response.
    ///
    /// Transport failures and non-success statuses are [`UpdateError::Network`];
    /// a body that does not deserialize into `T` is [`UpdateError::MetadataFormat`].
    #[tracing::instrument(skip(self))]
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!("GET JSON from {}...", url);

        let body = self.get_bytes(url).await?;

        let result = serde_json::from_slice::<T>(&body)
            .map_err(|e| UpdateError::MetadataFormat(format!("{}: {}", url, e)))?;

        Ok(result)
    }

    /// Performs a GET request and returns the whole response body.
    #[tracing::instrument(skip(self))]
    pub async fn get_bytes(&self, url: &str) -> Result<Vec<u8>> {
        debug!("GET {}...", url);

        let response = self.send(url).await?;
        let body = response.bytes().await.map_err(|e| network_error(url, e))?;

        Ok(body.to_vec())
    }

    /// Downloads a file into memory while showing a progress bar.
    ///
    /// The body is streamed from a single request and returned whole.
    #[tracing::instrument(skip(self))]
    pub async fn download(&self, url: &str) -> Result<Vec<u8>> {
        debug!("Downloading file from {}...", url);

        let response = self.send(url).await?;
        let total = response.content_length();
        let progress = download_bar(total);

        let mut body = Vec::with_capacity(total.unwrap_or(0) as usize);
        let mut stream = response.bytes_stream();

        while let Some(chunk) = stream.next().await {
            let chunk = match chunk {
                Ok(chunk) => chunk,
                Err(e) => {
                    progress.abandon();
                    return Err(network_error(url, e).into());
                }
            };
            body.extend_from_slice(&chunk);
            progress.inc(chunk.len() as u64);
        }

        progress.finish_and_clear();
        debug!(
            "Downloaded {:.2} MB",
            body.len() as f64 / (1024.0 * 1024.0)
        );

        Ok(body)
    }

    /// Sends a GET request and rejects non-success statuses.
    async fn send(&self, url: &str) -> Result<Response> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| network_error(url, e))?;

        let response = response
            .error_for_status()
            .map_err(|e| network_error(url, e))?;

        Ok(response)
    }
}
