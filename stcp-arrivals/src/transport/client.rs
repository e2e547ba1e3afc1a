//! HTTP client issuing fetches through the shared request slot.

use std::future::Future;
use std::time::Duration;

use reqwest::Url;
use serde::de::DeserializeOwned;

use super::charset;
use super::document::ParsedDocument;
use super::error::NetworkError;
use super::slot::{Delivery, RequestSlot};

/// HTTP transport with at most one request in flight.
///
/// Both fetch methods claim the slot synchronously, when called, so the
/// order in which fetches are issued decides which one survives, regardless
/// of when their futures are first polled.
#[derive(Debug)]
pub struct Transport {
    http: reqwest::Client,
    slot: RequestSlot,
}

impl Transport {
    /// Create a transport. No timeout is applied unless one is given.
    pub fn new(timeout: Option<Duration>) -> Result<Self, NetworkError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            slot: RequestSlot::new(),
        })
    }

    /// Fetch `url` and decode the body as JSON.
    ///
    /// Supersedes any pending fetch on this transport.
    pub fn fetch_structured<T: DeserializeOwned>(
        &self,
        url: Url,
    ) -> impl Future<Output = Result<Delivery<T>, NetworkError>> {
        let ticket = self.slot.claim();
        let request = fetch_body(self.http.clone(), url, false);

        async move {
            let body = match ticket.run(request).await {
                Delivery::Delivered(body) => body?,
                Delivery::Superseded => return Ok(Delivery::Superseded),
            };

            let value = serde_json::from_str(&body).map_err(|e| NetworkError::Decode {
                message: e.to_string(),
                body: Some(body.chars().take(500).collect()),
            })?;

            Ok(Delivery::Delivered(value))
        }
    }

    /// Fetch `url` and parse the body as an HTML document.
    ///
    /// Without a charset in the `Content-Type` header, the body is decoded
    /// using the charset its `<meta>` tags declare.
    ///
    /// Supersedes any pending fetch on this transport.
    pub fn fetch_document(
        &self,
        url: Url,
    ) -> impl Future<Output = Result<Delivery<ParsedDocument>, NetworkError>> {
        let ticket = self.slot.claim();
        let request = fetch_body(self.http.clone(), url, true);

        async move {
            match ticket.run(request).await {
                Delivery::Delivered(body) => Ok(Delivery::Delivered(ParsedDocument::parse(&body?))),
                Delivery::Superseded => Ok(Delivery::Superseded),
            }
        }
    }

    /// The slot shared by both fetch methods.
    pub fn slot(&self) -> &RequestSlot {
        &self.slot
    }
}

/// GET `url` and return the decoded body text of a successful response.
async fn fetch_body(
    http: reqwest::Client,
    url: Url,
    sniff_meta: bool,
) -> Result<String, NetworkError> {
    tracing::debug!(%url, "GET");

    let response = http.get(url.clone()).send().await?;
    let status = response.status();

    if !status.is_success() {
        return Err(NetworkError::Status {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }

    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let bytes = response.bytes().await?;

    Ok(charset::decode(&bytes, content_type.as_deref(), sniff_meta))
}
