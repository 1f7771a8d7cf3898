//! Access to the remote `/alarm` resource.

use crate::errors::{SyncError, SyncResult};
use crate::models::{AlarmRecord, ErrorBody};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use std::time::Duration;
use tracing::debug;

pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Read/replace access to the single alarm resource.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AlarmApi: Send + Sync {
    /// `GET /alarm`
    async fn fetch(&self) -> SyncResult<AlarmRecord>;

    /// `PUT /alarm`; returns the record as stored by the server.
    async fn replace(&self, alarm: &AlarmRecord) -> SyncResult<AlarmRecord>;
}

pub struct HttpAlarmApi {
    client: reqwest::Client,
    url: String,
}

impl HttpAlarmApi {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            url: format!("{}/alarm", base_url.trim_end_matches('/')),
        }
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> SyncResult<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl AlarmApi for HttpAlarmApi {
    async fn fetch(&self) -> SyncResult<AlarmRecord> {
        debug!("GET {}", self.url);
        let response = self
            .client
            .get(&self.url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;
        read_alarm(response).await
    }

    async fn replace(&self, alarm: &AlarmRecord) -> SyncResult<AlarmRecord> {
        debug!("PUT {} {alarm:?}", self.url);
        let body = serde_json::to_vec(alarm)?;
        let response = self
            .client
            .put(&self.url)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .header(ACCEPT, "application/json")
            .body(body)
            .send()
            .await?;
        read_alarm(response).await
    }
}

async fn read_alarm(response: reqwest::Response) -> SyncResult<AlarmRecord> {
    let status = response.status();
    let bytes = response.bytes().await?;
    debug!("alarm response {status} ({} bytes)", bytes.len());

    if !status.is_success() {
        let message = match serde_json::from_slice::<ErrorBody>(&bytes) {
            Ok(body) => body.error,
            Err(_) => String::from_utf8_lossy(&bytes).into_owned(),
        };
        return Err(SyncError::Status {
            status: status.as_u16(),
            message,
        });
    }

    Ok(serde_json::from_slice(&bytes)?)
}
