use crate::domain::model::ServiceListResponse;
use crate::domain::ports::Transport;
use crate::utils::error::{ClientError, Result};
use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::Client;
use url::Url;

/// 以 reqwest 實作的傳輸層，沿用函式庫預設的逾時與重導設定
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: Url, headers: &HeaderMap) -> Result<ServiceListResponse> {
        tracing::debug!("Making API request to: {}", url);
        let response = self.client.get(url).headers(headers.clone()).send().await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        let response_headers = response.headers().clone();
        let body = response.bytes().await?.to_vec();

        if !status.is_success() {
            tracing::debug!("Backend returned error status {} ({} bytes)", status, body.len());
            return Err(ClientError::HttpStatus { status, body });
        }

        Ok(ServiceListResponse::new(status, response_headers, body))
    }
}
