use crate::adapters::http::HttpTransport;
use crate::core::{ClientConfig, ServiceListResponse, Transport};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use reqwest::header::HeaderMap;
use url::Url;

pub const SERVICES_PATH: &str = "/services";

/// 取得服務列表的唯一入口。設定在建立後不可變，可安全地跨 task 共用
pub struct ServiceClient<T: Transport = HttpTransport> {
    config: ClientConfig,
    services_url: Url,
    headers: HeaderMap,
    transport: T,
}

impl ServiceClient<HttpTransport> {
    pub fn new(config: ClientConfig) -> Result<Self> {
        Self::with_transport(config, HttpTransport::new())
    }
}

impl<T: Transport> ServiceClient<T> {
    pub fn with_transport(config: ClientConfig, transport: T) -> Result<Self> {
        config.validate()?;
        let services_url = config.endpoint(SERVICES_PATH)?;
        let headers = config.header_map()?;

        tracing::debug!("Service client targets {}", services_url);

        Ok(Self {
            config,
            services_url,
            headers,
            transport,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn services_url(&self) -> &Url {
        &self.services_url
    }

    /// `GET {base_url}/services`，回傳未經處理的回應
    pub async fn fetch_services(&self) -> Result<ServiceListResponse> {
        self.transport
            .get(self.services_url.clone(), &self.headers)
            .await
    }
}
