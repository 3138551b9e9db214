use crate::domain::model::ServiceListResponse;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::header::HeaderMap;
use url::Url;

/// 送出 HTTP 請求的抽象，測試時可替換成假的實作
#[async_trait]
pub trait Transport: Send + Sync {
    /// 送出不帶內容的 GET 請求。非 2xx 的狀態碼必須回傳 `ClientError::HttpStatus`
    async fn get(&self, url: Url, headers: &HeaderMap) -> Result<ServiceListResponse>;
}
