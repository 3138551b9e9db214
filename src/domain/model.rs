use crate::utils::error::{ClientError, Result};
use crate::utils::validation::{validate_header, validate_url, Validate};
use reqwest::header::{HeaderMap, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "http://localhost:9000";
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// 客戶端連線設定：基底位址與每個請求都會帶上的預設標頭
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: Url,
    default_headers: BTreeMap<String, String>,
}

impl ClientConfig {
    /// 以指定的基底位址建立設定，並帶上 `Content-Type: application/json`
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = validate_url("base_url", base_url)?;
        let mut default_headers = BTreeMap::new();
        default_headers.insert(CONTENT_TYPE.as_str().to_string(), JSON_CONTENT_TYPE.to_string());

        Ok(Self {
            base_url,
            default_headers,
        })
    }

    /// 加入額外標頭；同名標頭（不分大小寫）會被覆蓋
    pub fn with_header(mut self, name: &str, value: &str) -> Result<Self> {
        validate_header(name, value)?;
        self.default_headers
            .retain(|existing, _| !existing.eq_ignore_ascii_case(name));
        self.default_headers.insert(name.to_string(), value.to_string());
        Ok(self)
    }

    /// 換掉基底位址，標頭保持不變
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self> {
        self.base_url = validate_url("base_url", base_url)?;
        Ok(self)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn default_headers(&self) -> &BTreeMap<String, String> {
        &self.default_headers
    }

    /// 在基底位址後接上相對路徑，保留基底原有的路徑前綴
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        let joined = format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        Url::parse(&joined).map_err(|e| {
            ClientError::invalid_value("base_url", joined, format!("Invalid request URL: {}", e))
        })
    }

    pub fn header_map(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::with_capacity(self.default_headers.len());
        for (name, value) in &self.default_headers {
            let (name, value) = validate_header(name, value)?;
            headers.insert(name, value);
        }
        Ok(headers)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        let mut default_headers = BTreeMap::new();
        default_headers.insert(CONTENT_TYPE.as_str().to_string(), JSON_CONTENT_TYPE.to_string());

        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            default_headers,
        }
    }
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", self.base_url.as_str())?;
        self.header_map()?;

        let has_json_content_type = self.default_headers.iter().any(|(name, value)| {
            name.eq_ignore_ascii_case(CONTENT_TYPE.as_str()) && is_json_content_type(value)
        });
        if !has_json_content_type {
            return Err(ClientError::invalid_value(
                "headers.Content-Type",
                self.default_headers
                    .iter()
                    .find(|(name, _)| name.eq_ignore_ascii_case(CONTENT_TYPE.as_str()))
                    .map(|(_, value)| value.as_str())
                    .unwrap_or(""),
                format!("Content-Type must be {}", JSON_CONTENT_TYPE),
            ));
        }

        Ok(())
    }
}

/// 只比對 `;` 之前的媒體類型，不分大小寫，參數（如 charset）不影響判斷
fn is_json_content_type(value: &str) -> bool {
    value
        .split(';')
        .next()
        .map(|media_type| media_type.trim().eq_ignore_ascii_case(JSON_CONTENT_TYPE))
        .unwrap_or(false)
}

/// 後端回傳的原始回應，內容不做任何解析
#[derive(Debug, Clone)]
pub struct ServiceListResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl ServiceListResponse {
    pub fn new(status: StatusCode, headers: HeaderMap, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    pub fn into_body(self) -> Vec<u8> {
        self.body
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// 呼叫端主動要求時才把內容解析成指定型別
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_slice(&self.body)?)
    }
}

/// 服務健康等級，數值越大越嚴重
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    #[default]
    Unknown,
    Healthy,
    Degraded,
    Unstable,
    Critical,
    Down,
}

impl HealthStatus {
    pub fn from_code(code: u64) -> Self {
        match code {
            1 => Self::Healthy,
            2 => Self::Degraded,
            3 => Self::Unstable,
            4 => Self::Critical,
            5 => Self::Down,
            _ => Self::Unknown,
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "healthy" | "up" => Self::Healthy,
            "degraded" => Self::Degraded,
            "unstable" => Self::Unstable,
            "critical" => Self::Critical,
            "down" => Self::Down,
            _ => Self::Unknown,
        }
    }

    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Healthy => "healthy",
            Self::Degraded => "degraded",
            Self::Unstable => "unstable",
            Self::Critical => "critical",
            Self::Down => "down",
        }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for HealthStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        // 後端可能回傳數字等級或名稱
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Code(u64),
            Name(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Code(code) => Self::from_code(code),
            Raw::Name(name) => Self::from_name(&name),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRecord {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default)]
    pub status: HealthStatus,
}
