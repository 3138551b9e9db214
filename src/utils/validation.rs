use crate::utils::error::{ClientError, Result};
use reqwest::header::{HeaderName, HeaderValue};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// 解析並檢查 URL，只接受 http / https
pub fn validate_url(field_name: &str, url_str: &str) -> Result<Url> {
    if url_str.trim().is_empty() {
        return Err(ClientError::invalid_value(
            field_name,
            url_str,
            "URL cannot be empty",
        ));
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(url),
            scheme => Err(ClientError::invalid_value(
                field_name,
                url_str,
                format!("Unsupported URL scheme: {}", scheme),
            )),
        },
        Err(e) => Err(ClientError::invalid_value(
            field_name,
            url_str,
            format!("Invalid URL format: {}", e),
        )),
    }
}

pub fn validate_header(name: &str, value: &str) -> Result<(HeaderName, HeaderValue)> {
    let field = format!("headers.{}", name);

    let header_name = HeaderName::from_bytes(name.as_bytes())
        .map_err(|e| ClientError::invalid_value(&field, name, format!("Invalid header name: {}", e)))?;
    let header_value = HeaderValue::from_str(value)
        .map_err(|e| ClientError::invalid_value(&field, value, format!("Invalid header value: {}", e)))?;

    Ok((header_name, header_value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("base_url", "https://example.com").is_ok());
        assert!(validate_url("base_url", "http://localhost:9000").is_ok());
        assert!(validate_url("base_url", "").is_err());
        assert!(validate_url("base_url", "   ").is_err());
        assert!(validate_url("base_url", "invalid-url").is_err());
        assert!(validate_url("base_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_header() {
        let (name, value) = validate_header("Content-Type", "application/json").unwrap();
        assert_eq!(name, reqwest::header::CONTENT_TYPE);
        assert_eq!(value, "application/json");

        assert!(validate_header("bad header", "x").is_err());
        assert!(validate_header("X-Trace", "line\nbreak").is_err());
    }
}
