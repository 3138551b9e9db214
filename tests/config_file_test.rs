use anyhow::Result;
use httpmock::prelude::*;
use services_status::{resolve_client_config, ClientError, ServiceClient};
use std::io::Write;
use tempfile::NamedTempFile;

#[tokio::test]
async fn test_client_built_from_config_file() -> Result<()> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/services")
            .header("content-type", "application/json")
            .header("x-requested-by", "services-status");
        then.status(200).body("[]");
    });

    let mut file = NamedTempFile::new()?;
    write!(
        file,
        r#"
[client]
base_url = "{}"

[client.headers]
X-Requested-By = "services-status"
"#,
        server.base_url()
    )?;

    let config = resolve_client_config(Some(file.path()), None)?;
    let response = ServiceClient::new(config)?.fetch_services().await?;

    mock.assert();
    assert_eq!(response.text(), "[]");
    Ok(())
}

#[tokio::test]
async fn test_override_points_client_at_other_backend() -> Result<()> {
    let file_server = MockServer::start();
    let file_mock = file_server.mock(|when, then| {
        when.method(GET).path("/services");
        then.status(200).body("from file");
    });

    let override_server = MockServer::start();
    let override_mock = override_server.mock(|when, then| {
        when.method(GET).path("/services");
        then.status(200).body("from override");
    });

    let mut file = NamedTempFile::new()?;
    write!(file, "[client]\nbase_url = \"{}\"\n", file_server.base_url())?;

    let config = resolve_client_config(Some(file.path()), Some(&override_server.base_url()))?;
    let response = ServiceClient::new(config)?.fetch_services().await?;

    assert_eq!(response.text(), "from override");
    override_mock.assert_hits(1);
    file_mock.assert_hits(0);
    Ok(())
}

#[test]
fn test_invalid_base_url_in_file_is_rejected() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "[client]\nbase_url = \"ftp://checker\"\n").unwrap();

    let err = resolve_client_config(Some(file.path()), None).unwrap_err();
    assert!(matches!(err, ClientError::InvalidConfigValue { ref field, .. } if field == "client.base_url"));
}
