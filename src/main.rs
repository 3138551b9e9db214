use clap::Parser;
use services_status::utils::error::ErrorSeverity;
use services_status::utils::logger;
use services_status::{ClientError, CliConfig, ServiceClient, ServiceListResponse};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting services-status");
    tracing::debug!("CLI config: {:?}", cli);

    match run(&cli).await {
        Ok(response) => {
            tracing::info!("✅ Backend answered {}", response.status());
            println!("{}", response.status());
            println!("{}", response.text());
            Ok(())
        }
        Err(e) => {
            tracing::error!(
                "❌ Fetching services failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            if let ClientError::HttpStatus { status, body } = &e {
                tracing::debug!("Body for {}: {}", status, String::from_utf8_lossy(body));
            }

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());

            // 退出碼：1 後端錯誤、2 網路錯誤、3 設定錯誤
            let exit_code = if e.is_network() {
                2
            } else {
                match e.severity() {
                    ErrorSeverity::Critical => 3,
                    _ => 1,
                }
            };
            std::process::exit(exit_code);
        }
    }
}

async fn run(cli: &CliConfig) -> services_status::Result<ServiceListResponse> {
    let client = ServiceClient::new(cli.client_config()?)?;
    tracing::info!("🔍 Fetching services from {}", client.services_url());
    client.fetch_services().await
}
