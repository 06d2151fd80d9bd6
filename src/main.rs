use clap::Parser;
use emoji_relay::config::toml_config::TomlConfig;
use emoji_relay::config::{CliConfig, API_KEY_ENV};
use emoji_relay::domain::ports::ConfigProvider;
use emoji_relay::server;
use emoji_relay::utils::{logger, validation::Validate};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_logger(cli.verbose);

    tracing::info!("Starting emoji-relay");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // 憑證缺失屬於致命啟動錯誤
    let api_key = match std::env::var(API_KEY_ENV) {
        Ok(key) if !key.trim().is_empty() => key,
        _ => {
            tracing::error!("❌ Missing {} in the environment", API_KEY_ENV);
            eprintln!("❌ {} must be set before starting the relay", API_KEY_ENV);
            std::process::exit(1);
        }
    };

    // TOML 配置優先，否則採用 CLI 參數
    let (router, bind_addr) = if let Some(path) = &cli.config {
        tracing::info!("Loading config file: {}", path);
        let config = TomlConfig::from_file(path)?;

        if let Err(e) = config.validate() {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }

        let bind_addr = config.bind_addr().to_string();
        (server::build_service(&config, &api_key), bind_addr)
    } else {
        if let Err(e) = cli.validate() {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }

        let bind_addr = cli.bind_addr.clone();
        (server::build_service(&cli, &api_key), bind_addr)
    };

    server::serve(router, &bind_addr).await?;

    Ok(())
}
