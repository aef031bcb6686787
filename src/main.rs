use anyhow::Context;
use clap::Parser;
use portfolio_api::core::ConfigProvider;
use portfolio_api::utils::validation::Validate;
use portfolio_api::utils::logger;
use portfolio_api::{CliConfig, PortfolioServer, TomlConfig};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting portfolio-api");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    match &cli.config {
        Some(path) => {
            let config = match TomlConfig::from_file(path) {
                Ok(config) => config,
                Err(e) => exit_with_config_error(&e),
            };
            tracing::info!("Loaded configuration from {}", path);
            run(config).await
        }
        None => run(cli.clone()).await,
    }
}

async fn run<C: ConfigProvider + Validate>(config: C) -> anyhow::Result<()> {
    // 驗證配置
    if let Err(e) = config.validate() {
        exit_with_config_error(&e);
    }
    let addr = match config.bind_address() {
        Ok(addr) => addr,
        Err(e) => exit_with_config_error(&e),
    };

    let server =
        PortfolioServer::from_config(&config).context("failed to initialise the server")?;

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    server.serve(listener).await?;
    Ok(())
}

fn exit_with_config_error(e: &portfolio_api::PortfolioError) -> ! {
    tracing::error!("❌ Configuration validation failed: {}", e);
    eprintln!("❌ {}", e.user_friendly_message());
    std::process::exit(1);
}
