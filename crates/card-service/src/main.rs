//! VISE 卡片服务 CLI
//!
//! 服务启动与离线规则评估的命令行入口点。

use anyhow::Context;
use card_service::cli::{Cli, CommandRunner, Commands};
use clap::Parser;
use vise_shared::{config::AppConfig, observability};

const SERVICE_NAME: &str = "card-service";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let command = cli.command_or_default();

    let config = AppConfig::load(SERVICE_NAME).context("加载配置失败")?;

    // 命令行日志级别优先于配置文件，RUST_LOG 仍然优先于两者
    let mut obs_config = config.observability.clone();
    if let Some(level) = cli.log_level {
        obs_config = obs_config.with_log_level(level);
    }
    // 离线命令不启动指标服务器
    if !matches!(command, Commands::Serve { .. }) {
        obs_config.metrics_enabled = false;
    }
    let _guard = observability::init(&obs_config).await?;

    let runner = CommandRunner::new(config);

    match command {
        Commands::Serve { port, host } => {
            runner.run_server(port, host).await?;
        }
        Commands::CheckEligibility {
            card_type,
            income,
            vise_club,
            country,
        } => {
            runner.run_check_eligibility(&card_type, income, vise_club, &country)?;
        }
        Commands::Quote {
            card_type,
            client_country,
            amount,
            purchase_country,
            date,
        } => {
            runner.run_quote(&card_type, &client_country, amount, &purchase_country, &date)?;
        }
    }

    Ok(())
}
