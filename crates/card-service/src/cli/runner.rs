//! 命令执行器
//!
//! 负责执行各 CLI 子命令的具体逻辑。

use std::future::Future;
use std::net::SocketAddr;

use anyhow::{Context, Result};
use rule_engine::{
    CardRuleEngine, CardTier, ClientApplication, Country, EligibilityDecision, PurchaseContext,
    RestrictedCountries, parse_purchase_date, to_decimal,
};
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tracing::{info, warn};
use vise_shared::config::AppConfig;

use crate::routes::build_router;
use crate::state::AppState;

/// 命令执行器
///
/// 持有加载好的配置，规则引擎按配置中的受限国家构建
pub struct CommandRunner {
    config: AppConfig,
}

impl CommandRunner {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    fn engine(&self) -> CardRuleEngine {
        CardRuleEngine::new(RestrictedCountries::new(
            &self.config.rules.restricted_countries,
        ))
    }

    /// 执行 serve 命令
    ///
    /// 命令行参数优先于配置文件和环境变量
    pub async fn run_server(&self, port: Option<u16>, host: Option<String>) -> Result<()> {
        let host = host.unwrap_or_else(|| self.config.server.host.clone());
        let port = port.unwrap_or(self.config.server.port);
        let engine = self.engine();
        info!(
            %host,
            port,
            restricted_countries = %engine.restricted_countries().display_list(),
            "启动 VISE 卡片服务"
        );

        let listener = TcpListener::bind((host.as_str(), port))
            .await
            .with_context(|| format!("绑定端口失败: {}:{}", host, port))?;
        let addr: SocketAddr = listener.local_addr().context("读取监听地址失败")?;

        info!("VISE 服务已启动: http://{}", addr);
        info!("可用端点:");
        info!("  POST /client - 客户登记");
        info!("  POST /purchase - 消费评估");
        info!("  GET /clients - 客户列表");
        info!("  GET /health, /ready - 健康检查");

        serve(listener, AppState::new(engine), shutdown_signal()).await?;

        info!("VISE 服务已停止");
        Ok(())
    }

    /// 执行 check-eligibility 命令
    pub fn run_check_eligibility(
        &self,
        card_type: &str,
        income: f64,
        vise_club: bool,
        country: &str,
    ) -> Result<()> {
        let report = self.eligibility_report(card_type, income, vise_club, country)?;
        println!("{}", serde_json::to_string_pretty(&report)?);
        Ok(())
    }

    /// 生成资格评估报告
    pub fn eligibility_report(
        &self,
        card_type: &str,
        income: f64,
        vise_club: bool,
        country: &str,
    ) -> Result<Value> {
        let application = ClientApplication::new(
            card_type,
            to_decimal(income, "monthlyIncome")?,
            vise_club,
            Country::parse(country)?,
        );

        let report = match self.engine().evaluate_eligibility(&application) {
            EligibilityDecision::Eligible(tier) => json!({
                "eligible": true,
                "cardType": tier,
                "message": format!("Cliente apto para tarjeta {}", tier),
            }),
            EligibilityDecision::Rejected(reason) => json!({
                "eligible": false,
                "code": reason.code(),
                "error": reason.to_string(),
            }),
        };

        Ok(report)
    }

    /// 执行 quote 命令
    pub fn run_quote(
        &self,
        card_type: &str,
        client_country: &str,
        amount: f64,
        purchase_country: &str,
        date: &str,
    ) -> Result<()> {
        let report = self.quote_report(card_type, client_country, amount, purchase_country, date)?;
        println!("{}", serde_json::to_string_pretty(&report)?);
        Ok(())
    }

    /// 生成消费评估报告
    pub fn quote_report(
        &self,
        card_type: &str,
        client_country: &str,
        amount: f64,
        purchase_country: &str,
        date: &str,
    ) -> Result<Value> {
        let ctx = PurchaseContext {
            tier: card_type.parse::<CardTier>()?,
            client_country: Country::parse(client_country)?,
            amount: to_decimal(amount, "amount")?,
            purchase_country: Country::parse(purchase_country)?,
            purchased_at: parse_purchase_date(date)?,
        };

        let report = match self.engine().quote_purchase(&ctx) {
            Ok(quote) => json!({
                "status": "Approved",
                "weekday": ctx.weekday().to_string(),
                "abroad": ctx.is_abroad(),
                "percent": quote.percent,
                "originalAmount": quote.original_amount.to_string(),
                "discountApplied": quote.discount_applied.to_string(),
                "finalAmount": quote.final_amount.to_string(),
                "benefit": quote.benefit(),
            }),
            Err(denied) => json!({
                "status": "Rejected",
                "error": denied.to_string(),
            }),
        };

        Ok(report)
    }
}

/// 在给定监听器上运行服务，直到 `shutdown` 完成
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown)
        .await
        .context("服务器运行失败")
}

/// 等待 Ctrl+C 或 SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "安装 CTRL+C 信号处理器失败");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "安装 SIGTERM 信号处理器失败");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("收到关闭信号，正在停止服务...");
}
