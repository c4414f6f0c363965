//! 测试环境管理
//!
//! 默认在 127.0.0.1 的临时端口启动服务；设置 `VISE_E2E_BASE_URL`
//! 时改为连接已运行的外部服务。

use anyhow::Result;
use card_service::{AppState, cli::runner::serve};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use super::super::helpers::ApiClient;

/// 测试环境
pub struct TestEnvironment {
    pub api: ApiClient,
    pub base_url: String,
    shutdown: Option<oneshot::Sender<()>>,
    server: Option<JoinHandle<Result<()>>>,
}

impl TestEnvironment {
    /// 启动内嵌服务（默认受限国家）
    pub async fn setup() -> Result<Self> {
        Self::setup_with_state(AppState::default()).await
    }

    /// 使用指定状态启动内嵌服务
    pub async fn setup_with_state(state: AppState) -> Result<Self> {
        if let Ok(base_url) = std::env::var("VISE_E2E_BASE_URL") {
            return Ok(Self {
                api: ApiClient::new(&base_url),
                base_url,
                shutdown: None,
                server: None,
            });
        }

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let base_url = format!("http://{}", listener.local_addr()?);
        let (tx, rx) = oneshot::channel::<()>();

        let server = tokio::spawn(serve(listener, state, async move {
            let _ = rx.await;
        }));

        Ok(Self {
            api: ApiClient::new(&base_url),
            base_url,
            shutdown: Some(tx),
            server: Some(server),
        })
    }

    /// 是否为内嵌服务（客户 ID 从 1 开始）
    pub fn is_embedded(&self) -> bool {
        self.server.is_some()
    }

    /// 停止内嵌服务
    pub async fn teardown(mut self) -> Result<()> {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        if let Some(server) = self.server.take() {
            server.await??;
        }
        Ok(())
    }
}
