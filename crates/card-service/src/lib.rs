//! VISE 卡片服务
//!
//! 基于 axum 的 HTTP 服务，负责客户开卡登记与消费折扣评估。
//! 业务规则全部委托给 `rule_engine`，本 crate 只做输入校验、状态管理和响应序列化。
//!
//! # 主要模块
//!
//! - `store`: 客户登记表（进程内存，生命周期与进程一致）
//! - `handlers`: HTTP 处理器
//! - `routes`: 路由与中间件装配
//! - `cli`: 命令行入口（启动服务、离线评估）

pub mod cli;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod state;
pub mod store;

pub use error::{ApiError, Result};
pub use routes::build_router;
pub use state::AppState;
