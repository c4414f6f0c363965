//! CLI 模块
//!
//! 提供命令行接口，支持以下功能：
//!
//! - `serve` - 启动 HTTP 服务（未指定子命令时的默认行为）
//! - `check-eligibility` - 离线评估开卡资格
//! - `quote` - 离线评估一次消费的授权和折扣
//!
//! # 使用示例
//!
//! ```bash
//! # 启动服务器
//! vise-server serve --port 3000
//!
//! # 评估开卡资格
//! vise-server check-eligibility --card-type platinum --income 1500 --vise-club --country Peru
//!
//! # 评估消费
//! vise-server quote --card-type white --client-country Peru --amount 250 \
//!     --purchase-country Peru --date 2024-01-20
//! ```

pub mod commands;
pub mod runner;

pub use commands::{Cli, Commands};
pub use runner::CommandRunner;
