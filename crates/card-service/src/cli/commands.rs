//! CLI 命令定义
//!
//! 使用 clap derive 宏定义命令行接口结构。

use clap::{Parser, Subcommand};

/// VISE 卡片服务命令行工具
#[derive(Parser, Debug)]
#[command(name = "vise-server")]
#[command(version, about = "VISE 卡片登记与消费折扣服务")]
#[command(propagate_version = true)]
pub struct Cli {
    /// 日志级别 (trace, debug, info, warn, error)，覆盖配置文件
    #[arg(short, long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// 未指定子命令时启动服务
    pub fn command_or_default(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Serve {
            port: None,
            host: None,
        })
    }
}

/// 子命令枚举
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// 启动 HTTP 服务
    Serve {
        /// 服务端口，覆盖配置和 PORT 环境变量
        #[arg(short, long)]
        port: Option<u16>,

        /// 监听地址
        #[arg(long)]
        host: Option<String>,
    },

    /// 离线评估开卡资格并输出 JSON
    CheckEligibility {
        /// 卡片类型 (classic, gold, platinum, black, white)
        #[arg(short, long)]
        card_type: String,

        /// 月收入（USD）
        #[arg(short, long)]
        income: f64,

        /// 是否为 VISE CLUB 会员
        #[arg(long)]
        vise_club: bool,

        /// 居住国
        #[arg(long)]
        country: String,
    },

    /// 离线评估一次消费并输出 JSON
    Quote {
        /// 卡片类型
        #[arg(short, long)]
        card_type: String,

        /// 客户居住国
        #[arg(long)]
        client_country: String,

        /// 消费金额
        #[arg(short, long)]
        amount: f64,

        /// 消费来源国
        #[arg(long)]
        purchase_country: String,

        /// 消费日期（RFC 3339 或 YYYY-MM-DD）
        #[arg(short, long)]
        date: String,
    },
}
