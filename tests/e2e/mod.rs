//! VISE 卡片服务端到端测试
//!
//! 在临时端口上启动真实服务，通过 HTTP 驱动完整业务流程：
//! - 客户登记（资格规则、字段校验）
//! - 消费评估（授权检查、折扣计算、金额舍入）
//! - 运维端点（健康检查、就绪检查、请求 ID）

pub mod data;
pub mod setup;

pub use setup::TestEnvironment;
