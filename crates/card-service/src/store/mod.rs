//! 存储模块
//!
//! 进程内存存储，服务重启后数据清空。

mod client_registry;

pub use client_registry::ClientRegistry;
