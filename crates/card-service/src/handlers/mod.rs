//! HTTP 处理器

pub mod client;
pub mod health;
pub mod purchase;
