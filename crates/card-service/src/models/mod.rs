//! 服务领域模型

pub mod client;

pub use client::{Client, NewClient};
