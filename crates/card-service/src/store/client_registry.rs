//! 客户登记表
//!
//! 使用 DashMap 存储客户，ID 由原子计数器顺序分配。

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;

use crate::models::{Client, NewClient};

/// 客户登记表
///
/// 克隆后共享同一份数据，可直接放入 axum 状态。
/// 并发登记不会得到重复 ID，第一个 ID 为 1。
#[derive(Debug, Clone)]
pub struct ClientRegistry {
    clients: Arc<DashMap<u64, Client>>,
    next_id: Arc<AtomicU64>,
}

impl Default for ClientRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientRegistry {
    /// 创建空登记表
    pub fn new() -> Self {
        Self {
            clients: Arc::new(DashMap::new()),
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }

    /// 登记客户并分配 ID
    pub fn register(&self, new_client: NewClient) -> Client {
        let client_id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let client = new_client.into_client(client_id);
        self.clients.insert(client_id, client.clone());
        client
    }

    /// 按 ID 查找
    ///
    /// 返回数据的克隆，不持有锁
    pub fn get(&self, client_id: u64) -> Option<Client> {
        self.clients.get(&client_id).map(|c| c.clone())
    }

    /// 按 ID 升序列出所有客户
    pub fn list(&self) -> Vec<Client> {
        let mut clients: Vec<Client> = self
            .clients
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        clients.sort_by_key(|c| c.client_id);
        clients
    }

    pub fn count(&self) -> usize {
        self.clients.len()
    }
}
