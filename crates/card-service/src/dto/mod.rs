//! 请求与响应 DTO

pub mod request;
pub mod response;

pub use request::{PurchaseRequest, RegisterClientRequest, ValidatedPurchase};
pub use response::{PurchaseResponse, PurchaseSummary, ReadyResponse, RegisterClientResponse};
