//! 断言辅助

use super::ApiResponse;

/// 断言请求被拒绝，并返回错误文本
pub fn assert_rejected(resp: &ApiResponse, status: u16) -> String {
    assert_eq!(resp.status, status, "响应: {:?}", resp.body);
    assert_eq!(resp.body["status"], "Rejected", "响应: {:?}", resp.body);
    resp.error().unwrap_or_default().to_string()
}

/// 断言消费被批准，并检查折扣结果
pub fn assert_approved(resp: &ApiResponse, discount: f64, final_amount: f64, benefit: &str) {
    assert_eq!(resp.status, 200, "响应: {:?}", resp.body);
    assert_eq!(resp.body["status"], "Approved");

    let purchase = &resp.body["purchase"];
    assert_eq!(purchase["discountApplied"].as_f64(), Some(discount));
    assert_eq!(purchase["finalAmount"].as_f64(), Some(final_amount));
    assert_eq!(purchase["benefit"], benefit);
}
