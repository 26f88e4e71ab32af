//! 庫存統計

use chrono::NaiveDate;
use serde::Serialize;
use stock_core::{InventoryView, StockStatus};

use crate::expiry::ExpiryRiskEvaluator;

/// 庫存檢視統計
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventorySummary {
    /// 產品數
    pub product_count: usize,
    pub in_stock: usize,
    pub low_stock: usize,
    pub out_of_stock: usize,

    /// 批次總數
    pub lot_count: usize,

    /// 即將到期的批次數
    pub expiring_lot_count: usize,
}

impl InventorySummary {
    /// 從庫存檢視統計
    pub fn from_views(views: &[InventoryView], today: NaiveDate) -> Self {
        let mut summary = Self {
            product_count: views.len(),
            ..Self::default()
        };

        for view in views {
            match view.status {
                StockStatus::InStock => summary.in_stock += 1,
                StockStatus::LowStock => summary.low_stock += 1,
                StockStatus::OutOfStock => summary.out_of_stock += 1,
            }
            summary.lot_count += view.lot_count();
            summary.expiring_lot_count += ExpiryRiskEvaluator::expiring_lots(view, today).len();
        }

        summary
    }

    /// 需要補貨的產品數（低庫存 + 缺貨）
    pub fn needs_attention(&self) -> usize {
        self.low_stock + self.out_of_stock
    }
}
