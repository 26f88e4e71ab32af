//! # Stock Calculation Engine
//!
//! 庫存彙總、狀態判定與效期預警

pub mod aggregator;
pub mod expiry;
pub mod search;
pub mod summary;

// Re-export 主要類型
pub use aggregator::StockAggregator;
pub use expiry::{ExpiryRiskEvaluator, EXPIRY_HORIZON_MONTHS};
pub use search::filter_inventory;
pub use summary::InventorySummary;

use stock_core::{InventorySource, InventoryView, StockError};

/// 讀取庫存檢視
///
/// 從資料來源取得已載入關聯的產品後交給聚合器。資料來源失敗時記錄原因，
/// 並以單一的 [`StockError::DataSource`] 回報，不回傳部分結果也不重試。
pub fn load_inventory<S: InventorySource>(source: &S) -> stock_core::Result<Vec<InventoryView>> {
    let products = source.products_with_stock().map_err(|e| {
        tracing::error!(cause = e.message(), "讀取庫存資料失敗");
        StockError::from(e)
    })?;

    tracing::info!("開始彙總庫存：產品 {} 筆", products.len());

    Ok(StockAggregator::aggregate(&products))
}
