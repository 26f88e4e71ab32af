//! # Stock
//!
//! 庫存彙總引擎：資料模型、彙總計算與記憶體資料表

pub use stock_calc::{
    filter_inventory, load_inventory, ExpiryRiskEvaluator, InventorySummary, StockAggregator,
};
pub use stock_core::{
    Batch, Category, InventorySource, InventoryView, LotSummary, Product, ProductWithStock,
    StockConfig, StockError, StockLot, StockStatus, Unit, Warehouse,
};
pub use stock_store::{InMemoryStore, NewProduct};

use tracing_subscriber::EnvFilter;

/// 初始化日誌輸出，可透過 `RUST_LOG` 調整等級（預設 info）
///
/// 重複呼叫不會出錯，之後的呼叫不生效。
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
