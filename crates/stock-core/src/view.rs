//! 庫存檢視（衍生資料，不持久化）

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 關聯缺失時的顯示值
pub const NOT_AVAILABLE: &str = "N/A";

/// 庫存狀態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StockStatus {
    /// 有庫存
    InStock,
    /// 低庫存（0 < 總量 <= 門檻）
    LowStock,
    /// 缺貨
    OutOfStock,
}

impl StockStatus {
    /// 依總量與最低庫存門檻判定狀態
    ///
    /// 依序判斷，先符合者為準：總量為 0 一律缺貨（即使門檻也是 0），
    /// 其次總量不超過門檻為低庫存，其餘為有庫存。
    pub fn classify(total_stock: u64, min_stock: u32) -> Self {
        if total_stock == 0 {
            StockStatus::OutOfStock
        } else if total_stock <= u64::from(min_stock) {
            StockStatus::LowStock
        } else {
            StockStatus::InStock
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::InStock => "IN_STOCK",
            StockStatus::LowStock => "LOW_STOCK",
            StockStatus::OutOfStock => "OUT_OF_STOCK",
        }
    }

    /// 是否需要補貨
    pub fn needs_attention(&self) -> bool {
        !matches!(self, StockStatus::InStock)
    }
}

impl std::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 批次摘要
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LotSummary {
    /// 批號，無批號時為 "N/A"
    pub batch_number: String,

    /// 到期日
    pub expiry_date: Option<NaiveDate>,

    /// 數量
    pub quantity: u32,

    /// 倉庫名稱
    pub warehouse: String,
}

/// 單一產品的庫存檢視
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryView {
    pub id: Uuid,
    pub sku: String,
    pub name: String,

    /// 分類名稱，未連結時為 "N/A"
    pub category: String,

    /// 單位符號，未連結時為 "N/A"
    pub unit: String,

    pub min_stock: u32,

    /// 所有批次數量總和，每次讀取重新計算
    pub total_stock: u64,

    pub status: StockStatus,
    pub has_expiry: bool,
    pub lots: Vec<LotSummary>,
}

impl InventoryView {
    /// 批次數量
    pub fn lot_count(&self) -> usize {
        self.lots.len()
    }
}
