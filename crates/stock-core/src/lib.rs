//! # Stock Core
//!
//! 庫存核心資料模型與類型定義

pub mod config;
pub mod lot;
pub mod product;
pub mod source;
pub mod view;

// Re-export 主要類型
pub use config::StockConfig;
pub use lot::{Batch, StockLot, Warehouse};
pub use product::{Category, Product, ProductWithStock, Unit};
pub use source::{InventorySource, SourceError};
pub use view::{InventoryView, LotSummary, StockStatus, NOT_AVAILABLE};

/// 庫存錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum StockError {
    /// 資料來源失敗，不回傳部分結果
    #[error("failed to retrieve inventory data")]
    DataSource {
        #[source]
        source: SourceError,
    },

    #[error("驗證失敗: {0}")]
    Validation(String),

    #[error("SKU 已存在: {0}")]
    DuplicateSku(String),

    #[error("找不到記錄: {0}")]
    NotFound(String),

    #[error("配置錯誤: {0}")]
    Config(String),

    /// 寫入失敗（例如資料表鎖已中毒）
    #[error("儲存失敗: {0}")]
    Storage(String),
}

impl StockError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }
}

impl From<SourceError> for StockError {
    fn from(source: SourceError) -> Self {
        Self::DataSource { source }
    }
}

pub type Result<T> = std::result::Result<T, StockError>;
