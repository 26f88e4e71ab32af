//! 資料來源介面

use crate::product::ProductWithStock;

/// 資料來源錯誤（持久層的不透明失敗）
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct SourceError {
    message: String,
}

impl SourceError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// 提供已載入關聯之產品的資料來源
///
/// 實作方須一次載入分類、單位、倉庫與批號，並決定產品的排列順序。
pub trait InventorySource {
    fn products_with_stock(&self) -> Result<Vec<ProductWithStock>, SourceError>;
}

impl<T: InventorySource + ?Sized> InventorySource for &T {
    fn products_with_stock(&self) -> Result<Vec<ProductWithStock>, SourceError> {
        (**self).products_with_stock()
    }
}
