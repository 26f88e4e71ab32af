//! 庫存彙總器

use stock_core::{
    InventoryView, LotSummary, ProductWithStock, StockLot, StockStatus, NOT_AVAILABLE,
};

/// 庫存彙總器
///
/// 純函數轉換：不做 I/O，不保留狀態，同一輸入永遠得到相同輸出。
pub struct StockAggregator;

impl StockAggregator {
    /// 彙總所有產品，輸出順序與輸入一致
    pub fn aggregate(products: &[ProductWithStock]) -> Vec<InventoryView> {
        products.iter().map(Self::aggregate_product).collect()
    }

    /// 彙總單一產品
    pub fn aggregate_product(item: &ProductWithStock) -> InventoryView {
        let product = &item.product;
        let total_stock = Self::total_stock(&item.lots);
        let status = StockStatus::classify(total_stock, product.min_stock);

        tracing::debug!(
            "產品 {} 總庫存 {}，門檻 {}，狀態 {}",
            product.sku,
            total_stock,
            product.min_stock,
            status
        );

        InventoryView {
            id: product.id,
            sku: product.sku.clone(),
            name: product.name.clone(),
            category: resolve_or_sentinel(item.category.as_ref().map(|c| c.name.as_str())),
            unit: resolve_or_sentinel(item.unit.as_ref().map(|u| u.symbol.as_str())),
            min_stock: product.min_stock,
            total_stock,
            status,
            has_expiry: product.has_expiry,
            lots: item.lots.iter().map(Self::summarize_lot).collect(),
        }
    }

    /// 批次數量總和（空列表為 0）
    pub fn total_stock(lots: &[StockLot]) -> u64 {
        lots.iter().map(|lot| u64::from(lot.quantity)).sum()
    }

    /// 批次摘要
    pub fn summarize_lot(lot: &StockLot) -> LotSummary {
        LotSummary {
            batch_number: resolve_or_sentinel(lot.batch.as_ref().map(|b| b.batch_number.as_str())),
            expiry_date: lot.expiry_date(),
            quantity: lot.quantity,
            warehouse: lot.warehouse.name.clone(),
        }
    }
}

/// 空字串與缺失一樣顯示為 "N/A"
fn resolve_or_sentinel(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}
