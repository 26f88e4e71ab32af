//! 庫存搜尋

use stock_core::InventoryView;

/// 依名稱或料號篩選（不分大小寫，保留原順序）
///
/// 空白查詢回傳全部。
pub fn filter_inventory<'a>(views: &'a [InventoryView], query: &str) -> Vec<&'a InventoryView> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return views.iter().collect();
    }

    views
        .iter()
        .filter(|view| {
            view.name.to_lowercase().contains(&needle) || view.sku.to_lowercase().contains(&needle)
        })
        .collect()
}
