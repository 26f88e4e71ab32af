//! 產品模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::lot::StockLot;

/// 產品分類
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: None,
        }
    }

    /// 建構器模式：設置描述
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// 計量單位
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Unit {
    pub id: Uuid,
    pub name: String,
    /// 顯示用符號（如 PCS、BTE）
    pub symbol: String,
}

impl Unit {
    pub fn new(name: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            symbol: symbol.into(),
        }
    }
}

/// 產品主檔
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// 產品ID
    pub id: Uuid,

    /// 料號（唯一）
    pub sku: String,

    /// 顯示名稱
    pub name: String,

    /// 分類
    pub category_id: Option<Uuid>,

    /// 計量單位
    pub unit_id: Option<Uuid>,

    /// 最低庫存門檻
    pub min_stock: u32,

    /// 是否追蹤效期（僅供顯示，不參與狀態判定）
    pub has_expiry: bool,

    /// 描述
    pub description: Option<String>,

    /// 稅率（百分比）
    pub tva: Decimal,

    /// 原產國
    pub origin_country: String,
}

impl Product {
    /// 創建新的產品
    pub fn new(sku: impl Into<String>, name: impl Into<String>, min_stock: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            sku: sku.into(),
            name: name.into(),
            category_id: None,
            unit_id: None,
            min_stock,
            has_expiry: false,
            description: None,
            tva: Decimal::ZERO,
            origin_country: String::new(),
        }
    }

    /// 建構器模式：設置分類
    pub fn with_category_id(mut self, category_id: Uuid) -> Self {
        self.category_id = Some(category_id);
        self
    }

    /// 建構器模式：設置單位
    pub fn with_unit_id(mut self, unit_id: Uuid) -> Self {
        self.unit_id = Some(unit_id);
        self
    }

    /// 建構器模式：設置效期追蹤
    pub fn with_expiry_tracking(mut self, has_expiry: bool) -> Self {
        self.has_expiry = has_expiry;
        self
    }
}

/// 已預先載入關聯的產品（聚合器輸入）
///
/// 分類、單位與庫存批次由資料來源一次載入，聚合器本身不做查詢或關聯。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductWithStock {
    pub product: Product,
    pub category: Option<Category>,
    pub unit: Option<Unit>,
    pub lots: Vec<StockLot>,
}

impl ProductWithStock {
    pub fn new(product: Product) -> Self {
        Self {
            product,
            category: None,
            unit: None,
            lots: Vec::new(),
        }
    }

    /// 建構器模式：設置分類
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// 建構器模式：設置單位
    pub fn with_unit(mut self, unit: Unit) -> Self {
        self.unit = Some(unit);
        self
    }

    /// 建構器模式：設置庫存批次
    pub fn with_lots(mut self, lots: Vec<StockLot>) -> Self {
        self.lots = lots;
        self
    }

    /// 添加庫存批次
    pub fn add_lot(&mut self, lot: StockLot) {
        self.lots.push(lot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lot::Warehouse;

    #[test]
    fn test_create_product() {
        let product = Product::new("REF-001", "Paracétamol 500mg", 10);

        assert_eq!(product.sku, "REF-001");
        assert_eq!(product.min_stock, 10);
        assert!(product.category_id.is_none());
        assert!(!product.has_expiry);
        assert_eq!(product.tva, Decimal::ZERO);
    }

    #[test]
    fn test_product_with_stock_builder() {
        let category = Category::new("Médicaments").with_description("Produits pharmaceutiques");
        let unit = Unit::new("Boîte", "BTE");
        let warehouse = Warehouse::new("Dépôt Central");

        let mut item = ProductWithStock::new(
            Product::new("REF-002", "Gants", 5)
                .with_category_id(category.id)
                .with_unit_id(unit.id),
        )
        .with_category(category)
        .with_unit(unit);
        item.add_lot(StockLot::new(3, warehouse));

        assert_eq!(item.lots.len(), 1);
        assert_eq!(item.unit.as_ref().map(|u| u.symbol.as_str()), Some("BTE"));
        assert_eq!(item.product.category_id, item.category.as_ref().map(|c| c.id));
    }
}
