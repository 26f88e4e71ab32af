//! 新增產品表單

use std::collections::HashMap;
use std::str::FromStr;

use rust_decimal::Decimal;
use stock_core::{Product, StockConfig, StockError};
use uuid::Uuid;

/// 新增產品輸入
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub sku: String,
    pub category_id: Option<Uuid>,
    pub unit_id: Option<Uuid>,

    /// 未填時使用配置的預設門檻
    pub min_stock: Option<u32>,

    /// 未填時使用配置的預設稅率
    pub tva: Option<Decimal>,

    pub description: Option<String>,
    pub has_expiry: bool,
}

impl NewProduct {
    pub fn new(
        sku: impl Into<String>,
        name: impl Into<String>,
        category_id: Uuid,
        unit_id: Uuid,
    ) -> Self {
        Self {
            name: name.into(),
            sku: sku.into(),
            category_id: Some(category_id),
            unit_id: Some(unit_id),
            ..Self::default()
        }
    }

    /// 建構器模式：設置最低庫存
    pub fn with_min_stock(mut self, min_stock: u32) -> Self {
        self.min_stock = Some(min_stock);
        self
    }

    /// 建構器模式：設置稅率
    pub fn with_tva(mut self, tva: Decimal) -> Self {
        self.tva = Some(tva);
        self
    }

    /// 建構器模式：設置效期追蹤
    pub fn with_expiry_tracking(mut self, has_expiry: bool) -> Self {
        self.has_expiry = has_expiry;
        self
    }

    /// 從表單欄位解析
    ///
    /// 欄位：`name`、`sku`、`categoryId`、`unitId`、`minStock`、`tva`、`description`。
    /// 數值欄位無法解析時視為未填；ID 欄位格式錯誤則為驗證錯誤。
    pub fn from_form(form: &HashMap<String, String>) -> stock_core::Result<Self> {
        let text = |key: &str| {
            form.get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
        };

        let parse_id = |key: &str| -> stock_core::Result<Option<Uuid>> {
            text(key)
                .map(|v| {
                    Uuid::parse_str(v)
                        .map_err(|_| StockError::validation(format!("{} 格式錯誤: {}", key, v)))
                })
                .transpose()
        };

        Ok(Self {
            name: text("name").unwrap_or_default().to_string(),
            sku: text("sku").unwrap_or_default().to_string(),
            category_id: parse_id("categoryId")?,
            unit_id: parse_id("unitId")?,
            min_stock: text("minStock").and_then(|v| v.parse().ok()),
            tva: text("tva").and_then(|v| Decimal::from_str(v).ok()),
            description: text("description").map(str::to_string),
            has_expiry: false,
        })
    }

    /// 檢查必填欄位
    pub fn validate(&self) -> stock_core::Result<()> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("name");
        }
        if self.sku.trim().is_empty() {
            missing.push("sku");
        }
        if self.category_id.is_none() {
            missing.push("categoryId");
        }
        if self.unit_id.is_none() {
            missing.push("unitId");
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(StockError::validation(format!(
                "請填寫所有必填欄位: {}",
                missing.join(", ")
            )))
        }
    }

    /// 驗證後套用預設值，轉為產品
    pub fn into_product(self, config: &StockConfig) -> stock_core::Result<Product> {
        self.validate()?;

        let mut product = Product::new(
            self.sku.trim(),
            self.name.trim(),
            self.min_stock.unwrap_or(config.default_min_stock),
        )
        .with_expiry_tracking(self.has_expiry);
        product.category_id = self.category_id;
        product.unit_id = self.unit_id;
        product.tva = self.tva.unwrap_or(config.default_tva);
        product.description = self.description;
        product.origin_country = config.default_origin_country.clone();

        Ok(product)
    }
}
