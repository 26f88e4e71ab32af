//! 庫存配置模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::StockError;

/// 建立產品時的預設值配置
///
/// 效期預警時界（三個月）是固定的業務規則，不在此配置中。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StockConfig {
    /// 未填寫最低庫存時的預設門檻
    pub default_min_stock: u32,

    /// 未填寫稅率時的預設值（百分比）
    pub default_tva: Decimal,

    /// 預設原產國
    pub default_origin_country: String,
}

impl StockConfig {
    /// 創建預設配置
    pub fn new() -> Self {
        Self {
            default_min_stock: 10,
            default_tva: Decimal::ZERO,
            default_origin_country: "Algérie".to_string(),
        }
    }

    /// 從 JSON 載入配置，缺少的欄位沿用預設值
    ///
    /// # 範例
    /// ```
    /// # use stock_core::StockConfig;
    /// let config = StockConfig::from_json_str(r#"{ "default_min_stock": 25 }"#).unwrap();
    /// assert_eq!(config.default_min_stock, 25);
    /// assert_eq!(config.default_origin_country, "Algérie");
    /// ```
    pub fn from_json_str(json: &str) -> crate::Result<Self> {
        serde_json::from_str(json).map_err(|e| StockError::Config(e.to_string()))
    }

    /// 建構器模式：設置預設最低庫存
    pub fn with_default_min_stock(mut self, min_stock: u32) -> Self {
        self.default_min_stock = min_stock;
        self
    }

    /// 建構器模式：設置預設稅率
    pub fn with_default_tva(mut self, tva: Decimal) -> Self {
        self.default_tva = tva;
        self
    }

    /// 建構器模式：設置預設原產國
    pub fn with_default_origin_country(mut self, country: impl Into<String>) -> Self {
        self.default_origin_country = country.into();
        self
    }
}

impl Default for StockConfig {
    fn default() -> Self {
        Self::new()
    }
}
