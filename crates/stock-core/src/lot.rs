//! 倉庫、批號與庫存批次模型

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 倉庫
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Warehouse {
    pub id: Uuid,
    pub name: String,
    pub location: Option<String>,
}

impl Warehouse {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            location: None,
        }
    }

    /// 建構器模式：設置地點
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

/// 批號（追溯用分組）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Batch {
    pub id: Uuid,
    pub batch_number: String,
    pub expiry_date: Option<NaiveDate>,
}

impl Batch {
    pub fn new(batch_number: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            batch_number: batch_number.into(),
            expiry_date: None,
        }
    }

    /// 建構器模式：設置到期日
    pub fn with_expiry_date(mut self, expiry_date: NaiveDate) -> Self {
        self.expiry_date = Some(expiry_date);
        self
    }
}

/// 庫存批次：某產品存放於單一倉庫的數量
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockLot {
    /// 數量
    pub quantity: u32,

    /// 倉庫（必填）
    pub warehouse: Warehouse,

    /// 批號（可選）
    pub batch: Option<Batch>,
}

impl StockLot {
    pub fn new(quantity: u32, warehouse: Warehouse) -> Self {
        Self {
            quantity,
            warehouse,
            batch: None,
        }
    }

    /// 建構器模式：設置批號
    pub fn with_batch(mut self, batch: Batch) -> Self {
        self.batch = Some(batch);
        self
    }

    /// 到期日（無批號或批號無日期時為 None）
    pub fn expiry_date(&self) -> Option<NaiveDate> {
        self.batch.as_ref().and_then(|b| b.expiry_date)
    }
}
