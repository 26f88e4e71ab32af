//! 記憶體資料表
//!
//! 供測試與開發使用，讀取時一次載入產品的所有關聯。

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use stock_core::{
    Batch, Category, InventorySource, Product, ProductWithStock, SourceError, StockConfig,
    StockError, StockLot, Unit, Warehouse,
};
use uuid::Uuid;

use crate::form::NewProduct;

/// 庫存資料列：產品在某倉庫（可選批號）的數量
#[derive(Debug, Clone)]
struct StockRow {
    product_id: Uuid,
    warehouse_id: Uuid,
    batch_id: Option<Uuid>,
    quantity: u32,
}

#[derive(Debug, Default)]
struct Tables {
    categories: Vec<Category>,
    units: Vec<Unit>,
    warehouses: Vec<Warehouse>,
    batches: Vec<Batch>,
    products: Vec<Product>,
    stocks: Vec<StockRow>,
}

impl Tables {
    fn warehouse(&self, id: Uuid) -> Option<&Warehouse> {
        self.warehouses.iter().find(|w| w.id == id)
    }

    fn batch(&self, id: Uuid) -> Option<&Batch> {
        self.batches.iter().find(|b| b.id == id)
    }

    fn join(&self, product: &Product) -> Result<ProductWithStock, SourceError> {
        let category = product
            .category_id
            .and_then(|id| self.categories.iter().find(|c| c.id == id))
            .cloned();
        let unit = product
            .unit_id
            .and_then(|id| self.units.iter().find(|u| u.id == id))
            .cloned();

        let lots = self
            .stocks
            .iter()
            .filter(|row| row.product_id == product.id)
            .map(|row| {
                let warehouse = self.warehouse(row.warehouse_id).cloned().ok_or_else(|| {
                    SourceError::new(format!("庫存參照不存在的倉庫: {}", row.warehouse_id))
                })?;
                let mut lot = StockLot::new(row.quantity, warehouse);
                if let Some(id) = row.batch_id {
                    let batch = self.batch(id).cloned().ok_or_else(|| {
                        SourceError::new(format!("庫存參照不存在的批號: {}", id))
                    })?;
                    lot = lot.with_batch(batch);
                }
                Ok(lot)
            })
            .collect::<Result<Vec<_>, SourceError>>()?;

        Ok(ProductWithStock {
            product: product.clone(),
            category,
            unit,
            lots,
        })
    }
}

/// 記憶體內的庫存資料表
#[derive(Debug, Default)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
    config: StockConfig,
}

impl InMemoryStore {
    pub fn new(config: StockConfig) -> Self {
        Self {
            tables: RwLock::new(Tables::default()),
            config,
        }
    }

    pub fn config(&self) -> &StockConfig {
        &self.config
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Tables>, SourceError> {
        self.tables
            .read()
            .map_err(|_| SourceError::new("lock poisoned"))
    }

    fn write(&self) -> stock_core::Result<RwLockWriteGuard<'_, Tables>> {
        self.tables
            .write()
            .map_err(|_| StockError::storage("lock poisoned"))
    }

    pub fn add_category(&self, category: Category) -> stock_core::Result<Uuid> {
        let id = category.id;
        self.write()?.categories.push(category);
        Ok(id)
    }

    pub fn add_unit(&self, unit: Unit) -> stock_core::Result<Uuid> {
        let id = unit.id;
        self.write()?.units.push(unit);
        Ok(id)
    }

    pub fn add_warehouse(&self, warehouse: Warehouse) -> stock_core::Result<Uuid> {
        let id = warehouse.id;
        self.write()?.warehouses.push(warehouse);
        Ok(id)
    }

    pub fn add_batch(&self, batch: Batch) -> stock_core::Result<Uuid> {
        let id = batch.id;
        self.write()?.batches.push(batch);
        Ok(id)
    }

    /// 分類列表（依名稱排序）
    pub fn categories(&self) -> stock_core::Result<Vec<Category>> {
        let mut categories = self.read()?.categories.clone();
        categories.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(categories)
    }

    /// 單位列表（依名稱排序）
    pub fn units(&self) -> stock_core::Result<Vec<Unit>> {
        let mut units = self.read()?.units.clone();
        units.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(units)
    }

    /// 新增產品
    ///
    /// 必填欄位缺漏為 `Validation`，分類或單位不存在為 `NotFound`，
    /// 料號重複為 `DuplicateSku`。
    pub fn create_product(&self, input: NewProduct) -> stock_core::Result<Product> {
        let product = input.into_product(&self.config)?;
        let mut tables = self.write()?;

        if let Some(id) = product.category_id {
            if !tables.categories.iter().any(|c| c.id == id) {
                return Err(StockError::not_found(format!("分類 {}", id)));
            }
        }
        if let Some(id) = product.unit_id {
            if !tables.units.iter().any(|u| u.id == id) {
                return Err(StockError::not_found(format!("單位 {}", id)));
            }
        }
        if tables.products.iter().any(|p| p.sku == product.sku) {
            tracing::warn!("新增產品失敗，料號重複: {}", product.sku);
            return Err(StockError::DuplicateSku(product.sku));
        }

        tracing::info!("新增產品 {} ({})", product.name, product.sku);
        tables.products.push(product.clone());
        Ok(product)
    }

    /// 記錄庫存批次
    pub fn add_stock(
        &self,
        product_id: Uuid,
        warehouse_id: Uuid,
        batch_id: Option<Uuid>,
        quantity: u32,
    ) -> stock_core::Result<()> {
        let mut tables = self.write()?;

        if !tables.products.iter().any(|p| p.id == product_id) {
            return Err(StockError::not_found(format!("產品 {}", product_id)));
        }
        if tables.warehouse(warehouse_id).is_none() {
            return Err(StockError::not_found(format!("倉庫 {}", warehouse_id)));
        }
        if let Some(id) = batch_id {
            if tables.batch(id).is_none() {
                return Err(StockError::not_found(format!("批號 {}", id)));
            }
        }

        tables.stocks.push(StockRow {
            product_id,
            warehouse_id,
            batch_id,
            quantity,
        });
        Ok(())
    }
}

impl InventorySource for InMemoryStore {
    /// 依產品名稱排序，並載入分類、單位、倉庫與批號
    fn products_with_stock(&self) -> Result<Vec<ProductWithStock>, SourceError> {
        let tables = self.read()?;

        let mut products: Vec<&Product> = tables.products.iter().collect();
        products.sort_by(|a, b| a.name.cmp(&b.name));

        products.into_iter().map(|p| tables.join(p)).collect()
    }
}
