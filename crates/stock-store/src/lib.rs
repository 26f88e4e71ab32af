//! # Stock Store
//!
//! 記憶體內的庫存資料表（產品、分類、單位、倉庫、批號、庫存）

pub mod form;
pub mod memory;

// Re-export 主要類型
pub use form::NewProduct;
pub use memory::InMemoryStore;
