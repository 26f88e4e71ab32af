//! 庫存報表示例
//!
//! 用法：`cargo run --example inventory_report [config.json] [搜尋字串]`

use chrono::{Months, NaiveDate};
use stock::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => StockConfig::from_json_str(&std::fs::read_to_string(path)?)?,
        None => StockConfig::default(),
    };
    let query = args.next().unwrap_or_default();

    let store = InMemoryStore::new(config);
    let today = ExpiryRiskEvaluator::today();
    seed(&store, today)?;

    let views = load_inventory(&store)?;

    println!("=== 庫存報表 ({}) ===", today);
    println!("預設最低庫存: {}\n", store.config().default_min_stock);
    for view in filter_inventory(&views, &query) {
        let marker = if view.status.needs_attention() { "!" } else { " " };
        println!(
            "{} {:<10} {:<28} {:<14} {:>6} {:<4} {}",
            marker, view.sku, view.name, view.category, view.total_stock, view.unit, view.status
        );
        for lot in &view.lots {
            let expiry = match lot.expiry_date {
                Some(date) if ExpiryRiskEvaluator::is_approaching_expiry(date, today) => {
                    format!("Exp: {} (即將到期)", date)
                }
                Some(date) => format!("Exp: {}", date),
                None => String::new(),
            };
            println!(
                "    Lot: {:<14} {:>6} {:<4} {:<16} {}",
                lot.batch_number, lot.quantity, view.unit, lot.warehouse, expiry
            );
        }
    }

    let summary = InventorySummary::from_views(&views, today);
    println!(
        "\n{} 產品：有庫存 {}，低庫存 {}，缺貨 {}；即將到期批次 {}",
        summary.product_count,
        summary.in_stock,
        summary.low_stock,
        summary.out_of_stock,
        summary.expiring_lot_count
    );

    Ok(())
}

/// 建立示例資料
fn seed(store: &InMemoryStore, today: NaiveDate) -> Result<(), StockError> {
    let pcs = store.add_unit(Unit::new("Pièce", "PCS"))?;
    let bte = store.add_unit(Unit::new("Boîte", "BTE"))?;
    store.add_unit(Unit::new("Carton", "CRT"))?;
    store.add_unit(Unit::new("Palette", "PLT"))?;

    let medicaments = store.add_category(
        Category::new("Médicaments").with_description("Produits pharmaceutiques"),
    )?;
    let consommables = store.add_category(
        Category::new("Consommables").with_description("Gants, seringues, masques..."),
    )?;
    store.add_category(Category::new("Équipements").with_description("Matériel médical lourd"))?;

    let central = store.add_warehouse(Warehouse::new("Dépôt Central").with_location("Alger"))?;

    let paracetamol = store.create_product(
        NewProduct::new("REF-001", "Paracétamol 500mg", medicaments, bte)
            .with_min_stock(50)
            .with_expiry_tracking(true),
    )?;
    let gants = store.create_product(NewProduct::new("GNT-001", "Gants nitrile", consommables, pcs))?;
    store.create_product(NewProduct::new("MSK-001", "Masque chirurgical", consommables, pcs))?;

    let soon = today.checked_add_months(Months::new(2)).unwrap_or(today);
    let later = today.checked_add_months(Months::new(8)).unwrap_or(today);
    let lot_a = store.add_batch(Batch::new("PAR-A").with_expiry_date(soon))?;
    let lot_b = store.add_batch(Batch::new("PAR-B").with_expiry_date(later))?;

    store.add_stock(paracetamol.id, central, Some(lot_a), 30)?;
    store.add_stock(paracetamol.id, central, Some(lot_b), 120)?;
    store.add_stock(gants.id, central, None, 8)?;

    Ok(())
}
