//! 庫存彙總效能測試

use chrono::{Days, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fake::faker::lorem::en::Word;
use fake::Fake;
use rand::Rng;
use stock::{Batch, Product, ProductWithStock, StockAggregator, StockLot, Warehouse};

fn catalog(size: usize) -> Vec<ProductWithStock> {
    let mut rng = rand::thread_rng();
    let base = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
    let warehouses: Vec<_> = (0..4).map(|i| Warehouse::new(format!("WH-{}", i))).collect();

    (0..size)
        .map(|i| {
            let name: String = Word().fake();
            let lots = (0..rng.gen_range(0..6))
                .map(|j| {
                    let warehouse = warehouses[rng.gen_range(0..warehouses.len())].clone();
                    let lot = StockLot::new(rng.gen_range(0..500), warehouse);
                    if rng.gen_bool(0.5) {
                        let expiry = base + Days::new(rng.gen_range(0..720));
                        lot.with_batch(Batch::new(format!("LOT-{}-{}", i, j)).with_expiry_date(expiry))
                    } else {
                        lot
                    }
                })
                .collect();

            ProductWithStock::new(Product::new(format!("SKU-{:05}", i), name, rng.gen_range(0..100)))
                .with_lots(lots)
        })
        .collect()
}

fn bench_aggregate(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate");

    for size in [100, 1_000, 10_000] {
        let products = catalog(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &products, |b, products| {
            b.iter(|| StockAggregator::aggregate(black_box(products)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_aggregate);
criterion_main!(benches);
