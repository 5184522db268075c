//! Full-pipeline composition benchmark

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use outfit_composer::{compose, CategorizedItems, Category, OutfitItem};

const STYLES: [&str; 5] = ["CASUAL_DAILY", "FORMAL_OFFICE", "OUTDOOR", "DATE_LOOK", ""];

fn wardrobe(per_category: usize) -> CategorizedItems {
    let mut items = CategorizedItems::new();
    for category in Category::ALL {
        for i in 0..per_category {
            let min = (i % 7) as f64 * 5.0 - 10.0;
            let item = OutfitItem::new(format!("{}-{}", category, i), category)
                .with_style(STYLES[i % STYLES.len()])
                .with_range(min, min + 12.0);
            items.push(category, item);
        }
    }
    items
}

fn bench_compose(c: &mut Criterion) {
    let small = wardrobe(20);
    let large = wardrobe(500);

    c.bench_function("compose_20_per_category", |b| {
        b.iter(|| compose(black_box(&small), black_box(Some(14.0)), true))
    });
    c.bench_function("compose_500_per_category", |b| {
        b.iter(|| compose(black_box(&large), black_box(Some(14.0)), true))
    });
}

criterion_group!(benches, bench_compose);
criterion_main!(benches);
