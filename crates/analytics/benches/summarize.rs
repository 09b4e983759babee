use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use storefront_analytics::{category_distribution, rating_distribution, summarize};
use storefront_products::{Product, ProductId};

const CATEGORIES: [&str; 4] = ["electronics", "jewelery", "men's clothing", "women's clothing"];

/// Synthetic catalog: every fifth product unrated, rates spread over [0, 5].
fn catalog(size: usize) -> Vec<Product> {
    (0..size)
        .map(|i| {
            let product = Product {
                id: ProductId(i as u64),
                title: format!("Product {i}"),
                price: (i % 500) as f64 + 0.99,
                description: String::new(),
                category: CATEGORIES[i % CATEGORIES.len()].to_string(),
                image: String::new(),
                rating: None,
            };
            if i % 5 == 0 {
                product
            } else {
                product.with_rating((i % 51) as f64 / 10.0, (i % 300) as u64)
            }
        })
        .collect()
}

fn bench_summarize(c: &mut Criterion) {
    let mut group = c.benchmark_group("summarize");

    for size in [20usize, 1_000, 50_000] {
        let products = catalog(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &products, |b, products| {
            b.iter(|| summarize(black_box(products)));
        });
    }

    group.finish();
}

fn bench_distributions(c: &mut Criterion) {
    let products = catalog(10_000);
    let mut group = c.benchmark_group("distributions");

    group.bench_function("category_distribution", |b| {
        b.iter(|| category_distribution(black_box(&products)));
    });
    group.bench_function("rating_distribution", |b| {
        b.iter(|| rating_distribution(black_box(&products)));
    });

    group.finish();
}

criterion_group!(benches, bench_summarize, bench_distributions);
criterion_main!(benches);
