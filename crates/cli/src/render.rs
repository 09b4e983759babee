//! Plain-text views of catalog state.

use std::fmt::Write as _;

use chrono::{DateTime, Utc};

use storefront_analytics::{CatalogSummary, capitalize_first, format_usd};
use storefront_products::Product;
use storefront_store::CategoryOption;

pub fn summary(summary: &CatalogSummary, refreshed_at: Option<DateTime<Utc>>) -> String {
    let mut out = String::new();
    let stats = &summary.price_stats;

    if let Some(at) = refreshed_at {
        let _ = writeln!(out, "Catalog loaded: {}", at.format("%Y-%m-%d %H:%M:%S UTC"));
    }
    let _ = writeln!(out, "Total products: {}", summary.total_products);
    let _ = writeln!(
        out,
        "Rated products: {} ({}% of products)",
        summary.rated_products, summary.rated_share
    );
    let _ = writeln!(
        out,
        "Average price:  {} (min {} | max {})",
        format_usd(stats.average),
        format_usd(stats.min),
        format_usd(stats.max)
    );

    out.push_str("\nCategory distribution\n");
    for entry in &summary.categories {
        let _ = writeln!(out, "  {:<24} {:>5} {:>6.1}%", entry.category, entry.count, entry.percentage);
    }

    out.push_str("\nRating distribution\n");
    for entry in &summary.ratings {
        let _ = writeln!(out, "  {:<24} {:>5} {:>6.1}%", entry.range, entry.count, entry.percentage);
    }

    out.push_str("\nTop categories\n");
    for (rank, entry) in summary.top_categories.iter().enumerate() {
        let _ = writeln!(out, "  {}. {} ({})", rank + 1, entry.category, entry.count);
    }

    out
}

pub fn product_list(shown: &[Product], total: usize) -> String {
    let mut out = format!("Showing {} of {} products\n", shown.len(), total);
    for product in shown {
        out.push_str(&product_row(product));
    }
    out
}

/// Confirmation after a create, edit or delete.
pub fn saved(verb: &str, product: &Product, total: usize) -> String {
    format!("{verb} product #{}\n{}Catalog size: {total}\n", product.id, product_row(product))
}

pub fn categories(options: &[CategoryOption]) -> String {
    options.iter().map(|o| format!("{}\n", o.label)).collect()
}

fn product_row(product: &Product) -> String {
    let rating = product
        .rating
        .map(|r| format!("{:.1} ({})", r.rate, r.count))
        .unwrap_or_else(|| "unrated".to_string());
    format!(
        "  #{:<4} {:<40} {:>12}  {:<20} {}\n",
        product.id,
        product.title,
        format_usd(product.price),
        capitalize_first(&product.category),
        rating
    )
}
