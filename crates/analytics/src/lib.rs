//! `storefront-analytics`
//!
//! **Responsibility:** derived catalog insights.
//!
//! Every function here is a pure, total function of a product slice:
//! - It never mutates its input and keeps no state between calls.
//! - Empty input yields empty or zero-valued output, never an error.
//! - Results are recomputed from scratch on every call (no memoization).
//!
//! Callers pass the full catalog, not a search-narrowed view.

pub mod category;
pub mod currency;
pub mod price;
pub mod rating;
pub mod rounding;
pub mod summary;

pub use category::{
    CategoryDistribution, DEFAULT_TOP_CATEGORIES, TopCategory, category_distribution,
    top_categories,
};
pub use currency::format_usd;
pub use price::{PriceStats, price_stats};
pub use rating::{
    PercentageBasis, RATING_BUCKETS, RatingBucket, RatingDistribution, rated_count, rated_share,
    rating_distribution, rating_distribution_with,
};
pub use rounding::{capitalize_first, round_to, share_percent};
pub use summary::{AnalyticsConfig, CatalogSummary, summarize, summarize_with, total_count};
