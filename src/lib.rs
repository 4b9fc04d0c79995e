// Sortiment - Core Library
// Product category classification and order grouping for the CLI, API server, and tests

pub mod catalog;
pub mod classifier;
pub mod config;
pub mod entities;
pub mod error;
pub mod grouping;
pub mod observer;
pub mod orders;
pub mod render;
pub mod tables;

#[cfg(feature = "enrichment")]
pub mod hints;

#[cfg(feature = "server")]
pub mod server;

// Re-export commonly used types
pub use catalog::{Catalog, CatalogOverrides, KeywordOverride, KeywordRule, ProductOverride};
pub use classifier::{
    classify, normalize, CategoryScores, ClassifiableItem, ClassificationResult, MatchType,
    MIN_PARTIAL_LEN, MIN_SCORE,
};
pub use config::Config;
pub use entities::{category_name, Category, UNKNOWN_CATEGORY_NAME};
pub use error::{CatalogError, GroupingError, HintError};
pub use grouping::{group_classified, group_order, CategoryGroup, GroupedLine, GroupedOrder, OrderLine};
pub use observer::{ClassificationObserver, NoopObserver, TracingObserver};
pub use orders::{load_order_lines, parse_price_cents, read_order_lines};
pub use render::{format_cents, render_packing_slip};
pub use tables::KeywordKind;

#[cfg(feature = "enrichment")]
pub use hints::{classify_all_with_hints, classify_with_hints, HintSource, MegawinHintSource};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise `default_level` applies. Calling this
/// twice is harmless: the second subscriber is simply not installed.
pub fn init_tracing(default_level: &str) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
