//! Pure conversion functions: TOML config + CLI overrides -> crate API config types.

use anyhow::{Result, bail};
use vantage_vptree::{SearchConfig, TreeConfig};

use crate::config::{SearchToml, TreeToml};
use crate::points::PointMetric;

/// Parses a metric name string into the corresponding enum variant.
pub fn parse_metric(s: &str) -> Result<PointMetric> {
    match s.to_lowercase().as_str() {
        "euclidean" | "l2" => Ok(PointMetric::Euclidean),
        "manhattan" | "l1" => Ok(PointMetric::Manhattan),
        "chebyshev" | "linf" => Ok(PointMetric::Chebyshev),
        other => bail!("unknown metric: {other:?}"),
    }
}

/// Builds a `TreeConfig`, letting a CLI bucket size override the file.
pub fn build_tree_config(t: &TreeToml, bucket_size: Option<usize>) -> TreeConfig {
    TreeConfig::new().with_bucket_size(bucket_size.unwrap_or(t.bucket_size))
}

/// Builds a `SearchConfig`, letting CLI values override the file.
///
/// The radius must be positive; NaN is rejected.
pub fn build_search_config(
    s: &SearchToml,
    limit: Option<usize>,
    max_distance: Option<f64>,
) -> Result<SearchConfig> {
    let mut config = SearchConfig::new().with_limit(limit.unwrap_or(s.limit));
    if let Some(r) = max_distance.or(s.max_distance) {
        if r.is_nan() || r <= 0.0 {
            bail!("max_distance must be positive, got {r}");
        }
        config = config.with_max_distance(r);
    }
    Ok(config)
}
