//! Search command: build a tree over a point file and query it.

use std::io::{self, Write};

use anyhow::{Context, Result, bail};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, info_span};
use vantage_vptree::{Neighbor, TreeConfig, VpTree};

use crate::cli::{SearchArgs, TreeArgs};
use crate::config::{self, VantageConfig};
use crate::convert;
use crate::points::{self, PointMetric};

/// Everything needed to build a tree, resolved from config file and flags.
pub struct TreeSetup {
    pub config: VantageConfig,
    pub points: Vec<Vec<f64>>,
    pub metric: PointMetric,
    pub tree_config: TreeConfig,
    pub rng: StdRng,
}

/// Loads the config and point file and applies CLI overrides.
pub fn prepare(args: &TreeArgs) -> Result<TreeSetup> {
    let config = config::load(args.config.as_deref())?;
    let points = points::read_points(&args.input)?;
    let metric = convert::parse_metric(args.metric.as_deref().unwrap_or(&config.tree.metric))?;
    let tree_config = convert::build_tree_config(&config.tree, args.bucket_size);

    let rng = match args.seed.or(config.seed) {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    };

    Ok(TreeSetup {
        config,
        points,
        metric,
        tree_config,
        rng,
    })
}

/// Run the search pipeline, printing neighbors to stdout.
pub fn run(args: SearchArgs) -> Result<()> {
    let mut out = io::stdout().lock();
    search_to(&args, &mut out)
}

fn search_to(args: &SearchArgs, out: &mut impl Write) -> Result<()> {
    let _cmd = info_span!("search").entered();

    // 1. Resolve inputs
    let mut setup = prepare(&args.tree)?;
    let query = points::parse_row(&args.query).context("invalid --query")?;
    if let Some(first) = setup.points.first() {
        if first.len() != query.len() {
            bail!(
                "query has {} coordinates but points have {}",
                query.len(),
                first.len()
            );
        }
    }
    let search_config =
        convert::build_search_config(&setup.config.search, args.limit, args.max_distance)?;

    // 2. Build
    let tree = VpTree::build(
        &setup.points,
        setup.metric,
        &setup.tree_config,
        &mut setup.rng,
    );
    info!(
        n_points = tree.len(),
        depth = tree.root().depth(),
        "tree built"
    );

    // 3. Query
    let result = tree.search(&query, &search_config);
    info!(
        found = result.len(),
        comparisons = result.comparisons(),
        "search complete"
    );

    write_neighbors(out, result.neighbors()).context("failed to write results")?;
    Ok(())
}

/// Writes one `index<TAB>distance` line per neighbor.
fn write_neighbors(out: &mut impl Write, neighbors: &[Neighbor]) -> io::Result<()> {
    for n in neighbors {
        writeln!(out, "{}\t{}", n.index, n.distance)?;
    }
    out.flush()
}
