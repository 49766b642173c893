//! Stringify command: print the compact text form of a built tree.

use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing::{info, info_span};
use vantage_vptree::VpTree;

use crate::cli::StringifyArgs;
use crate::search_cmd::prepare;

/// Run the stringify pipeline, printing the tree to stdout.
pub fn run(args: StringifyArgs) -> Result<()> {
    let mut out = io::stdout().lock();
    stringify_to(&args, &mut out)
}

fn stringify_to(args: &StringifyArgs, out: &mut impl Write) -> Result<()> {
    let _cmd = info_span!("stringify").entered();
    let mut setup = prepare(&args.tree)?;

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

    writeln!(out, "{}", tree.stringify()).context("failed to write tree")?;
    Ok(())
}
