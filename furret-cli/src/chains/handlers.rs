use std::fmt::Write as FmtWrite;

use anyhow::{Context, Result};
use clap::ArgMatches;
use serde::Serialize;

use furret_core::models::{Chain, ChainGroup};

#[derive(Serialize)]
struct ChainsOutput<'a> {
    chains: Vec<&'a Chain>,
    merged: Option<Chain>,
    covered_residues: u32,
}

pub fn run_chains(matches: &ArgMatches) -> Result<()> {
    let notations: Vec<&String> = matches
        .get_many::<String>("notations")
        .expect("At least one group notation is required.")
        .collect();

    let group = build_group(&notations)?;

    if matches.get_flag("json") {
        let merged = group.merged();
        let output = ChainsOutput {
            chains: group.iter().collect(),
            covered_residues: merged.as_ref().map_or(0, Chain::len),
            merged,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print!("{}", render_group(&group)?);
    }

    Ok(())
}

/// Every argument may hold several comma-separated notations.
pub(crate) fn build_group<S: AsRef<str>>(notations: &[S]) -> Result<ChainGroup> {
    let flat = notations
        .iter()
        .flat_map(|n| n.as_ref().split(','))
        .map(str::trim)
        .filter(|n| !n.is_empty());
    ChainGroup::try_from_notations(flat).context("Failed to parse chain group")
}

fn render_group(group: &ChainGroup) -> Result<String> {
    let mut out = String::new();
    for chain in group {
        writeln!(out, "{}\t{} residues", chain, chain.len())?;
    }
    if let Some(merged) = group.merged() {
        writeln!(out, "merged {}\t{} residues", merged, merged.len())?;
    }
    Ok(out)
}
