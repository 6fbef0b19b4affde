use anyhow::{Context, Result};
use clap::ArgMatches;
use log::info;

use furret_coverage::{QuerySequence, StructureCoverage};

use crate::chains::handlers::build_group;

pub fn run_coverage(matches: &ArgMatches) -> Result<()> {
    let notations = matches
        .get_one::<String>("chains")
        .expect("Chain group notations are required.");
    let group = build_group(&[notations])?;

    let sequence_len = match matches.get_one::<usize>("length") {
        Some(length) => *length,
        None => {
            let residues = matches
                .get_one::<String>("sequence")
                .expect("Either --length or --sequence is required.");
            // the accession is not needed to measure coverage
            QuerySequence::new("query", residues)
                .context("Invalid sequence")?
                .len()
        }
    };

    info!(
        "{} chains cover {} of {} residues",
        group.len(),
        group.covered_residues(),
        sequence_len
    );
    let coverage = group
        .coverage_percent(sequence_len)
        .context("Failed to compute coverage")?;
    println!("{:.2}", coverage);

    Ok(())
}
