use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;

use furret_coverage::{CoverageReport, QuerySession};

pub fn run_report(matches: &ArgMatches) -> Result<()> {
    let session_file = matches
        .get_one::<String>("session")
        .expect("A path to a query session file is required.");

    let session = QuerySession::try_from(Path::new(session_file))
        .with_context(|| format!("Failed to read query session {}", session_file))?;
    let report = CoverageReport::from_session(&session)
        .with_context(|| format!("Failed to compute coverage for {}", session.accession))?;

    if matches.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report);
    }

    Ok(())
}
