use clap::{ArgGroup, Command, arg, value_parser};

pub const COVERAGE_CMD: &str = "coverage";

pub fn create_coverage_cli() -> Command {
    Command::new(COVERAGE_CMD)
        .about("Percentage of a sequence covered by a chain group.")
        .arg_required_else_help(true)
        .arg(arg!(-c --chains <NOTATIONS> "Comma-separated group notations, e.g. 'A/B=96-516, C=9-94'").required(true))
        .arg(
            arg!(-l --length <LENGTH> "Length of the full sequence")
                .value_parser(value_parser!(usize)),
        )
        .arg(arg!(-s --sequence <SEQUENCE> "The full residue sequence"))
        .group(
            ArgGroup::new("target")
                .args(["length", "sequence"])
                .required(true),
        )
}
