use clap::{Command, arg};

pub const REPORT_CMD: &str = "report";

pub fn create_report_cli() -> Command {
    Command::new(REPORT_CMD)
        .about("Coverage of every structure and model of a query session file.")
        .arg_required_else_help(true)
        .arg(arg!(<session> "Query session toml file"))
        .arg(arg!(--json "Print the report as JSON"))
}
