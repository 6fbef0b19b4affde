use clap::{Arg, ArgAction, Command, arg};

pub const CHAINS_CMD: &str = "chains";

pub fn create_chains_cli() -> Command {
    Command::new(CHAINS_CMD)
        .about("Reduce chain group notations and count the distinct residues they cover.")
        .arg_required_else_help(true)
        .arg(
            Arg::new("notations")
                .required(true)
                .num_args(1..)
                .action(ArgAction::Append)
                .help("Group notations like 'A/B=96-516', optionally comma-separated"),
        )
        .arg(arg!(--json "Print the result as JSON"))
}
