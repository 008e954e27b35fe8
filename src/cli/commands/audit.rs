use clap::{Arg, ArgAction, Command};

#[must_use]
pub fn command() -> Command {
    Command::new("audit")
        .about("Read the audit trail")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("list")
                .about("List audit logs, newest first")
                .arg(
                    Arg::new("user")
                        .long("user")
                        .help("Restrict to a single user id"),
                )
                .arg(
                    Arg::new("human")
                        .long("human")
                        .help("One summary line per entry instead of JSON")
                        .action(ArgAction::SetTrue),
                ),
        )
}
