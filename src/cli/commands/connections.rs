use clap::{Arg, Command};

#[must_use]
pub fn command() -> Command {
    Command::new("connections")
        .about("Inspect and revoke OAuth connections")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("list")
                .about("List the OAuth applications a user has authorized")
                .arg(
                    Arg::new("user")
                        .long("user")
                        .help("User id; defaults to the signed-in user"),
                ),
        )
        .subcommand(
            Command::new("disconnect")
                .about("Revoke the signed-in user's connection to an application")
                .arg(
                    Arg::new("application-id")
                        .help("Application id of the connection")
                        .required(true),
                ),
        )
}
