use clap::{Arg, Command};

#[must_use]
pub fn command() -> Command {
    Command::new("passkeys")
        .about("Manage registered passkeys")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("list")
                .about("List passkeys, for one user or the whole instance")
                .arg(
                    Arg::new("user")
                        .long("user")
                        .help("Restrict to a single user id"),
                ),
        )
        .subcommand(
            Command::new("update")
                .about("Rename a passkey")
                .arg(Arg::new("id").help("Passkey id").required(true))
                .arg(
                    Arg::new("name")
                        .long("name")
                        .help("New display name")
                        .required(true),
                ),
        )
        .subcommand(
            Command::new("delete")
                .about("Delete a passkey")
                .arg(Arg::new("id").help("Passkey id").required(true)),
        )
}
