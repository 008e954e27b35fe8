use clap::{Arg, Command};

#[must_use]
pub fn command() -> Command {
    Command::new("users")
        .about("Manage user accounts")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(Command::new("list").about("List all user accounts"))
        .subcommand(
            Command::new("update")
                .about("Update a user")
                .arg(Arg::new("id").help("User id").required(true))
                .arg(Arg::new("email").long("email").help("New email"))
                .arg(Arg::new("password").long("password").help("New password"))
                .arg(Arg::new("first-name").long("first-name").help("New given name"))
                .arg(Arg::new("last-name").long("last-name").help("New family name"))
                .arg(
                    Arg::new("role")
                        .long("role")
                        .help("Replacement role id, repeatable")
                        .action(clap::ArgAction::Append),
                )
                .arg(
                    Arg::new("disabled")
                        .long("disabled")
                        .help("Disable (true) or re-enable (false) the account")
                        .value_parser(clap::value_parser!(bool)),
                ),
        )
        .subcommand(
            Command::new("delete")
                .about("Delete a user")
                .arg(Arg::new("id").help("User id").required(true)),
        )
        .subcommand(
            Command::new("enable-totp")
                .about("Start enabling TOTP for a user")
                .arg(Arg::new("id").help("User id").required(true))
                .arg(
                    Arg::new("password")
                        .short('p')
                        .long("password")
                        .help("Account password")
                        .env("AUTHCTL_PASSWORD")
                        .required(true),
                ),
        )
        .subcommand(
            Command::new("disable-totp")
                .about("Disable TOTP for a user")
                .arg(Arg::new("id").help("User id").required(true))
                .arg(Arg::new("code").long("code").help("Current TOTP code"))
                .arg(
                    Arg::new("password")
                        .short('p')
                        .long("password")
                        .help("Account password")
                        .env("AUTHCTL_PASSWORD"),
                ),
        )
}
