use clap::{Arg, ArgAction, Command};

#[must_use]
pub fn command() -> Command {
    Command::new("tokens")
        .about("Manage registration (invite) tokens")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("create")
                .about("Create a registration token")
                .arg(
                    Arg::new("max-uses")
                        .long("max-uses")
                        .help("How many accounts may register with the token")
                        .default_value("1")
                        .value_parser(clap::value_parser!(u32)),
                )
                .arg(
                    Arg::new("expires-in")
                        .long("expires-in")
                        .help("Lifetime in seconds; omit for no expiry")
                        .value_parser(clap::value_parser!(u64)),
                ),
        )
        .subcommand(Command::new("list").about("List registration tokens"))
        .subcommand(
            Command::new("get")
                .about("Show a registration token")
                .arg(Arg::new("id").help("Token id").required(true)),
        )
        .subcommand(
            Command::new("update")
                .about("Update a registration token")
                .arg(Arg::new("id").help("Token id").required(true))
                .arg(
                    Arg::new("max-uses")
                        .long("max-uses")
                        .help("New use limit")
                        .value_parser(clap::value_parser!(u32)),
                )
                .arg(
                    Arg::new("expires-in")
                        .long("expires-in")
                        .help("New lifetime in seconds")
                        .value_parser(clap::value_parser!(u64)),
                )
                .arg(
                    Arg::new("auto-role")
                        .long("auto-role")
                        .help("Role id granted on registration, repeatable")
                        .action(ArgAction::Append),
                ),
        )
        .subcommand(
            Command::new("delete")
                .about("Delete a registration token")
                .arg(Arg::new("id").help("Token id").required(true)),
        )
}
