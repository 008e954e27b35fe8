use clap::{Arg, ArgAction, Command};

#[must_use]
pub fn command() -> Command {
    Command::new("apps")
        .about("Manage OAuth applications")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("create")
                .about("Register an OAuth application")
                .arg(Arg::new("name").help("Application name").required(true))
                .arg(
                    Arg::new("description")
                        .long("description")
                        .help("Short description shown on the consent screen"),
                )
                .arg(
                    Arg::new("redirect-uri")
                        .long("redirect-uri")
                        .help("Allowed redirect URI, repeatable")
                        .action(ArgAction::Append)
                        .required(true),
                ),
        )
        .subcommand(Command::new("list").about("List OAuth applications"))
        .subcommand(
            Command::new("get")
                .about("Show an OAuth application")
                .arg(Arg::new("id").help("Application id").required(true)),
        )
        .subcommand(
            Command::new("update")
                .about("Update an OAuth application")
                .arg(Arg::new("id").help("Application id").required(true))
                .arg(Arg::new("name").long("name").help("New name"))
                .arg(
                    Arg::new("description")
                        .long("description")
                        .help("New description"),
                )
                .arg(
                    Arg::new("redirect-uri")
                        .long("redirect-uri")
                        .help("Replacement redirect URI, repeatable")
                        .action(ArgAction::Append),
                ),
        )
        .subcommand(
            Command::new("delete")
                .about("Delete an OAuth application")
                .arg(Arg::new("id").help("Application id").required(true)),
        )
        .subcommand(
            Command::new("authorize")
                .about("Authorize an application for the signed-in user")
                .arg(
                    Arg::new("client-id")
                        .long("client-id")
                        .help("Application client id")
                        .required(true),
                )
                .arg(
                    Arg::new("redirect-uri")
                        .long("redirect-uri")
                        .help("Redirect URI registered by the application")
                        .required(true),
                )
                .arg(
                    Arg::new("scope")
                        .long("scope")
                        .help("Requested scope, repeatable")
                        .action(ArgAction::Append)
                        .required(true),
                ),
        )
}
