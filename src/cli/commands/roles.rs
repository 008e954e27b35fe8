use clap::{Arg, Command};

#[must_use]
pub fn command() -> Command {
    Command::new("roles")
        .about("Manage roles")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("create")
                .about("Create a role")
                .arg(Arg::new("name").help("Role name").required(true)),
        )
        .subcommand(Command::new("list").about("List all roles"))
        .subcommand(
            Command::new("get")
                .about("Show a role")
                .arg(Arg::new("id").help("Role id").required(true)),
        )
        .subcommand(
            Command::new("update")
                .about("Rename a role")
                .arg(Arg::new("id").help("Role id").required(true))
                .arg(
                    Arg::new("name")
                        .long("name")
                        .help("New role name")
                        .required(true),
                ),
        )
        .subcommand(
            Command::new("delete")
                .about("Delete a role")
                .arg(Arg::new("id").help("Role id").required(true)),
        )
}
