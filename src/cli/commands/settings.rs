use clap::{Arg, Command};

#[must_use]
pub fn command() -> Command {
    Command::new("settings")
        .about("Read and change instance settings")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(Command::new("get").about("Show instance settings"))
        .subcommand(
            Command::new("set")
                .about("Replace instance settings (admin only)")
                .arg(
                    Arg::new("allow-registration")
                        .long("allow-registration")
                        .help("Whether self-registration is open")
                        .value_parser(clap::value_parser!(bool))
                        .required(true),
                )
                .arg(
                    Arg::new("allow-oauth-apps")
                        .long("allow-oauth-apps")
                        .help("Whether regular users may own OAuth applications")
                        .value_parser(clap::value_parser!(bool))
                        .required(true),
                ),
        )
}
