use clap::{Arg, ArgAction, Command};

/// Session commands live at the top level: login, mfa, logout, whoami,
/// register, health.
pub fn with_commands(command: Command) -> Command {
    command
        .subcommand(
            Command::new("login")
                .about("Sign in with email and password")
                .arg(
                    Arg::new("email")
                        .short('e')
                        .long("email")
                        .help("Account email")
                        .required(true),
                )
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
            Command::new("mfa")
                .about("Complete a pending login with a TOTP code")
                .arg(Arg::new("code").help("Six digit TOTP code").required(true))
                .arg(
                    Arg::new("flow-id")
                        .long("flow-id")
                        .help("MFA flow id printed by the login command")
                        .required(true),
                ),
        )
        .subcommand(Command::new("logout").about("Discard the stored session token"))
        .subcommand(Command::new("whoami").about("Show the account the stored session belongs to"))
        .subcommand(
            Command::new("register")
                .about("Create a user account")
                .arg(
                    Arg::new("email")
                        .short('e')
                        .long("email")
                        .help("Account email")
                        .required(true),
                )
                .arg(
                    Arg::new("password")
                        .short('p')
                        .long("password")
                        .help("Account password")
                        .env("AUTHCTL_PASSWORD")
                        .required(true),
                )
                .arg(
                    Arg::new("first-name")
                        .long("first-name")
                        .help("Given name")
                        .required(true),
                )
                .arg(
                    Arg::new("last-name")
                        .long("last-name")
                        .help("Family name")
                        .default_value(""),
                )
                .arg(
                    Arg::new("code")
                        .long("code")
                        .help("Registration code when sign-ups are restricted"),
                ),
        )
        .subcommand(
            Command::new("health")
                .about("Probe whether the API is reachable")
                .arg(
                    Arg::new("quiet")
                        .short('q')
                        .long("quiet")
                        .help("Exit code only, no output")
                        .action(ArgAction::SetTrue),
                ),
        )
}
