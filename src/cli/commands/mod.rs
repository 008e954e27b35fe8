pub mod apps;
pub mod audit;
pub mod auth;
pub mod connections;
pub mod passkeys;
pub mod roles;
pub mod settings;
pub mod tokens;
pub mod users;

use clap::{
    builder::{
        styling::{AnsiColor, Effects, Styles},
        ValueParser,
    },
    Arg, ColorChoice, Command,
};

pub fn validator_log_level() -> ValueParser {
    ValueParser::from(move |level: &str| -> std::result::Result<u8, String> {
        if let Ok(parsed) = level.parse::<u8>() {
            // Successfully parsed as a number
            if parsed <= 5 {
                return Ok(parsed);
            }
        }

        match level.to_lowercase().as_str() {
            "error" => Ok(0),
            "warn" => Ok(1),
            "info" => Ok(2),
            "debug" => Ok(3),
            "trace" => Ok(4),
            _ => Err("invalid log level".to_string()),
        }
    })
}

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let long_version: &'static str = Box::leak(
        format!(
            "{} - {}",
            env!("CARGO_PKG_VERSION"),
            crate::GIT_COMMIT_HASH
        )
        .into_boxed_str(),
    );

    let command = Command::new("authctl")
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("url")
                .short('u')
                .long("url")
                .help("Base URL of the identity provider API")
                .env("AUTHCTL_URL")
                .global(true)
                .required(false),
        )
        .arg(
            Arg::new("session-file")
                .long("session-file")
                .help("Path of the stored session token (default: ~/.config/authctl/session)")
                .env("AUTHCTL_SESSION_FILE")
                .global(true),
        )
        .arg(
            Arg::new("portal-url")
                .long("portal-url")
                .help("Origin used for shareable links such as registration URLs")
                .env("AUTHCTL_PORTAL_URL")
                .global(true),
        )
        .arg(
            Arg::new("verbosity")
                .short('v')
                .long("verbose")
                .help("Verbosity level: ERROR, WARN, INFO, DEBUG, TRACE (default: ERROR)")
                .env("AUTHCTL_LOG_LEVEL")
                .global(true)
                .action(clap::ArgAction::Count)
                .value_parser(validator_log_level()),
        );

    let command = auth::with_commands(command);

    command
        .subcommand(users::command())
        .subcommand(roles::command())
        .subcommand(apps::command())
        .subcommand(tokens::command())
        .subcommand(connections::command())
        .subcommand(audit::command())
        .subcommand(settings::command())
        .subcommand(passkeys::command())
        .subcommand(
            Command::new("version")
                .about("Show the build version, optionally checking for a newer release")
                .arg(
                    Arg::new("check")
                        .long("check")
                        .help("Query the release tags for a newer version")
                        .action(clap::ArgAction::SetTrue),
                ),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let command = new();

        assert_eq!(command.get_name(), "authctl");
        assert_eq!(
            command.get_about().map(ToString::to_string),
            Some(env!("CARGO_PKG_DESCRIPTION").to_string())
        );
        assert_eq!(
            command.get_version().map(ToString::to_string),
            Some(env!("CARGO_PKG_VERSION").to_string())
        );
    }

    #[test]
    fn test_global_args() {
        let command = new();
        let matches = command.get_matches_from(vec![
            "authctl",
            "--url",
            "https://id.example.com",
            "--session-file",
            "/tmp/authctl-session",
            "health",
        ]);

        assert_eq!(
            matches.get_one::<String>("url").map(String::as_str),
            Some("https://id.example.com")
        );
        assert_eq!(
            matches
                .get_one::<String>("session-file")
                .map(String::as_str),
            Some("/tmp/authctl-session")
        );
    }

    #[test]
    fn test_check_env() {
        temp_env::with_vars(
            [
                ("AUTHCTL_URL", Some("https://id.example.com")),
                ("AUTHCTL_LOG_LEVEL", Some("info")),
            ],
            || {
                let command = new();
                let matches = command.get_matches_from(vec!["authctl", "health"]);
                assert_eq!(
                    matches.get_one::<String>("url").map(String::as_str),
                    Some("https://id.example.com")
                );
                assert_eq!(matches.get_one::<u8>("verbosity").copied(), Some(2));
            },
        );
    }

    #[test]
    fn test_check_log_level_env() {
        // loop cover all possible value_parse
        let levels = vec!["error", "warn", "info", "debug", "trace"];
        for (index, &level) in levels.iter().enumerate() {
            temp_env::with_vars(
                [
                    ("AUTHCTL_LOG_LEVEL", Some(level)),
                    ("AUTHCTL_URL", Some("https://id.example.com")),
                ],
                || {
                    let command = new();
                    let matches = command.get_matches_from(vec!["authctl", "health"]);
                    assert_eq!(
                        matches.get_one::<u8>("verbosity").copied(),
                        Some(index as u8)
                    );
                },
            );
        }
    }

    #[test]
    fn test_check_log_level_verbosity() {
        let levels = vec!["error", "warn", "info", "debug", "trace"];
        for (index, _) in levels.iter().enumerate() {
            temp_env::with_vars([("AUTHCTL_LOG_LEVEL", None::<String>)], || {
                let mut args = vec![
                    "authctl".to_string(),
                    "--url".to_string(),
                    "https://id.example.com".to_string(),
                ];

                if index > 0 {
                    let v = format!("-{}", "v".repeat(index));
                    args.push(v);
                }

                args.push("health".to_string());

                let command = new();
                let matches = command.get_matches_from(args);

                assert_eq!(
                    matches.get_one::<u8>("verbosity").copied(),
                    Some(index as u8)
                );
            });
        }
    }
}
