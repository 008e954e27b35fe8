use crate::cli::{actions::Action, commands, dispatch::handler, globals::GlobalArgs};
use crate::session::SessionStore;
use anyhow::Result;
use std::path::PathBuf;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Registry};

/// Start the CLI: parse arguments, initialize logging, and resolve the
/// requested action.
///
/// # Errors
/// Returns an error on invalid arguments or when the logging subscriber
/// cannot be installed.
pub fn start() -> Result<(Action, GlobalArgs)> {
    let matches = commands::new().get_matches();

    let verbosity_level = match matches.get_one::<u8>("verbosity").map_or(0, |&v| v) {
        0 => tracing::Level::ERROR,
        1 => tracing::Level::WARN,
        2 => tracing::Level::INFO,
        3 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    let fmt_layer = fmt::layer()
        .with_file(true)
        .with_line_number(true)
        .with_target(false);

    // RUST_LOG=
    let env_filter = EnvFilter::builder()
        .with_default_directive(verbosity_level.into())
        .from_env_lossy();

    let subscriber = Registry::default().with(fmt_layer).with(env_filter);

    tracing::subscriber::set_global_default(subscriber)?;

    let globals = globals(&matches)?;
    let action = handler(&matches)?;

    Ok((action, globals))
}

fn globals(matches: &clap::ArgMatches) -> Result<GlobalArgs> {
    let api_url = matches
        .get_one::<String>("url")
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("missing required argument: --url"))?;

    let session_file = match matches.get_one::<String>("session-file") {
        Some(path) => PathBuf::from(path),
        None => SessionStore::default_path()?,
    };

    let mut globals = GlobalArgs::new(api_url, session_file);
    globals.portal_url = matches.get_one::<String>("portal-url").cloned();

    Ok(globals)
}
