use std::env;

use time::format_description;
use tracing::{subscriber::set_global_default, Level};
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::FmtSubscriber;

/// Set this to anything to get a line per message on stderr.
pub const DEBUG_ENV_VAR: &str = "CODEGAME_DEBUG";

/// Installs a stderr subscriber. Stdout is left alone since some
/// competition runners capture it.
pub fn init_logger() -> anyhow::Result<()> {
    let level = if env::var_os(DEBUG_ENV_VAR).is_some() {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let timer = UtcTime::new(format_description::parse(
        "[year]-[month]-[day] [hour]:[minute]:[second]",
    )?);

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_timer(timer)
        .with_writer(std::io::stderr)
        .finish();

    set_global_default(subscriber)?;
    Ok(())
}
