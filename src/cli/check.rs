//! `fillcast check` - diagnostic checks.

use std::path::Path;

use crate::config::Config;
use crate::error::Result;

use super::output;

/// Validate a configuration file and report the outcome.
pub fn config(path: &Path) -> Result<()> {
    let config = Config::load(path)?;
    output::ok(&format!("config at {} is valid", path.display()));
    output::key_value("log level", &config.logging.level);
    output::key_value("log format", &config.logging.format);
    output::key_value("book ttl", format!("{}s", config.book.ttl_secs));
    Ok(())
}
