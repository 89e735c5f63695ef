use anyhow::Context;
use dns_access_log_domain::{CliOverrides, Config};

/// Loads and validates configuration. Runs before logging is initialised,
/// so failures surface through the returned error only.
pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(path, overrides).context("Failed to load configuration")?;
    config
        .validate()
        .context("Invalid access log configuration")?;
    Ok(config)
}
