use sslip_dns_domain::{CliOverrides, Config};

/// Loads configuration and reports which file it came from, if any.
pub fn load_config(
    path: Option<&str>,
    overrides: CliOverrides,
) -> anyhow::Result<(Config, Option<String>)> {
    let config = Config::load(path, overrides)?;
    let source = path.map(str::to_string).or_else(Config::get_config_path);
    Ok((config, source))
}
