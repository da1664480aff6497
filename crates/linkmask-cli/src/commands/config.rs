use anyhow::Result;
use linkmask_config::Config;
use std::path::Path;

use super::load_config;

pub fn handle(config_path: Option<&Path>, path_only: bool) -> Result<()> {
    print!("{}", render(config_path, path_only)?);
    Ok(())
}

/// Config file path, or the effective config as TOML. The path is reported
/// without touching the file.
fn render(config_path: Option<&Path>, path_only: bool) -> Result<String> {
    if path_only {
        let path = config_path
            .map(Path::to_path_buf)
            .unwrap_or_else(Config::config_path);
        return Ok(format!("{}\n", path.display()));
    }

    load_config(config_path)?.to_toml()
}
