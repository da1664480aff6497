pub mod config;
pub mod mask;
pub mod run;

use anyhow::Result;
use linkmask_config::Config;
use std::path::Path;

/// Load the explicit config file if one was given, else the default location
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}
