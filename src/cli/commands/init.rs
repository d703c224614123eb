use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// Creates:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - a data file template, unless the data file already exists
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    info("Initializing golfstats…");

    // cfg.data_file already holds the resolved --data path
    let custom = cli.data.as_ref().map(|_| cfg.data_file.clone());
    let data_path = Config::init_all(custom, cli.test)?;

    if !cli.test {
        info(format!("Config file : {}", Config::config_file().display()));
    }
    info(format!("Data file   : {}", data_path.display()));

    success("golfstats initialization completed!");
    Ok(())
}
