use super::{load, reference_date};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        what,
        file,
        range,
        as_of,
        force,
    } = cmd
    {
        let data = load(cfg)?;
        let today = reference_date(as_of, cfg)?;
        ExportLogic::export(
            &data,
            *format,
            *what,
            file,
            range.as_deref(),
            today,
            cfg.recent_limit,
            *force,
        )?;
    }
    Ok(())
}
