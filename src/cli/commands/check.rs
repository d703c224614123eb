use super::{load, reference_date};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::validate;
use crate::ui::messages::{success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Check { as_of } = cmd {
        let data = load(cfg)?;
        let today = reference_date(as_of, cfg)?;
        let issues = validate(&data, today);

        if issues.is_empty() {
            success(format!("{} events checked, no issues found", data.events.len()));
            return Ok(());
        }

        for issue in &issues {
            warning(issue);
        }
        warning(format!(
            "{} issue(s) in {} events",
            issues.len(),
            data.events.len()
        ));
    }
    Ok(())
}
