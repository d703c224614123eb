use super::load;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::date::parse_range;
use crate::utils::formatting::{colorize_kind, or_placeholder};
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { period, golf_only } = cmd {
        let data = load(cfg)?;
        let bounds = period.as_deref().map(parse_range).transpose()?;

        let mut table = Table::with_headers(&["DATE", "TYPE", "LOCATION", "SOURCE"]);

        for (date, ev) in &data.events {
            if let Some((from, to)) = bounds
                && (*date < from || *date > to)
            {
                continue;
            }
            if *golf_only && !ev.is_golf() {
                continue;
            }

            table.add_row(vec![
                date.to_string(),
                colorize_kind(ev.kind),
                ev.location.clone(),
                or_placeholder(ev.source()),
            ]);
        }

        if table.is_empty() {
            info("No events found.");
        } else {
            print!("{}", table.render());
        }
    }
    Ok(())
}
