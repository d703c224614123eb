use super::{load, reference_date};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::utils::colors::colorize_answer;
use crate::utils::formatting::{colorize_kind, or_placeholder};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Today { date } = cmd {
        let data = load(cfg)?;
        let day = reference_date(date, cfg)?;

        match Core::golf_on(&data, day) {
            Some(ev) => {
                println!("{day}: golfing? {}", colorize_answer(true));
                println!("  Location: {}", ev.location);
                println!("  Type:     {}", colorize_kind(ev.kind));
                println!("  Source:   {}", or_placeholder(ev.source()));
            }
            None => {
                println!("{day}: golfing? {}", colorize_answer(false));
                // travel days are still worth showing
                if let Some(ev) = data.events.get(&day) {
                    println!("  {} at {}", colorize_kind(ev.kind), ev.location);
                }
            }
        }
    }
    Ok(())
}
