use super::{load, reference_date};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::models::report::StatsReport;
use crate::ui::messages::header;
use crate::utils::colors::{CYAN, RESET};
use crate::utils::format_cost;
use crate::utils::formatting::{colorize_kind, or_placeholder, pad_right};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats { json, as_of } = cmd {
        let data = load(cfg)?;
        let today = reference_date(as_of, cfg)?;
        let report = Core::build_report(&data, today, cfg.recent_limit);

        if *json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            print_report(&report);
        }
    }
    Ok(())
}

fn print_report(r: &StatsReport) {
    header("Golf statistics");

    let line = |label: &str, value: String| {
        println!("{CYAN}{}{RESET} {}", pad_right(label, 18), value);
    };

    line("Term start:", r.term_start.to_string());
    line("As of:", r.current_date.to_string());
    line("Days since start:", r.days_since_start.to_string());
    line(
        "Days golfed:",
        format!("{} ({}%)", r.total_golf_days, r.percentage_golfed),
    );
    line("Trips:", r.total_trips.to_string());
    line("Estimated cost:", format_cost(r.estimated_total_cost));

    if !r.golf_days_by_location.is_empty() {
        println!("\nBy location:");
        for (location, days) in &r.golf_days_by_location {
            println!("  {} {days}", pad_right(location, 24));
        }
    }

    if !r.recent_golf_days.is_empty() {
        println!("\nRecent golf days:");
        for day in &r.recent_golf_days {
            println!(
                "  {}  {}  {}  {}",
                day.date,
                pad_right(&day.location, 22),
                colorize_kind(day.kind),
                or_placeholder(Some(day.source.as_str()).filter(|s| !s.is_empty()))
            );
        }
    }
}
