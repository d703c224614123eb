use super::load;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::cost::trip_cost;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::colors::colorize_amount;
use crate::utils::date::parse_range;
use crate::utils::format_cost;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Trips { range, location } = cmd {
        let data = load(cfg)?;
        let stats = Core::build_stats(&data);
        let bounds = range.as_deref().map(parse_range).transpose()?;

        let mut table = Table::with_headers(&["START", "END", "DAYS", "LOCATION", "COST"]);
        let mut total = 0.0;

        for trip in &stats.trips {
            if let Some((from, to)) = bounds
                && (trip.start_date < from || trip.start_date > to)
            {
                continue;
            }
            if let Some(loc) = location
                && !trip.location.eq_ignore_ascii_case(loc.trim())
            {
                continue;
            }

            let cost = trip_cost(trip, &data.location_costs);
            total += cost;
            table.add_row(vec![
                trip.start_date.to_string(),
                trip.end_date.to_string(),
                trip.days.to_string(),
                trip.location.clone(),
                colorize_amount(&format_cost(cost), cost == 0.0),
            ]);
        }

        if table.is_empty() {
            info("No trips found.");
            return Ok(());
        }

        print!("{}", table.render());
        println!("\nTrips: {} | Cost: {}", table.rows.len(), format_cost(total));
    }
    Ok(())
}
