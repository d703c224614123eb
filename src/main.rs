//! golfstats main entrypoint.

use golfstats::run;
use golfstats::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
