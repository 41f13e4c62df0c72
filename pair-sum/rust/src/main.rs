use std::{env, process::ExitCode};

use pair_sum::{config, find_pair, input};
use tracing::{debug, error, info};

const NO_PAIR: u8 = 1;
const INVALID_INPUT: u8 = 2;

fn main() -> ExitCode {
    // Config has to exist before the subscriber, so its errors go straight to stderr
    let config = match config::get() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::from(INVALID_INPUT);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(config.env_filter())
        .with_writer(std::io::stderr)
        .init();

    info!(
        strategy = config.strategy().name(),
        log_level = config.log_level(),
        "initialized config"
    );

    let query = match input::parse_args(env::args().skip(1)) {
        Ok(query) => query,
        Err(err) => {
            error!(%err, "invalid input");
            eprintln!("error: {err}");
            return ExitCode::from(INVALID_INPUT);
        }
    };

    debug!(sum = query.target, len = query.nums.len(), "parsed input");

    match find_pair(config.strategy(), &query.nums, query.target) {
        Some(pair) => {
            info!(strategy = config.strategy().name(), %pair, "found pair");
            println!("{pair}");
            ExitCode::SUCCESS
        }
        None => {
            info!(strategy = config.strategy().name(), "no pair found");
            println!("no pair sums to {}", query.target);
            ExitCode::from(NO_PAIR)
        }
    }
}
