use std::io;
use std::process;

use log::{error, info};

use chess_rules::terminal::{Session, SessionConfig};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match SessionConfig::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", err);
            eprintln!("usage: chess_rules [--pov white|black] [--auto-queen] [--hints]");
            process::exit(2);
        }
    };
    info!("starting session with {:?}", config);

    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), io::stdout(), config);
    match session.run() {
        Ok(Some(result)) => info!("game over: {}", result.describe()),
        Ok(None) => info!("session ended"),
        Err(err) => {
            error!("terminal i/o failed: {}", err);
            process::exit(1);
        }
    }
}
