use std::env;
use std::process;

use cyclepass::{cli, exits};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    exits::install_handlers();
    exits::disable_core_dumps();

    let args: Vec<String> = env::args().collect();
    process::exit(cli::run(args));
}
