use std::process;

use clap::Parser;
use kbsize::args::Args;
use kbsize::config::Config;

fn main() {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    let config = Config::build(&args).unwrap_or_else(|err| {
        eprintln!("Fatal Error: {err}");
        process::exit(1);
    });

    println!("{}", kbsize::render(&config));
}
