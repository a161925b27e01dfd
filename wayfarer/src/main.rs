use clap::Parser;
use log::error;
use wayfarer::app::cli::cli_args::CliArgs;
use wayfarer::app::cli::run;

fn main() {
    env_logger::init();

    let args = CliArgs::parse();
    if let Err(e) = run::run(&args) {
        error!("{}", e);
        std::process::exit(1);
    }
}
