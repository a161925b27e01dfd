use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Wayfarer service configuration TOML file
    #[arg(short, long, value_name = "*.toml")]
    pub config_file: String,
}
