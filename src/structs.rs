use clap::Parser;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the configuration file.
    #[arg(long, default_value = "config.toml")]
    pub config: String,

    /// Create the config file if it does not exist or is broken.
    #[arg(long)]
    pub create_config: bool,

    /// Print a freshly generated seed list using the configured length and count, then exit.
    #[arg(long)]
    pub generate_seeds: bool,

    /// Print a random passkey suitable for `hidden_passkey`, then exit.
    #[arg(long)]
    pub generate_passkey: bool,

    /// Load the persisted state, print a status summary as JSON, then exit.
    #[arg(long)]
    pub status: bool,
}
