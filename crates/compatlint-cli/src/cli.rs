use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "compatlint",
    about = "compatlint: spec-url and obsolescence checks over browser compatibility data",
    version
)]
pub struct Cli {
    /// Stream findings and loader diagnostics to stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run every registered rule over the compat dataset
    Check {
        /// Compat data directory (or single JSON file)
        #[arg(long)]
        data: Option<String>,

        /// Browser release data: a JSON file or a directory of them
        #[arg(long)]
        browsers: Option<String>,

        /// Canonical specification catalog (browser-specs index.json)
        #[arg(long)]
        specs: Option<String>,

        /// Optional TOML file providing defaults for the paths above
        #[arg(long, default_value = crate::config::DEFAULT_CONFIG_PATH)]
        config: String,

        /// Only check this identifier and the features nested below it
        #[arg(long)]
        filter: Option<String>,

        /// Reference date for removal ages (YYYY-MM-DD, default: today UTC)
        #[arg(long)]
        today: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List registered rules and their exemptions
    Rules {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
