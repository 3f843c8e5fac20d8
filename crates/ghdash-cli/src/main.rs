use clap::{Parser, Subcommand};

mod profile;

#[derive(Debug, Parser)]
#[command(name = "ghdash-cli")]
#[command(about = "GitHub profile dashboard command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch a profile and print its bio, pinned repositories, and avatar URL
    Profile {
        /// Profile to fetch, e.g. "octocat"
        username: String,

        /// Print the record as pretty JSON instead of the text dump
        #[arg(long)]
        json: bool,
    },
    /// Fetch the pinned-repository cards and repository count, printed as JSON
    Details {
        /// Profile to fetch, e.g. "octocat"
        username: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ghdash_core::load_app_config()?;
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Profile { username, json } => {
            profile::run_profile(&config, &username, json).await
        }
        Commands::Details { username } => profile::run_details(&config, &username).await,
    }
}
