mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use cmd::config::ConfigSubcommand;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "activities",
    about = "Mergington High School extracurricular signups - serve and inspect the activity directory",
    version,
    propagate_version = true
)]
struct Cli {
    /// Project root holding activities.yaml (default: auto-detect)
    #[arg(long, global = true, env = "ACTIVITIES_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default activities.yaml with the seed catalog
    Init,

    /// List the activities the server starts with
    List,

    /// Inspect or validate the configuration
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },

    /// Start the HTTP server
    Serve {
        /// Port to listen on (overrides server.port; 0 = OS-assigned)
        #[arg(long, env = "ACTIVITIES_PORT")]
        port: Option<u16>,

        /// Address to bind (overrides server.host)
        #[arg(long)]
        host: Option<String>,

        /// Don't open browser automatically
        #[arg(long)]
        no_open: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = match &cli.command {
        Commands::Serve { .. } => tracing::Level::INFO,
        _ => tracing::Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .init();

    let root = root::resolve_root(cli.root.as_deref());

    let result = match cli.command {
        Commands::Init => cmd::init::run(&root),
        Commands::List => cmd::list::run(&root, cli.json),
        Commands::Config { subcommand } => cmd::config::run(&root, subcommand, cli.json),
        Commands::Serve {
            port,
            host,
            no_open,
        } => cmd::serve::run(
            &root,
            cmd::serve::ServeArgs {
                port,
                host,
                no_open,
            },
        ),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
