use anyhow::Result;
use clap::{Parser, Subcommand};
use fnindex::config::Config;
use fnindex::scanner;
use fnindex::server::{self, RootProvider};
use fnindex::types::ScanOptions;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(
    name = "fnindex",
    version,
    about = "Function index scanner for TypeScript/JavaScript source trees"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan a source tree and print the function catalog as JSON
    Scan {
        /// Root directory to scan
        root: PathBuf,

        /// Keep only records carrying this documentation tag
        #[arg(long)]
        tag: Option<String>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Serve the function catalog over HTTP
    Serve {
        /// Repository root to scan on each request
        #[arg(long, env = "FNINDEX_ROOT")]
        root: Option<PathBuf>,

        /// Address to bind, ip:port
        #[arg(long)]
        bind: Option<String>,

        /// Path to a TOML configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Scan { root, tag, pretty } => {
            let options = ScanOptions { tag };
            let records = scanner::scan_with_options(&root, &options)?;
            let output = if pretty {
                serde_json::to_string_pretty(&records)?
            } else {
                serde_json::to_string(&records)?
            };
            println!("{}", output);
        }
        Commands::Serve { root, bind, config } => {
            let mut config = match config {
                Some(path) => Config::from_file(&path)?,
                None => Config::default(),
            };
            config.apply_env_overrides();
            if let Some(root) = root {
                config.scan.root = Some(root);
            }
            if let Some(bind) = bind {
                config.server.bind = bind;
            }
            config.validate()?;

            let repo_root = config.scan.root.clone();
            let provider: RootProvider = Arc::new(move || repo_root.clone());
            server::serve(&config.server.bind, provider).await?;
        }
    }

    Ok(())
}
