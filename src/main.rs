//! CLI entry point for mortorq-site

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mortorq_site::content::ContentKind;
use mortorq_site::{commands, server, Site};

#[derive(Parser)]
#[command(name = "mortorq-site")]
#[command(author = "Team 1515 MorTorq")]
#[command(version)]
#[command(about = "Content tools for the Team 1515 MorTorq website", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new site
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Create a new content file
    New {
        /// Kind of content (blog, leaders, outreach, sponsors)
        kind: ContentKind,

        /// Title or name of the new entry
        title: String,
    },

    /// List a content collection
    List {
        /// Kind of content (blog, leaders, outreach, sponsors)
        #[arg(default_value = "blog")]
        kind: ContentKind,

        /// Print records as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate every content file
    Check {
        /// Re-check on file changes
        #[arg(short, long)]
        watch: bool,
    },

    /// Write sitemap.xml into the public directory
    Sitemap,

    /// Start a local preview server
    #[command(alias = "s")]
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "mortorq_site=debug,info"
    } else {
        "mortorq_site=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing site in {:?}", target_dir);
            commands::init::init_site(&target_dir)?;
            println!("Initialized site in {:?}", target_dir);
        }

        Commands::New { kind, title } => {
            let site = Site::new(&base_dir)?;
            let path = commands::new::create_entry(&site, kind, &title)?;
            println!("Created: {:?}", path);
        }

        Commands::List { kind, json } => {
            let site = Site::new(&base_dir)?;
            commands::list::run(&site, kind, json)?;
        }

        Commands::Check { watch } => {
            let site = Site::new(&base_dir)?;
            if watch {
                if let Err(e) = site.check() {
                    println!("Content invalid: {}", e);
                }
                tokio::task::spawn_blocking(move || commands::check::watch(&site)).await??;
            } else {
                let summary = site.check()?;
                println!("Content OK: {}", summary);
            }
        }

        Commands::Sitemap => {
            let site = Site::new(&base_dir)?;
            let path = site.sitemap()?;
            println!("Generated {:?}", path);
        }

        Commands::Serve { port, ip } => {
            let site = Site::new(&base_dir)?;
            tracing::info!("Starting server at http://{}:{}", ip, port);
            server::start(&site, &ip, port).await?;
        }

        Commands::Version => {
            println!("mortorq-site version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
