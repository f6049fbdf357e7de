//! fortuna - photo fortune readings from the command line.
//!
//! Run with: `fortuna read photo.jpg`

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use time::format_description::well_known::Rfc3339;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use fortuna_client::GeminiClient;
use fortuna_service::{Config, ReadingService};
use fortuna_store::ReadingStore;
use fortuna_types::Reading;

#[derive(Parser)]
#[command(name = "fortuna")]
#[command(author, version, about = "Photo fortune readings from the command line", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Data directory (overrides config)
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Output format for the history listing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit a photo and print its fortune
    Read {
        /// Path to a JPEG image
        image: PathBuf,
    },

    /// List past readings, newest first
    History {
        /// Number of readings to show (0 for all)
        #[arg(short, long, default_value = "0")]
        limit: usize,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Print one reading in full
    Show {
        /// Reading id
        id: Uuid,
    },

    /// Export the stored photo of a reading
    Image {
        /// Reading id
        id: Uuid,

        /// Where to write the image file
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Delete a reading and its photo
    Delete {
        /// Reading id
        id: Uuid,
    },

    /// Remove image files no reading references
    Gc,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing; quiet mode suppresses info-level logging.
    let filter = if cli.quiet {
        EnvFilter::new("warn")
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::load_default()?,
    };
    if let Some(dir) = &cli.data_dir {
        config.storage.dir = dir.clone();
    }
    config.validate()?;

    let client = GeminiClient::new(config.api.client_config())?;
    let store = ReadingStore::open(&config.storage.dir)?;
    let mut service = ReadingService::new(client, store);

    match cli.command {
        Commands::Read { image } => {
            let bytes = std::fs::read(&image)
                .with_context(|| format!("could not read image {}", image.display()))?;

            match service.submit(&bytes).await {
                Ok((fortune, reading)) => {
                    println!("{fortune}");
                    if !cli.quiet {
                        println!("\nSaved as {}", reading.id);
                    }
                }
                Err(err) => {
                    tracing::error!(error = %err, "reading failed");
                    bail!("{}", err.user_message());
                }
            }
        }

        Commands::History { limit, format } => {
            let readings = service.list();
            let shown = if limit == 0 {
                readings
            } else {
                &readings[..limit.min(readings.len())]
            };

            match format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(shown)?);
                }
                OutputFormat::Text => {
                    if shown.is_empty() {
                        println!("No readings yet.");
                    }
                    for reading in shown {
                        println!(
                            "{}  {}  {}",
                            reading.created_at.format(&Rfc3339)?,
                            reading.id,
                            summary_line(reading)
                        );
                    }
                }
            }
        }

        Commands::Show { id } => {
            let Some(reading) = service.get(id) else {
                bail!("no reading with id {id}");
            };
            println!("{}", reading.created_at.format(&Rfc3339)?);
            println!();
            println!("{}", reading.content);
        }

        Commands::Image { id, output } => {
            let Some(reading) = service.get(id) else {
                bail!("no reading with id {id}");
            };
            match service.get_image(reading) {
                Ok(bytes) => {
                    std::fs::write(&output, bytes)
                        .with_context(|| format!("could not write {}", output.display()))?;
                    println!("Wrote {}", output.display());
                }
                // A missing blob is recoverable: report it instead of
                // failing the command.
                Err(err @ fortuna_service::Error::Storage(fortuna_store::Error::NotFound(_))) => {
                    println!("{}", err.user_message());
                }
                Err(err) => return Err(err.into()),
            }
        }

        Commands::Delete { id } => {
            service.delete(id)?;
            println!("Deleted {id}");
        }

        Commands::Gc => {
            let removed = service.sweep_orphans()?;
            println!("Removed {removed} orphaned image file(s)");
        }
    }

    Ok(())
}

/// First line of the content, shortened for the listing.
fn summary_line(reading: &Reading) -> String {
    let first_line = reading.content.lines().next().unwrap_or_default();
    let mut summary: String = first_line.chars().take(60).collect();
    if first_line.chars().count() > 60 {
        summary.push_str("...");
    }
    summary
}
