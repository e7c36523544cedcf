//! Key-value store CLI
//!
//! Command-line tools for table metadata transport files.
//!
//! # Commands
//!
//! - `pack` - Build a transport file from a JSON array of entries
//! - `inspect` - Display the contents of a transport file
//! - `get` - Read one property through its typed accessor
//! - `resolve` - Resolve the folders of an application

mod commands;

use clap::{Parser, Subcommand};
use kvstore_core::{Config, DEFAULT_ODK_FOLDER_NAME};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Key-value store metadata tools.
#[derive(Parser)]
#[command(name = "kvstore")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// External storage root holding the ODK folder
    #[arg(global = true, short, long)]
    root: Option<PathBuf>,

    /// Name of the ODK folder below the root
    #[arg(global = true, long, default_value = DEFAULT_ODK_FOLDER_NAME)]
    odk_folder: String,

    /// Enable verbose output
    #[arg(global = true, short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a transport file from a JSON array of entries
    Pack {
        /// JSON input file
        input: PathBuf,

        /// Transport file to write
        output: PathBuf,

        /// Table the entries belong to
        #[arg(short, long)]
        table_id: String,

        /// Revision token of the table
        #[arg(long)]
        rev_id: String,
    },

    /// Display the contents of a transport file
    Inspect {
        /// Transport file
        file: PathBuf,

        /// Sort entries by partition, aspect and key
        #[arg(short, long)]
        sorted: bool,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Read one property through its typed accessor
    Get {
        /// Transport file
        file: PathBuf,

        /// Partition of the property
        #[arg(short, long)]
        partition: String,

        /// Aspect of the property
        #[arg(short, long)]
        aspect: String,

        /// Key of the property
        #[arg(short, long)]
        key: String,

        /// Application name used in diagnostics
        #[arg(long, default_value = "default")]
        app_name: String,
    },

    /// Resolve the folders of an application
    Resolve {
        /// Application name
        app_name: String,

        /// Fragment to resolve below the application folder
        fragment: Option<String>,

        /// Create the standard folders first
        #[arg(short, long)]
        init: bool,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Show version information
    Version,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command {
        Commands::Pack {
            input,
            output,
            table_id,
            rev_id,
        } => {
            commands::pack::run(&input, &output, &table_id, &rev_id)?;
        }
        Commands::Inspect {
            file,
            sorted,
            format,
        } => {
            commands::inspect::run(&file, sorted, &format)?;
        }
        Commands::Get {
            file,
            partition,
            aspect,
            key,
            app_name,
        } => {
            commands::get::run(&file, &app_name, &partition, &aspect, &key)?;
        }
        Commands::Resolve {
            app_name,
            fragment,
            init,
            format,
        } => {
            let mut config = Config::new().odk_folder_name(cli.odk_folder);
            if let Some(root) = cli.root {
                config = config.external_root(root);
            }
            commands::resolve::run(&config, &app_name, fragment.as_deref(), init, &format)?;
        }
        Commands::Version => {
            println!("kvstore CLI v{}", env!("CARGO_PKG_VERSION"));
            println!("kvstore core v{}", kvstore_core::VERSION);
        }
    }

    Ok(())
}
