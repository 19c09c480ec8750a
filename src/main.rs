// SPDX-License-Identifier: GPL-3.0-only

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "cardbox")]
#[command(about = "Personal loyalty card and barcode wallet")]
#[command(version)]
struct Cli {
    /// Card store file to use (defaults to the user data directory)
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List stored cards
    List,

    /// Add a new card
    Add {
        /// Display name of the card
        name: String,

        /// Code value to encode
        code: String,

        /// Symbology (code128, ean13, qr, pdf417, aztec)
        #[arg(short = 't', long = "type")]
        code_type: Option<String>,

        /// Free-form notes
        #[arg(long)]
        notes: Option<String>,

        /// Show the code as plain text instead of a barcode
        #[arg(long)]
        text_only: bool,
    },

    /// Show a card's details
    Show {
        /// Card id, id prefix, or exact name
        card: String,
    },

    /// Edit an existing card
    Edit {
        /// Card id, id prefix, or exact name
        card: String,

        /// New display name
        #[arg(long)]
        name: Option<String>,

        /// New code value
        #[arg(long)]
        code: Option<String>,

        /// New symbology (code128, ean13, qr, pdf417, aztec)
        #[arg(short = 't', long = "type")]
        code_type: Option<String>,

        /// New notes
        #[arg(long)]
        notes: Option<String>,
    },

    /// Remove a card
    Remove {
        /// Card id, id prefix, or exact name
        card: String,
    },

    /// Scan a barcode from an image file
    Scan {
        /// Image file to scan (PNG, JPEG, ...)
        image: PathBuf,

        /// Store the scanned code as a new card with this name
        #[arg(long)]
        name: Option<String>,
    },

    /// Export all cards to a backup file
    Export {
        /// Output file path (default: cardbox_backup_TIMESTAMP.json)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Import cards from a backup file
    Import {
        /// Backup file to import
        file: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    // Set RUST_LOG environment variable to control log level
    // Examples: RUST_LOG=debug, RUST_LOG=cardbox=debug, RUST_LOG=info
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(true)
        .with_level(true)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::List => cli::list_cards(cli.store),
        Commands::Add {
            name,
            code,
            code_type,
            notes,
            text_only,
        } => cli::add_card(name, code, code_type, notes, text_only, cli.store),
        Commands::Show { card } => cli::show_card(card, cli.store),
        Commands::Edit {
            card,
            name,
            code,
            code_type,
            notes,
        } => cli::edit_card(card, name, code, code_type, notes, cli.store),
        Commands::Remove { card } => cli::remove_card(card, cli.store),
        Commands::Scan { image, name } => cli::scan_image(image, name, cli.store),
        Commands::Export { output } => cli::export_backup(output, cli.store),
        Commands::Import { file } => cli::import_backup(file, cli.store),
    }
}
