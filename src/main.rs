use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use barbertill::cli::{
    handle_add_command, handle_export_command, handle_reset_command, handle_summary_command,
};
use barbertill::config::{paths::TillPaths, settings::Settings};
use barbertill::storage::Storage;

#[derive(Parser)]
#[command(
    name = "barbertill",
    version,
    about = "Terminal-based barbershop point-of-sale and income-split tracker",
    long_about = "barbertill records each chair's haircut transactions, splits the \
                  day's takings between the barbers and the shop owner, and exports \
                  the day to CSV. Run without a subcommand to open the interactive \
                  till."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,

    /// Record a haircut for a barber
    Add {
        /// Barber name (as listed in the roster)
        barber: String,
        /// Haircut amount, e.g. 500 or 500.50
        amount: String,
        /// Color packets used
        packets: String,
    },

    /// Print today's summary
    Summary,

    /// Export today's entries to a CSV file
    Export {
        /// Output file path
        output: PathBuf,
    },

    /// Remove all of today's entries
    Reset {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = TillPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let storage = Storage::new(paths.clone())?;
    storage.load(&settings.barbers)?;

    match cli.command {
        None | Some(Commands::Tui) => {
            barbertill::tui::run_tui(&storage, &settings)?;
        }
        Some(Commands::Add {
            barber,
            amount,
            packets,
        }) => {
            handle_add_command(&storage, &barber, &amount, &packets)?;
        }
        Some(Commands::Summary) => {
            handle_summary_command(&storage, &settings)?;
        }
        Some(Commands::Export { output }) => {
            handle_export_command(&storage, &settings, &output)?;
        }
        Some(Commands::Reset { yes }) => {
            handle_reset_command(&storage, yes)?;
        }
        Some(Commands::Config) => {
            println!("barbertill Configuration");
            println!("========================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Ledger file:      {}", paths.ledger_file().display());
            println!();
            println!("Roster: {}", settings.barbers.join(", "));
            println!(
                "Split: {}% to the barber, surcharge {} per color packet",
                settings.split.barber_share_bp / 100,
                settings.split.packet_surcharge
            );
        }
    }

    Ok(())
}
