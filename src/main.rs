use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use trip_splitter::cli::{
    handle_expense_command, handle_report_command, handle_trip_command, ExpenseCommands,
    ReportCommands, TripCommands,
};
use trip_splitter::config::paths::DATA_DIR_ENV;
use trip_splitter::config::{Settings, TripPaths};
use trip_splitter::logging;
use trip_splitter::storage::Storage;

#[derive(Parser)]
#[command(
    name = "trip",
    version,
    about = "Split shared trip expenses and work out who owes whom",
    long_about = "Trip Splitter records who paid for what on a group trip, shows \
                  spending per person and per category, and suggests the transfers \
                  that settle everyone up."
)]
struct Cli {
    /// Directory holding settings and trip data
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the data directory
    Init,

    /// Show current configuration and paths
    Config,

    /// Trip management commands
    #[command(subcommand)]
    Trip(TripCommands),

    /// Expense management commands
    #[command(subcommand, alias = "exp")]
    Expense(ExpenseCommands),

    #[command(flatten)]
    Report(ReportCommands),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    // Initialize paths and settings
    let paths = match cli.data_dir {
        Some(dir) => TripPaths::with_base_dir(dir),
        None => TripPaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;
    tracing::debug!(base_dir = %paths.base_dir().display(), "storage loaded");

    match cli.command {
        Some(Commands::Init) => {
            println!("Initializing trip splitter at: {}", paths.base_dir().display());
            settings.save(&paths)?;
            storage.save_all()?;
            println!("Initialization complete!");
            println!();
            println!(
                "Default categories: {}",
                settings.default_categories.join(", ")
            );
            println!();
            println!("Run 'trip trip create <name> --participants A,B,C' to start a trip.");
        }
        Some(Commands::Config) => {
            println!("Trip Splitter Configuration");
            println!("===========================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Initialized:      {}", paths.is_initialized());
            println!();
            println!("Settings:");
            println!("  Currency symbol:    {}", settings.currency_symbol);
            println!("  Date format:        {}", settings.date_format);
            println!(
                "  Default categories: {}",
                settings.default_categories.join(", ")
            );
        }
        Some(Commands::Trip(cmd)) => {
            handle_trip_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            handle_report_command(&storage, &settings, cmd)?;
        }
        None => {
            println!("Trip Splitter - split shared trip expenses");
            println!();
            println!("Run 'trip --help' for usage information.");
        }
    }

    Ok(())
}
