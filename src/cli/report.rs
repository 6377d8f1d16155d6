//! CLI commands for summaries, settlements and exports

use clap::{Subcommand, ValueEnum};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use crate::config::Settings;
use crate::display::{format_balances, format_settlements, format_totals};
use crate::error::{TripError, TripResult};
use crate::export::{export_balances_csv, export_expenses_csv, export_settlements_csv};
use crate::services::{SummaryService, TripService};
use crate::storage::{Storage, TripLedger};

/// What to export
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportKind {
    Expenses,
    Balances,
    Settlements,
}

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Show total spent, the category breakdown and net balances
    Summary {
        /// Trip name or ID
        trip: String,
    },

    /// Show who owes whom
    Settle {
        /// Trip name or ID
        trip: String,
    },

    /// Export trip data to CSV
    Export {
        /// Trip name or ID
        trip: String,

        /// Data to export
        #[arg(value_enum)]
        kind: ExportKind,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle report commands
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ReportCommands,
) -> TripResult<()> {
    let symbol = settings.currency_symbol.as_str();
    let trips = TripService::new(storage);
    let summaries = SummaryService::new(storage);

    match cmd {
        ReportCommands::Summary { trip } => {
            let trip = trips.require(&trip)?;
            let summary = summaries.summarize(trip.id)?;

            println!("{}", trip.name);
            println!();
            if !summary.has_expenses() {
                println!("No expenses yet. Add your first with 'trip expense add'.");
                return Ok(());
            }
            println!("{}", format_totals(&summary.aggregates, symbol));
            println!("Net balances");
            print!(
                "{}",
                format_balances(&summary.aggregates, &summary.balances, symbol)
            );
        }

        ReportCommands::Settle { trip } => {
            let trip = trips.require(&trip)?;
            let summary = summaries.summarize(trip.id)?;
            print!("{}", format_settlements(&summary.settlements, symbol));
        }

        ReportCommands::Export { trip, kind, output } => {
            let trip = trips.require(&trip)?;

            let mut writer: Box<dyn Write> = match &output {
                Some(path) => {
                    let file = File::create(path).map_err(|e| {
                        TripError::Export(format!(
                            "Failed to create file {}: {}",
                            path.display(),
                            e
                        ))
                    })?;
                    Box::new(BufWriter::new(file))
                }
                None => Box::new(io::stdout().lock()),
            };

            match kind {
                ExportKind::Expenses => {
                    let expenses = storage.list_expenses(trip.id)?;
                    export_expenses_csv(&expenses, &mut writer)?;
                }
                ExportKind::Balances => {
                    let summary = summaries.summarize(trip.id)?;
                    export_balances_csv(&summary.aggregates, &summary.balances, &mut writer)?;
                }
                ExportKind::Settlements => {
                    let summary = summaries.summarize(trip.id)?;
                    export_settlements_csv(&summary.settlements, &mut writer)?;
                }
            }
            writer.flush()?;

            if let Some(path) = output {
                eprintln!("Exported {:?} for '{}' to {}", kind, trip.name, path.display());
            }
        }
    }

    Ok(())
}
