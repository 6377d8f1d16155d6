//! Trip CLI commands
//!
//! Implements CLI commands for trip management.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_trip_details, format_trip_list};
use crate::error::TripResult;
use crate::models::Participant;
use crate::services::{ExpenseService, TripService};
use crate::storage::Storage;

/// Trip subcommands
#[derive(Subcommand)]
pub enum TripCommands {
    /// Create a new trip
    Create {
        /// Trip name
        name: String,
        /// Participants (comma-separated)
        #[arg(short, long, required = true, value_delimiter = ',')]
        participants: Vec<String>,
        /// Categories (comma-separated), defaults to the configured list
        #[arg(short, long, value_delimiter = ',')]
        categories: Vec<String>,
    },
    /// List all trips
    List,
    /// Show trip details
    Show {
        /// Trip name or ID
        trip: String,
    },
    /// List categories known to a trip
    Categories {
        /// Trip name or ID
        trip: String,
    },
    /// Delete a trip and all of its expenses
    Delete {
        /// Trip name or ID
        trip: String,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
}

/// Handle a trip command
pub fn handle_trip_command(
    storage: &Storage,
    settings: &Settings,
    cmd: TripCommands,
) -> TripResult<()> {
    let service = TripService::new(storage);

    match cmd {
        TripCommands::Create {
            name,
            participants,
            categories,
        } => {
            let participants: Vec<Participant> = participants
                .iter()
                .map(Participant::new)
                .filter(|p| !p.is_blank())
                .collect();
            let categories = if categories.iter().all(|c| c.trim().is_empty()) {
                settings.default_categories.clone()
            } else {
                categories
            };

            let trip = service.create(&name, participants, categories)?;
            println!("Created trip: {} ({})", trip.name, trip.id);
            println!(
                "Participants: {}",
                trip.participants
                    .iter()
                    .map(|p| p.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            );
        }

        TripCommands::List => {
            let trips = service.list()?;
            println!("{}", format_trip_list(&trips, &settings.date_format));
        }

        TripCommands::Show { trip } => {
            let trip = service.require(&trip)?;
            let categories = service.known_categories(&trip)?;
            let expense_count = ExpenseService::new(storage).list(trip.id)?.len();
            print!("{}", format_trip_details(&trip, &categories, expense_count));
        }

        TripCommands::Categories { trip } => {
            let trip = service.require(&trip)?;
            for category in service.known_categories(&trip)? {
                println!("{}", category);
            }
        }

        TripCommands::Delete { trip, force } => {
            let trip = service.require(&trip)?;

            if !force {
                println!("About to delete trip '{}' and all of its expenses", trip.name);
                println!("Use --force to confirm deletion");
                return Ok(());
            }

            let removed = service.delete(&trip)?;
            println!("Deleted trip '{}' ({} expenses removed)", trip.name, removed);
        }
    }

    Ok(())
}
