//! Trip display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Trip;

#[derive(Tabled)]
struct TripRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Participants")]
    participants: String,
    #[tabled(rename = "Created")]
    created: String,
    #[tabled(rename = "ID")]
    id: String,
}

/// Format a list of trips as a table
pub fn format_trip_list(trips: &[Trip], date_format: &str) -> String {
    if trips.is_empty() {
        return "No trips yet. Create one with 'trip trip create'.".to_string();
    }

    let rows = trips.iter().map(|trip| TripRow {
        name: trip.name.clone(),
        participants: trip.participants.len().to_string(),
        created: trip.created_at.format(date_format).to_string(),
        id: trip.id.to_string(),
    });

    let mut table = Table::new(rows);
    table.with(Style::sharp());
    table.to_string()
}

/// Format a single trip's details
pub fn format_trip_details(trip: &Trip, categories: &[String], expense_count: usize) -> String {
    let participants: Vec<&str> = trip.participants.iter().map(|p| p.as_str()).collect();

    let mut output = String::new();
    output.push_str(&format!("Trip: {}\n", trip.name));
    output.push_str(&format!("  ID:           {}\n", trip.id));
    output.push_str(&format!("  Participants: {}\n", participants.join(", ")));
    output.push_str(&format!("  Categories:   {}\n", categories.join(", ")));
    output.push_str(&format!("  Expenses:     {}\n", expense_count));
    output.push_str(&format!(
        "  Created:      {}\n",
        trip.created_at.format("%Y-%m-%d %H:%M")
    ));
    output
}
