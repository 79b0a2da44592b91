use owo_colors::OwoColorize;

pub mod cli_formatting;
pub mod data_formatting;
pub mod tables;

pub use cli_formatting::*;
pub use data_formatting::*;
pub use tables::*;

/// Seat count colored by availability: red when sold out, yellow when one is left.
pub fn format_seats_colored(seats: u32) -> String {
    let text = format_seats(seats);
    match seats {
        0 => text.red().to_string(),
        1 => text.yellow().to_string(),
        _ => text.green().to_string(),
    }
}
