//! Plain-text formatting helpers shared by tables and listings.

use crate::types::{Movie, Showtime};

/// Format a price as whole or fractional dollars.
///
/// ```
/// use boxoffice::display::format_price;
///
/// assert_eq!(format_price(15.0), "$15");
/// assert_eq!(format_price(12.5), "$12.50");
/// ```
pub fn format_price(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("${price:.0}")
    } else {
        format!("${price:.2}")
    }
}

/// "1 seat" / "3 seats"
pub fn format_seats(seats: u32) -> String {
    if seats == 1 {
        "1 seat".to_string()
    } else {
        format!("{seats} seats")
    }
}

/// One-line description of a showtime, as offered in the showtime selector.
pub fn format_showtime_option(showtime: &Showtime) -> String {
    format!(
        "{} - Available Seats: {}",
        showtime, showtime.available_seats
    )
}

/// "Barbie (PG-13)"
pub fn format_movie_title(movie: &Movie) -> String {
    format!("{} ({})", movie.name, movie.rating)
}
