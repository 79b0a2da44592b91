use owo_colors::OwoColorize;

use super::{format_movie_title, format_seats_colored, ticket_table};
use crate::store::{StoreState, TicketView};
use crate::types::MovieWithShowtimes;

/// Render the combined movies-and-showtimes listing.
pub fn format_listings(listings: &[MovieWithShowtimes]) -> String {
    if listings.is_empty() {
        return "No movies and showtimes available.".to_string();
    }

    let mut output = String::new();
    for (i, listing) in listings.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        let movie = &listing.movie;
        output.push_str(&format!("{}\n", format_movie_title(movie).bold()));
        output.push_str(&format!(
            "Length: {} minutes | Release Date: {}\n",
            movie.length, movie.release_date
        ));

        if listing.showtimes.is_empty() {
            output.push_str(&format!(
                "  {}\n",
                "No showtimes available for this movie.".dimmed()
            ));
            continue;
        }

        for showtime in &listing.showtimes {
            output.push_str(&format!(
                "  {} {} - Theater: {} | {}\n",
                format!("#{}", showtime.id).cyan(),
                showtime,
                showtime.theater_id,
                format_seats_colored(showtime.available_seats)
            ));
        }
    }
    output.trim_end().to_string()
}

/// Render the ticket listing for the current search state.
pub fn format_ticket_view(view: TicketView<'_>) -> String {
    match view {
        TicketView::All([]) => "No tickets purchased yet".dimmed().to_string(),
        TicketView::All(tickets) | TicketView::Filtered { tickets, .. } => ticket_table(tickets),
        TicketView::NoMatches { query, tickets } => {
            let notice = format!("No tickets found for \"{query}\"").yellow().to_string();
            if tickets.is_empty() {
                notice
            } else {
                format!("{}\n{}", ticket_table(tickets), notice)
            }
        }
    }
}

/// Summarize the current selection and purchase form.
pub fn format_selection(state: &StoreState) -> String {
    let form = state.purchase_form();

    let movie = match state.selected_movie() {
        Some(id) => state
            .catalog()
            .iter()
            .find(|m| m.id == id)
            .map(|m| format!("{} #{}", m.name, id))
            .unwrap_or_else(|| format!("#{id}")),
        None => "-".to_string(),
    };

    let showtime = match (form.showtime_id, state.selected_showtime()) {
        (Some(_), Some(s)) => format!("#{} {} ({})", s.id, s, format_seats_colored(s.available_seats)),
        (Some(id), None) => format!("#{id}"),
        (None, _) => "-".to_string(),
    };

    let holder = if form.holder_name.is_empty() {
        "-".to_string()
    } else {
        form.holder_name.clone()
    };
    let age = form
        .holder_age
        .map(|a| a.to_string())
        .unwrap_or_else(|| "-".to_string());
    let price = form.price.unwrap_or(0);

    format!(
        "{} {}\n{} {}\n{} {}\n{} {}\n{} ${}",
        "Movie:".cyan(),
        movie,
        "Showtime:".cyan(),
        showtime,
        "Holder:".cyan(),
        holder,
        "Age:".cyan(),
        age,
        "Ticket Price:".cyan(),
        price
    )
}
