//! Tabular listings of movies, showtimes and tickets.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::format_price;
use crate::types::{Movie, Showtime, Ticket};

#[derive(Tabled)]
struct MovieRow {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Rating")]
    rating: String,
    #[tabled(rename = "Length (min)")]
    length: u32,
    #[tabled(rename = "Release Date")]
    release_date: String,
}

#[derive(Tabled)]
struct ShowtimeRow {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Time")]
    time: String,
    #[tabled(rename = "Theater")]
    theater_id: u64,
    #[tabled(rename = "Seats")]
    seats: u32,
}

#[derive(Tabled)]
struct TicketRow {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "Holder Name")]
    holder_name: String,
    #[tabled(rename = "Holder Age")]
    holder_age: u32,
    #[tabled(rename = "Ticket Price")]
    price: String,
    #[tabled(rename = "Theater ID")]
    theater_id: u64,
    #[tabled(rename = "Showtime ID")]
    showtime_id: u64,
}

pub fn movie_table(movies: &[Movie]) -> String {
    let rows = movies.iter().map(|m| MovieRow {
        id: m.id,
        name: m.name.clone(),
        rating: m.rating.clone(),
        length: m.length,
        release_date: m.release_date.to_string(),
    });
    Table::new(rows).with(Style::rounded()).to_string()
}

pub fn showtime_table(showtimes: &[Showtime]) -> String {
    let rows = showtimes.iter().map(|s| ShowtimeRow {
        id: s.id,
        date: s.date.to_string(),
        time: s.time.clone(),
        theater_id: s.theater_id,
        seats: s.available_seats,
    });
    Table::new(rows).with(Style::rounded()).to_string()
}

pub fn ticket_table(tickets: &[Ticket]) -> String {
    let rows = tickets.iter().map(|t| TicketRow {
        id: t.id,
        holder_name: t.holder_name.clone(),
        holder_age: t.holder_age,
        price: format_price(t.ticket_price),
        theater_id: t.theater_id,
        showtime_id: t.showtime_id,
    });
    Table::new(rows).with(Style::rounded()).to_string()
}
