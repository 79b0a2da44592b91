//! Storefront state.
//!
//! [`StoreState`] owns every piece of client-side state: the movie catalog,
//! the showtimes offered for the selected movie, both entry forms, the ticket
//! list with its search results, and the combined movies-with-showtimes
//! listing. It performs no I/O; the controller feeds it API results and
//! applies [`CacheEffect`]s after successful writes.

pub mod cache;
pub mod forms;
pub mod search;

pub use cache::{CacheEffect, CachePolicy, Reconcile, SeatDelta};
pub use forms::{PurchaseDraft, PurchaseForm, UpdateForm};
pub use search::{TicketSearch, TicketView, filter_by_holder};

use crate::pricing::ticket_price;
use crate::types::{
    Movie, MovieId, MovieWithShowtimes, Showtime, ShowtimeId, Ticket, TicketId, TicketUpdate,
};

#[derive(Debug, Clone, Default)]
pub struct StoreState {
    catalog: Vec<Movie>,
    selected_movie: Option<MovieId>,
    showtimes: Vec<Showtime>,
    purchase: PurchaseForm,
    update: UpdateForm,
    tickets: Vec<Ticket>,
    search: TicketSearch,
    listings: Vec<MovieWithShowtimes>,
}

impl StoreState {
    pub fn new() -> Self {
        Self::default()
    }

    // Catalog and selection

    pub fn catalog(&self) -> &[Movie] {
        &self.catalog
    }

    pub fn set_catalog(&mut self, movies: Vec<Movie>) {
        self.catalog = movies;
    }

    pub fn selected_movie(&self) -> Option<MovieId> {
        self.selected_movie
    }

    pub fn select_movie(&mut self, movie_id: MovieId) {
        self.selected_movie = Some(movie_id);
    }

    /// Showtimes offered for the selected movie.
    pub fn showtimes(&self) -> &[Showtime] {
        &self.showtimes
    }

    pub fn set_showtimes(&mut self, showtimes: Vec<Showtime>) {
        self.showtimes = showtimes;
    }

    /// The selected showtime, if it is present in the cached showtime list.
    pub fn selected_showtime(&self) -> Option<&Showtime> {
        let id = self.purchase.showtime_id?;
        self.showtimes.iter().find(|s| s.id == id)
    }

    /// Seats to display for the current selection; `None` when the
    /// selection is missing from the cache.
    pub fn selected_seats(&self) -> Option<u32> {
        self.selected_showtime().map(|s| s.available_seats)
    }

    // Forms

    pub fn purchase_form(&self) -> &PurchaseForm {
        &self.purchase
    }

    pub fn purchase_form_mut(&mut self) -> &mut PurchaseForm {
        &mut self.purchase
    }

    pub fn update_form(&self) -> &UpdateForm {
        &self.update
    }

    pub fn update_form_mut(&mut self) -> &mut UpdateForm {
        &mut self.update
    }

    // Tickets

    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    /// Replace the ticket list with a fresh server copy; clears search results.
    pub fn set_tickets(&mut self, tickets: Vec<Ticket>) {
        self.tickets = tickets;
        self.search.clear();
    }

    pub fn find_ticket(&self, ticket_id: TicketId) -> Option<&Ticket> {
        self.tickets.iter().find(|t| t.id == ticket_id)
    }

    /// Apply a successful update to the cached ticket and to any search result.
    ///
    /// The price is recomputed only when a new age is given, so a name-only
    /// update keeps whatever price the ticket already had.
    pub fn patch_ticket(&mut self, ticket_id: TicketId, update: &TicketUpdate) -> usize {
        let patch = |ticket: &mut Ticket| {
            if let Some(name) = update.holder_name.as_ref().filter(|n| !n.is_empty()) {
                ticket.holder_name = name.clone();
            }
            if let Some(age) = update.holder_age {
                ticket.holder_age = age;
                ticket.ticket_price = f64::from(ticket_price(age));
            }
        };

        let mut patched = 0;
        for ticket in self.tickets.iter_mut().filter(|t| t.id == ticket_id) {
            patch(ticket);
            patched += 1;
        }
        if let Some(results) = self.search.results_mut() {
            for ticket in results.iter_mut().filter(|t| t.id == ticket_id) {
                patch(ticket);
                patched += 1;
            }
        }
        patched
    }

    pub fn search(&mut self, query: &str) {
        self.search.run(&self.tickets, query);
    }

    pub fn set_search_results(&mut self, query: &str, results: Vec<Ticket>) {
        self.search.set_results(query, results);
    }

    pub fn search_state(&self) -> &TicketSearch {
        &self.search
    }

    pub fn ticket_view(&self) -> TicketView<'_> {
        self.search.view(&self.tickets)
    }

    // Combined listing

    pub fn listings(&self) -> &[MovieWithShowtimes] {
        &self.listings
    }

    pub fn set_listings(&mut self, listings: Vec<MovieWithShowtimes>) {
        self.listings = listings;
    }

    /// Adjust a showtime's seat count in the combined listing.
    ///
    /// The selector showtimes are left as fetched. Returns how many listed
    /// entries were changed.
    pub fn adjust_seats(&mut self, showtime_id: ShowtimeId, delta: i64) -> usize {
        let mut adjusted = 0;
        let listed = self
            .listings
            .iter_mut()
            .flat_map(|listing| listing.showtimes.iter_mut());
        for showtime in listed.filter(|s| s.id == showtime_id) {
            showtime.adjust_seats(delta);
            adjusted += 1;
        }
        adjusted
    }

    /// Apply the local part of a cache effect and report what reconciliation is due.
    pub fn apply(&mut self, effect: CacheEffect) -> Reconcile {
        if let Some(SeatDelta { showtime_id, delta }) = effect.seats {
            let adjusted = self.adjust_seats(showtime_id, delta);
            tracing::debug!(showtime_id, delta, adjusted, "adjusted cached seat counts");
        }
        effect.reconcile
    }
}
