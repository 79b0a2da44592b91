//! The storefront controller.
//!
//! [`Storefront`] pairs a [`TicketingApi`] with the [`StoreState`] it keeps
//! in sync and exposes the user-level operations: browsing movies and
//! showtimes, buying, updating, deleting and searching tickets.
//!
//! Every operation is a one-shot request/response. Local precondition
//! failures return before any request is sent. Remote failures are logged
//! and returned as [`BoxOfficeError::ActionFailed`] with state untouched.

use futures::stream::{self, StreamExt, TryStreamExt};
use serde::Serialize;

use crate::api::TicketingApi;
use crate::error::{Action, BoxOfficeError, Result};
use crate::pricing::ticket_price;
use crate::store::{CacheEffect, CachePolicy, Reconcile, StoreState, TicketView};
use crate::types::{
    Movie, MovieId, MovieWithShowtimes, NewTicket, Showtime, ShowtimeId, Ticket, TicketId,
};

/// Default number of showtime requests in flight while building the listing.
pub const DEFAULT_LISTING_CONCURRENCY: usize = 8;

/// A blocking yes/no prompt.
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> Result<bool>;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> Result<bool>,
{
    fn confirm(&self, prompt: &str) -> Result<bool> {
        self(prompt)
    }
}

/// Details of a completed purchase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PurchaseReceipt {
    pub ticket_id: TicketId,
    pub showtime_id: ShowtimeId,
    pub holder_name: String,
    pub holder_age: u32,
    pub price: u32,
}

/// Result of a delete request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum DeleteOutcome {
    Cancelled,
    Deleted {
        ticket_id: TicketId,
        showtime_id: ShowtimeId,
        /// False when the follow-up ticket refetch failed
        tickets_refreshed: bool,
    },
}

pub struct Storefront<A> {
    api: A,
    state: StoreState,
    listing_concurrency: usize,
}

/// Log a remote failure and wrap it for the user.
fn fail(action: Action, error: BoxOfficeError) -> BoxOfficeError {
    tracing::error!(%action, error = %error, "storefront action failed");
    BoxOfficeError::action_failed(action, error)
}

impl<A: TicketingApi> Storefront<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: StoreState::new(),
            listing_concurrency: DEFAULT_LISTING_CONCURRENCY,
        }
    }

    /// Bound the number of concurrent showtime requests (at least 1).
    pub fn with_listing_concurrency(mut self, limit: usize) -> Self {
        self.listing_concurrency = limit.max(1);
        self
    }

    pub fn state(&self) -> &StoreState {
        &self.state
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Initial page load: catalog, combined listing and tickets.
    ///
    /// Each load is independent; failures are collected rather than
    /// stopping the others.
    pub async fn initialize(&mut self) -> Vec<BoxOfficeError> {
        let mut errors = Vec::new();
        if let Err(e) = self.load_movies().await {
            errors.push(e);
        }
        if let Err(e) = self.load_listings().await {
            errors.push(e);
        }
        if let Err(e) = self.load_tickets().await {
            errors.push(e);
        }
        errors
    }

    /// Fetch the movie catalog. On failure the previous catalog is kept.
    pub async fn load_movies(&mut self) -> Result<&[Movie]> {
        let movies = self
            .api
            .list_movies()
            .await
            .map_err(|e| fail(Action::LoadMovies, e))?;
        tracing::debug!(count = movies.len(), "loaded movie catalog");
        self.state.set_catalog(movies);
        Ok(self.state.catalog())
    }

    /// Select a movie and load its showtimes.
    ///
    /// The selected showtime and price are left as they are.
    pub async fn select_movie(&mut self, movie_id: MovieId) -> Result<&[Showtime]> {
        self.state.select_movie(movie_id);
        let showtimes = self
            .api
            .list_showtimes(movie_id)
            .await
            .map_err(|e| fail(Action::LoadShowtimes, e))?;
        tracing::debug!(movie_id, count = showtimes.len(), "loaded showtimes");
        self.state.set_showtimes(showtimes);
        Ok(self.state.showtimes())
    }

    /// Record the chosen showtime; returns its cached seat count if known.
    pub fn select_showtime(&mut self, showtime_id: ShowtimeId) -> Option<u32> {
        self.state.purchase_form_mut().select_showtime(showtime_id);
        self.state.selected_seats()
    }

    pub fn set_holder_name(&mut self, name: impl Into<String>) {
        self.state.purchase_form_mut().set_holder_name(name);
    }

    /// Record the holder's age input; returns the resulting price.
    pub fn enter_holder_age(&mut self, input: &str) -> u32 {
        self.state.purchase_form_mut().enter_age(input)
    }

    /// Buy a ticket for the selected showtime.
    pub async fn purchase(&mut self) -> Result<PurchaseReceipt> {
        let draft = self
            .state
            .purchase_form()
            .draft()
            .ok_or(BoxOfficeError::IncompletePurchase)?;

        let showtime = self
            .state
            .selected_showtime()
            .filter(|s| s.available_seats > 0)
            .ok_or(BoxOfficeError::NoSeatsAvailable(draft.showtime_id))?;

        let request = NewTicket {
            holder_name: draft.holder_name.to_string(),
            holder_age: draft.holder_age,
            theater_id: showtime.theater_id,
            showtime_id: draft.showtime_id,
        };

        let created = self
            .api
            .create_ticket(&request)
            .await
            .map_err(|e| fail(Action::Purchase, e))?;
        tracing::info!(
            ticket_id = created.ticket_id,
            showtime_id = request.showtime_id,
            "ticket purchased"
        );

        self.apply_effect(CachePolicy::after_purchase(request.showtime_id))
            .await;
        self.state.purchase_form_mut().clear();

        Ok(PurchaseReceipt {
            ticket_id: created.ticket_id,
            showtime_id: request.showtime_id,
            price: ticket_price(request.holder_age),
            holder_name: request.holder_name,
            holder_age: request.holder_age,
        })
    }

    /// Fetch the full ticket list, replacing the cached one and clearing search results.
    pub async fn load_tickets(&mut self) -> Result<&[Ticket]> {
        let tickets = self
            .api
            .list_tickets()
            .await
            .map_err(|e| fail(Action::LoadTickets, e))?;
        tracing::debug!(count = tickets.len(), "loaded tickets");
        self.state.set_tickets(tickets);
        Ok(self.state.tickets())
    }

    /// Delete a ticket after confirmation.
    ///
    /// The ticket must be in the cached ticket list, which supplies the
    /// showtime whose seat is returned.
    pub async fn delete_ticket<C>(&mut self, ticket_id: TicketId, confirm: &C) -> Result<DeleteOutcome>
    where
        C: Confirm + ?Sized,
    {
        if !confirm.confirm(&format!("Delete ticket {ticket_id}"))? {
            return Ok(DeleteOutcome::Cancelled);
        }

        let showtime_id = self
            .state
            .find_ticket(ticket_id)
            .map(|t| t.showtime_id)
            .ok_or(BoxOfficeError::TicketNotFound(ticket_id))?;

        self.api
            .delete_ticket(ticket_id)
            .await
            .map_err(|e| fail(Action::Delete, e))?;
        tracing::info!(ticket_id, showtime_id, "ticket deleted");

        let tickets_refreshed = self
            .apply_effect(CachePolicy::after_delete(showtime_id))
            .await;

        Ok(DeleteOutcome::Deleted {
            ticket_id,
            showtime_id,
            tickets_refreshed,
        })
    }

    pub fn set_update_ticket_id(&mut self, ticket_id: TicketId) {
        self.state.update_form_mut().set_ticket_id(ticket_id);
    }

    pub fn set_update_holder_name(&mut self, name: impl Into<String>) {
        self.state.update_form_mut().set_holder_name(name);
    }

    pub fn enter_update_age(&mut self, input: &str) {
        self.state.update_form_mut().enter_age(input);
    }

    /// Send the update form; returns the service's confirmation message.
    pub async fn update_ticket(&mut self) -> Result<String> {
        let (ticket_id, update) = self
            .state
            .update_form()
            .request()
            .ok_or(BoxOfficeError::IncompleteUpdate)?;

        let response = self
            .api
            .update_ticket(ticket_id, &update)
            .await
            .map_err(|e| fail(Action::Update, e))?;
        tracing::info!(ticket_id, "ticket updated");

        let patched = self.state.patch_ticket(ticket_id, &update);
        if patched == 0 {
            tracing::debug!(ticket_id, "updated ticket is not in the local cache");
        }
        self.apply_effect(CachePolicy::after_update()).await;
        self.state.update_form_mut().clear();

        Ok(response.message)
    }

    /// Filter the cached tickets by holder name.
    pub fn search(&mut self, query: &str) -> TicketView<'_> {
        self.state.search(query);
        self.state.ticket_view()
    }

    /// Ask the service to search by holder name instead of filtering locally.
    pub async fn search_remote(&mut self, query: &str) -> Result<TicketView<'_>> {
        if query.trim().is_empty() {
            self.state.search(query);
            return Ok(self.state.ticket_view());
        }

        let results = self
            .api
            .search_tickets(query.trim())
            .await
            .map_err(|e| fail(Action::SearchTickets, e))?;
        self.state.set_search_results(query, results);
        Ok(self.state.ticket_view())
    }

    /// Rebuild the combined movies-with-showtimes listing.
    ///
    /// Showtimes are fetched concurrently, up to the configured bound. The
    /// listing is replaced only when every fetch succeeded; the first
    /// failure aborts the load and leaves the previous listing in place.
    pub async fn load_listings(&mut self) -> Result<&[MovieWithShowtimes]> {
        let api = &self.api;
        let movies = api
            .list_movies()
            .await
            .map_err(|e| fail(Action::LoadListings, e))?;

        let listings: Vec<MovieWithShowtimes> = stream::iter(movies)
            .map(move |movie| async move {
                let showtimes = api.list_showtimes(movie.id).await?;
                Ok::<_, BoxOfficeError>(MovieWithShowtimes { movie, showtimes })
            })
            .buffered(self.listing_concurrency)
            .try_collect()
            .await
            .map_err(|e| fail(Action::LoadListings, e))?;

        tracing::debug!(movies = listings.len(), "loaded combined listing");
        self.state.set_listings(listings);
        Ok(self.state.listings())
    }

    /// Apply a write's cache effect, refetching tickets when the policy asks.
    ///
    /// Returns false only when a required refetch failed.
    async fn apply_effect(&mut self, effect: CacheEffect) -> bool {
        match self.state.apply(effect) {
            Reconcile::Keep => true,
            Reconcile::RefetchTickets => match self.load_tickets().await {
                Ok(_) => true,
                Err(e) => {
                    tracing::warn!(error = %e, "ticket refetch failed; cached list may be stale");
                    false
                }
            },
        }
    }
}
