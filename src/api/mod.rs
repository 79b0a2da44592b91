//! Remote ticketing service access.
//!
//! The storefront talks to the service only through [`TicketingApi`], so the
//! controller can run against the HTTP client in production and against an
//! in-memory implementation in tests.

pub mod error;
pub mod http;

use std::future::Future;

use crate::error::Result;
use crate::types::{
    ApiMessage, CreatedTicket, Movie, MovieId, NewTicket, Showtime, Ticket, TicketId, TicketUpdate,
};

pub use error::ApiError;
pub use http::HttpTicketingApi;

/// Operations offered by the remote ticketing service.
pub trait TicketingApi: Send + Sync {
    /// `GET /api/movies`
    fn list_movies(&self) -> impl Future<Output = Result<Vec<Movie>>> + Send;

    /// `GET /api/showtimes?movie_id=<id>`
    fn list_showtimes(
        &self,
        movie_id: MovieId,
    ) -> impl Future<Output = Result<Vec<Showtime>>> + Send;

    /// `GET /api/tickets`
    fn list_tickets(&self) -> impl Future<Output = Result<Vec<Ticket>>> + Send;

    /// `GET /api/tickets/search?holder_name=<query>`
    fn search_tickets(
        &self,
        holder_name: &str,
    ) -> impl Future<Output = Result<Vec<Ticket>>> + Send;

    /// `POST /api/tickets`
    fn create_ticket(
        &self,
        ticket: &NewTicket,
    ) -> impl Future<Output = Result<CreatedTicket>> + Send;

    /// `PUT /api/tickets/update/<id>`
    fn update_ticket(
        &self,
        id: TicketId,
        update: &TicketUpdate,
    ) -> impl Future<Output = Result<ApiMessage>> + Send;

    /// `DELETE /api/tickets/<id>`
    fn delete_ticket(&self, id: TicketId) -> impl Future<Output = Result<()>> + Send;
}
