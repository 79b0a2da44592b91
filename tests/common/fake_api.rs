use std::collections::HashSet;
use std::future::Future;
use std::sync::{Mutex, MutexGuard};

use jiff::civil::date;
use reqwest::StatusCode;

use boxoffice::api::{ApiError, TicketingApi};
use boxoffice::error::Result;
use boxoffice::pricing::ticket_price;
use boxoffice::types::{
    ApiMessage, CreatedTicket, Movie, MovieId, NewTicket, Showtime, ShowtimeId, Ticket, TicketId,
    TicketUpdate,
};

/// Service operations the fake can record or fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    ListMovies,
    ListShowtimes,
    ListTickets,
    SearchTickets,
    CreateTicket,
    UpdateTicket,
    DeleteTicket,
}

/// Server-side data held by [`FakeApi`].
#[derive(Debug, Default)]
pub struct FakeState {
    pub movies: Vec<Movie>,
    pub showtimes: Vec<Showtime>,
    pub tickets: Vec<Ticket>,
    pub next_ticket_id: TicketId,
    pub failing: HashSet<Endpoint>,
    pub failing_showtimes_for: HashSet<MovieId>,
    pub calls: Vec<Endpoint>,
}

/// In-memory ticketing service with the same rules as the real one.
#[derive(Debug, Default)]
pub struct FakeApi {
    state: Mutex<FakeState>,
}

#[allow(dead_code)]
impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_movie(self, movie: Movie) -> Self {
        self.state().movies.push(movie);
        self
    }

    pub fn with_showtime(self, showtime: Showtime) -> Self {
        self.state().showtimes.push(showtime);
        self
    }

    pub fn with_ticket(self, ticket: Ticket) -> Self {
        {
            let mut state = self.state();
            state.next_ticket_id = state.next_ticket_id.max(ticket.id);
            state.tickets.push(ticket);
        }
        self
    }

    /// A catalog of two movies; movie 1 has showtimes 1 (3 seats) and
    /// 2 (0 seats), movie 2 has showtime 3 (1 seat).
    pub fn seeded() -> Self {
        Self::new()
            .with_movie(movie(1, "Oppenheimer"))
            .with_movie(movie(2, "Barbie"))
            .with_showtime(showtime(1, 1, 3))
            .with_showtime(showtime(2, 1, 0))
            .with_showtime(showtime(3, 2, 1))
    }

    pub fn state(&self) -> MutexGuard<'_, FakeState> {
        self.state.lock().unwrap()
    }

    pub fn fail(&self, endpoint: Endpoint) {
        self.state().failing.insert(endpoint);
    }

    pub fn recover(&self, endpoint: Endpoint) {
        self.state().failing.remove(&endpoint);
    }

    pub fn fail_showtimes_for(&self, movie_id: MovieId) {
        self.state().failing_showtimes_for.insert(movie_id);
    }

    pub fn calls(&self, endpoint: Endpoint) -> usize {
        self.state().calls.iter().filter(|c| **c == endpoint).count()
    }

    pub fn total_calls(&self) -> usize {
        self.state().calls.len()
    }

    pub fn seats(&self, showtime_id: ShowtimeId) -> Option<u32> {
        self.state()
            .showtimes
            .iter()
            .find(|s| s.id == showtime_id)
            .map(|s| s.available_seats)
    }

    /// Record the call and fail it if requested.
    fn enter(&self, endpoint: Endpoint) -> Result<MutexGuard<'_, FakeState>> {
        let mut state = self.state();
        state.calls.push(endpoint);
        if state.failing.contains(&endpoint) {
            return Err(ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "service unavailable").into());
        }
        Ok(state)
    }

    fn do_list_showtimes(&self, movie_id: MovieId) -> Result<Vec<Showtime>> {
        let state = self.enter(Endpoint::ListShowtimes)?;
        if state.failing_showtimes_for.contains(&movie_id) {
            return Err(ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "showtimes unavailable").into());
        }
        Ok(state
            .showtimes
            .iter()
            .filter(|s| s.movie_id == movie_id)
            .cloned()
            .collect())
    }

    fn do_search(&self, holder_name: &str) -> Result<Vec<Ticket>> {
        let state = self.enter(Endpoint::SearchTickets)?;
        if holder_name.is_empty() {
            return Ok(Vec::new());
        }
        let needle = holder_name.to_lowercase();
        Ok(state
            .tickets
            .iter()
            .filter(|t| t.holder_name.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    fn do_create(&self, request: &NewTicket) -> Result<CreatedTicket> {
        let mut state = self.enter(Endpoint::CreateTicket)?;
        let Some(showtime) = state
            .showtimes
            .iter_mut()
            .find(|s| s.id == request.showtime_id && s.available_seats > 0)
        else {
            return Err(ApiError::new(StatusCode::BAD_REQUEST, "No seats available.").into());
        };
        showtime.available_seats -= 1;

        state.next_ticket_id += 1;
        let id = state.next_ticket_id;
        state.tickets.push(Ticket {
            id,
            holder_name: request.holder_name.clone(),
            holder_age: request.holder_age,
            ticket_price: f64::from(ticket_price(request.holder_age)),
            theater_id: request.theater_id,
            showtime_id: request.showtime_id,
        });
        Ok(CreatedTicket {
            ticket_id: id,
            message: Some("Ticket purchased successfully".to_string()),
        })
    }

    fn do_update(&self, id: TicketId, update: &TicketUpdate) -> Result<ApiMessage> {
        let mut state = self.enter(Endpoint::UpdateTicket)?;
        let Some(ticket) = state.tickets.iter_mut().find(|t| t.id == id) else {
            return Err(ApiError::new(StatusCode::NOT_FOUND, "Ticket not found.").into());
        };
        if let Some(name) = &update.holder_name {
            ticket.holder_name = name.clone();
        }
        if let Some(age) = update.holder_age {
            ticket.holder_age = age;
            ticket.ticket_price = f64::from(ticket_price(age));
        }
        Ok(ApiMessage {
            message: "Ticket updated successfully.".to_string(),
        })
    }

    fn do_delete(&self, id: TicketId) -> Result<()> {
        let mut state = self.enter(Endpoint::DeleteTicket)?;
        let Some(index) = state.tickets.iter().position(|t| t.id == id) else {
            return Err(ApiError::new(StatusCode::NOT_FOUND, "Ticket not found.").into());
        };
        let ticket = state.tickets.remove(index);
        if let Some(showtime) = state
            .showtimes
            .iter_mut()
            .find(|s| s.id == ticket.showtime_id)
        {
            showtime.available_seats += 1;
        }
        Ok(())
    }
}

impl TicketingApi for FakeApi {
    fn list_movies(&self) -> impl Future<Output = Result<Vec<Movie>>> + Send {
        let result = self
            .enter(Endpoint::ListMovies)
            .map(|state| state.movies.clone());
        async move { result }
    }

    fn list_showtimes(
        &self,
        movie_id: MovieId,
    ) -> impl Future<Output = Result<Vec<Showtime>>> + Send {
        let result = self.do_list_showtimes(movie_id);
        async move { result }
    }

    fn list_tickets(&self) -> impl Future<Output = Result<Vec<Ticket>>> + Send {
        let result = self
            .enter(Endpoint::ListTickets)
            .map(|state| state.tickets.clone());
        async move { result }
    }

    fn search_tickets(
        &self,
        holder_name: &str,
    ) -> impl Future<Output = Result<Vec<Ticket>>> + Send {
        let result = self.do_search(holder_name);
        async move { result }
    }

    fn create_ticket(
        &self,
        ticket: &NewTicket,
    ) -> impl Future<Output = Result<CreatedTicket>> + Send {
        let result = self.do_create(ticket);
        async move { result }
    }

    fn update_ticket(
        &self,
        id: TicketId,
        update: &TicketUpdate,
    ) -> impl Future<Output = Result<ApiMessage>> + Send {
        let result = self.do_update(id, update);
        async move { result }
    }

    fn delete_ticket(&self, id: TicketId) -> impl Future<Output = Result<()>> + Send {
        let result = self.do_delete(id);
        async move { result }
    }
}

#[allow(dead_code)]
pub fn movie(id: MovieId, name: &str) -> Movie {
    Movie {
        id,
        name: name.to_string(),
        rating: "PG-13".to_string(),
        length: 120,
        release_date: date(2023, 7, 21),
    }
}

#[allow(dead_code)]
pub fn showtime(id: ShowtimeId, movie_id: MovieId, seats: u32) -> Showtime {
    Showtime {
        id,
        movie_id,
        theater_id: 1,
        date: date(2026, 10, 18),
        time: "19:30".to_string(),
        available_seats: seats,
    }
}

#[allow(dead_code)]
pub fn ticket(id: TicketId, name: &str, age: u32, showtime_id: ShowtimeId) -> Ticket {
    Ticket {
        id,
        holder_name: name.to_string(),
        holder_age: age,
        ticket_price: f64::from(ticket_price(age)),
        theater_id: 1,
        showtime_id,
    }
}
