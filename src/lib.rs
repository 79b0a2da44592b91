pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod display;
pub mod error;
pub mod pricing;
pub mod store;
pub mod storefront;
pub mod types;
pub mod utils;

pub use api::{ApiError, HttpTicketingApi, TicketingApi};
pub use config::Config;
pub use error::{Action, BoxOfficeError, Result};
pub use pricing::{parse_age, ticket_price};
pub use store::{StoreState, TicketView};
pub use storefront::{Confirm, DeleteOutcome, PurchaseReceipt, Storefront};
pub use types::{
    Movie, MovieId, MovieWithShowtimes, Showtime, ShowtimeId, Ticket, TicketId, TicketUpdate,
};
