mod catalog;
mod config;
pub mod interactive;
mod price;
mod shell;
mod tickets;

pub use catalog::{cmd_listings, cmd_movies, cmd_showtimes};
pub use config::{cmd_config_get, cmd_config_set, cmd_config_show};
pub use price::cmd_price;
pub use shell::cmd_shell;
pub use tickets::{cmd_buy, cmd_delete, cmd_tickets, cmd_update};

use serde_json::Value;

use crate::api::HttpTicketingApi;
use crate::config::Config;
use crate::error::Result;
use crate::storefront::Storefront;

/// Output of a command: a JSON document plus an optional human rendering.
pub struct CommandOutput {
    json: Value,
    text: Option<String>,
}

impl CommandOutput {
    pub fn new(json: Value) -> Self {
        Self { json, text: None }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Print as JSON when requested, otherwise as text (falling back to JSON).
    pub fn print(self, json: bool) -> Result<()> {
        match self.text {
            Some(text) if !json => println!("{text}"),
            _ => println!("{}", serde_json::to_string_pretty(&self.json)?),
        }
        Ok(())
    }
}

/// Build a storefront against the configured ticketing service.
pub fn open_storefront() -> Result<Storefront<HttpTicketingApi>> {
    let config = Config::load()?;
    let api = HttpTicketingApi::from_config(&config)?;
    tracing::debug!(base_url = %api.base_url(), "opening storefront");
    Ok(Storefront::new(api).with_listing_concurrency(config.listing_concurrency))
}
